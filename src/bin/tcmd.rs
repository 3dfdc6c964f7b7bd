//! tcmd CLI
//!
//! Test a command's stdout, stderr and exit status against regular expressions.

use anyhow::Context;
use clap::builder::FalseyValueParser;
use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::process::ExitCode;
use emx_tcmd::{
    command_line, indent, RunConfig, ShellRunner, Verdict,
    DEFAULT_RETURN_CODE_PATTERN, DEFAULT_STDERR_PATTERN, REPORT_INDENT,
};

const AFTER_HELP: &str = "\
Examples:
  tcmd date 2018          ... same as: date | grep -i 2018

  tcmd -c \"date test\" date 2018
                          ... date | grep -i 2018 with a comment added to Pass/Fail lines

  date | tcmd -s -c \"cmd=date via --stdin\" : 2018
                          ... same as above, using stdin; ':' still runs for stderr and return code

  tcmd -n date 2016       ... date | grep -v 2016 (negated regex test passes)

  tcmd -d 'cat /etc/hosts' '#|localhost'
                          ... cat /etc/hosts | egrep -i '#|localhost'

  tcmd -v \"touch myfile; test -f myfile && rm -f myfile\" \"\"
                          ... string several commands together with ';', && or ||

  OUT=$(tcmd ping -c 2 localhost); RET=$?
                          ... capture only Pass (0) or Fail (1) without printing the report

Notes:
  1. Use \"\", \"^$\" or \"\\A\\z\" as regex to expect empty (or whitespace only) output
  2. Matching is a case-insensitive search; '.' matches newlines and '^'/'$' match
     at every line
  3. The return code is matched as text: the default '0' also matches 10; use '^0$'
  4. Regex metacharacters (\\ . ^ $ [] | () * + ?) must be backslashed to match
     literally, e.g. tcmd 'echo \"add x+y\"' 'add x\\+y', or use --backslash";

#[derive(Parser, Debug)]
#[command(name = "tcmd")]
#[command(version)]
#[command(about = "Test a command's output against a regular expression")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Command to execute (run with `sh -c`)
    cmd: Option<String>,

    /// Regular expression expected in the command's stdout
    regex: Option<String>,

    /// Turn debug output on
    #[arg(short = 'd', long = "dbg", env = "TCMD_DBG", value_parser = FalseyValueParser::new())]
    dbg: bool,

    /// Stderr compared to regex
    #[arg(short = 'e', long = "error", value_name = "text", default_value = DEFAULT_STDERR_PATTERN)]
    error: String,

    /// Opposite (negate) regex operator like grep -v
    #[arg(short = 'n', long)]
    negate: bool,

    /// Add a comment to Pass/Fail lines
    #[arg(short = 'c', long, value_name = "text")]
    comment: Option<String>,

    /// Compare stdin instead of the command's stdout
    #[arg(short = 's', long)]
    stdin: bool,

    /// The return status compared to regex
    #[arg(short = 'r', long = "return_code", value_name = "text", default_value = DEFAULT_RETURN_CODE_PATTERN)]
    return_code: String,

    /// Turn verbose output on
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Report execution time in seconds
    #[arg(short = 't', long)]
    timer: bool,

    /// Backslash all regex metachars in the stdout regex
    #[arg(short = 'b', long)]
    backslash: bool,

    /// Print only the one line Pass or Fail (debug output still prints)
    #[arg(short = 'm', long)]
    min: bool,
}

impl Cli {
    fn into_config(self, command: String, regex: String, command_line: String) -> RunConfig {
        RunConfig {
            command,
            regex,
            stderr_pattern: self.error,
            return_code_pattern: self.return_code,
            negate: self.negate,
            comment: self.comment,
            stdin: self.stdin,
            verbose: self.verbose,
            timer: self.timer,
            backslash: self.backslash,
            min: self.min,
            debug: self.dbg,
            command_line,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    if cli.dbg {
        println!("{}", indent(&format!("DBG: len(argv): {}", args.len()), REPORT_INDENT));
    }

    let (Some(cmd), Some(regex)) = (cli.cmd.clone(), cli.regex.clone()) else {
        let _ = Cli::command().print_help();
        println!();
        return ExitCode::FAILURE;
    };

    let config = cli.into_config(cmd, regex, command_line(args.get(1..).unwrap_or_default()));

    match execute(&config) {
        Ok(Verdict::Pass) => ExitCode::SUCCESS,
        Ok(Verdict::Fail(_)) => ExitCode::FAILURE,
        Err(e) => {
            report_internal_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn execute(config: &RunConfig) -> anyhow::Result<Verdict> {
    let runner = ShellRunner::new().with_null_stdin(config.stdin);
    let mut stdin = io::stdin().lock();
    let mut out = io::stdout().lock();

    let verdict = emx_tcmd::run(config, &runner, &mut stdin, &mut out)
        .with_context(|| format!("testing cmd [{}]", config.command))?;
    out.flush().context("flushing report")?;
    Ok(verdict)
}

fn report_internal_error(err: &anyhow::Error) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "Fail: There was an error during execution");
    let _ = writeln!(out, "{}", indent(&format!("{:?}", err), REPORT_INDENT));
    let _ = out.flush();
}
