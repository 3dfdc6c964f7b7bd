//! One tcmd invocation: run, evaluate, report.

use std::io::{Read, Write};
use std::time::Instant;
use crate::config::RunConfig;
use crate::error::TcmdError;
use crate::report::{write_elapsed, Report};
use crate::runner::{read_piped_stdout, CommandRunner};
use crate::verdict::{evaluate, Verdict};

/// Run the configured command with `runner`, check it, and write the report
/// to `out`.
///
/// In stdin mode the command still runs (for stderr and the exit code) but
/// its stdout is replaced by whatever `stdin` holds.
pub fn run(
    config: &RunConfig,
    runner: &dyn CommandRunner,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
) -> Result<Verdict, TcmdError> {
    let tracer = config.tracer();
    let start = Instant::now();
    if config.timer {
        tracer.line(out, "timer started")?;
    }

    let expectations = config.expectations();
    config.trace(&tracer, out)?;

    let mut captured = runner.run(&config.command)?;
    tracer.line(out, format!("cmd_return: [{}]", captured.exit_code))?;
    tracer.value(out, "cmd_stderr", &captured.stderr)?;
    tracer.value(out, "cmd_stdout", &captured.stdout)?;
    tracer.separator(out)?;

    if config.stdin {
        captured.stdout = read_piped_stdout(stdin)?;
        tracer.value(out, "stdin->cmd_stdout", &captured.stdout)?;
    }

    let evaluation = evaluate(&captured, &expectations)?;
    for check in evaluation.checks() {
        tracer.check(out, check)?;
    }
    tracer.separator(out)?;

    let command = config.display_command();
    let report = Report {
        command: &command,
        command_line: &config.command_line,
        comment: config.comment.as_deref(),
        captured: &captured,
        evaluation: &evaluation,
    };
    writeln!(out, "{}", report.headline())?;

    if !config.min {
        // a failure always gets the detail block
        if config.verbose || !evaluation.verdict.is_pass() {
            report.write_verbose(out)?;
        }
        if config.timer {
            write_elapsed(out, start.elapsed())?;
        }
    }

    Ok(evaluation.verdict)
}
