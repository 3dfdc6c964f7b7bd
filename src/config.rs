//! Run configuration
//!
//! The parsed command line, independent of how it was parsed.

use std::io::{self, Write};
use crate::matcher::escape_pattern;
use crate::trace::Tracer;
use crate::verdict::{Expectations, DEFAULT_RETURN_CODE_PATTERN, DEFAULT_STDERR_PATTERN};

/// Configuration for a single tcmd run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Shell command under test
    pub command: String,
    /// Expected stdout pattern
    pub regex: String,
    /// Expected stderr pattern
    pub stderr_pattern: String,
    /// Expected exit code pattern
    pub return_code_pattern: String,
    /// Invert the stdout outcome
    pub negate: bool,
    /// Appended to the headline as ` # <comment>`
    pub comment: Option<String>,
    /// Compare stdin instead of the command's stdout
    pub stdin: bool,
    /// Print the expected/actual block even on Pass
    pub verbose: bool,
    /// Report elapsed time
    pub timer: bool,
    /// Escape regex metacharacters in `regex`
    pub backslash: bool,
    /// Headline only
    pub min: bool,
    /// Debug tracing
    pub debug: bool,
    /// The full tcmd invocation, for the verbose block
    pub command_line: String,
}

impl RunConfig {
    /// Config with default expectations for `command` and stdout `regex`.
    pub fn new(command: impl Into<String>, regex: impl Into<String>) -> Self {
        let command = command.into();
        let regex = regex.into();
        let command_line = command_line(&[command.clone(), regex.clone()]);
        Self {
            command,
            regex,
            stderr_pattern: DEFAULT_STDERR_PATTERN.into(),
            return_code_pattern: DEFAULT_RETURN_CODE_PATTERN.into(),
            negate: false,
            comment: None,
            stdin: false,
            verbose: false,
            timer: false,
            backslash: false,
            min: false,
            debug: false,
            command_line,
        }
    }

    /// The expectations this config describes; `--backslash` escapes the
    /// stdout pattern only.
    pub fn expectations(&self) -> Expectations {
        let stdout = if self.backslash {
            escape_pattern(&self.regex)
        } else {
            self.regex.clone()
        };
        Expectations {
            stdout,
            negate: self.negate,
            stderr: self.stderr_pattern.clone(),
            exit_code: self.return_code_pattern.clone(),
        }
    }

    /// Command as shown in report lines
    pub fn display_command(&self) -> String {
        if self.stdin {
            format!("<stdin> {}", self.command)
        } else {
            self.command.clone()
        }
    }

    pub fn tracer(&self) -> Tracer {
        Tracer::new(self.debug)
    }

    /// Dump the effective options to the debug trace.
    pub fn trace(&self, tracer: &Tracer, out: &mut dyn Write) -> io::Result<()> {
        if !tracer.is_enabled() {
            return Ok(());
        }
        tracer.line(out, format!("      regex: [{}]", self.regex))?;
        tracer.line(out, format!("        cmd: [{}]", self.command))?;
        tracer.separator(out)?;
        tracer.line(out, format!("      error: [{}]", self.stderr_pattern))?;
        tracer.line(out, format!("return_code: [{}]", self.return_code_pattern))?;
        tracer.line(out, format!("    verbose: [{}]", self.verbose))?;
        tracer.line(out, format!("        dbg: [{}]", self.debug))?;
        tracer.line(out, format!("     negate: [{}]", self.negate))?;
        tracer.line(out, format!("      stdin: [{}]", self.stdin))?;
        tracer.line(out, format!("    comment: [{}]", self.comment.as_deref().unwrap_or("")))?;
        tracer.line(out, format!("      timer: [{}]", self.timer))?;
        tracer.line(out, format!("        min: [{}]", self.min))?;
        tracer.line(out, format!("  backslash: [{}]", self.backslash))?;
        tracer.separator(out)
    }
}

/// Rebuild the invocation from its arguments (program name excluded).
pub fn command_line(args: &[String]) -> String {
    let mut line = String::from("tcmd");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
