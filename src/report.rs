//! Report rendering
//!
//! One headline per run, always:
//!
//! ```text
//! Pass: cmd [printf 2018]; regex [2018]
//! Fail: cmd [printf 2016] stdout does *NOT* match regEx [2018] # my comment
//! ```
//!
//! followed, on failure or with `-v`, by a block of expected vs. actual
//! values for every stream, and with `-t` by the elapsed time.

use std::io::{self, Write};
use std::time::Duration;
use crate::runner::CapturedResult;
use crate::text::{is_single_line, write_indented, write_labeled};
use crate::verdict::{Evaluation, Stream, Verdict};

/// Indent for multi-line actual values in the verbose block
const VALUE_BLOCK_INDENT: usize = 10;

/// Everything needed to describe one run
pub struct Report<'a> {
    /// Command as shown in the headline (`<stdin> ` prefixed in stdin mode)
    pub command: &'a str,
    /// The full tcmd invocation, echoed in the verbose block
    pub command_line: &'a str,
    pub comment: Option<&'a str>,
    pub captured: &'a CapturedResult,
    pub evaluation: &'a Evaluation,
}

impl Report<'_> {
    /// Stdout pattern as displayed, `<negate> ` prefixed when negated
    pub fn stdout_display(&self) -> String {
        let check = &self.evaluation.stdout;
        if check.negated {
            format!("<negate> {}", check.pattern.as_str())
        } else {
            check.pattern.as_str().to_string()
        }
    }

    fn pattern_display(&self, stream: Stream) -> String {
        match stream {
            Stream::Stdout => self.stdout_display(),
            _ => self.evaluation.check(stream).pattern.as_str().to_string(),
        }
    }

    fn comment_suffix(&self) -> String {
        match self.comment {
            Some(c) if !c.is_empty() => format!(" # {}", c),
            _ => String::new(),
        }
    }

    /// The Pass/Fail line
    pub fn headline(&self) -> String {
        match self.evaluation.verdict {
            Verdict::Pass => format!(
                "Pass: cmd [{}]; regex [{}]{}",
                self.command,
                self.stdout_display(),
                self.comment_suffix(),
            ),
            Verdict::Fail(stream) => format!(
                "Fail: cmd [{}] {} does *NOT* match regEx [{}]{}",
                self.command,
                stream.label(),
                self.pattern_display(stream),
                self.comment_suffix(),
            ),
        }
    }

    /// Expected vs. actual for return code, stderr and stdout.
    pub fn write_verbose(&self, out: &mut dyn Write) -> io::Result<()> {
        let captured = self.captured;
        let stderr_pattern = self.pattern_display(Stream::Stderr);

        write_indented(out, "")?;
        write_indented(out, &format!("          cmd: [{}]", self.command_line))?;
        write_indented(out, "")?;
        write_indented(out, &format!(
            "actual_return: [{}] expect_return: [{}]",
            captured.exit_code,
            self.pattern_display(Stream::ReturnCode),
        ))?;

        if is_single_line(&captured.stderr) {
            write_indented(out, &format!(
                "actual_stderr: [{}]  expect_stderr: [{}]",
                captured.stderr, stderr_pattern,
            ))?;
        } else {
            write_indented(out, "")?;
            write_indented(out, &format!("expect_stderr: [{}]", stderr_pattern))?;
            write_labeled(out, "actual_stderr", &captured.stderr, VALUE_BLOCK_INDENT)?;
        }

        write_indented(out, "")?;
        write_indented(out, &format!("expect_stdout: [{}]", self.stdout_display()))?;
        write_labeled(out, "actual_stdout", &captured.stdout, VALUE_BLOCK_INDENT)
    }
}

/// `---` then the elapsed wall-clock time in seconds
pub fn write_elapsed(out: &mut dyn Write, elapsed: Duration) -> io::Result<()> {
    write_indented(out, "---")?;
    write_indented(out, &format!("Elapsed Time: {:.6}s", elapsed.as_secs_f64()))
}
