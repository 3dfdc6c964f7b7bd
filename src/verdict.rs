//! Verdict engine
//!
//! Matches the three captured streams against their expectations and folds
//! the outcomes into one Pass/Fail verdict. Evaluation is pure: it neither
//! prints nor traces, the caller decides what to report.

use std::fmt;
use crate::error::TcmdError;
use crate::matcher::{MatchOutcome, Pattern};
use crate::runner::CapturedResult;

/// Default stderr expectation: nothing on stderr.
pub const DEFAULT_STDERR_PATTERN: &str = "^$";

/// Default exit code expectation.
///
/// Unanchored, so it also accepts 10, 20, 100, ...; `^0$` is the strict form.
pub const DEFAULT_RETURN_CODE_PATTERN: &str = "0";

/// What the caller expects of each stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectations {
    /// Pattern searched in stdout
    pub stdout: String,
    /// Invert the stdout outcome (`grep -v`)
    pub negate: bool,
    /// Pattern searched in stderr
    pub stderr: String,
    /// Pattern searched in the exit code rendered as decimal text
    pub exit_code: String,
}

impl Expectations {
    /// Expect `stdout` on stdout, a blank stderr and exit code 0.
    pub fn new(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            stdout: String::new(),
            negate: false,
            stderr: DEFAULT_STDERR_PATTERN.into(),
            exit_code: DEFAULT_RETURN_CODE_PATTERN.into(),
        }
    }
}

/// One of the three checked streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
    ReturnCode,
}

impl Stream {
    /// Label used in report lines
    pub fn label(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
            Stream::ReturnCode => "return code",
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The single outcome of one invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Carries the first stream that did not match
    Fail(Stream),
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        self == Verdict::Pass
    }
}

/// Result of checking one stream
#[derive(Debug, Clone)]
pub struct StreamCheck {
    pub stream: Stream,
    pub pattern: Pattern,
    /// Outcome after negation (stdout only)
    pub outcome: MatchOutcome,
    /// Text the pattern found, before negation
    pub found: Option<String>,
    /// Whether the outcome was flipped by `negate`
    pub negated: bool,
}

impl StreamCheck {
    fn run(stream: Stream, pattern: Pattern, observed: &str, negate: bool) -> Self {
        let found = pattern.find(observed).map(str::to_string);
        let mut outcome = MatchOutcome::from_bool(found.is_some());
        if negate {
            outcome = outcome.negate();
        }
        Self { stream, pattern, outcome, found, negated: negate }
    }
}

/// All three stream checks and the verdict they produce
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub stdout: StreamCheck,
    pub stderr: StreamCheck,
    pub exit_code: StreamCheck,
}

impl Evaluation {
    /// The checks in priority order: stdout, stderr, return code.
    pub fn checks(&self) -> [&StreamCheck; 3] {
        [&self.stdout, &self.stderr, &self.exit_code]
    }

    /// The check for the given stream
    pub fn check(&self, stream: Stream) -> &StreamCheck {
        match stream {
            Stream::Stdout => &self.stdout,
            Stream::Stderr => &self.stderr,
            Stream::ReturnCode => &self.exit_code,
        }
    }
}

/// Check all three streams of `captured` against `expect`.
///
/// Only an invalid pattern is an error. Negation applies to stdout only.
pub fn evaluate(captured: &CapturedResult, expect: &Expectations) -> Result<Evaluation, TcmdError> {
    let stdout_pattern = Pattern::new(expect.stdout.as_str())?;
    let stderr_pattern = Pattern::new(expect.stderr.as_str())?;
    let exit_pattern = Pattern::new(expect.exit_code.as_str())?;

    let stdout = StreamCheck::run(Stream::Stdout, stdout_pattern, &captured.stdout, expect.negate);
    let stderr = StreamCheck::run(Stream::Stderr, stderr_pattern, &captured.stderr, false);
    let exit_code = StreamCheck::run(
        Stream::ReturnCode,
        exit_pattern,
        &captured.exit_code.to_string(),
        false,
    );

    let verdict = [&stdout, &stderr, &exit_code]
        .iter()
        .find(|c| !c.outcome.is_matched())
        .map_or(Verdict::Pass, |c| Verdict::Fail(c.stream));

    Ok(Evaluation { verdict, stdout, stderr, exit_code })
}
