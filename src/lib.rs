//! emx-tcmd: test a shell command's output against regular expressions
//!
//! `tcmd` runs one command through `sh -c`, then checks its stdout, stderr
//! and exit status, each against its own pattern. It replaces the usual
//! `cmd | grep -i pattern && ...` chains in shell tests and runbooks.
//!
//! # Usage
//!
//! ```text
//! tcmd [options] cmd regex
//!
//! tcmd date 2018                  # date | grep -i 2018
//! tcmd -n date 2016               # date | grep -v 2016
//! tcmd -r 127 -e 'not found' dat ''
//! date | tcmd -s : 2018           # compare stdin instead
//! ```
//!
//! # Matching rules
//!
//! | Pattern | Meaning |
//! |---------|---------|
//! | `""`, `^$`, `\A\z` | stream is empty or whitespace only |
//! | anything else | case-insensitive search; `.` spans lines, `^`/`$` are per line |
//!
//! Defaults: stderr must be blank, exit code must match `0`. The exit code
//! is matched as text, so the default also accepts `10`; use `-r '^0$'`
//! to be strict.
//!
//! # Output
//!
//! ```text
//! Pass: cmd [printf 2018]; regex [2018]
//! Fail: cmd [printf 2016] stdout does *NOT* match regEx [2018]
//! ```
//!
//! The process exits 0 on Pass and 1 on Fail.

mod app;
mod config;
mod error;
mod matcher;
mod report;
mod runner;
mod text;
mod trace;
mod verdict;

pub use app::run;
pub use config::{RunConfig, command_line};
pub use error::{TcmdError, ErrorKind};
pub use matcher::{Pattern, MatchOutcome};
pub use runner::{CapturedResult, CommandRunner, ShellRunner};
pub use text::{indent, REPORT_INDENT};
pub use verdict::{
    evaluate, Evaluation, Expectations, Stream, StreamCheck, Verdict,
    DEFAULT_RETURN_CODE_PATTERN, DEFAULT_STDERR_PATTERN,
};
