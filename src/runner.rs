//! Command runner
//!
//! Runs the command under test through a shell and captures stdout, stderr
//! and the exit status.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use crate::error::{ErrorKind, TcmdError};

/// What one run of the command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Something that can run a command line and capture its output.
///
/// The binary uses [`ShellRunner`]; tests can substitute canned results.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<CapturedResult, TcmdError>;
}

/// Runs commands with `sh -c` so pipes, redirection, `;` and `&&` work.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
    null_stdin: bool,
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: "sh".into(),
            null_stdin: false,
        }
    }

    /// Use a different shell binary (must accept `-c <command>`)
    #[cfg(test)]
    fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Give the child an empty stdin instead of inheriting ours.
    ///
    /// Needed in `--stdin` mode, where our stdin belongs to the comparison.
    pub fn with_null_stdin(mut self, null_stdin: bool) -> Self {
        self.null_stdin = null_stdin;
        self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CapturedResult, TcmdError> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command);
        cmd.stdin(if self.null_stdin { Stdio::null() } else { Stdio::inherit() });

        // output() drains stdout and stderr concurrently before reaping the
        // child, so a chatty command cannot fill a pipe and hang us.
        let output = cmd.output().map_err(|e| {
            TcmdError::new(ErrorKind::CommandFailed,
                format!("failed to execute '{}': {}", self.shell, e))
                .with_command(command)
        })?;

        Ok(CapturedResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: exit_code(output.status),
        })
    }
}

/// Exit status as an integer; a signal-killed child reports `-signal`.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(sig) = status.signal() {
            return -sig;
        }
    }
    -1
}

/// Read piped input that stands in for the command's stdout.
///
/// Trailing newlines are stripped.
pub fn read_piped_stdout<R: Read>(mut reader: R) -> Result<String, TcmdError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|e| {
        TcmdError::new(ErrorKind::Io, format!("reading stdin: {}", e))
    })?;
    let text = String::from_utf8_lossy(&buf);
    Ok(text.trim_end_matches('\n').to_string())
}
