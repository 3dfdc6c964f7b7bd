//! Debug tracing
//!
//! `-d/--dbg` turns on a trace of options, captured streams and match
//! decisions. The switch is a plain value handed to whoever traces; trace
//! lines go to the same writer as the report so they interleave in order.

use std::fmt::Display;
use std::io::{self, Write};
use crate::text::{write_indented, write_labeled};
use crate::verdict::StreamCheck;

/// Indent for multi-line traced values
const VALUE_BLOCK_INDENT: usize = 11;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tracer {
    enabled: bool,
}

impl Tracer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// `DBG: <msg>`
    pub fn line(&self, out: &mut dyn Write, msg: impl Display) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write_indented(out, &format!("DBG: {}", msg))
    }

    /// `DBG: <label>: [<value>]`, as a block when the value spans lines
    pub fn value(&self, out: &mut dyn Write, label: &str, value: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write_labeled(out, &format!("DBG: {}", label), value, VALUE_BLOCK_INDENT)
    }

    pub fn separator(&self, out: &mut dyn Write) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        write_indented(out, "---")
    }

    /// How one stream was decided: blank check or regex search, and what
    /// the search found.
    pub fn check(&self, out: &mut dyn Write, check: &StreamCheck) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let label = format!("{:>11} search", check.stream.label());
        if check.pattern.is_blank() {
            self.line(out, format!("{}: [{}] (blank check)", label, check.found.is_some()))?;
        } else if let Some(ref found) = check.found {
            self.line(out, format!("{}: [{}]", label, found))?;
        } else {
            self.line(out, format!("{}: no match", label))?;
        }
        if check.negated {
            self.line(out, format!("{:>11} negated: {:?}", check.stream.label(), check.outcome))?;
        }
        Ok(())
    }
}
