//! Text layout helpers shared by the report and the debug trace

use std::io::{self, Write};

/// Indent applied to every report and trace line
pub const REPORT_INDENT: usize = 6;

/// Prefix every line of `text` with `nspaces` spaces.
///
/// Line endings are kept as they are; an empty string stays empty.
pub fn indent(text: &str, nspaces: usize) -> String {
    let padding = " ".repeat(nspaces);
    text.split_inclusive('\n')
        .map(|line| format!("{}{}", padding, line))
        .collect()
}

/// Write `msg` indented by [`REPORT_INDENT`], followed by a newline.
pub fn write_indented(out: &mut dyn Write, msg: &str) -> io::Result<()> {
    writeln!(out, "{}", indent(msg, REPORT_INDENT))
}

/// Output that fits on one line, ignoring a single trailing newline.
pub fn is_single_line(s: &str) -> bool {
    s.matches('\n').count() <= 1
}

/// Write `label: [value]`, or for multi-line values the label followed by
/// the bracketed value as a block indented `block_indent` spaces.
pub fn write_labeled(
    out: &mut dyn Write,
    label: &str,
    value: &str,
    block_indent: usize,
) -> io::Result<()> {
    if is_single_line(value) {
        write_indented(out, &format!("{}: [{}]", label, value))
    } else {
        write_indented(out, &format!("{}: ", label))?;
        writeln!(out, "{}", indent(&format!("[{}]", value), block_indent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_indent_each_line() {
        assert_eq!(indent("a\nb\n", 2), "  a\n  b\n");
        assert_eq!(indent("a\nb", 2), "  a\n  b");
        assert_eq!(indent("", 4), "");
    }

    #[test]
    fn test_write_indented_blank_line_has_no_padding() {
        assert_eq!(render(|out| write_indented(out, "")), "\n");
        assert_eq!(render(|out| write_indented(out, "---")), "      ---\n");
    }

    #[test]
    fn test_single_line() {
        assert!(is_single_line(""));
        assert!(is_single_line("2018\n"));
        assert!(!is_single_line("a\nb\n"));
    }

    #[test]
    fn test_write_labeled_inline() {
        let s = render(|out| write_labeled(out, "actual_stdout", "2018\n", 10));
        assert_eq!(s, "      actual_stdout: [2018\n      ]\n");
    }

    #[test]
    fn test_write_labeled_block() {
        let s = render(|out| write_labeled(out, "actual_stdout", "a\nb\n", 10));
        assert_eq!(s, "      actual_stdout: \n          [a\n          b\n          ]\n");
    }
}
