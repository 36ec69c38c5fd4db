#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::LexicalAnalyzer,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbol_table;

extern crate regex;

pub const SUCCESS_MESSAGE: &str = "Compilation successful. No lexical errors found.";

/// Returns the text of the 1-based `line` of `source`.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    source.split('\n').nth(line.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use crate::{errors::errors::ErrorImpl, MK_ERROR};

    #[test]
    fn test_get_line() {
        let source = "Hello, world!\n\nfoo\nTesting { }\n";

        assert_eq!(super::get_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::get_line(source, 2), Some(""));
        assert_eq!(super::get_line(source, 4), Some("Testing { }"));
        assert_eq!(super::get_line(source, 0), None);
        assert_eq!(super::get_line(source, 6), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "int a;\n    x = @;\n";
        let error = MK_ERROR!(ErrorImpl::UnrecognisedCharacter { character: '@' }, 2, 8);

        let rendered = super::render_error(&error, source, "main.itc");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnrecognisedCharacter (Character `@` is not part of the language)"
        );
        assert_eq!(lines[1], "-> main.itc");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x = @;");
        assert_eq!(lines[4], "  | ----^");
    }
}

/// Formats a lexical error against its source line:
///
/// ```text
/// Error: UnrecognisedCharacter (Character `@` is not part of the language)
/// -> main.itc
///    |
/// 20 | let a = @;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", file);
    let _ = writeln!(out, "{:>padding$}", "|");

    let line_text = get_line(source, error.get_line()).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = error.get_column().saturating_sub(removed_whitespace) + 1;
    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let mut start = 0;
    let mut byte_start = 0;
    for c in string.chars() {
        if c.is_whitespace() {
            start += 1;
            byte_start += c.len_utf8();
        } else {
            break;
        }
    }

    (&string[byte_start..], start)
}

/// The text a compile pass shows: the table listing followed by either the
/// error messages or the success line.
pub fn render_report(analyzer: &LexicalAnalyzer) -> String {
    let mut out = analyzer.symbol_table().to_string();
    out.push_str("\n\n");

    if analyzer.has_errors() {
        out.push_str(&analyzer.error_messages().join("\n"));
    } else {
        out.push_str(SUCCESS_MESSAGE);
    }

    out
}
