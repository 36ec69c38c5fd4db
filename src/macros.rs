//! Utility macros for the analyzer.
//!
//! - `MK_ENTRY!` - Creates a SymbolEntry instance
//! - `MK_ERROR!` - Creates a lexical Error at a line and column

/// Creates a SymbolEntry instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The lexeme as it appeared in the source
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let entry = MK_ENTRY!(TokenKind::IntegerNumber, "42", 1);
/// ```
#[macro_export]
macro_rules! MK_ENTRY {
    ($kind:expr, $text:expr, $line:expr) => {
        $crate::symbol_table::symbol_table::SymbolEntry {
            kind: $kind,
            text: ::std::string::String::from($text),
            line: $line,
        }
    };
}

/// Creates a lexical Error.
///
/// ```ignore
/// let error = MK_ERROR!(ErrorImpl::UnterminatedString, line, column);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $line:expr, $column:expr) => {
        $crate::errors::errors::Error::new($kind, $line, $column)
    };
}
