use std::path::PathBuf;

use crate::{
    errors::errors::{Error, ErrorImpl, TableError},
    symbol_table::symbol_table::{SymbolEntry, SymbolTable},
    MK_ENTRY, MK_ERROR,
};

use super::tokens::{is_operator, is_reserved, two_char_operator, TokenKind};

pub const DEFAULT_TABLE_PATH: &str = "symbol_table.dat";

/// What to do when a line ends inside a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnterminatedStringPolicy {
    /// Stop the whole pass; nothing after the opening quote is scanned.
    #[default]
    AbortPass,
    /// Drop the rest of the line and carry on with the next one.
    SkipLine,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub table_path: PathBuf,
    pub unterminated_string: UnterminatedStringPolicy,
}

impl AnalyzerConfig {
    pub fn new(table_path: impl Into<PathBuf>) -> Self {
        AnalyzerConfig {
            table_path: table_path.into(),
            unterminated_string: UnterminatedStringPolicy::default(),
        }
    }

    pub fn with_unterminated_string(mut self, policy: UnterminatedStringPolicy) -> Self {
        self.unterminated_string = policy;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig::new(DEFAULT_TABLE_PATH)
    }
}

/// Result of scanning a whole source text in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub entries: Vec<SymbolEntry>,
    pub errors: Vec<Error>,
    /// Line the pass stopped at, if an unterminated string aborted it.
    pub aborted_at: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    IdentifierStart,
    Digit,
    Quote,
    CommentStart,
    Operator,
    Unknown,
}

enum LineOutcome {
    Finished,
    Aborted,
}

/// Cursor over the characters of a single line.
struct LineScanner<'s> {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    scan: &'s mut Scan,
}

impl<'s> LineScanner<'s> {
    fn new(line: &str, line_number: usize, scan: &'s mut Scan) -> LineScanner<'s> {
        LineScanner {
            chars: line.chars().collect(),
            pos: 0,
            line: line_number,
            scan,
        }
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn at(&self) -> char {
        self.chars[self.pos]
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn at_eol(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn text_from(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn advance_while(&mut self, accept: impl Fn(char) -> bool) {
        while !self.at_eol() && accept(self.at()) {
            self.advance_n(1);
        }
    }

    fn push(&mut self, kind: TokenKind, text: &str) {
        self.scan.entries.push(MK_ENTRY!(kind, text, self.line));
    }

    fn error(&mut self, kind: ErrorImpl, column: usize) {
        self.scan.errors.push(MK_ERROR!(kind, self.line, column));
    }

    fn classify(&self) -> CharClass {
        let c = self.at();

        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_ascii_alphabetic() || c == '_' {
            CharClass::IdentifierStart
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else if c == '"' {
            CharClass::Quote
        } else if c == '/' && self.peek() == Some('/') {
            CharClass::CommentStart
        } else if is_operator(c) {
            CharClass::Operator
        } else {
            CharClass::Unknown
        }
    }

    fn run(&mut self, policy: UnterminatedStringPolicy) -> LineOutcome {
        while !self.at_eol() {
            match self.classify() {
                CharClass::Whitespace => self.advance_n(1),
                CharClass::IdentifierStart => symbol_handler(self),
                CharClass::Digit => number_handler(self),
                CharClass::Quote => {
                    if !string_handler(self) {
                        return match policy {
                            UnterminatedStringPolicy::AbortPass => LineOutcome::Aborted,
                            UnterminatedStringPolicy::SkipLine => LineOutcome::Finished,
                        };
                    }
                }
                CharClass::CommentStart => break,
                CharClass::Operator => operator_handler(self),
                CharClass::Unknown => {
                    let (character, column) = (self.at(), self.pos);
                    self.error(ErrorImpl::UnrecognisedCharacter { character }, column);
                    self.advance_n(1);
                }
            }
        }

        LineOutcome::Finished
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

fn symbol_handler(lexer: &mut LineScanner) {
    let start = lexer.pos;
    lexer.advance_while(is_identifier_char);

    let word = lexer.text_from(start);
    if is_reserved(&word) {
        lexer.push(TokenKind::ReservedWord, &word);
    } else {
        lexer.push(TokenKind::Identifier, &word);
    }
}

fn number_handler(lexer: &mut LineScanner) {
    let start = lexer.pos;
    let mut has_decimal = false;

    while !lexer.at_eol() && is_number_char(lexer.at()) {
        if lexer.at() == '.' {
            if has_decimal {
                // Drop the whole run so scanning resumes after it.
                lexer.advance_while(is_number_char);
                let number = lexer.text_from(start);
                lexer.error(ErrorImpl::MultipleDecimalPoints { number }, start);
                return;
            }
            has_decimal = true;
        }
        lexer.advance_n(1);
    }

    let number = lexer.text_from(start);
    if has_decimal {
        lexer.push(TokenKind::DecimalNumber, &number);
    } else {
        lexer.push(TokenKind::IntegerNumber, &number);
    }
}

/// Returns false when the line ends before the closing quote.
fn string_handler(lexer: &mut LineScanner) -> bool {
    let start = lexer.pos;
    lexer.advance_n(1);
    lexer.advance_while(|c| c != '"');

    if lexer.at_eol() {
        lexer.error(ErrorImpl::UnterminatedString, start);
        return false;
    }

    lexer.advance_n(1);
    let literal = lexer.text_from(start);
    lexer.push(TokenKind::StringLiteral, &literal);
    true
}

fn operator_handler(lexer: &mut LineScanner) {
    let first = lexer.at();

    if let Some(op) = lexer.peek().and_then(|second| two_char_operator(first, second)) {
        lexer.push(TokenKind::Operator, op);
        lexer.advance_n(2);
        return;
    }

    lexer.push(TokenKind::Operator, &first.to_string());
    lexer.advance_n(1);
}

/// Scans `source` line by line without touching any symbol table file.
pub fn tokenize(source: &str, policy: UnterminatedStringPolicy) -> Scan {
    let mut scan = Scan::default();

    for (index, line) in source.split('\n').enumerate() {
        let line_number = index + 1;
        let outcome = LineScanner::new(line, line_number, &mut scan).run(policy);

        if let LineOutcome::Aborted = outcome {
            scan.aborted_at = Some(line_number);
            break;
        }
    }

    scan
}

/// Owns a symbol table and the error list of the most recent pass.
#[derive(Debug)]
pub struct LexicalAnalyzer {
    config: AnalyzerConfig,
    symbol_table: SymbolTable,
    errors: Vec<Error>,
}

impl LexicalAnalyzer {
    /// Opens (or creates) the table file named by `config`.
    pub fn new(config: AnalyzerConfig) -> Result<LexicalAnalyzer, TableError> {
        let symbol_table = SymbolTable::open(config.table_path.clone())?;

        Ok(LexicalAnalyzer {
            config,
            symbol_table,
            errors: vec![],
        })
    }

    /// Rescans `source` from scratch, replacing the table contents and the
    /// error list. The table file is rewritten once at the end of the pass.
    pub fn analyze(&mut self, source: &str) -> Result<(), TableError> {
        self.symbol_table.reset();
        self.errors.clear();

        let scan = tokenize(source, self.config.unterminated_string);
        for entry in scan.entries {
            self.symbol_table.push(entry);
        }
        self.errors = scan.errors;

        self.symbol_table.save()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
