use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display, str::FromStr};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("function");
        set.insert("return");
        set.insert("int");
        set.insert("float");
        set.insert("string");
        set.insert("bool");
        set.insert("true");
        set.insert("false");
        set.insert("print");
        set.insert("input");
        set.insert("and");
        set.insert("or");
        set.insert("not");
        set
    };
}

pub const OPERATORS: [char; 18] = [
    '+', '-', '*', '/', '=', '!', '<', '>', '&', '|', '(', ')', '{', '}', '[', ']', ';', ',',
];

pub const TWO_CHAR_OPERATORS: [&str; 6] = ["==", "!=", "<=", ">=", "&&", "||"];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_LOOKUP.contains(word)
}

pub fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

/// Returns the two-character operator starting with `first` and `second`, if any.
pub fn two_char_operator(first: char, second: char) -> Option<&'static str> {
    TWO_CHAR_OPERATORS.iter().copied().find(|op| {
        let mut chars = op.chars();
        chars.next() == Some(first) && chars.next() == Some(second)
    })
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    ReservedWord,
    Identifier,
    IntegerNumber,
    DecimalNumber,
    StringLiteral,
    Operator,
}

impl TokenKind {
    pub const ALL: [TokenKind; 6] = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::IntegerNumber,
        TokenKind::DecimalNumber,
        TokenKind::StringLiteral,
        TokenKind::Operator,
    ];

    /// Tag written to the symbol table file.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerNumber => "INTEGER_NUMBER",
            TokenKind::DecimalNumber => "DECIMAL_NUMBER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Operator => "OPERATOR",
        }
    }

    /// Styling an external highlighter should use for this kind. Operators are
    /// left unstyled.
    pub fn style(&self) -> Option<Style> {
        match self {
            TokenKind::ReservedWord => Some(KEYWORD_STYLE),
            TokenKind::Identifier => Some(IDENTIFIER_STYLE),
            TokenKind::IntegerNumber | TokenKind::DecimalNumber => Some(NUMBER_STYLE),
            TokenKind::StringLiteral => Some(STRING_STYLE),
            TokenKind::Operator => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Style {
    pub foreground: Rgb,
    pub bold: bool,
}

pub const KEYWORD_STYLE: Style = Style { foreground: Rgb(88, 129, 87), bold: true };
pub const NUMBER_STYLE: Style = Style { foreground: Rgb(174, 177, 120), bold: false };
pub const STRING_STYLE: Style = Style { foreground: Rgb(208, 135, 112), bold: false };
pub const COMMENT_STYLE: Style = Style { foreground: Rgb(128, 128, 128), bold: false };
pub const IDENTIFIER_STYLE: Style = Style { foreground: Rgb(163, 190, 140), bold: false };
