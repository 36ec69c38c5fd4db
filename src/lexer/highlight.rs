//! Highlight ranges for an external renderer.
//!
//! Rules run in a fixed order (keywords, numbers, strings, comments) and a
//! renderer is expected to apply the ranges in the order they are returned,
//! so a comment painted last wins over anything it covers.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{Style, COMMENT_STYLE, KEYWORD_STYLE, NUMBER_STYLE, RESERVED_LOOKUP, STRING_STYLE};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HighlightClass {
    Keyword,
    Number,
    String,
    Comment,
}

impl HighlightClass {
    pub fn style(&self) -> Style {
        match self {
            HighlightClass::Keyword => KEYWORD_STYLE,
            HighlightClass::Number => NUMBER_STYLE,
            HighlightClass::String => STRING_STYLE,
            HighlightClass::Comment => COMMENT_STYLE,
        }
    }
}

/// A byte range of a line to paint with `class`'s style.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Highlight {
    pub start: usize,
    pub len: usize,
    pub class: HighlightClass,
}

struct HighlightRule {
    regex: Regex,
    class: HighlightClass,
}

fn keyword_pattern() -> String {
    let mut words: Vec<&str> = RESERVED_LOOKUP.iter().copied().collect();
    words.sort_unstable();

    format!(r"\b(?:{})\b", words.join("|"))
}

lazy_static! {
    static ref RULES: Vec<HighlightRule> = {
        let rule = |pattern: &str, class| HighlightRule {
            regex: Regex::new(pattern).expect("highlight pattern must compile"),
            class,
        };

        vec![
            rule(keyword_pattern().as_str(), HighlightClass::Keyword),
            rule(r"\b\d+(\.\d+)?\b", HighlightClass::Number),
            rule(r#"".*?""#, HighlightClass::String),
            rule(r"//[^\n]*", HighlightClass::Comment),
        ]
    };
}

pub fn highlight_line(line: &str) -> Vec<Highlight> {
    let mut highlights = vec![];

    for rule in RULES.iter() {
        for found in rule.regex.find_iter(line) {
            highlights.push(Highlight {
                start: found.start(),
                len: found.len(),
                class: rule.class,
            });
        }
    }

    highlights
}

/// Highlights every line of `source`, pairing each range list with its
/// 1-based line number.
pub fn highlight_source(source: &str) -> Vec<(usize, Vec<Highlight>)> {
    source
        .split('\n')
        .enumerate()
        .map(|(index, line)| (index + 1, highlight_line(line)))
        .collect()
}
