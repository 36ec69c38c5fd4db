use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::errors::TableError, lexer::tokens::TokenKind};

/// Fixed descriptive block at the top of every table file. The loader skips
/// exactly this many lines.
pub const HEADER: [&str; 8] = [
    "=== SYMBOL TABLE ===",
    "Format: Type | Value | Line",
    "---------------------------",
    "Types: RESERVED_WORD, IDENTIFIER,",
    "       INTEGER_NUMBER, DECIMAL_NUMBER,",
    "       STRING, OPERATOR",
    "Fields are separated by a tab character.",
    "---------------------------",
];

pub const FIELD_SEPARATOR: char = '\t';

/// One recorded token occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl SymbolEntry {
    fn to_row(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.kind.tag(),
            self.text,
            self.line,
            sep = FIELD_SEPARATOR
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    FieldCount(usize),
    UnknownKind(String),
    InvalidLine(String),
}

/// A data row that could not be turned back into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number inside the file.
    pub row: usize,
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug)]
pub struct SymbolTable {
    path: PathBuf,
    entries: Vec<SymbolEntry>,
    last_load: LoadReport,
}

impl SymbolTable {
    /// Binds a table to `path` without touching the file system.
    pub fn new(path: impl Into<PathBuf>) -> SymbolTable {
        SymbolTable {
            path: path.into(),
            entries: vec![],
            last_load: LoadReport::default(),
        }
    }

    /// Binds a table to `path`, writing a header-only file if none exists yet,
    /// then loads whatever the file holds.
    pub fn open(path: impl Into<PathBuf>) -> Result<SymbolTable, TableError> {
        let mut table = SymbolTable::new(path);

        if !table.path.exists() {
            table.save()?;
        }

        table.load()?;
        Ok(table)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_load(&self) -> &LoadReport {
        &self.last_load
    }

    /// Appends an entry and rewrites the whole file.
    pub fn add_symbol(
        &mut self,
        kind: TokenKind,
        text: impl Into<String>,
        line: usize,
    ) -> Result<(), TableError> {
        self.push(SymbolEntry {
            kind,
            text: text.into(),
            line,
        });
        self.save()
    }

    /// Appends without persisting. Callers must `save` afterwards.
    pub(crate) fn push(&mut self, entry: SymbolEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn reset(&mut self) {
        self.entries.clear();
    }

    /// Empties the table and writes the header-only file.
    pub fn clear(&mut self) -> Result<(), TableError> {
        self.reset();
        self.save()
    }

    pub fn save(&self) -> Result<(), TableError> {
        fs::write(&self.path, self.to_file_contents()).map_err(|e| TableError::io(&self.path, e))
    }

    /// Replaces the in-memory entries with the file's rows. A missing file
    /// loads as an empty table.
    pub fn load(&mut self) -> Result<LoadReport, TableError> {
        let (entries, report) = if self.path.exists() {
            let contents =
                fs::read_to_string(&self.path).map_err(|e| TableError::io(&self.path, e))?;
            parse_table(&contents)
        } else {
            (vec![], LoadReport::default())
        };

        self.entries = entries;
        self.last_load = report.clone();
        Ok(report)
    }

    pub fn to_file_contents(&self) -> String {
        let mut contents = String::new();

        for line in HEADER {
            contents.push_str(line);
            contents.push('\n');
        }

        for entry in &self.entries {
            contents.push_str(&entry.to_row());
            contents.push('\n');
        }

        contents
    }
}

/// Parses file contents, skipping the header block. Blank rows are ignored;
/// malformed rows are collected in the report.
pub fn parse_table(contents: &str) -> (Vec<SymbolEntry>, LoadReport) {
    let mut entries = vec![];
    let mut report = LoadReport::default();

    for (index, raw) in contents.lines().enumerate().skip(HEADER.len()) {
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        match parse_row(row) {
            Ok(entry) => entries.push(entry),
            Err(reason) => report.skipped.push(SkippedRow {
                row: index + 1,
                content: raw.to_string(),
                reason,
            }),
        }
    }

    report.loaded = entries.len();
    (entries, report)
}

fn parse_row(row: &str) -> Result<SymbolEntry, SkipReason> {
    let fields: Vec<&str> = row.split(FIELD_SEPARATOR).collect();
    if fields.len() != 3 {
        return Err(SkipReason::FieldCount(fields.len()));
    }

    let kind = fields[0]
        .parse::<TokenKind>()
        .map_err(|unknown| SkipReason::UnknownKind(unknown.0))?;

    let line = match fields[2].parse::<usize>() {
        Ok(line) if line > 0 => line,
        _ => return Err(SkipReason::InvalidLine(fields[2].to_string())),
    };

    Ok(SymbolEntry {
        kind,
        text: fields[1].to_string(),
        line,
    })
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== SYMBOL TABLE ===")?;
        writeln!(f, "{:15} {:20} Line", "Type", "Value")?;
        write!(f, "-----------------------------------------")?;

        for entry in &self.entries {
            write!(
                f,
                "\n{:15} {:20} Line: {}",
                entry.kind.tag(),
                entry.text,
                entry.line
            )?;
        }

        Ok(())
    }
}
