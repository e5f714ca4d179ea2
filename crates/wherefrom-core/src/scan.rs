//! Import discovery.
//!
//! Scans source text for import sites without a full parse, enough for a
//! lint host to know which specifiers to run through the resolver. Handles
//! `import … from "…"`, bare `import "…"`, `export … from "…"`, and
//! `require("…")`, and skips line and block comments.

use serde::Serialize;
use std::collections::HashSet;

/// Kind of import site a specifier was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    EsmImport,
    EsmExport,
    CjsRequire,
}

impl ImportKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EsmImport => "esm_import",
            Self::EsmExport => "esm_export",
            Self::CjsRequire => "cjs_require",
        }
    }
}

/// Import specifier found in source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSpec {
    /// Specifier exactly as written.
    pub raw: String,
    /// Kind of import site.
    pub kind: ImportKind,
    /// 1-based line of the statement.
    pub line: u32,
}

/// Scan source text for import specifiers.
///
/// Returns specifiers in first-appearance order, deduplicated by `raw`.
#[must_use]
pub fn scan_imports(source: &str) -> Vec<ImportSpec> {
    let chars: Vec<char> = source.chars().collect();
    let mut scanner = Scanner {
        chars: &chars,
        pos: 0,
        line: 1,
    };

    let mut results = Vec::new();
    let mut seen = HashSet::new();
    while let Some(spec) = scanner.next_import() {
        if seen.insert(spec.raw.clone()) {
            results.push(spec);
        }
    }
    results
}

struct Scanner<'a> {
    chars: &'a [char],
    pos: usize,
    line: u32,
}

impl Scanner<'_> {
    fn next_import(&mut self) -> Option<ImportSpec> {
        while self.pos < self.chars.len() {
            match self.chars[self.pos] {
                '\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                '/' if self.peek(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek(1) == Some('*') => self.skip_block_comment(),
                _ => {
                    if let Some(spec) = self.try_statement() {
                        return Some(spec);
                    }
                    self.pos += 1;
                }
            }
        }
        None
    }

    fn try_statement(&mut self) -> Option<ImportSpec> {
        if self.at_keyword("import") {
            return self.keyword_statement(6, ImportKind::EsmImport, Self::scan_import_tail);
        }
        if self.at_keyword("export") {
            return self.keyword_statement(6, ImportKind::EsmExport, Self::scan_from_clause);
        }
        if self.at_keyword("require") {
            return self.keyword_statement(7, ImportKind::CjsRequire, Self::scan_call_argument);
        }
        None
    }

    fn keyword_statement(
        &mut self,
        keyword_len: usize,
        kind: ImportKind,
        scan: fn(&mut Self) -> Option<String>,
    ) -> Option<ImportSpec> {
        let (start, line) = (self.pos, self.line);
        self.pos += keyword_len;
        if let Some(raw) = scan(self) {
            return Some(ImportSpec { raw, kind, line });
        }
        // Rewind a failed match so the main loop rescans from the next
        // character with line counting intact.
        self.pos = start;
        self.line = line;
        None
    }

    /// After `import`: either a bare string (`import "x"`) or a binding
    /// list followed by `from "x"`.
    fn scan_import_tail(&mut self) -> Option<String> {
        self.skip_whitespace();
        if let Some(q) = self.current_quote() {
            return self.scan_string(q);
        }
        self.scan_from_clause()
    }

    /// Scan forward within the statement for `from "x"`.
    fn scan_from_clause(&mut self) -> Option<String> {
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if c == ';' {
                return None;
            }
            if c == '\n' {
                self.line += 1;
            }
            if self.at_keyword("from") {
                self.pos += 4;
                self.skip_whitespace();
                let q = self.current_quote()?;
                return self.scan_string(q);
            }
            self.pos += 1;
        }
        None
    }

    /// After `require`: `("x")`.
    fn scan_call_argument(&mut self) -> Option<String> {
        self.skip_whitespace();
        if self.chars.get(self.pos) != Some(&'(') {
            return None;
        }
        self.pos += 1;
        self.skip_whitespace();
        let q = self.current_quote()?;
        self.scan_string(q)
    }

    /// Read a string literal; `pos` sits on the opening quote.
    fn scan_string(&mut self, quote: char) -> Option<String> {
        self.pos += 1;
        let start = self.pos;
        while self.pos < self.chars.len() {
            let c = self.chars[self.pos];
            if c == quote {
                let raw: String = self.chars[start..self.pos].iter().collect();
                self.pos += 1;
                return Some(raw);
            }
            // A newline inside the literal means we misread; bail.
            if c == '\n' || c == '\\' {
                return None;
            }
            self.pos += 1;
        }
        None
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        let len = keyword.len();
        if self.pos + len > self.chars.len() {
            return false;
        }
        if !self.chars[self.pos..self.pos + len]
            .iter()
            .copied()
            .eq(keyword.chars())
        {
            return false;
        }
        // Word boundaries on both sides.
        if self.pos > 0 && is_ident_char(self.chars[self.pos - 1]) {
            return false;
        }
        match self.chars.get(self.pos + len) {
            Some(&c) => !is_ident_char(c),
            None => true,
        }
    }

    fn current_quote(&self) -> Option<char> {
        match self.chars.get(self.pos) {
            Some(&c) if c == '"' || c == '\'' || c == '`' => Some(c),
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.get(self.pos) {
            if c == '\n' {
                self.line += 1;
            } else if !c.is_whitespace() {
                break;
            }
            self.pos += 1;
        }
    }

    fn skip_line_comment(&mut self) {
        while self.pos < self.chars.len() && self.chars[self.pos] != '\n' {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos + 1 < self.chars.len() {
            if self.chars[self.pos] == '*' && self.chars[self.pos + 1] == '/' {
                self.pos += 2;
                return;
            }
            if self.chars[self.pos] == '\n' {
                self.line += 1;
            }
            self.pos += 1;
        }
        self.pos = self.chars.len();
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
