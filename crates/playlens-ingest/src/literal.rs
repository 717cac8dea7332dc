//! Literal decoding for textually-encoded cells.
//!
//! The source CSVs store nested values as constant-literal text
//! (`"['action', 'indie']"`, `"{'item_id': 10, 'playtime': 5}"`, `"True"`).
//! `decode_literal` parses that grammar into a `CellValue`; anything that is
//! not a well-formed constant literal is left as plain text. Only constant
//! literals are legal, never expressions.

use std::collections::BTreeMap;

use playlens_model::{CellValue, Table};

/// Parse a string as a constant literal.
///
/// Returns `None` when the input is not a complete literal; callers fall
/// back to the original text, so decoding never fails.
pub fn decode_literal(input: &str) -> Option<CellValue> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
    };
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos != parser.chars.len() {
        return None;
    }
    Some(value)
}

/// Decode one cell: text cells run through the literal parser and pass
/// through unchanged when parsing fails; every other variant is already
/// decoded. Idempotent on its own output.
pub fn decode_cell(cell: CellValue) -> CellValue {
    match cell {
        CellValue::Text(s) => match decode_literal(&s) {
            Some(value) => value,
            None => CellValue::Text(s),
        },
        other => other,
    }
}

/// Decode every cell of a table in place.
pub fn decode_table(table: &mut Table) {
    for row in &mut table.rows {
        for cell in row.cells.values_mut() {
            let taken = std::mem::replace(cell, CellValue::Missing);
            *cell = decode_cell(taken);
        }
    }
}

/// Render a cell back to the literal grammar, so written tables round-trip
/// through `decode_literal`.
pub fn encode_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Missing => "None".to_string(),
        CellValue::Bool(true) => "True".to_string(),
        CellValue::Bool(false) => "False".to_string(),
        CellValue::Int(v) => v.to_string(),
        CellValue::Float(v) => {
            let s = format!("{v}");
            // Keep a float marker so the value decodes back as a float.
            if s.contains('.') || s.contains('e') || s.contains("inf") || s.contains("NaN") {
                s
            } else {
                format!("{s}.0")
            }
        }
        CellValue::Text(s) => format!("'{}'", escape_text(s)),
        CellValue::List(items) => {
            let parts: Vec<String> = items.iter().map(encode_cell).collect();
            format!("[{}]", parts.join(", "))
        }
        CellValue::Record(fields) => {
            let parts: Vec<String> = fields
                .iter()
                .map(|(k, v)| format!("'{}': {}", escape_text(k), encode_cell(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

/// Render a cell for a CSV field: plain text stays bare, missing cells stay
/// empty, everything else uses the literal grammar.
pub fn render_csv_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Missing => String::new(),
        CellValue::Text(s) => s.clone(),
        other => encode_cell(other),
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn eat_keyword(&mut self, word: &str) -> bool {
        let end = self.pos + word.len();
        if end > self.chars.len() {
            return false;
        }
        if self.chars[self.pos..end].iter().collect::<String>() != word {
            return false;
        }
        // A keyword must not run into an identifier tail.
        if self
            .chars
            .get(end)
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        {
            return false;
        }
        self.pos = end;
        true
    }

    fn parse_value(&mut self) -> Option<CellValue> {
        match self.peek()? {
            'N' if self.eat_keyword("None") => Some(CellValue::Missing),
            'T' if self.eat_keyword("True") => Some(CellValue::Bool(true)),
            'F' if self.eat_keyword("False") => Some(CellValue::Bool(false)),
            '\'' | '"' => self.parse_string().map(CellValue::Text),
            '[' => self.parse_sequence('[', ']'),
            '(' => self.parse_sequence('(', ')'),
            '{' => self.parse_record(),
            ch if ch.is_ascii_digit() || ch == '-' || ch == '+' || ch == '.' => {
                self.parse_number()
            }
            _ => None,
        }
    }

    fn parse_string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut out = String::new();
        loop {
            match self.bump()? {
                ch if ch == quote => return Some(out),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    'r' => out.push('\r'),
                    't' => out.push('\t'),
                    escaped => out.push(escaped),
                },
                ch => out.push(ch),
            }
        }
    }

    fn parse_number(&mut self) -> Option<CellValue> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.pos += 1;
        }
        let mut saw_digit = false;
        let mut is_float = false;
        while let Some(ch) = self.peek() {
            match ch {
                '0'..='9' => {
                    saw_digit = true;
                    self.pos += 1;
                }
                '.' if !is_float => {
                    is_float = true;
                    self.pos += 1;
                }
                'e' | 'E' if saw_digit => {
                    is_float = true;
                    self.pos += 1;
                    if matches!(self.peek(), Some('-') | Some('+')) {
                        self.pos += 1;
                    }
                    let mut exp_digit = false;
                    while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                        exp_digit = true;
                        self.pos += 1;
                    }
                    if !exp_digit {
                        return None;
                    }
                    break;
                }
                _ => break,
            }
        }
        if !saw_digit {
            return None;
        }
        let token: String = self.chars[start..self.pos].iter().collect();
        if is_float {
            token.parse::<f64>().ok().map(CellValue::Float)
        } else {
            token.parse::<i64>().ok().map(CellValue::Int)
        }
    }

    fn parse_sequence(&mut self, open: char, close: char) -> Option<CellValue> {
        debug_assert_eq!(self.peek(), Some(open));
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Some(CellValue::List(items));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some(ch) if ch == close => {}
                _ => return None,
            }
        }
    }

    fn parse_record(&mut self) -> Option<CellValue> {
        debug_assert_eq!(self.peek(), Some('{'));
        self.pos += 1;
        let mut fields = BTreeMap::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Some(CellValue::Record(fields));
            }
            let key = self.parse_value()?;
            self.skip_whitespace();
            if self.bump()? != ':' {
                return None;
            }
            self.skip_whitespace();
            let value = self.parse_value()?;
            fields.insert(key.key(), value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                }
                Some('}') => {}
                _ => return None,
            }
        }
    }
}
