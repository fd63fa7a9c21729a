//! Line tokenizers for comma-separated feed rows
//!
//! Two quoting dialects coexist in the wild feeds this crate accepts. The
//! strict tokenizer understands the doubled-quote escape produced by
//! spreadsheet exports; the toggle tokenizer reproduces the simpler quoting
//! accepted by hand-authored positional feeds. The dialects are intentionally
//! distinct; existing feeds may depend on either behavior, so neither
//! implementation delegates to the other.

/// An ordered sequence of raw string fields from one input line
pub type RawRow = Vec<String>;

/// Splits one line of input into comma-separated fields
pub trait Tokenizer {
    fn split_line(&self, line: &str) -> RawRow;
}

/// Tokenizer with spreadsheet-style doubled-quote escaping
///
/// A double quote toggles the in-quotes state; `""` while inside quotes
/// emits one literal quote without toggling; a comma inside quotes is
/// literal. Each finished field is trimmed and loses one pair of surrounding
/// quote characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictTokenizer;

impl Tokenizer for StrictTokenizer {
    fn split_line(&self, line: &str) -> RawRow {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut inside_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(ch) = chars.next() {
            match ch {
                '"' if inside_quotes && chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => inside_quotes = !inside_quotes,
                ',' if !inside_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        fields.push(current);

        fields
            .into_iter()
            .map(|field| strip_surrounding_quotes(field.trim()).to_string())
            .collect()
    }
}

/// Tokenizer with toggle-only quoting
///
/// Every double quote flips the in-quotes state and is dropped from the
/// output; there is no escape for a literal quote character. Fields are
/// passed through untrimmed; the record builders trim what they use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleToggleTokenizer;

impl Tokenizer for SimpleToggleTokenizer {
    fn split_line(&self, line: &str) -> RawRow {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut inside_quotes = false;

        for ch in line.chars() {
            match ch {
                '"' => inside_quotes = !inside_quotes,
                ',' if !inside_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        fields.push(current);

        fields
    }
}

/// Remove one pair of surrounding quote characters, if both are present
fn strip_surrounding_quotes(field: &str) -> &str {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    }
}
