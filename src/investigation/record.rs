//! The ordered field mapping behind an investigation file.

use chrono::NaiveDate;

use crate::error::{Error, Result};

use super::sanitize::{strip_cr, strip_cr_seq};

/// Text appended to the header line at serialization, followed by the date.
const STAMP_PREFIX: &str = " - Last modified: ";

/// An investigation record: an ordered mapping of field keys to value lists.
///
/// Each line of the tab-delimited source becomes one field. The first token
/// of a line is its key; the remaining tokens are its values. The mapping
/// keeps fields in first-insertion order, and a duplicate key overwrites the
/// earlier value list in place (last occurrence wins), so serialization
/// reproduces the original line sequence minus deletions.
///
/// # Example
///
/// ```rust
/// use isatab_cleaner::InvestigationRecord;
///
/// # fn main() -> isatab_cleaner::Result<()> {
/// let record = InvestigationRecord::parse(b"Study Title\tCu exposure\n")?;
/// assert_eq!(record.get("Study Title"), Some(&["Cu exposure".to_string()][..]));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestigationRecord {
    fields: Vec<(String, Vec<String>)>,
}

impl InvestigationRecord {
    /// Parses raw record bytes into an ordered field mapping.
    ///
    /// The bytes must be UTF-8 (`Error::InvalidEncoding` otherwise). Lines
    /// are separated by `\n` and tokens by `\t`; keys and values are
    /// sanitized with [`strip_cr`]. A line with no tab yields a key with an
    /// empty value list. A final newline would otherwise surface as a
    /// phantom empty field, so one trailing blank line is dropped; blank
    /// lines elsewhere are kept.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let text = String::from_utf8(bytes.to_vec())?;

        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }

        let mut fields: Vec<(String, Vec<String>)> = Vec::with_capacity(lines.len());
        for line in lines {
            let mut tokens = line.split('\t');
            let key = strip_cr(tokens.next().unwrap_or("")).to_owned();
            let values = strip_cr_seq(tokens);
            match fields.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, slot)) => *slot = values,
                None => fields.push((key, values)),
            }
        }

        Ok(Self { fields })
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if a field with the given key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Returns the value list for the given key, if present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Removes the field with the given key, returning its values.
    ///
    /// Returns `None` if the key is absent; the order of the surviving
    /// fields is unchanged either way.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let index = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(index).1)
    }

    /// Iterates over field keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over fields in order as (key, values) pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Serializes the record back to tab-delimited bytes with a
    /// modification stamp.
    ///
    /// Each field becomes one line (key first, then each value, joined by
    /// tabs); lines are joined with `\n`. The stamp
    /// `" - Last modified: YYYY-MM-DD"` is appended exactly once, to the
    /// first line only. An empty record cannot carry the stamp and fails
    /// with [`Error::EmptyRecord`].
    pub fn to_bytes(&self, stamp_date: NaiveDate) -> Result<Vec<u8>> {
        let mut lines: Vec<String> = Vec::with_capacity(self.fields.len());
        for (key, values) in &self.fields {
            let mut line = key.clone();
            for value in values {
                line.push('\t');
                line.push_str(value);
            }
            lines.push(line);
        }

        let header = lines.first_mut().ok_or(Error::EmptyRecord)?;
        header.push_str(STAMP_PREFIX);
        header.push_str(&stamp_date.to_string());

        Ok(lines.join("\n").into_bytes())
    }
}
