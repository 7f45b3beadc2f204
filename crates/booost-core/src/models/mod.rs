use std::{fmt::Display, str::FromStr};

use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

pub mod read;
pub mod write;

/// A single cell of a sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(Decimal),
    Text(String),
    Timestamp(#[serde(with = "time::serde::rfc3339")] OffsetDateTime),
}

/// An ordered list of cells; row 1 of every sheet is the header.
pub type Row = Vec<CellValue>;

static EMPTY: CellValue = CellValue::Empty;

/// Cell at `column`, or `Empty` when the row is short.
pub fn cell(row: &[CellValue], column: usize) -> &CellValue {
    row.get(column).unwrap_or(&EMPTY)
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Numeric reading: numbers as-is, text by its leading numeric prefix, anything else zero.
    pub fn as_decimal(&self) -> Decimal {
        match self {
            CellValue::Number(n) => *n,
            CellValue::Text(s) => parse_leading_decimal(s).unwrap_or(Decimal::ZERO),
            _ => Decimal::ZERO,
        }
    }

    /// Integer reading, truncated toward zero.
    pub fn as_count(&self) -> i64 {
        self.as_decimal().trunc().to_i64().unwrap_or(0)
    }

    pub fn as_timestamp(&self) -> Option<OffsetDateTime> {
        match self {
            CellValue::Timestamp(ts) => Some(*ts),
            CellValue::Text(s) => parse_timestamp(s),
            _ => None,
        }
    }
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n.normalize()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Timestamp(ts) => match ts.format(&Rfc3339) {
                Ok(s) => f.write_str(&s),
                Err(_) => Err(std::fmt::Error),
            },
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<Decimal> for CellValue {
    fn from(value: Decimal) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(Decimal::from(value))
    }
}

impl From<OffsetDateTime> for CellValue {
    fn from(value: OffsetDateTime) -> Self {
        CellValue::Timestamp(value)
    }
}

/// Parses the longest leading decimal number of `s`, ignoring leading whitespace.
///
/// `"12.5kg"` reads as 12.5, `".5"` as 0.5, `"2.5e6"` as 2500000, `"abc"` as
/// nothing. An exponent without digits is left unread, so `"3e"` is 3. A value
/// too large for `Decimal` reads as nothing; one too small reads as zero.
pub fn parse_leading_decimal(s: &str) -> Option<Decimal> {
    let mut chars = s.trim_start().chars().peekable();
    let mut sign = String::new();
    if let Some(&c) = chars.peek() {
        if c == '-' || c == '+' {
            if c == '-' {
                sign.push('-');
            }
            chars.next();
        }
    }

    let mut int_part = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        int_part.push(c);
        chars.next();
    }

    let mut frac_part = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(&c) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            frac_part.push(c);
            chars.next();
        }
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if int_part.is_empty() {
        int_part.push('0');
    }

    let literal = if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    };

    match leading_exponent(chars) {
        Some(exp) => match Decimal::from_scientific(&format!("{}e{}", literal, exp)) {
            Ok(value) => Some(value),
            Err(_) if exp.starts_with('-') => Some(Decimal::ZERO),
            Err(_) => None,
        },
        None => Decimal::from_str(&literal).ok(),
    }
}

/// `[eE][+-]?digits` at the head of `chars`, returned as a signed digit string.
fn leading_exponent(mut chars: impl Iterator<Item = char>) -> Option<String> {
    if !matches!(chars.next(), Some('e' | 'E')) {
        return None;
    }
    let mut chars = chars.peekable();
    let mut exp = String::new();
    if let Some(&c) = chars.peek() {
        if c == '-' || c == '+' {
            if c == '-' {
                exp.push('-');
            }
            chars.next();
        }
    }
    let digits: String = chars.take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    exp.push_str(&digits);
    Some(exp)
}

/// Parses an RFC 3339 date-time, or a `YYYY-MM-DD` date taken as midnight UTC.
pub fn parse_timestamp(s: &str) -> Option<OffsetDateTime> {
    let s = s.trim();
    if let Ok(ts) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(ts);
    }
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}
