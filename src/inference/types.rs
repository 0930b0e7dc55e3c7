use crate::{Error, Result};
use serde::{Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// `row[0]` exactly as received; omitted when the row has no first element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<Value>,
    #[serde(serialize_with = "serialize_js_number")]
    pub probability: f64,
}

/// The shapes the classification endpoint has been seen to answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalResult {
    /// Gradio dataframe: `{"headers": [...], "data": [[target, probability], ...]}`.
    TabularWithData(Vec<Value>),
    /// A bare list of `[target, probability]` rows.
    BareRowList(Vec<Value>),
    Unrecognized,
}

impl ExternalResult {
    pub fn classify(raw: Value) -> Result<Self> {
        match raw {
            Value::Object(mut map) => match map.remove("data") {
                Some(data) if is_truthy(&data) => Ok(Self::TabularWithData(iterate(data)?)),
                _ => Ok(Self::Unrecognized),
            },
            Value::Array(rows) => Ok(Self::BareRowList(rows)),
            _ => Ok(Self::Unrecognized),
        }
    }

    pub fn into_predictions(self) -> Result<Vec<Prediction>> {
        match self {
            Self::TabularWithData(rows) | Self::BareRowList(rows) => {
                rows.iter().map(row_to_prediction).collect()
            }
            Self::Unrecognized => Ok(Vec::new()),
        }
    }
}

/// Classifies a raw upstream answer and flattens it into predictions.
pub fn normalize(raw: Value) -> Result<Vec<Prediction>> {
    ExternalResult::classify(raw)?.into_predictions()
}

/// Lists iterate their elements and strings their characters; nothing else is iterable.
fn iterate(data: Value) -> Result<Vec<Value>> {
    match data {
        Value::Array(rows) => Ok(rows),
        Value::String(s) => Ok(s.chars().map(|c| Value::String(c.to_string())).collect()),
        other => Err(Error::inference(format!("`data` is not iterable: {}", other))),
    }
}

fn row_to_prediction(row: &Value) -> Result<Prediction> {
    if row.is_null() {
        return Err(Error::inference("cannot read cells of a null prediction row"));
    }

    Ok(Prediction {
        target: element(row, 0),
        probability: element(row, 1).as_ref().map_or(f64::NAN, parse_float),
    })
}

/// Indexes a row like `row[index]`: list elements, UTF-16 units of a string,
/// or the `"0"`/`"1"` keys of an object. Numbers and booleans have no elements.
fn element(row: &Value, index: usize) -> Option<Value> {
    match row {
        Value::Array(cells) => cells.get(index).cloned(),
        Value::String(s) => s
            .encode_utf16()
            .nth(index)
            .map(|unit| Value::String(String::from_utf16_lossy(&[unit]))),
        Value::Object(map) => map.get(&index.to_string()).cloned(),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces a cell to a float the way `parseFloat` does: numbers pass through,
/// strings and lists yield the longest leading decimal literal of their string
/// form, everything else is NaN.
pub fn parse_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_float_str(s),
        Value::Array(items) => parse_float_str(&join_list(items)),
        Value::Null | Value::Bool(_) | Value::Object(_) => f64::NAN,
    }
}

// String conversion of a list: elements joined with commas, null as empty.
fn join_list(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            Value::Array(inner) => join_list(inner),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn parse_float_str(input: &str) -> f64 {
    let s = input.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Writes integral floats as integers and non-finite floats as `null`,
/// matching `JSON.stringify`.
fn serialize_js_number<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
