//! Argument and cell values.
//!
//! [`Arg`] is what a caller passes into a report. Reports check the runtime
//! variant against their declared parameter kinds, so an `Arg` deliberately
//! carries its own type. [`Value`] is what comes back out of the database.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Arguments ───────────────────────────────────────────────────────────────

/// A dynamically-typed report argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Arg>),
}

impl Arg {
    /// Interpret a command-line literal by its shape.
    ///
    /// `42` becomes [`Arg::Int`], `4.5` becomes [`Arg::Float`], anything else
    /// (including `inf` and `NaN`) stays [`Arg::Text`].
    pub fn from_literal(s: &str) -> Self {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Arg::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() {
                return Arg::Float(f);
            }
        }
        Arg::Text(s.to_string())
    }

    /// Short name of the runtime variant, used in log messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "bool",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Text(_) => "text",
            Arg::List(_) => "list",
        }
    }

    /// Numeric view of `Int` and finite `Float` arguments.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Arg::Int(i) => Some(*i as f64),
            Arg::Float(f) if f.is_finite() => Some(*f),
            _ => None,
        }
    }
}

impl From<i64> for Arg {
    fn from(v: i64) -> Self {
        Arg::Int(v)
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Int(v.into())
    }
}

impl From<u32> for Arg {
    fn from(v: u32) -> Self {
        Arg::Int(v.into())
    }
}

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Text(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Text(v)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        Arg::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        v.map_or(Arg::Null, Into::into)
    }
}

// ── Cell Values ─────────────────────────────────────────────────────────────

/// A single cell of a result table, or a bound query parameter.
///
/// Mirrors SQLite's storage classes. Serializes untagged, so a row turns into
/// plain JSON scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of `Integer` and `Real` cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => f.write_str(s),
            Value::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literal() {
        assert_eq!(Arg::from_literal("42"), Arg::Int(42));
        assert_eq!(Arg::from_literal(" -7 "), Arg::Int(-7));
        assert_eq!(Arg::from_literal("4.5"), Arg::Float(4.5));
        assert_eq!(Arg::from_literal("Action"), Arg::Text("Action".into()));
        assert_eq!(Arg::from_literal("inf"), Arg::Text("inf".into()));
        assert_eq!(Arg::from_literal("NaN"), Arg::Text("NaN".into()));
        assert_eq!(Arg::from_literal(""), Arg::Text(String::new()));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Arg::Int(3).as_number(), Some(3.0));
        assert_eq!(Arg::Float(2.5).as_number(), Some(2.5));
        assert_eq!(Arg::Float(f64::NAN).as_number(), None);
        assert_eq!(Arg::Bool(true).as_number(), None);
        assert_eq!(Arg::Text("3".into()).as_number(), None);
    }

    #[test]
    fn test_list_conversion() {
        let arg: Arg = vec!["crystal", "moon"].into();
        assert_eq!(
            arg,
            Arg::List(vec![Arg::Text("crystal".into()), Arg::Text("moon".into())])
        );
        assert_eq!(Arg::from(None::<i64>), Arg::Null);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Integer(46).to_string(), "46");
        assert_eq!(Value::Real(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Athenai").to_string(), "Athenai");
        assert_eq!(Value::Blob(vec![1, 2, 3]).to_string(), "<3 bytes>");
    }

    #[test]
    fn test_value_from_json_scalars() {
        let values: Vec<Value> = serde_json::from_str(r#"[null, 46, 2.99, "Athenai"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Integer(46),
                Value::Real(2.99),
                Value::Text("Athenai".into()),
            ]
        );
    }
}
