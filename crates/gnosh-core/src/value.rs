// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Interpreter value seam
//!
//! The host interpreter's object model is external to this crate; [`Value`]
//! is the minimal shape exchanged across the boundary: an atom (a word) or
//! a list of values. Values are cheap to clone and own their data, so no
//! reference-count bookkeeping crosses the seam.

use crate::error::{Error, Result};
use smol_str::SmolStr;
use std::fmt;

/// A value passed to or returned from a command
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A single word
    Atom(SmolStr),
    /// An ordered sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Construct an atom from anything string-like
    pub fn atom(text: impl AsRef<str>) -> Self {
        Value::Atom(SmolStr::new(text.as_ref()))
    }

    /// Construct a list
    pub fn list(items: impl Into<Vec<Value>>) -> Self {
        Value::List(items.into())
    }

    /// The atom's text, if this is an atom
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Value::Atom(s) => Some(s.as_str()),
            Value::List(_) => None,
        }
    }

    /// Render as plain text
    ///
    /// Atoms render verbatim; lists render in list syntax (see [`fmt::Display`]).
    pub fn text(&self) -> String {
        match self {
            Value::Atom(s) => s.to_string(),
            Value::List(_) => format!("{self}"),
        }
    }

    /// Parse as a boolean
    ///
    /// Accepted forms (case-insensitive): `1`/`0`, `true`/`false`,
    /// `yes`/`no`, `on`/`off`.
    pub fn to_bool(&self) -> Result<bool> {
        let word = self.as_atom().ok_or_else(|| Error::BadBool(self.text()))?;
        match word.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(Error::BadBool(word.to_string())),
        }
    }

    /// Parse as an integer (locale-independent)
    pub fn to_int(&self) -> Result<i64> {
        let word = self.as_atom().ok_or_else(|| Error::BadInt(self.text()))?;
        word.trim()
            .parse()
            .map_err(|_| Error::BadInt(word.to_string()))
    }

    /// Parse as a floating-point number (locale-independent)
    ///
    /// Integer literals are accepted.
    pub fn to_float(&self) -> Result<f64> {
        let word = self.as_atom().ok_or_else(|| Error::BadFloat(self.text()))?;
        word.trim()
            .parse()
            .map_err(|_| Error::BadFloat(word.to_string()))
    }

    /// The value's elements
    ///
    /// A list yields its items; an atom is split on whitespace, so
    /// `{0.5 0.5}` supplied as a single word still reads as two elements.
    /// An atom without whitespace yields itself as a one-element sequence.
    pub fn items(&self) -> Vec<Value> {
        match self {
            Value::List(items) => items.clone(),
            Value::Atom(s) => s.split_whitespace().map(Value::atom).collect(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::atom(text)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::atom(text)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::atom(if b { "1" } else { "0" })
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::atom(n.to_string())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::atom(x.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Quote a word for inclusion in list syntax
pub(crate) fn quote_word(out: &mut String, word: &str) {
    if word.is_empty() || word.chars().any(char::is_whitespace) {
        out.push('{');
        out.push_str(word);
        out.push('}');
    } else {
        out.push_str(word);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Atom(s) => f.write_str(s),
            Value::List(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    match item {
                        Value::Atom(s) => quote_word(&mut out, s),
                        list => quote_word(&mut out, &list.to_string()),
                    }
                }
                f.write_str(&out)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn booleans() {
        for word in ["1", "true", "YES", "On"] {
            assert_eq!(Value::atom(word).to_bool().unwrap(), true);
        }
        for word in ["0", "False", "no", "OFF"] {
            assert_eq!(Value::atom(word).to_bool().unwrap(), false);
        }
        assert!(matches!(
            Value::atom("maybe").to_bool(),
            Err(Error::BadBool(_))
        ));
    }

    #[test]
    fn numbers() {
        assert_eq!(Value::atom(" 42 ").to_int().unwrap(), 42);
        assert_eq!(Value::atom("-3").to_int().unwrap(), -3);
        assert!(Value::atom("4x").to_int().is_err());
        assert_eq!(Value::atom("0.5").to_float().unwrap(), 0.5);
        assert_eq!(Value::atom("2").to_float().unwrap(), 2.0);
        assert!(Value::atom("half").to_float().is_err());
    }

    #[test]
    fn items_split_atoms() {
        let v = Value::atom("0.5 0.5");
        assert_eq!(v.items(), vec![Value::atom("0.5"), Value::atom("0.5")]);
        assert_eq!(Value::atom("center").items().len(), 1);
        let l = Value::list(vec![Value::atom("a"), Value::atom("b c")]);
        assert_eq!(l.items().len(), 2);
    }

    #[test]
    fn display_quotes_whitespace() {
        let l = Value::list(vec![Value::atom("a"), Value::atom("b c"), Value::atom("")]);
        assert_eq!(l.to_string(), "a {b c} {}");
    }
}
