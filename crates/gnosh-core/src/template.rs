// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Percent substitution
//!
//! Stored callback commands may contain `%<letter>` placeholders which are
//! replaced by event-specific values just before the command is handed to
//! the interpreter. Each signal kind declares its fields as typed
//! [`Field`]s, so substitution is a plain scan over declared names rather
//! than ad hoc per-widget string surgery.
//!
//! `%%` yields a literal `%`. A letter with no declared field passes
//! through verbatim.

use crate::value::quote_word;
use smallvec::SmallVec;
use std::fmt;

/// A typed substitution value
#[derive(Clone, Debug, PartialEq)]
pub enum Field {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // strings are quoted so substituted text stays one list word
            Field::Str(s) => {
                let mut out = String::new();
                quote_word(&mut out, s);
                f.write_str(&out)
            }
            Field::Int(n) => write!(f, "{n}"),
            Field::Float(x) => write!(f, "{x}"),
            Field::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

/// The substitution set of one event
pub type Fields = SmallVec<[(char, Field); 8]>;

/// Replace `%<letter>` placeholders in `template` from `fields`
pub fn substitute(template: &str, fields: &[(char, Field)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => out.push('%'),
            Some('%') => out.push('%'),
            Some(letter) => match fields.iter().find(|(l, _)| *l == letter) {
                Some((_, field)) => out.push_str(&field.to_string()),
                None => {
                    out.push('%');
                    out.push(letter);
                }
            },
        }
    }
    out
}
