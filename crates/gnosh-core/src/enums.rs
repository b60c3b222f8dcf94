// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Enumerated option mapping
//!
//! Many options accept one of a closed set of tokens which the toolkit
//! represents as an integer constant. [`EnumTable`] maps in both directions
//! over a static pair table.

use crate::error::{Error, Result};

/// A token ↔ integer mapping for one enumerated option
#[derive(Clone, Copy, Debug)]
pub struct EnumTable {
    name: &'static str,
    entries: &'static [(&'static str, i64)],
}

impl EnumTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, i64)]) -> Self {
        EnumTable { name, entries }
    }

    /// The option this table belongs to
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All accepted tokens
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    /// Token → integer
    pub fn set(&self, token: &str) -> Result<i64> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| *v)
            .ok_or_else(|| Error::UnknownEnum {
                token: token.to_string(),
                expected: self.tokens().collect::<Vec<_>>().join(", "),
            })
    }

    /// Integer → token
    pub fn get(&self, value: i64) -> Result<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(t, _)| *t)
            .ok_or(Error::UnknownEnumValue(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RELIEF: EnumTable =
        EnumTable::new("relief", &[("normal", 0), ("half", 1), ("none", 2)]);

    #[test]
    fn round_trip() {
        for token in RELIEF.tokens() {
            assert_eq!(RELIEF.get(RELIEF.set(token).unwrap()).unwrap(), token);
        }
    }

    #[test]
    fn unknown_token() {
        let err = RELIEF.set("fancy").unwrap_err();
        match err {
            Error::UnknownEnum { token, expected } => {
                assert_eq!(token, "fancy");
                assert_eq!(expected, "normal, half, none");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_value() {
        assert_eq!(RELIEF.get(7).unwrap_err(), Error::UnknownEnumValue(7));
    }
}
