// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Error type
//!
//! All failures are synchronous and abort the current command; there is no
//! retry or partial-application semantics at this layer.

use thiserror::Error;

/// Specialised `Result` type
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while parsing arguments, configuring widgets or talking
/// to the toolkit
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Flag does not name any option of the schema
    #[error("unknown option \"{token}\"; must be one of: {expected}")]
    UnknownOption { token: String, expected: String },

    /// Flag abbreviation matches more than one option
    #[error("ambiguous option \"{token}\"; could be any of: {candidates}")]
    AmbiguousOption { token: String, candidates: String },

    /// The same option was supplied twice within one call
    #[error("option \"{0}\" supplied more than once")]
    DuplicateOption(String),

    /// The final flag has no value token
    #[error("option \"{0}\" requires a value")]
    MissingValue(String),

    /// An option which must be supplied at creation was not
    #[error("option \"{0}\" is required")]
    RequiredOption(String),

    #[error("expected boolean but got \"{0}\"")]
    BadBool(String),

    #[error("expected integer but got \"{0}\"")]
    BadInt(String),

    #[error("expected floating-point number but got \"{0}\"")]
    BadFloat(String),

    /// Numeric value outside its permitted range
    #[error("value {value} for \"{option}\" is out of range [{min}, {max}]")]
    OutOfRange {
        option: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// List value with the wrong number of elements
    #[error("option \"{option}\" expects {expected} element(s) but got {got}")]
    BadListLength {
        option: String,
        expected: String,
        got: usize,
    },

    #[error("unknown subcommand \"{token}\"; must be one of: {expected}")]
    UnknownSubcommand { token: String, expected: String },

    /// Token is not part of an enumerated mapping
    #[error("unknown token \"{token}\"; must be one of: {expected}")]
    UnknownEnum { token: String, expected: String },

    /// Reverse enumerated lookup found no token for the value
    #[error("no token corresponds to value {0}")]
    UnknownEnumValue(i64),

    #[error("wrong number of arguments: should be \"{0}\"")]
    WrongArgCount(String),

    #[error("no widget named \"{0}\"")]
    NoSuchWidget(String),

    /// Option cannot be read back via `cget`
    #[error("option \"{0}\" cannot be read")]
    UnreadableOption(String),

    /// A second radio button declared the same on-value within one group
    #[error("value \"{value}\" is already used in radio group \"{group}\"")]
    RadioValueInUse { group: String, value: String },

    /// A registry name is already taken
    #[error("name \"{0}\" is already in use")]
    NameInUse(String),

    /// Widget class with intentionally unspecified behaviour
    #[error("widget class \"{0}\" is not supported")]
    Unsupported(String),

    /// Failure reported by the underlying toolkit
    #[error("toolkit error: {0}")]
    Toolkit(String),

    /// Failure reported by the host interpreter while evaluating a callback
    #[error("script error: {0}")]
    Script(String),

    /// Nested callback emission exceeded the configured limit
    #[error("callback recursion limit ({0}) exceeded")]
    RecursionLimit(usize),
}
