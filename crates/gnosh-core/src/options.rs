// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Option schema interpreter
//!
//! Each widget class declares a static, immutable [`OptSchema`]: an ordered
//! table of [`Opt`] descriptors. Parsing an argument list against a schema
//! produces a freshly allocated [`ParsedOpts`], so schemas carry no per-call
//! state and may be shared freely.
//!
//! Argument lists are alternating `-flag value` tokens. A flag matches a
//! descriptor by exact name or, when enabled, by unique prefix. Duplicate
//! flags, unknown flags, ambiguous abbreviations and a trailing flag without
//! a value are all rejected; any error aborts the whole parse.

use crate::error::{Error, Result};
use crate::value::Value;
use linear_map::LinearMap;
use log::trace;
use smallvec::SmallVec;

/// Primitive type of an option value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptKind {
    /// Truthy word (`1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off`)
    Bool,
    /// Integer
    Int,
    /// Floating-point number
    Float,
    /// Floating-point number constrained to `[0, 1]`
    Fraction,
    /// Text, taken verbatim
    Str,
    /// Opaque value, retained without interpretation
    Obj,
    /// List with inclusive length bounds
    List(usize, usize),
}

/// One option descriptor
///
/// Binds a flag name (without the leading `-`) to a value type and,
/// optionally, to the underlying toolkit property it configures directly.
#[derive(Clone, Copy, Debug)]
pub struct Opt {
    pub name: &'static str,
    pub kind: OptKind,
    /// Toolkit property set generically from this option, where one exists
    pub prop: Option<&'static str>,
}

impl Opt {
    /// Descriptor handled by widget-specific code
    pub const fn new(name: &'static str, kind: OptKind) -> Self {
        Opt {
            name,
            kind,
            prop: None,
        }
    }

    /// Descriptor applied directly to a toolkit property
    pub const fn prop(name: &'static str, kind: OptKind, prop: &'static str) -> Self {
        Opt {
            name,
            kind,
            prop: Some(prop),
        }
    }
}

/// An immutable option table
#[derive(Clone, Copy, Debug)]
pub struct OptSchema {
    opts: &'static [Opt],
}

impl OptSchema {
    pub const fn new(opts: &'static [Opt]) -> Self {
        OptSchema { opts }
    }

    /// Descriptors in declaration order
    pub fn opts(&self) -> &'static [Opt] {
        self.opts
    }

    /// All flag names, with leading `-`, joined for error reporting
    fn flag_names(&self) -> String {
        let mut out = String::new();
        for (i, opt) in self.opts.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push('-');
            out.push_str(opt.name);
        }
        out
    }

    /// Resolve a `-flag` token to a descriptor
    ///
    /// An exact match always wins; otherwise, with `allow_abbrev`, a prefix
    /// matching exactly one descriptor is accepted.
    pub fn lookup(&self, token: &str, allow_abbrev: bool) -> Result<&'static Opt> {
        let flag = token.strip_prefix('-').ok_or_else(|| Error::UnknownOption {
            token: token.to_string(),
            expected: self.flag_names(),
        })?;

        if let Some(opt) = self.opts.iter().find(|o| o.name == flag) {
            return Ok(opt);
        }
        if allow_abbrev && !flag.is_empty() {
            let matches: SmallVec<[&'static Opt; 4]> = self
                .opts
                .iter()
                .filter(|o| o.name.starts_with(flag))
                .collect();
            match matches.len() {
                1 => return Ok(matches[0]),
                0 => (),
                _ => {
                    let candidates = matches
                        .iter()
                        .map(|o| format!("-{}", o.name))
                        .collect::<Vec<_>>()
                        .join(", ");
                    return Err(Error::AmbiguousOption {
                        token: token.to_string(),
                        candidates,
                    });
                }
            }
        }
        Err(Error::UnknownOption {
            token: token.to_string(),
            expected: self.flag_names(),
        })
    }

    /// Parse alternating `-flag value` tokens against this schema
    pub fn parse(&self, args: &[Value], allow_abbrev: bool) -> Result<ParsedOpts> {
        let mut parsed = ParsedOpts {
            map: LinearMap::new(),
        };
        let mut i = 0;
        while i < args.len() {
            let token = args[i].text();
            let opt = self.lookup(&token, allow_abbrev)?;
            if parsed.map.contains_key(opt.name) {
                return Err(Error::DuplicateOption(token));
            }
            let value = args
                .get(i + 1)
                .ok_or_else(|| Error::MissingValue(token.clone()))?;
            let coerced = coerce(opt, value)?;
            trace!("parsed option -{} = {:?}", opt.name, coerced);
            parsed.map.insert(opt.name, coerced);
            i += 2;
        }
        Ok(parsed)
    }
}

/// A coerced option value
#[derive(Clone, Debug, PartialEq)]
pub enum OptValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Obj(Value),
    List(Vec<Value>),
}

fn coerce(opt: &Opt, value: &Value) -> Result<OptValue> {
    Ok(match opt.kind {
        OptKind::Bool => OptValue::Bool(value.to_bool()?),
        OptKind::Int => OptValue::Int(value.to_int()?),
        OptKind::Float => OptValue::Float(value.to_float()?),
        OptKind::Fraction => OptValue::Float(fraction(opt.name, value.to_float()?)?),
        OptKind::Str => OptValue::Str(value.text()),
        OptKind::Obj => OptValue::Obj(value.clone()),
        OptKind::List(min, max) => {
            let items = value.items();
            if items.len() < min || items.len() > max {
                let expected = if min == max {
                    min.to_string()
                } else {
                    format!("{min} to {max}")
                };
                return Err(Error::BadListLength {
                    option: format!("-{}", opt.name),
                    expected,
                    got: items.len(),
                });
            }
            OptValue::List(items)
        }
    })
}

/// Check a fraction-typed value against `[0, 1]`
pub fn fraction(option: &str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            option: format!("-{option}"),
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Options coerced from one argument list
///
/// Freshly allocated per parse; absence of a key means "not supplied", so
/// callers can distinguish an omitted option from any explicit value.
#[derive(Clone, Debug, Default)]
pub struct ParsedOpts {
    map: LinearMap<&'static str, OptValue>,
}

impl ParsedOpts {
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the option was supplied in this call
    pub fn supplied(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&OptValue> {
        self.map.get(name)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.map.get(name) {
            Some(OptValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.map.get(name) {
            Some(OptValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Integer and fraction options also read as floats
    pub fn get_float(&self, name: &str) -> Option<f64> {
        match self.map.get(name) {
            Some(OptValue::Float(x)) => Some(*x),
            Some(OptValue::Int(n)) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.map.get(name) {
            Some(OptValue::Str(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_obj(&self, name: &str) -> Option<&Value> {
        match self.map.get(name) {
            Some(OptValue::Obj(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        match self.map.get(name) {
            Some(OptValue::List(items)) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Supplied options in argument order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OptValue)> {
        self.map.iter().map(|(name, value)| (*name, value))
    }
}
