// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Engine configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine behaviour configuration
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Accept unambiguous option abbreviations (e.g. `-exp` for `-expand`)
    pub allow_abbrev: bool,

    /// Maximum depth of nested callback emission
    ///
    /// A callback whose script triggers further emissions may recurse;
    /// past this depth emission fails instead.
    pub recursion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            allow_abbrev: true,
            recursion_limit: 20,
        }
    }
}

#[cfg(feature = "serde")]
impl Config {
    /// Read from a file, guessing the format from the path
    pub fn read_path(path: &std::path::Path) -> Result<Self, super::Error> {
        super::Format::guess_from_path(path).read_path(path)
    }

    /// Write to a file, guessing the format from the path
    pub fn write_path(&self, path: &std::path::Path) -> Result<(), super::Error> {
        super::Format::guess_from_path(path).write_path(self, path)
    }
}
