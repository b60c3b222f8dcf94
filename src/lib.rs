// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! gnosh: a scriptable command layer over an abstract GUI toolkit
//!
//! gnosh turns a widget toolkit into a set of interpreter commands: a
//! creation command per widget class taking `-flag value` pairs, and an
//! instance command per widget supporting `configure`, `cget`, `delete`,
//! `class` and class-specific verbs. The engine lives in [`gnosh-core`]
//! (option schemas, enum mapping, percent substitution, signal binding,
//! registries, the toolkit boundary); the widget command modules live in
//! [`gnosh-widgets`], re-exported here as [`widgets`].
//!
//! [`gnosh-core`]: gnosh_core
//! [`gnosh-widgets`]: gnosh_widgets

pub use gnosh_core::*;
pub use gnosh_widgets as widgets;
