// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The gnosh prelude
//!
//! Everything a widget command module needs, re-exported in one place.

pub use crate::enums::EnumTable;
pub use crate::error::{Error, Result};
pub use crate::event::Event;
pub use crate::interp::{lookup_op, Context, ScriptEval, WidgetEntry};
pub use crate::options::{fraction, Opt, OptKind, OptSchema, OptValue, ParsedOpts};
pub use crate::registry::SizeMode;
pub use crate::signal::Veto;
pub use crate::toolkit::{
    ClassFlags, GridParams, NativeId, PackParams, Property, Toolkit,
};
pub use crate::value::Value;
