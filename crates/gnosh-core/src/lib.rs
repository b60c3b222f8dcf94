// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! gnosh core engine
//!
//! The reusable half of a scripting-language widget binding: option
//! schemas with typed coercion, enumerated-option mapping, percent
//! substitution over typed event payloads, idempotent signal binding,
//! cross-widget registries and the abstract toolkit boundary. Widget
//! command modules live in the companion `gnosh-widgets` crate.

pub mod config;
pub mod enums;
pub mod error;
pub mod event;
pub mod headless;
pub mod interp;
pub mod options;
pub mod prelude;
pub mod registry;
pub mod signal;
pub mod template;
pub mod toolkit;
pub mod value;

pub use error::{Error, Result};
pub use value::Value;
