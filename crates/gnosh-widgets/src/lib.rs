// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! gnosh widget command modules
//!
//! One module per widget class. Each declares its option schema, a
//! `create` function (parse options, construct the native widget, apply
//! options, register the command name) and a table-driven subcommand
//! dispatcher. [`create`] and [`dispatch`] route by class name, forming
//! the complete command surface exposed to the host interpreter.

mod common;

pub mod boxw;
pub mod button;
pub mod check;
pub mod entry;
pub mod label;
pub mod menu;
pub mod notebook;
pub mod progress;
pub mod radio;
pub mod sizegroup;
pub mod statusbar;
pub mod statusicon;
pub mod table;
pub mod window;

use gnosh_core::prelude::*;

type CreateFn = fn(&mut Context, &[Value]) -> Result<Value>;
type DispatchFn = fn(&mut Context, &str, &[Value]) -> Result<Value>;

/// Every supported widget class with its entry points
const CLASSES: &[(&str, CreateFn, DispatchFn)] = &[
    ("box", boxw::create, boxw::dispatch),
    ("button", button::create, button::dispatch),
    ("checkButton", check::create, check::dispatch),
    ("entry", entry::create, entry::dispatch),
    ("label", label::create, label::dispatch),
    ("menu", menu::create, menu::dispatch),
    ("menuItem", menu::create_item, menu::dispatch_item),
    ("notebook", notebook::create, notebook::dispatch),
    ("progressBar", progress::create, progress::dispatch),
    ("radioButton", radio::create, radio::dispatch),
    ("sizeGroup", sizegroup::create, sizegroup::dispatch),
    ("statusBar", statusbar::create, statusbar::dispatch),
    ("statusIcon", statusicon::create, statusicon::dispatch),
    ("table", table::create, table::dispatch),
    ("window", window::create, window::dispatch),
];

/// Create a widget of `class` from a creation-command argument list
///
/// Classes whose behaviour the original binding left unspecified (and any
/// class not in the table) are rejected rather than guessed at.
pub fn create(ctx: &mut Context, class: &str, args: &[Value]) -> Result<Value> {
    match CLASSES.iter().find(|(name, _, _)| *name == class) {
        Some((_, create_fn, _)) => create_fn(ctx, args),
        None => Err(Error::Unsupported(class.to_string())),
    }
}

/// Dispatch an instance-command invocation on a registered widget
pub fn dispatch(ctx: &mut Context, widget: &str, args: &[Value]) -> Result<Value> {
    let class = ctx.lookup(widget)?.class;
    let (_, _, dispatch_fn) = CLASSES
        .iter()
        .find(|(name, _, _)| *name == class)
        .ok_or_else(|| Error::Unsupported(class.to_string()))?;
    dispatch_fn(ctx, widget, args)
}
