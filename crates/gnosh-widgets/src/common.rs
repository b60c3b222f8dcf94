// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Glue shared by all widget command modules

use gnosh_core::prelude::*;
use log::debug;

/// Apply every supplied, property-mapped option via the generic setter
pub(crate) fn apply_props(
    ctx: &mut Context,
    id: NativeId,
    schema: &OptSchema,
    opts: &ParsedOpts,
) -> Result<()> {
    for opt in schema.opts() {
        if let Some(prop) = opt.prop {
            if let Some(value) = opts.get(opt.name) {
                ctx.toolkit().set_property(id, prop, to_property(value))?;
            }
        }
    }
    Ok(())
}

fn to_property(value: &OptValue) -> Property {
    match value {
        OptValue::Bool(b) => Property::Bool(*b),
        OptValue::Int(n) => Property::Int(*n),
        OptValue::Float(x) => Property::Float(*x),
        OptValue::Str(s) => Property::Str(s.clone()),
        OptValue::Obj(v) => Property::Str(v.text()),
        OptValue::List(items) => Property::Str(Value::List(items.clone()).to_string()),
    }
}

/// Read a property-mapped option back for `cget`
pub(crate) fn cget(ctx: &Context, name: &str, schema: &OptSchema, flag: &Value) -> Result<Value> {
    let opt = schema.lookup(&flag.text(), ctx.config.allow_abbrev)?;
    let Some(prop) = opt.prop else {
        return Err(Error::UnreadableOption(format!("-{}", opt.name)));
    };
    let id = ctx.lookup_id(name)?;
    Ok(match ctx.toolkit_ref().get_property(id, prop)? {
        Property::Bool(b) => Value::from(b),
        Property::Int(n) => Value::from(n),
        Property::Float(x) => Value::from(x),
        Property::Str(s) => Value::from(s),
    })
}

/// Common `delete`: drop the registration, then the native widget
pub(crate) fn delete(ctx: &mut Context, name: &str) -> Result<Value> {
    debug!("delete widget {name}");
    let entry = ctx.unregister(name)?;
    ctx.toolkit().destroy(entry.id)?;
    Ok(Value::atom(""))
}

/// Roll back a construction that failed part-way
///
/// A failed create must not leave a half-configured native widget behind.
pub(crate) fn rollback(ctx: &mut Context, name: &str) {
    debug!("rolling back failed construction of {name}");
    if let Ok(entry) = ctx.unregister(name) {
        let _ = ctx.toolkit().destroy(entry.id);
    }
}

/// Bind each supplied `-on…` option to its toolkit signal
pub(crate) fn bind_callbacks(
    ctx: &mut Context,
    name: &str,
    opts: &ParsedOpts,
    map: &[(&'static str, &'static str)],
) -> Result<()> {
    for (option, signal) in map {
        if let Some(command) = opts.get_str(option) {
            ctx.bind(name, signal, command)?;
        }
    }
    Ok(())
}

/// Apply the common `-name` option as the widget's glade name
pub(crate) fn apply_glade_name(ctx: &mut Context, name: &str, opts: &ParsedOpts) -> Result<()> {
    if let Some(glade) = opts.get_str("name") {
        ctx.set_glade_name(name, glade)?;
    }
    Ok(())
}

/// Inspect the headless backend behind a context (test builds only)
#[cfg(test)]
pub(crate) fn headless(ctx: &Context) -> &gnosh_core::headless::HeadlessToolkit {
    ctx.toolkit_ref()
        .as_any()
        .downcast_ref()
        .expect("headless backend")
}

/// Require an exact argument count for a subcommand
pub(crate) fn need_args(args: &[Value], n: usize, usage: &str) -> Result<()> {
    if args.len() == n {
        Ok(())
    } else {
        Err(Error::WrongArgCount(usage.to_string()))
    }
}
