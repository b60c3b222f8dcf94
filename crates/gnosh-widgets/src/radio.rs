// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Radio-button command
//!
//! Radio buttons sharing one `-variable` form a group through the context
//! registry; each member must contribute a distinct `-onValue`. The group
//! exists only while it has members.

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "radioButton";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("text", OptKind::Str, "label"),
    Opt::prop("active", OptKind::Bool, "active"),
    Opt::prop("sensitive", OptKind::Bool, "sensitive"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("variable", OptKind::Str),
    Opt::new("onValue", OptKind::Str),
    Opt::new("onToggled", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Cget,
    Class,
    Configure,
    Delete,
}

const OPS: &[(&str, Op)] = &[
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
];

pub fn create(ctx: &mut Context, args: &[Value]) -> Result<Value> {
    let opts = OPTS.parse(args, ctx.config.allow_abbrev)?;
    // group membership is mandatory at creation
    if !opts.supplied("variable") {
        return Err(Error::RequiredOption("variable".to_string()));
    }
    if !opts.supplied("onValue") {
        return Err(Error::RequiredOption("onValue".to_string()));
    }
    let id = ctx.toolkit().create(CLASS, ClassFlags::empty())?;
    let name = ctx.register(CLASS, id, ClassFlags::empty());
    if let Err(err) = configure(ctx, &name, &opts) {
        ctx.registry.radio_leave_widget(&name);
        common::rollback(ctx, &name);
        return Err(err);
    }
    Ok(Value::atom(name))
}

fn configure(ctx: &mut Context, name: &str, opts: &ParsedOpts) -> Result<()> {
    if opts.supplied("variable") || opts.supplied("onValue") {
        // moving between groups needs both halves of the membership
        let variable = opts
            .get_str("variable")
            .ok_or_else(|| Error::RequiredOption("variable".to_string()))?;
        let on_value = opts
            .get_str("onValue")
            .ok_or_else(|| Error::RequiredOption("onValue".to_string()))?;
        ctx.registry.radio_leave_widget(name);
        ctx.registry.radio_join(variable, name, on_value)?;
    }
    let id = ctx.lookup_id(name)?;
    common::apply_props(ctx, id, &OPTS, opts)?;
    common::bind_callbacks(ctx, name, opts, &[("onToggled", "toggled")])?;
    common::apply_glade_name(ctx, name, opts)
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::Cget => {
            common::need_args(&args[1..], 1, "cget -option")?;
            common::cget(ctx, name, &OPTS, &args[1])
        }
        Op::Class => Ok(Value::atom(CLASS)),
        Op::Configure => {
            let opts = OPTS.parse(&args[1..], ctx.config.allow_abbrev)?;
            configure(ctx, name, &opts).map(|()| Value::atom(""))
        }
        Op::Delete => {
            ctx.registry.radio_leave_widget(name);
            common::delete(ctx, name)
        }
    }
}
