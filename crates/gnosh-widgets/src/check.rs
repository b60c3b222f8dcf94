// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Check-button command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "checkButton";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("text", OptKind::Str, "label"),
    Opt::prop("active", OptKind::Bool, "active"),
    Opt::prop("sensitive", OptKind::Bool, "sensitive"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("onToggled", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Cget,
    Class,
    Configure,
    Delete,
    Toggle,
}

const OPS: &[(&str, Op)] = &[
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
    ("toggle", Op::Toggle),
];

pub fn create(ctx: &mut Context, args: &[Value]) -> Result<Value> {
    let opts = OPTS.parse(args, ctx.config.allow_abbrev)?;
    let id = ctx.toolkit().create(CLASS, ClassFlags::empty())?;
    let name = ctx.register(CLASS, id, ClassFlags::empty());
    if let Err(err) = configure(ctx, &name, &opts) {
        common::rollback(ctx, &name);
        return Err(err);
    }
    Ok(Value::atom(name))
}

fn configure(ctx: &mut Context, name: &str, opts: &ParsedOpts) -> Result<()> {
    let id = ctx.lookup_id(name)?;
    common::apply_props(ctx, id, &OPTS, opts)?;
    common::bind_callbacks(ctx, name, opts, &[("onToggled", "toggled")])?;
    common::apply_glade_name(ctx, name, opts)
}

/// Flip the active property
fn toggle(ctx: &mut Context, name: &str) -> Result<Value> {
    let id = ctx.lookup_id(name)?;
    let active = match ctx.toolkit().get_property(id, "active") {
        Ok(Property::Bool(b)) => b,
        _ => false,
    };
    ctx.toolkit()
        .set_property(id, "active", Property::Bool(!active))?;
    Ok(Value::from(!active))
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
        Op::Delete => common::delete(ctx, name),
        Op::Toggle => toggle(ctx, name),
    }
}
