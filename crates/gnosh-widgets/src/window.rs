// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Top-level window command
//!
//! The `-onDelete` callback is veto-capable: a truthy script result
//! suppresses the close.

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "window";

pub const FLAGS: ClassFlags = ClassFlags::TOPLEVEL.union(ClassFlags::CONTAINER);

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("title", OptKind::Str, "title"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::prop("resizable", OptKind::Bool, "resizable"),
    Opt::prop("defaultWidth", OptKind::Int, "default-width"),
    Opt::prop("defaultHeight", OptKind::Int, "default-height"),
    Opt::prop("borderWidth", OptKind::Int, "border-width"),
    Opt::new("onDelete", OptKind::Str),
    Opt::new("onDestroy", OptKind::Str),
    Opt::new("onKeyPress", OptKind::Str),
    Opt::new("onButtonPress", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Add,
    Cget,
    Class,
    Configure,
    Delete,
}

const OPS: &[(&str, Op)] = &[
    ("add", Op::Add),
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
];

pub fn create(ctx: &mut Context, args: &[Value]) -> Result<Value> {
    let opts = OPTS.parse(args, ctx.config.allow_abbrev)?;
    let id = ctx.toolkit().create(CLASS, FLAGS)?;
    let name = ctx.register(CLASS, id, FLAGS);
    if let Err(err) = configure(ctx, &name, &opts) {
        common::rollback(ctx, &name);
        return Err(err);
    }
    Ok(Value::atom(name))
}

fn configure(ctx: &mut Context, name: &str, opts: &ParsedOpts) -> Result<()> {
    let id = ctx.lookup_id(name)?;
    common::apply_props(ctx, id, &OPTS, opts)?;
    common::bind_callbacks(
        ctx,
        name,
        opts,
        &[
            ("onDelete", "delete-event"),
            ("onDestroy", "destroy"),
            ("onKeyPress", "key-press-event"),
            ("onButtonPress", "button-press-event"),
        ],
    )?;
    common::apply_glade_name(ctx, name, opts)
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::Add => {
            common::need_args(&args[1..], 1, "add widget")?;
            let id = ctx.lookup_id(name)?;
            let child = ctx.lookup_id(&args[1].text())?;
            ctx.toolkit()
                .box_pack(id, child, &PackParams::default(), false)?;
            Ok(Value::atom(""))
        }
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
    }
}
