// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Table (grid) container command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "table";

pub const FLAGS: ClassFlags = ClassFlags::GRID;

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("homogeneous", OptKind::Bool, "homogeneous"),
    Opt::prop("rowSpacing", OptKind::Int, "row-spacing"),
    Opt::prop("columnSpacing", OptKind::Int, "column-spacing"),
    Opt::prop("borderWidth", OptKind::Int, "border-width"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("name", OptKind::Str),
]);

/// Per-child attachment options
pub const ATTACH_OPTS: OptSchema = OptSchema::new(&[
    Opt::new("columnSpan", OptKind::Int),
    Opt::new("rowSpan", OptKind::Int),
    Opt::new("expand", OptKind::Bool),
    Opt::new("fill", OptKind::Bool),
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
    common::apply_glade_name(ctx, name, opts)
}

/// `add widget {column row} ?option value ...?`
fn add(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    if args.len() < 2 {
        return Err(Error::WrongArgCount(format!(
            "{name} add widget {{column row}} ?option value ...?"
        )));
    }
    let cell = args[1].items();
    if cell.len() != 2 {
        return Err(Error::BadListLength {
            option: "cell".to_string(),
            expected: "2".to_string(),
            got: cell.len(),
        });
    }
    let opts = ATTACH_OPTS.parse(&args[2..], ctx.config.allow_abbrev)?;
    let mut params = GridParams {
        column: cell[0].to_int()?,
        row: cell[1].to_int()?,
        ..Default::default()
    };
    if let Some(span) = opts.get_int("columnSpan") {
        params.column_span = span;
    }
    if let Some(span) = opts.get_int("rowSpan") {
        params.row_span = span;
    }
    if let Some(expand) = opts.get_bool("expand") {
        params.expand = expand;
    }
    if let Some(fill) = opts.get_bool("fill") {
        params.fill = fill;
    }

    let parent = ctx.lookup_id(name)?;
    let child = ctx.lookup_id(&args[0].text())?;
    ctx.toolkit().grid_attach(parent, child, &params)?;
    Ok(Value::atom(""))
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::Add => add(ctx, name, &args[1..]),
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
