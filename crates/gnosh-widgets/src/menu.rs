// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Menu and menu-item commands
//!
//! Two widget classes live here: `menu` (the container, which can pop up
//! at pointer coordinates) and `menuItem` (activatable entries, optionally
//! carrying a submenu).

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "menu";
pub const ITEM_CLASS: &str = "menuItem";

pub const FLAGS: ClassFlags = ClassFlags::MENU;

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("name", OptKind::Str),
]);

pub const ITEM_OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("text", OptKind::Str, "label"),
    Opt::prop("sensitive", OptKind::Bool, "sensitive"),
    Opt::new("submenu", OptKind::Str),
    Opt::new("onClicked", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Add,
    Cget,
    Class,
    Configure,
    Delete,
    Popup,
}

const OPS: &[(&str, Op)] = &[
    ("add", Op::Add),
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
    ("popup", Op::Popup),
];

#[derive(Copy, Clone, Debug)]
enum ItemOp {
    Cget,
    Class,
    Configure,
    Delete,
}

const ITEM_OPS: &[(&str, ItemOp)] = &[
    ("cget", ItemOp::Cget),
    ("class", ItemOp::Class),
    ("configure", ItemOp::Configure),
    ("delete", ItemOp::Delete),
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

pub fn create_item(ctx: &mut Context, args: &[Value]) -> Result<Value> {
    let opts = ITEM_OPTS.parse(args, ctx.config.allow_abbrev)?;
    let id = ctx.toolkit().create(ITEM_CLASS, ClassFlags::empty())?;
    let name = ctx.register(ITEM_CLASS, id, ClassFlags::empty());
    if let Err(err) = configure_item(ctx, &name, &opts) {
        common::rollback(ctx, &name);
        return Err(err);
    }
    Ok(Value::atom(name))
}

fn configure_item(ctx: &mut Context, name: &str, opts: &ParsedOpts) -> Result<()> {
    let id = ctx.lookup_id(name)?;
    common::apply_props(ctx, id, &ITEM_OPTS, opts)?;
    if let Some(submenu) = opts.get_str("submenu") {
        let submenu_id = ctx.lookup_id(submenu)?;
        ctx.toolkit().menu_set_submenu(id, submenu_id)?;
    }
    // menu items activate rather than click, but the option keeps the
    // vocabulary of the other button-like widgets
    common::bind_callbacks(ctx, name, opts, &[("onClicked", "activate")])?;
    common::apply_glade_name(ctx, name, opts)
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::Add => {
            let Some(items) = args.get(1) else {
                return Err(Error::WrongArgCount(format!("{name} add item-list")));
            };
            let id = ctx.lookup_id(name)?;
            for item in items.items() {
                let item_id = ctx.lookup_id(&item.text())?;
                ctx.toolkit().menu_append(id, item_id)?;
            }
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
        Op::Popup => {
            common::need_args(&args[1..], 2, "popup x y")?;
            let x = args[1].to_float()?;
            let y = args[2].to_float()?;
            let id = ctx.lookup_id(name)?;
            ctx.toolkit().menu_popup(id, x, y)?;
            Ok(Value::atom(""))
        }
    }
}

pub fn dispatch_item(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(ITEM_OPS, &op.text())? {
        ItemOp::Cget => {
            common::need_args(&args[1..], 1, "cget -option")?;
            common::cget(ctx, name, &ITEM_OPTS, &args[1])
        }
        ItemOp::Class => Ok(Value::atom(ITEM_CLASS)),
        ItemOp::Configure => {
            let opts = ITEM_OPTS.parse(&args[1..], ctx.config.allow_abbrev)?;
            configure_item(ctx, name, &opts).map(|()| Value::atom(""))
        }
        ItemOp::Delete => common::delete(ctx, name),
    }
}
