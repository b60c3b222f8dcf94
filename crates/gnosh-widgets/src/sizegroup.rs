// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Size-group command
//!
//! A size group forces a common requested size on its member widgets along
//! one or both axes. Membership is tracked in the context registry under
//! the group's command name; the registry entry exists only while the
//! group has members.

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "sizeGroup";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::new("mode", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

const MODE: EnumTable = EnumTable::new(
    "mode",
    &[("horizontal", 0), ("vertical", 1), ("both", 2)],
);

fn mode_from(value: i64) -> SizeMode {
    match value {
        0 => SizeMode::Horizontal,
        1 => SizeMode::Vertical,
        _ => SizeMode::Both,
    }
}

#[derive(Copy, Clone, Debug)]
enum Op {
    Add,
    Cget,
    Class,
    Configure,
    Delete,
    Remove,
}

const OPS: &[(&str, Op)] = &[
    ("add", Op::Add),
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
    ("remove", Op::Remove),
];

pub fn create(ctx: &mut Context, args: &[Value]) -> Result<Value> {
    let opts = OPTS.parse(args, ctx.config.allow_abbrev)?;
    let id = ctx.toolkit().create(CLASS, ClassFlags::empty())?;
    ctx.toolkit().set_property(id, "mode", Property::Int(2))?;
    let name = ctx.register(CLASS, id, ClassFlags::empty());
    if let Err(err) = configure(ctx, &name, &opts) {
        common::rollback(ctx, &name);
        return Err(err);
    }
    Ok(Value::atom(name))
}

fn configure(ctx: &mut Context, name: &str, opts: &ParsedOpts) -> Result<()> {
    let id = ctx.lookup_id(name)?;
    if let Some(token) = opts.get_str("mode") {
        let mode = MODE.set(token)?;
        ctx.toolkit().set_property(id, "mode", Property::Int(mode))?;
    }
    common::apply_glade_name(ctx, name, opts)
}

fn current_mode(ctx: &mut Context, name: &str) -> Result<SizeMode> {
    let id = ctx.lookup_id(name)?;
    Ok(match ctx.toolkit().get_property(id, "mode") {
        Ok(Property::Int(value)) => mode_from(value),
        _ => SizeMode::Both,
    })
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::Add => {
            common::need_args(&args[1..], 1, "add widget-list")?;
            let mode = current_mode(ctx, name)?;
            for widget in args[1].items() {
                let widget = widget.text();
                // members must exist before they can share a size
                ctx.lookup(&widget)?;
                ctx.registry.size_join(name, mode, &widget);
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
        Op::Delete => {
            ctx.registry.size_drop(name);
            common::delete(ctx, name)
        }
        Op::Remove => {
            common::need_args(&args[1..], 1, "remove widget-list")?;
            for widget in args[1].items() {
                ctx.registry.size_leave(name, &widget.text());
            }
            Ok(Value::atom(""))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::button;
    use gnosh_core::headless::HeadlessToolkit;

    fn args(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::atom(t)).collect()
    }

    #[test]
    fn membership_lifecycle() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let group = create(&mut ctx, &args(&["-mode", "horizontal"]))
            .unwrap()
            .text();
        let b0 = button::create(&mut ctx, &[]).unwrap().text();
        let b1 = button::create(&mut ctx, &[]).unwrap().text();

        let list = format!("{b0} {b1}");
        dispatch(&mut ctx, &group, &args(&["add", &list])).unwrap();
        assert_eq!(ctx.registry.size_members(&group).len(), 2);
        assert_eq!(ctx.registry.size_mode(&group), Some(SizeMode::Horizontal));

        dispatch(&mut ctx, &group, &args(&["remove", &b0])).unwrap();
        assert_eq!(ctx.registry.size_members(&group).len(), 1);
        dispatch(&mut ctx, &group, &args(&["remove", &b1])).unwrap();
        // empty group is gone from the registry
        assert_eq!(ctx.registry.size_mode(&group), None);
    }

    #[test]
    fn members_must_exist() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let group = create(&mut ctx, &[]).unwrap().text();
        let err = dispatch(&mut ctx, &group, &args(&["add", "phantom0"])).unwrap_err();
        assert_eq!(err, Error::NoSuchWidget("phantom0".into()));
    }
}
