// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Label command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "label";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("text", OptKind::Str, "label"),
    Opt::prop("selectable", OptKind::Bool, "selectable"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("justify", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

const JUSTIFY: EnumTable = EnumTable::new(
    "justify",
    &[("left", 0), ("right", 1), ("center", 2), ("fill", 3)],
);

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
    if let Some(token) = opts.get_str("justify") {
        let justify = JUSTIFY.set(token)?;
        ctx.toolkit()
            .set_property(id, "justify", Property::Int(justify))?;
    }
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
        Op::Delete => common::delete(ctx, name),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use gnosh_core::headless::HeadlessToolkit;

    fn args(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::atom(t)).collect()
    }

    #[test]
    fn justify_is_enumerated() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let name = create(&mut ctx, &args(&["-text", "a", "-justify", "right"]))
            .unwrap()
            .text();
        let id = ctx.lookup_id(&name).unwrap();
        assert_eq!(
            ctx.toolkit().get_property(id, "justify").unwrap(),
            Property::Int(1)
        );
        let err = dispatch(&mut ctx, &name, &args(&["configure", "-justify", "wavy"]))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownEnum { .. }));
    }
}
