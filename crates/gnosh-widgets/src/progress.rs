// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Progress-bar command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "progressBar";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("fraction", OptKind::Fraction, "fraction"),
    Opt::prop("pulseStep", OptKind::Fraction, "pulse-step"),
    Opt::prop("text", OptKind::Str, "text"),
    Opt::prop("showText", OptKind::Bool, "show-text"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Cget,
    Class,
    Configure,
    Delete,
    Pulse,
}

const OPS: &[(&str, Op)] = &[
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
    ("pulse", Op::Pulse),
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
        Op::Pulse => {
            let id = ctx.lookup_id(name)?;
            ctx.toolkit().progress_pulse(id)?;
            Ok(Value::atom(""))
        }
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
    fn fraction_is_range_checked() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let name = create(&mut ctx, &args(&["-fraction", "0.4"])).unwrap().text();
        assert_eq!(
            dispatch(&mut ctx, &name, &args(&["cget", "-fraction"])).unwrap(),
            Value::atom("0.4")
        );
        let err = dispatch(&mut ctx, &name, &args(&["configure", "-fraction", "1.5"]))
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    #[test]
    fn pulse_reaches_toolkit() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let name = create(&mut ctx, &[]).unwrap().text();
        dispatch(&mut ctx, &name, &args(&["pulse"])).unwrap();
        dispatch(&mut ctx, &name, &args(&["pulse"])).unwrap();
        let id = ctx.lookup_id(&name).unwrap();
        assert_eq!(common::headless(&ctx).record(id).unwrap().pulse_count, 2);
    }
}
