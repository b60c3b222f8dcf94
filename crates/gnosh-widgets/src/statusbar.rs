// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Statusbar command
//!
//! Messages form a stack: `push` shows a new message, `pop` restores the
//! previous one.

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "statusBar";

pub const FLAGS: ClassFlags = ClassFlags::STATUS;

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Cget,
    Class,
    Configure,
    Delete,
    Pop,
    Push,
}

const OPS: &[(&str, Op)] = &[
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
    ("pop", Op::Pop),
    ("push", Op::Push),
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
        Op::Pop => {
            let id = ctx.lookup_id(name)?;
            ctx.toolkit().status_pop(id)?;
            Ok(Value::atom(""))
        }
        Op::Push => {
            common::need_args(&args[1..], 1, "push text")?;
            let id = ctx.lookup_id(name)?;
            let depth = ctx.toolkit().status_push(id, &args[1].text())?;
            Ok(Value::from(depth))
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
    fn push_pop_stack() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let bar = create(&mut ctx, &[]).unwrap().text();
        assert_eq!(
            dispatch(&mut ctx, &bar, &args(&["push", "loading"])).unwrap(),
            Value::atom("1")
        );
        assert_eq!(
            dispatch(&mut ctx, &bar, &args(&["push", "done"])).unwrap(),
            Value::atom("2")
        );
        dispatch(&mut ctx, &bar, &args(&["pop"])).unwrap();
        let id = ctx.lookup_id(&bar).unwrap();
        let record = common::headless(&ctx).record(id).unwrap();
        assert_eq!(record.status_stack, vec!["loading".to_string()]);
    }
}
