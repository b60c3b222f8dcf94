// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Single-line text entry command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "entry";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("text", OptKind::Str, "text"),
    Opt::prop("editable", OptKind::Bool, "editable"),
    Opt::prop("maxLength", OptKind::Int, "max-length"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::prop("sensitive", OptKind::Bool, "sensitive"),
    Opt::new("onChanged", OptKind::Str),
    Opt::new("onActivate", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Cget,
    Class,
    Configure,
    Delete,
    Get,
    Set,
}

const OPS: &[(&str, Op)] = &[
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("delete", Op::Delete),
    ("get", Op::Get),
    ("set", Op::Set),
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
    common::bind_callbacks(
        ctx,
        name,
        opts,
        &[("onChanged", "changed"), ("onActivate", "activate")],
    )?;
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
        Op::Get => {
            let id = ctx.lookup_id(name)?;
            match ctx.toolkit().get_property(id, "text") {
                Ok(Property::Str(text)) => Ok(Value::from(text)),
                _ => Ok(Value::atom("")),
            }
        }
        Op::Set => {
            common::need_args(&args[1..], 1, "set text")?;
            let id = ctx.lookup_id(name)?;
            ctx.toolkit()
                .set_property(id, "text", Property::Str(args[1].text()))?;
            Ok(Value::atom(""))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use gnosh_core::headless::HeadlessToolkit;
    use gnosh_core::interp::RecordingEval;

    fn args(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::atom(t)).collect()
    }

    #[test]
    fn get_and_set() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let name = create(&mut ctx, &[]).unwrap().text();
        assert_eq!(
            dispatch(&mut ctx, &name, &args(&["get"])).unwrap(),
            Value::atom("")
        );
        dispatch(&mut ctx, &name, &args(&["set", "hello"])).unwrap();
        assert_eq!(
            dispatch(&mut ctx, &name, &args(&["get"])).unwrap(),
            Value::atom("hello")
        );
    }

    #[test]
    fn changed_callback_quotes_text() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let name = create(&mut ctx, &args(&["-onChanged", "track %t"]))
            .unwrap()
            .text();
        let mut interp = RecordingEval::default();
        ctx.emit(
            &mut interp,
            &name,
            &Event::Changed {
                text: "two words".to_string(),
            },
        )
        .unwrap();
        assert_eq!(interp.scripts, vec!["track {two words}".to_string()]);
    }
}
