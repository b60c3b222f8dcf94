// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Push-button command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "button";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("text", OptKind::Str, "label"),
    Opt::prop("icon", OptKind::Str, "icon-name"),
    Opt::prop("tooltip", OptKind::Str, "tooltip-text"),
    Opt::prop("sensitive", OptKind::Bool, "sensitive"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("relief", OptKind::Str),
    Opt::new("onClicked", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

const RELIEF: EnumTable = EnumTable::new("relief", &[("normal", 0), ("half", 1), ("none", 2)]);

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
    if let Some(token) = opts.get_str("relief") {
        let relief = RELIEF.set(token)?;
        ctx.toolkit().set_property(id, "relief", Property::Int(relief))?;
    }
    common::bind_callbacks(ctx, name, opts, &[("onClicked", "clicked")])?;
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
    use gnosh_core::interp::RecordingEval;

    fn context() -> Context {
        Context::new(Box::new(HeadlessToolkit::new()))
    }

    fn args(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::atom(t)).collect()
    }

    #[test]
    fn create_configure_cget() {
        let mut ctx = context();
        let name = create(&mut ctx, &args(&["-text", "Ok", "-relief", "none"]))
            .unwrap()
            .text();
        assert_eq!(name, "button0");

        let got = dispatch(&mut ctx, &name, &args(&["cget", "-text"])).unwrap();
        assert_eq!(got, Value::atom("Ok"));

        dispatch(&mut ctx, &name, &args(&["configure", "-text", "Cancel"])).unwrap();
        let got = dispatch(&mut ctx, &name, &args(&["cget", "-text"])).unwrap();
        assert_eq!(got, Value::atom("Cancel"));

        let class = dispatch(&mut ctx, &name, &args(&["class"])).unwrap();
        assert_eq!(class, Value::atom("button"));
    }

    #[test]
    fn bad_relief_rolls_back_creation() {
        let mut ctx = context();
        let err = create(&mut ctx, &args(&["-relief", "bouncy"])).unwrap_err();
        assert!(matches!(err, Error::UnknownEnum { .. }));
        // nothing registered, nothing leaked
        assert!(!ctx.exists("button0"));
    }

    #[test]
    fn clicked_callback() {
        let mut ctx = context();
        let name = create(&mut ctx, &args(&["-onClicked", "pressed %w"]))
            .unwrap()
            .text();
        let mut interp = RecordingEval::default();
        ctx.emit(&mut interp, &name, &Event::Clicked).unwrap();
        assert_eq!(interp.scripts, vec!["pressed button0".to_string()]);
    }

    #[test]
    fn unknown_subcommand() {
        let mut ctx = context();
        let name = create(&mut ctx, &[]).unwrap().text();
        let err = dispatch(&mut ctx, &name, &args(&["flash"])).unwrap_err();
        assert!(matches!(err, Error::UnknownSubcommand { .. }));
    }

    #[test]
    fn delete_destroys_native_widget() {
        let mut ctx = context();
        let name = create(&mut ctx, &[]).unwrap().text();
        let id = ctx.lookup_id(&name).unwrap();
        dispatch(&mut ctx, &name, &args(&["delete"])).unwrap();
        assert!(!ctx.exists(&name));
        assert!(matches!(
            ctx.toolkit().get_property(id, "label"),
            Err(Error::Toolkit(_))
        ));
    }
}
