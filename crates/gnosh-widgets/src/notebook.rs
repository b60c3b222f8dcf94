// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Notebook (tabbed container) command

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "notebook";

pub const FLAGS: ClassFlags = ClassFlags::PAGED;

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("showTabs", OptKind::Bool, "show-tabs"),
    Opt::prop("showBorder", OptKind::Bool, "show-border"),
    Opt::prop("scrollable", OptKind::Bool, "scrollable"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("tabPosition", OptKind::Str),
    Opt::new("onSwitchPage", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

const TAB_POSITION: EnumTable = EnumTable::new(
    "tabPosition",
    &[("left", 0), ("right", 1), ("top", 2), ("bottom", 3)],
);

#[derive(Copy, Clone, Debug)]
enum Op {
    AddPage,
    Cget,
    Class,
    Configure,
    CurrentPage,
    Delete,
    NextPage,
}

const OPS: &[(&str, Op)] = &[
    ("addPage", Op::AddPage),
    ("cget", Op::Cget),
    ("class", Op::Class),
    ("configure", Op::Configure),
    ("currentPage", Op::CurrentPage),
    ("delete", Op::Delete),
    ("nextPage", Op::NextPage),
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
    if let Some(token) = opts.get_str("tabPosition") {
        let pos = TAB_POSITION.set(token)?;
        ctx.toolkit().set_property(id, "tab-pos", Property::Int(pos))?;
    }
    common::bind_callbacks(ctx, name, opts, &[("onSwitchPage", "switch-page")])?;
    common::apply_glade_name(ctx, name, opts)
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::AddPage => {
            common::need_args(&args[1..], 2, "addPage widget label")?;
            let id = ctx.lookup_id(name)?;
            let child = ctx.lookup_id(&args[1].text())?;
            let page = ctx.toolkit().insert_page(id, child, &args[2].text())?;
            Ok(Value::from(page))
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
        Op::CurrentPage => {
            let id = ctx.lookup_id(name)?;
            match args.get(1) {
                None => Ok(Value::from(ctx.toolkit().current_page(id)?)),
                Some(page) => {
                    let page = page.to_int()?;
                    ctx.toolkit().set_current_page(id, page)?;
                    Ok(Value::atom(""))
                }
            }
        }
        Op::Delete => common::delete(ctx, name),
        Op::NextPage => {
            let id = ctx.lookup_id(name)?;
            let next = ctx.toolkit().current_page(id)? + 1;
            ctx.toolkit().set_current_page(id, next)?;
            Ok(Value::from(next))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::label;
    use gnosh_core::headless::HeadlessToolkit;
    use gnosh_core::interp::RecordingEval;

    fn args(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::atom(t)).collect()
    }

    #[test]
    fn pages_and_navigation() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let nb = create(&mut ctx, &args(&["-tabPosition", "bottom"]))
            .unwrap()
            .text();
        let p0 = label::create(&mut ctx, &[]).unwrap().text();
        let p1 = label::create(&mut ctx, &[]).unwrap().text();

        let idx = dispatch(&mut ctx, &nb, &args(&["addPage", &p0, "First"])).unwrap();
        assert_eq!(idx, Value::atom("0"));
        let idx = dispatch(&mut ctx, &nb, &args(&["addPage", &p1, "Second"])).unwrap();
        assert_eq!(idx, Value::atom("1"));

        assert_eq!(
            dispatch(&mut ctx, &nb, &args(&["currentPage"])).unwrap(),
            Value::atom("0")
        );
        dispatch(&mut ctx, &nb, &args(&["nextPage"])).unwrap();
        assert_eq!(
            dispatch(&mut ctx, &nb, &args(&["currentPage"])).unwrap(),
            Value::atom("1")
        );
        // past the last page
        let err = dispatch(&mut ctx, &nb, &args(&["nextPage"])).unwrap_err();
        assert!(matches!(err, Error::Toolkit(_)));
    }

    #[test]
    fn switch_page_callback() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let nb = create(&mut ctx, &args(&["-onSwitchPage", "showPage %p"]))
            .unwrap()
            .text();
        let mut interp = RecordingEval::default();
        ctx.emit(&mut interp, &nb, &Event::SwitchPage { page: 2 })
            .unwrap();
        assert_eq!(interp.scripts, vec!["showPage 2".to_string()]);
    }
}
