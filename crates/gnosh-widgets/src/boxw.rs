// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Box container command
//!
//! Children are packed with `add`/`addBegin`/`addEnd` and per-child pack
//! options. A fractional fill or an explicit alignment cannot be expressed
//! by plain box packing, so such children are packed behind an alignment
//! wrapper (the needAlign rule).

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "box";

pub const FLAGS: ClassFlags = ClassFlags::CONTAINER;

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::new("orientation", OptKind::Str),
    Opt::prop("spacing", OptKind::Int, "spacing"),
    Opt::prop("homogeneous", OptKind::Bool, "homogeneous"),
    Opt::prop("borderWidth", OptKind::Int, "border-width"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("name", OptKind::Str),
]);

/// Per-child packing options
pub const PACK_OPTS: OptSchema = OptSchema::new(&[
    Opt::new("expand", OptKind::Bool),
    Opt::new("fill", OptKind::List(1, 2)),
    Opt::new("align", OptKind::Obj),
    Opt::new("padding", OptKind::Int),
]);

const ORIENTATION: EnumTable =
    EnumTable::new("orientation", &[("horizontal", 0), ("vertical", 1)]);

#[derive(Copy, Clone, Debug)]
enum Op {
    Add,
    AddBegin,
    AddEnd,
    Cget,
    Class,
    Configure,
    Delete,
}

const OPS: &[(&str, Op)] = &[
    ("add", Op::Add),
    ("addBegin", Op::AddBegin),
    ("addEnd", Op::AddEnd),
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
    if let Some(token) = opts.get_str("orientation") {
        let orientation = ORIENTATION.set(token)?;
        ctx.toolkit()
            .set_property(id, "orientation", Property::Int(orientation))?;
    }
    common::apply_glade_name(ctx, name, opts)
}

/// Resolve pack options into toolkit parameters plus the needAlign flag
pub fn pack_params(opts: &ParsedOpts, at_end: bool) -> Result<(PackParams, bool)> {
    let mut params = PackParams {
        at_end,
        ..Default::default()
    };
    if let Some(expand) = opts.get_bool("expand") {
        params.expand = expand;
    }
    if let Some(items) = opts.get_list("fill") {
        let x = fraction("fill", items[0].to_float()?)?;
        let y = if items.len() == 2 {
            fraction("fill", items[1].to_float()?)?
        } else {
            x
        };
        params.fill = (x, y);
    }
    if let Some(value) = opts.get_obj("align") {
        params.align = parse_align(value)?;
    }
    if let Some(padding) = opts.get_int("padding") {
        params.padding = padding;
    }

    // plain packing only expresses fill = 0 or 1 per axis and centered
    // alignment
    let fractional = |f: f64| f > 0.0 && f < 1.0;
    let need_align =
        fractional(params.fill.0) || fractional(params.fill.1) || params.align != (0.5, 0.5);
    Ok((params, need_align))
}

/// Parse `-align`: a named position or one/two alignment fractions
fn parse_align(value: &Value) -> Result<(f64, f64)> {
    let items = value.items();
    if items.len() == 1 {
        if let Some(word) = items[0].as_atom() {
            match word {
                "left" => return Ok((0.0, 0.5)),
                "right" => return Ok((1.0, 0.5)),
                "top" => return Ok((0.5, 0.0)),
                "bottom" => return Ok((0.5, 1.0)),
                "center" => return Ok((0.5, 0.5)),
                _ => (),
            }
        }
    }
    match items.len() {
        1 => {
            let a = fraction("align", items[0].to_float()?)?;
            Ok((a, a))
        }
        2 => Ok((
            fraction("align", items[0].to_float()?)?,
            fraction("align", items[1].to_float()?)?,
        )),
        got => Err(Error::BadListLength {
            option: "-align".to_string(),
            expected: "1 to 2".to_string(),
            got,
        }),
    }
}

fn add(ctx: &mut Context, name: &str, args: &[Value], at_end: bool) -> Result<Value> {
    let Some(children) = args.first() else {
        return Err(Error::WrongArgCount(format!(
            "{name} add widget-list ?option value ...?"
        )));
    };
    let opts = PACK_OPTS.parse(&args[1..], ctx.config.allow_abbrev)?;
    let (params, need_align) = pack_params(&opts, at_end)?;
    let parent = ctx.lookup_id(name)?;
    for child in children.items() {
        let child_id = ctx.lookup_id(&child.text())?;
        ctx.toolkit().box_pack(parent, child_id, &params, need_align)?;
    }
    Ok(Value::atom(""))
}

pub fn dispatch(ctx: &mut Context, name: &str, args: &[Value]) -> Result<Value> {
    let Some(op) = args.first() else {
        return Err(Error::WrongArgCount(format!("{name} subcommand ?arg ...?")));
    };
    match lookup_op(OPS, &op.text())? {
        Op::Add | Op::AddBegin => add(ctx, name, &args[1..], false),
        Op::AddEnd => add(ctx, name, &args[1..], true),
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
    use crate::button;
    use gnosh_core::headless::HeadlessToolkit;

    fn context() -> Context {
        Context::new(Box::new(HeadlessToolkit::new()))
    }

    fn args(tokens: &[&str]) -> Vec<Value> {
        tokens.iter().map(|t| Value::atom(t)).collect()
    }

    #[test]
    fn pack_scenario() {
        // -expand 1 -fill {0.5 0.5} -align center
        let opts = PACK_OPTS
            .parse(
                &[
                    Value::atom("-expand"),
                    Value::atom("1"),
                    Value::atom("-fill"),
                    Value::atom("0.5 0.5"),
                    Value::atom("-align"),
                    Value::atom("center"),
                ],
                true,
            )
            .unwrap();
        let (params, need_align) = pack_params(&opts, false).unwrap();
        assert!(params.expand);
        assert_eq!(params.fill, (0.5, 0.5));
        assert_eq!(params.align, (0.5, 0.5));
        // fractional fill forces the alignment wrapper
        assert!(need_align);
    }

    #[test]
    fn only_non_default_align_wraps() {
        // explicitly centered is still the default: no wrapper
        let opts = PACK_OPTS.parse(&args(&["-align", "center"]), true).unwrap();
        let (params, need_align) = pack_params(&opts, false).unwrap();
        assert_eq!(params.align, (0.5, 0.5));
        assert!(!need_align);

        let opts = PACK_OPTS.parse(&args(&["-align", "left"]), true).unwrap();
        let (params, need_align) = pack_params(&opts, false).unwrap();
        assert_eq!(params.align, (0.0, 0.5));
        assert!(need_align);
    }

    #[test]
    fn whole_fill_needs_no_wrapper() {
        let opts = PACK_OPTS
            .parse(&args(&["-expand", "1", "-fill", "1"]), true)
            .unwrap();
        let (params, need_align) = pack_params(&opts, false).unwrap();
        assert_eq!(params.fill, (1.0, 1.0));
        assert!(!need_align);
    }

    #[test]
    fn fill_out_of_range_rejected() {
        let err = PACK_OPTS
            .parse(&args(&["-fill", "2.0"]), true)
            .map(|opts| pack_params(&opts, false))
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    #[test]
    fn add_packs_children() {
        let mut ctx = context();
        let boxname = create(&mut ctx, &args(&["-orientation", "vertical"]))
            .unwrap()
            .text();
        let b0 = button::create(&mut ctx, &[]).unwrap().text();
        let b1 = button::create(&mut ctx, &[]).unwrap().text();

        dispatch(&mut ctx, &boxname, &args(&["add", &b0])).unwrap();
        dispatch(
            &mut ctx,
            &boxname,
            &args(&["addEnd", &b1, "-fill", "0.5"]),
        )
        .unwrap();

        let parent = ctx.lookup_id(&boxname).unwrap();
        let child1 = ctx.lookup_id(&b1).unwrap();
        let record = common::headless(&ctx).record(parent).unwrap();
        assert_eq!(record.children.len(), 1);
        assert_eq!(record.end_children, vec![child1]);
        assert_eq!(record.aligned_children, vec![child1]);
    }

    #[test]
    fn add_unknown_child_fails() {
        let mut ctx = context();
        let boxname = create(&mut ctx, &[]).unwrap().text();
        let err = dispatch(&mut ctx, &boxname, &args(&["add", "ghost3"])).unwrap_err();
        assert_eq!(err, Error::NoSuchWidget("ghost3".into()));
    }
}
