// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Status-icon command
//!
//! A status icon given a `-name` is additionally published in the context
//! registry so other code can find it; the name is released when the icon
//! is deleted or renamed.

use crate::common;
use gnosh_core::prelude::*;

pub const CLASS: &str = "statusIcon";

pub const OPTS: OptSchema = OptSchema::new(&[
    Opt::prop("icon", OptKind::Str, "icon-name"),
    Opt::prop("tooltip", OptKind::Str, "tooltip-text"),
    Opt::prop("visible", OptKind::Bool, "visible"),
    Opt::new("onActivate", OptKind::Str),
    Opt::new("onPopup", OptKind::Str),
    Opt::new("name", OptKind::Str),
]);

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
        release_icon_name(ctx, &name);
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
        &[("onActivate", "activate"), ("onPopup", "popup-menu")],
    )?;
    if let Some(public) = opts.get_str("name") {
        let public = public.to_string();
        if ctx.registry.icon_lookup(&public) != Some(id) {
            // claim the new name before letting go of the old one
            ctx.registry.icon_register(&public, id)?;
            release_icon_name(ctx, name);
        }
        ctx.set_glade_name(name, &public)?;
    }
    Ok(())
}

/// Release the icon's registry name, if it holds one
fn release_icon_name(ctx: &mut Context, name: &str) {
    if let Ok(entry) = ctx.lookup(name) {
        if let Some(public) = entry.glade_name.clone() {
            ctx.registry.icon_release(&public);
        }
    }
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
        Op::Delete => {
            release_icon_name(ctx, name);
            common::delete(ctx, name)
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
    fn named_icon_is_published() {
        let mut ctx = Context::new(Box::new(HeadlessToolkit::new()));
        let icon = create(&mut ctx, &args(&["-icon", "mail", "-name", "tray"]))
            .unwrap()
            .text();
        let id = ctx.lookup_id(&icon).unwrap();
        assert_eq!(ctx.registry.icon_lookup("tray"), Some(id));

        // a second icon cannot take the same public name
        let err = create(&mut ctx, &args(&["-name", "tray"])).unwrap_err();
        assert_eq!(err, Error::NameInUse("tray".into()));
        assert!(!ctx.exists("statusIcon1"));

        dispatch(&mut ctx, &icon, &args(&["delete"])).unwrap();
        assert_eq!(ctx.registry.icon_lookup("tray"), None);
    }
}
