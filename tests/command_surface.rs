// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! End-to-end tests of the command surface over the headless backend

use gnosh::event::Event;
use gnosh::headless::HeadlessToolkit;
use gnosh::interp::{Context, RecordingEval};
use gnosh::{widgets, Error, Value};

fn context() -> Context {
    Context::new(Box::new(HeadlessToolkit::new()))
}

fn args(tokens: &[&str]) -> Vec<Value> {
    tokens.iter().map(|t| Value::atom(t)).collect()
}

fn headless(ctx: &Context) -> &HeadlessToolkit {
    ctx.toolkit_ref()
        .as_any()
        .downcast_ref()
        .expect("headless backend")
}

#[test]
fn build_a_small_ui() {
    let mut ctx = context();

    let window = widgets::create(&mut ctx, "window", &args(&["-title", "demo"]))
        .unwrap()
        .text();
    let vbox = widgets::create(&mut ctx, "box", &args(&["-orientation", "vertical"]))
        .unwrap()
        .text();
    let entry = widgets::create(&mut ctx, "entry", &args(&["-text", "type here"]))
        .unwrap()
        .text();
    let button = widgets::create(&mut ctx, "button", &args(&["-text", "Ok"]))
        .unwrap()
        .text();

    widgets::dispatch(&mut ctx, &window, &args(&["add", &vbox])).unwrap();
    widgets::dispatch(&mut ctx, &vbox, &args(&["add", &entry])).unwrap();
    widgets::dispatch(
        &mut ctx,
        &vbox,
        &args(&["addEnd", &button, "-expand", "1", "-fill", "0.5 0.5"]),
    )
    .unwrap();

    let vbox_id = ctx.lookup_id(&vbox).unwrap();
    let record = headless(&ctx).record(vbox_id).unwrap();
    assert_eq!(record.children.len(), 1);
    assert_eq!(record.end_children.len(), 1);
    // fractional fill packed the button behind an alignment wrapper
    assert_eq!(record.aligned_children.len(), 1);

    // deleting the window destroys the whole tree
    widgets::dispatch(&mut ctx, &window, &args(&["delete"])).unwrap();
    assert!(!headless(&ctx).alive(vbox_id));
}

#[test]
fn callback_round_trip_with_substitution() {
    let mut ctx = context();
    let entry = widgets::create(
        &mut ctx,
        "entry",
        &args(&["-onChanged", "set ::current %t", "-name", "search-field"]),
    )
    .unwrap()
    .text();

    let mut interp = RecordingEval::default();
    ctx.emit(
        &mut interp,
        &entry,
        &Event::Changed {
            text: "abc".to_string(),
        },
    )
    .unwrap();
    assert_eq!(interp.scripts, vec!["set ::current abc".to_string()]);

    // rebinding replaces, never accumulates: one emission, one script
    widgets::dispatch(
        &mut ctx,
        &entry,
        &args(&["configure", "-onChanged", "refresh %g"]),
    )
    .unwrap();
    interp.scripts.clear();
    ctx.emit(
        &mut interp,
        &entry,
        &Event::Changed {
            text: "abcd".to_string(),
        },
    )
    .unwrap();
    assert_eq!(interp.scripts, vec!["refresh search-field".to_string()]);
}

#[test]
fn radio_groups_span_commands() {
    let mut ctx = context();
    widgets::create(
        &mut ctx,
        "radioButton",
        &args(&["-onValue", "A", "-variable", "v"]),
    )
    .unwrap();
    let err = widgets::create(
        &mut ctx,
        "radioButton",
        &args(&["-onValue", "A", "-variable", "v"]),
    )
    .unwrap_err();
    assert_eq!(
        err,
        Error::RadioValueInUse {
            group: "v".into(),
            value: "A".into()
        }
    );
}

#[test]
fn errors_abort_the_whole_command() {
    let mut ctx = context();
    let button = widgets::create(&mut ctx, "button", &[]).unwrap().text();

    // unknown option: error names the token
    let err = widgets::dispatch(
        &mut ctx,
        &button,
        &args(&["configure", "-colour", "red"]),
    )
    .unwrap_err();
    match err {
        Error::UnknownOption { token, .. } => assert_eq!(token, "-colour"),
        other => panic!("unexpected: {other:?}"),
    }

    // duplicate option in one call
    let err = widgets::dispatch(
        &mut ctx,
        &button,
        &args(&["configure", "-text", "a", "-text", "b"]),
    )
    .unwrap_err();
    assert_eq!(err, Error::DuplicateOption("-text".into()));

    // the widget survives failed configure calls
    let class = widgets::dispatch(&mut ctx, &button, &args(&["class"])).unwrap();
    assert_eq!(class, Value::atom("button"));
}

#[test]
fn unsupported_class_is_reported_not_guessed() {
    let mut ctx = context();
    let err = widgets::create(&mut ctx, "colorWheel", &[]).unwrap_err();
    assert_eq!(err, Error::Unsupported("colorWheel".into()));
}

#[test]
fn instance_commands_are_process_unique() {
    let mut ctx = context();
    let a = widgets::create(&mut ctx, "label", &[]).unwrap().text();
    let b = widgets::create(&mut ctx, "label", &[]).unwrap().text();
    assert_ne!(a, b);
    assert_eq!(a, "label0");
    assert_eq!(b, "label1");
    let err = widgets::dispatch(&mut ctx, "label9", &args(&["class"])).unwrap_err();
    assert_eq!(err, Error::NoSuchWidget("label9".into()));
}
