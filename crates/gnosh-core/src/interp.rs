// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Engine context and command dispatch
//!
//! [`Context`] owns everything a widget command needs: the toolkit backend,
//! the registries, the callback bindings and the engine configuration.
//! Creating a widget registers it under a fresh process-unique name
//! (class + counter), which becomes both its command name and the `%w`
//! substitution.
//!
//! Subcommand dispatch is table-driven: each widget module declares a
//! closed operation enum and a static name table resolved through
//! [`lookup_op`], rather than string comparisons scattered through the
//! configure code.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::registry::Registry;
use crate::signal::{Handlers, Veto};
use crate::toolkit::{ClassFlags, NativeId, Toolkit};
use crate::value::Value;
use log::trace;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// The host-interpreter seam
///
/// The engine never interprets scripts itself; substituted callback
/// commands are handed to this trait for evaluation.
pub trait ScriptEval {
    fn eval(&mut self, script: &str) -> Result<Value>;
}

/// A [`ScriptEval`] that records every script and returns a canned result
///
/// The backbone of the test suite; also usable for dry runs.
#[derive(Clone, Debug)]
pub struct RecordingEval {
    pub scripts: Vec<String>,
    pub result: Value,
}

impl Default for RecordingEval {
    fn default() -> Self {
        RecordingEval {
            scripts: Vec::new(),
            result: Value::atom(""),
        }
    }
}

impl ScriptEval for RecordingEval {
    fn eval(&mut self, script: &str) -> Result<Value> {
        self.scripts.push(script.to_string());
        Ok(self.result.clone())
    }
}

/// Registration record of one widget
#[derive(Clone, Debug)]
pub struct WidgetEntry {
    pub id: NativeId,
    pub class: &'static str,
    pub flags: ClassFlags,
    /// Alternative name for the `%g` substitution, when set
    pub glade_name: Option<SmolStr>,
}

/// The engine context
///
/// Single-threaded by design: all parsing, construction and callback
/// emission happen synchronously on the toolkit's main thread.
pub struct Context {
    toolkit: Box<dyn Toolkit>,
    pub registry: Registry,
    pub handlers: Handlers,
    pub config: Config,
    widgets: FxHashMap<SmolStr, WidgetEntry>,
    counters: FxHashMap<&'static str, u64>,
}

impl Context {
    pub fn new(toolkit: Box<dyn Toolkit>) -> Self {
        Context::with_config(toolkit, Config::default())
    }

    pub fn with_config(toolkit: Box<dyn Toolkit>, config: Config) -> Self {
        Context {
            toolkit,
            registry: Registry::new(),
            handlers: Handlers::new(),
            config,
            widgets: FxHashMap::default(),
            counters: FxHashMap::default(),
        }
    }

    pub fn toolkit(&mut self) -> &mut dyn Toolkit {
        self.toolkit.as_mut()
    }

    pub fn toolkit_ref(&self) -> &dyn Toolkit {
        self.toolkit.as_ref()
    }

    /// Register a widget under a fresh process-unique command name
    pub fn register(&mut self, class: &'static str, id: NativeId, flags: ClassFlags) -> SmolStr {
        let counter = self.counters.entry(class).or_insert(0);
        let name = SmolStr::new(format!("{class}{counter}"));
        *counter += 1;
        trace!("registered {class} handle {} as {name}", id.0);
        self.widgets.insert(
            name.clone(),
            WidgetEntry {
                id,
                class,
                flags,
                glade_name: None,
            },
        );
        name
    }

    /// Forget a widget's registration and callback bindings
    ///
    /// The native widget is not destroyed; that is the caller's step, so a
    /// failed construction can be rolled back with the same call.
    pub fn unregister(&mut self, name: &str) -> Result<WidgetEntry> {
        let entry = self
            .widgets
            .remove(name)
            .ok_or_else(|| Error::NoSuchWidget(name.to_string()))?;
        self.handlers.forget(name);
        trace!("unregistered {name}");
        Ok(entry)
    }

    pub fn lookup(&self, name: &str) -> Result<&WidgetEntry> {
        self.widgets
            .get(name)
            .ok_or_else(|| Error::NoSuchWidget(name.to_string()))
    }

    pub fn lookup_id(&self, name: &str) -> Result<NativeId> {
        self.lookup(name).map(|entry| entry.id)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.widgets.contains_key(name)
    }

    pub fn set_glade_name(&mut self, name: &str, glade_name: &str) -> Result<()> {
        let entry = self
            .widgets
            .get_mut(name)
            .ok_or_else(|| Error::NoSuchWidget(name.to_string()))?;
        entry.glade_name = Some(SmolStr::new(glade_name));
        Ok(())
    }

    /// Bind a callback command to a widget signal (idempotent)
    pub fn bind(&mut self, widget: &str, signal: &str, command: &str) -> Result<()> {
        let id = self.lookup_id(widget)?;
        self.handlers
            .bind(self.toolkit.as_mut(), id, widget, signal, command)
    }

    /// Deliver a toolkit event to the widget's bound callback, if any
    pub fn emit(
        &self,
        interp: &mut dyn ScriptEval,
        widget: &str,
        event: &Event,
    ) -> Result<Veto> {
        let entry = self.lookup(widget)?;
        let glade = entry.glade_name.as_deref().unwrap_or(widget);
        self.handlers
            .emit(interp, widget, glade, event, self.config.recursion_limit)
    }
}

/// Resolve a subcommand token against a widget's operation table
pub fn lookup_op<Op: Copy>(ops: &[(&'static str, Op)], token: &str) -> Result<Op> {
    ops.iter()
        .find(|(name, _)| *name == token)
        .map(|(_, op)| *op)
        .ok_or_else(|| Error::UnknownSubcommand {
            token: token.to_string(),
            expected: ops
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
