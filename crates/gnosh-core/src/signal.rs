// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Signal-callback binding
//!
//! [`Handlers`] associates a stored command template with a
//! (widget, signal) pair. Binding is idempotent: rebinding replaces the
//! previous template and never accumulates handlers, so one emission runs
//! one command. Binding the empty command disconnects fully.
//!
//! On emission the template's percent placeholders are substituted from
//! the event payload, the result is handed to the host interpreter, and a
//! boolean script result is returned as a veto verdict (e.g. suppressing
//! a window close).

use crate::error::{Error, Result};
use crate::event::Event;
use crate::interp::ScriptEval;
use crate::template::{substitute, Field};
use crate::toolkit::{NativeId, Toolkit};
use log::{debug, trace};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::cell::Cell;

/// Verdict of a callback on the default behaviour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Veto {
    /// Let the default behaviour proceed
    Pass,
    /// Suppress the default behaviour
    Veto,
}

impl Veto {
    pub fn is_veto(self) -> bool {
        self == Veto::Veto
    }
}

/// Stored callback commands, keyed by widget name and signal
#[derive(Debug, Default)]
pub struct Handlers {
    map: FxHashMap<(SmolStr, SmolStr), String>,
    depth: Cell<usize>,
}

impl Handlers {
    pub fn new() -> Self {
        Default::default()
    }

    /// Bind `command` to a signal, replacing any previous binding
    ///
    /// The toolkit slot is connected on first bind only and disconnected
    /// when `command` is empty, so rebinding is idempotent at both layers.
    pub fn bind(
        &mut self,
        toolkit: &mut dyn Toolkit,
        id: NativeId,
        widget: &str,
        signal: &str,
        command: &str,
    ) -> Result<()> {
        let key = (SmolStr::new(widget), SmolStr::new(signal));
        if command.is_empty() {
            if self.map.remove(&key).is_some() {
                toolkit.disconnect(id, signal)?;
                debug!("unbound {signal} on {widget}");
            }
            return Ok(());
        }
        if !self.map.contains_key(&key) {
            toolkit.connect(id, signal)?;
        }
        debug!("bound {signal} on {widget}");
        self.map.insert(key, command.to_string());
        Ok(())
    }

    /// The command currently bound to a signal, if any
    pub fn command(&self, widget: &str, signal: &str) -> Option<&str> {
        self.map
            .get(&(SmolStr::new(widget), SmolStr::new(signal)))
            .map(String::as_str)
    }

    /// Drop all bindings of one widget (on widget deletion)
    pub fn forget(&mut self, widget: &str) {
        self.map.retain(|(w, _), _| w != widget);
    }

    /// Substitute and evaluate the callback bound to `event`'s signal
    ///
    /// Returns [`Veto::Pass`] when no callback is bound. Nested emission
    /// deeper than `limit` is an error.
    pub fn emit(
        &self,
        interp: &mut dyn ScriptEval,
        widget: &str,
        glade_name: &str,
        event: &Event,
        limit: usize,
    ) -> Result<Veto> {
        let Some(command) = self.command(widget, event.signal()) else {
            return Ok(Veto::Pass);
        };
        if self.depth.get() >= limit {
            return Err(Error::RecursionLimit(limit));
        }

        let mut fields = event.fields();
        fields.push(('w', Field::Str(widget.to_string())));
        fields.push(('g', Field::Str(glade_name.to_string())));
        let script = substitute(command, &fields);
        trace!("emit {} on {widget}: {script}", event.signal());

        self.depth.set(self.depth.get() + 1);
        let result = interp.eval(&script);
        self.depth.set(self.depth.get() - 1);

        // only an explicitly boolean script result can veto
        Ok(match result?.to_bool() {
            Ok(true) => Veto::Veto,
            _ => Veto::Pass,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::headless::HeadlessToolkit;
    use crate::interp::RecordingEval;
    use crate::toolkit::ClassFlags;
    use crate::value::Value;

    #[test]
    fn rebinding_replaces_exactly_one_handler() {
        let mut tk = HeadlessToolkit::new();
        let id = tk.create("button", ClassFlags::empty()).unwrap();
        let mut handlers = Handlers::new();

        handlers.bind(&mut tk, id, "button0", "clicked", "first").unwrap();
        handlers.bind(&mut tk, id, "button0", "clicked", "second").unwrap();
        assert_eq!(tk.record(id).unwrap().signals.len(), 1);

        let mut interp = RecordingEval::default();
        handlers
            .emit(&mut interp, "button0", "button0", &Event::Clicked, 8)
            .unwrap();
        assert_eq!(interp.scripts, vec!["second".to_string()]);
    }

    #[test]
    fn unbind_disconnects() {
        let mut tk = HeadlessToolkit::new();
        let id = tk.create("button", ClassFlags::empty()).unwrap();
        let mut handlers = Handlers::new();
        handlers.bind(&mut tk, id, "button0", "clicked", "cb").unwrap();
        handlers.bind(&mut tk, id, "button0", "clicked", "").unwrap();
        assert!(!tk.connected(id, "clicked"));
        assert_eq!(handlers.command("button0", "clicked"), None);
    }

    #[test]
    fn substitution_and_veto() {
        let mut tk = HeadlessToolkit::new();
        let id = tk.create("window", ClassFlags::TOPLEVEL).unwrap();
        let mut handlers = Handlers::new();
        handlers
            .bind(&mut tk, id, "window0", "delete-event", "confirmExit %w")
            .unwrap();

        let mut interp = RecordingEval {
            result: Value::atom("1"),
            ..Default::default()
        };
        let verdict = handlers
            .emit(&mut interp, "window0", "main", &Event::CloseRequest, 8)
            .unwrap();
        assert_eq!(interp.scripts, vec!["confirmExit window0".to_string()]);
        assert!(verdict.is_veto());

        interp.result = Value::atom("done");
        let verdict = handlers
            .emit(&mut interp, "window0", "main", &Event::CloseRequest, 8)
            .unwrap();
        assert_eq!(verdict, Veto::Pass);
    }

    #[test]
    fn nested_emission_is_depth_limited() {
        let mut tk = HeadlessToolkit::new();
        let id = tk.create("button", ClassFlags::empty()).unwrap();
        let mut handlers = Handlers::new();
        handlers.bind(&mut tk, id, "button0", "clicked", "again").unwrap();

        // a callback whose script re-triggers the same signal
        struct Reenter<'a> {
            handlers: &'a Handlers,
            scripts: Vec<String>,
        }
        impl ScriptEval for Reenter<'_> {
            fn eval(&mut self, script: &str) -> Result<Value> {
                self.scripts.push(script.to_string());
                let handlers = self.handlers;
                handlers
                    .emit(self, "button0", "button0", &Event::Clicked, 3)
                    .map(|_| Value::atom(""))
            }
        }

        let mut interp = Reenter {
            handlers: &handlers,
            scripts: Vec::new(),
        };
        let err = handlers
            .emit(&mut interp, "button0", "button0", &Event::Clicked, 3)
            .unwrap_err();
        assert_eq!(err, Error::RecursionLimit(3));
        // one script per level until the limit stops the descent
        assert_eq!(interp.scripts.len(), 3);

        // the depth unwound fully, so a plain emission still runs
        let mut plain = RecordingEval::default();
        handlers
            .emit(&mut plain, "button0", "button0", &Event::Clicked, 3)
            .unwrap();
        assert_eq!(plain.scripts, vec!["again".to_string()]);
    }

    #[test]
    fn unbound_signal_passes() {
        let handlers = Handlers::new();
        let mut interp = RecordingEval::default();
        let verdict = handlers
            .emit(&mut interp, "nobody", "nobody", &Event::Clicked, 8)
            .unwrap();
        assert_eq!(verdict, Veto::Pass);
        assert!(interp.scripts.is_empty());
    }
}
