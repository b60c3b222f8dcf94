// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Typed event payloads
//!
//! One variant per signal kind the widget set forwards to script callbacks.
//! Each variant knows its toolkit signal name and declares the percent
//! fields its payload contributes; the widget name (`%w`) and glade name
//! (`%g`) substitutions are added by the emitter for every event.

use crate::template::{Field, Fields};
use smallvec::smallvec;

/// An event delivered from the toolkit to a bound callback
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Button activation
    Clicked,
    /// Toggle state changed
    Toggled { active: bool },
    /// Editable text changed; `%t` is the new text
    Changed { text: String },
    /// Entry activated (e.g. Return pressed)
    Activate,
    /// Key pressed; `%k` keycode, `%K` keyval, `%n` key name
    KeyPress {
        keycode: i64,
        keyval: i64,
        name: String,
    },
    /// Pointer button pressed; `%x`/`%y` coordinates, `%b` button
    ButtonPress { x: f64, y: f64, button: i64 },
    /// Notebook switched to `page`; `%p` page index
    SwitchPage { page: i64 },
    /// Status icon popup request; `%x`/`%y` coordinates
    Popup { x: f64, y: f64 },
    /// Widget destroyed
    Destroy,
    /// Window close requested; a truthy callback result vetoes the close
    CloseRequest,
}

impl Event {
    /// The toolkit signal this event corresponds to
    pub fn signal(&self) -> &'static str {
        match self {
            Event::Clicked => "clicked",
            Event::Toggled { .. } => "toggled",
            Event::Changed { .. } => "changed",
            Event::Activate => "activate",
            Event::KeyPress { .. } => "key-press-event",
            Event::ButtonPress { .. } => "button-press-event",
            Event::SwitchPage { .. } => "switch-page",
            Event::Popup { .. } => "popup-menu",
            Event::Destroy => "destroy",
            Event::CloseRequest => "delete-event",
        }
    }

    /// Payload-specific percent fields
    pub fn fields(&self) -> Fields {
        match self {
            Event::Clicked | Event::Activate | Event::Destroy | Event::CloseRequest => {
                smallvec![]
            }
            Event::Toggled { active } => smallvec![('v', Field::Bool(*active))],
            Event::Changed { text } => smallvec![('t', Field::Str(text.clone()))],
            Event::KeyPress {
                keycode,
                keyval,
                name,
            } => smallvec![
                ('k', Field::Int(*keycode)),
                ('K', Field::Int(*keyval)),
                ('n', Field::Str(name.clone())),
            ],
            Event::ButtonPress { x, y, button } => smallvec![
                ('x', Field::Float(*x)),
                ('y', Field::Float(*y)),
                ('b', Field::Int(*button)),
            ],
            Event::SwitchPage { page } => smallvec![('p', Field::Int(*page))],
            Event::Popup { x, y } => {
                smallvec![('x', Field::Float(*x)), ('y', Field::Float(*y))]
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fields_match_signal_kind() {
        assert!(Event::Clicked.fields().is_empty());
        let ev = Event::ButtonPress {
            x: 1.0,
            y: 2.0,
            button: 3,
        };
        assert_eq!(ev.signal(), "button-press-event");
        let fields = ev.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2], ('b', Field::Int(3)));
    }
}
