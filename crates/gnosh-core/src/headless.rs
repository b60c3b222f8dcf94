// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Headless toolkit backend
//!
//! An in-memory [`Toolkit`] implementation keeping plain records of every
//! widget: class, properties, children, armed signals. It performs the same
//! structural validation a real backend would, which makes it the reference
//! backend for the whole test suite and for driving signal emission
//! programmatically.

use crate::error::{Error, Result};
use crate::toolkit::{ClassFlags, GridParams, NativeId, PackParams, Property, Toolkit};
use easy_cast::Conv;
use log::trace;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// In-memory state of one widget
#[derive(Clone, Debug, Default)]
pub struct Record {
    pub class: SmolStr,
    pub flags: ClassFlags,
    pub props: FxHashMap<SmolStr, Property>,
    pub children: Vec<NativeId>,
    /// Children packed from the end of the box
    pub end_children: Vec<NativeId>,
    /// Armed signal slots
    pub signals: Vec<SmolStr>,
    /// Notebook pages, in insertion order
    pub pages: Vec<NativeId>,
    pub current_page: i64,
    /// Children packed behind an alignment wrapper
    pub aligned_children: Vec<NativeId>,
    /// Grid children with their attachment parameters
    pub grid_children: Vec<(NativeId, GridParams)>,
    pub status_stack: Vec<String>,
    pub pulse_count: u64,
}

/// An in-memory toolkit
#[derive(Debug, Default)]
pub struct HeadlessToolkit {
    widgets: FxHashMap<NativeId, Record>,
    next: u64,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Default::default()
    }

    /// Inspect a widget's record
    pub fn record(&self, id: NativeId) -> Option<&Record> {
        self.widgets.get(&id)
    }

    /// Whether the widget still exists
    pub fn alive(&self, id: NativeId) -> bool {
        self.widgets.contains_key(&id)
    }

    /// Whether a signal slot is armed
    pub fn connected(&self, id: NativeId, signal: &str) -> bool {
        self.record(id)
            .map(|r| r.signals.iter().any(|s| s == signal))
            .unwrap_or(false)
    }

    fn get(&self, id: NativeId) -> Result<&Record> {
        self.widgets
            .get(&id)
            .ok_or_else(|| Error::Toolkit(format!("no such widget handle {}", id.0)))
    }

    fn get_mut(&mut self, id: NativeId) -> Result<&mut Record> {
        self.widgets
            .get_mut(&id)
            .ok_or_else(|| Error::Toolkit(format!("no such widget handle {}", id.0)))
    }

    fn require(&self, id: NativeId, flags: ClassFlags, what: &str) -> Result<()> {
        let record = self.get(id)?;
        if record.flags.contains(flags) {
            Ok(())
        } else {
            Err(Error::Toolkit(format!(
                "{} widget cannot {what}",
                record.class
            )))
        }
    }
}

impl Toolkit for HeadlessToolkit {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn create(&mut self, class: &str, flags: ClassFlags) -> Result<NativeId> {
        self.next += 1;
        let id = NativeId(self.next);
        let record = Record {
            class: SmolStr::new(class),
            flags,
            ..Default::default()
        };
        self.widgets.insert(id, record);
        trace!("created {class} as handle {}", id.0);
        Ok(id)
    }

    fn destroy(&mut self, id: NativeId) -> Result<()> {
        let record = self
            .widgets
            .remove(&id)
            .ok_or_else(|| Error::Toolkit(format!("no such widget handle {}", id.0)))?;
        for child in record
            .children
            .iter()
            .chain(record.end_children.iter())
            .chain(record.pages.iter())
        {
            // children may already be gone if destroyed directly
            let _ = self.destroy(*child);
        }
        trace!("destroyed {} handle {}", record.class, id.0);
        Ok(())
    }

    fn set_property(&mut self, id: NativeId, key: &str, value: Property) -> Result<()> {
        self.get_mut(id)?.props.insert(SmolStr::new(key), value);
        Ok(())
    }

    fn get_property(&self, id: NativeId, key: &str) -> Result<Property> {
        self.get(id)?
            .props
            .get(key)
            .cloned()
            .ok_or_else(|| Error::Toolkit(format!("property \"{key}\" is not set")))
    }

    fn connect(&mut self, id: NativeId, signal: &str) -> Result<()> {
        let record = self.get_mut(id)?;
        if !record.signals.iter().any(|s| s == signal) {
            record.signals.push(SmolStr::new(signal));
        }
        Ok(())
    }

    fn disconnect(&mut self, id: NativeId, signal: &str) -> Result<()> {
        self.get_mut(id)?.signals.retain(|s| s != signal);
        Ok(())
    }

    fn box_pack(
        &mut self,
        parent: NativeId,
        child: NativeId,
        params: &PackParams,
        align_wrapper: bool,
    ) -> Result<()> {
        self.require(parent, ClassFlags::CONTAINER, "pack children")?;
        self.get(child)?;
        let record = self.get_mut(parent)?;
        if params.at_end {
            record.end_children.push(child);
        } else {
            record.children.push(child);
        }
        if align_wrapper {
            record.aligned_children.push(child);
        }
        Ok(())
    }

    fn grid_attach(
        &mut self,
        parent: NativeId,
        child: NativeId,
        params: &GridParams,
    ) -> Result<()> {
        self.require(parent, ClassFlags::GRID, "attach children")?;
        self.get(child)?;
        let record = self.get_mut(parent)?;
        record.children.push(child);
        record.grid_children.push((child, *params));
        Ok(())
    }

    fn insert_page(&mut self, parent: NativeId, child: NativeId, label: &str) -> Result<i64> {
        self.require(parent, ClassFlags::PAGED, "hold pages")?;
        self.get(child)?;
        let record = self.get_mut(parent)?;
        record.pages.push(child);
        trace!("inserted page \"{label}\"");
        Ok(i64::conv(record.pages.len()) - 1)
    }

    fn set_current_page(&mut self, parent: NativeId, page: i64) -> Result<()> {
        let pages = i64::conv(self.get(parent)?.pages.len());
        if page < 0 || page >= pages {
            return Err(Error::Toolkit(format!("page {page} out of range")));
        }
        self.get_mut(parent)?.current_page = page;
        Ok(())
    }

    fn current_page(&self, parent: NativeId) -> Result<i64> {
        Ok(self.get(parent)?.current_page)
    }

    fn menu_append(&mut self, menu: NativeId, item: NativeId) -> Result<()> {
        self.require(menu, ClassFlags::MENU, "hold menu items")?;
        self.get(item)?;
        self.get_mut(menu)?.children.push(item);
        Ok(())
    }

    fn menu_set_submenu(&mut self, item: NativeId, submenu: NativeId) -> Result<()> {
        self.require(submenu, ClassFlags::MENU, "act as a submenu")?;
        self.get_mut(item)?.children.push(submenu);
        Ok(())
    }

    fn menu_popup(&mut self, menu: NativeId, x: f64, y: f64) -> Result<()> {
        self.require(menu, ClassFlags::MENU, "pop up")?;
        trace!("menu handle {} popped up at ({x}, {y})", menu.0);
        Ok(())
    }

    fn status_push(&mut self, bar: NativeId, text: &str) -> Result<i64> {
        self.require(bar, ClassFlags::STATUS, "push messages")?;
        let record = self.get_mut(bar)?;
        record.status_stack.push(text.to_string());
        Ok(i64::conv(record.status_stack.len()))
    }

    fn status_pop(&mut self, bar: NativeId) -> Result<()> {
        self.require(bar, ClassFlags::STATUS, "pop messages")?;
        self.get_mut(bar)?.status_stack.pop();
        Ok(())
    }

    fn progress_pulse(&mut self, bar: NativeId) -> Result<()> {
        self.get_mut(bar)?.pulse_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_and_destroy() {
        let mut tk = HeadlessToolkit::new();
        let parent = tk.create("box", ClassFlags::CONTAINER).unwrap();
        let child = tk.create("button", ClassFlags::empty()).unwrap();
        tk.box_pack(parent, child, &PackParams::default(), false)
            .unwrap();
        assert!(tk.alive(child));
        tk.destroy(parent).unwrap();
        assert!(!tk.alive(parent));
        assert!(!tk.alive(child));
    }

    #[test]
    fn structural_validation() {
        let mut tk = HeadlessToolkit::new();
        let label = tk.create("label", ClassFlags::empty()).unwrap();
        let child = tk.create("button", ClassFlags::empty()).unwrap();
        assert!(matches!(
            tk.box_pack(label, child, &PackParams::default(), false),
            Err(Error::Toolkit(_))
        ));
    }

    #[test]
    fn properties() {
        let mut tk = HeadlessToolkit::new();
        let id = tk.create("button", ClassFlags::empty()).unwrap();
        tk.set_property(id, "label", Property::Str("hi".into()))
            .unwrap();
        assert_eq!(
            tk.get_property(id, "label").unwrap(),
            Property::Str("hi".into())
        );
        assert!(tk.get_property(id, "missing").is_err());
    }

    #[test]
    fn connect_is_single_slot() {
        let mut tk = HeadlessToolkit::new();
        let id = tk.create("button", ClassFlags::empty()).unwrap();
        tk.connect(id, "clicked").unwrap();
        tk.connect(id, "clicked").unwrap();
        assert_eq!(tk.record(id).unwrap().signals.len(), 1);
        tk.disconnect(id, "clicked").unwrap();
        assert!(!tk.connected(id, "clicked"));
    }
}
