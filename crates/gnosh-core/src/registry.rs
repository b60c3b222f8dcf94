// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Cross-widget coordination registries
//!
//! Independently created widgets discover each other by name through an
//! explicit [`Registry`] owned by the engine context, not through process
//! globals. Invariant for every group kind: the entry is removed when its
//! last member leaves. Single-threaded by the engine's execution model;
//! no locking.

use crate::error::{Error, Result};
use crate::toolkit::NativeId;
use log::trace;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// One radio group member
#[derive(Clone, Debug, PartialEq)]
pub struct RadioMember {
    pub widget: SmolStr,
    pub on_value: String,
}

/// Size group axis mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeMode {
    Horizontal,
    Vertical,
    Both,
}

#[derive(Clone, Debug)]
struct SizeGroup {
    mode: SizeMode,
    members: Vec<SmolStr>,
}

/// The registry service
#[derive(Debug, Default)]
pub struct Registry {
    radio: FxHashMap<SmolStr, Vec<RadioMember>>,
    size: FxHashMap<SmolStr, SizeGroup>,
    icons: FxHashMap<SmolStr, NativeId>,
}

impl Registry {
    pub fn new() -> Self {
        Default::default()
    }

    /// Join the radio group keyed by `variable`
    ///
    /// Each member must contribute a distinct on-value within its group.
    pub fn radio_join(&mut self, variable: &str, widget: &str, on_value: &str) -> Result<()> {
        if let Some(members) = self.radio.get(variable) {
            if members.iter().any(|m| m.on_value == on_value) {
                return Err(Error::RadioValueInUse {
                    group: variable.to_string(),
                    value: on_value.to_string(),
                });
            }
        }
        let members = self.radio.entry(SmolStr::new(variable)).or_default();
        members.push(RadioMember {
            widget: SmolStr::new(widget),
            on_value: on_value.to_string(),
        });
        trace!("widget {widget} joined radio group \"{variable}\"");
        Ok(())
    }

    /// Leave a radio group; drops the group with its last member
    pub fn radio_leave(&mut self, variable: &str, widget: &str) {
        if let Some(members) = self.radio.get_mut(variable) {
            members.retain(|m| m.widget != widget);
            if members.is_empty() {
                self.radio.remove(variable);
                trace!("radio group \"{variable}\" dropped");
            }
        }
    }

    /// Leave whichever radio group the widget belongs to
    ///
    /// Used on widget deletion, where only the widget name is at hand.
    pub fn radio_leave_widget(&mut self, widget: &str) {
        let groups: Vec<SmolStr> = self.radio.keys().cloned().collect();
        for group in groups {
            self.radio_leave(&group, widget);
        }
    }

    pub fn radio_members(&self, variable: &str) -> &[RadioMember] {
        self.radio.get(variable).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Join a named size group, creating it on first use
    ///
    /// The mode of an existing group is not changed by later joins.
    pub fn size_join(&mut self, group: &str, mode: SizeMode, widget: &str) {
        let entry = self.size.entry(SmolStr::new(group)).or_insert(SizeGroup {
            mode,
            members: Vec::new(),
        });
        let widget = SmolStr::new(widget);
        if !entry.members.contains(&widget) {
            entry.members.push(widget);
        }
    }

    /// Leave a size group; drops the group with its last member
    pub fn size_leave(&mut self, group: &str, widget: &str) {
        if let Some(entry) = self.size.get_mut(group) {
            entry.members.retain(|m| m != widget);
            if entry.members.is_empty() {
                self.size.remove(group);
                trace!("size group \"{group}\" dropped");
            }
        }
    }

    /// Drop a size group and all its memberships (on group deletion)
    pub fn size_drop(&mut self, group: &str) {
        self.size.remove(group);
    }

    pub fn size_members(&self, group: &str) -> &[SmolStr] {
        self.size
            .get(group)
            .map(|g| g.members.as_slice())
            .unwrap_or(&[])
    }

    pub fn size_mode(&self, group: &str) -> Option<SizeMode> {
        self.size.get(group).map(|g| g.mode)
    }

    /// Register a status icon under a public name
    pub fn icon_register(&mut self, name: &str, id: NativeId) -> Result<()> {
        if self.icons.contains_key(name) {
            return Err(Error::NameInUse(name.to_string()));
        }
        self.icons.insert(SmolStr::new(name), id);
        Ok(())
    }

    pub fn icon_release(&mut self, name: &str) {
        self.icons.remove(name);
    }

    pub fn icon_lookup(&self, name: &str) -> Option<NativeId> {
        self.icons.get(name).copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn radio_duplicate_value_rejected() {
        let mut reg = Registry::new();
        reg.radio_join("v", "radio0", "A").unwrap();
        let err = reg.radio_join("v", "radio1", "A").unwrap_err();
        assert_eq!(
            err,
            Error::RadioValueInUse {
                group: "v".into(),
                value: "A".into()
            }
        );
        // distinct value is fine, and so is the same value elsewhere
        reg.radio_join("v", "radio1", "B").unwrap();
        reg.radio_join("w", "radio2", "A").unwrap();
        assert_eq!(reg.radio_members("v").len(), 2);
    }

    #[test]
    fn groups_drop_with_last_member() {
        let mut reg = Registry::new();
        reg.radio_join("v", "radio0", "A").unwrap();
        reg.radio_join("v", "radio1", "B").unwrap();
        reg.radio_leave("v", "radio0");
        assert_eq!(reg.radio_members("v").len(), 1);
        reg.radio_leave("v", "radio1");
        assert!(reg.radio_members("v").is_empty());
        // after the drop, the old on-values are free again
        reg.radio_join("v", "radio9", "A").unwrap();

        reg.size_join("g", SizeMode::Both, "label0");
        reg.size_join("g", SizeMode::Horizontal, "label1");
        assert_eq!(reg.size_mode("g"), Some(SizeMode::Both));
        reg.size_leave("g", "label0");
        reg.size_leave("g", "label1");
        assert!(reg.size_mode("g").is_none());
    }

    #[test]
    fn icon_names_are_unique() {
        let mut reg = Registry::new();
        reg.icon_register("tray", NativeId(1)).unwrap();
        assert_eq!(
            reg.icon_register("tray", NativeId(2)),
            Err(Error::NameInUse("tray".into()))
        );
        assert_eq!(reg.icon_lookup("tray"), Some(NativeId(1)));
        reg.icon_release("tray");
        assert_eq!(reg.icon_lookup("tray"), None);
    }
}
