// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Toolkit interface
//!
//! The native GUI library is consumed, never implemented, by this crate.
//! [`Toolkit`] models the slice of its C API the widget command set needs:
//! constructors, a generic key/value property call, signal slots and a
//! handful of structural verbs. Backends implement this trait; everything
//! above it is toolkit-agnostic.

use crate::error::Result;
use bitflags::bitflags;

/// An opaque native widget handle
///
/// Zero is reserved as the null handle; backends must never allocate it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NativeId(pub u64);

impl NativeId {
    /// True only for default-constructed handles
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

bitflags! {
    /// Structural capabilities of a widget class
    ///
    /// Backends use these to validate structural verbs: packing into a
    /// non-container or paging a non-notebook is a toolkit error.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ClassFlags: u16 {
        /// Accepts packed children
        const CONTAINER = 1 << 0;
        /// Accepts grid-attached children
        const GRID = 1 << 1;
        /// Accepts pages
        const PAGED = 1 << 2;
        /// Accepts menu items
        const MENU = 1 << 3;
        /// Maintains a message stack
        const STATUS = 1 << 4;
        /// A top-level window
        const TOPLEVEL = 1 << 5;
    }
}

/// A value for the generic property call
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Packing parameters for box children
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackParams {
    pub expand: bool,
    /// Fill fraction per axis, each in `[0, 1]`
    pub fill: (f64, f64),
    /// Alignment fraction per axis, each in `[0, 1]`
    pub align: (f64, f64),
    pub padding: i64,
    /// Pack from the end of the box
    pub at_end: bool,
}

impl Default for PackParams {
    fn default() -> Self {
        PackParams {
            expand: false,
            fill: (1.0, 1.0),
            align: (0.5, 0.5),
            padding: 0,
            at_end: false,
        }
    }
}

/// Attachment parameters for grid children
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub column: i64,
    pub row: i64,
    pub column_span: i64,
    pub row_span: i64,
    pub expand: bool,
    pub fill: bool,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            column: 0,
            row: 0,
            column_span: 1,
            row_span: 1,
            expand: false,
            fill: true,
        }
    }
}

/// The consumed native API
pub trait Toolkit {
    /// Downcasting support, mainly for backend inspection in tests
    fn as_any(&self) -> &dyn std::any::Any;

    /// Construct a native widget of `class`
    fn create(&mut self, class: &str, flags: ClassFlags) -> Result<NativeId>;

    /// Destroy a native widget (and, for containers, its children)
    fn destroy(&mut self, id: NativeId) -> Result<()>;

    /// Generic key/value property setter
    fn set_property(&mut self, id: NativeId, key: &str, value: Property) -> Result<()>;

    /// Generic property getter
    fn get_property(&self, id: NativeId, key: &str) -> Result<Property>;

    /// Arm a signal slot so the event loop forwards emissions
    fn connect(&mut self, id: NativeId, signal: &str) -> Result<()>;

    /// Disarm a signal slot
    fn disconnect(&mut self, id: NativeId, signal: &str) -> Result<()>;

    /// Pack `child` into a box
    ///
    /// With `align_wrapper`, the backend must interpose an alignment
    /// container honouring the fractional fill/align parameters.
    fn box_pack(
        &mut self,
        parent: NativeId,
        child: NativeId,
        params: &PackParams,
        align_wrapper: bool,
    ) -> Result<()>;

    /// Attach `child` to a grid cell
    fn grid_attach(&mut self, parent: NativeId, child: NativeId, params: &GridParams)
        -> Result<()>;

    /// Append a notebook page; returns the new page index
    fn insert_page(&mut self, parent: NativeId, child: NativeId, label: &str) -> Result<i64>;

    fn set_current_page(&mut self, parent: NativeId, page: i64) -> Result<()>;

    fn current_page(&self, parent: NativeId) -> Result<i64>;

    /// Append an item to a menu
    fn menu_append(&mut self, menu: NativeId, item: NativeId) -> Result<()>;

    /// Attach a submenu to a menu item
    fn menu_set_submenu(&mut self, item: NativeId, submenu: NativeId) -> Result<()>;

    /// Pop a menu up at the given root-window coordinates
    fn menu_popup(&mut self, menu: NativeId, x: f64, y: f64) -> Result<()>;

    /// Push a message onto a statusbar; returns the new stack depth
    fn status_push(&mut self, bar: NativeId, text: &str) -> Result<i64>;

    /// Pop the topmost statusbar message
    fn status_pop(&mut self, bar: NativeId) -> Result<()>;

    /// Nudge an activity-mode progress bar
    fn progress_pulse(&mut self, bar: NativeId) -> Result<()>;
}
