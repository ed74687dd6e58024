//! Runtime state of the mapping page.

use common::mutations::Selection;
use common::render::{LoadState, MappingsTable, SelectionRow};

pub struct MappingPage {
    /// Options of the create row, built from `/stores` and `/markets`.
    pub reference: LoadState<SelectionRow>,

    /// Body of the current-mappings table. Replaced as a whole on every
    /// refresh.
    pub table: LoadState<MappingsTable>,

    /// Values of the two select controls of the create row.
    pub selection: Selection,

    /// Guard for the first-render data load.
    pub loaded: bool,
}

impl MappingPage {
    pub fn new() -> Self {
        Self {
            reference: LoadState::Loading,
            table: LoadState::Loading,
            selection: Selection::default(),
            loaded: false,
        }
    }
}
