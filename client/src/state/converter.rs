//! Manual converter form state and its trigger transition.

#[cfg(test)]
#[path = "converter_test.rs"]
mod converter_test;

use zones::{UserSelection, convert_to_california};

/// Whether the result panel has something to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConverterPhase {
    #[default]
    NoResult,
    HasResult,
}

/// Form fields plus the last converted California time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConverterState {
    pub selection: UserSelection,
    pub result: Option<String>,
}

impl ConverterState {
    pub fn phase(&self) -> ConverterPhase {
        if self.result.is_some() { ConverterPhase::HasResult } else { ConverterPhase::NoResult }
    }

    /// Run the conversion for the current selection.
    ///
    /// Incomplete or malformed input leaves `result` untouched. Returns
    /// `true` when a new result replaced the old one.
    pub fn trigger(&mut self) -> bool {
        match convert_to_california(&self.selection) {
            Ok(Some(california)) => {
                self.result = Some(california);
                true
            }
            Ok(None) => false,
            Err(e) => {
                leptos::logging::warn!("conversion skipped: {e}");
                false
            }
        }
    }
}
