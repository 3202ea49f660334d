//! Presentation-owned interaction state
//!
//! Both values are owned by a single presentation instance and threaded
//! explicitly into filter and price calls.

use super::space::Period;
use serde::{Deserialize, Serialize};

/// Selection inside an open rental request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    /// Equipment names (not ids), no duplicates, in the order they were picked
    selected_equipment: Vec<String>,
    selected_period: Period,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_period(period: Period) -> Self {
        Self {
            selected_equipment: Vec::new(),
            selected_period: period,
        }
    }

    pub fn selected_period(&self) -> Period {
        self.selected_period
    }

    pub fn select_period(&mut self, period: Period) {
        self.selected_period = period;
    }

    pub fn selected_equipment(&self) -> &[String] {
        &self.selected_equipment
    }

    pub fn equipment_count(&self) -> usize {
        self.selected_equipment.len()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_equipment.iter().any(|e| e == name)
    }

    /// Apply a checkbox change. Returns true if the selection changed.
    pub fn set_equipment(&mut self, name: &str, checked: bool) -> bool {
        if checked {
            if self.is_selected(name) {
                return false;
            }
            self.selected_equipment.push(name.to_string());
            true
        } else {
            let before = self.selected_equipment.len();
            self.selected_equipment.retain(|e| e != name);
            before != self.selected_equipment.len()
        }
    }
}

/// Free-text search term, kept across re-renders until cleared
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    term: String,
}

impl SearchState {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn clear(&mut self) {
        self.term.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }
}
