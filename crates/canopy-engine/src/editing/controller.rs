use serde_json::{Map, Value};

use crate::editing::commands::{selection_after_delete, selection_after_move, Cmd};
use crate::editing::Patch;
use crate::model::{Section, SectionKind};

/// Owns the ordered section list and the editing selection, and keeps the
/// two consistent under every mutation.
///
/// Selection is explicit state driven only by commands, never derived from
/// rendering, so what the edit panel is bound to can never drift from what
/// the list highlights. All commands are total: indices that fall outside
/// the list (stale event handlers during rapid clicks) clamp or no-op
/// instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionListController {
    /// The ordered sections; index order is rendering order on the
    /// published page.
    sections: Vec<Section>,
    /// Index of the section open for editing, if any. Always in range
    /// when `Some`.
    selected: Option<usize>,
    /// Increments with each content mutation.
    version: u64,
}

impl Default for SectionListController {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionListController {
    /// Create an empty controller with nothing selected.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            selected: None,
            version: 0,
        }
    }

    /// Create a controller over an existing section list, e.g. one loaded
    /// from a stored page configuration.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self {
            sections,
            selected: None,
            version: 0,
        }
    }

    /// Apply a command to the list.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        match cmd {
            Cmd::Insert { kind, at } => self.insert(kind, at),
            Cmd::Delete { index } => self.delete(index),
            Cmd::Move { from, to } => self.move_section(from, to),
            Cmd::Duplicate { index } => self.duplicate(index),
            Cmd::ToggleVisibility { index } => self.toggle_visibility(index),
            Cmd::UpdateFields { index, fields } => self.update_fields(index, fields),
            Cmd::Select { index } => self.select(index),
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Consume the controller, returning the section list.
    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The section currently open for editing, if any.
    pub fn selected_section(&self) -> Option<&Section> {
        self.selected.map(|i| &self.sections[i])
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn insert(&mut self, kind: SectionKind, at: usize) -> Patch {
        let at = at.min(self.sections.len());
        self.sections.insert(at, Section::new(kind));
        self.selected = Some(at);
        self.version += 1;
        self.patch(vec![at])
    }

    fn delete(&mut self, index: usize) -> Patch {
        if index >= self.sections.len() {
            return self.noop();
        }
        self.sections.remove(index);
        self.selected = selection_after_delete(self.selected, index);
        self.version += 1;
        // everything from the removed index onward shifted left
        self.patch((index..self.sections.len()).collect())
    }

    fn move_section(&mut self, from: usize, to: usize) -> Patch {
        let len = self.sections.len();
        if from >= len {
            return self.noop();
        }
        let to = to.min(len - 1);
        if from == to {
            return self.noop();
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        self.selected = selection_after_move(self.selected, from, to);
        self.version += 1;
        let (lo, hi) = if from < to { (from, to) } else { (to, from) };
        self.patch((lo..=hi).collect())
    }

    fn duplicate(&mut self, index: usize) -> Patch {
        if index >= self.sections.len() {
            return self.noop();
        }
        let mut clone = self.sections[index].clone();
        clone.id = crate::model::SectionId::new();
        self.sections.insert(index + 1, clone);
        self.selected = Some(index + 1);
        self.version += 1;
        self.patch(vec![index + 1])
    }

    fn toggle_visibility(&mut self, index: usize) -> Patch {
        if index >= self.sections.len() {
            return self.noop();
        }
        self.sections[index].visible = !self.sections[index].visible;
        self.version += 1;
        self.patch(vec![index])
    }

    /// Shallow-merge `fields` into the serialized form of the section,
    /// then deserialize back. The discriminant and id are restored after
    /// the merge, so a field update can never change what kind of section
    /// this is. A merge that produces an invalid payload for the variant
    /// leaves the section unchanged.
    fn update_fields(&mut self, index: usize, fields: Map<String, Value>) -> Patch {
        if index >= self.sections.len() {
            return self.noop();
        }
        let original = &self.sections[index];
        let mut merged = match serde_json::to_value(original) {
            Ok(Value::Object(map)) => map,
            _ => return self.noop(),
        };
        let tag = merged.get("type").cloned();
        let id = merged.get("id").cloned();
        for (key, value) in fields {
            merged.insert(key, value);
        }
        if let Some(tag) = tag {
            merged.insert("type".to_string(), tag);
        }
        if let Some(id) = id {
            merged.insert("id".to_string(), id);
        }
        match serde_json::from_value::<Section>(Value::Object(merged)) {
            Ok(updated) => {
                self.sections[index] = updated;
                self.version += 1;
                self.patch(vec![index])
            }
            Err(_) => self.noop(),
        }
    }

    fn select(&mut self, index: Option<usize>) -> Patch {
        match index {
            Some(i) if i >= self.sections.len() => self.noop(),
            other => {
                self.selected = other;
                // selection is not a content mutation
                self.patch(vec![])
            }
        }
    }

    fn patch(&self, changed: Vec<usize>) -> Patch {
        Patch {
            changed,
            new_selection: self.selected,
            version: self.version,
        }
    }

    fn noop(&self) -> Patch {
        self.patch(vec![])
    }
}
