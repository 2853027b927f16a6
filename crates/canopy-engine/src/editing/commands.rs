use serde_json::{Map, Value};

use crate::model::SectionKind;

/// Commands that can be applied to the section list. All indices are
/// positions in the list as it exists when the command is applied; the
/// controller clamps or ignores indices that no longer exist, so a stale
/// handler firing late produces a no-op instead of a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Splice a default-valued section of `kind` at `at` (clamped to
    /// `0..=len`) and select it.
    Insert { kind: SectionKind, at: usize },
    /// Remove the section at `index`.
    Delete { index: usize },
    /// Array-move: remove the section at `from` and reinsert it at `to`,
    /// shifting everything in between by one.
    Move { from: usize, to: usize },
    /// Deep-clone the section at `index` (fresh id), insert the clone at
    /// `index + 1`, and select it.
    Duplicate { index: usize },
    /// Flip the `visible` flag of the section at `index`.
    ToggleVisibility { index: usize },
    /// Shallow-merge a partial JSON object into the section at `index`.
    /// `type` and `id` are preserved regardless of what the map carries.
    UpdateFields {
        index: usize,
        fields: Map<String, Value>,
    },
    /// Set the selection directly; `None` clears it.
    Select { index: Option<usize> },
}

/// Selection after deleting `index`: the selected section keeps its
/// identity when it survives, and selection clears when it was the one
/// removed.
pub(crate) fn selection_after_delete(selected: Option<usize>, index: usize) -> Option<usize> {
    match selected {
        Some(sel) if sel == index => None,
        Some(sel) if sel > index => Some(sel - 1),
        other => other,
    }
}

/// Selection after an array-move of `from` to `to`. One rule for both
/// directions: the selected section follows itself, and otherwise shifts
/// by one exactly when the moved section passed over it.
pub(crate) fn selection_after_move(
    selected: Option<usize>,
    from: usize,
    to: usize,
) -> Option<usize> {
    let sel = selected?;
    if sel == from {
        Some(to)
    } else if from < sel && sel <= to {
        Some(sel - 1)
    } else if to <= sel && sel < from {
        Some(sel + 1)
    } else {
        Some(sel)
    }
}
