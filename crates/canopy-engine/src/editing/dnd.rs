use crate::editing::{Cmd, Patch, SectionListController};

/// Bridges drag-and-drop gestures to `Cmd::Move`.
///
/// The host UI owns pointer tracking and drag visuals; this adapter only
/// remembers which index a drag started from and turns the drop into a
/// move command when the position actually changed.
#[derive(Debug, Default)]
pub struct DragReorder {
    active: Option<usize>,
}

impl DragReorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The index currently being dragged, if a drag is in flight.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn drag_start(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Abort the drag without reordering (escape key, drop outside the
    /// list).
    pub fn drag_cancel(&mut self) {
        self.active = None;
    }

    /// Finish the drag over `over`. Returns the resulting patch, or `None`
    /// when no drag was active or the section was dropped where it
    /// started.
    pub fn drag_end(
        &mut self,
        over: usize,
        controller: &mut SectionListController,
    ) -> Option<Patch> {
        let from = self.active.take()?;
        if from == over {
            return None;
        }
        Some(controller.apply(Cmd::Move { from, to: over }))
    }
}
