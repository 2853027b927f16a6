/*!
 * # Editing Core Module
 *
 * The editor core for Canopy career pages. Key principles:
 *
 * ### 1. Single Source of Truth: the Section List
 * - The page under edit is one ordered `Vec<Section>` owned by the
 *   [`SectionListController`], saved back wholesale on request
 * - Index order in the list is rendering order on the published page
 *
 * ### 2. Command-Based Editing
 * - All edits are **Commands** (`Cmd` enum) applied synchronously within
 *   one UI event turn; each application returns a [`Patch`] describing
 *   what changed
 * - Commands are total: out-of-range indices clamp or no-op, so a stale
 *   handler firing during rapid clicks can never crash the editor
 *
 * ### 3. Selection as Explicit State
 * - The selected section is controller state, never derived from DOM
 *   focus, and is re-derived on every structural mutation so it keeps
 *   pointing at the same logical section (or clears when that section is
 *   deleted)
 * - One selection-adjustment rule set covers insert, delete, and both
 *   move directions; the arithmetic lives in `commands` as pure functions
 *
 * ### 4. Drag-and-Drop at the Boundary
 * - [`DragReorder`] translates drag start/end events into move commands;
 *   pointer tracking and drag visuals stay in the host UI
 *
 * ## Module Structure
 *
 * - **`controller`**: the `SectionListController` holding sections and
 *   selection
 * - **`commands`**: the `Cmd` enum and selection-adjustment arithmetic
 * - **`dnd`**: the drag-reorder adapter
 * - **`patch`**: edit result metadata (changed indices, new selection,
 *   version)
 */

pub mod commands;
pub mod controller;
pub mod dnd;
pub mod patch;

pub use commands::Cmd;
pub use controller::SectionListController;
pub use dnd::DragReorder;
pub use patch::Patch;
