pub mod editing;
pub mod io;
pub mod model;
pub mod session;

// Re-export key types for easier usage
pub use editing::{Cmd, DragReorder, Patch, SectionListController};
pub use io::{parse_document, serialize_document, ConfigStore, MemoryStore};
pub use model::{PageConfig, Section, SectionBody, SectionId, SectionKind, Theme};
pub use session::EditorSession;
