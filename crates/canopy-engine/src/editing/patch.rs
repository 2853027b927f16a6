/// Result of applying a command. `changed` lists the indices, in the
/// post-edit list, whose sections were touched and need re-rendering;
/// `version` counts content mutations, so a no-op command (or a pure
/// selection change) returns the version unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub changed: Vec<usize>,
    pub new_selection: Option<usize>,
    pub version: u64,
}
