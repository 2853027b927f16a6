use std::cell::RefCell;

use serde::Deserialize;

use crate::model::{PageConfig, Section, Theme};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to parse page document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors from the collaborator API that stores page documents. The
/// engine never inspects these beyond reporting them; in-memory state is
/// left untouched so the user can retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Page document not found")]
    NotFound,
    #[error("Store request failed: {0}")]
    Request(String),
}

/// Parse a stored page document.
///
/// Sections with an unrecognized `type` (a document written by a newer
/// editor) or an unreadable payload are skipped rather than failing the
/// whole load.
pub fn parse_document(json: &str) -> Result<PageConfig, DocumentError> {
    #[derive(Deserialize)]
    struct RawDocument {
        #[serde(default)]
        sections: Vec<serde_json::Value>,
        #[serde(default)]
        theme: Theme,
    }

    let raw: RawDocument = serde_json::from_str(json)?;
    let sections = raw
        .sections
        .into_iter()
        .filter_map(|value| serde_json::from_value::<Section>(value).ok())
        .collect();
    Ok(PageConfig {
        sections,
        theme: raw.theme,
    })
}

/// Serialize a page document for a wholesale save. No deltas; the whole
/// list plus theme is one document.
pub fn serialize_document(config: &PageConfig) -> Result<String, DocumentError> {
    Ok(serde_json::to_string(config)?)
}

/// Where page documents live. Implemented over the hosted API in the
/// application; the engine only needs load-once and save-wholesale.
pub trait ConfigStore {
    fn load(&self) -> Result<String, StoreError>;
    fn save(&self, document: &str) -> Result<(), StoreError>;
}

/// In-memory store for tests and offline editing. Can be told to fail
/// saves to exercise retry paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
    fail_saves: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
            fail_saves: RefCell::new(false),
        }
    }

    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.borrow_mut() = fail;
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<String, StoreError> {
        self.document.borrow().clone().ok_or(StoreError::NotFound)
    }

    fn save(&self, document: &str) -> Result<(), StoreError> {
        if *self.fail_saves.borrow() {
            return Err(StoreError::Request("simulated save failure".to_string()));
        }
        *self.document.borrow_mut() = Some(document.to_string());
        Ok(())
    }
}
