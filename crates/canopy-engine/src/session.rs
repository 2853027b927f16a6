use crate::editing::SectionListController;
use crate::io::{parse_document, serialize_document, ConfigStore, DocumentError, StoreError};
use crate::model::{PageConfig, Theme};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// One editing session over a stored page document.
///
/// Loads the document once on open, hands edits to the controller, and
/// saves a snapshot of the current state wholesale on request. A failed
/// save leaves in-memory state untouched so the user can retry without
/// losing edits; edits made while a save is in flight simply land in the
/// next save.
pub struct EditorSession<S: ConfigStore> {
    controller: SectionListController,
    theme: Theme,
    store: S,
}

impl<S: ConfigStore> EditorSession<S> {
    /// Open a session over the document in `store`.
    pub fn open(store: S) -> Result<Self, SessionError> {
        let config = parse_document(&store.load()?)?;
        Ok(Self {
            controller: SectionListController::from_sections(config.sections),
            theme: config.theme,
            store,
        })
    }

    /// Start a session for a page with no stored document yet.
    pub fn new_page(store: S) -> Self {
        Self {
            controller: SectionListController::new(),
            theme: Theme::default(),
            store,
        }
    }

    pub fn controller(&mut self) -> &mut SectionListController {
        &mut self.controller
    }

    pub fn sections(&self) -> &SectionListController {
        &self.controller
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Serialize current state and write it back wholesale.
    pub fn save(&self) -> Result<(), SessionError> {
        let config = PageConfig {
            sections: self.controller.sections().to_vec(),
            theme: self.theme.clone(),
        };
        let document = serialize_document(&config)?;
        self.store.save(&document)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::Cmd;
    use crate::io::MemoryStore;
    use crate::model::SectionKind;
    use pretty_assertions::assert_eq;

    fn stored_document() -> String {
        let config = PageConfig {
            sections: vec![
                crate::model::Section::new(SectionKind::Hero),
                crate::model::Section::new(SectionKind::OpenRoles),
            ],
            theme: Theme::default(),
        };
        serialize_document(&config).unwrap()
    }

    #[test]
    fn test_open_loads_sections_with_no_selection() {
        let session = EditorSession::open(MemoryStore::with_document(stored_document())).unwrap();

        assert_eq!(session.sections().len(), 2);
        assert_eq!(session.sections().selected(), None);
    }

    #[test]
    fn test_save_round_trips_edits() {
        let mut session =
            EditorSession::open(MemoryStore::with_document(stored_document())).unwrap();
        session.controller().apply(Cmd::Insert {
            kind: SectionKind::Faq,
            at: 1,
        });

        session.save().unwrap();

        let reopened = EditorSession::open(MemoryStore::with_document(
            session.store.document().unwrap(),
        ))
        .unwrap();
        let kinds: Vec<_> = reopened
            .sections()
            .sections()
            .iter()
            .map(|s| s.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Hero, SectionKind::Faq, SectionKind::OpenRoles]
        );
    }

    #[test]
    fn test_failed_save_retains_state_for_retry() {
        let store = MemoryStore::with_document(stored_document());
        store.set_fail_saves(true);
        let mut session = EditorSession::open(store).unwrap();
        session.controller().apply(Cmd::Delete { index: 0 });

        assert!(session.save().is_err());
        // edits survive the failure
        assert_eq!(session.sections().len(), 1);
        assert_eq!(session.sections().version(), 1);

        session.store.set_fail_saves(false);
        session.save().unwrap();
        let saved = parse_document(&session.store.document().unwrap()).unwrap();
        assert_eq!(saved.sections.len(), 1);
    }

    #[test]
    fn test_missing_document_is_a_store_error() {
        let result = EditorSession::open(MemoryStore::new());

        assert!(matches!(result, Err(SessionError::Store(_))));
    }
}
