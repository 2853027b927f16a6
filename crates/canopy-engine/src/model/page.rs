use serde::{Deserialize, Serialize};

use crate::model::{Section, Theme};

/// The whole editing document: the ordered section list plus theme data.
/// Loaded once per editing session and saved back wholesale; there is no
/// per-section persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageConfig {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_defaults() {
        let config: PageConfig = serde_json::from_str("{}").unwrap();

        assert!(config.sections.is_empty());
        assert_eq!(config.theme, Theme::default());
    }

    #[test]
    fn test_section_order_is_preserved() {
        let config = PageConfig {
            sections: vec![
                Section::new(SectionKind::Hero),
                Section::new(SectionKind::About),
                Section::new(SectionKind::Cta),
            ],
            theme: Theme::default(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: PageConfig = serde_json::from_str(&json).unwrap();

        let kinds: Vec<_> = restored.sections.iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![SectionKind::Hero, SectionKind::About, SectionKind::Cta]
        );
    }
}
