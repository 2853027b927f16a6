use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a section, assigned when the section is created
/// (or on load, for documents written before ids existed). Survives moves
/// and field edits; a duplicate gets a fresh id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct SectionId(Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// One typed content block on a career page.
///
/// The wire shape is flat: `{ "type": "hero", "visible": true, ...fields }`,
/// with the kind-specific fields flattened alongside the common attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default = "SectionId::new")]
    pub id: SectionId,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub body: SectionBody,
}

fn default_visible() -> bool {
    true
}

impl Section {
    /// Build a fully-populated default section of the given kind.
    pub fn new(kind: SectionKind) -> Self {
        Self {
            id: SectionId::new(),
            visible: true,
            body: SectionBody::default_for(kind),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.body.kind()
    }
}

/// Discriminants for the closed set of section kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Hero,
    About,
    Values,
    Impact,
    Benefits,
    Team,
    OpenRoles,
    Cta,
    Testimonials,
    Faq,
}

impl SectionKind {
    /// Every kind, in the order the section picker offers them.
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Hero,
        SectionKind::About,
        SectionKind::Values,
        SectionKind::Impact,
        SectionKind::Benefits,
        SectionKind::Team,
        SectionKind::OpenRoles,
        SectionKind::Cta,
        SectionKind::Testimonials,
        SectionKind::Faq,
    ];
}

/// Kind-specific payload of a section. Tagged on `type` in the stored
/// document; adding a variant is a compile-checked change at the factory
/// and every renderer match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SectionBody {
    Hero {
        headline: String,
        subheadline: String,
        background_image: Option<String>,
    },
    About {
        title: String,
        body: String,
    },
    Values {
        title: String,
        items: Vec<ValueItem>,
    },
    Impact {
        title: String,
        stats: Vec<ImpactStat>,
    },
    Benefits {
        title: String,
        items: Vec<BenefitItem>,
    },
    Team {
        title: String,
        members: Vec<TeamMember>,
    },
    OpenRoles {
        title: String,
        show_locations: bool,
    },
    Cta {
        headline: String,
        button_label: String,
        button_url: String,
    },
    Testimonials {
        title: String,
        quotes: Vec<Testimonial>,
    },
    Faq {
        title: String,
        entries: Vec<FaqEntry>,
    },
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionBody::Hero { .. } => SectionKind::Hero,
            SectionBody::About { .. } => SectionKind::About,
            SectionBody::Values { .. } => SectionKind::Values,
            SectionBody::Impact { .. } => SectionKind::Impact,
            SectionBody::Benefits { .. } => SectionKind::Benefits,
            SectionBody::Team { .. } => SectionKind::Team,
            SectionBody::OpenRoles { .. } => SectionKind::OpenRoles,
            SectionBody::Cta { .. } => SectionKind::Cta,
            SectionBody::Testimonials { .. } => SectionKind::Testimonials,
            SectionBody::Faq { .. } => SectionKind::Faq,
        }
    }

    /// Default payload for a freshly-inserted section. Every field is
    /// populated so no missing-required-field state ever enters the list.
    pub fn default_for(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Hero => SectionBody::Hero {
                headline: "Join our team".to_string(),
                subheadline: "Help us build what's next".to_string(),
                background_image: None,
            },
            SectionKind::About => SectionBody::About {
                title: "About us".to_string(),
                body: "Tell candidates what your company does and why it matters."
                    .to_string(),
            },
            SectionKind::Values => SectionBody::Values {
                title: "Our values".to_string(),
                items: vec![ValueItem {
                    icon: "star".to_string(),
                    title: "Put people first".to_string(),
                    description: "We hire for kindness as much as skill.".to_string(),
                }],
            },
            SectionKind::Impact => SectionBody::Impact {
                title: "Our impact".to_string(),
                stats: vec![ImpactStat {
                    value: "10k+".to_string(),
                    label: "customers served".to_string(),
                }],
            },
            SectionKind::Benefits => SectionBody::Benefits {
                title: "Benefits".to_string(),
                items: vec![BenefitItem {
                    icon: "heart".to_string(),
                    title: "Health coverage".to_string(),
                    description: "Medical, dental, and vision for you and yours."
                        .to_string(),
                }],
            },
            SectionKind::Team => SectionBody::Team {
                title: "Meet the team".to_string(),
                members: Vec::new(),
            },
            SectionKind::OpenRoles => SectionBody::OpenRoles {
                title: "Open roles".to_string(),
                show_locations: true,
            },
            SectionKind::Cta => SectionBody::Cta {
                headline: "Ready to apply?".to_string(),
                button_label: "See open roles".to_string(),
                button_url: "#open-roles".to_string(),
            },
            SectionKind::Testimonials => SectionBody::Testimonials {
                title: "What our team says".to_string(),
                quotes: Vec::new(),
            },
            SectionKind::Faq => SectionBody::Faq {
                title: "Frequently asked questions".to_string(),
                entries: vec![FaqEntry {
                    question: "What is your interview process like?".to_string(),
                    answer: "Three rounds, typically wrapped up within two weeks."
                        .to_string(),
                }],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub attribution: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}
