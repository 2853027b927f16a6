pub mod page;
pub mod section;
pub mod theme;

pub use page::PageConfig;
pub use section::{
    BenefitItem, FaqEntry, ImpactStat, Section, SectionBody, SectionId, SectionKind,
    TeamMember, Testimonial, ValueItem,
};
pub use theme::Theme;
