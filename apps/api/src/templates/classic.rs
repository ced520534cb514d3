use crate::models::profile::Profile;
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#374151",
    accent_soft: "#f3f4f6",
    surface: "#ffffff",
};

/// Single-column layout with a split header.
pub struct Classic;

impl TemplateRenderer for Classic {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }

    fn defaults(&self) -> Profile {
        super::photographer_sample()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .experiences("Professional Experience", false)
            .skills("Skills", SkillStyle::Chips)
            .education("Education")
            .finish()
    }
}
