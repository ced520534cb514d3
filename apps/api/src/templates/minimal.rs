use crate::models::profile::Profile;
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#111827",
    accent_soft: "#f9fafb",
    surface: "#ffffff",
};

pub struct Minimal;

impl TemplateRenderer for Minimal {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
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
            .header(HeaderStyle::Centered)
            .summary("About")
            .experiences("Experience", false)
            .skills("Skills", SkillStyle::Inline)
            .education("Education")
            .finish()
    }
}
