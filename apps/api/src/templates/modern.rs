use crate::models::profile::Profile;
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#2563eb",
    accent_soft: "#dbeafe",
    surface: "#ffffff",
};

/// Coloured banner over a two-column body: profile and skills on the left,
/// work history on the right.
pub struct Modern;

impl TemplateRenderer for Modern {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
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
            .header(HeaderStyle::Banner)
            .open_column("columns")
            .open_column("aside")
            .summary("Professional Summary")
            .skills("Skills", SkillStyle::Chips)
            .education("Education")
            .close_column()
            .open_column("main")
            .experiences("Professional Experience", false)
            .close_column()
            .close_column()
            .finish()
    }
}
