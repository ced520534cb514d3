use crate::models::profile::Profile;
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#7c3aed",
    accent_soft: "#ede9fe",
    surface: "#ffffff",
};

/// Draws skills as proficiency bars.
pub struct Creative;

impl TemplateRenderer for Creative {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn defaults(&self) -> Profile {
        super::photographer_sample()
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: true,
            lists: &[],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Banner)
            .summary("About Me")
            .open_column("columns")
            .open_column("aside")
            .skills("Skills", SkillStyle::Bars)
            .education("Education")
            .close_column()
            .open_column("main")
            .experiences("Experience", false)
            .close_column()
            .close_column()
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{SkillCategory, SkillItem};

    #[test]
    fn test_default_skills_fall_back_to_descending_bars() {
        let doc = Creative.render(&Creative.defaults());
        assert!(doc.body.contains("width:95%"));
        assert!(doc.body.contains("width:80%"));
    }

    #[test]
    fn test_explicit_levels_are_drawn() {
        let profile = Profile {
            skills: vec![SkillCategory {
                category: "Editing".to_string(),
                items: vec![SkillItem::rated("Lightroom", 62)],
            }],
            ..Creative.defaults()
        };
        let doc = Creative.render(&profile);
        assert!(doc.body.contains("<span class=\"level\">62%</span>"));
    }
}
