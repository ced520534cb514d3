//! The eleven résumé templates.
//!
//! Four style templates (classic, minimal, modern, creative) share one sample
//! record and differ only in presentation. The seven profession templates each
//! carry their own sample record and surface the lists that matter for that
//! field.

pub mod classic;
pub mod creative;
pub mod creative_design;
pub mod developer;
pub mod education;
pub mod finance;
pub mod healthcare;
pub mod hospitality;
pub mod marketing;
pub mod minimal;
pub mod modern;

use crate::models::profile::{Education, Experience, Profile, SkillCategory};

/// Sample record shown by the style templates.
pub(crate) fn photographer_sample() -> Profile {
    Profile {
        name: "Alex Morgan".to_string(),
        title: "Professional Photographer".to_string(),
        email: "alex.morgan@photography.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        website: "www.alexmorganphotography.com".to_string(),
        linkedin: "linkedin.com/in/alexmorganphoto".to_string(),
        summary: "Award-winning photographer with over 8 years of experience specializing in \
                  portrait and landscape photography. Published in National Geographic and \
                  collaborated with major brands including Apple and Nike."
            .to_string(),
        experiences: vec![
            Experience::new(
                "Lead Photographer",
                "Aperture Studios",
                "2020 - Present",
                "Lead photographer for commercial and editorial shoots. Managed a team of 3 \
                 assistant photographers and coordinated with art directors to deliver \
                 high-quality visual content for major brands.",
            ),
            Experience::new(
                "Freelance Photographer",
                "Self-employed",
                "2017 - 2020",
                "Specialized in portrait and landscape photography. Published work in several \
                 national magazines and collaborated with local businesses for product \
                 photography.",
            ),
            Experience::new(
                "Photography Assistant",
                "Vision Media",
                "2015 - 2017",
                "Assisted senior photographers during studio and location shoots. Responsible \
                 for lighting setup, equipment maintenance, and post-production editing.",
            ),
        ],
        skills: vec![
            SkillCategory::labels(
                "Photography",
                &[
                    "Portrait Photography",
                    "Landscape Photography",
                    "Event Photography",
                    "Product Photography",
                ],
            ),
            SkillCategory::labels(
                "Technical",
                &[
                    "Adobe Photoshop",
                    "Adobe Lightroom",
                    "Capture One",
                    "Studio Lighting",
                ],
            ),
        ],
        education: vec![
            Education::new(
                "Bachelor of Fine Arts in Photography",
                "California Institute of the Arts",
                "2015",
            ),
            Education::new(
                "Certificate in Digital Imaging",
                "New York Film Academy",
                "2013",
            ),
        ],
        ..Profile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::{Style, TemplateId};
    use crate::render::renderer_for;

    #[test]
    fn test_style_templates_share_the_sample_record() {
        for style in Style::ALL {
            assert_eq!(renderer_for(style.renderer()).defaults(), photographer_sample());
        }
    }

    #[test]
    fn test_profession_samples_are_distinct() {
        let names: Vec<String> = TemplateId::PROFESSIONS
            .iter()
            .map(|id| renderer_for(*id).defaults().name)
            .collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate sample {name}");
        }
    }
}
