use crate::models::fields::ListName;
use crate::models::profile::{Education, Experience, PortfolioPiece, Profile, SkillCategory};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#db2777",
    accent_soft: "#fce7f3",
    surface: "#ffffff",
};

/// Designer résumé with an image gallery of portfolio pieces.
pub struct CreativeDesign;

impl TemplateRenderer for CreativeDesign {
    fn id(&self) -> TemplateId {
        TemplateId::CreativeDesign
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Alex Morgan".to_string(),
            title: "Graphic Designer & Illustrator".to_string(),
            email: "alex.morgan@creative.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Portland, OR".to_string(),
            website: "www.alexmorgan.design".to_string(),
            linkedin: "linkedin.com/in/alexmorgandesign".to_string(),
            summary: "Versatile Graphic Designer and Illustrator with 7+ years of experience \
                      creating compelling visual identities and illustrations for brands across \
                      various industries. Passionate about combining traditional art techniques \
                      with digital innovation to deliver unique, impactful designs that tell \
                      stories and engage audiences."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "Senior Graphic Designer",
                    "Creative Pulse Agency",
                    "2020 - Present",
                    "Lead designer for branding and marketing campaigns for clients in tech, \
                     retail, and entertainment. Develop visual identities, marketing materials, \
                     and digital assets. Collaborate with creative directors and clients to \
                     translate brand vision into compelling visual solutions. Mentor junior \
                     designers and oversee quality control for all design deliverables.",
                ),
                Experience::new(
                    "Graphic Designer & Illustrator",
                    "Artisan Design Studio",
                    "2017 - 2020",
                    "Created illustrations and designs for print and digital media. Developed \
                     brand identities, packaging designs, and editorial illustrations. \
                     Collaborated with copywriters and marketing teams to create cohesive \
                     visual storytelling. Managed multiple projects simultaneously while \
                     meeting tight deadlines.",
                ),
                Experience::new(
                    "Junior Designer",
                    "Horizon Media Group",
                    "2015 - 2017",
                    "Assisted senior designers with layout and production tasks. Created \
                     social media graphics, web banners, and marketing collateral. Participated \
                     in brainstorming sessions and concept development. Maintained brand \
                     consistency across various platforms and materials.",
                ),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Design",
                    &[
                        "Brand Identity",
                        "Typography",
                        "Illustration",
                        "Packaging Design",
                        "Editorial Design",
                        "UI/UX Design",
                    ],
                ),
                SkillCategory::labels(
                    "Technical",
                    &[
                        "Adobe Creative Suite",
                        "Figma",
                        "Procreate",
                        "Sketch",
                        "HTML/CSS",
                        "Motion Graphics",
                    ],
                ),
            ],
            education: vec![
                Education::new(
                    "Bachelor of Fine Arts, Graphic Design",
                    "Rhode Island School of Design",
                    "2015",
                ),
                Education::new(
                    "Certificate in Digital Illustration",
                    "School of Visual Arts",
                    "2016",
                ),
            ],
            portfolio: vec![
                PortfolioPiece::new(
                    "Bloom Botanicals Branding",
                    "Complete brand identity for an organic skincare line",
                    "https://images.unsplash.com/photo-1547887538-e3a2f32cb1cc?w=600&q=80",
                ),
                PortfolioPiece::new(
                    "Tech Summit Event Materials",
                    "Comprehensive design system for annual technology conference",
                    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&q=80",
                ),
                PortfolioPiece::new(
                    "Wanderlust Magazine Illustrations",
                    "Series of editorial illustrations for travel publication",
                    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=600&q=80",
                ),
                PortfolioPiece::new(
                    "Harmony Music App UI",
                    "User interface design for streaming music application",
                    "https://images.unsplash.com/photo-1557264337-e8a93017fe92?w=600&q=80",
                ),
            ],
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[ListName::Portfolio],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Banner)
            .summary("About")
            .experiences("Professional Experience", false)
            .portfolio("Portfolio Highlights")
            .skills("Skills", SkillStyle::Chips)
            .education("Education")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_images_are_escaped_urls() {
        let doc = CreativeDesign.render(&CreativeDesign.defaults());
        assert_eq!(doc.section(ListName::Portfolio).unwrap().entries, 4);
        assert!(doc
            .body
            .contains("src=\"https://images.unsplash.com/photo-1547887538-e3a2f32cb1cc?w=600&amp;q=80\""));
    }
}
