use crate::models::fields::ListName;
use crate::models::profile::{Campaign, Education, Experience, Profile, SkillCategory};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#0d9488",
    accent_soft: "#ccfbf1",
    surface: "#ffffff",
};

/// Leads with campaign results; experiences list their achievements.
pub struct Marketing;

impl TemplateRenderer for Marketing {
    fn id(&self) -> TemplateId {
        TemplateId::Marketing
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Sarah Johnson".to_string(),
            title: "Digital Marketing Strategist".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            website: "www.sarahjohnson.marketing".to_string(),
            linkedin: "linkedin.com/in/sarahjohnson".to_string(),
            summary: "Results-driven Digital Marketing Strategist with 7+ years of experience \
                      developing integrated marketing campaigns that drive engagement and \
                      conversion. Expertise in SEO/SEM, content strategy, social media \
                      marketing, and analytics with a proven track record of increasing ROI \
                      across multiple channels."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "Digital Marketing Manager",
                    "GrowthLabs Marketing",
                    "2020 - Present",
                    "Lead digital marketing strategy for B2B SaaS clients with budgets ranging \
                     from $50K to $500K annually. Develop and execute multi-channel campaigns \
                     across paid search, social media, email, and content marketing.",
                )
                .with_achievements(&[
                    "Increased client conversion rates by an average of 35% through optimized \
                     landing pages and A/B testing",
                    "Reduced customer acquisition costs by 28% while maintaining lead quality",
                    "Grew organic traffic by 65% through comprehensive SEO strategy and content \
                     optimization",
                ]),
                Experience::new(
                    "SEO & Content Strategist",
                    "Digital Presence Inc",
                    "2018 - 2020",
                    "Developed and implemented SEO and content strategies for e-commerce and \
                     B2B clients. Conducted keyword research, competitive analysis, and created \
                     editorial calendars to drive organic growth.",
                )
                .with_achievements(&[
                    "Achieved first page rankings for 75+ high-value keywords across client \
                     portfolios",
                    "Created content strategy that increased blog traffic by 120% \
                     year-over-year",
                    "Implemented technical SEO improvements resulting in 40% increase in crawl \
                     efficiency",
                ]),
                Experience::new(
                    "Social Media Specialist",
                    "BrandConnect Agency",
                    "2016 - 2018",
                    "Managed social media presence for 10+ clients across multiple industries. \
                     Created engaging content, developed paid social campaigns, and analyzed \
                     performance metrics to optimize strategy.",
                )
                .with_achievements(&[
                    "Grew combined social following by 200K+ across all client accounts",
                    "Achieved 3.5% average engagement rate (industry average: 1.2%)",
                    "Managed $15K monthly ad spend with average ROAS of 4.2x",
                ]),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Digital Marketing",
                    &[
                        "SEO/SEM",
                        "Content Strategy",
                        "Social Media Marketing",
                        "Email Marketing",
                        "PPC Advertising",
                        "Marketing Automation",
                    ],
                ),
                SkillCategory::labels(
                    "Analytics & Tools",
                    &[
                        "Google Analytics",
                        "Google Ads",
                        "Facebook Ads Manager",
                        "HubSpot",
                        "SEMrush",
                        "Mailchimp",
                    ],
                ),
                SkillCategory::labels(
                    "Additional Skills",
                    &[
                        "A/B Testing",
                        "Conversion Optimization",
                        "Marketing Funnel Design",
                        "Brand Positioning",
                        "Campaign Management",
                    ],
                ),
            ],
            education: vec![
                Education::new("MBA, Marketing", "New York University", "2016"),
                Education::new("B.S. Business Administration", "Boston University", "2014"),
            ],
            campaigns: vec![
                Campaign::new(
                    "TechSolutions Product Launch",
                    "Generated 2,500+ qualified leads with 18% conversion rate",
                ),
                Campaign::new(
                    "RetailGiant Holiday Campaign",
                    "Achieved 245% ROI with 32% YoY revenue increase",
                ),
                Campaign::new(
                    "HealthApp User Acquisition",
                    "Reduced CAC by 40% while scaling to 10K+ monthly users",
                ),
                Campaign::new(
                    "FinanceGroup Rebranding",
                    "Increased brand awareness by 65% and web traffic by 83%",
                ),
            ],
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[ListName::Campaigns],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .campaigns("Key Campaign Results")
            .experiences("Professional Experience", true)
            .skills("Skills & Expertise", SkillStyle::Chips)
            .education("Education")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achievements_are_listed() {
        let doc = Marketing.render(&Marketing.defaults());
        assert!(doc
            .body
            .contains("Managed $15K monthly ad spend with average ROAS of 4.2x"));
        assert_eq!(doc.body.matches("class=\"achievements\"").count(), 3);
    }

    #[test]
    fn test_experience_without_achievements_has_no_list() {
        let profile = Profile {
            experiences: vec![Experience::new("Intern", "Agency", "2015", "Helped out")],
            ..Marketing.defaults()
        };
        let doc = Marketing.render(&profile);
        assert!(!doc.body.contains("class=\"achievements\""));
    }
}
