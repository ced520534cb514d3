use crate::models::fields::ListName;
use crate::models::profile::{
    Certification, Education, Experience, Language, Profile, SkillCategory,
};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#ea580c",
    accent_soft: "#ffedd5",
    surface: "#ffffff",
};

pub struct Hospitality;

impl TemplateRenderer for Hospitality {
    fn id(&self) -> TemplateId {
        TemplateId::Hospitality
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Michael Rodriguez".to_string(),
            title: "Hotel General Manager".to_string(),
            email: "michael.rodriguez@hospitality.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Miami, FL".to_string(),
            website: "www.michaelrodriguez.hospitality".to_string(),
            linkedin: "linkedin.com/in/michaelrodriguez".to_string(),
            summary: "Dynamic Hotel General Manager with 10+ years of experience in luxury \
                      hospitality management. Proven track record of increasing revenue, \
                      enhancing guest satisfaction, and optimizing operational efficiency. \
                      Skilled in team leadership, budget management, and implementing \
                      innovative service strategies that exceed guest expectations."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "General Manager",
                    "Ocean View Grand Resort & Spa",
                    "2018 - Present",
                    "Oversee all operations for a 350-room luxury beachfront resort with 200+ \
                     staff members. Increased annual revenue by 22% through strategic pricing \
                     and marketing initiatives. Improved guest satisfaction scores from 85% to \
                     94% by implementing enhanced service protocols. Managed $15M annual \
                     operating budget while reducing costs by 8% through efficiency \
                     improvements. Led complete renovation of restaurant and spa facilities, \
                     resulting in 30% increase in F&B revenue.",
                ),
                Experience::new(
                    "Assistant General Manager",
                    "Metropolitan Luxury Hotel",
                    "2015 - 2018",
                    "Directed daily operations for a 275-room urban luxury hotel. Supervised \
                     department heads and ensured seamless coordination between front office, \
                     housekeeping, F&B, and maintenance. Implemented new staff training \
                     program that reduced turnover by 25%. Managed guest relations and \
                     resolved complex issues to maintain high satisfaction ratings. Assisted \
                     in developing and executing annual business plans and marketing \
                     strategies.",
                ),
                Experience::new(
                    "Front Office Manager",
                    "Parkside Hotel & Conference Center",
                    "2012 - 2015",
                    "Managed front desk operations, reservations, and guest services for a \
                     200-room business hotel. Supervised and trained a team of 15 front desk \
                     agents and concierge staff. Implemented new check-in/check-out procedures \
                     that improved efficiency by 30%. Increased upselling revenue by 40% \
                     through staff incentive programs. Coordinated with sales team to ensure \
                     smooth handling of group arrivals and VIP guests.",
                ),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Management",
                    &[
                        "Revenue Management",
                        "Budget Planning",
                        "Team Leadership",
                        "Strategic Planning",
                        "Crisis Management",
                        "Contract Negotiation",
                    ],
                ),
                SkillCategory::labels(
                    "Operations",
                    &[
                        "Front Office Operations",
                        "F&B Management",
                        "Housekeeping Standards",
                        "Inventory Control",
                        "Facility Maintenance",
                        "Event Coordination",
                    ],
                ),
                SkillCategory::labels(
                    "Technical",
                    &[
                        "Opera PMS",
                        "Micros POS",
                        "Revenue Management Systems",
                        "Microsoft Office Suite",
                        "Salesforce CRM",
                        "Social Media Management",
                    ],
                ),
            ],
            education: vec![
                Education::new(
                    "Bachelor of Science, Hospitality Management",
                    "Cornell University, School of Hotel Administration",
                    "2012",
                ),
                Education::new(
                    "Associate Degree, Culinary Arts",
                    "Culinary Institute of America",
                    "2010",
                ),
            ],
            certifications: vec![
                Certification::new(
                    "Certified Hotel Administrator (CHA)",
                    "American Hotel & Lodging Educational Institute",
                    "2016",
                ),
                Certification::new(
                    "Revenue Management Certification",
                    "Hotel Revenue Management Academy",
                    "2017",
                ),
                Certification::new("Food Safety Manager Certification", "ServSafe", "2019"),
            ],
            languages: vec![
                Language::new("English", "Native"),
                Language::new("Spanish", "Fluent"),
                Language::new("French", "Intermediate"),
            ],
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[ListName::Certifications, ListName::Languages],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .experiences("Professional Experience", false)
            .education("Education")
            .skills("Skills & Expertise", SkillStyle::Chips)
            .certifications("Certifications")
            .languages("Languages")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_close_the_page() {
        let doc = Hospitality.render(&Hospitality.defaults());
        assert_eq!(doc.section(ListName::Languages).unwrap().entries, 3);
        let last = doc.sections.last().unwrap();
        assert_eq!(last.kind, crate::render::SectionKind::List(ListName::Languages));
        assert!(doc.body.contains("<strong>Spanish</strong> <span>Fluent</span>"));
    }
}
