use crate::models::fields::ListName;
use crate::models::profile::{Certification, Education, Experience, Profile, SkillCategory};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#dc2626",
    accent_soft: "#fee2e2",
    surface: "#ffffff",
};

/// Clinical résumé with a specialties strip below the summary.
pub struct Healthcare;

impl TemplateRenderer for Healthcare {
    fn id(&self) -> TemplateId {
        TemplateId::Healthcare
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Dr. Emily Chen".to_string(),
            title: "Registered Nurse Practitioner".to_string(),
            email: "emily.chen@healthcare.org".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Boston, MA".to_string(),
            website: "www.emilychen.healthcare".to_string(),
            linkedin: "linkedin.com/in/emilychen".to_string(),
            summary: "Compassionate Nurse Practitioner with 8+ years of experience in critical \
                      care and family medicine. Dedicated to providing patient-centered care \
                      with a focus on preventative health and chronic disease management. \
                      Strong clinical skills combined with excellent communication abilities to \
                      deliver comprehensive healthcare services."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "Nurse Practitioner",
                    "Boston Medical Center",
                    "2019 - Present",
                    "Provide comprehensive primary care services to diverse patient \
                     population. Conduct physical examinations, diagnose and treat acute and \
                     chronic conditions, and prescribe medications. Collaborate with \
                     interdisciplinary healthcare team to develop and implement patient care \
                     plans. Educate patients on disease prevention and health maintenance.",
                ),
                Experience::new(
                    "Registered Nurse - ICU",
                    "Massachusetts General Hospital",
                    "2015 - 2019",
                    "Delivered critical care to patients with complex medical conditions. \
                     Monitored and assessed patient status, administered medications and \
                     treatments, and documented care. Collaborated with physicians and \
                     specialists to coordinate patient care. Served as preceptor for new \
                     nursing staff and students.",
                ),
                Experience::new(
                    "Staff Nurse",
                    "Community Health Center",
                    "2013 - 2015",
                    "Provided primary care services to underserved populations. Conducted \
                     patient assessments, administered vaccinations, and assisted with minor \
                     procedures. Educated patients on health promotion and disease prevention. \
                     Participated in community outreach programs.",
                ),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Clinical Skills",
                    &[
                        "Physical Assessment",
                        "Diagnostic Interpretation",
                        "Medication Management",
                        "Wound Care",
                        "IV Therapy",
                        "Critical Care",
                    ],
                ),
                SkillCategory::labels(
                    "Technical Skills",
                    &[
                        "Electronic Health Records",
                        "Medical Equipment Operation",
                        "Telehealth Services",
                        "Clinical Documentation",
                        "Patient Monitoring Systems",
                    ],
                ),
                SkillCategory::labels(
                    "Soft Skills",
                    &[
                        "Patient Education",
                        "Interdisciplinary Collaboration",
                        "Crisis Management",
                        "Empathetic Communication",
                        "Cultural Competence",
                    ],
                ),
            ],
            education: vec![
                Education::new("Master of Science in Nursing", "Boston University", "2015"),
                Education::new(
                    "Bachelor of Science in Nursing",
                    "University of Massachusetts",
                    "2012",
                ),
            ],
            certifications: vec![
                Certification::new(
                    "Family Nurse Practitioner (FNP-BC)",
                    "American Nurses Credentialing Center",
                    "2015",
                ),
                Certification::new(
                    "Advanced Cardiovascular Life Support (ACLS)",
                    "American Heart Association",
                    "2021",
                ),
                Certification::new(
                    "Basic Life Support (BLS)",
                    "American Heart Association",
                    "2021",
                ),
            ],
            specialties: [
                "Primary Care",
                "Preventative Medicine",
                "Chronic Disease Management",
                "Women's Health",
                "Geriatric Care",
                "Mental Health",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[ListName::Specialties, ListName::Certifications],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .specialties("Clinical Specialties")
            .experiences("Professional Experience", false)
            .education("Education")
            .skills("Skills & Expertise", SkillStyle::Chips)
            .certifications("Certifications")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialties_escaped_and_counted() {
        let doc = Healthcare.render(&Healthcare.defaults());
        assert_eq!(doc.section(ListName::Specialties).unwrap().entries, 6);
        assert!(doc.body.contains("Women&#x27;s Health"));
    }

    #[test]
    fn test_cleared_specialties_hide_section() {
        let profile = Profile {
            specialties: Vec::new(),
            ..Healthcare.defaults()
        };
        let doc = Healthcare.render(&profile);
        assert!(doc.section(ListName::Specialties).is_none());
        assert!(doc.section(ListName::Certifications).is_some());
    }
}
