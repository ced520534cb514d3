use crate::models::fields::ListName;
use crate::models::profile::{Certification, Education, Experience, Profile, SkillCategory};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#4338ca",
    accent_soft: "#e0e7ff",
    surface: "#ffffff",
};

pub struct Finance;

impl TemplateRenderer for Finance {
    fn id(&self) -> TemplateId {
        TemplateId::Finance
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Michael Reynolds".to_string(),
            title: "Senior Financial Analyst".to_string(),
            email: "michael.reynolds@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Chicago, IL".to_string(),
            website: "www.michaelreynolds.finance".to_string(),
            linkedin: "linkedin.com/in/michaelreynolds".to_string(),
            summary: "Detail-oriented Financial Analyst with 8+ years of experience in financial \
                      modeling, forecasting, and investment analysis. Proven track record of \
                      identifying cost-saving opportunities and optimizing financial \
                      performance. Skilled in financial reporting, budgeting, and strategic \
                      planning with expertise in the technology and healthcare sectors."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "Senior Financial Analyst",
                    "Global Investments Corp",
                    "2019 - Present",
                    "Lead financial planning and analysis for technology sector portfolio \
                     ($250M AUM). Develop complex financial models to evaluate investment \
                     opportunities and optimize asset allocation. Present quarterly performance \
                     reports to executive leadership and key stakeholders. Implemented process \
                     improvements that reduced reporting time by 35% while increasing accuracy.",
                ),
                Experience::new(
                    "Financial Analyst",
                    "HealthTech Partners",
                    "2016 - 2019",
                    "Conducted financial analysis and due diligence for healthcare technology \
                     investments. Created detailed financial models and valuation analyses for \
                     potential acquisitions. Monitored performance of existing investments and \
                     prepared monthly financial reports. Identified $1.2M in cost-saving \
                     opportunities across portfolio companies.",
                ),
                Experience::new(
                    "Junior Financial Analyst",
                    "First Capital Management",
                    "2014 - 2016",
                    "Assisted in preparation of financial statements, budgets, and forecasts. \
                     Performed variance analysis and identified trends in financial data. \
                     Supported senior analysts in due diligence processes and financial \
                     modeling. Automated reporting processes that improved efficiency by 25%.",
                ),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Financial Analysis",
                    &[
                        "Financial Modeling",
                        "Forecasting",
                        "Budgeting",
                        "Variance Analysis",
                        "Investment Analysis",
                        "Risk Assessment",
                    ],
                ),
                SkillCategory::labels(
                    "Technical Skills",
                    &[
                        "Excel (Advanced)",
                        "PowerBI",
                        "Tableau",
                        "SQL",
                        "Bloomberg Terminal",
                        "SAP",
                    ],
                ),
                SkillCategory::labels(
                    "Additional Skills",
                    &[
                        "Strategic Planning",
                        "Data Analysis",
                        "Financial Reporting",
                        "Presentation Skills",
                        "Project Management",
                    ],
                ),
            ],
            education: vec![
                Education::new(
                    "MBA, Finance",
                    "University of Chicago Booth School of Business",
                    "2014",
                ),
                Education::new(
                    "B.S. Finance",
                    "University of Illinois at Urbana-Champaign",
                    "2012",
                ),
            ],
            certifications: vec![
                Certification::new("Chartered Financial Analyst (CFA)", "CFA Institute", "2016"),
                Certification::new(
                    "Financial Modeling & Valuation Analyst (FMVA)",
                    "Corporate Finance Institute",
                    "2015",
                ),
                Certification::new(
                    "Financial Risk Manager (FRM)",
                    "Global Association of Risk Professionals",
                    "2017",
                ),
            ],
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[ListName::Certifications],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .experiences("Professional Experience", false)
            .education("Education")
            .skills("Skills & Expertise", SkillStyle::Inline)
            .certifications("Certifications")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certifications_rendered_in_order() {
        let doc = Finance.render(&Finance.defaults());
        assert_eq!(doc.section(ListName::Certifications).unwrap().entries, 3);
        let cfa = doc.body.find("Chartered Financial Analyst (CFA)").unwrap();
        let frm = doc.body.find("Financial Risk Manager (FRM)").unwrap();
        assert!(cfa < frm);
        assert!(doc.body.contains("Financial Modeling &amp; Valuation Analyst"));
    }
}
