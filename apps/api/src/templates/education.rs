use crate::models::fields::ListName;
use crate::models::profile::{
    Certification, Course, Education as Degree, Experience, Profile, SkillCategory,
};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#d97706",
    accent_soft: "#fef3c7",
    surface: "#fffdf7",
};

/// Teaching résumé with a courses-taught section.
pub struct Education;

impl TemplateRenderer for Education {
    fn id(&self) -> TemplateId {
        TemplateId::Education
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Professor James Wilson".to_string(),
            title: "High School Science Teacher".to_string(),
            email: "james.wilson@education.org".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Portland, OR".to_string(),
            website: "www.jameswilson.education".to_string(),
            linkedin: "linkedin.com/in/jameswilson".to_string(),
            summary: "Dedicated Science Teacher with 10+ years of experience creating engaging \
                      learning environments for high school students. Specialized in Biology \
                      and Chemistry with a focus on inquiry-based learning and STEM \
                      integration. Committed to fostering critical thinking skills and \
                      scientific literacy through innovative teaching methods and technology \
                      integration."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "Science Department Chair",
                    "Lincoln High School",
                    "2019 - Present",
                    "Lead a department of 8 science teachers, developing curriculum aligned \
                     with state standards and Next Generation Science Standards. Implement \
                     project-based learning initiatives and coordinate STEM programs. Mentor \
                     new teachers and facilitate professional development workshops. Increased \
                     AP science enrollment by 35% and improved average AP scores from 3.2 to \
                     4.1.",
                ),
                Experience::new(
                    "Biology & Chemistry Teacher",
                    "Roosevelt High School",
                    "2014 - 2019",
                    "Taught Biology, Chemistry, and AP Biology to grades 9-12. Developed and \
                     implemented laboratory activities and research projects. Created \
                     differentiated instruction to meet diverse learning needs. Served as \
                     Science Olympiad coach, leading team to state finals three consecutive \
                     years.",
                ),
                Experience::new(
                    "Student Teacher",
                    "Washington Middle School",
                    "2013 - 2014",
                    "Completed teaching practicum for grades 6-8 science classes. Designed and \
                     delivered lesson plans under mentor teacher supervision. Implemented \
                     inquiry-based learning strategies and technology integration. \
                     Participated in parent-teacher conferences and school community events.",
                ),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Teaching Methods",
                    &[
                        "Inquiry-Based Learning",
                        "Project-Based Learning",
                        "Differentiated Instruction",
                        "Formative Assessment",
                        "Blended Learning",
                        "STEM Integration",
                    ],
                ),
                SkillCategory::labels(
                    "Technical Skills",
                    &[
                        "Laboratory Management",
                        "Google Classroom",
                        "Canvas LMS",
                        "Digital Assessment Tools",
                        "Virtual Lab Simulations",
                        "Data Analysis",
                    ],
                ),
                SkillCategory::labels(
                    "Soft Skills",
                    &[
                        "Classroom Management",
                        "Student Mentoring",
                        "Parent Communication",
                        "Curriculum Development",
                        "Team Collaboration",
                        "Public Speaking",
                    ],
                ),
            ],
            education: vec![
                Degree::new(
                    "Master of Education, Science Education",
                    "University of Oregon",
                    "2013",
                ),
                Degree::new(
                    "Bachelor of Science, Biology",
                    "Oregon State University",
                    "2011",
                ),
            ],
            certifications: vec![
                Certification::new(
                    "State Teaching License - Science (6-12)",
                    "Oregon Department of Education",
                    "2013",
                ),
                Certification::new("AP Biology Certified Instructor", "College Board", "2015"),
                Certification::new(
                    "Google Certified Educator Level 2",
                    "Google for Education",
                    "2018",
                ),
            ],
            courses: vec![
                Course::new(
                    "Biology 101",
                    "Introductory biology course covering cell structure, genetics, evolution, \
                     and ecology.",
                ),
                Course::new(
                    "AP Biology",
                    "College-level biology course with advanced laboratory investigations and \
                     research projects.",
                ),
                Course::new(
                    "Chemistry",
                    "Study of matter, its properties, and the changes it undergoes through \
                     chemical reactions.",
                ),
                Course::new(
                    "Environmental Science",
                    "Interdisciplinary course examining environmental issues and sustainable \
                     solutions.",
                ),
            ],
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[ListName::Courses, ListName::Certifications],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .experiences("Teaching Experience", false)
            .courses("Courses Taught")
            .education("Education")
            .certifications("Certifications")
            .skills("Skills & Expertise", SkillStyle::Chips)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courses_follow_experience() {
        let doc = Education.render(&Education.defaults());
        assert_eq!(doc.section(ListName::Courses).unwrap().entries, 4);
        let experience = doc.body.find("Teaching Experience").unwrap();
        let courses = doc.body.find("Courses Taught").unwrap();
        assert!(experience < courses);
    }
}
