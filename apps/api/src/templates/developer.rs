use crate::models::fields::ListName;
use crate::models::profile::{Education, Experience, Profile, Project, SkillCategory};
use crate::models::template::TemplateId;
use crate::render::html::{DocumentBuilder, HeaderStyle, SkillStyle, Theme};
use crate::render::{Capabilities, Document, TemplateRenderer};

const THEME: Theme = Theme {
    accent: "#1f2937",
    accent_soft: "#e5e7eb",
    surface: "#ffffff",
};

/// Software engineering résumé: GitHub handle in the header and a project
/// list with technology tags.
pub struct Developer;

impl TemplateRenderer for Developer {
    fn id(&self) -> TemplateId {
        TemplateId::Developer
    }

    fn defaults(&self) -> Profile {
        Profile {
            name: "Alex Chen".to_string(),
            title: "Senior Full Stack Developer".to_string(),
            email: "alex.chen@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "San Francisco, CA".to_string(),
            website: "www.alexchen.dev".to_string(),
            linkedin: "linkedin.com/in/alexchen".to_string(),
            github: "github.com/alexchen".to_string(),
            summary: "Innovative Full Stack Developer with 6+ years of experience building \
                      scalable web applications and microservices. Specialized in React, \
                      Node.js, and cloud architecture with a focus on performance optimization \
                      and clean code practices."
                .to_string(),
            experiences: vec![
                Experience::new(
                    "Senior Full Stack Developer",
                    "TechNova Solutions",
                    "2020 - Present",
                    "Led development of a high-traffic SaaS platform serving 100K+ users. \
                     Implemented microservices architecture using Node.js, React, and AWS. \
                     Reduced page load time by 40% through code optimization and improved \
                     CI/CD pipeline efficiency by 35%.",
                ),
                Experience::new(
                    "Full Stack Developer",
                    "DataFlow Systems",
                    "2018 - 2020",
                    "Developed RESTful APIs and frontend components for data visualization \
                     dashboard. Utilized React, TypeScript, and Express.js. Implemented \
                     real-time data processing with WebSockets and Redis, handling 10K+ \
                     concurrent connections.",
                ),
                Experience::new(
                    "Frontend Developer",
                    "WebSphere Inc",
                    "2016 - 2018",
                    "Built responsive web applications using React and Redux. Collaborated \
                     with UX designers to implement pixel-perfect interfaces. Improved test \
                     coverage from 65% to 90% using Jest and React Testing Library.",
                ),
            ],
            skills: vec![
                SkillCategory::labels(
                    "Frontend",
                    &["React", "TypeScript", "Next.js", "Redux", "Tailwind CSS", "Jest"],
                ),
                SkillCategory::labels(
                    "Backend",
                    &[
                        "Node.js",
                        "Express",
                        "Python",
                        "GraphQL",
                        "REST APIs",
                        "MongoDB",
                        "PostgreSQL",
                    ],
                ),
                SkillCategory::labels(
                    "DevOps & Tools",
                    &["AWS", "Docker", "Kubernetes", "CI/CD", "Git", "Jira"],
                ),
            ],
            education: vec![
                Education::new("M.S. Computer Science", "Stanford University", "2016"),
                Education::new(
                    "B.S. Computer Science",
                    "University of California, Berkeley",
                    "2014",
                ),
            ],
            projects: vec![
                Project::new(
                    "CloudScale",
                    "Open-source auto-scaling solution for containerized applications",
                    &["Go", "Kubernetes", "Prometheus"],
                    Some("github.com/alexchen/cloudscale"),
                ),
                Project::new(
                    "DataViz Platform",
                    "Interactive data visualization dashboard with real-time analytics",
                    &["React", "D3.js", "Node.js", "Socket.io"],
                    Some("dataviz-platform.demo.com"),
                ),
                Project::new(
                    "API Gateway",
                    "High-performance API gateway with rate limiting and auth",
                    &["Node.js", "Redis", "JWT", "Express"],
                    Some("github.com/alexchen/api-gateway"),
                ),
            ],
            ..Profile::default()
        }
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            shows_github: true,
            skill_levels: false,
            lists: &[ListName::Projects],
        }
    }

    fn render(&self, profile: &Profile) -> Document {
        DocumentBuilder::new(self.id(), profile, self.capabilities(), THEME)
            .header(HeaderStyle::Split)
            .summary("Professional Summary")
            .skills("Technical Skills", SkillStyle::Chips)
            .experiences("Professional Experience", false)
            .projects("Projects")
            .education("Education")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_without_link_renders_no_anchor() {
        let profile = Profile {
            projects: vec![Project::new("Offline Tool", "No public repo", &["Rust"], None)],
            ..Developer.defaults()
        };
        let doc = Developer.render(&profile);
        assert!(doc.body.contains("Offline Tool"));
        assert!(!doc.body.contains("<a href"));
    }

    #[test]
    fn test_skills_precede_experience() {
        let doc = Developer.render(&Developer.defaults());
        let skills = doc.body.find("Technical Skills").unwrap();
        let experience = doc.body.find("Professional Experience").unwrap();
        assert!(skills < experience);
    }
}
