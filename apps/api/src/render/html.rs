//! HTML building blocks shared by the template renderers.
//!
//! Renderers decide arrangement; this module only knows how to draw one
//! section of a Profile Record. Every piece of record text passes through
//! `escape`.

use crate::models::fields::ListName;
use crate::models::profile::{Profile, SkillItem, MAX_SKILL_LEVEL};
use crate::models::template::TemplateId;
use crate::render::{Capabilities, Document, RenderedSection, SectionKind};

/// Accent colours for one template.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub surface: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderStyle {
    /// Name and title on the left, contact column on the right.
    Split,
    Centered,
    /// Full-width coloured band.
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillStyle {
    Chips,
    /// Comma-separated line per category.
    Inline,
    /// Proficiency bars; items without a level fall back to a descending scale.
    Bars,
}

const BAR_BASE_LEVEL: u8 = 95;
const BAR_STEP: u8 = 5;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Level shown on a proficiency bar for the item at `index` in its category.
pub fn bar_level(item: &SkillItem, index: usize) -> u8 {
    match item.level() {
        Some(level) => level.min(MAX_SKILL_LEVEL),
        None => {
            let step = u8::try_from(index)
                .unwrap_or(u8::MAX)
                .saturating_mul(BAR_STEP);
            BAR_BASE_LEVEL.saturating_sub(step)
        }
    }
}

/// Prefixes scheme-less links so they resolve off-site.
fn href(link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        link.to_string()
    } else {
        format!("https://{link}")
    }
}

pub struct DocumentBuilder<'a> {
    template: TemplateId,
    profile: &'a Profile,
    capabilities: Capabilities,
    html: String,
    sections: Vec<RenderedSection>,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(
        template: TemplateId,
        profile: &'a Profile,
        capabilities: Capabilities,
        theme: Theme,
    ) -> Self {
        let html = format!(
            "<article class=\"resume resume-{}\" style=\"--accent:{};--accent-soft:{};--surface:{}\">\n",
            template.as_str(),
            theme.accent,
            theme.accent_soft,
            theme.surface
        );
        Self {
            template,
            profile,
            capabilities,
            html,
            sections: Vec::new(),
        }
    }

    pub fn header(mut self, style: HeaderStyle) -> Self {
        let p = self.profile;
        let class = match style {
            HeaderStyle::Split => "header-split",
            HeaderStyle::Centered => "header-centered",
            HeaderStyle::Banner => "header-banner",
        };
        self.html
            .push_str(&format!("<header class=\"{class}\">\n<div class=\"identity\">\n"));
        self.html
            .push_str(&format!("<h1 class=\"name\">{}</h1>\n", escape(&p.name)));
        self.html
            .push_str(&format!("<h2 class=\"title\">{}</h2>\n</div>\n", escape(&p.title)));

        self.html.push_str("<ul class=\"contact\">\n");
        let mut contact = vec![
            ("email", &p.email),
            ("phone", &p.phone),
            ("location", &p.location),
            ("linkedin", &p.linkedin),
            ("website", &p.website),
        ];
        if self.capabilities.shows_github {
            contact.push(("github", &p.github));
        }
        for (field, value) in contact {
            self.html.push_str(&format!(
                "<li data-field=\"{field}\">{}</li>\n",
                escape(value)
            ));
        }
        self.html.push_str("</ul>\n</header>\n");
        self
    }

    pub fn summary(mut self, heading: &str) -> Self {
        self.html.push_str(&format!(
            "<section data-section=\"summary\">\n<h3>{}</h3>\n<p>{}</p>\n</section>\n",
            escape(heading),
            escape(&self.profile.summary)
        ));
        self.sections.push(RenderedSection {
            kind: SectionKind::Summary,
            entries: 1,
        });
        self
    }

    /// Opens a layout column; pair with `close_column`.
    pub fn open_column(mut self, class: &str) -> Self {
        self.html
            .push_str(&format!("<div class=\"column {}\">\n", escape(class)));
        self
    }

    pub fn close_column(mut self) -> Self {
        self.html.push_str("</div>\n");
        self
    }

    pub fn experiences(mut self, heading: &str, with_achievements: bool) -> Self {
        let p = self.profile;
        self.open_section(ListName::Experiences, heading);
        for exp in &p.experiences {
            self.html.push_str("<div class=\"entry\">\n");
            self.html.push_str(&format!(
                "<div class=\"entry-head\"><h4>{}</h4><span class=\"period\">{}</span></div>\n",
                escape(&exp.title),
                escape(&exp.period)
            ));
            self.html.push_str(&format!(
                "<p class=\"org\">{}</p>\n<p>{}</p>\n",
                escape(&exp.company),
                escape(&exp.description)
            ));
            if with_achievements && !exp.achievements.is_empty() {
                self.html.push_str("<ul class=\"achievements\">\n");
                for achievement in &exp.achievements {
                    self.html
                        .push_str(&format!("<li>{}</li>\n", escape(achievement)));
                }
                self.html.push_str("</ul>\n");
            }
            self.html.push_str("</div>\n");
        }
        self.close_section(ListName::Experiences, p.experiences.len())
    }

    pub fn skills(mut self, heading: &str, style: SkillStyle) -> Self {
        let p = self.profile;
        self.open_section(ListName::Skills, heading);
        for group in &p.skills {
            self.html.push_str(&format!(
                "<div class=\"entry skill-group\">\n<h4>{}</h4>\n",
                escape(&group.category)
            ));
            match style {
                SkillStyle::Chips => {
                    self.html.push_str("<div class=\"chips\">");
                    for item in &group.items {
                        self.html.push_str(&format!(
                            "<span class=\"chip\">{}</span>",
                            escape(item.name())
                        ));
                    }
                    self.html.push_str("</div>\n");
                }
                SkillStyle::Inline => {
                    let names: Vec<String> =
                        group.items.iter().map(|i| escape(i.name())).collect();
                    self.html
                        .push_str(&format!("<p>{}</p>\n", names.join(", ")));
                }
                SkillStyle::Bars => {
                    for (idx, item) in group.items.iter().enumerate() {
                        let level = bar_level(item, idx);
                        self.html.push_str(&format!(
                            "<div class=\"bar\"><span>{}</span><span class=\"level\">{level}%</span>\
                             <div class=\"track\"><div class=\"fill\" style=\"width:{level}%\"></div></div></div>\n",
                            escape(item.name())
                        ));
                    }
                }
            }
            self.html.push_str("</div>\n");
        }
        self.close_section(ListName::Skills, p.skills.len())
    }

    pub fn education(mut self, heading: &str) -> Self {
        let p = self.profile;
        self.open_section(ListName::Education, heading);
        for edu in &p.education {
            self.html.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h4>{}</h4><span class=\"period\">{}</span></div>\
                 <p class=\"org\">{}</p></div>\n",
                escape(&edu.degree),
                escape(&edu.year),
                escape(&edu.institution)
            ));
        }
        self.close_section(ListName::Education, p.education.len())
    }

    pub fn projects(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.projects.is_empty() {
            return self;
        }
        self.open_section(ListName::Projects, heading);
        for project in &p.projects {
            self.html.push_str("<div class=\"entry\">\n<div class=\"entry-head\">");
            self.html
                .push_str(&format!("<h4>{}</h4>", escape(&project.name)));
            if let Some(link) = project.link.as_deref().filter(|l| !l.is_empty()) {
                self.html.push_str(&format!(
                    "<a href=\"{}\" rel=\"noopener noreferrer\">{}</a>",
                    escape(&href(link)),
                    escape(link)
                ));
            }
            self.html.push_str("</div>\n");
            self.html
                .push_str(&format!("<p>{}</p>\n", escape(&project.description)));
            self.html.push_str("<div class=\"chips\">");
            for tech in &project.technologies {
                self.html
                    .push_str(&format!("<span class=\"chip\">{}</span>", escape(tech)));
            }
            self.html.push_str("</div>\n</div>\n");
        }
        self.close_section(ListName::Projects, p.projects.len())
    }

    pub fn campaigns(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.campaigns.is_empty() {
            return self;
        }
        self.open_section(ListName::Campaigns, heading);
        for campaign in &p.campaigns {
            self.html.push_str(&format!(
                "<div class=\"entry card\"><h4>{}</h4><p>{}</p></div>\n",
                escape(&campaign.name),
                escape(&campaign.result)
            ));
        }
        self.close_section(ListName::Campaigns, p.campaigns.len())
    }

    pub fn certifications(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.certifications.is_empty() {
            return self;
        }
        self.open_section(ListName::Certifications, heading);
        for cert in &p.certifications {
            self.html.push_str(&format!(
                "<div class=\"entry\"><div class=\"entry-head\"><h4>{}</h4><span class=\"period\">{}</span></div>\
                 <p class=\"org\">{}</p></div>\n",
                escape(&cert.name),
                escape(&cert.year),
                escape(&cert.issuer)
            ));
        }
        self.close_section(ListName::Certifications, p.certifications.len())
    }

    pub fn specialties(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.specialties.is_empty() {
            return self;
        }
        self.open_section(ListName::Specialties, heading);
        self.html.push_str("<div class=\"chips\">");
        for specialty in &p.specialties {
            self.html.push_str(&format!(
                "<span class=\"chip entry\">{}</span>",
                escape(specialty)
            ));
        }
        self.html.push_str("</div>\n");
        self.close_section(ListName::Specialties, p.specialties.len())
    }

    pub fn courses(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.courses.is_empty() {
            return self;
        }
        self.open_section(ListName::Courses, heading);
        for course in &p.courses {
            self.html.push_str(&format!(
                "<div class=\"entry card\"><h4>{}</h4><p>{}</p></div>\n",
                escape(&course.name),
                escape(&course.description)
            ));
        }
        self.close_section(ListName::Courses, p.courses.len())
    }

    pub fn portfolio(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.portfolio.is_empty() {
            return self;
        }
        self.open_section(ListName::Portfolio, heading);
        self.html.push_str("<div class=\"gallery\">\n");
        for piece in &p.portfolio {
            self.html.push_str(&format!(
                "<figure class=\"entry\"><img src=\"{}\" alt=\"{}\"><figcaption><h4>{}</h4><p>{}</p></figcaption></figure>\n",
                escape(&piece.image),
                escape(&piece.title),
                escape(&piece.title),
                escape(&piece.description)
            ));
        }
        self.html.push_str("</div>\n");
        self.close_section(ListName::Portfolio, p.portfolio.len())
    }

    pub fn languages(mut self, heading: &str) -> Self {
        let p = self.profile;
        if p.languages.is_empty() {
            return self;
        }
        self.open_section(ListName::Languages, heading);
        self.html.push_str("<ul>\n");
        for lang in &p.languages {
            self.html.push_str(&format!(
                "<li class=\"entry\"><strong>{}</strong> <span>{}</span></li>\n",
                escape(&lang.language),
                escape(&lang.proficiency)
            ));
        }
        self.html.push_str("</ul>\n");
        self.close_section(ListName::Languages, p.languages.len())
    }

    pub fn finish(mut self) -> Document {
        self.html.push_str("</article>\n");
        Document {
            template: self.template,
            title: format!("{} · {}", self.profile.name, self.profile.title),
            sections: self.sections,
            body: self.html,
        }
    }

    fn open_section(&mut self, list: ListName, heading: &str) {
        self.html.push_str(&format!(
            "<section data-section=\"{}\">\n<h3>{}</h3>\n",
            list.as_str(),
            escape(heading)
        ));
    }

    fn close_section(mut self, list: ListName, entries: usize) -> Self {
        self.html.push_str("</section>\n");
        self.sections.push(RenderedSection {
            kind: SectionKind::List(list),
            entries,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Project, SkillCategory};

    fn caps() -> Capabilities {
        Capabilities {
            shows_github: false,
            skill_levels: false,
            lists: &[],
        }
    }

    const THEME: Theme = Theme {
        accent: "#111827",
        accent_soft: "#f3f4f6",
        surface: "#ffffff",
    };

    #[test]
    fn test_escape_html_specials() {
        assert_eq!(
            escape("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(escape("R&D \"lab\""), "R&amp;D &quot;lab&quot;");
    }

    #[test]
    fn test_bar_level_prefers_explicit_level() {
        assert_eq!(bar_level(&SkillItem::rated("Figma", 42), 3), 42);
    }

    #[test]
    fn test_bar_level_never_exceeds_full() {
        let item = SkillItem::WithLevel {
            name: "Figma".to_string(),
            level: 150,
        };
        assert_eq!(bar_level(&item, 0), 100);
    }

    #[test]
    fn test_bar_level_fallback_descends() {
        let item = SkillItem::label("Sketch");
        assert_eq!(bar_level(&item, 0), 95);
        assert_eq!(bar_level(&item, 2), 85);
        assert_eq!(bar_level(&item, 40), 0);
        assert_eq!(bar_level(&item, 10_000), 0);
    }

    #[test]
    fn test_record_text_is_escaped() {
        let profile = Profile {
            name: "<b>Bold</b>".to_string(),
            ..Profile::default()
        };
        let doc = DocumentBuilder::new(TemplateId::Classic, &profile, caps(), THEME)
            .header(HeaderStyle::Split)
            .finish();
        assert!(doc.body.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(!doc.body.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_github_hidden_without_capability() {
        let profile = Profile {
            github: "github.com/hidden".to_string(),
            ..Profile::default()
        };
        let doc = DocumentBuilder::new(TemplateId::Classic, &profile, caps(), THEME)
            .header(HeaderStyle::Centered)
            .finish();
        assert!(!doc.body.contains("github.com/hidden"));
    }

    #[test]
    fn test_empty_optional_list_skips_section() {
        let profile = Profile::default();
        let doc = DocumentBuilder::new(TemplateId::Developer, &profile, caps(), THEME)
            .projects("Projects")
            .finish();
        assert!(doc.sections.is_empty());
        assert!(!doc.body.contains("data-section=\"projects\""));
    }

    #[test]
    fn test_project_link_gets_scheme() {
        let profile = Profile {
            projects: vec![Project::new("Tool", "desc", &["Rust"], Some("github.com/a/tool"))],
            ..Profile::default()
        };
        let doc = DocumentBuilder::new(TemplateId::Developer, &profile, caps(), THEME)
            .projects("Projects")
            .finish();
        assert!(doc.body.contains("href=\"https://github.com/a/tool\""));
    }

    #[test]
    fn test_bars_render_levels() {
        let profile = Profile {
            skills: vec![SkillCategory {
                category: "Design".to_string(),
                items: vec![SkillItem::rated("Figma", 70), SkillItem::label("Sketch")],
            }],
            ..Profile::default()
        };
        let doc = DocumentBuilder::new(TemplateId::Creative, &profile, caps(), THEME)
            .skills("Skills", SkillStyle::Bars)
            .finish();
        assert!(doc.body.contains("width:70%"));
        assert!(doc.body.contains("width:90%"), "second item falls back to 95 - 5");
    }
}
