//! The Profile Record: one person's résumé content, shared by every template
//! and by the editor.

use serde::{Deserialize, Deserializer, Serialize};

pub const MAX_SKILL_LEVEL: u8 = 100;

/// Reads any JSON number as a level, pulled into 0–100. Stored records and
/// editor requests never fail on an out-of-range level.
fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    Ok(raw.round().clamp(0.0, f64::from(MAX_SKILL_LEVEL)) as u8)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// A single skill. The variant is explicit: templates that draw proficiency
/// bars read `level` from `WithLevel` items only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkillItem {
    LabelOnly { name: String },
    WithLevel {
        name: String,
        #[serde(deserialize_with = "deserialize_level")]
        level: u8,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<SkillItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPiece {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

/// A fully populated record. Renderers only ever see this shape; partial
/// input is resolved against a template's defaults first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub campaigns: Vec<Campaign>,
    pub certifications: Vec<Certification>,
    pub specialties: Vec<String>,
    pub courses: Vec<Course>,
    pub portfolio: Vec<PortfolioPiece>,
    pub languages: Vec<Language>,
}

/// The tolerant read shape of a record: any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<Experience>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaigns: Option<Vec<Campaign>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<Vec<PortfolioPiece>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Constructors used by the template default records
// ────────────────────────────────────────────────────────────────────────────

impl Experience {
    pub fn new(title: &str, company: &str, period: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            period: period.to_string(),
            description: description.to_string(),
            achievements: Vec::new(),
        }
    }

    pub fn with_achievements(mut self, achievements: &[&str]) -> Self {
        self.achievements = achievements.iter().map(|a| a.to_string()).collect();
        self
    }
}

impl SkillItem {
    pub fn label(name: &str) -> Self {
        SkillItem::LabelOnly {
            name: name.to_string(),
        }
    }

    pub fn rated(name: &str, level: u8) -> Self {
        SkillItem::WithLevel {
            name: name.to_string(),
            level: level.min(MAX_SKILL_LEVEL),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            SkillItem::LabelOnly { name } | SkillItem::WithLevel { name, .. } => name,
        }
    }

    pub fn level(&self) -> Option<u8> {
        match self {
            SkillItem::LabelOnly { .. } => None,
            SkillItem::WithLevel { level, .. } => Some(*level),
        }
    }

    /// Same item with its level pulled into 0–100.
    pub fn clamped(self) -> Self {
        match self {
            SkillItem::WithLevel { name, level } => SkillItem::WithLevel {
                name,
                level: level.min(MAX_SKILL_LEVEL),
            },
            other => other,
        }
    }
}

impl SkillCategory {
    pub fn labels(category: &str, items: &[&str]) -> Self {
        Self {
            category: category.to_string(),
            items: items.iter().map(|i| SkillItem::label(i)).collect(),
        }
    }
}

impl Education {
    pub fn new(degree: &str, institution: &str, year: &str) -> Self {
        Self {
            degree: degree.to_string(),
            institution: institution.to_string(),
            year: year.to_string(),
        }
    }
}

impl Project {
    pub fn new(name: &str, description: &str, technologies: &[&str], link: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            link: link.map(str::to_string),
        }
    }
}

impl Campaign {
    pub fn new(name: &str, result: &str) -> Self {
        Self {
            name: name.to_string(),
            result: result.to_string(),
        }
    }
}

impl Certification {
    pub fn new(name: &str, issuer: &str, year: &str) -> Self {
        Self {
            name: name.to_string(),
            issuer: issuer.to_string(),
            year: year.to_string(),
        }
    }
}

impl Course {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

impl PortfolioPiece {
    pub fn new(title: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

impl Language {
    pub fn new(language: &str, proficiency: &str) -> Self {
        Self {
            language: language.to_string(),
            proficiency: proficiency.to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Partial resolution
// ────────────────────────────────────────────────────────────────────────────

impl PartialProfile {
    /// Resolves this record against `defaults`, field by field. A supplied
    /// field always wins, including an empty string or an empty list.
    pub fn over(self, defaults: Profile) -> Profile {
        Profile {
            name: self.name.unwrap_or(defaults.name),
            title: self.title.unwrap_or(defaults.title),
            email: self.email.unwrap_or(defaults.email),
            phone: self.phone.unwrap_or(defaults.phone),
            location: self.location.unwrap_or(defaults.location),
            website: self.website.unwrap_or(defaults.website),
            linkedin: self.linkedin.unwrap_or(defaults.linkedin),
            github: self.github.unwrap_or(defaults.github),
            summary: self.summary.unwrap_or(defaults.summary),
            experiences: self.experiences.unwrap_or(defaults.experiences),
            skills: self.skills.unwrap_or(defaults.skills),
            education: self.education.unwrap_or(defaults.education),
            projects: self.projects.unwrap_or(defaults.projects),
            campaigns: self.campaigns.unwrap_or(defaults.campaigns),
            certifications: self.certifications.unwrap_or(defaults.certifications),
            specialties: self.specialties.unwrap_or(defaults.specialties),
            courses: self.courses.unwrap_or(defaults.courses),
            portfolio: self.portfolio.unwrap_or(defaults.portfolio),
            languages: self.languages.unwrap_or(defaults.languages),
        }
    }
}

impl From<Profile> for PartialProfile {
    fn from(p: Profile) -> Self {
        Self {
            name: Some(p.name),
            title: Some(p.title),
            email: Some(p.email),
            phone: Some(p.phone),
            location: Some(p.location),
            website: Some(p.website),
            linkedin: Some(p.linkedin),
            github: Some(p.github),
            summary: Some(p.summary),
            experiences: Some(p.experiences),
            skills: Some(p.skills),
            education: Some(p.education),
            projects: Some(p.projects),
            campaigns: Some(p.campaigns),
            certifications: Some(p.certifications),
            specialties: Some(p.specialties),
            courses: Some(p.courses),
            portfolio: Some(p.portfolio),
            languages: Some(p.languages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_defaults() -> Profile {
        Profile {
            name: "Default Name".to_string(),
            title: "Default Title".to_string(),
            email: "default@example.com".to_string(),
            experiences: vec![Experience::new("Role", "Company", "2020", "Did things")],
            education: vec![Education::new("B.S.", "Somewhere", "2014")],
            ..Profile::default()
        }
    }

    #[test]
    fn test_partial_overrides_per_field() {
        let partial = PartialProfile {
            name: Some("Jordan Blake".to_string()),
            experiences: Some(vec![]),
            ..PartialProfile::default()
        };
        let resolved = partial.over(sample_defaults());

        assert_eq!(resolved.name, "Jordan Blake");
        assert_eq!(resolved.title, "Default Title");
        assert_eq!(resolved.email, "default@example.com");
        assert!(resolved.experiences.is_empty(), "supplied empty list wins");
        assert_eq!(resolved.education.len(), 1);
    }

    #[test]
    fn test_empty_partial_yields_defaults() {
        let defaults = sample_defaults();
        assert_eq!(PartialProfile::default().over(defaults.clone()), defaults);
    }

    #[test]
    fn test_partial_deserializes_with_missing_fields() {
        let json = r#"{"name": "Sam", "skills": [{"category": "Tools", "items": []}]}"#;
        let partial: PartialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(partial.name.as_deref(), Some("Sam"));
        assert!(partial.title.is_none());
        assert_eq!(partial.skills.unwrap()[0].category, "Tools");
    }

    #[test]
    fn test_full_profile_round_trips_through_partial() {
        let profile = sample_defaults();
        let json = serde_json::to_string(&profile).unwrap();
        let partial: PartialProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(partial.over(Profile::default()), profile);
    }

    #[test]
    fn test_skill_item_tagged_representation() {
        let json = serde_json::to_value(SkillItem::rated("Figma", 90)).unwrap();
        assert_eq!(json["kind"], "with_level");
        assert_eq!(json["level"], 90);

        let item: SkillItem =
            serde_json::from_str(r#"{"kind": "label_only", "name": "Rust"}"#).unwrap();
        assert_eq!(item, SkillItem::label("Rust"));
        assert_eq!(item.level(), None);
    }

    #[test]
    fn test_skill_level_clamped() {
        assert_eq!(SkillItem::rated("Sketch", 250).level(), Some(100));
        let raw = SkillItem::WithLevel {
            name: "Procreate".to_string(),
            level: 140,
        };
        assert_eq!(raw.clamped().level(), Some(100));
    }

    #[test]
    fn test_out_of_range_levels_clamped_when_read() {
        let high: SkillItem =
            serde_json::from_str(r#"{"kind": "with_level", "name": "Lightroom", "level": 300}"#)
                .unwrap();
        assert_eq!(high.level(), Some(100));

        let low: SkillItem =
            serde_json::from_str(r#"{"kind": "with_level", "name": "Lightroom", "level": -20}"#)
                .unwrap();
        assert_eq!(low.level(), Some(0));

        let fractional: SkillItem =
            serde_json::from_str(r#"{"kind": "with_level", "name": "Lightroom", "level": 72.6}"#)
                .unwrap();
        assert_eq!(fractional.level(), Some(73));
    }

    #[test]
    fn test_achievements_default_to_empty() {
        let exp: Experience = serde_json::from_str(
            r#"{"title": "a", "company": "b", "period": "c", "description": "d"}"#,
        )
        .unwrap();
        assert!(exp.achievements.is_empty());
    }
}
