use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every template the service can render. The serialized form doubles as the
/// persistence slot suffix and the route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    #[serde(rename = "default")]
    Classic,
    Minimal,
    Modern,
    Creative,
    Developer,
    Marketing,
    Finance,
    Healthcare,
    Education,
    CreativeDesign,
    Hospitality,
}

/// A visual variant that can be applied on top of any profession's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Default,
    Minimal,
    Modern,
    Creative,
}

#[derive(Debug, Error, PartialEq)]
pub enum IdentifierError {
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
}

impl TemplateId {
    pub const ALL: [TemplateId; 11] = [
        TemplateId::Classic,
        TemplateId::Minimal,
        TemplateId::Modern,
        TemplateId::Creative,
        TemplateId::Developer,
        TemplateId::Marketing,
        TemplateId::Finance,
        TemplateId::Healthcare,
        TemplateId::Education,
        TemplateId::CreativeDesign,
        TemplateId::Hospitality,
    ];

    /// Profession templates, in the order the template picker lists them.
    pub const PROFESSIONS: [TemplateId; 7] = [
        TemplateId::Developer,
        TemplateId::Marketing,
        TemplateId::Finance,
        TemplateId::Healthcare,
        TemplateId::Education,
        TemplateId::CreativeDesign,
        TemplateId::Hospitality,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Classic => "default",
            TemplateId::Minimal => "minimal",
            TemplateId::Modern => "modern",
            TemplateId::Creative => "creative",
            TemplateId::Developer => "developer",
            TemplateId::Marketing => "marketing",
            TemplateId::Finance => "finance",
            TemplateId::Healthcare => "healthcare",
            TemplateId::Education => "education",
            TemplateId::CreativeDesign => "creative-design",
            TemplateId::Hospitality => "hospitality",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Classic => "Classic",
            TemplateId::Minimal => "Minimal",
            TemplateId::Modern => "Modern",
            TemplateId::Creative => "Creative",
            TemplateId::Developer => "Developer",
            TemplateId::Marketing => "Marketing",
            TemplateId::Finance => "Finance",
            TemplateId::Healthcare => "Healthcare",
            TemplateId::Education => "Education",
            TemplateId::CreativeDesign => "Creative Design",
            TemplateId::Hospitality => "Hospitality",
        }
    }

    pub fn is_profession(&self) -> bool {
        Self::PROFESSIONS.contains(self)
    }

    /// Display route for this template. The classic template lives at the
    /// bare `/resume` path.
    pub fn route(&self) -> String {
        match self {
            TemplateId::Classic => "/resume".to_string(),
            other => format!("/resume/{}", other.as_str()),
        }
    }
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Default, Style::Minimal, Style::Modern, Style::Creative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::Minimal => "minimal",
            Style::Modern => "modern",
            Style::Creative => "creative",
        }
    }

    /// The renderer that draws this style.
    pub fn renderer(&self) -> TemplateId {
        match self {
            Style::Default => TemplateId::Classic,
            Style::Minimal => TemplateId::Minimal,
            Style::Modern => TemplateId::Modern,
            Style::Creative => TemplateId::Creative,
        }
    }
}

impl FromStr for TemplateId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| IdentifierError::UnknownTemplate(s.to_string()))
    }
}

impl FromStr for Style {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| IdentifierError::UnknownStyle(s.to_string()))
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_ids_parse_back() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>(), Ok(id));
        }
    }

    #[test]
    fn test_unknown_template_rejected() {
        assert_eq!(
            "astronaut".parse::<TemplateId>(),
            Err(IdentifierError::UnknownTemplate("astronaut".to_string()))
        );
    }

    #[test]
    fn test_serde_matches_route_segment() {
        let json = serde_json::to_string(&TemplateId::CreativeDesign).unwrap();
        assert_eq!(json, "\"creative-design\"");
        let json = serde_json::to_string(&TemplateId::Classic).unwrap();
        assert_eq!(json, "\"default\"");
    }

    #[test]
    fn test_classic_route_is_bare_resume() {
        assert_eq!(TemplateId::Classic.route(), "/resume");
        assert_eq!(TemplateId::Developer.route(), "/resume/developer");
    }

    #[test]
    fn test_style_renderer_mapping() {
        assert_eq!(Style::Default.renderer(), TemplateId::Classic);
        assert_eq!(Style::Creative.renderer(), TemplateId::Creative);
        assert_eq!("modern".parse::<Style>(), Ok(Style::Modern));
        assert!("baroque".parse::<Style>().is_err());
    }

    #[test]
    fn test_styles_are_not_professions() {
        assert!(TemplateId::Hospitality.is_profession());
        assert!(!TemplateId::Minimal.is_profession());
        assert!(!TemplateId::Classic.is_profession());
    }
}
