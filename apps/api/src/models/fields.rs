use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::profile::Profile;

/// Addressable scalar fields of a Profile Record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Summary,
}

/// Addressable lists of a Profile Record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListName {
    Experiences,
    Skills,
    Education,
    Projects,
    Campaigns,
    Certifications,
    Specialties,
    Courses,
    Portfolio,
    Languages,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownName {
    pub kind: &'static str,
    pub value: String,
}

impl ScalarField {
    pub const ALL: [ScalarField; 9] = [
        ScalarField::Name,
        ScalarField::Title,
        ScalarField::Email,
        ScalarField::Phone,
        ScalarField::Location,
        ScalarField::Website,
        ScalarField::Linkedin,
        ScalarField::Github,
        ScalarField::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Title => "title",
            ScalarField::Email => "email",
            ScalarField::Phone => "phone",
            ScalarField::Location => "location",
            ScalarField::Website => "website",
            ScalarField::Linkedin => "linkedin",
            ScalarField::Github => "github",
            ScalarField::Summary => "summary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScalarField::Name => "Name",
            ScalarField::Title => "Title",
            ScalarField::Email => "Email",
            ScalarField::Phone => "Phone",
            ScalarField::Location => "Location",
            ScalarField::Website => "Website",
            ScalarField::Linkedin => "LinkedIn",
            ScalarField::Github => "GitHub",
            ScalarField::Summary => "Professional Summary",
        }
    }
}

impl ListName {
    pub const ALL: [ListName; 10] = [
        ListName::Experiences,
        ListName::Skills,
        ListName::Education,
        ListName::Projects,
        ListName::Campaigns,
        ListName::Certifications,
        ListName::Specialties,
        ListName::Courses,
        ListName::Portfolio,
        ListName::Languages,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListName::Experiences => "experiences",
            ListName::Skills => "skills",
            ListName::Education => "education",
            ListName::Projects => "projects",
            ListName::Campaigns => "campaigns",
            ListName::Certifications => "certifications",
            ListName::Specialties => "specialties",
            ListName::Courses => "courses",
            ListName::Portfolio => "portfolio",
            ListName::Languages => "languages",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ListName::Experiences => "Experience",
            ListName::Skills => "Skills",
            ListName::Education => "Education",
            ListName::Projects => "Projects",
            ListName::Campaigns => "Key Campaigns",
            ListName::Certifications => "Certifications",
            ListName::Specialties => "Specialties",
            ListName::Courses => "Courses Taught",
            ListName::Portfolio => "Portfolio",
            ListName::Languages => "Languages",
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarField {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownName {
                kind: "field",
                value: s.to_string(),
            })
    }
}

impl FromStr for ListName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownName {
                kind: "list",
                value: s.to_string(),
            })
    }
}

impl Profile {
    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Name => &self.name,
            ScalarField::Title => &self.title,
            ScalarField::Email => &self.email,
            ScalarField::Phone => &self.phone,
            ScalarField::Location => &self.location,
            ScalarField::Website => &self.website,
            ScalarField::Linkedin => &self.linkedin,
            ScalarField::Github => &self.github,
            ScalarField::Summary => &self.summary,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Name => &mut self.name,
            ScalarField::Title => &mut self.title,
            ScalarField::Email => &mut self.email,
            ScalarField::Phone => &mut self.phone,
            ScalarField::Location => &mut self.location,
            ScalarField::Website => &mut self.website,
            ScalarField::Linkedin => &mut self.linkedin,
            ScalarField::Github => &mut self.github,
            ScalarField::Summary => &mut self.summary,
        }
    }

    /// Number of entries currently held in `list`.
    pub fn list_len(&self, list: ListName) -> usize {
        match list {
            ListName::Experiences => self.experiences.len(),
            ListName::Skills => self.skills.len(),
            ListName::Education => self.education.len(),
            ListName::Projects => self.projects.len(),
            ListName::Campaigns => self.campaigns.len(),
            ListName::Certifications => self.certifications.len(),
            ListName::Specialties => self.specialties.len(),
            ListName::Courses => self.courses.len(),
            ListName::Portfolio => self.portfolio.len(),
            ListName::Languages => self.languages.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_mut_writes_through() {
        let mut profile = Profile::default();
        *profile.scalar_mut(ScalarField::Github) = "github.com/someone".to_string();
        assert_eq!(profile.github, "github.com/someone");
        assert_eq!(profile.scalar(ScalarField::Github), "github.com/someone");
    }

    #[test]
    fn test_names_parse_from_route_segments() {
        assert_eq!("linkedin".parse::<ScalarField>(), Ok(ScalarField::Linkedin));
        assert_eq!("languages".parse::<ListName>(), Ok(ListName::Languages));
        let err = "hobbies".parse::<ListName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown list 'hobbies'");
    }

    #[test]
    fn test_list_name_serde_is_snake_case() {
        let list: ListName = serde_json::from_str("\"certifications\"").unwrap();
        assert_eq!(list, ListName::Certifications);
        assert_eq!(serde_json::to_string(&ListName::Portfolio).unwrap(), "\"portfolio\"");
    }
}
