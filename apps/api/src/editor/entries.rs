//! Field-level editing of list entries.
//!
//! Each entry type names the fields the editor may patch. Lists are reached
//! through `EntryList` so the record store can treat all ten lists alike.

use crate::models::fields::ListName;
use crate::models::profile::{
    Campaign, Certification, Course, Education, Experience, Language, PortfolioPiece, Profile,
    Project, SkillCategory,
};

/// An entry the editor can create empty and patch one field at a time.
pub trait EditableEntry: Default {
    /// Field names accepted by `set_field`.
    const FIELDS: &'static [&'static str];

    /// Returns `false` when `field` is not one of `FIELDS`.
    fn set_field(&mut self, field: &str, value: &str) -> bool;
}

impl EditableEntry for Experience {
    const FIELDS: &'static [&'static str] = &["title", "company", "period", "description"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "company" => &mut self.company,
            "period" => &mut self.period,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl EditableEntry for SkillCategory {
    const FIELDS: &'static [&'static str] = &["category"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        if field != "category" {
            return false;
        }
        self.category = value.to_string();
        true
    }
}

impl EditableEntry for Education {
    const FIELDS: &'static [&'static str] = &["degree", "institution", "year"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "degree" => &mut self.degree,
            "institution" => &mut self.institution,
            "year" => &mut self.year,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl EditableEntry for Project {
    const FIELDS: &'static [&'static str] = &["name", "description", "technologies", "link"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => self.name = value.to_string(),
            "description" => self.description = value.to_string(),
            "technologies" => self.technologies = split_technologies(value),
            "link" => {
                let link = value.trim();
                self.link = (!link.is_empty()).then(|| link.to_string());
            }
            _ => return false,
        }
        true
    }
}

impl EditableEntry for Campaign {
    const FIELDS: &'static [&'static str] = &["name", "result"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "result" => &mut self.result,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl EditableEntry for Certification {
    const FIELDS: &'static [&'static str] = &["name", "issuer", "year"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "issuer" => &mut self.issuer,
            "year" => &mut self.year,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Specialties are bare strings addressed through a single `value` field.
impl EditableEntry for String {
    const FIELDS: &'static [&'static str] = &["value"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        if field != "value" {
            return false;
        }
        *self = value.to_string();
        true
    }
}

impl EditableEntry for Course {
    const FIELDS: &'static [&'static str] = &["name", "description"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "description" => &mut self.description,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl EditableEntry for PortfolioPiece {
    const FIELDS: &'static [&'static str] = &["title", "description", "image"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "image" => &mut self.image,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

impl EditableEntry for Language {
    const FIELDS: &'static [&'static str] = &["language", "proficiency"];

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "language" => &mut self.language,
            "proficiency" => &mut self.proficiency,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Comma-separated input, each element trimmed. Blank elements are dropped.
pub fn split_technologies(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Type-erased list access
// ────────────────────────────────────────────────────────────────────────────

pub trait EntryList {
    fn len(&self) -> usize;

    fn push_empty(&mut self);

    /// `None` when `index` is out of range, `Some(false)` for an unknown field.
    fn set_field(&mut self, index: usize, field: &str, value: &str) -> Option<bool>;

    /// Removes the entry at `index`, returning `false` when out of range.
    fn remove_at(&mut self, index: usize) -> bool;
}

impl<T: EditableEntry> EntryList for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push_empty(&mut self) {
        self.push(T::default());
    }

    fn set_field(&mut self, index: usize, field: &str, value: &str) -> Option<bool> {
        self.get_mut(index).map(|entry| entry.set_field(field, value))
    }

    fn remove_at(&mut self, index: usize) -> bool {
        if index >= Vec::len(self) {
            return false;
        }
        self.remove(index);
        true
    }
}

/// Field names accepted by entries of `list`.
pub fn entry_fields(list: ListName) -> &'static [&'static str] {
    match list {
        ListName::Experiences => Experience::FIELDS,
        ListName::Skills => SkillCategory::FIELDS,
        ListName::Education => Education::FIELDS,
        ListName::Projects => Project::FIELDS,
        ListName::Campaigns => Campaign::FIELDS,
        ListName::Certifications => Certification::FIELDS,
        ListName::Specialties => String::FIELDS,
        ListName::Courses => Course::FIELDS,
        ListName::Portfolio => PortfolioPiece::FIELDS,
        ListName::Languages => Language::FIELDS,
    }
}

impl Profile {
    pub fn list_mut(&mut self, list: ListName) -> &mut dyn EntryList {
        match list {
            ListName::Experiences => &mut self.experiences,
            ListName::Skills => &mut self.skills,
            ListName::Education => &mut self.education,
            ListName::Projects => &mut self.projects,
            ListName::Campaigns => &mut self.campaigns,
            ListName::Certifications => &mut self.certifications,
            ListName::Specialties => &mut self.specialties,
            ListName::Courses => &mut self.courses,
            ListName::Portfolio => &mut self.portfolio,
            ListName::Languages => &mut self.languages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_technologies_split_and_trimmed() {
        assert_eq!(
            split_technologies(" Go ,Kubernetes,  Prometheus"),
            vec!["Go", "Kubernetes", "Prometheus"]
        );
        assert!(split_technologies("").is_empty());
        assert_eq!(split_technologies("Rust,,"), vec!["Rust"]);
    }

    #[test]
    fn test_project_link_cleared_by_blank_value() {
        let mut project = Project::new("Tool", "d", &[], Some("github.com/a/tool"));
        assert!(project.set_field("link", "  "));
        assert_eq!(project.link, None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut edu = Education::default();
        assert!(!edu.set_field("gpa", "4.0"));
        assert_eq!(edu, Education::default());
    }

    #[test]
    fn test_entry_list_bounds() {
        let mut list: Vec<Campaign> = vec![Campaign::new("A", "1")];
        assert_eq!(EntryList::set_field(&mut list, 3, "name", "x"), None);
        assert_eq!(EntryList::set_field(&mut list, 0, "budget", "x"), Some(false));
        assert_eq!(EntryList::set_field(&mut list, 0, "name", "B"), Some(true));
        assert_eq!(list[0].name, "B");
        assert!(!list.remove_at(1));
        assert!(list.remove_at(0));
        assert!(list.is_empty());
    }
}
