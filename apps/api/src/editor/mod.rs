//! The editable record store behind the admin page.
//!
//! One `RecordStore` holds the record being edited for the active template.
//! Mutations are synchronous and in-memory; nothing touches persistence until
//! `save` or `preview`.

pub mod entries;
pub mod handlers;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::models::fields::{ListName, ScalarField};
use crate::models::profile::{Profile, SkillItem};
use crate::models::template::TemplateId;
use crate::render::{renderer_for, Capabilities};
use crate::storage::records::save_record;
use crate::storage::{KeyValueStore, StorageError};

/// Level given to a new skill when the template draws proficiency bars.
pub const NEW_SKILL_LEVEL: u8 = 80;

pub const SAVE_MESSAGE: &str = "Resume data saved successfully!";

#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    #[error("{list} has no entry at index {index} (length {len})")]
    IndexOutOfRange {
        list: String,
        index: usize,
        len: usize,
    },

    #[error("{list} entries have no field '{field}'")]
    UnknownField { list: String, field: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveReceipt {
    pub slot: String,
    pub message: String,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    template: TemplateId,
    profile: Profile,
}

impl RecordStore {
    /// Starts on `template` with that template's default record.
    pub fn new(template: TemplateId) -> Self {
        Self {
            template,
            profile: renderer_for(template).defaults(),
        }
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn capabilities(&self) -> Capabilities {
        renderer_for(self.template).capabilities()
    }

    /// Switches to `template` and replaces the record with its defaults.
    /// Unsaved edits are discarded; persistence is not read.
    pub fn select_template(&mut self, template: TemplateId) {
        info!("Editor switched from {} to {template}", self.template);
        self.template = template;
        self.profile = renderer_for(template).defaults();
    }

    pub fn set_field(&mut self, field: ScalarField, value: impl Into<String>) {
        *self.profile.scalar_mut(field) = value.into();
    }

    // ── Lists ───────────────────────────────────────────────────────────────

    /// Appends an empty entry to `list` and returns its index.
    pub fn add_item(&mut self, list: ListName) -> usize {
        let entries = self.profile.list_mut(list);
        entries.push_empty();
        entries.len() - 1
    }

    pub fn update_item(
        &mut self,
        list: ListName,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), EditError> {
        let entries = self.profile.list_mut(list);
        let len = entries.len();
        match entries.set_field(index, field, value) {
            Some(true) => Ok(()),
            Some(false) => Err(EditError::UnknownField {
                list: list.to_string(),
                field: field.to_string(),
            }),
            None => Err(EditError::IndexOutOfRange {
                list: list.to_string(),
                index,
                len,
            }),
        }
    }

    /// Removes the entry at `index`; later entries shift down by one.
    pub fn remove_item(&mut self, list: ListName, index: usize) -> Result<(), EditError> {
        let entries = self.profile.list_mut(list);
        let len = entries.len();
        if entries.remove_at(index) {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                list: list.to_string(),
                index,
                len,
            })
        }
    }

    // ── Achievements ────────────────────────────────────────────────────────

    pub fn add_achievement(&mut self, experience: usize) -> Result<usize, EditError> {
        let achievements = self.achievements_mut(experience)?;
        achievements.push(String::new());
        Ok(achievements.len() - 1)
    }

    pub fn update_achievement(
        &mut self,
        experience: usize,
        index: usize,
        value: &str,
    ) -> Result<(), EditError> {
        let achievements = self.achievements_mut(experience)?;
        let len = achievements.len();
        let slot = achievements
            .get_mut(index)
            .ok_or_else(|| achievements_out_of_range(experience, index, len))?;
        *slot = value.to_string();
        Ok(())
    }

    pub fn remove_achievement(&mut self, experience: usize, index: usize) -> Result<(), EditError> {
        let achievements = self.achievements_mut(experience)?;
        if index >= achievements.len() {
            return Err(achievements_out_of_range(experience, index, achievements.len()));
        }
        achievements.remove(index);
        Ok(())
    }

    // ── Skill items ─────────────────────────────────────────────────────────

    /// Appends a blank skill to `category`. Templates that draw proficiency
    /// bars get a rated item so the bar has a starting level.
    pub fn add_skill(&mut self, category: usize) -> Result<usize, EditError> {
        let item = if self.capabilities().skill_levels {
            SkillItem::rated("", NEW_SKILL_LEVEL)
        } else {
            SkillItem::label("")
        };
        let items = self.skill_items_mut(category)?;
        items.push(item);
        Ok(items.len() - 1)
    }

    pub fn update_skill(
        &mut self,
        category: usize,
        index: usize,
        item: SkillItem,
    ) -> Result<(), EditError> {
        let items = self.skill_items_mut(category)?;
        let len = items.len();
        let slot = items
            .get_mut(index)
            .ok_or_else(|| skills_out_of_range(category, index, len))?;
        *slot = item.clamped();
        Ok(())
    }

    pub fn remove_skill(&mut self, category: usize, index: usize) -> Result<(), EditError> {
        let items = self.skill_items_mut(category)?;
        if index >= items.len() {
            return Err(skills_out_of_range(category, index, items.len()));
        }
        items.remove(index);
        Ok(())
    }

    // ── Persistence ─────────────────────────────────────────────────────────

    /// Writes the record to the active template's slot.
    pub fn save(&self, store: &dyn KeyValueStore) -> Result<SaveReceipt, StorageError> {
        let slot = save_record(store, self.template, &self.profile)?;
        info!("Saved {} record to {slot}", self.template);
        Ok(SaveReceipt {
            slot,
            message: SAVE_MESSAGE.to_string(),
            saved_at: Utc::now(),
        })
    }

    /// Saves, then returns the route that displays the saved record.
    pub fn preview(&self, store: &dyn KeyValueStore) -> Result<String, StorageError> {
        self.save(store)?;
        Ok(self.template.route())
    }

    fn achievements_mut(&mut self, experience: usize) -> Result<&mut Vec<String>, EditError> {
        let len = self.profile.experiences.len();
        self.profile
            .experiences
            .get_mut(experience)
            .map(|exp| &mut exp.achievements)
            .ok_or_else(|| EditError::IndexOutOfRange {
                list: ListName::Experiences.to_string(),
                index: experience,
                len,
            })
    }

    fn skill_items_mut(&mut self, category: usize) -> Result<&mut Vec<SkillItem>, EditError> {
        let len = self.profile.skills.len();
        self.profile
            .skills
            .get_mut(category)
            .map(|group| &mut group.items)
            .ok_or_else(|| EditError::IndexOutOfRange {
                list: ListName::Skills.to_string(),
                index: category,
                len,
            })
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new(TemplateId::Classic)
    }
}

fn achievements_out_of_range(experience: usize, index: usize, len: usize) -> EditError {
    EditError::IndexOutOfRange {
        list: format!("experiences[{experience}].achievements"),
        index,
        len,
    }
}

fn skills_out_of_range(category: usize, index: usize, len: usize) -> EditError {
    EditError::IndexOutOfRange {
        list: format!("skills[{category}].items"),
        index,
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Experience};
    use crate::storage::records::load_record;
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_store_holds_template_defaults() {
        let editor = RecordStore::new(TemplateId::Developer);
        assert_eq!(editor.profile().name, "Alex Chen");
        assert!(editor.capabilities().shows_github);
    }

    #[test]
    fn test_add_item_appends_empty_entry() {
        let mut editor = RecordStore::new(TemplateId::Marketing);
        assert_eq!(editor.profile().experiences.len(), 3);

        let index = editor.add_item(ListName::Experiences);

        assert_eq!(index, 3);
        assert_eq!(editor.profile().experiences.len(), 4);
        let tail = &editor.profile().experiences[3];
        assert_eq!(tail, &Experience::default());
        assert!(tail.achievements.is_empty());
    }

    /// Asserts the list grew by one and its new tail is the empty entry.
    fn assert_empty_tail<T: Default + PartialEq + std::fmt::Debug>(
        before: usize,
        entries: &[T],
        list: ListName,
    ) {
        assert_eq!(entries.len(), before + 1, "{list}");
        assert_eq!(entries.last(), Some(&T::default()), "{list}");
    }

    #[test]
    fn test_add_item_to_every_list() {
        let mut editor = RecordStore::new(TemplateId::Classic);
        for list in ListName::ALL {
            let before = editor.profile().list_len(list);
            let index = editor.add_item(list);
            assert_eq!(index, before, "{list}");

            let p = editor.profile();
            match list {
                ListName::Experiences => assert_empty_tail(before, &p.experiences, list),
                ListName::Skills => assert_empty_tail(before, &p.skills, list),
                ListName::Education => assert_empty_tail(before, &p.education, list),
                ListName::Projects => assert_empty_tail(before, &p.projects, list),
                ListName::Campaigns => assert_empty_tail(before, &p.campaigns, list),
                ListName::Certifications => assert_empty_tail(before, &p.certifications, list),
                ListName::Specialties => assert_empty_tail(before, &p.specialties, list),
                ListName::Courses => assert_empty_tail(before, &p.courses, list),
                ListName::Portfolio => assert_empty_tail(before, &p.portfolio, list),
                ListName::Languages => assert_empty_tail(before, &p.languages, list),
            }
        }
        assert!(editor.profile().skills.last().unwrap().items.is_empty());
    }

    #[test]
    fn test_remove_item_shifts_later_entries() {
        let mut editor = RecordStore::new(TemplateId::Developer);
        let second = editor.profile().education[1].clone();

        editor.remove_item(ListName::Education, 0).unwrap();

        assert_eq!(editor.profile().education, vec![second]);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut editor = RecordStore::new(TemplateId::Developer);
        editor.remove_item(ListName::Experiences, 1).unwrap();
        let companies: Vec<&str> = editor
            .profile()
            .experiences
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(companies, vec!["TechNova Solutions", "WebSphere Inc"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut editor = RecordStore::new(TemplateId::Finance);
        let err = editor.remove_item(ListName::Certifications, 9).unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfRange {
                list: "certifications".to_string(),
                index: 9,
                len: 3
            }
        );
    }

    #[test]
    fn test_update_item_patches_named_field() {
        let mut editor = RecordStore::new(TemplateId::Developer);
        editor
            .update_item(ListName::Projects, 0, "technologies", "Rust, Tokio ,Axum")
            .unwrap();
        assert_eq!(
            editor.profile().projects[0].technologies,
            vec!["Rust", "Tokio", "Axum"]
        );

        let err = editor
            .update_item(ListName::Projects, 0, "stars", "5")
            .unwrap_err();
        assert!(matches!(err, EditError::UnknownField { .. }));
    }

    #[test]
    fn test_set_field_replaces_scalar() {
        let mut editor = RecordStore::new(TemplateId::Healthcare);
        editor.set_field(ScalarField::Title, "Chief Nursing Officer");
        assert_eq!(editor.profile().title, "Chief Nursing Officer");
    }

    #[test]
    fn test_select_template_resets_to_defaults() {
        let mut editor = RecordStore::new(TemplateId::Developer);
        editor.set_field(ScalarField::Name, "Edited");
        editor.select_template(TemplateId::Hospitality);
        assert_eq!(editor.template(), TemplateId::Hospitality);
        assert_eq!(editor.profile().name, "Michael Rodriguez");
    }

    #[test]
    fn test_achievement_sub_list() {
        let mut editor = RecordStore::new(TemplateId::Marketing);
        let index = editor.add_achievement(0).unwrap();
        assert_eq!(index, 3);
        editor.update_achievement(0, 3, "Launched a podcast").unwrap();
        assert_eq!(editor.profile().experiences[0].achievements[3], "Launched a podcast");

        editor.remove_achievement(0, 0).unwrap();
        assert_eq!(editor.profile().experiences[0].achievements.len(), 3);
        assert_eq!(
            editor.profile().experiences[0].achievements[2],
            "Launched a podcast"
        );

        assert!(editor.add_achievement(7).is_err());
        assert!(editor.update_achievement(0, 10, "x").is_err());
    }

    #[test]
    fn test_add_skill_follows_level_capability() {
        let mut creative = RecordStore::new(TemplateId::Creative);
        let index = creative.add_skill(0).unwrap();
        assert_eq!(
            creative.profile().skills[0].items[index],
            SkillItem::rated("", NEW_SKILL_LEVEL)
        );

        let mut classic = RecordStore::new(TemplateId::Classic);
        let index = classic.add_skill(0).unwrap();
        assert_eq!(classic.profile().skills[0].items[index], SkillItem::label(""));
    }

    #[test]
    fn test_update_skill_clamps_level() {
        let mut editor = RecordStore::new(TemplateId::Creative);
        editor
            .update_skill(
                1,
                0,
                SkillItem::WithLevel {
                    name: "Photoshop".to_string(),
                    level: 180,
                },
            )
            .unwrap();
        assert_eq!(editor.profile().skills[1].items[0].level(), Some(100));
        assert!(editor.remove_skill(1, 40).is_err());
    }

    #[test]
    fn test_save_then_load_returns_same_record() {
        let store = MemoryStore::new();
        let mut editor = RecordStore::new(TemplateId::Education);
        editor.set_field(ScalarField::Name, "Dana Whitfield");
        editor.add_item(ListName::Education);
        editor
            .update_item(ListName::Education, 2, "degree", "Ed.D.")
            .unwrap();

        let receipt = editor.save(&store).unwrap();
        assert_eq!(receipt.slot, "resume_education");
        assert_eq!(receipt.message, SAVE_MESSAGE);

        let loaded = load_record(&store, TemplateId::Education)
            .unwrap()
            .over(Profile::default());
        assert_eq!(&loaded, editor.profile());
        assert_eq!(loaded.education[2], Education::new("Ed.D.", "", ""));
    }

    #[test]
    fn test_preview_saves_and_returns_route() {
        let store = MemoryStore::new();
        let editor = RecordStore::new(TemplateId::Classic);
        assert_eq!(editor.preview(&store).unwrap(), "/resume");
        assert!(store.get("resume_default").unwrap().is_some());

        let editor = RecordStore::new(TemplateId::CreativeDesign);
        assert_eq!(editor.preview(&store).unwrap(), "/resume/creative-design");
    }
}
