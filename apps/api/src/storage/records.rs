use tracing::{debug, warn};

use crate::models::profile::{PartialProfile, Profile};
use crate::models::template::TemplateId;
use crate::storage::{KeyValueStore, StorageError};

/// Persistence slot for one template's record.
pub fn slot_key(template: TemplateId) -> String {
    format!("resume_{}", template.as_str())
}

/// Serializes `profile` into the template's slot, replacing any prior value.
pub fn save_record(
    store: &dyn KeyValueStore,
    template: TemplateId,
    profile: &Profile,
) -> Result<String, StorageError> {
    let key = slot_key(template);
    let body = serde_json::to_string(profile)?;
    store.set(&key, &body)?;
    debug!("Saved record for template {template} into slot {key}");
    Ok(key)
}

/// Reads the template's slot. Missing, unreadable and malformed values all
/// come back as `None`; the caller falls back to the renderer's defaults.
pub fn load_record(store: &dyn KeyValueStore, template: TemplateId) -> Option<PartialProfile> {
    let key = slot_key(template);
    let raw = match store.get(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Could not read slot {key}, using defaults: {e}");
            return None;
        }
    };

    match serde_json::from_str::<PartialProfile>(&raw) {
        Ok(partial) => Some(partial),
        Err(e) => {
            warn!("Discarding malformed record in slot {key}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Education;
    use crate::storage::MemoryStore;

    #[test]
    fn test_slot_key_uses_template_id() {
        assert_eq!(slot_key(TemplateId::Classic), "resume_default");
        assert_eq!(slot_key(TemplateId::CreativeDesign), "resume_creative-design");
    }

    #[test]
    fn test_save_then_load_is_lossless() {
        let store = MemoryStore::new();
        let profile = Profile {
            name: "Riley Park".to_string(),
            education: vec![Education::new("B.A.", "Reed College", "2011")],
            ..Profile::default()
        };
        save_record(&store, TemplateId::Finance, &profile).unwrap();

        let loaded = load_record(&store, TemplateId::Finance).unwrap();
        assert_eq!(loaded.over(Profile::default()), profile);
    }

    #[test]
    fn test_missing_slot_is_none() {
        let store = MemoryStore::new();
        assert!(load_record(&store, TemplateId::Developer).is_none());
    }

    #[test]
    fn test_corrupted_slot_is_discarded() {
        let store = MemoryStore::new();
        store.set("resume_developer", "{not json").unwrap();
        assert!(load_record(&store, TemplateId::Developer).is_none());
    }

    #[test]
    fn test_foreign_shaped_slot_is_discarded() {
        let store = MemoryStore::new();
        store.set("resume_marketing", r#"{"name": 42}"#).unwrap();
        assert!(load_record(&store, TemplateId::Marketing).is_none());

        store.set("resume_marketing", "[1, 2, 3]").unwrap();
        assert!(load_record(&store, TemplateId::Marketing).is_none());
    }

    #[test]
    fn test_slots_are_independent() {
        let store = MemoryStore::new();
        let profile = Profile {
            name: "Only Finance".to_string(),
            ..Profile::default()
        };
        save_record(&store, TemplateId::Finance, &profile).unwrap();
        assert!(load_record(&store, TemplateId::Healthcare).is_none());
    }
}
