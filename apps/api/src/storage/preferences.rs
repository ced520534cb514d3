use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::template::{Style, TemplateId};
use crate::storage::{KeyValueStore, StorageError};

pub const PROFESSION_KEY: &str = "resume_profession";
pub const STYLE_KEY: &str = "resume_style";

/// The last (profession, style) pair chosen in the mix-and-match picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePreference {
    pub profession: TemplateId,
    pub style: Style,
}

/// Read/write/clear access to the saved style pair.
pub struct StylePreferences<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> StylePreferences<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    /// Returns the saved pair only when both halves are present and valid.
    pub fn read(&self) -> Option<StylePreference> {
        let profession = self.read_value(PROFESSION_KEY)?;
        let style = self.read_value(STYLE_KEY)?;

        match (profession.parse::<TemplateId>(), style.parse::<Style>()) {
            (Ok(profession), Ok(style)) => Some(StylePreference { profession, style }),
            _ => {
                warn!("Ignoring unrecognised style preference ({profession}, {style})");
                None
            }
        }
    }

    pub fn write(&self, preference: StylePreference) -> Result<(), StorageError> {
        self.store
            .set(PROFESSION_KEY, preference.profession.as_str())?;
        self.store.set(STYLE_KEY, preference.style.as_str())?;
        info!(
            "Style preference set: {} rendered as {}",
            preference.profession, preference.style
        );
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(PROFESSION_KEY)?;
        self.store.remove(STYLE_KEY)?;
        info!("Style preference cleared");
        Ok(())
    }

    fn read_value(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read {key}: {e}");
                None
            }
        }
    }
}
