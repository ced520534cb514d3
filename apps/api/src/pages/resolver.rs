//! Decides which renderer draws a requested page and which record it shows.

use serde::Serialize;
use tracing::debug;

use crate::models::profile::PartialProfile;
use crate::models::template::{Style, TemplateId};
use crate::render::{render_template, Document};
use crate::storage::preferences::StylePreferences;
use crate::storage::records::load_record;
use crate::storage::KeyValueStore;

/// Where a page's renderer choice came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleSource {
    /// Style segment in the request path.
    RouteStyle,
    /// Saved (profession, style) pair for this exact profession.
    SavedPreference,
    /// The template's own renderer.
    Native,
}

/// Sources consulted in order; the first that yields a renderer wins.
pub const LOOKUP_ORDER: [StyleSource; 3] = [
    StyleSource::RouteStyle,
    StyleSource::SavedPreference,
    StyleSource::Native,
];

#[derive(Debug, Clone)]
pub struct Resolution {
    /// Template whose slot supplies the record.
    pub template: TemplateId,
    /// Template whose renderer draws the page.
    pub renderer: TemplateId,
    pub source: StyleSource,
    pub record: Option<PartialProfile>,
}

impl Resolution {
    /// Renders the saved record, or the renderer's defaults when nothing
    /// usable was saved.
    pub fn render(&self) -> Document {
        render_template(self.renderer, self.record.as_ref())
    }
}

pub fn resolve(
    template: TemplateId,
    route_style: Option<Style>,
    store: &dyn KeyValueStore,
) -> Resolution {
    let (source, renderer) = LOOKUP_ORDER
        .into_iter()
        .find_map(|source| lookup(source, template, route_style, store).map(|r| (source, r)))
        .unwrap_or((StyleSource::Native, template));

    debug!("Resolved {template} to renderer {renderer} via {source:?}");

    Resolution {
        template,
        renderer,
        source,
        record: load_record(store, template),
    }
}

fn lookup(
    source: StyleSource,
    template: TemplateId,
    route_style: Option<Style>,
    store: &dyn KeyValueStore,
) -> Option<TemplateId> {
    match source {
        StyleSource::RouteStyle => route_style.map(|style| style.renderer()),
        StyleSource::SavedPreference => StylePreferences::new(store)
            .read()
            .filter(|pref| pref.profession == template)
            .map(|pref| pref.style.renderer()),
        StyleSource::Native => Some(template),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Profile;
    use crate::render::renderer_for;
    use crate::storage::preferences::StylePreference;
    use crate::storage::records::save_record;
    use crate::storage::MemoryStore;

    fn prefer(store: &MemoryStore, profession: TemplateId, style: Style) {
        StylePreferences::new(store)
            .write(StylePreference { profession, style })
            .unwrap();
    }

    #[test]
    fn test_native_when_nothing_saved() {
        let store = MemoryStore::new();
        let res = resolve(TemplateId::Finance, None, &store);
        assert_eq!(res.renderer, TemplateId::Finance);
        assert_eq!(res.source, StyleSource::Native);
        assert!(res.record.is_none());
    }

    #[test]
    fn test_route_style_beats_saved_preference() {
        let store = MemoryStore::new();
        prefer(&store, TemplateId::Developer, Style::Modern);

        let res = resolve(TemplateId::Developer, Some(Style::Minimal), &store);
        assert_eq!(res.renderer, TemplateId::Minimal);
        assert_eq!(res.source, StyleSource::RouteStyle);
    }

    #[test]
    fn test_saved_preference_applies_to_its_profession_only() {
        let store = MemoryStore::new();
        prefer(&store, TemplateId::Developer, Style::Creative);

        let dev = resolve(TemplateId::Developer, None, &store);
        assert_eq!(dev.renderer, TemplateId::Creative);
        assert_eq!(dev.source, StyleSource::SavedPreference);

        let mkt = resolve(TemplateId::Marketing, None, &store);
        assert_eq!(mkt.renderer, TemplateId::Marketing);
        assert_eq!(mkt.source, StyleSource::Native);
    }

    #[test]
    fn test_saved_record_is_loaded_for_template() {
        let store = MemoryStore::new();
        let profile = Profile {
            name: "Saved Person".to_string(),
            ..renderer_for(TemplateId::Healthcare).defaults()
        };
        save_record(&store, TemplateId::Healthcare, &profile).unwrap();

        let doc = resolve(TemplateId::Healthcare, None, &store).render();
        assert!(doc.body.contains("Saved Person"));
    }

    #[test]
    fn test_styled_page_shows_profession_record() {
        let store = MemoryStore::new();
        let profile = renderer_for(TemplateId::Developer).defaults();
        save_record(&store, TemplateId::Developer, &profile).unwrap();

        let doc = resolve(TemplateId::Developer, Some(Style::Modern), &store).render();
        assert_eq!(doc.template, TemplateId::Modern);
        assert!(doc.body.contains("Alex Chen"));
    }

    #[test]
    fn test_malformed_record_falls_back_to_defaults() {
        let store = MemoryStore::new();
        store.set("resume_finance", "{\"name\": [").unwrap();

        let res = resolve(TemplateId::Finance, None, &store);
        assert!(res.record.is_none());
        assert!(res.render().body.contains("Michael Reynolds"));
    }
}
