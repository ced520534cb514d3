//! Template rendering contract.
//!
//! Every template implements `TemplateRenderer`. Renderers are pure: given the
//! same record they produce the same document, touch no storage and never call
//! each other. Presentation differences are expressed through `Capabilities`
//! and each template's own section arrangement.

pub mod html;

use serde::Serialize;

use crate::models::fields::ListName;
use crate::models::profile::{PartialProfile, Profile};
use crate::models::template::TemplateId;
use crate::templates;

/// What a renderer surfaces beyond the common core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Capabilities {
    pub shows_github: bool,
    /// Skill items carry a 0–100 level and are drawn as bars.
    pub skill_levels: bool,
    /// Optional lists this template displays.
    pub lists: &'static [ListName],
}

impl Capabilities {
    pub fn shows(&self, list: ListName) -> bool {
        matches!(
            list,
            ListName::Experiences | ListName::Skills | ListName::Education
        ) || self.lists.contains(&list)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    List(ListName),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub kind: SectionKind,
    pub entries: usize,
}

/// A rendered résumé: the HTML fragment plus a structural summary of what it
/// contains.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub template: TemplateId,
    pub title: String,
    pub sections: Vec<RenderedSection>,
    pub body: String,
}

impl Document {
    #[cfg(test)]
    pub fn section(&self, list: ListName) -> Option<&RenderedSection> {
        self.sections
            .iter()
            .find(|s| s.kind == SectionKind::List(list))
    }

    /// Wraps the fragment into a standalone printable page.
    pub fn to_page(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
             <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n\
             <nav class=\"toolbar\"><a href=\"/admin\">Edit Content</a></nav>\n{}</body>\n</html>\n",
            html::escape(&self.title),
            BASE_CSS,
            self.body
        )
    }
}

pub trait TemplateRenderer: Send + Sync {
    fn id(&self) -> TemplateId;

    /// The complete record this template shows when given no input.
    fn defaults(&self) -> Profile;

    fn capabilities(&self) -> Capabilities;

    fn render(&self, profile: &Profile) -> Document;
}

pub fn renderer_for(id: TemplateId) -> &'static dyn TemplateRenderer {
    match id {
        TemplateId::Classic => &templates::classic::Classic,
        TemplateId::Minimal => &templates::minimal::Minimal,
        TemplateId::Modern => &templates::modern::Modern,
        TemplateId::Creative => &templates::creative::Creative,
        TemplateId::Developer => &templates::developer::Developer,
        TemplateId::Marketing => &templates::marketing::Marketing,
        TemplateId::Finance => &templates::finance::Finance,
        TemplateId::Healthcare => &templates::healthcare::Healthcare,
        TemplateId::Education => &templates::education::Education,
        TemplateId::CreativeDesign => &templates::creative_design::CreativeDesign,
        TemplateId::Hospitality => &templates::hospitality::Hospitality,
    }
}

/// Renders `id` with `partial` resolved over that renderer's own defaults.
pub fn render_template(id: TemplateId, partial: Option<&PartialProfile>) -> Document {
    let renderer = renderer_for(id);
    let profile = match partial {
        Some(partial) => partial.clone().over(renderer.defaults()),
        None => renderer.defaults(),
    };
    renderer.render(&profile)
}

const BASE_CSS: &str = "\
body{margin:0;background:#f3f4f6;font-family:system-ui,sans-serif;color:#374151}\
.toolbar{max-width:8.5in;margin:1rem auto;text-align:right}\
.resume{max-width:8.5in;margin:0 auto 2rem;padding:2rem;background:var(--surface);box-shadow:0 1px 2px rgba(0,0,0,.08)}\
.resume h1{margin:0;color:#111827}.resume h2{margin:.25rem 0 0;color:var(--accent);font-weight:500}\
.resume h3{color:var(--accent);border-bottom:1px solid var(--accent-soft);padding-bottom:.25rem}\
header{display:flex;justify-content:space-between;gap:1rem;padding-bottom:1rem;border-bottom:2px solid var(--accent)}\
.header-centered{flex-direction:column;align-items:center;text-align:center}\
.header-banner{background:var(--accent);color:#fff;margin:-2rem -2rem 1rem;padding:2rem}\
.header-banner h1,.header-banner h2{color:#fff}\
.contact{list-style:none;margin:0;padding:0;font-size:.875rem}\
.columns{display:grid;grid-template-columns:5fr 7fr;gap:2rem}\
.entry{margin-bottom:.75rem}.entry-head{display:flex;justify-content:space-between;align-items:baseline}\
.entry h4{margin:0;color:#111827}.org{margin:.1rem 0;font-weight:500}.period{font-size:.8rem;color:#6b7280}\
.chips{display:flex;flex-wrap:wrap;gap:.35rem}.chip{background:var(--accent-soft);border-radius:.3rem;padding:.15rem .5rem;font-size:.8rem}\
.card{background:var(--accent-soft);border-radius:.4rem;padding:.6rem}\
.track{height:.4rem;background:#e5e7eb;border-radius:1rem}.fill{height:100%;background:var(--accent);border-radius:1rem}\
.bar{margin-bottom:.4rem;font-size:.875rem}.level{float:right;color:#6b7280}\
.gallery{display:grid;grid-template-columns:1fr 1fr;gap:1rem}.gallery img{width:100%;border-radius:.4rem}\
@media print{body{background:#fff}.toolbar{display:none}.resume{box-shadow:none;margin:0}}";
