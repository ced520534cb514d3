use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
};
use tracing::debug;

use crate::models::template::{Style, TemplateId};
use crate::pages::admin::render_admin_page;
use crate::pages::resolver::resolve;
use crate::storage::preferences::StylePreferences;
use crate::render::html::escape;
use crate::state::AppState;

type PageResult = Result<Html<String>, (StatusCode, Html<String>)>;

fn not_found(message: String) -> (StatusCode, Html<String>) {
    debug!("Page not found: {message}");
    (
        StatusCode::NOT_FOUND,
        Html(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Not found</title></head>\n\
             <body><h1>Not found</h1><p>{}</p><p><a href=\"/resume\">Back to all templates</a></p></body>\n</html>\n",
            escape(&message)
        )),
    )
}

fn render_page(state: &AppState, template: TemplateId, style: Option<Style>) -> Html<String> {
    let resolution = resolve(template, style, state.store.as_ref());
    debug!(
        "Serving {} page via {:?} (saved record: {})",
        resolution.template,
        resolution.source,
        resolution.record.is_some()
    );
    Html(resolution.render().to_page())
}

/// GET / and GET /resume
pub async fn handle_classic(State(state): State<AppState>) -> Html<String> {
    render_page(&state, TemplateId::Classic, None)
}

/// GET /resume/:profession
pub async fn handle_profession(
    State(state): State<AppState>,
    Path(profession): Path<String>,
) -> PageResult {
    let template = profession.parse::<TemplateId>().map_err(|e| not_found(e.to_string()))?;
    Ok(render_page(&state, template, None))
}

/// GET /resume/:profession/:style
pub async fn handle_profession_style(
    State(state): State<AppState>,
    Path((profession, style)): Path<(String, String)>,
) -> PageResult {
    let template = profession.parse::<TemplateId>().map_err(|e| not_found(e.to_string()))?;
    if !template.is_profession() {
        return Err(not_found(format!(
            "'{template}' is a style template and takes no style"
        )));
    }
    let style = style.parse::<Style>().map_err(|e| not_found(e.to_string()))?;
    Ok(render_page(&state, template, Some(style)))
}

/// GET /admin
pub async fn handle_admin(State(state): State<AppState>) -> Html<String> {
    let preference = StylePreferences::new(state.store.as_ref()).read();
    let editor = state.editor.lock().await;
    Html(render_admin_page(&editor, preference))
}
