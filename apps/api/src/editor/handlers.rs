use axum::{extract::State, http::StatusCode, response::Redirect, Json};
use serde::{Deserialize, Serialize};

use crate::editor::{RecordStore, SaveReceipt};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::fields::{ListName, ScalarField};
use crate::models::profile::{Profile, SkillItem};
use crate::models::template::TemplateId;
use crate::render::Capabilities;
use crate::state::AppState;
use crate::storage::preferences::{StylePreference, StylePreferences};

#[derive(Serialize)]
pub struct EditorView {
    pub template: TemplateId,
    pub record: Profile,
    pub capabilities: Capabilities,
}

impl From<&RecordStore> for EditorView {
    fn from(editor: &RecordStore) -> Self {
        Self {
            template: editor.template(),
            record: editor.profile().clone(),
            capabilities: editor.capabilities(),
        }
    }
}

#[derive(Deserialize)]
pub struct SelectTemplateRequest {
    pub template: String,
}

#[derive(Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

#[derive(Deserialize)]
pub struct PatchItemRequest {
    pub field: String,
    pub value: String,
}

fn parse_list(list: &str) -> Result<ListName, AppError> {
    list.parse::<ListName>().map_err(|e| AppError::NotFound(e.to_string()))
}

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/editor
pub async fn handle_get_editor(State(state): State<AppState>) -> Json<EditorView> {
    let editor = state.editor.lock().await;
    Json(EditorView::from(&*editor))
}

/// PUT /api/v1/editor/template
pub async fn handle_select_template(
    State(state): State<AppState>,
    AppJson(req): AppJson<SelectTemplateRequest>,
) -> Result<Json<EditorView>, AppError> {
    let template = req
        .template
        .parse::<TemplateId>()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let mut editor = state.editor.lock().await;
    editor.select_template(template);
    Ok(Json(EditorView::from(&*editor)))
}

/// PUT /api/v1/editor/fields/:field
pub async fn handle_set_field(
    State(state): State<AppState>,
    AppPath(field): AppPath<String>,
    AppJson(req): AppJson<ValueRequest>,
) -> Result<Json<EditorView>, AppError> {
    let field = field
        .parse::<ScalarField>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;
    let mut editor = state.editor.lock().await;
    editor.set_field(field, req.value);
    Ok(Json(EditorView::from(&*editor)))
}

// ────────────────────────────────────────────────────────────────────────────
// Lists
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/editor/lists/:list
pub async fn handle_add_item(
    State(state): State<AppState>,
    AppPath(list): AppPath<String>,
) -> Result<(StatusCode, Json<EditorView>), AppError> {
    let list = parse_list(&list)?;
    let mut editor = state.editor.lock().await;
    editor.add_item(list);
    Ok((StatusCode::CREATED, Json(EditorView::from(&*editor))))
}

/// PATCH /api/v1/editor/lists/:list/:index
pub async fn handle_update_item(
    State(state): State<AppState>,
    AppPath((list, index)): AppPath<(String, usize)>,
    AppJson(req): AppJson<PatchItemRequest>,
) -> Result<Json<EditorView>, AppError> {
    let list = parse_list(&list)?;
    let mut editor = state.editor.lock().await;
    editor.update_item(list, index, &req.field, &req.value)?;
    Ok(Json(EditorView::from(&*editor)))
}

/// DELETE /api/v1/editor/lists/:list/:index
pub async fn handle_remove_item(
    State(state): State<AppState>,
    AppPath((list, index)): AppPath<(String, usize)>,
) -> Result<Json<EditorView>, AppError> {
    let list = parse_list(&list)?;
    let mut editor = state.editor.lock().await;
    editor.remove_item(list, index)?;
    Ok(Json(EditorView::from(&*editor)))
}

// ────────────────────────────────────────────────────────────────────────────
// Achievements and skill items
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/editor/experiences/:i/achievements
pub async fn handle_add_achievement(
    State(state): State<AppState>,
    AppPath(experience): AppPath<usize>,
) -> Result<(StatusCode, Json<EditorView>), AppError> {
    let mut editor = state.editor.lock().await;
    editor.add_achievement(experience)?;
    Ok((StatusCode::CREATED, Json(EditorView::from(&*editor))))
}

/// PATCH /api/v1/editor/experiences/:i/achievements/:j
pub async fn handle_update_achievement(
    State(state): State<AppState>,
    AppPath((experience, index)): AppPath<(usize, usize)>,
    AppJson(req): AppJson<ValueRequest>,
) -> Result<Json<EditorView>, AppError> {
    let mut editor = state.editor.lock().await;
    editor.update_achievement(experience, index, &req.value)?;
    Ok(Json(EditorView::from(&*editor)))
}

/// DELETE /api/v1/editor/experiences/:i/achievements/:j
pub async fn handle_remove_achievement(
    State(state): State<AppState>,
    AppPath((experience, index)): AppPath<(usize, usize)>,
) -> Result<Json<EditorView>, AppError> {
    let mut editor = state.editor.lock().await;
    editor.remove_achievement(experience, index)?;
    Ok(Json(EditorView::from(&*editor)))
}

/// POST /api/v1/editor/skills/:i/items
pub async fn handle_add_skill(
    State(state): State<AppState>,
    AppPath(category): AppPath<usize>,
) -> Result<(StatusCode, Json<EditorView>), AppError> {
    let mut editor = state.editor.lock().await;
    editor.add_skill(category)?;
    Ok((StatusCode::CREATED, Json(EditorView::from(&*editor))))
}

/// PATCH /api/v1/editor/skills/:i/items/:j
pub async fn handle_update_skill(
    State(state): State<AppState>,
    AppPath((category, index)): AppPath<(usize, usize)>,
    AppJson(item): AppJson<SkillItem>,
) -> Result<Json<EditorView>, AppError> {
    let mut editor = state.editor.lock().await;
    editor.update_skill(category, index, item)?;
    Ok(Json(EditorView::from(&*editor)))
}

/// DELETE /api/v1/editor/skills/:i/items/:j
pub async fn handle_remove_skill(
    State(state): State<AppState>,
    AppPath((category, index)): AppPath<(usize, usize)>,
) -> Result<Json<EditorView>, AppError> {
    let mut editor = state.editor.lock().await;
    editor.remove_skill(category, index)?;
    Ok(Json(EditorView::from(&*editor)))
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/editor/save
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SaveReceipt>, AppError> {
    let editor = state.editor.lock().await;
    let receipt = editor.save(state.store.as_ref())?;
    Ok(Json(receipt))
}

/// POST /api/v1/editor/preview
/// Saves, then redirects (303) to the page that displays the record.
pub async fn handle_preview(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let editor = state.editor.lock().await;
    let route = editor.preview(state.store.as_ref())?;
    Ok(Redirect::to(&route))
}

/// GET /api/v1/style-preference
pub async fn handle_get_style_preference(
    State(state): State<AppState>,
) -> Json<Option<StylePreference>> {
    Json(StylePreferences::new(state.store.as_ref()).read())
}

/// PUT /api/v1/style-preference
pub async fn handle_put_style_preference(
    State(state): State<AppState>,
    AppJson(preference): AppJson<StylePreference>,
) -> Result<Json<StylePreference>, AppError> {
    if !preference.profession.is_profession() {
        return Err(AppError::Validation(format!(
            "'{}' is a style template, not a profession",
            preference.profession
        )));
    }
    StylePreferences::new(state.store.as_ref()).write(preference)?;
    Ok(Json(preference))
}

/// DELETE /api/v1/style-preference
pub async fn handle_clear_style_preference(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    StylePreferences::new(state.store.as_ref()).clear()?;
    Ok(StatusCode::NO_CONTENT)
}
