pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::editor::handlers as editor;
use crate::pages::handlers as pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé pages
        .route("/", get(pages::handle_classic))
        .route("/resume", get(pages::handle_classic))
        .route("/resume/:profession", get(pages::handle_profession))
        .route(
            "/resume/:profession/:style",
            get(pages::handle_profession_style),
        )
        .route("/admin", get(pages::handle_admin))
        // Editor API
        .route("/api/v1/editor", get(editor::handle_get_editor))
        .route(
            "/api/v1/editor/template",
            put(editor::handle_select_template),
        )
        .route(
            "/api/v1/editor/fields/:field",
            put(editor::handle_set_field),
        )
        .route("/api/v1/editor/lists/:list", post(editor::handle_add_item))
        .route(
            "/api/v1/editor/lists/:list/:index",
            patch(editor::handle_update_item).delete(editor::handle_remove_item),
        )
        .route(
            "/api/v1/editor/experiences/:i/achievements",
            post(editor::handle_add_achievement),
        )
        .route(
            "/api/v1/editor/experiences/:i/achievements/:j",
            patch(editor::handle_update_achievement)
                .delete(editor::handle_remove_achievement),
        )
        .route(
            "/api/v1/editor/skills/:i/items",
            post(editor::handle_add_skill),
        )
        .route(
            "/api/v1/editor/skills/:i/items/:j",
            patch(editor::handle_update_skill).delete(editor::handle_remove_skill),
        )
        .route("/api/v1/editor/save", post(editor::handle_save))
        .route("/api/v1/editor/preview", post(editor::handle_preview))
        // Mix-and-match style preference
        .route(
            "/api/v1/style-preference",
            get(editor::handle_get_style_preference)
                .put(editor::handle_put_style_preference)
                .delete(editor::handle_clear_style_preference),
        )
        .with_state(state)
}
