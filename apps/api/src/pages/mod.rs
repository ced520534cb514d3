//! HTML pages: résumé display routes and the editor page.

pub mod admin;
pub mod handlers;
pub mod resolver;
