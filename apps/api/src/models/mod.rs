pub mod fields;
pub mod profile;
pub mod template;
