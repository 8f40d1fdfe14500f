//! Pure helpers used by individual extraction rules.

pub mod json_ld;
pub mod svg;
