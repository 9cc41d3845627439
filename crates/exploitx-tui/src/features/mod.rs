//! Feature slices for the page (state/update/render per slice).

pub mod challenges;
pub mod event;
pub mod profile;
pub mod rules;
