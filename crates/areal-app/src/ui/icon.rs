//! Glyphs from egui's built-in emoji icon font used on dialog buttons.

pub(crate) const CHECK: &str = "✔";
pub(crate) const CANCEL: &str = "✖";
