// SPDX-License-Identifier: MPL-2.0
//! Embedded kiosk assets.
//!
//! Wayfinding map slides and the campus logo are SVGs compiled into the
//! binary, so a kiosk deployment is a single executable with no asset
//! directory to go missing. Slide identifiers in
//! [`crate::content::directory`] are paths relative to `assets/`.

use iced::widget::svg;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

/// Shown when a slide identifier has no matching embedded asset, so a typo
/// in the directory table degrades to a visible placeholder instead of a
/// blank or a panic.
const MISSING_SLIDE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 640 400">
  <rect width="640" height="400" fill="#e8e8e8"/>
  <text x="320" y="200" text-anchor="middle" font-family="sans-serif" font-size="24" fill="#737373">Map unavailable</text>
</svg>"##;

/// Resolves a slide identifier to an SVG handle.
pub fn slide(id: &str) -> svg::Handle {
    match Assets::get(id) {
        Some(file) => svg::Handle::from_memory(file.data.into_owned()),
        None => svg::Handle::from_memory(MISSING_SLIDE),
    }
}

/// The campus logo shown on the home and login screens.
pub fn logo() -> svg::Handle {
    slide("branding/logo.svg")
}
