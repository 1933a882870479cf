// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Autoplay**: slideshow advancement interval bounds
//! - **Inquiry**: remote helpdesk endpoint
//! - **Display**: campus branding and window sizing

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default slideshow autoplay interval in milliseconds.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Minimum allowed autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum allowed autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 30_000;

// ==========================================================================
// Inquiry Defaults
// ==========================================================================

/// Default helpdesk endpoint the inquiry form posts tickets to.
pub const DEFAULT_INQUIRY_ENDPOINT: &str = "http://localhost:5000/api/inquiries";

/// Timeout for a single inquiry submission attempt, in seconds.
///
/// A kiosk user is standing in front of the screen; anything slower reads
/// as a hang, so the form gives up and queues the ticket locally instead.
pub const INQUIRY_TIMEOUT_SECS: u64 = 5;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Campus name shown on the login and home screens.
pub const DEFAULT_CAMPUS_NAME: &str = "PLV (Main Campus)";

/// Default window width when not running fullscreen.
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;

/// Default window height when not running fullscreen.
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
