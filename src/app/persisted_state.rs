// SPDX-License-Identifier: MPL-2.0
//! Kiosk state persistence using CBOR format.
//!
//! This module handles state that should survive a kiosk restart but is not
//! operator-configurable (unlike preferences in `settings.toml`): the
//! visitor display name entered at login, the accessibility toggles, and
//! the inquiry outbox.
//!
//! State is stored in CBOR (Concise Binary Object Representation) for
//! compact binary storage and a clear separation from the operator-editable
//! TOML preferences.
//!
//! # Path Resolution
//!
//! The state file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from()`/`save_to()` with an explicit path override
//! 2. Set the `KIOSKONNEKT_DATA_DIR` environment variable
//! 3. Falls back to the platform-specific data directory

use super::paths;
use crate::inquiry::outbox::QueuedTicket;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Accessibility preferences toggled from the sidebar.
///
/// Read once at startup, written on toggle. Last write wins; the kiosk has
/// a single event loop so there is no concurrent writer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Accessibility {
    /// High-contrast color scheme for low-vision visitors.
    #[serde(default)]
    pub high_contrast: bool,

    /// Larger base font size.
    #[serde(default)]
    pub large_text: bool,
}

/// Kiosk state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KioskState {
    /// Display name the visitor entered on the login screen.
    /// Prefills the inquiry form; cleared on logout.
    #[serde(default)]
    pub visitor_name: Option<String>,

    /// Accessibility toggles.
    #[serde(default)]
    pub accessibility: Accessibility,

    /// Inquiries that could not reach the helpdesk, tagged for later sync.
    #[serde(default)]
    pub outbox: Vec<QueuedTicket>,
}

impl KioskState {
    /// Loads kiosk state from the default location.
    ///
    /// Returns a tuple of (state, optional warning). If loading fails, the
    /// kiosk starts from defaults and the warning is logged; a corrupt state
    /// file must never keep the kiosk from booting.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads kiosk state from a custom directory (tests, portable installs).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("kiosk state file could not be parsed; starting fresh".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("kiosk state file could not be read; starting fresh".to_string()),
            ),
        }
    }

    /// Saves kiosk state to the default location.
    ///
    /// Creates the parent directory if it doesn't exist. Returns an optional
    /// warning if the save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves kiosk state to a custom directory.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("no data directory available for kiosk state".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("could not create kiosk state directory".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(self, writer).is_err() {
                    return Some("could not write kiosk state file".to_string());
                }
                None
            }
            Err(_) => Some("could not create kiosk state file".to_string()),
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::Inquiry;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_state() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let state = KioskState {
            visitor_name: Some("Juana".to_string()),
            accessibility: Accessibility {
                high_contrast: true,
                large_text: false,
            },
            outbox: vec![QueuedTicket::new(Inquiry {
                name: "Juana".to_string(),
                email: "juana@plv.edu.ph".to_string(),
                concern: "ID replacement".to_string(),
            })],
        };

        assert_eq!(state.save_to(base.clone()), None);
        let (loaded, warning) = KioskState::load_from(base);
        assert_eq!(loaded, state);
        assert!(warning.is_none());
    }

    #[test]
    fn missing_state_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = KioskState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, KioskState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_state_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"not cbor at all")
            .expect("failed to write corrupt state");

        let (state, warning) = KioskState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, KioskState::default());
        assert!(warning.is_some());
    }
}
