// SPDX-License-Identifier: MPL-2.0
//! Cross-module integration tests: configuration feeding the slideshow,
//! and the persisted state surviving a full save/load cycle the way a
//! kiosk restart would exercise it.

use kioskonnekt::app::persisted_state::{Accessibility, KioskState};
use kioskonnekt::config::{self, Config, DEFAULT_AUTOPLAY_INTERVAL_MS};
use kioskonnekt::content::directory::DIRECTORY;
use kioskonnekt::inquiry::outbox::QueuedTicket;
use kioskonnekt::inquiry::Inquiry;
use kioskonnekt::slideshow::{AutoplayInterval, Slideshow};
use tempfile::tempdir;

#[test]
fn autoplay_interval_follows_the_operator_config() {
    let dir = tempdir().expect("failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        autoplay_interval_ms: Some(2_000),
        ..Config::default()
    };
    config::save_to_path(&config, &config_path).expect("failed to save config");

    let loaded = config::load_from_path(&config_path).expect("failed to load config");
    let interval = AutoplayInterval::new(
        loaded
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS),
    );
    assert_eq!(interval.millis(), 2_000);
}

#[test]
fn out_of_range_config_interval_is_clamped_not_rejected() {
    let interval = AutoplayInterval::new(50);
    assert_eq!(interval.millis(), config::MIN_AUTOPLAY_INTERVAL_MS);
}

#[test]
fn registrar_walkthrough_plays_to_the_end_and_stops() {
    // Drive a slideshow built from the real directory data the way the
    // autoplay timer would.
    let registrar = &DIRECTORY[0];
    let mut show = Slideshow::new(
        registrar.map_slides.iter().map(|s| s.to_string()).collect(),
    );

    assert!(show.autoplay_running());
    for _ in 0..registrar.map_slides.len() * 2 {
        show.tick();
    }
    assert!(show.is_at_last());
    assert!(!show.autoplay_running());

    // A visitor stepping back resumes the walkthrough.
    show.previous();
    assert!(show.autoplay_running());
}

#[test]
fn kiosk_state_with_outbox_survives_a_restart() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let mut state = KioskState {
        visitor_name: Some("Juana".to_string()),
        accessibility: Accessibility {
            high_contrast: false,
            large_text: true,
        },
        outbox: Vec::new(),
    };
    state.outbox.push(QueuedTicket::new(Inquiry {
        name: "Juana".to_string(),
        email: "juana@plv.edu.ph".to_string(),
        concern: "Requesting a new school ID".to_string(),
    }));

    assert_eq!(state.save_to(base.clone()), None);

    let (reloaded, warning) = KioskState::load_from(base);
    assert!(warning.is_none());
    assert_eq!(reloaded, state);
    assert_eq!(reloaded.outbox.len(), 1);
    assert!(reloaded.outbox[0].id.0.starts_with("TKT-"));
}
