// SPDX-License-Identifier: MPL-2.0
//! `kioskonnekt` is a touchscreen campus information kiosk built with the
//! Iced GUI framework.
//!
//! It provides the walk-up services of the campus kiosk — FAQs, the office
//! directory with wayfinding map slideshows, announcements, the school
//! calendar, and helpdesk inquiries — with operator configuration and
//! persisted visitor preferences.

pub mod app;
pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod inquiry;
pub mod slideshow;
pub mod ui;
