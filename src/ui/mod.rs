// SPDX-License-Identifier: MPL-2.0
//! UI modules: one component per kiosk screen plus the shared chrome.
//!
//! Stateful screens follow the `State`/`Message`/`Event` contract — the
//! parent forwards messages into `update`, which mutates local state and
//! returns an `Event` for anything the parent must act on. Stateless
//! screens are plain `view` functions.

pub mod announcements;
pub mod calendar;
pub mod design_tokens;
pub mod directory;
pub mod faqs;
pub mod header;
pub mod home;
pub mod inquiry;
pub mod login;
pub mod map_view;
pub mod menu;
pub mod not_found;
pub mod sidebar;
pub mod styles;
pub mod theming;
