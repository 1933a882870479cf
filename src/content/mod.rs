// SPDX-License-Identifier: MPL-2.0
//! Static kiosk content.
//!
//! Everything a visitor reads on the content pages is enumerated here at
//! build time. There is no content-management backend: updating the kiosk
//! means editing these tables and redeploying, which is how the campus
//! actually operates it.

pub mod announcements;
pub mod calendar;
pub mod directory;
pub mod faq;
