// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles built from the design tokens.

pub mod button;
pub mod container;
