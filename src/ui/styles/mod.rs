// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for buttons and containers.

pub mod button;
pub mod container;
