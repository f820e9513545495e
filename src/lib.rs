// SPDX-License-Identifier: MPL-2.0
//! `sr_portal` is a desktop portal for submitting service requests to a
//! classification service, built with the Iced GUI framework.
//!
//! It collects a name, employee ID, free-text query, and file attachments,
//! sends them to the service for priority/team classification, and lets a
//! reviewer file a correction when the predicted labels look wrong.

pub mod api;
pub mod app;
pub mod error;
pub mod ui;
