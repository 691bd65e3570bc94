// SPDX-License-Identifier: MPL-2.0
//! `streamlens` is the playback session controller of the StreamLens
//! streaming catalog front-end, built with the Iced GUI framework.
//!
//! The crate splits into a UI-independent controller (`player`) with its
//! persistence port (`application`), infrastructure adapters (`storage`,
//! `media`), and the Iced shell (`app`, `ui`). Localization uses Fluent
//! and user preferences live in a TOML settings file.

pub mod app;
pub mod application;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod player;
pub mod storage;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
