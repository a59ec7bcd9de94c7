//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world and read by systems during
//! execution. Each submodule documents the semantics and intended usage of
//! its resource(s).
//!
//! Overview
//! - `animationstore` – frame-sequence definitions shared across entities
//! - `commandsource` – channel bridge the external command source drives
//! - `engineconfig` – motion tuning loaded from an INI file
//! - `vocabulary` – total map from action kinds to motion parameters
//! - `worldsignals` – global flags/counters for cross-system communication
//! - `worldtime` – simulation time and per-tick delta

pub mod animationstore;
pub mod commandsource;
pub mod engineconfig;
pub mod vocabulary;
pub mod worldsignals;
pub mod worldtime;
