//! Actionforge library.
//!
//! A headless 2D platformer action engine: timed natural-language-derived
//! action commands arrive from an external command source, get queued per
//! character, and are executed as one-shot physics impulses and per-tick
//! velocity overrides on a gravity-bound body. This module exposes the
//! engine's ECS components, resources, systems, and events for use in
//! integration tests and as a reusable library.

pub mod action;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
