//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the simulated world.
//!
//! Submodules overview:
//! - [`actionqueue`] – per-character FIFO command queue and execution state
//! - [`animator`] – visual state, frame playback, and one-shot locks
//! - [`boxcollider`] – axis-aligned rectangular collider (solid or trigger)
//! - [`breakable`] – obstacle that breaks after enough attack hits
//! - [`group`] – tag component for grouping entities by name
//! - [`health`] – hit points, invincibility window, knockback
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`movingplatform`] – kinematic platform sweeping between two points
//! - [`physicalstate`] – per-tick grounded/wall/velocity snapshot
//! - [`rigidbody`] – gravity-bound kinematic body storing velocity
//! - [`shapeprofile`] – named collider variants for stance changes
//! - [`ttl`] – countdown that despawns short-lived entities

pub mod actionqueue;
pub mod animator;
pub mod boxcollider;
pub mod breakable;
pub mod group;
pub mod health;
pub mod mapposition;
pub mod movingplatform;
pub mod physicalstate;
pub mod rigidbody;
pub mod shapeprofile;
pub mod ttl;
