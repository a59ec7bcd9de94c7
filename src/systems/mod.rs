//! Systems driving the simulation.
//!
//! Fixed-tick order, as wired by the driver:
//!
//! 1. [`intake`] drains the command channel into the player's queue
//! 2. [`sensor`] recomputes grounded/wall contact from last tick's geometry
//! 3. [`action`] starts/holds/completes the in-flight command
//! 4. [`movement`] integrates gravity and velocity
//! 5. [`platform`] sweeps kinematic platforms to their timed positions
//! 6. [`collision`] detects contacts on the raw overlaps, then resolves
//!    solids; [`reactors`] (observers) turn contacts and strikes into
//!    outcomes
//! 7. [`animator`] projects visual state and advances frames
//! 8. [`ttl`] retires expired short-lived entities

pub mod action;
pub mod animator;
pub mod collision;
pub mod intake;
pub mod movement;
pub mod platform;
pub mod reactors;
pub mod sensor;
pub mod time;
pub mod ttl;
