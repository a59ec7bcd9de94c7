//! Event types exchanged across systems.
//!
//! Events provide a decoupled way for systems to communicate: the collision
//! system reports overlaps, the action engine reports command milestones,
//! and reactors/observers subscribe to whichever they care about.
//!
//! Submodules:
//! - [`action`] – queue drained, deferred shot, attack strike, interact
//! - [`contact`] – collider overlap notifications with contact normals

pub mod action;
pub mod contact;
