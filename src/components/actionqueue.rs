//! Per-character action queue and execution state.
//!
//! This component is the runtime record of the action execution engine for
//! one controlled character. It owns the FIFO queue of pending commands and
//! the single in-flight command, and is mutated only by
//! [`action_engine`](crate::systems::action::action_engine).
//!
//! # Invariants
//!
//! - At most one command is in flight at any instant.
//! - The queue never loses or duplicates a command; batches append in order
//!   and later batches never reorder ahead of earlier ones.
//! - An in-flight command always runs to its clamped duration; there is no
//!   mid-action cancel.

use std::collections::VecDeque;

use bevy_ecs::prelude::Component;

use crate::action::ActionCommand;
use crate::components::shapeprofile::Stance;

/// The command currently driving the body, plus its bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct ActiveAction {
    pub command: ActionCommand,
    /// Time spent in this command so far, in seconds.
    pub elapsed: f32,
    /// Requested duration after the epsilon clamp.
    pub duration: f32,
    /// Elapsed time at which a deferred side effect (projectile spawn)
    /// fires, if this command schedules one. Checked every tick, fired at
    /// most once.
    pub deferred_at: Option<f32>,
    /// Whether the deferred side effect already fired.
    pub deferred_fired: bool,
}

impl ActiveAction {
    pub fn new(command: ActionCommand) -> Self {
        let duration = command.effective_duration();
        Self {
            command,
            elapsed: 0.0,
            duration,
            deferred_at: None,
            deferred_fired: false,
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// FIFO queue of pending commands and the engine's per-character state.
#[derive(Component, Debug)]
pub struct ActionQueue {
    pending: VecDeque<ActionCommand>,
    /// The command in flight, if any.
    pub current: Option<ActiveAction>,
    /// Facing direction, -1 or +1. Single source of truth for sprite
    /// mirroring and for the asymmetric wall-jump.
    pub facing: i8,
    /// Collider stance currently applied; restored to `Normal` by cleanup.
    pub stance: Stance,
    /// Set while a crouch/crawl command holds.
    pub is_crouching: bool,
    /// Set while a wall-slide command holds against a wall.
    pub is_wall_sliding: bool,
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            current: None,
            facing: 1,
            stance: Stance::Normal,
            is_crouching: false,
            is_wall_sliding: false,
        }
    }

    /// Append a whole batch to the tail of the queue, preserving batch order.
    ///
    /// The queue is unbounded by design: a flooding command source gets
    /// strict in-order execution with no drop and no backpressure.
    pub fn enqueue_batch(&mut self, batch: impl IntoIterator<Item = ActionCommand>) {
        self.pending.extend(batch);
    }

    pub fn enqueue(&mut self, command: ActionCommand) {
        self.pending.push_back(command);
    }

    /// Pop the next pending command, front first.
    pub fn dequeue(&mut self) -> Option<ActionCommand> {
        self.pending.pop_front()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// True while a command is actively driving velocity and impulses.
    pub fn is_executing(&self) -> bool {
        self.current.is_some()
    }

    /// True when the queue is empty and nothing is in flight. This is the
    /// condition under which the drained notification fires.
    pub fn is_drained(&self) -> bool {
        self.pending.is_empty() && self.current.is_none()
    }
}
