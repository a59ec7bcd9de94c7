//! Command source bridge.
//!
//! The command source (an LLM client, a script player, a test harness) runs
//! outside the simulation and submits ordered batches of wire commands over
//! an unbounded channel. The engine side drains the channel once per tick,
//! non-blocking, and appends parsed commands to the target entity's queue.
//! The engine is agnostic to how batches are produced.

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};

use crate::action::WireCommand;

/// Clonable handle the external collaborator uses to drive the engine.
///
/// `submit_batch` is the sole inbound API: an ordered sequence of wire
/// commands. Unrecognized action tags are accepted and execute as no-ops.
#[derive(Clone, Debug)]
pub struct CommandSubmitter {
    tx: Sender<Vec<WireCommand>>,
}

impl CommandSubmitter {
    /// Submit one ordered batch. Returns an error only if the engine side
    /// has shut down and dropped the receiver.
    pub fn submit_batch(&self, batch: Vec<WireCommand>) -> Result<(), String> {
        self.tx
            .send(batch)
            .map_err(|e| format!("command channel closed: {}", e))
    }
}

/// Receiving end, installed as an ECS resource and drained every tick.
#[derive(Resource, Debug)]
pub struct CommandSource {
    rx: Receiver<Vec<WireCommand>>,
}

impl CommandSource {
    /// Create the channel pair: the resource for the world and the submitter
    /// handle for the external collaborator.
    pub fn channel() -> (CommandSource, CommandSubmitter) {
        let (tx, rx) = unbounded();
        (CommandSource { rx }, CommandSubmitter { tx })
    }

    /// Pop the next pending batch without blocking.
    pub fn try_next_batch(&self) -> Option<Vec<WireCommand>> {
        match self.rx.try_recv() {
            Ok(batch) => Some(batch),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}
