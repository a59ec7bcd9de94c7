//! Command intake.
//!
//! Drains the [`CommandSource`] channel once per tick and appends each
//! batch, parsed and in order, to the controlled character's queue. Parsing
//! never rejects: unknown tags become no-op wait windows so a confused
//! command source degrades to idling instead of desyncing the queue.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::action::{ActionCommand, ActionKind};
use crate::components::actionqueue::ActionQueue;
use crate::components::group::Group;
use crate::resources::commandsource::CommandSource;

/// Move every pending batch from the channel onto the player's queue.
pub fn command_intake(
    source: Res<CommandSource>,
    mut queues: Query<(&mut ActionQueue, &Group)>,
) {
    while let Some(batch) = source.try_next_batch() {
        let Some((mut queue, _)) = queues.iter_mut().find(|(_, g)| g.is("player")) else {
            warn!("batch of {} commands dropped: no controlled character", batch.len());
            continue;
        };
        let mut parsed = Vec::with_capacity(batch.len());
        for wire in &batch {
            let command = ActionCommand::from_wire(wire);
            if command.kind == ActionKind::Noop {
                warn!("unknown action tag {:?}, queued as no-op", wire.action);
            }
            parsed.push(command);
        }
        info!("batch of {} commands queued", parsed.len());
        queue.enqueue_batch(parsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::WireCommand;

    fn wire(action: &str, duration: f32) -> WireCommand {
        WireCommand {
            action: action.to_string(),
            duration,
            strength: None,
        }
    }

    #[test]
    fn test_batches_append_in_order() {
        let mut world = World::new();
        let (source, submitter) = CommandSource::channel();
        world.insert_resource(source);
        let player = world
            .spawn((ActionQueue::new(), Group::new("player")))
            .id();

        submitter
            .submit_batch(vec![wire("WALK_RIGHT", 1.0), wire("JUMP", 0.5)])
            .unwrap();
        submitter.submit_batch(vec![wire("WAIT", 2.0)]).unwrap();

        let mut schedule = Schedule::default();
        schedule.add_systems(command_intake);
        schedule.run(&mut world);

        let mut queue = world.get_mut::<ActionQueue>(player).unwrap();
        assert_eq!(queue.pending_len(), 3);
        assert_eq!(queue.dequeue().unwrap().kind, ActionKind::WalkRight);
        assert_eq!(queue.dequeue().unwrap().kind, ActionKind::Jump);
        assert_eq!(queue.dequeue().unwrap().kind, ActionKind::Wait);
    }

    #[test]
    fn test_unknown_tag_queued_as_noop() {
        let mut world = World::new();
        let (source, submitter) = CommandSource::channel();
        world.insert_resource(source);
        let player = world
            .spawn((ActionQueue::new(), Group::new("player")))
            .id();

        submitter.submit_batch(vec![wire("DANCE", 1.0)]).unwrap();

        let mut schedule = Schedule::default();
        schedule.add_systems(command_intake);
        schedule.run(&mut world);

        let mut queue = world.get_mut::<ActionQueue>(player).unwrap();
        assert_eq!(queue.dequeue().unwrap().kind, ActionKind::Noop);
    }
}
