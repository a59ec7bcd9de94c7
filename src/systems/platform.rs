//! Moving platform driver.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::movingplatform::MovingPlatform;
use crate::resources::worldtime::WorldTime;

/// Sweep every moving platform to its position for the current time.
///
/// Runs before solid resolution so a character standing on a rising
/// platform is pushed up out of the overlap the same tick.
pub fn moving_platforms(
    mut query: Query<(&MovingPlatform, &mut MapPosition)>,
    time: Res<WorldTime>,
) {
    for (platform, mut pos) in query.iter_mut() {
        pos.pos = platform.position_at(time.elapsed);
    }
}
