//! Click dispatcher: one hit-test pass per click.
//!
//! Priority: the sidebar, then ships (topmost first), then the background.

use hecs::World;

use broadside_core::components::{ClickRegion, ShipTag};
use broadside_core::config::PlayfieldConfig;
use broadside_core::types::{Position, ShipId};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickTarget {
    Sidebar,
    Ship(ShipId),
    /// Empty playable space.
    Background(Position),
}

pub fn classify_click(world: &World, playfield: &PlayfieldConfig, point: Position) -> ClickTarget {
    if point.x >= playfield.playable_width() {
        return ClickTarget::Sidebar;
    }

    // Later registrations are drawn on top, so the highest id wins.
    world
        .query::<(&ShipTag, &Position, &ClickRegion)>()
        .iter()
        .filter(|(_, (_, center, region))| hit_test(center, region, &point))
        .map(|(_, (tag, _, _))| tag.id)
        .max()
        .map_or(ClickTarget::Background(point), ClickTarget::Ship)
}

/// Rectangular containment, edges included.
pub fn hit_test(center: &Position, region: &ClickRegion, point: &Position) -> bool {
    (point.x - center.x).abs() <= region.half_width
        && (point.y - center.y).abs() <= region.half_height
}
