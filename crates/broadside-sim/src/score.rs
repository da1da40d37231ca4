//! Running score state tracked by the engine.

use broadside_core::enums::Side;
use broadside_core::state::ScoreView;

#[derive(Debug, Clone, Copy, Default)]
pub struct SideScore {
    pub shots: u32,
    pub hits: u32,
    pub damage_dealt: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub player: SideScore,
    pub hostile: SideScore,
}

impl ScoreState {
    pub fn record_shot(&mut self, shooter_side: Side, hit: bool, damage: u32) {
        let side = match shooter_side {
            Side::Player => &mut self.player,
            Side::Hostile => &mut self.hostile,
        };
        side.shots += 1;
        if hit {
            side.hits += 1;
            side.damage_dealt += damage;
        }
    }

    pub fn view(&self, mission_time_secs: f64) -> ScoreView {
        ScoreView {
            player_shots: self.player.shots,
            player_hits: self.player.hits,
            player_damage_dealt: self.player.damage_dealt,
            hostile_shots: self.hostile.shots,
            hostile_hits: self.hostile.hits,
            hostile_damage_dealt: self.hostile.damage_dealt,
            mission_time_secs,
        }
    }
}
