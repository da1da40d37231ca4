//! Simulation constants and tuning parameters.
//!
//! Values that a scenario may want to change also live in
//! [`crate::config::BroadsideConfig`]; these are its defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Milliseconds in one minute, for converting fire rates into intervals.
pub const MS_PER_MINUTE: f64 = 60_000.0;

// --- Playfield ---

/// Full playfield width in pixels, sidebar included.
pub const PLAYFIELD_WIDTH: f64 = 1280.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f64 = 720.0;

/// Width of the stats sidebar on the right edge of the playfield.
pub const SIDEBAR_WIDTH: f64 = 240.0;

// --- Ships ---

/// Side length of the square click region around each ship.
pub const SHIP_CLICK_SIZE: f64 = 32.0;

/// Speed at which ordered ships travel (pixels/s).
pub const ORDER_SPEED: f64 = 200.0;

/// Distance below which a moving ship counts as arrived (strict).
pub const ARRIVAL_EPSILON: f64 = 4.0;

/// Tint applied to the selected ship (0xRRGGBB).
pub const SELECTED_TINT: u32 = 0x00ff00;

// --- Patrol ---

/// Patrol speed of hostile ships (pixels/s).
pub const PATROL_SPEED: f64 = 100.0;

/// Distance the patrol loop keeps from the playable area edges.
pub const PATROL_INSET: f64 = 50.0;

/// Waypoints closer than this are considered reached when deriving the cursor.
pub const WAYPOINT_EPSILON: f64 = 1e-6;
