pub mod model;
pub mod view;

pub use model::{Point, SlotGeometry, Stage, Tween};
pub use view::draw;

pub const ICON_SIZE: i32 = 256;
pub const RING_FRACTION: f64 = 0.28; // ring radius relative to the shorter viewport side
pub const SLOT_FRACTION: f64 = 0.16; // slot radius relative to ring radius, medium tier
pub const MIN_SLOT_RADIUS: f64 = 14.0;
pub const MAX_SLOT_RADIUS: f64 = 72.0;
pub const COMPACT_SCALE: f64 = 0.8;
pub const RING_CENTER_Y: f64 = 0.4; // fraction of height; the info panel sits underneath
pub const MARKER_RADIUS: f64 = 6.0;
pub const ICON_INACTIVE_ALPHA: f64 = 0.6;
pub const ACTIVE_SLOT_GROWTH: f64 = 1.2;
