use strum::Display as StrumDisplay;

pub const FULL_TURN: f64 = 360.0;
pub const HALF_TURN: f64 = 180.0;
/// Galleries up to this size always sit their active item at exactly [`CENTERED_SLOT`].
pub const SMALL_GALLERY_LIMIT: usize = 10;
pub const CENTERED_SLOT: f64 = 270.0;
/// Max circular distance (degrees) for an item to count as sitting in the active slot.
pub const SLOT_TOLERANCE: f64 = 5.0;

/// Wraps an absolute rotation into `[0, 360)` without touching the stored value.
pub fn normalize(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Circular distance between two angles, in `[0, 180]`.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let d = normalize(a - b);
    d.min(FULL_TURN - d)
}

/// Minimal delta taking `from` onto an angle congruent to `to`, in `(-180, 180]`.
pub fn shortest_delta(from: f64, to: f64) -> f64 {
    let d = normalize(to - from);
    if d > HALF_TURN { d - FULL_TURN } else { d }
}

/// Angular arrangement of `count` items around the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    count: usize,
    active_slot: f64,
}

impl Layout {
    pub fn new(count: usize, configured_slot: f64) -> Self {
        let active_slot = if count <= SMALL_GALLERY_LIMIT {
            CENTERED_SLOT
        } else {
            configured_slot
        };
        Self { count, active_slot }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn active_slot(&self) -> f64 {
        self.active_slot
    }

    pub fn step(&self) -> f64 {
        FULL_TURN / self.count.max(1) as f64
    }

    /// Ring rotation at which item `index` sits in the active slot.
    pub fn expected_angle(&self, index: usize) -> f64 {
        -(index as f64 * self.step()) + self.active_slot
    }

    /// On-screen angle of item `index` when the ring is rotated by `rotation`.
    pub fn screen_angle(&self, index: usize, rotation: f64) -> f64 {
        index as f64 * self.step() + rotation
    }

    /// Absolute rotation that brings `index` into the active slot by the shortest path.
    pub fn rotate_to(&self, rotation: f64, index: usize) -> f64 {
        rotation + shortest_delta(rotation, self.expected_angle(index))
    }

    /// The item currently within [`SLOT_TOLERANCE`] of the active slot, if any.
    pub fn item_at(&self, rotation: f64) -> Option<usize> {
        (0..self.count)
            .find(|&i| angle_difference(rotation, self.expected_angle(i)) < SLOT_TOLERANCE)
    }
}

/// Visual scale class picked from the item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum CircleSize {
    #[strum(serialize = "circle-gallery-3-5")]
    Small,
    #[strum(serialize = "circle-gallery-6-10")]
    Medium,
    #[strum(serialize = "circle-gallery-11-15")]
    Large,
    #[strum(serialize = "circle-gallery-16-plus")]
    Huge,
}

impl CircleSize {
    pub fn for_count(count: usize) -> Self {
        match count {
            0..=5 => Self::Small,
            6..=10 => Self::Medium,
            11..=15 => Self::Large,
            _ => Self::Huge,
        }
    }

    /// Ring radius multiplier relative to the medium tier.
    pub fn scale(&self) -> f64 {
        match self {
            Self::Small => 0.8,
            Self::Medium => 1.0,
            Self::Large => 1.2,
            Self::Huge => 1.4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn congruent(a: f64, b: f64) -> bool {
        angle_difference(a, b) < 1e-6
    }

    #[test]
    fn test_small_galleries_force_centered_slot() {
        for count in 1..=SMALL_GALLERY_LIMIT {
            assert_eq!(Layout::new(count, 270.12).active_slot(), CENTERED_SLOT);
        }
        assert_eq!(Layout::new(7, 270.12).active_slot(), 270.0);
        assert_eq!(Layout::new(11, 270.12).active_slot(), 270.12);
        assert_eq!(Layout::new(11, 90.0).active_slot(), 90.0);
    }

    #[test]
    fn test_expected_angle() {
        let layout = Layout::new(6, 270.12);
        assert_eq!(layout.step(), 60.0);
        assert_eq!(layout.expected_angle(0), 270.0);
        assert_eq!(layout.expected_angle(3), 90.0);
        assert_eq!(layout.expected_angle(5), -30.0);
    }

    #[test]
    fn test_expected_angle_is_reproducible() {
        for count in 1..=50 {
            let layout = Layout::new(count, 270.12);
            for i in 0..count {
                assert_eq!(layout.expected_angle(i), layout.expected_angle(i));
                assert_eq!(layout.item_at(layout.expected_angle(i)), Some(i));
            }
        }
    }

    #[test]
    fn test_shortest_delta_range() {
        let samples = [-1000.5, -540.0, -180.0, -179.9, -0.1, 0.0, 45.0, 180.0, 359.9, 721.25];
        for &from in &samples {
            for &to in &samples {
                let d = shortest_delta(from, to);
                assert!(d > -HALF_TURN && d <= HALF_TURN, "{from} -> {to} gave {d}");
                assert!(congruent(from + d, to));
            }
        }
        assert_eq!(shortest_delta(0.0, 180.0), 180.0);
        assert_eq!(shortest_delta(180.0, 0.0), 180.0);
        assert_eq!(shortest_delta(10.0, 350.0), -20.0);
    }

    #[test]
    fn test_rotate_to_keeps_accumulated_rotation() {
        let layout = Layout::new(4, 270.0);
        let rotation = 270.0 + 3.0 * FULL_TURN;
        let next = layout.rotate_to(rotation, 1);
        assert_eq!(next, rotation - 90.0);
    }

    #[test]
    fn test_item_at_uses_circular_distance() {
        let layout = Layout::new(12, 0.0);
        assert_eq!(layout.expected_angle(0), 0.0);
        assert_eq!(layout.item_at(358.0), Some(0));
        assert_eq!(layout.item_at(2.0), Some(0));
        assert_eq!(layout.item_at(15.0), None);
        assert_eq!(layout.item_at(-30.0), Some(1));
    }

    #[test]
    fn test_screen_angle_lands_on_active_slot() {
        let layout = Layout::new(9, 270.12);
        for i in 0..9 {
            let screen = layout.screen_angle(i, layout.expected_angle(i));
            assert!(congruent(screen, layout.active_slot()));
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(-90.0), 270.0);
        assert_eq!(normalize(720.0), 0.0);
        assert!(normalize(-1e-20) < FULL_TURN);
    }

    #[test]
    fn test_circle_size_tiers() {
        let cases = vec![
            (1, CircleSize::Small),
            (3, CircleSize::Small),
            (5, CircleSize::Small),
            (6, CircleSize::Medium),
            (10, CircleSize::Medium),
            (11, CircleSize::Large),
            (15, CircleSize::Large),
            (16, CircleSize::Huge),
            (40, CircleSize::Huge),
        ];
        for (count, expected) in cases {
            assert_eq!(CircleSize::for_count(count), expected);
        }
        assert_eq!(CircleSize::Large.to_string(), "circle-gallery-11-15");
    }
}
