use crate::gui::stage::{
    ACTIVE_SLOT_GROWTH, COMPACT_SCALE, ICON_SIZE, MAX_SLOT_RADIUS, MIN_SLOT_RADIUS, RING_CENTER_Y,
    RING_FRACTION, SLOT_FRACTION,
};
use gdk_pixbuf::Pixbuf;
use orbit_core::item::Item;
use orbit_core::layout::Layout;
use orbit_core::surface::{Motion, Scene};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone)]
pub struct SlotGeometry {
    pub center: Point,
    pub radius: f64,
}

impl SlotGeometry {
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

/// Eased move of the drawn ring angle towards the controller's rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start: Instant,
    pub duration: Duration,
}

impl Tween {
    /// Ease-out quad, close to the classic `cubic-bezier(0.25, 0.46, 0.45, 0.94)`.
    fn ease(t: f64) -> f64 {
        1.0 - (1.0 - t) * (1.0 - t)
    }

    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (now.saturating_duration_since(self.start).as_secs_f64() / self.duration.as_secs_f64())
            .clamp(0.0, 1.0)
    }

    pub fn value(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * Self::ease(self.progress(now))
    }

    pub fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// What the drawing area renders: ring geometry, the displayed angle, item pictures.
pub struct Stage {
    pub layout: Layout,
    pub scene: Scene,
    pub center: Point,
    pub ring_radius: f64,
    pub slot_radius: f64,
    /// Angle actually drawn; trails `scene.rotation` while a tween runs.
    pub displayed: f64,
    pub titles: Vec<String>,
    pub pictures: Vec<Option<Pixbuf>>,
    tween: Option<Tween>,
    ticking: bool,
}

impl Stage {
    pub fn new(items: &[Item], layout: Layout, scene: Scene) -> Self {
        Self {
            layout,
            displayed: scene.rotation,
            scene,
            center: Point::default(),
            ring_radius: 0.0,
            slot_radius: 0.0,
            titles: items.iter().map(|i| i.title.clone()).collect(),
            pictures: items.iter().map(Self::load_picture).collect(),
            tween: None,
            ticking: false,
        }
    }

    fn load_picture(item: &Item) -> Option<Pixbuf> {
        let path = item.visual.as_ref()?;
        Pixbuf::from_file_at_scale(path.as_str(), ICON_SIZE, ICON_SIZE, true)
            .map_err(|e| log::warn!("Failed to load image '{}': {}", path, e))
            .ok()
    }

    /// Recomputes ring geometry for a viewport of `width` x `height`.
    pub fn resize(&mut self, width: f64, height: f64, compact_below: f64) {
        let compact = if width <= compact_below {
            COMPACT_SCALE
        } else {
            1.0
        };
        let tier = self.scene.circle_size.scale();
        self.center = Point::new(width / 2.0, height * RING_CENTER_Y);
        self.ring_radius = width.min(height) * RING_FRACTION * compact;

        // keep neighbouring slots from overlapping on crowded rings
        let chord = 2.0 * self.ring_radius * (self.layout.step().to_radians() / 2.0).sin();
        self.slot_radius = (self.ring_radius * SLOT_FRACTION * tier)
            .min(chord * 0.45)
            .clamp(MIN_SLOT_RADIUS, MAX_SLOT_RADIUS);
    }

    /// Adopts a new scene. Returns true when a tween was started and needs frame ticks.
    pub fn sync(&mut self, scene: &Scene, layout: Layout, transition: Duration, now: Instant) -> bool {
        self.layout = layout;
        let rotation_changed = scene.rotation != self.scene.rotation;
        let motion = scene.motion;
        self.scene = scene.clone();

        if !rotation_changed {
            return false;
        }
        match motion {
            Motion::Eased if !transition.is_zero() => {
                self.tween = Some(Tween {
                    from: self.displayed,
                    to: scene.rotation,
                    start: now,
                    duration: transition,
                });
                true
            }
            _ => {
                self.tween = None;
                self.displayed = scene.rotation;
                false
            }
        }
    }

    /// Steps the running tween. Returns true while more frames are needed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        self.displayed = tween.value(now);
        if tween.is_done(now) {
            self.displayed = tween.to;
            self.tween = None;
        }
        self.tween.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Marks the frame-tick callback as running; returns false if it already was.
    pub fn claim_ticking(&mut self) -> bool {
        !std::mem::replace(&mut self.ticking, true)
    }

    pub fn release_ticking(&mut self) {
        self.ticking = false;
    }

    pub fn slot_geometry(&self, index: usize) -> SlotGeometry {
        let angle = self.layout.screen_angle(index, self.displayed).to_radians();
        let radius = if self.scene.is_active(index) {
            self.slot_radius * ACTIVE_SLOT_GROWTH
        } else {
            self.slot_radius
        };
        SlotGeometry {
            center: Point::new(
                self.center.x + self.ring_radius * angle.cos(),
                self.center.y + self.ring_radius * angle.sin(),
            ),
            radius,
        }
    }

    /// Where the active slot sits on screen.
    pub fn marker_position(&self) -> Point {
        let angle = self.scene.active_slot.to_radians();
        let reach = self.ring_radius + self.slot_radius * ACTIVE_SLOT_GROWTH + 12.0;
        Point::new(
            self.center.x + reach * angle.cos(),
            self.center.y + reach * angle.sin(),
        )
    }

    /// The item under `point`. The active item wins when slots overlap.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let count = self.layout.count();
        let active = self.scene.active.filter(|&i| i < count);
        active
            .into_iter()
            .chain((0..count).filter(|&i| Some(i) != active))
            .find(|&i| self.slot_geometry(i).contains(point))
    }
}
