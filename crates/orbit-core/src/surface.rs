use crate::layout::CircleSize;
use crate::panel::{PanelContent, PanelField};
use strum::EnumCount;

/// How a rotation change should be presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Motion {
    /// Jump straight to the new angle.
    #[default]
    Instant,
    /// Animate over the configured transition speed.
    Eased,
}

/// The host's visual layer. The panel methods default to no-ops so a host without an info
/// panel only renders the ring.
pub trait Surface {
    fn set_circle_size(&mut self, size: CircleSize);
    fn set_active_slot(&mut self, degrees: f64);
    fn rotate(&mut self, degrees: f64, motion: Motion);
    /// Marks `index` active and clears the marker from every other item.
    fn mark_active(&mut self, index: usize);

    fn set_field_visible(&mut self, _field: PanelField, _visible: bool) {}
    fn set_panel_content(&mut self, _content: &PanelContent) {}
    fn set_description(&mut self, _text: &str) {}
}

/// Render state snapshot. Hosts that redraw from data (rather than mutating widgets in place)
/// read the scene after each gallery call.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub circle_size: CircleSize,
    pub active_slot: f64,
    pub rotation: f64,
    pub motion: Motion,
    pub active: Option<usize>,
    pub panel: PanelContent,
    pub visible: [bool; PanelField::COUNT],
    /// Bumped on every change so hosts can skip redundant redraws.
    pub revision: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            circle_size: CircleSize::Small,
            active_slot: 0.0,
            rotation: 0.0,
            motion: Motion::Instant,
            active: None,
            panel: PanelContent::default(),
            visible: [false; PanelField::COUNT],
            revision: 0,
        }
    }
}

impl Scene {
    pub fn is_visible(&self, field: PanelField) -> bool {
        self.visible[field.as_index()]
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Surface for Scene {
    fn set_circle_size(&mut self, size: CircleSize) {
        self.circle_size = size;
        self.touch();
    }

    fn set_active_slot(&mut self, degrees: f64) {
        self.active_slot = degrees;
        self.touch();
    }

    fn rotate(&mut self, degrees: f64, motion: Motion) {
        self.rotation = degrees;
        self.motion = motion;
        self.touch();
    }

    fn mark_active(&mut self, index: usize) {
        self.active = Some(index);
        self.touch();
    }

    fn set_field_visible(&mut self, field: PanelField, visible: bool) {
        self.visible[field.as_index()] = visible;
        self.touch();
    }

    fn set_panel_content(&mut self, content: &PanelContent) {
        self.panel = content.clone();
        self.touch();
    }

    fn set_description(&mut self, text: &str) {
        self.panel.description = text.to_string();
        self.touch();
    }
}
