//! Headless core of the orbit gallery: ring geometry, the rotation/selection state machine,
//! the info panel sequence and the seams (`Surface`, `Scheduler`) a host plugs into.

pub mod command;
pub mod error;
pub mod gallery;
pub mod item;
pub mod layout;
pub mod macros;
pub mod options;
pub mod panel;
pub mod registry;
pub mod surface;
pub mod timer;

pub use command::{GalleryCommand, Request};
pub use error::{CommandError, GalleryError};
pub use gallery::{Gallery, GalleryControl, GalleryState, Mode, NavKey, Trigger};
pub use item::{Item, Visual};
pub use layout::{CircleSize, Layout};
pub use options::{Options, OptionsPatch};
pub use panel::{PanelContent, PanelField};
pub use registry::{GalleryId, Registry};
pub use surface::{Motion, Scene, Surface};
pub use timer::{ManualScheduler, Scheduler, Timer, TimerHandle};
