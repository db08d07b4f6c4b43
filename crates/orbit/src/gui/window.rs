use crate::config::{WindowConfig, WindowLayer};
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, Layer, LayerShell};

impl From<WindowLayer> for Layer {
    fn from(layer: WindowLayer) -> Self {
        match layer {
            WindowLayer::Background => Layer::Background,
            WindowLayer::Bottom => Layer::Bottom,
            WindowLayer::Top => Layer::Top,
            WindowLayer::Overlay => Layer::Overlay,
        }
    }
}

/// Sizes the window, or pins it full-screen to a layer-shell layer when one is configured.
pub fn init_window(window: &gtk::ApplicationWindow, config: &WindowConfig) {
    window.set_default_size(config.width, config.height);

    let Some(layer) = config.layer else {
        return;
    };
    if !gtk4_layer_shell::is_supported() {
        log::warn!("Layer shell is not supported here, opening a regular window");
        return;
    }

    window.init_layer_shell();
    window.set_layer(layer.into());
    window.set_namespace(Some("orbit"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(gtk4_layer_shell::KeyboardMode::OnDemand);
    log::info!("Pinned gallery to the {} layer", layer);
}
