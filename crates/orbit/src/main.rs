use orbit::config;
use orbit::gui::app::{AppInit, AppModel};
use orbit::gui::scheduler::GlibScheduler;
use orbit::sys::runtime;
use orbit_core::gallery::Gallery;
use orbit_core::registry::Registry;
use orbit_core::surface::Scene;
use relm4::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config::load_or_setup();
    let (tx, rx) = async_channel::unbounded();

    // Start Background Services
    runtime::start_background_services(tx.clone());

    let app = RelmApp::new("org.orbit.gallery");

    let gallery = Gallery::new(
        config.gallery_items(),
        config.gallery.clone(),
        config.window.width as f64,
        Scene::default(),
        GlibScheduler::new(tx),
    )?;
    let (id, gallery) = Registry::global().register(gallery);

    app.run::<AppModel>(AppInit {
        id,
        gallery,
        config,
        rx,
    });
    Ok(())
}
