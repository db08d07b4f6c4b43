use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Builder;

/// Runs the control socket and the config watcher on a dedicated tokio runtime. Both only talk
/// to the UI through `tx`.
pub fn start_background_services(tx: Sender<AppEvent>) {
    let spawned = thread::Builder::new()
        .name("orbit-services".into())
        .spawn(move || {
            let rt = match Builder::new_multi_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create Tokio runtime: {}", e);
                    return;
                }
            };

            rt.block_on(async {
                let server = tokio::spawn(crate::sys::server::run_server(tx.clone()));
                let watcher = tokio::spawn(crate::sys::watcher::watch_config(tx));

                let (server, watcher) = tokio::join!(server, watcher);
                if let Err(e) = server {
                    log::error!("Control socket task failed: {}", e);
                }
                if let Err(e) = watcher {
                    log::error!("Config watcher task failed: {}", e);
                }
                std::future::pending::<()>().await;
            });
        });

    if let Err(e) = spawned {
        log::error!("Failed to start background services: {}", e);
    }
}
