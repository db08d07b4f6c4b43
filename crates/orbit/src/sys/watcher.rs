use crate::config::{ConfigError, config_path};
use crate::events::AppEvent;
use async_channel::{Receiver, Sender};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::time::Duration;

/// Editors tend to write a file in several steps; bursts within this window reload once.
const DEBOUNCE: Duration = Duration::from_millis(150);

fn touches(event: &Event, path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == path)
}

/// Watches the directory rather than the file so the config can be created or replaced.
fn watch_dir(dir: &Path) -> Result<(RecommendedWatcher, Receiver<notify::Result<Event>>), ConfigError> {
    fs_err::create_dir_all(dir)?;
    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok((watcher, bridge_rx))
}

pub async fn watch_config(tx: Sender<AppEvent>) {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            log::error!("Config watcher disabled: {}", e);
            return;
        }
    };
    let Some(dir) = path.parent() else {
        return;
    };
    // the watcher stops when dropped
    let (_watcher, events) = match watch_dir(dir) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("Config watcher disabled: {}", e);
            return;
        }
    };
    log::debug!("Watching {}", dir.display());

    while let Ok(res) = events.recv().await {
        match res {
            Ok(event) if touches(&event, &path) => {
                tokio::time::sleep(DEBOUNCE).await;
                while events.try_recv().is_ok() {}
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind};
    use std::path::PathBuf;

    #[test]
    fn test_only_config_writes_trigger_reload() {
        let config = PathBuf::from("/home/u/.config/orbit/config.toml");
        let other = PathBuf::from("/home/u/.config/orbit/config.toml~");

        let write = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(config.clone());
        assert!(touches(&write, &config));

        let created = Event::new(EventKind::Create(CreateKind::File)).add_path(config.clone());
        assert!(touches(&created, &config));

        let backup = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(other);
        assert!(!touches(&backup, &config));

        let access = Event::new(EventKind::Access(notify::event::AccessKind::Any)).add_path(config.clone());
        assert!(!touches(&access, &config));
    }
}
