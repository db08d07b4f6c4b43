use crate::command::{GalleryCommand, Request};
use crate::gallery::{GalleryControl, NavKey};
use derive_more::{Display, From, Into};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

pub type SharedGallery = Arc<Mutex<dyn GalleryControl + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct GalleryId(u64);

#[derive(Default)]
struct Entries {
    galleries: BTreeMap<GalleryId, SharedGallery>,
    default: Option<GalleryId>,
    focused: Option<GalleryId>,
}

/// Live gallery instances of this process. The first registered instance becomes the default.
pub struct Registry {
    next_id: AtomicU64,
    entries: RwLock<Entries>,
}

static GLOBAL: OnceLock<Registry> = OnceLock::new();

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: RwLock::new(Entries::default()),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Takes ownership of `gallery`, returning its id and a typed handle for the host.
    pub fn register<G>(&self, gallery: G) -> (GalleryId, Arc<Mutex<G>>)
    where
        G: GalleryControl + Send + 'static,
    {
        let id = GalleryId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let shared = Arc::new(Mutex::new(gallery));
        let erased: SharedGallery = shared.clone();

        let mut entries = self.entries.write();
        entries.galleries.insert(id, erased);
        entries.default.get_or_insert(id);
        log::debug!("Registered gallery {}", id);

        (id, shared)
    }

    pub fn get(&self, id: GalleryId) -> Option<SharedGallery> {
        self.entries.read().galleries.get(&id).cloned()
    }

    pub fn default_id(&self) -> Option<GalleryId> {
        self.entries.read().default
    }

    pub fn default_instance(&self) -> Option<SharedGallery> {
        let entries = self.entries.read();
        entries.default.and_then(|id| entries.galleries.get(&id).cloned())
    }

    pub fn set_default(&self, id: GalleryId) -> bool {
        let mut entries = self.entries.write();
        let known = entries.galleries.contains_key(&id);
        if known {
            entries.default = Some(id);
        }
        known
    }

    pub fn ids(&self) -> Vec<GalleryId> {
        self.entries.read().galleries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hands keyboard ownership to `id`.
    pub fn focus(&self, id: GalleryId) {
        let mut entries = self.entries.write();
        if entries.galleries.contains_key(&id) {
            entries.focused = Some(id);
        }
    }

    pub fn focused_id(&self) -> Option<GalleryId> {
        let entries = self.entries.read();
        entries.focused.or(entries.default)
    }

    /// Delivers an arrow key to the focused instance only, falling back to the default.
    pub fn route_key(&self, key: NavKey) -> Option<GalleryId> {
        let id = self.focused_id()?;
        let gallery = self.get(id)?;
        gallery.lock().press_key(key);
        Some(id)
    }

    /// Applies a control request to its target (or the default instance).
    pub fn dispatch(&self, request: &Request) -> Option<GalleryId> {
        let id = request.target.or_else(|| self.default_id())?;
        let Some(gallery) = self.get(id) else {
            log::warn!("No gallery {} for '{}'", id, request);
            return None;
        };
        let mut gallery = gallery.lock();
        match request.command {
            GalleryCommand::Pause => gallery.pause(),
            GalleryCommand::Resume => gallery.resume(),
            GalleryCommand::Next => gallery.next(),
            GalleryCommand::Previous => gallery.previous(),
            GalleryCommand::GoTo(index) => match usize::try_from(index) {
                Ok(index) => gallery.go_to(index),
                Err(_) => log::debug!("Ignoring negative index {}", index),
            },
        }
        Some(id)
    }

    /// Disposes and forgets `id`. Returns false for unknown ids.
    pub fn dispose(&self, id: GalleryId) -> bool {
        let removed = {
            let mut entries = self.entries.write();
            let removed = entries.galleries.remove(&id);
            if entries.default == Some(id) {
                entries.default = entries.galleries.keys().next().copied();
            }
            if entries.focused == Some(id) {
                entries.focused = None;
            }
            removed
        };
        match removed {
            Some(gallery) => {
                gallery.lock().dispose();
                log::debug!("Disposed gallery {}", id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;
    use crate::item::Item;
    use crate::options::Options;
    use crate::surface::Scene;
    use crate::timer::ManualScheduler;

    fn gallery(n: usize) -> Gallery<Scene, ManualScheduler> {
        let items = (0..n)
            .map(|i| Item::new(format!("Item {i}"), "", ""))
            .collect();
        Gallery::new(items, Options::default(), 1280.0, Scene::default(), ManualScheduler::new())
            .unwrap()
    }

    #[test]
    fn test_first_registration_becomes_default() {
        let registry = Registry::new();
        let (a, _) = registry.register(gallery(3));
        let (b, _) = registry.register(gallery(4));

        assert_ne!(a, b);
        assert_eq!(registry.default_id(), Some(a));
        assert_eq!(registry.len(), 2);
        let default_count = |r: &Registry| r.default_instance().map(|g| g.lock().state().item_count);
        assert_eq!(default_count(&registry), Some(3));

        assert!(registry.set_default(b));
        assert_eq!(registry.default_id(), Some(b));
        assert_eq!(default_count(&registry), Some(4));
        assert!(!registry.set_default(GalleryId::from(99)));
        assert_eq!(default_count(&registry), Some(4));

        assert!(registry.dispose(b));
        assert_eq!(registry.default_id(), Some(a));
        assert_eq!(default_count(&registry), Some(3));

        assert!(registry.dispose(a));
        assert!(registry.default_instance().is_none());
    }

    #[test]
    fn test_instances_are_independent() {
        let registry = Registry::new();
        let (a, first) = registry.register(gallery(6));
        let (_, second) = registry.register(gallery(6));

        registry.dispatch(&Request::new(Some(a), GalleryCommand::GoTo(4)));

        assert_eq!(first.lock().state().current_index, 4);
        assert_eq!(second.lock().state().current_index, 0);
    }

    #[test]
    fn test_dispatch_defaults_and_ignores_negative_index() {
        let registry = Registry::new();
        let (id, handle) = registry.register(gallery(5));

        let before = handle.lock().state();
        assert_eq!(registry.dispatch(&"goto -1".parse().unwrap()), Some(id));
        assert_eq!(registry.dispatch(&"goto 5".parse().unwrap()), Some(id));
        assert_eq!(handle.lock().state(), before);

        registry.dispatch(&"pause".parse().unwrap());
        assert!(!handle.lock().state().auto_rotating);
        registry.dispatch(&"previous".parse().unwrap());
        assert_eq!(handle.lock().state().current_index, 4);
    }

    #[test]
    fn test_keys_go_to_focused_instance_only() {
        let registry = Registry::new();
        let (a, first) = registry.register(gallery(6));
        let (b, second) = registry.register(gallery(6));

        assert_eq!(registry.route_key(NavKey::ArrowRight), Some(a));
        registry.focus(b);
        assert_eq!(registry.route_key(NavKey::ArrowRight), Some(b));
        assert_eq!(registry.route_key(NavKey::ArrowRight), Some(b));

        assert_eq!(first.lock().state().current_index, 1);
        assert_eq!(second.lock().state().current_index, 2);
    }

    #[test]
    fn test_dispose_removes_and_reassigns_default() {
        let registry = Registry::new();
        let (a, first) = registry.register(gallery(3));
        let (b, _) = registry.register(gallery(3));
        registry.focus(a);

        assert!(registry.dispose(a));
        assert!(first.lock().is_disposed());
        assert!(registry.get(a).is_none());
        assert_eq!(registry.default_id(), Some(b));
        assert_eq!(registry.focused_id(), Some(b));
        assert!(!registry.dispose(a));

        assert!(registry.dispose(b));
        assert!(registry.is_empty());
        assert_eq!(registry.dispatch(&"next".parse().unwrap()), None);
    }
}
