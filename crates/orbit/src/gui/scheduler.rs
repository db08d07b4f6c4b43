use crate::events::AppEvent;
use async_channel::Sender;
use glib::{ControlFlow, SourceId};
use orbit_core::timer::{Scheduler, Timer, TimerHandle};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// `Scheduler` on the glib main loop. Fired timers come back as `AppEvent::Timer` through the
/// same channel as the background services, so they are handled in order on the UI thread.
pub struct GlibScheduler {
    tx: Sender<AppEvent>,
    next_handle: u64,
    // one-shot sources remove themselves when they fire; removing a finished source panics
    sources: Arc<Mutex<HashMap<TimerHandle, SourceId>>>,
}

impl GlibScheduler {
    pub fn new(tx: Sender<AppEvent>) -> Self {
        Self {
            tx,
            next_handle: 0,
            sources: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn allocate(&mut self) -> TimerHandle {
        self.next_handle += 1;
        TimerHandle::from(self.next_handle)
    }

    fn deliver(tx: &Sender<AppEvent>, timer: Timer) {
        if let Err(e) = tx.try_send(AppEvent::Timer(timer)) {
            log::error!("Failed to deliver {:?}: {}", timer, e);
        }
    }
}

impl Scheduler for GlibScheduler {
    fn once(&mut self, delay: Duration, timer: Timer) -> TimerHandle {
        let handle = self.allocate();
        let tx = self.tx.clone();
        let sources = self.sources.clone();
        let id = glib::timeout_add_local_once(delay, move || {
            sources.lock().remove(&handle);
            Self::deliver(&tx, timer);
        });
        self.sources.lock().insert(handle, id);
        handle
    }

    fn every(&mut self, period: Duration, timer: Timer) -> TimerHandle {
        let handle = self.allocate();
        let tx = self.tx.clone();
        let id = glib::timeout_add_local(period, move || {
            Self::deliver(&tx, timer);
            ControlFlow::Continue
        });
        self.sources.lock().insert(handle, id);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(id) = self.sources.lock().remove(&handle) {
            id.remove();
        }
    }

    fn cancel_all(&mut self) {
        let drained: Vec<SourceId> = self.sources.lock().drain().map(|(_, id)| id).collect();
        for id in drained {
            id.remove();
        }
    }
}

impl Drop for GlibScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
