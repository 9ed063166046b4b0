// Initialize-once global state.
//
// `SharedService` can only be reached through `shared()`. The constructor is
// private to this module, so there is exactly one instance per process.
// Reach for this only when uniqueness actually matters.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

pub struct SharedService {
    calls: AtomicUsize,
}

impl SharedService {
    fn new() -> Self {
        info!("SharedService initialized");
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn shared() -> &'static SharedService {
        static INSTANCE: OnceLock<SharedService> = OnceLock::new();
        INSTANCE.get_or_init(SharedService::new)
    }

    /// Returns the call count including this one.
    pub fn do_something(&self) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
