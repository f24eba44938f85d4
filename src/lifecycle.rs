use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Tracks whether a screen is still open.
///
/// Every async remote call that would mutate screen state is handed a clone
/// of the screen's guard; results that land after `unmount` are dropped.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    /// A guard for a freshly mounted screen.
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
