use core::sync::atomic::{AtomicBool, Ordering};

/// Flag shared between the main loop and the button wake interrupt.
///
/// The main loop arms it right before halting and keeps halting while it
/// stays armed. The interrupt handler fires it, which disarms it. Firing an
/// unarmed latch does nothing, so the handler only touches the wake source
/// once per sleep.
pub struct WakeLatch {
    armed: AtomicBool,
}

impl WakeLatch {
    pub const fn new() -> Self {
        Self {
            armed: AtomicBool::new(false),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Disarms the latch. Returns `true` only for the first call after `arm`.
    pub fn fire(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }
}

pub static WAKE_LATCH: WakeLatch = WakeLatch::new();
