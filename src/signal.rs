/*
 * The reset handoff from interrupt context to the reset task.
 *
 * A single-slot signal: raising it while a reset is already pending leaves
 * one pending reset, which drains the room just the same. Raising never
 * blocks and never allocates, so it is safe from an interrupt handler.
 */

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

pub struct ResetSignal {
    pending: Signal<CriticalSectionRawMutex, ()>,
}

impl ResetSignal {
    pub const fn new() -> Self {
        ResetSignal {
            pending: Signal::new(),
        }
    }

    pub fn raise(&self) {
        self.pending.signal(());
    }

    /// Suspends until a reset is raised and consumes it.
    pub async fn wait(&self) {
        self.pending.wait().await
    }

    pub fn is_pending(&self) -> bool {
        self.pending.signaled()
    }

    /// Drops a pending reset, if any.
    pub fn clear(&self) {
        self.pending.reset();
    }
}

impl Default for ResetSignal {
    fn default() -> Self {
        ResetSignal::new()
    }
}

/*
 * Body of the falling-edge interrupt on the reset line: signal and return.
 * Waking the reset task makes its higher priority executor pend, which is the
 * context switch on interrupt exit. Nothing here may block, draw or log.
 */
#[inline]
pub fn on_reset_edge(signal: &ResetSignal) {
    signal.raise();
}
