/*
 * The capacity token pool: a counting semaphore that bounds how many people
 * can be inside.
 *
 * Each token is one free place in the room. Entry takes a token without
 * waiting, exit and reset give tokens back. The count lives behind a
 * critical-section mutex, because the reset task runs on a higher priority
 * executor than the entry and exit tasks.
 *
 * embassy-sync's semaphores cannot report their permit count and do not cap
 * `release`, both of which the room needs, so the pool keeps its own count.
 */

use core::cell::Cell;
use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

pub struct TokenPool {
    available: Mutex<CriticalSectionRawMutex, Cell<u8>>,
    capacity: u8,
}

impl TokenPool {
    /// A pool with all `capacity` tokens available.
    pub const fn new(capacity: u8) -> Self {
        TokenPool {
            available: Mutex::new(Cell::new(capacity)),
            capacity,
        }
    }

    /// Takes one token if there is one. Never waits.
    pub fn try_acquire(&self) -> bool {
        self.available.lock(|available| match available.get() {
            0 => false,
            tokens => {
                available.set(tokens - 1);
                true
            }
        })
    }

    /// Returns one token. A full pool stays full and `false` is returned.
    pub fn release(&self) -> bool {
        self.available.lock(|available| {
            let tokens = available.get();
            if tokens < self.capacity {
                available.set(tokens + 1);
                true
            } else {
                false
            }
        })
    }

    pub fn available(&self) -> u8 {
        self.available.lock(|available| available.get())
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }
}
