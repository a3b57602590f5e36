pub mod pool;
use pool::TokenPool;

use crate::config::CAPACITY;
use crate::indicator::Indicator;
use core::cell::Cell;
use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};

/// Result of an entry attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Granted { occupancy: u8 },
    Denied,
}

/// Result of an exit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    Left { occupancy: u8 },
    /// Nobody was inside. Nothing changed and no token was returned.
    Empty,
}

/*
 * The occupancy counter and the token pool, kept in lockstep.
 *
 * Every change of the counter happens inside the counter's critical section
 * and is paired with exactly one pool operation, the pool going first on
 * entry. Outside of those sections `occupancy + tokens_available == CAPACITY`
 * always holds.
 */
pub struct Room {
    occupancy: Mutex<CriticalSectionRawMutex, Cell<u8>>,
    pool: TokenPool,
}

impl Room {
    pub const fn new() -> Self {
        Room {
            occupancy: Mutex::new(Cell::new(0)),
            pool: TokenPool::new(CAPACITY),
        }
    }

    pub fn try_enter(&self) -> Admission {
        self.occupancy.lock(|occupancy| {
            if self.pool.try_acquire() {
                let inside = occupancy.get() + 1;
                occupancy.set(inside);
                Admission::Granted { occupancy: inside }
            } else {
                Admission::Denied
            }
        })
    }

    pub fn try_leave(&self) -> Departure {
        self.occupancy.lock(|occupancy| match occupancy.get() {
            0 => Departure::Empty,
            inside => {
                occupancy.set(inside - 1);
                self.pool.release();
                Departure::Left {
                    occupancy: inside - 1,
                }
            }
        })
    }

    /// Empties the room one person at a time and returns how many were let
    /// out. Each step is its own critical section.
    pub fn drain(&self) -> u8 {
        let mut drained = 0;
        while let Departure::Left { .. } = self.try_leave() {
            drained += 1;
        }
        drained
    }

    pub fn occupancy(&self) -> u8 {
        self.occupancy.lock(|occupancy| occupancy.get())
    }

    pub fn tokens_available(&self) -> u8 {
        self.pool.available()
    }

    pub fn indicator(&self) -> Indicator {
        Indicator::from_occupancy(self.occupancy())
    }
}

impl Default for Room {
    fn default() -> Self {
        Room::new()
    }
}
