/*
 * Occupancy guard for a room with a fixed number of places.
 *
 * An entry button admits people while there is room, an exit button lets
 * them out and a reset button, wired to an edge interrupt, empties the count.
 * The count is bounded by a token pool; a display, an RGB lamp and a buzzer
 * report what happened.
 *
 * The library holds all of the logic and is independent of the board. The
 * firmware binary (feature `firmware`) binds it to the DESPI-M02 pins.
 */

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod config;
pub mod display;
pub mod indicator;
pub mod room;
pub mod shared;
pub mod signal;
pub mod tasks;

pub use board::{Board, RgbOutput, Sensor, ToneEmitter};
pub use config::{CAPACITY, Timing};
pub use display::{DisplaySink, Status, TextFrame};
pub use indicator::{Indicator, Lamp, Rgb};
pub use room::{Admission, Departure, Room};
pub use shared::Shared;
pub use signal::{ResetSignal, on_reset_edge};
pub use tasks::{EntryTask, ExitTask, ResetTask};
