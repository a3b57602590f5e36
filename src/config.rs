/*
 * Compile-time constants for the room guard.
 *
 * Capacity is fixed at build time. The intervals are bundled into `Timing` so
 * that the control loops can be exercised on a host with shorter waits; the
 * firmware always runs with `Timing::DEFAULT`.
 */

use embassy_time::Duration;

/// Maximum number of people allowed in the room at the same time.
pub const CAPACITY: u8 = 8;

/// Sleep between two reads of an idle entry or exit sensor.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Hold after a handled press, so that one press counts once.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

pub const TONE_FREQUENCY_HZ: u32 = 2000;
pub const TONE_DURATION: Duration = Duration::from_millis(200);

// Panel geometry, in pixels. The font is a fixed 8x8 cell.
pub const DISPLAY_WIDTH: u8 = 128;
pub const DISPLAY_HEIGHT: u8 = 64;
pub const GLYPH_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub poll_interval: Duration,
    pub debounce: Duration,
    pub tone_frequency_hz: u32,
    pub tone_duration: Duration,
}

impl Timing {
    pub const DEFAULT: Timing = Timing {
        poll_interval: POLL_INTERVAL,
        debounce: DEBOUNCE,
        tone_frequency_hz: TONE_FREQUENCY_HZ,
        tone_duration: TONE_DURATION,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Timing::DEFAULT
    }
}
