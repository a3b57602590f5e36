/*
 * The seams between the control logic and the hardware.
 *
 * The firmware binary implements these for the DESPI-M02 board; the tests
 * implement them with recorders. Nothing in the library touches a pin.
 */

use crate::display::DisplaySink;
use crate::indicator::Rgb;
use embassy_time::Duration;

/// A digital input read as a level. Implementations deal with active-low
/// wiring, so `true` always means "pressed".
pub trait Sensor {
    fn is_asserted(&mut self) -> bool;
}

/// The three indicator lamps, always set as one triple.
pub trait RgbOutput {
    fn show(&mut self, rgb: Rgb);
}

#[allow(async_fn_in_trait)]
pub trait ToneEmitter {
    /// Sounds a tone and returns when it is over.
    async fn play_tone(&mut self, frequency_hz: u32, duration: Duration);
}

/// The output devices one board brings to the shared state.
pub trait Board {
    type Display: DisplaySink;
    type Rgb: RgbOutput;
    type Buzzer: ToneEmitter;
}
