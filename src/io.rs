/*
 * The I/O module for the room guard.
 *
 * This is the only part of the firmware that knows about the DESPI-M02 pins.
 * It implements the library's board traits: active-low push buttons, the RGB
 * lamp, a buzzer and a text display. The display is a serial terminal on
 * USART1 that shows the same 16x8 character screen an OLED panel would.
 */

use embassy_stm32::{
    gpio::{Input, Level, Output},
    mode::Async,
    usart::{self, Uart},
};
use embassy_time::{Duration, Instant, Timer};
use enum_ordinalize::Ordinalize;
use roomguard::{Board, DisplaySink, Lamp, Rgb, RgbOutput, Sensor, TextFrame, ToneEmitter};

pub struct Despi;

impl Board for Despi {
    type Display = TerminalDisplay;
    type Rgb = RgbLamp;
    type Buzzer = Buzzer;
}

// The buttons pull the line to ground, so pressed reads low.
pub struct ActiveLow(pub Input<'static>);

impl Sensor for ActiveLow {
    fn is_asserted(&mut self) -> bool {
        self.0.is_low()
    }
}

pub struct RgbLamp {
    outputs: [Output<'static>; Lamp::VARIANT_COUNT],
    active_lows: [bool; Lamp::VARIANT_COUNT],
}

impl RgbLamp {
    pub fn new(red: Output<'static>, green: Output<'static>, blue: Output<'static>) -> Self {
        RgbLamp {
            outputs: [red, green, blue],
            active_lows: [false; Lamp::VARIANT_COUNT],
        }
    }
}

impl RgbOutput for RgbLamp {
    fn show(&mut self, rgb: Rgb) {
        let levels = rgb.levels(self.active_lows);
        for (output, high) in self.outputs.iter_mut().zip(levels) {
            output.set_level(if high { Level::High } else { Level::Low });
        }
    }
}

/*
 * A passive buzzer driven by toggling its pin at twice the tone frequency. The
 * task doing the beep is suspended between edges, so other tasks keep
 * running while it sounds.
 */
pub struct Buzzer(pub Output<'static>);

impl ToneEmitter for Buzzer {
    async fn play_tone(&mut self, frequency_hz: u32, duration: Duration) {
        if frequency_hz == 0 {
            Timer::after(duration).await;
            return;
        }

        let half_period = Duration::from_micros(500_000 / frequency_hz as u64);
        let end = Instant::now() + duration;
        while Instant::now() < end {
            self.0.toggle();
            Timer::after(half_period).await;
        }
        self.0.set_low();
    }
}

pub struct TerminalDisplay {
    uart: Uart<'static, Async>,
    frame: TextFrame,
}

impl TerminalDisplay {
    pub fn new(uart: Uart<'static, Async>) -> Self {
        TerminalDisplay {
            uart,
            frame: TextFrame::new(),
        }
    }
}

impl DisplaySink for TerminalDisplay {
    type Error = usart::Error;

    fn clear(&mut self) {
        self.frame.clear();
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) {
        self.frame.draw_text(text, x, y);
    }

    fn draw_hline(&mut self, x0: u8, x1: u8, y: u8) {
        self.frame.draw_hline(x0, x1, y);
    }

    fn draw_vline(&mut self, x: u8, y0: u8, y1: u8) {
        self.frame.draw_vline(x, y0, y1);
    }

    async fn flush(&mut self) -> Result<(), usart::Error> {
        // clear the terminal and home the cursor
        self.uart.write(b"\x1b[2J\x1b[H").await?;
        for row in self.frame.rows() {
            self.uart.write(row.as_bytes()).await?;
            self.uart.write(b"\r\n").await?;
        }
        Ok(())
    }
}
