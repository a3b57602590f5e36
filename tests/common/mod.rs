#![allow(dead_code)]

use embassy_time::{Duration, Instant};
use roomguard::{Board, DisplaySink, Rgb, RgbOutput, Sensor, TextFrame, Timing, ToneEmitter};
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub struct Bench;

impl Board for Bench {
    type Display = FrameRecorder;
    type Rgb = LampRecorder;
    type Buzzer = ToneRecorder;
}

/// Every flushed frame, one string per frame with rows joined by newlines.
#[derive(Clone, Default)]
pub struct Frames(Arc<Mutex<Vec<String>>>);

impl Frames {
    pub fn all(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.0.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

pub struct FrameRecorder {
    frame: TextFrame,
    flushed: Frames,
}

impl DisplaySink for FrameRecorder {
    type Error = Infallible;

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

    async fn flush(&mut self) -> Result<(), Infallible> {
        let text: Vec<&str> = self.frame.rows().map(str::trim_end).collect();
        self.flushed.0.lock().unwrap().push(text.join("\n"));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct LampRecorder(Arc<Mutex<Vec<Rgb>>>);

impl LampRecorder {
    pub fn last(&self) -> Option<Rgb> {
        self.0.lock().unwrap().last().copied()
    }
}

impl RgbOutput for LampRecorder {
    fn show(&mut self, rgb: Rgb) {
        self.0.lock().unwrap().push(rgb);
    }
}

/// Records tones without sounding them.
#[derive(Clone, Default)]
pub struct ToneRecorder(Arc<Mutex<Vec<(u32, Duration)>>>);

impl ToneRecorder {
    pub fn all(&self) -> Vec<(u32, Duration)> {
        self.0.lock().unwrap().clone()
    }
}

impl ToneEmitter for ToneRecorder {
    async fn play_tone(&mut self, frequency_hz: u32, duration: Duration) {
        self.0.lock().unwrap().push((frequency_hz, duration));
    }
}

/// A button the test presses and releases.
#[derive(Clone, Default)]
pub struct Button(Arc<AtomicBool>);

impl Button {
    pub fn pressed() -> Self {
        let button = Button::default();
        button.press();
        button
    }

    pub fn press(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Sensor for Button {
    fn is_asserted(&mut self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// A button held down for a fixed time from its creation.
pub struct HeldFor {
    until: Instant,
}

impl HeldFor {
    pub fn new(hold: Duration) -> Self {
        HeldFor {
            until: Instant::now() + hold,
        }
    }
}

impl Sensor for HeldFor {
    fn is_asserted(&mut self) -> bool {
        Instant::now() < self.until
    }
}

pub const FAST: Timing = Timing {
    poll_interval: Duration::from_millis(1),
    debounce: Duration::from_millis(5),
    tone_frequency_hz: roomguard::config::TONE_FREQUENCY_HZ,
    tone_duration: roomguard::config::TONE_DURATION,
};

pub struct Rig {
    pub shared: roomguard::Shared<Bench>,
    pub frames: Frames,
    pub lamps: LampRecorder,
    pub tones: ToneRecorder,
}

impl Rig {
    pub fn new(timing: Timing) -> Self {
        let frames = Frames::default();
        let lamps = LampRecorder::default();
        let tones = ToneRecorder::default();
        let display = FrameRecorder {
            frame: TextFrame::new(),
            flushed: frames.clone(),
        };
        let shared = roomguard::Shared::with_timing(display, lamps.clone(), tones.clone(), timing);
        Rig {
            shared,
            frames,
            lamps,
            tones,
        }
    }

    /// A rig whose room already holds `inside` people.
    pub fn with_occupancy(inside: u8) -> Self {
        let rig = Rig::new(FAST);
        for _ in 0..inside {
            rig.shared.room().try_enter();
        }
        assert_eq!(rig.shared.room().occupancy(), inside);
        rig
    }

    pub fn assert_lockstep(&self) {
        let room = self.shared.room();
        assert!(room.occupancy() <= roomguard::CAPACITY);
        assert_eq!(room.occupancy() + room.tokens_available(), roomguard::CAPACITY);
    }
}
