/*
 * Everything the control tasks share: the room, the reset handoff and the
 * output devices.
 *
 * One instance is created by the firmware root and every task gets a
 * reference to it. The display and the buzzer are each guarded by an async
 * mutex so that a render or a tone runs to completion before another task
 * gets the device. The lamp triple is written under a blocking mutex; setting
 * three pins never waits.
 */

use crate::board::{Board, RgbOutput, ToneEmitter};
use crate::config::Timing;
use crate::display::{self, Status};
use crate::indicator::Indicator;
use crate::room::Room;
use crate::signal::ResetSignal;
use core::cell::RefCell;
use embassy_sync::{
    blocking_mutex::{self, raw::CriticalSectionRawMutex},
    mutex::Mutex,
};
use log::warn;

pub struct Shared<B: Board> {
    room: Room,
    reset: ResetSignal,
    display: Mutex<CriticalSectionRawMutex, B::Display>,
    rgb: blocking_mutex::Mutex<CriticalSectionRawMutex, RefCell<B::Rgb>>,
    buzzer: Mutex<CriticalSectionRawMutex, B::Buzzer>,
    timing: Timing,
}

impl<B: Board> Shared<B> {
    pub fn new(display: B::Display, rgb: B::Rgb, buzzer: B::Buzzer) -> Self {
        Self::with_timing(display, rgb, buzzer, Timing::DEFAULT)
    }

    pub fn with_timing(display: B::Display, rgb: B::Rgb, buzzer: B::Buzzer, timing: Timing) -> Self {
        Shared {
            room: Room::new(),
            reset: ResetSignal::new(),
            display: Mutex::new(display),
            rgb: blocking_mutex::Mutex::new(RefCell::new(rgb)),
            buzzer: Mutex::new(buzzer),
            timing,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn reset_signal(&self) -> &ResetSignal {
        &self.reset
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Draws the status screen with the current count. The display stays
    /// locked for the whole screen and no longer.
    pub async fn announce(&self, status: Status) {
        let mut screen = self.display.lock().await;
        let occupancy = self.room.occupancy();
        if let Err(err) = display::render(&mut *screen, occupancy, status).await {
            warn!("display flush failed: {:?}", err);
        }
    }

    /// Recomputes the indicator from the current count and lights it.
    pub fn refresh_indicator(&self) -> Indicator {
        let indicator = self.room.indicator();
        self.rgb.lock(|rgb| rgb.borrow_mut().show(indicator.rgb()));
        indicator
    }

    /// The denial and confirmation beep.
    pub async fn sound_alert(&self) {
        let mut buzzer = self.buzzer.lock().await;
        buzzer
            .play_tone(self.timing.tone_frequency_hz, self.timing.tone_duration)
            .await;
    }
}
