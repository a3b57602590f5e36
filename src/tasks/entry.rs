use crate::board::{Board, Sensor};
use crate::display::Status;
use crate::room::Admission;
use crate::shared::Shared;
use embassy_time::Timer;
use log::info;

/*
 * Idle until the sensor reads pressed. Then the token pool decides: a granted
 * place is counted and shown, a full room is refused with a beep. Either way
 * the task holds for the debounce interval before looking at the sensor
 * again.
 */
pub struct EntryTask<'a, B: Board, S: Sensor> {
    shared: &'a Shared<B>,
    sensor: S,
}

impl<'a, B: Board, S: Sensor> EntryTask<'a, B, S> {
    pub fn new(shared: &'a Shared<B>, sensor: S) -> Self {
        EntryTask { shared, sensor }
    }

    /// One sample of the sensor. Returns the admission decision if the sensor
    /// was pressed.
    pub async fn poll_once(&mut self) -> Option<Admission> {
        let timing = *self.shared.timing();

        let admission = if self.sensor.is_asserted() {
            let admission = self.shared.room().try_enter();
            match admission {
                Admission::Granted { occupancy } => {
                    info!("entry authorized, {} inside", occupancy);
                    self.shared.announce(Status::EntryAuthorized).await;
                    self.shared.refresh_indicator();
                }
                Admission::Denied => {
                    info!("access denied, room is full");
                    self.shared.announce(Status::AccessDenied).await;
                    self.shared.sound_alert().await;
                }
            }
            Timer::after(timing.debounce).await;
            Some(admission)
        } else {
            None
        };

        Timer::after(timing.poll_interval).await;
        admission
    }

    pub async fn run(mut self) -> ! {
        loop {
            self.poll_once().await;
        }
    }
}
