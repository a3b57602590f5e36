use crate::board::{Board, Sensor};
use crate::display::Status;
use crate::room::Departure;
use crate::shared::Shared;
use embassy_time::Timer;
use log::{debug, info};

pub struct ExitTask<'a, B: Board, S: Sensor> {
    shared: &'a Shared<B>,
    sensor: S,
}

impl<'a, B: Board, S: Sensor> ExitTask<'a, B, S> {
    pub fn new(shared: &'a Shared<B>, sensor: S) -> Self {
        ExitTask { shared, sensor }
    }

    /*
     * A press in an empty room changes nothing: no token goes back, nothing is
     * drawn and there is no debounce hold, matching a sensor that is not
     * pressed at all.
     */
    pub async fn poll_once(&mut self) -> Option<Departure> {
        let timing = *self.shared.timing();

        let departure = if self.sensor.is_asserted() {
            let departure = self.shared.room().try_leave();
            match departure {
                Departure::Left { occupancy } => {
                    info!("exit authorized, {} inside", occupancy);
                    self.shared.announce(Status::ExitAuthorized).await;
                    self.shared.refresh_indicator();
                    Timer::after(timing.debounce).await;
                }
                Departure::Empty => debug!("exit pressed in an empty room"),
            }
            Some(departure)
        } else {
            None
        };

        Timer::after(timing.poll_interval).await;
        departure
    }

    pub async fn run(mut self) -> ! {
        loop {
            self.poll_once().await;
        }
    }
}
