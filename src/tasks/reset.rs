use crate::board::Board;
use crate::display::Status;
use crate::shared::Shared;
use embassy_time::Timer;
use log::info;

pub struct ResetTask<'a, B: Board> {
    shared: &'a Shared<B>,
}

impl<'a, B: Board> ResetTask<'a, B> {
    pub fn new(shared: &'a Shared<B>) -> Self {
        ResetTask { shared }
    }

    /*
     * Waits for a reset, drains the room and confirms. Returns how many people
     * were let out.
     *
     * A reset raised while this one is confirming stays pending and drains the
     * room again once the hold is over.
     */
    pub async fn handle_once(&mut self) -> u8 {
        self.shared.reset_signal().wait().await;

        let drained = self.shared.room().drain();
        info!("reset performed, {} let out", drained);

        self.shared.announce(Status::ResetPerformed).await;
        self.shared.refresh_indicator();
        self.shared.sound_alert().await;

        Timer::after(self.shared.timing().debounce).await;
        drained
    }

    pub async fn run(mut self) -> ! {
        loop {
            self.handle_once().await;
        }
    }
}
