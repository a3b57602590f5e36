#![no_std]
#![no_main]

// Entry and exit run on the thread-mode executor. The reset path runs on an
// interrupt executor pended through the otherwise unused UART4 vector, so it
// preempts them as soon as the reset button's edge wakes it.
// https://github.com/embassy-rs/embassy/blob/main/examples/stm32f4/src/bin/multiprio.rs

use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_stm32::usart::{Config, Uart};
use embassy_stm32::{bind_interrupts, peripherals, usart};
use panic_halt as _;
use roomguard::{EntryTask, ExitTask, ResetTask, Shared, on_reset_edge};

mod io;
use io::{ActiveLow, Buzzer, Despi, RgbLamp, TerminalDisplay};

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn UART4() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

#[embassy_executor::task]
async fn entry_task(shared: &'static Shared<Despi>, sensor: ActiveLow) -> ! {
    EntryTask::new(shared, sensor).run().await
}

#[embassy_executor::task]
async fn exit_task(shared: &'static Shared<Despi>, sensor: ActiveLow) -> ! {
    ExitTask::new(shared, sensor).run().await
}

#[embassy_executor::task]
async fn reset_task(shared: &'static Shared<Despi>) -> ! {
    ResetTask::new(shared).run().await
}

// Stands in for the EXTI handler: embassy's EXTI interrupt wakes this task on
// the high priority executor and all it does is raise the reset signal.
#[embassy_executor::task]
async fn reset_edge_task(shared: &'static Shared<Despi>, mut button: ExtiInput<'static>) -> ! {
    loop {
        button.wait_for_falling_edge().await;
        on_reset_edge(shared.reset_signal());
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());

    bind_interrupts!(struct Irqs {
        USART1 => usart::InterruptHandler<peripherals::USART1>;
    });
    let usart = Uart::new(
        peripherals.USART1,
        peripherals.PA10,
        peripherals.PA9,
        Irqs,
        peripherals.DMA1_CH4,
        peripherals.DMA1_CH5,
        Config::default(), // 115200 baud
    )
    .unwrap();

    let rgb = RgbLamp::new(
        Output::new(peripherals.PB10.degrade(), Level::Low, Speed::Low),
        Output::new(peripherals.PB14.degrade(), Level::Low, Speed::Low),
        Output::new(peripherals.PB12.degrade(), Level::Low, Speed::Low),
    );
    let buzzer = Buzzer(Output::new(peripherals.PB8.degrade(), Level::Low, Speed::Low));

    let entry_button = ActiveLow(Input::new(peripherals.PE2.degrade(), Pull::Up));
    let exit_button = ActiveLow(Input::new(peripherals.PE3.degrade(), Pull::Up));
    let reset_button = ExtiInput::new(
        peripherals.PE11.degrade(),
        peripherals.EXTI11.degrade(),
        Pull::Up,
    );

    let shared: &'static Shared<Despi> = cortex_m::singleton!(
        : Shared<Despi> = Shared::new(TerminalDisplay::new(usart), rgb, buzzer)
    )
    .unwrap();

    // Show the empty room before the first button press.
    shared.refresh_indicator();

    interrupt::UART4.set_priority(Priority::P6);
    let high_spawner = EXECUTOR_HIGH.start(interrupt::UART4);
    high_spawner.spawn(reset_task(shared)).unwrap();
    high_spawner.spawn(reset_edge_task(shared, reset_button)).unwrap();

    spawner.spawn(entry_task(shared, entry_button)).unwrap();
    spawner.spawn(exit_task(shared, exit_button)).unwrap();
}
