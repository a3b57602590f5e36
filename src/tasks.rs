/*
 * The three control loops.
 *
 * Entry and exit sample their sensor every poll interval and hold for the
 * debounce interval after each handled press. Both sleeps are awaits, so the
 * loops never spin. Reset suspends on the reset signal until the interrupt
 * handler raises it.
 *
 * Priorities are decided where the loops are spawned: entry and exit share
 * the thread-mode executor, reset runs on an interrupt executor above them so
 * that a raised reset preempts admission as soon as it is woken.
 *
 * Each loop exposes one iteration (`poll_once` / `handle_once`) next to the
 * endless `run`, so that single transitions can be driven and observed.
 */

pub mod entry;
pub mod exit;
pub mod reset;

pub use entry::EntryTask;
pub use exit::ExitTask;
pub use reset::ResetTask;
