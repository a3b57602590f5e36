/*
 * The room indicator: a coarse level derived from the occupancy, shown on an
 * RGB lamp.
 *
 * The level is a pure function of the count. The lamp is driven as a triple,
 * so the three colours always change together; board code maps each lamp to
 * its pin through `Rgb::levels`, which also takes care of active-low wiring.
 */

use crate::config::CAPACITY;
use enum_ordinalize::Ordinalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Vacant,
    Available,
    NearlyFull,
    Full,
}

impl Indicator {
    pub const fn from_occupancy(occupancy: u8) -> Self {
        match occupancy {
            0 => Indicator::Vacant,
            n if n < CAPACITY - 1 => Indicator::Available,
            n if n == CAPACITY - 1 => Indicator::NearlyFull,
            _ => Indicator::Full,
        }
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            Indicator::Vacant => Rgb::new(false, false, true),
            Indicator::Available => Rgb::new(false, true, false),
            // red and green make yellow
            Indicator::NearlyFull => Rgb::new(true, true, false),
            Indicator::Full => Rgb::new(true, false, false),
        }
    }
}

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Lamp {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    lamps: [bool; Lamp::VARIANT_COUNT],
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(false, false, false);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Rgb {
            lamps: [red, green, blue],
        }
    }

    pub fn is_lit(&self, lamp: Lamp) -> bool {
        self.lamps[lamp.ordinal()]
    }

    /*
     * Pin levels for the triple, indexed by lamp ordinal. `true` means drive
     * the pin high.
     */
    pub fn levels(&self, active_lows: [bool; Lamp::VARIANT_COUNT]) -> [bool; Lamp::VARIANT_COUNT] {
        let mut levels = [false; Lamp::VARIANT_COUNT];
        for i in 0..Lamp::VARIANT_COUNT {
            levels[i] = self.lamps[i] != active_lows[i];
        }
        levels
    }
}
