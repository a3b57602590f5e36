/*
 * The display: drawing primitives, the status screen and a character
 * framebuffer.
 *
 * Every screen is drawn in the same order (clear, title and rules, count,
 * status message, flush). That sequence must never interleave with another
 * task's, which is why the shared state only hands out the display behind a
 * mutex and only `render` draws on it.
 */

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, GLYPH_SIZE};
use core::convert::Infallible;
use core::fmt::{Debug, Write};

#[allow(async_fn_in_trait)]
pub trait DisplaySink {
    type Error: Debug;

    fn clear(&mut self);
    fn draw_text(&mut self, text: &str, x: u8, y: u8);
    fn draw_hline(&mut self, x0: u8, x1: u8, y: u8);
    fn draw_vline(&mut self, x: u8, y0: u8, y1: u8);
    /// Pushes the drawn frame to the device.
    async fn flush(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    EntryAuthorized,
    AccessDenied,
    ExitAuthorized,
    ResetPerformed,
}

impl Status {
    pub const fn message(self) -> &'static str {
        match self {
            Status::EntryAuthorized => "Entry authorized",
            Status::AccessDenied => "Access denied",
            Status::ExitAuthorized => "Exit authorized",
            Status::ResetPerformed => "Reset performed",
        }
    }
}

pub const TITLE: &str = "DIGITAL LAB";
pub const COUNT_LABEL: &str = "Inside";

pub async fn render<D: DisplaySink>(display: &mut D, occupancy: u8, status: Status) -> Result<(), D::Error> {
    let last_x = DISPLAY_WIDTH - 1;

    display.clear();
    display.draw_text(TITLE, 0, 0);
    display.draw_hline(0, last_x, 15);
    display.draw_text(COUNT_LABEL, 0, 20);
    display.draw_vline(50, 20, 30);

    display.draw_text(&count_text(occupancy), 60, 20);

    display.draw_hline(0, last_x, 35);
    display.draw_text(status.message(), 0, 40);
    display.flush().await
}

fn count_text(occupancy: u8) -> heapless::String<3> {
    let mut text = heapless::String::<3>::new();
    let written = write!(text, "{}", occupancy);
    debug_assert!(written.is_ok(), "count {} does not fit its field", occupancy);
    text
}

pub const COLUMNS: usize = (DISPLAY_WIDTH / GLYPH_SIZE) as usize;
pub const ROWS: usize = (DISPLAY_HEIGHT / GLYPH_SIZE) as usize;

/*
 * The panel as a grid of 8x8 character cells. Pixel coordinates are mapped to
 * the cell that contains them. Text wraps to the next row at the right edge
 * and is cut off at the bottom.
 */
#[derive(Clone, PartialEq, Eq)]
pub struct TextFrame {
    cells: [[u8; COLUMNS]; ROWS],
}

impl TextFrame {
    pub const fn new() -> Self {
        TextFrame {
            cells: [[b' '; COLUMNS]; ROWS],
        }
    }

    pub fn row(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        (0..ROWS).map(|row| self.row(row))
    }

    fn cell(x: u8, y: u8) -> (usize, usize) {
        ((x / GLYPH_SIZE) as usize, (y / GLYPH_SIZE) as usize)
    }
}

impl Default for TextFrame {
    fn default() -> Self {
        TextFrame::new()
    }
}

impl Debug for TextFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl DisplaySink for TextFrame {
    type Error = Infallible;

    fn clear(&mut self) {
        self.cells = [[b' '; COLUMNS]; ROWS];
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) {
        let (mut column, mut row) = Self::cell(x, y);
        for c in text.chars() {
            if column >= COLUMNS {
                column = 0;
                row += 1;
            }
            if row >= ROWS {
                return;
            }
            self.cells[row][column] = if c.is_ascii_graphic() || c == ' ' { c as u8 } else { b'?' };
            column += 1;
        }
    }

    fn draw_hline(&mut self, x0: u8, x1: u8, y: u8) {
        let (first, row) = Self::cell(x0.min(x1), y);
        let (last, _) = Self::cell(x0.max(x1), y);
        if row >= ROWS {
            return;
        }
        for column in first..=last.min(COLUMNS - 1) {
            self.cells[row][column] = b'-';
        }
    }

    fn draw_vline(&mut self, x: u8, y0: u8, y1: u8) {
        let (column, first) = Self::cell(x, y0.min(y1));
        let (_, last) = Self::cell(x, y0.max(y1));
        if column >= COLUMNS {
            return;
        }
        for row in first..=last.min(ROWS - 1) {
            self.cells[row][column] = b'|';
        }
    }

    async fn flush(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}
