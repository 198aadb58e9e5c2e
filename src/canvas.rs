use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A framebuffer of dots, drawn to the terminal as braille characters. Each character holds a
/// 2x4 block of dots, so one dot is one pixel of the drawing area.
pub struct Canvas {
    /// The dot buffer
    db: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the canvas, in dots
    w: usize,

    /// Height of the canvas, in dots
    h: usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // With `bw = ceil(w / 2)` and `bh = ceil(h / 4)` braille characters per row and column,
        // the framebuffer is `3 * (bw * bh) + bh` bytes long.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            db: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Start over with a blank canvas of a new size
    pub fn resize(&mut self, w: usize, h: usize) {
        *self = Self::new(w, h);
    }

    /// Turn every dot off
    pub fn clear(&mut self) {
        self.db.fill(false);
    }

    /// Turns on a `w` x `h` rectangle of dots with its top-left corner at `(x, y)`. Whatever falls
    /// outside of the canvas is clipped.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize) {
        let x_end = x.saturating_add(w).min(self.w);
        let y_end = y.saturating_add(h).min(self.h);

        for y in y..y_end {
            for x in x..x_end {
                let i = self.xy_from(x, y);
                self.db[i] = true;
            }
        }
    }

    /// Draws every live cell of `grid` as a filled square of `cell_size - stroke` dots, at the
    /// cell's pixel origin. The `stroke` gap is what separates neighboring cells on screen.
    pub fn draw_grid(&mut self, grid: &Grid, cell_size: usize, stroke: usize) {
        let side = cell_size.saturating_sub(stroke).max(1);

        for (row, col) in grid.iter_alive() {
            self.fill_rect(col * cell_size, row * cell_size, side, side);
        }
    }

    /// Turn the dot buffer into lines of braille characters, one line per 4 rows of dots.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.db.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Every sum of dots stays within the braille block
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Canvas;
    use crate::grid::Grid;

    #[test]
    fn test_blank() {
        let mut canvas = Canvas::new(4, 8);

        assert_eq!(canvas.render(), "\u{2800}\u{2800}\n\u{2800}\u{2800}\n");
    }

    #[test]
    fn test_single_dots() -> anyhow::Result<()> {
        let mut canvas = Canvas::new(4, 4);
        let grid = Grid::with_alive(2, 2, &[(0, 0), (1, 1)])?;

        canvas.draw_grid(&grid, 2, 1);

        insta::assert_snapshot!(canvas.render().trim_end(), @"⠁⠄");

        Ok(())
    }

    #[test]
    fn test_stroke_leaves_gap() -> anyhow::Result<()> {
        let mut canvas = Canvas::new(4, 4);
        let grid = Grid::with_alive(1, 1, &[(0, 0)])?;

        canvas.draw_grid(&grid, 4, 1);

        // A 3x3 square: the right column and bottom row of the cell stay blank
        insta::assert_snapshot!(canvas.render().trim_end(), @"⠿⠇");

        Ok(())
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(2, 4);

        canvas.fill_rect(1, 2, 10, 10);

        // Dots (1, 2) and (1, 3)
        assert_eq!(canvas.render(), "\u{28A0}\n");
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(2, 4);

        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.render(), "\u{28FF}\n");

        canvas.clear();
        assert_eq!(canvas.render(), "\u{2800}\n");
    }

    #[test]
    fn test_odd_sizes_round_up() {
        let mut canvas = Canvas::new(3, 5);

        canvas.fill_rect(2, 4, 1, 1);

        assert_eq!(canvas.render(), "\u{2800}\u{2800}\n\u{2800}\u{2801}\n");
    }
}
