use previewbar::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

/// Grid of terminal cells drawn in one pass.
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16, bg: Rgb) -> Self {
        let blank = Cell {
            ch: ' ',
            fg: Rgb::new(255, 255, 255),
            bg,
        };
        Self {
            width,
            height,
            cells: vec![blank; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// Cell at `(x, y)`, or `None` outside the canvas.
    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        let index = self.index(x as u16, y as u16);
        self.cells.get_mut(index)
    }

    pub fn put_str(&mut self, x: i32, y: i32, text: &str, fg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(x + i as i32, y) {
                cell.ch = ch;
                cell.fg = fg;
            }
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
