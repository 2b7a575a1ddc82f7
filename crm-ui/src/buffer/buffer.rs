use super::Cell;
use crate::layout::Rect;
use crate::text::{Line, char_width};
use crate::theme::Theme;
use crate::types::{Color, Style};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Paint `color` as the background of every cell in `rect`, blanking
    /// its content.
    pub fn fill(&mut self, rect: Rect, color: Color, theme: &Theme) {
        let bg = theme.resolve(color);
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell::new(' ').with_fg(cell.fg).with_bg(bg);
                }
            }
        }
    }

    /// Repeat `ch` across `rect` using `style` over whatever is there.
    pub fn fill_char(&mut self, rect: Rect, ch: char, style: Style, theme: &Theme) {
        for y in rect.y..rect.bottom().min(self.height) {
            for x in rect.x..rect.right().min(self.width) {
                self.put_char(x, y, ch, style, theme);
            }
        }
    }

    fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style, theme: &Theme) {
        if let Some(cell) = self.get_mut(x, y) {
            cell.char = ch;
            cell.wide_continuation = false;
            cell.style = style.text_style;
            if let Some(fg) = style.foreground {
                cell.fg = theme.resolve(fg);
            }
            if let Some(bg) = style.background {
                cell.bg = theme.resolve(bg);
            }
        }
    }

    /// Write a line starting at `(x, y)`, clipped to `max_width` cells and
    /// the buffer edge. Returns the number of cells written.
    pub fn write_line(&mut self, x: u16, y: u16, line: &Line, max_width: u16, theme: &Theme) -> u16 {
        if y >= self.height {
            return 0;
        }
        let limit = x.saturating_add(max_width).min(self.width);
        let mut cursor = x;

        for span in &line.spans {
            for ch in span.content.chars() {
                let width = char_width(ch) as u16;
                if width == 0 {
                    continue;
                }
                if cursor + width > limit {
                    return cursor - x;
                }
                self.put_char(cursor, y, ch, span.style, theme);
                if width == 2 {
                    self.put_char(cursor + 1, y, ' ', span.style, theme);
                    if let Some(cell) = self.get_mut(cursor + 1, y) {
                        cell.wide_continuation = true;
                    }
                }
                cursor += width;
            }
        }

        cursor - x
    }

    /// Write plain text with a single style.
    pub fn write_str(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16, theme: &Theme) -> u16 {
        self.write_line(x, y, &Line::styled(text, style), max_width, theme)
    }

    /// Characters of row `y`, with wide-char continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
