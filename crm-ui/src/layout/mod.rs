#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left + right),
            height: self.height.saturating_sub(top + bottom),
        }
    }

    pub fn inset(self, amount: u16) -> Self {
        self.shrink(amount, amount, amount, amount)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Split off the first `height` rows. Returns `(top, rest)`.
    pub fn split_top(self, height: u16) -> (Rect, Rect) {
        let height = height.min(self.height);
        (
            Rect::new(self.x, self.y, self.width, height),
            Rect::new(self.x, self.y + height, self.width, self.height - height),
        )
    }

    /// Split off the first `width` columns. Returns `(left, rest)`.
    pub fn split_left(self, width: u16) -> (Rect, Rect) {
        let width = width.min(self.width);
        (
            Rect::new(self.x, self.y, width, self.height),
            Rect::new(self.x + width, self.y, self.width - width, self.height),
        )
    }

    /// A single-row rect at `row` (relative), clipped to this rect.
    pub fn row(self, row: u16) -> Rect {
        if row >= self.height {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        Rect::new(self.x, self.y + row, self.width, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_top_clamps_to_height() {
        let (top, rest) = Rect::new(2, 3, 10, 4).split_top(6);
        assert_eq!(top, Rect::new(2, 3, 10, 4));
        assert!(rest.is_empty());
    }

    #[test]
    fn split_left_divides_width() {
        let (left, rest) = Rect::new(0, 0, 10, 2).split_left(4);
        assert_eq!(left, Rect::new(0, 0, 4, 2));
        assert_eq!(rest, Rect::new(4, 0, 6, 2));
    }

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rect::new(1, 1, 3, 3);
        assert!(rect.contains(1, 1));
        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 1));
        assert!(!rect.contains(1, 4));
    }
}
