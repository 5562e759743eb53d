//! Cell geometry used by the layout tree: rectangles, split directions and
//! the fixed split ratios.

use serde::{Deserialize, Serialize};


/// A rectangle in terminal cells, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}


impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Rect {
        Rect { x, y, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Divide the rectangle in two along `direction`, reserving one cell for
    /// the separator. The first part gets `floor((extent - 1) * p / (p + q))`.
    pub fn split(&self, direction: Direction, ratio: Ratio) -> (Rect, Rect) {
        match direction {
            Direction::Vertical => {
                let top = ratio.first_share(self.height);
                let bottom = self.height.saturating_sub(top + 1);
                (
                    Rect::new(self.x, self.y, self.width, top),
                    Rect::new(self.x, self.y + top + 1, self.width, bottom),
                )
            }
            Direction::Horizontal => {
                let left = ratio.first_share(self.width);
                let right = self.width.saturating_sub(left + 1);
                (
                    Rect::new(self.x, self.y, left, self.height),
                    Rect::new(self.x + left + 1, self.y, right, self.height),
                )
            }
        }
    }
}


/// Split axis. `Vertical` stacks children top/bottom, `Horizontal` places
/// them left/right. Matches tmux's `[...]` and `{...}` layout cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Vertical,
    Horizontal,
}


/// Proportion `p : q` between the first and second child of a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    pub p: u32,
    pub q: u32,
}


impl Ratio {
    pub const EQUAL: Ratio = Ratio { p: 50, q: 50 };
    pub const SMALL_LARGE: Ratio = Ratio { p: 40, q: 60 };
    pub const LARGE_SMALL: Ratio = Ratio { p: 60, q: 40 };

    /// Cells given to the first child out of `extent`, after removing the
    /// separator cell.
    fn first_share(&self, extent: u32) -> u32 {
        let usable = extent.saturating_sub(1) as u64;
        (usable * self.p as u64 / (self.p + self.q) as u64) as u32
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_split_reserves_separator_row() {
        let (top, bottom) = Rect::new(0, 0, 100, 40).split(Direction::Vertical, Ratio::EQUAL);
        assert_eq!(top, Rect::new(0, 0, 100, 19));
        assert_eq!(bottom, Rect::new(0, 20, 100, 20));
    }

    #[test]
    fn horizontal_split_reserves_separator_column() {
        let (left, right) =
            Rect::new(0, 20, 100, 20).split(Direction::Horizontal, Ratio::SMALL_LARGE);
        assert_eq!(left, Rect::new(0, 20, 39, 20));
        assert_eq!(right, Rect::new(40, 20, 60, 20));
    }

    #[test]
    fn split_keeps_offset_of_parent() {
        let (left, right) =
            Rect::new(10, 5, 51, 9).split(Direction::Horizontal, Ratio::LARGE_SMALL);
        assert_eq!(left, Rect::new(10, 5, 30, 9));
        assert_eq!(right, Rect::new(41, 5, 20, 9));
    }

    #[test]
    fn degenerate_extent_does_not_underflow() {
        let (top, bottom) = Rect::new(0, 0, 3, 1).split(Direction::Vertical, Ratio::EQUAL);
        assert_eq!(top.height, 0);
        assert_eq!(bottom.height, 0);
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
    }
}
