//! Pane tree: an owned binary tree of rectangles produced by splitting.
//!
//! Ids follow tmux's breadth-first numbering: the root is 0 and a pane `p`
//! splits into `2p + 1` and `2p + 2`.

use crate::error::{Result, TmuxlError};
use crate::types::geometry::{Direction, Ratio, Rect};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pane {
    Leaf {
        id: u32,
        rect: Rect,
    },
    Split {
        id: u32,
        rect: Rect,
        direction: Direction,
        ratio: Ratio,
        first: Box<Pane>,
        second: Box<Pane>,
    },
}


impl Pane {
    pub fn root(width: u32, height: u32) -> Pane {
        Pane::Leaf {
            id: 0,
            rect: Rect::new(0, 0, width, height),
        }
    }

    pub fn id(&self) -> u32 {
        match self {
            Pane::Leaf { id, .. } | Pane::Split { id, .. } => *id,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            Pane::Leaf { rect, .. } | Pane::Split { rect, .. } => *rect,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Pane::Leaf { .. })
    }

    /// Turn this leaf into a split and return its two new children.
    ///
    /// Fails with `AlreadySplit` if the pane has been split before.
    pub fn split(&mut self, direction: Direction, ratio: Ratio) -> Result<(&mut Pane, &mut Pane)> {
        let (id, rect) = match self {
            Pane::Leaf { id, rect } => (*id, *rect),
            Pane::Split { id, .. } => return Err(TmuxlError::AlreadySplit { id: *id }),
        };
        let (a, b) = rect.split(direction, ratio);
        *self = Pane::Split {
            id,
            rect,
            direction,
            ratio,
            first: Box::new(Pane::Leaf { id: 2 * id + 1, rect: a }),
            second: Box::new(Pane::Leaf { id: 2 * id + 2, rect: b }),
        };
        match self {
            Pane::Split { first, second, .. } => Ok((first.as_mut(), second.as_mut())),
            Pane::Leaf { .. } => unreachable!("pane {} was just split", id),
        }
    }

    /// Leaves in render order (first child before second).
    pub fn leaves(&self) -> Vec<&Pane> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Pane>) {
        match self {
            Pane::Leaf { .. } => out.push(self),
            Pane::Split { first, second, .. } => {
                first.collect_leaves(out);
                second.collect_leaves(out);
            }
        }
    }

    pub fn split_count(&self) -> usize {
        match self {
            Pane::Leaf { .. } => 0,
            Pane::Split { first, second, .. } => 1 + first.split_count() + second.split_count(),
        }
    }
}
