//! The fixed split schedule for 1 through 5 panes.
//!
//! ```text
//!  n=1        n=2        n=3          n=4            n=5
//! +-----+   +-----+    +-----+    +-------+--+   +-------+--+
//! |     |   |  1  |    |  1  |    |   3   |4 |   |   3   |9 |
//! |  0  |   +-----+    +--+--+    +----+--+--+   |       +--+
//! |     |   |  2  |    |5 |6 |    | 5  |  6  |   |       |10|
//! +-----+   +-----+    +--+--+    +----+-----+   +----+--+--+
//!                                                | 5  |  6  |
//!                                                +----+-----+
//! ```
//!
//! Shapes beyond five panes are not defined; extending the tool means adding
//! a step here, not generalizing the tiler.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TmuxlError};
use crate::layout::serialize;
use crate::layout::tree::Pane;
use crate::types::geometry::{Direction, Ratio};


/// A pane count the schedule has a shape for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PaneCount(u8);


impl PaneCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(n: i64) -> Result<PaneCount> {
        if n < Self::MIN as i64 || n > Self::MAX as i64 {
            return Err(TmuxlError::InvalidPaneCount(n));
        }
        Ok(PaneCount(n as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}


impl TryFrom<i64> for PaneCount {
    type Error = TmuxlError;

    fn try_from(n: i64) -> Result<PaneCount> {
        PaneCount::new(n)
    }
}


impl From<PaneCount> for u8 {
    fn from(n: PaneCount) -> u8 {
        n.0
    }
}


/// Build the pane tree for `n` panes covering a `width` x `height` window.
pub fn build_tree(width: u32, height: u32, n: PaneCount) -> Result<Pane> {
    let n = n.get();
    let mut root = Pane::root(width, height);
    if n > 1 {
        let (top, bottom) = root.split(Direction::Vertical, Ratio::EQUAL)?;
        if n > 2 {
            bottom.split(Direction::Horizontal, Ratio::SMALL_LARGE)?;
            if n > 3 {
                let (_, top_right) = top.split(Direction::Horizontal, Ratio::LARGE_SMALL)?;
                if n > 4 {
                    top_right.split(Direction::Vertical, Ratio::EQUAL)?;
                }
            }
        }
    }
    Ok(root)
}


/// Rendered layout tree for `n` panes, without the checksum prefix.
pub fn compute_layout(width: u32, height: u32, n: PaneCount) -> Result<String> {
    Ok(serialize::render(&build_tree(width, height, n)?))
}
