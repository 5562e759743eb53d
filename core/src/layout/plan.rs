//! Adjustment plan: which panes to split, in what order, to grow a window
//! from its current pane count to the desired one before the layout is
//! applied.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TmuxlError};
use crate::layout::schedule::PaneCount;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustPlan {
    pub current: PaneCount,
    pub desired: PaneCount,
    /// Pane index to split for each pane that must be created, in order.
    pub split_targets: Vec<u8>,
    /// Pane index to focus once the layout is applied.
    pub focus: Option<u8>,
}


impl AdjustPlan {
    /// Plan the move from `current` panes to `desired` panes. `desired = None`
    /// keeps the current count and only re-applies the layout.
    pub fn new(current: u32, desired: Option<i64>) -> Result<AdjustPlan> {
        let desired = desired.map(PaneCount::new).transpose()?;
        if let Some(d) = desired {
            if (d.get() as u32) < current {
                return Err(TmuxlError::Shrink {
                    desired: d.get(),
                    current,
                });
            }
        }
        let current = PaneCount::new(current as i64)?;
        let desired = desired.unwrap_or(current);
        let split_targets = (current.get()..desired.get()).map(split_target).collect();
        Ok(AdjustPlan {
            current,
            desired,
            split_targets,
            focus: focus_target(current, desired),
        })
    }
}


/// Pane to split when creating the pane with index `i`.
///
/// The 2nd and 4th panes come from the 1st. The 3rd comes from the 2nd. The
/// 5th comes from the 4th, which tmux has renumbered to index 1 by then
/// since indices run left to right, top to bottom.
fn split_target(i: u8) -> u8 {
    match i {
        2 | 4 => 1,
        _ => 0,
    }
}


/// Growing past two panes moves the cursor to the bottom-left pane.
fn focus_target(current: PaneCount, desired: PaneCount) -> Option<u8> {
    if current.get() < 3 && desired.get() >= 3 {
        Some(desired.get() - 2)
    } else {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_to_five_splits_in_schedule_order() {
        let plan = AdjustPlan::new(1, Some(5)).unwrap();
        assert_eq!(plan.split_targets, vec![0, 1, 0, 1]);
        assert_eq!(plan.focus, Some(3));
    }

    #[test]
    fn three_to_four_splits_first_pane() {
        let plan = AdjustPlan::new(3, Some(4)).unwrap();
        assert_eq!(plan.split_targets, vec![0]);
        assert_eq!(plan.focus, None);
    }

    #[test]
    fn two_to_three_focuses_bottom_left() {
        let plan = AdjustPlan::new(2, Some(3)).unwrap();
        assert_eq!(plan.split_targets, vec![1]);
        assert_eq!(plan.focus, Some(1));
    }

    #[test]
    fn no_desired_reapplies_current() {
        let plan = AdjustPlan::new(4, None).unwrap();
        assert_eq!(plan.desired.get(), 4);
        assert!(plan.split_targets.is_empty());
        assert_eq!(plan.focus, None);
    }

    #[test]
    fn shrinking_is_rejected() {
        let err = AdjustPlan::new(4, Some(2)).unwrap_err();
        assert!(matches!(err, TmuxlError::Shrink { desired: 2, current: 4 }));
    }

    #[test]
    fn shrinking_an_oversized_window_names_both_counts() {
        let err = AdjustPlan::new(7, Some(3)).unwrap_err();
        assert!(matches!(err, TmuxlError::Shrink { desired: 3, current: 7 }));
        assert_eq!(err.to_string(), "expected n(=3) to be >= current(=7)");
    }

    #[test]
    fn bad_desired_is_reported_before_current() {
        assert!(matches!(
            AdjustPlan::new(7, Some(9)),
            Err(TmuxlError::InvalidPaneCount(9))
        ));
    }

    #[test]
    fn out_of_range_counts_are_rejected() {
        assert!(matches!(
            AdjustPlan::new(1, Some(6)),
            Err(TmuxlError::InvalidPaneCount(6))
        ));
        assert!(matches!(
            AdjustPlan::new(1, Some(0)),
            Err(TmuxlError::InvalidPaneCount(0))
        ));
        // A window that already has more panes than any known shape.
        assert!(matches!(
            AdjustPlan::new(7, None),
            Err(TmuxlError::InvalidPaneCount(7))
        ));
    }
}
