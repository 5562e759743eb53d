//! Layout serializer: render a pane tree into tmux's layout grammar and
//! compute the checksum tmux requires in front of it.
//!
//! Grammar, per node: `WxH,X,Y` followed by `,ID` for a leaf, `[a,b]` for a
//! top/bottom split, or `{a,b}` for a left/right split.

use std::fmt::Write;

use crate::error::Result;
use crate::layout::schedule::{self, PaneCount};
use crate::layout::tree::Pane;
use crate::types::geometry::Direction;


pub fn render(pane: &Pane) -> String {
    let mut out = String::new();
    render_into(pane, &mut out);
    out
}


fn render_into(pane: &Pane, out: &mut String) {
    let r = pane.rect();
    // Writing to a String cannot fail.
    let _ = write!(out, "{}x{},{},{}", r.width, r.height, r.x, r.y);
    match pane {
        Pane::Leaf { id, .. } => {
            let _ = write!(out, ",{}", id);
        }
        Pane::Split { direction, first, second, .. } => {
            let (open, close) = match direction {
                Direction::Vertical => ('[', ']'),
                Direction::Horizontal => ('{', '}'),
            };
            out.push(open);
            render_into(first, out);
            out.push(',');
            render_into(second, out);
            out.push(close);
        }
    }
}


/// tmux's layout checksum: rotate the 16-bit accumulator right by one, then
/// add the next byte. Returned as four lowercase hex digits.
pub fn checksum(layout: &str) -> String {
    let mut csum: u16 = 0;
    for &b in layout.as_bytes() {
        csum = (csum >> 1) + ((csum & 1) << 15);
        csum = csum.wrapping_add(b as u16);
    }
    format!("{:04x}", csum)
}


/// Prefix a rendered layout with its checksum, ready for `select-layout`.
pub fn with_checksum(layout: &str) -> String {
    format!("{},{}", checksum(layout), layout)
}


/// The argument for `tmux select-layout` that arranges `n` panes in a
/// `width` x `height` window.
pub fn select_layout_string(width: u32, height: u32, n: PaneCount) -> Result<String> {
    let layout = schedule::compute_layout(width, height, n)?;
    Ok(with_checksum(&layout))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::geometry::{Ratio, Rect};

    #[test]
    fn checksum_matches_tmux_manual_example() {
        // From the WINDOWS AND PANES section of tmux(1).
        assert_eq!(checksum("159x48,0,0{79x48,0,0,79x48,80,0}"), "bb62");
    }

    #[test]
    fn checksum_of_empty_string_is_zero() {
        assert_eq!(checksum(""), "0000");
    }

    #[test]
    fn checksum_is_zero_padded_lowercase() {
        // 'A' = 0x41
        assert_eq!(checksum("A"), "0041");
    }

    #[test]
    fn checksum_rotates_low_bit_into_high_bit() {
        // 0x01 -> rotate gives 0x8000, plus 0x01.
        assert_eq!(checksum("\u{1}\u{1}"), "8001");
    }

    #[test]
    fn render_leaf() {
        let pane = Pane::Leaf { id: 4, rect: Rect::new(60, 0, 40, 19) };
        assert_eq!(render(&pane), "40x19,60,0,4");
    }

    #[test]
    fn render_uses_braces_for_left_right() {
        let mut root = Pane::root(159, 48);
        root.split(Direction::Horizontal, Ratio::EQUAL).unwrap();
        assert_eq!(render(&root), "159x48,0,0{79x48,0,0,1,79x48,80,0,2}");
    }

    #[test]
    fn select_layout_string_for_each_count() {
        let expected = [
            "aa7d,100x40,0,0,0",
            "350d,100x40,0,0[100x19,0,0,1,100x20,0,20,2]",
            "c4e4,100x40,0,0[100x19,0,0,1,100x20,0,20{39x20,0,20,5,60x20,40,20,6}]",
            "25ed,100x40,0,0[100x19,0,0{59x19,0,0,3,40x19,60,0,4},\
             100x20,0,20{39x20,0,20,5,60x20,40,20,6}]",
            "a55a,100x40,0,0[100x19,0,0{59x19,0,0,3,40x19,60,0[40x9,60,0,9,40x9,60,10,10]},\
             100x20,0,20{39x20,0,20,5,60x20,40,20,6}]",
        ];
        for (i, want) in expected.iter().enumerate() {
            let n = PaneCount::new(i as i64 + 1).unwrap();
            assert_eq!(select_layout_string(100, 40, n).unwrap(), *want);
        }
    }

    #[test]
    fn odd_window_five_panes() {
        let n = PaneCount::new(5).unwrap();
        assert_eq!(
            select_layout_string(212, 51, n).unwrap(),
            "2081,212x51,0,0[212x25,0,0{126x25,0,0,3,85x25,127,0[85x12,127,0,9,85x12,127,13,10]},\
             212x25,0,26{84x25,0,26,5,127x25,85,26,6}]"
        );
    }
}
