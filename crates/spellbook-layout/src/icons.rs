//! Metadata row icon glyphs
//!
//! The binder layout marks ritual spells with a small outlined square
//! before the casting time and concentration spells with a filled
//! diamond before the duration.

use crate::canvas::{DrawOp, Rgb8};

const SQUARE_LINE_WIDTH: f32 = 0.25;

/// Outlined square with its top-left corner at (x, y).
pub fn square(x: f32, y: f32, size: f32) -> DrawOp {
    DrawOp::Rect {
        x,
        y,
        width: size,
        height: size,
        line_width: SQUARE_LINE_WIDTH,
        color: Rgb8::BLACK,
    }
}

/// Filled diamond inscribed in the square with top-left corner (x, y),
/// built from two triangles sharing the horizontal midline.
pub fn diamond(x: f32, y: f32, size: f32) -> [DrawOp; 2] {
    let half = size / 2.0;
    [
        DrawOp::Triangle {
            points: [[x + half, y], [x + size, y + half], [x, y + half]],
            color: Rgb8::BLACK,
        },
        DrawOp::Triangle {
            points: [[x + size, y + half], [x + half, y + size], [x, y + half]],
            color: Rgb8::BLACK,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diamond_halves_share_midline() {
        let [top, bottom] = diamond(10.0, 20.0, 2.0);
        let (DrawOp::Triangle { points: top, .. }, DrawOp::Triangle { points: bottom, .. }) =
            (top, bottom)
        else {
            panic!("expected triangles");
        };
        // Both halves meet at y + half.
        assert_eq!(top[1][1], 21.0);
        assert_eq!(bottom[0][1], 21.0);
        // Apexes sit at the top and bottom of the bounding square.
        assert_eq!(top[0], [11.0, 20.0]);
        assert_eq!(bottom[1], [11.0, 22.0]);
    }
}
