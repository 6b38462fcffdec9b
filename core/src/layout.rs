//! Panorama layouts for every heading.
//!
//! Only the north and northeast views are authored. Each lists the squares
//! visible from the viewer, furthest first, with the screen anchor and scale
//! at which a terrain sprite for that square is drawn. The remaining six
//! views share the same screen placements and turn the world offsets by
//! whole quarter turns at compile time.

use crate::{Coordinate, ScreenPoint, ViewCell};

const CELLS: usize = 48;

const fn cell(x: i32, y: i32, row: i32, col: i32, scale: f32) -> ViewCell {
    ViewCell::new(ScreenPoint::new(x, y), Coordinate::new(row, col), scale)
}

const NORTH: [ViewCell; CELLS] = [
    // Horizon row: centre, then the left and right flanks.
    cell(512, 467, -6, 0, 0.1),
    cell(475, 469, -6, -1, 0.1),
    cell(402, 471, -6, -2, 0.1),
    cell(246, 474, -5, -3, 0.1),
    cell(170, 472, -5, -4, 0.1),
    cell(89, 470, -4, -5, 0.1),
    cell(28, 472, -3, -5, 0.11),
    cell(548, 469, -6, 1, 0.1),
    cell(621, 471, -6, 2, 0.1),
    cell(777, 474, -5, 3, 0.1),
    cell(853, 472, -5, 4, 0.1),
    cell(934, 470, -4, 5, 0.1),
    cell(995, 472, -3, 5, 0.11),
    cell(512, 470, -5, 0, 0.12),
    cell(457, 473, -5, -1, 0.11),
    cell(356, 474, -5, -2, 0.11),
    cell(188, 476, -4, -3, 0.13),
    cell(128, 473, -4, -4, 0.12),
    cell(74, 474, -3, -4, 0.14),
    cell(566, 473, -5, 1, 0.11),
    cell(667, 474, -5, 2, 0.11),
    cell(835, 476, -4, 3, 0.13),
    cell(896, 473, -4, 4, 0.12),
    cell(949, 474, -3, 4, 0.14),
    cell(512, 475, -4, 0, 0.16),
    cell(427, 479, -4, -1, 0.13),
    cell(294, 480, -4, -2, 0.14),
    cell(128, 479, -3, -3, 0.17),
    cell(44, 483, -2, -3, 0.22),
    cell(596, 479, -4, 1, 0.13),
    cell(729, 480, -4, 2, 0.14),
    cell(896, 479, -3, 3, 0.17),
    cell(979, 483, -2, 3, 0.22),
    cell(512, 484, -3, 0, 0.18),
    cell(376, 489, -3, -1, 0.18),
    cell(220, 486, -3, -2, 0.18),
    cell(128, 493, -2, -2, 0.24),
    cell(-42, 507, -1, -2, 0.3),
    cell(647, 489, -3, 1, 0.18),
    cell(803, 486, -3, 2, 0.18),
    cell(896, 493, -2, 2, 0.24),
    cell(1066, 507, -1, 2, 0.3),
    cell(512, 506, -2, 0, 0.4),
    cell(294, 506, -2, -1, 0.32),
    cell(128, 541, -1, -1, 0.72),
    cell(729, 506, -2, 1, 0.32),
    cell(896, 541, -1, 1, 0.72),
    // Square directly ahead.
    cell(512, 568, -1, 0, 1.0),
];

const NORTH_EAST: [ViewCell; CELLS] = [
    // Diagonal views interleave left and right from the outside in.
    cell(480, 470, -5, 4, 0.1),
    cell(108, 469, -6, -1, 0.1),
    cell(544, 470, -4, 5, 0.1),
    cell(916, 469, 1, 6, 0.1),
    cell(128, 469, -6, 0, 0.125),
    cell(896, 469, 0, 6, 0.125),
    cell(179, 470, -6, 1, 0.125),
    cell(845, 470, -1, 6, 0.125),
    cell(266, 471, -6, 2, 0.125),
    cell(758, 471, -2, 6, 0.125),
    cell(92, 470, -5, -1, 0.15),
    cell(932, 470, 1, 5, 0.15),
    cell(128, 472, -5, 0, 0.15),
    cell(896, 472, 0, 5, 0.15),
    cell(196, 474, -5, 1, 0.15),
    cell(828, 474, -1, 5, 0.15),
    cell(306, 475, -5, 2, 0.15),
    cell(718, 475, -2, 5, 0.15),
    cell(415, 473, -5, 3, 0.125),
    cell(609, 473, -3, 5, 0.125),
    cell(512, 473, -4, 4, 0.2),
    cell(79, 473, -4, -1, 0.225),
    cell(945, 473, 1, 4, 0.225),
    cell(128, 477, -4, 0, 0.25),
    cell(896, 477, 0, 4, 0.25),
    cell(224, 480, -4, 1, 0.275),
    cell(800, 480, -1, 4, 0.275),
    cell(362, 479, -4, 2, 0.25),
    cell(662, 479, -2, 4, 0.25),
    cell(462, 475, -4, 3, 0.275),
    cell(562, 475, -3, 4, 0.275),
    cell(512, 479, -3, 3, 0.3),
    cell(57, 479, -3, -1, 0.325),
    cell(967, 479, 1, 3, 0.325),
    cell(128, 486, -3, 0, 0.35),
    cell(896, 486, 0, 3, 0.35),
    cell(272, 490, -3, 1, 0.375),
    cell(752, 490, -1, 3, 0.375),
    cell(427, 485, -3, 2, 0.375),
    cell(597, 485, -2, 3, 0.375),
    cell(512, 493, -2, 2, 0.45),
    cell(128, 507, -2, 0, 0.5),
    cell(896, 507, 0, 2, 0.5),
    cell(349, 506, -2, 1, 0.6),
    cell(675, 506, -1, 2, 0.6),
    cell(512, 541, -1, 1, 0.8),
    cell(128, 568, -1, 0, 0.9),
    cell(896, 568, 0, 1, 0.9),
];

const fn quarter_turns(cells: [ViewCell; CELLS], turns: u8) -> [ViewCell; CELLS] {
    let mut rotated = cells;
    let mut turn = 0;
    while turn < turns {
        let mut index = 0;
        while index < CELLS {
            rotated[index] = rotated[index].quarter_turn_cw();
            index += 1;
        }
        turn += 1;
    }
    rotated
}

/// Layouts indexed by [`crate::Heading::index`].
pub(crate) static LAYOUTS: [[ViewCell; CELLS]; 8] = [
    NORTH,
    NORTH_EAST,
    quarter_turns(NORTH, 1),
    quarter_turns(NORTH_EAST, 1),
    quarter_turns(NORTH, 2),
    quarter_turns(NORTH_EAST, 2),
    quarter_turns(NORTH, 3),
    quarter_turns(NORTH_EAST, 3),
];
