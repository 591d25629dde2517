//! Catalog of the seven canonical shapes and the rotation matrices.

use core::fmt;

use crate::geom::Coord;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    I = 0,
    Z = 1,
    S = 2,
    T = 3,
    L = 4,
    J = 5,
    O = 6,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
    ];

    pub fn name(self) -> &'static str {
        SHAPE_NAMES[self as usize]
    }

    /// Cell offsets relative to the spawn anchor, in ascending board-index order.
    pub fn offsets(self) -> [Coord; 4] {
        TEMPLATES[self as usize].offsets
    }

    /// Position within [`offsets`](Self::offsets) of the cell used as rotation origin.
    /// `None` for shapes that do not rotate.
    pub fn pivot(self) -> Option<usize> {
        TEMPLATES[self as usize].pivot
    }

    /// Cells occupied by a freshly spawned piece on a board `width` columns wide.
    pub fn spawn_coords(self, width: usize) -> [Coord; 4] {
        let anchor = spawn_anchor(width);
        self.offsets().map(|ofs| anchor + ofs)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static SHAPE_NAMES: [&str; 7] = ["I", "Z", "S", "T", "L", "J", "O"];

// w=10
// ----------
// ...IIII... 0
// .......... 1
// 0123456789
//
// ...ZZ..... 0
// ....ZZ.... 1
// 0123456789

/// Top row, left of center for even widths.
pub fn spawn_anchor(width: usize) -> Coord {
    Coord::new(0, (width as i32 - 1) / 2)
}

struct Template {
    offsets: [Coord; 4],
    pivot: Option<usize>,
}

const fn tpl(offsets: [(i32, i32); 4], pivot: Option<usize>) -> Template {
    let [a, b, c, d] = offsets;
    Template {
        offsets: [
            Coord::new(a.0, a.1),
            Coord::new(b.0, b.1),
            Coord::new(c.0, c.1),
            Coord::new(d.0, d.1),
        ],
        pivot,
    }
}

// pivot cells are marked with `@`
static TEMPLATES: [Template; 7] = [
    // I@II
    tpl([(0, -1), (0, 0), (0, 1), (0, 2)], Some(1)),
    // ZZ.
    // .@Z
    tpl([(0, -1), (0, 0), (1, 0), (1, 1)], Some(2)),
    // .SS
    // S@.
    tpl([(0, 0), (0, 1), (1, -1), (1, 0)], Some(3)),
    // .T.
    // T@T
    tpl([(0, 0), (1, -1), (1, 0), (1, 1)], Some(2)),
    // ..L
    // L@L
    tpl([(0, 1), (1, -1), (1, 0), (1, 1)], Some(2)),
    // J..
    // J@J
    tpl([(0, -1), (1, -1), (1, 0), (1, 1)], Some(2)),
    // OO
    // OO
    tpl([(0, 0), (0, 1), (1, 0), (1, 1)], None),
];

/// 2x2 integer rotation matrix. Each row is dotted with an `[x, y]` vector where `y`
/// points down the board.
pub type Matrix = [[i32; 2]; 2];

pub static CW: Matrix = [[0, -1], [1, 0]];
pub static CCW: Matrix = [[0, 1], [-1, 0]];

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Turn {
    Cw,
    Ccw,
}

impl Turn {
    pub fn matrix(self) -> &'static Matrix {
        match self {
            Turn::Cw => &CW,
            Turn::Ccw => &CCW,
        }
    }
}
