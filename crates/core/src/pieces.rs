//! Pieces module - tetromino catalog and rotation transform
//!
//! Every shape is an anchor plus four `(dx, dy)` offsets. Rotation is the raw
//! 90° clockwise transform `(dx, dy) -> (-dy, dx)` applied to each offset, so
//! four quarter turns always restore a piece. Pieces with symmetry order 1
//! never rotate.

use crate::types::PieceKind;

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Immutable catalog entry for one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    pub kind: PieceKind,
    /// Spawn anchor `(x, y)`
    pub anchor: (i8, i8),
    pub offsets: [MinoOffset; 4],
    /// Number of distinct orientations: 1, 2 or 4
    pub symmetry: u8,
}

/// Shape catalog, indexed by [`PieceKind::index`]
pub const CATALOG: [PieceShape; 7] = [
    PieceShape {
        kind: PieceKind::S,
        anchor: (4, 1),
        offsets: [(-1, 0), (0, 0), (0, -1), (1, -1)],
        symmetry: 2,
    },
    PieceShape {
        kind: PieceKind::Z,
        anchor: (4, 1),
        offsets: [(-1, -1), (0, -1), (0, 0), (1, 0)],
        symmetry: 2,
    },
    PieceShape {
        kind: PieceKind::J,
        anchor: (4, 1),
        offsets: [(0, -1), (0, 0), (0, 1), (-1, 1)],
        symmetry: 4,
    },
    PieceShape {
        kind: PieceKind::L,
        anchor: (4, 1),
        offsets: [(0, -1), (0, 0), (0, 1), (1, 1)],
        symmetry: 4,
    },
    PieceShape {
        kind: PieceKind::I,
        anchor: (4, 2),
        offsets: [(0, -2), (0, -1), (0, 0), (0, 1)],
        symmetry: 2,
    },
    PieceShape {
        kind: PieceKind::O,
        anchor: (4, 0),
        offsets: [(0, 0), (1, 0), (0, 1), (1, 1)],
        symmetry: 1,
    },
    PieceShape {
        kind: PieceKind::T,
        anchor: (4, 1),
        offsets: [(-1, 0), (0, 0), (1, 0), (0, -1)],
        symmetry: 4,
    },
];

/// Look up the catalog entry for a piece kind
pub fn get_shape(kind: PieceKind) -> &'static PieceShape {
    &CATALOG[kind.index()]
}

/// A live piece instance: a value copy of a catalog shape that can be moved
/// and rotated. Copies are independent, which is what the move search relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    offsets: [MinoOffset; 4],
    symmetry: u8,
}

impl Piece {
    /// Create a piece at its spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            x: shape.anchor.0,
            y: shape.anchor.1,
            offsets: shape.offsets,
            symmetry: shape.symmetry,
        }
    }

    pub fn offsets(&self) -> &[MinoOffset; 4] {
        &self.offsets
    }

    pub fn symmetry(&self) -> u8 {
        self.symmetry
    }

    /// Rotate clockwise `times` quarter turns (no-op for symmetry order 1)
    pub fn rotate(&mut self, times: u8) {
        if self.symmetry <= 1 {
            return;
        }
        for _ in 0..times {
            for offset in &mut self.offsets {
                *offset = (-offset.1, offset.0);
            }
        }
    }

    /// Shift the anchor; validation is the board's job
    pub fn translate(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Copy of this piece rotated `rot` times then moved by `(dx, dy)`
    pub fn moved(&self, dx: i8, dy: i8, rot: u8) -> Self {
        let mut out = *self;
        out.rotate(rot);
        out.translate(dx, dy);
        out
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).kind, kind);
        }
    }

    #[test]
    fn single_rotation_of_t_points_right() {
        let mut t = Piece::spawn(PieceKind::T);
        t.rotate(1);
        // Nub that pointed up now points right.
        assert_eq!(t.offsets(), &[(0, -1), (0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn line_piece_turns_horizontal() {
        let mut i = Piece::spawn(PieceKind::I);
        i.rotate(1);
        let mut xs: Vec<i8> = i.cells().iter().map(|c| c.0).collect();
        xs.sort();
        assert_eq!(xs, vec![3, 4, 5, 6]);
        assert!(i.cells().iter().all(|c| c.1 == 2));
    }

    #[test]
    fn moved_returns_independent_copy() {
        let p = Piece::spawn(PieceKind::L);
        let q = p.moved(2, 3, 1);
        assert_eq!(p, Piece::spawn(PieceKind::L));
        assert_eq!((q.x, q.y), (6, 4));
        assert_ne!(q.offsets(), p.offsets());
    }
}
