//! Pieces module - Tetromino shape masks and the piece instance type
//!
//! Every kind carries four precomputed rotation masks. J, L, S, T and Z use a
//! 3x3 box, I and O a 4x4 box. Rotation is a plain table lookup: there is no
//! kick system, a rotation that does not fit at the same origin is rejected by
//! the rules engine.

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of a single mino relative to the piece origin (top-left of its box)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin, in row-major order
pub type PieceShape = [MinoOffset; 4];

/// Absolute board coordinates of the four minos.
///
/// Wider than the origin type so any `i8` origin plus an offset is representable.
pub type PieceCells = [(i16, i16); 4];

/// One rotation state of a tetromino: a square boolean mask
///
/// Each row is stored as bits, most significant bit = leftmost column, so the
/// binary literals in the table below read like the shape itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    size: u8,
    rows: [u8; 4],
}

impl ShapeMask {
    const fn new(size: u8, rows: [u8; 4]) -> Self {
        Self { size, rows }
    }

    /// Side length of the mask box (3 or 4)
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the mask cell at (x, y) is filled
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        (self.rows[y as usize] >> (self.size - 1 - x)) & 1 == 1
    }

    /// Filled cells as (x, y) offsets, row by row
    pub fn filled_cells(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size)
                .filter(move |&x| self.is_filled(x, y))
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// The four filled offsets as a fixed array
    pub fn minos(&self) -> PieceShape {
        let mut out = [(0, 0); 4];
        for (slot, offset) in out.iter_mut().zip(self.filled_cells()) {
            *slot = offset;
        }
        out
    }
}

/// Shape table indexed by [kind][rotation]
static SHAPES: [[ShapeMask; 4]; 7] = [
    // I
    [
        ShapeMask::new(4, [0b0000, 0b1111, 0b0000, 0b0000]),
        ShapeMask::new(4, [0b0010, 0b0010, 0b0010, 0b0010]),
        ShapeMask::new(4, [0b0000, 0b0000, 0b1111, 0b0000]),
        ShapeMask::new(4, [0b0100, 0b0100, 0b0100, 0b0100]),
    ],
    // J
    [
        ShapeMask::new(3, [0b100, 0b111, 0b000, 0]),
        ShapeMask::new(3, [0b011, 0b010, 0b010, 0]),
        ShapeMask::new(3, [0b000, 0b111, 0b001, 0]),
        ShapeMask::new(3, [0b010, 0b010, 0b110, 0]),
    ],
    // L
    [
        ShapeMask::new(3, [0b001, 0b111, 0b000, 0]),
        ShapeMask::new(3, [0b010, 0b010, 0b011, 0]),
        ShapeMask::new(3, [0b000, 0b111, 0b100, 0]),
        ShapeMask::new(3, [0b110, 0b010, 0b010, 0]),
    ],
    // O (same for all rotations)
    [
        ShapeMask::new(4, [0b0110, 0b0110, 0b0000, 0b0000]),
        ShapeMask::new(4, [0b0110, 0b0110, 0b0000, 0b0000]),
        ShapeMask::new(4, [0b0110, 0b0110, 0b0000, 0b0000]),
        ShapeMask::new(4, [0b0110, 0b0110, 0b0000, 0b0000]),
    ],
    // S
    [
        ShapeMask::new(3, [0b011, 0b110, 0b000, 0]),
        ShapeMask::new(3, [0b010, 0b011, 0b001, 0]),
        ShapeMask::new(3, [0b000, 0b011, 0b110, 0]),
        ShapeMask::new(3, [0b100, 0b110, 0b010, 0]),
    ],
    // T
    [
        ShapeMask::new(3, [0b010, 0b111, 0b000, 0]),
        ShapeMask::new(3, [0b010, 0b011, 0b010, 0]),
        ShapeMask::new(3, [0b000, 0b111, 0b010, 0]),
        ShapeMask::new(3, [0b010, 0b110, 0b010, 0]),
    ],
    // Z
    [
        ShapeMask::new(3, [0b110, 0b011, 0b000, 0]),
        ShapeMask::new(3, [0b001, 0b011, 0b010, 0]),
        ShapeMask::new(3, [0b000, 0b110, 0b011, 0]),
        ShapeMask::new(3, [0b010, 0b110, 0b100, 0]),
    ],
];

/// Get the mask for a piece kind and rotation
pub fn get_mask(kind: PieceKind, rotation: Rotation) -> &'static ShapeMask {
    &SHAPES[kind.index()][rotation.index()]
}

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    get_mask(kind, rotation).minos()
}

/// Spawn position for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_X, SPAWN_Y);

/// A piece instance: kind, rotation and origin in board coordinates
///
/// The shape is always derived from `(kind, rotation)`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino in spawn orientation at the spawn origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Same piece at another origin
    pub fn at(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Same piece in another rotation
    pub fn rotated_to(self, rotation: Rotation) -> Self {
        Self { rotation, ..self }
    }

    /// Mask for the current rotation
    pub fn mask(&self) -> &'static ShapeMask {
        get_mask(self.kind, self.rotation)
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        self.mask().minos()
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> PieceCells {
        let (x, y) = (i16::from(self.x), i16::from(self.y));
        self.shape()
            .map(|(dx, dy)| (x + i16::from(dx), y + i16::from(dy)))
    }

    /// Fill colour of this piece
    pub fn color(&self) -> (u8, u8, u8) {
        self.kind.color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mask_has_four_minos() {
        for kind in PieceKind::ALL {
            for r in 0..4 {
                let mask = get_mask(kind, Rotation::from_index(r));
                assert_eq!(mask.filled_cells().count(), 4, "{:?} rotation {}", kind, r);
            }
        }
    }

    #[test]
    fn mask_sizes() {
        for kind in PieceKind::ALL {
            let expected = match kind {
                PieceKind::I | PieceKind::O => 4,
                _ => 3,
            };
            assert_eq!(get_mask(kind, Rotation::North).size(), expected);
        }
    }

    #[test]
    fn is_filled_reads_left_to_right() {
        let j = get_mask(PieceKind::J, Rotation::North);
        assert!(j.is_filled(0, 0));
        assert!(!j.is_filled(1, 0));
        assert!(!j.is_filled(2, 0));
        assert!(j.is_filled(2, 1));
        assert!(!j.is_filled(3, 1));
    }

    #[test]
    fn tetromino_cells_are_translated() {
        let piece = Tetromino::new(PieceKind::T).at(2, 5);
        assert_eq!(piece.cells(), [(3, 5), (2, 6), (3, 6), (4, 6)]);
    }

    #[test]
    fn cells_at_the_edge_of_the_origin_range() {
        let piece = Tetromino::new(PieceKind::I).at(i8::MAX, i8::MIN);
        assert_eq!(piece.cells(), [(127, -127), (128, -127), (129, -127), (130, -127)]);
    }
}
