//! Piece catalog: 7 tetromino kinds x 4 rotation states x 4 cell offsets.
//!
//! Rotation states are precomputed classic (non-SRS) tables, not derived
//! algorithmically. Offsets are (col, row) relative to the piece origin,
//! with rows growing downward.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece origin.
pub type CellOffset = (i8, i8);

/// Shape of a piece: 4 cell offsets.
pub type PieceShape = [CellOffset; 4];

const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
        [(0, 0), (1, 0), (2, 0), (3, 0)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // J
    [
        [(0, 0), (1, 0), (2, 0), (2, 1)],
        [(0, 2), (1, 2), (1, 1), (1, 0)],
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 2), (1, 1), (1, 0), (2, 0)],
    ],
    // L
    [
        [(0, 1), (0, 0), (1, 0), (2, 0)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 0)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
    ],
    // O
    [
        [(1, 0), (1, 1), (2, 0), (2, 1)],
        [(1, 0), (1, 1), (2, 0), (2, 1)],
        [(1, 0), (1, 1), (2, 0), (2, 1)],
        [(1, 0), (1, 1), (2, 0), (2, 1)],
    ],
    // S
    [
        [(0, 1), (1, 1), (1, 0), (2, 0)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(0, 1), (1, 1), (1, 0), (2, 0)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 2), (1, 1), (2, 1), (2, 0)],
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(1, 2), (1, 1), (2, 1), (2, 0)],
    ],
    // T
    [
        [(0, 0), (1, 0), (1, 1), (2, 0)],
        [(0, 1), (1, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 0), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 1)],
    ],
];

/// Get the shape for a piece kind and rotation index.
///
/// The rotation index is always taken modulo 4, so callers may pass the
/// incremented value directly when rotating forward.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    SHAPES[kind.index()][(rotation % 4) as usize]
}
