//! RNG module - uniform random piece generation
//!
//! Each draw picks one of the seven kinds with probability 1/7, independent of
//! every previous draw. No bag, no history weighting.

use rand::Rng;

use crate::pieces::Tetromino;
use crate::types::PieceKind;

/// Pick a kind uniformly at random
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}

/// Spawn a random piece using the caller's RNG
///
/// The piece starts in rotation 0 at the spawn origin; its position is not
/// checked against any board.
pub fn random_piece_with<R: Rng + ?Sized>(rng: &mut R) -> Tetromino {
    Tetromino::new(random_kind(rng))
}

/// Spawn a random piece using the thread-local RNG
pub fn random_piece() -> Tetromino {
    random_piece_with(&mut rand::rng())
}
