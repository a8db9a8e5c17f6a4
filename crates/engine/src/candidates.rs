//! Move enumeration.
//!
//! The search space is every rotation the piece distinguishes times a fixed
//! ten-column shift window around the spawn column. Vertical position is not
//! enumerated: each candidate is hard-dropped by the simulator.

use arrayvec::ArrayVec;

use crate::core::Piece;
use crate::types::{MAX_SHIFT, MIN_SHIFT};

/// Width of the shift window
pub const SHIFT_COUNT: usize = (MAX_SHIFT - MIN_SHIFT + 1) as usize;

/// Upper bound on candidates per piece (4 rotations x 10 shifts)
pub const MAX_CANDIDATES: usize = 4 * SHIFT_COUNT;

/// One point in the search space: quarter turns, then a horizontal shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub rotation: u8,
    pub shift: i8,
}

impl Candidate {
    pub const fn new(rotation: u8, shift: i8) -> Self {
        Self { rotation, shift }
    }
}

/// All candidates for `piece`, rotation-major, both ascending.
///
/// The order is observable: the selector breaks score ties in favour of the
/// earliest candidate.
pub fn candidates(piece: &Piece) -> ArrayVec<Candidate, MAX_CANDIDATES> {
    let mut out = ArrayVec::new();
    for rotation in 0..piece.symmetry() {
        for shift in MIN_SHIFT..=MAX_SHIFT {
            out.push(Candidate::new(rotation, shift));
        }
    }
    out
}
