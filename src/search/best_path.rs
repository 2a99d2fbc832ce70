//! Best continuation carried between search depths and between turns

use crate::board::Pos;

/// The best move found by the last accepted search depth followed by the
/// continuation it expects. Only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestPath {
    moves: Vec<Pos>,
}

impl BestPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the cached path with `best_move` followed by `continuation`.
    pub fn replace(&mut self, best_move: Pos, continuation: &[Pos]) {
        let mut moves = Vec::with_capacity(continuation.len() + 1);
        moves.push(best_move);
        moves.extend_from_slice(continuation);
        self.moves = moves;
        log::trace!("best path replaced: {:?}", self.moves);
    }

    /// Cached moves, best move first.
    #[inline]
    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    pub fn best_move(&self) -> Option<Pos> {
        self.moves.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}
