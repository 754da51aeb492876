//! Legal destinations for the currently selected origin square.

use shakmaty::Square;

/// A destination the authority confirmed for the selected origin
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LegalMove {
    pub to: Square,
    /// Moving here requires choosing a promotion piece
    pub promotion: bool,
}

/// Destinations for one origin. Always replaced, never merged across selections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveCache {
    moves: Vec<LegalMove>,
}

impl MoveCache {
    /// Replace the contents. Repeated destinations (one per promotion piece on
    /// the wire) collapse into a single entry, order of first appearance kept.
    pub fn replace<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = LegalMove>,
    {
        self.moves.clear();
        for mv in moves {
            match self.moves.iter_mut().find(|m| m.to == mv.to) {
                Some(existing) => existing.promotion |= mv.promotion,
                None => self.moves.push(mv),
            }
        }
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn get(&self, to: Square) -> Option<&LegalMove> {
        self.moves.iter().find(|m| m.to == to)
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LegalMove> {
        self.moves.iter()
    }
}
