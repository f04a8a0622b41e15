//! Fixed-capacity move container.

use std::fmt;
use std::ops::Deref;

use crate::game_state::chess_rules::MAX_POSITION_MOVES;
use crate::game_state::chess_types::Move;

/// Legal moves in generation order.
///
/// Backed by an inline array so generation never allocates.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; MAX_POSITION_MOVES],
    len: usize,
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveList {
    #[inline]
    pub const fn new() -> Self {
        Self {
            moves: [0; MAX_POSITION_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_POSITION_MOVES, "move list overflow");
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }
}

impl Deref for MoveList {
    type Target = [Move];

    #[inline]
    fn deref(&self) -> &[Move] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::MoveList;

    #[test]
    fn push_preserves_insertion_order() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        list.push(7);
        list.push(3);
        list.push(11);

        assert_eq!(list.len(), 3);
        assert_eq!(list.as_slice(), &[7, 3, 11]);
        assert!(list.contains(&3));
        assert_eq!((&list).into_iter().copied().sum::<u32>(), 21);
    }
}
