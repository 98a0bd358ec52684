//! Memory match game: pair each hiragana card with its romaji card.
//!
//! Two cards can be face up at once. A matching pair is cleared right away;
//! a mismatched pair stays visible until the next flip turns it back down.

use super::kana::{HIRAGANA, romaji};
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of kana/romaji pairs on the board.
pub const PAIRS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryCard {
    /// Text shown when the card is face up.
    pub face: &'static str,
    /// Kana this card belongs to; both cards of a pair share it.
    pub kana: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Already face up, already cleared or out of range.
    Ignored,
    /// First card of a new pair turned over.
    Opened,
    Matched,
    Mismatched,
}

#[derive(Clone, Debug)]
pub struct MemoryMatch {
    cards: Vec<MemoryCard>,
    open: Vec<usize>,
    cleared: Vec<bool>,
}

impl MemoryMatch {
    /// Shuffled board built from the first [`PAIRS`] hiragana.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<MemoryCard> = HIRAGANA[..PAIRS]
            .iter()
            .flat_map(|&kana| {
                [
                    MemoryCard { face: kana, kana },
                    MemoryCard {
                        face: romaji(kana).unwrap_or(kana),
                        kana,
                    },
                ]
            })
            .collect();
        cards.shuffle(rng);

        let cleared = vec![false; cards.len()];
        Self {
            cards,
            open: Vec::with_capacity(2),
            cleared,
        }
    }

    pub fn cards(&self) -> &[MemoryCard] {
        &self.cards
    }

    pub fn is_face_up(&self, index: usize) -> bool {
        self.open.contains(&index) || self.is_cleared(index)
    }

    pub fn is_cleared(&self, index: usize) -> bool {
        self.cleared.get(index).copied().unwrap_or(false)
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if index >= self.cards.len() || self.is_face_up(index) {
            return FlipOutcome::Ignored;
        }
        if self.open.len() == 2 {
            self.open.clear();
        }
        self.open.push(index);

        let [a, b] = self.open[..] else {
            return FlipOutcome::Opened;
        };
        let (first, second) = (self.cards[a], self.cards[b]);
        if first.kana == second.kana && first.face != second.face {
            self.cleared[a] = true;
            self.cleared[b] = true;
            self.open.clear();
            FlipOutcome::Matched
        } else {
            FlipOutcome::Mismatched
        }
    }

    pub fn is_done(&self) -> bool {
        self.cleared.iter().all(|&c| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board() -> MemoryMatch {
        MemoryMatch::new(&mut StdRng::seed_from_u64(3))
    }

    fn partner(game: &MemoryMatch, index: usize) -> usize {
        let card = game.cards()[index];
        game.cards()
            .iter()
            .position(|c| c.kana == card.kana && c.face != card.face)
            .unwrap()
    }

    fn non_partner(game: &MemoryMatch, index: usize) -> usize {
        let kana = game.cards()[index].kana;
        game.cards().iter().position(|c| c.kana != kana).unwrap()
    }

    #[test]
    fn test_board_has_eight_pairs() {
        let game = board();
        assert_eq!(game.cards().len(), 2 * PAIRS);

        for kana in &HIRAGANA[..PAIRS] {
            let faces: Vec<_> = game
                .cards()
                .iter()
                .filter(|c| c.kana == *kana)
                .map(|c| c.face)
                .collect();
            assert_eq!(faces.len(), 2);
            assert!(faces.contains(kana));
            assert!(faces.contains(&romaji(kana).unwrap()));
        }
        assert!(!game.is_done());
    }

    #[test]
    fn test_matching_pair_is_cleared() {
        let mut game = board();
        let other = partner(&game, 0);

        assert_eq!(game.flip(0), FlipOutcome::Opened);
        assert_eq!(game.flip(other), FlipOutcome::Matched);
        assert!(game.is_cleared(0));
        assert!(game.is_cleared(other));
        assert_eq!(game.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn test_mismatch_stays_up_until_next_flip() {
        let mut game = board();
        let wrong = non_partner(&game, 0);

        game.flip(0);
        assert_eq!(game.flip(wrong), FlipOutcome::Mismatched);
        assert!(game.is_face_up(0));
        assert!(game.is_face_up(wrong));

        let third = (0..game.cards().len())
            .find(|&i| i != 0 && i != wrong)
            .unwrap();
        assert_eq!(game.flip(third), FlipOutcome::Opened);
        assert!(!game.is_face_up(0));
        assert!(!game.is_face_up(wrong));
        assert!(game.is_face_up(third));
    }

    #[test]
    fn test_flipping_open_card_is_ignored() {
        let mut game = board();
        game.flip(1);
        assert_eq!(game.flip(1), FlipOutcome::Ignored);
        assert_eq!(game.flip(99), FlipOutcome::Ignored);
    }

    #[test]
    fn test_clearing_every_pair_finishes_game() {
        let mut game = board();
        for i in 0..game.cards().len() {
            if game.is_cleared(i) {
                continue;
            }
            let other = partner(&game, i);
            game.flip(i);
            assert_eq!(game.flip(other), FlipOutcome::Matched);
        }
        assert!(game.is_done());
    }
}
