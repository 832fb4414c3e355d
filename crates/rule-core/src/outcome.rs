//! Terminal-state classification for the side to move in a position.

use std::fmt;

use crate::color::Color;
use crate::movegen::{generate_legal_moves, king_in_check};
use crate::position::Position;

/// Classification of a position from the perspective of the side to move.
///
/// Draw rules the crate does not implement — threefold repetition, the
/// fifty-move rule, insufficient material — never appear here; a position
/// that would be a draw under those rules still classifies as [`Ongoing`](Outcome::Ongoing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move has at least one legal move and is not in check.
    Ongoing,
    /// White is in check and has at least one legal move.
    WhiteInCheck,
    /// Black is in check and has at least one legal move.
    BlackInCheck,
    /// White is in check with no legal moves: Black wins.
    WhiteCheckmate,
    /// Black is in check with no legal moves: White wins.
    BlackCheckmate,
    /// The side to move is not in check but has no legal moves.
    Stalemate,
}

impl Outcome {
    /// Return `true` if this outcome ends the game.
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::WhiteCheckmate | Outcome::BlackCheckmate | Outcome::Stalemate
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::WhiteInCheck => "white in check",
            Outcome::BlackInCheck => "black in check",
            Outcome::WhiteCheckmate => "checkmate (black wins)",
            Outcome::BlackCheckmate => "checkmate (white wins)",
            Outcome::Stalemate => "stalemate",
        };
        write!(f, "{s}")
    }
}

/// Classify `position` from the perspective of its side to move.
pub(crate) fn classify(position: &Position) -> Outcome {
    let us = position.side_to_move();
    let in_check = king_in_check(position, us);
    let has_moves = !generate_legal_moves(position).is_empty();

    match (in_check, has_moves) {
        (true, true) => match us {
            Color::White => Outcome::WhiteInCheck,
            Color::Black => Outcome::BlackInCheck,
        },
        (true, false) => match us {
            Color::White => Outcome::WhiteCheckmate,
            Color::Black => Outcome::BlackCheckmate,
        },
        (false, true) => Outcome::Ongoing,
        (false, false) => Outcome::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn starting_position_is_ongoing() {
        assert_eq!(classify(&Position::starting_position()), Outcome::Ongoing);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        // 1.f3 e5 2.g4 Qh4#
        let position: Position = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
        assert_eq!(classify(&position), Outcome::WhiteCheckmate);
    }

    #[test]
    fn stalemate_position() {
        // Black king a8, no legal moves, not in check.
        let position: Position = "k7/8/1Q6/8/8/8/8/K7 b - - 0 1".parse().unwrap();
        assert_eq!(classify(&position), Outcome::Stalemate);
    }

    #[test]
    fn check_without_mate() {
        let position: Position = "4k3/8/8/8/8/8/4R3/4K3 b - - 0 1".parse().unwrap();
        assert_eq!(classify(&position), Outcome::BlackInCheck);
    }

    #[test]
    fn is_terminal() {
        assert!(Outcome::WhiteCheckmate.is_terminal());
        assert!(Outcome::BlackCheckmate.is_terminal());
        assert!(Outcome::Stalemate.is_terminal());
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(!Outcome::WhiteInCheck.is_terminal());
    }
}
