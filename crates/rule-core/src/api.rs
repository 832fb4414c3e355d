//! Boundary adapters (§4.7): plain-data views of a [`Position`] for callers
//! that render a board or hint legal destinations instead of walking
//! bitboards themselves.

use std::collections::{BTreeMap, BTreeSet};

use crate::color::Color;
use crate::movegen::{generate_legal_moves, king_in_check};
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// The engine's starting position.
pub fn initial_position() -> Position {
    Position::starting_position()
}

/// Map each occupied square (algebraic notation) to its piece code.
///
/// Uppercase for White, lowercase for Black (`P N B R Q K` / `p n b r q k`).
pub fn piece_map(position: &Position) -> BTreeMap<String, char> {
    let mut map = BTreeMap::new();
    for sq in Square::all() {
        if let (Some(kind), Some(color)) = (position.piece_on(sq), position.color_on(sq)) {
            let piece = Piece::new(kind, color);
            map.insert(sq.to_string(), piece.fen_char());
        }
    }
    map
}

/// Map each square with at least one legal move to the set of its legal destinations.
///
/// Every destination here also appears in the pseudo-legal map (the legal
/// set is always a subset of it) — this is the public, render-friendly view
/// of [`generate_legal_moves`](crate::generate_legal_moves).
pub fn legal_moves(position: &Position) -> BTreeMap<String, BTreeSet<String>> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for mv in generate_legal_moves(position).as_slice() {
        map.entry(mv.source().to_string())
            .or_default()
            .insert(mv.dest().to_string());
    }
    map
}

/// Return `true` if `color`'s king is attacked in `position`.
pub fn in_check(position: &Position, color: Color) -> bool {
    king_in_check(position, color)
}

/// A square's algebraic name paired with its rendering color (`'w'`/`'b'`).
///
/// Static layout for callers that draw a board independently of any
/// particular position: `square-color = 'w'` when `(file + rank)` is even.
pub fn board_layout() -> [(String, char); 64] {
    std::array::from_fn(|i| {
        let sq = Square::from_index(i as u8).expect("0..64 is always a valid square index");
        let parity = (sq.file().index() + sq.rank().index()) % 2;
        let color = if parity == 0 { 'w' } else { 'b' };
        (sq.to_string(), color)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::{apply, MoveRequest};
    use crate::square::Square;

    #[test]
    fn initial_position_has_20_legal_moves() {
        let position = initial_position();
        let moves = legal_moves(&position);
        let total: usize = moves.values().map(|dests| dests.len()).sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn piece_map_has_32_pieces_at_start() {
        let position = initial_position();
        let map = piece_map(&position);
        assert_eq!(map.len(), 32);
        assert_eq!(map.get("e1"), Some(&'K'));
        assert_eq!(map.get("e8"), Some(&'k'));
    }

    #[test]
    fn board_layout_is_checkerboard() {
        let layout = board_layout();
        assert_eq!(layout.len(), 64);
        let a1 = layout.iter().find(|(sq, _)| sq == "a1").unwrap();
        let h1 = layout.iter().find(|(sq, _)| sq == "h1").unwrap();
        assert_ne!(a1.1, h1.1);
    }

    #[test]
    fn in_check_false_at_start() {
        let position = initial_position();
        assert!(!in_check(&position, Color::White));
        assert!(!in_check(&position, Color::Black));
    }

    #[test]
    fn piece_map_round_trip_after_move() {
        let position = initial_position();
        let before = piece_map(&position);
        let (after, _) = apply(&position, MoveRequest::new('P', Square::E2, Square::E4)).unwrap();
        let after_map = piece_map(&after);
        assert!(!after_map.contains_key("e2"));
        assert_eq!(after_map.get("e4"), Some(&'P'));
        assert_eq!(before.len(), after_map.len());
    }
}
