//! King move and castling generation.

use crate::attacks::king_attacks;
use crate::position::Position;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::MoveList;
use super::is_attacked;

/// Generate pseudo-legal king moves (normal moves + castling). Unlike the other
/// pieces, attacked-square filtering happens here rather than in the legality
/// filter: a king move is only emitted if its destination (and, for castling,
/// the whole transit path) is not attacked by the opponent.
pub(super) fn gen_king(position: &Position, king_sq: Square, list: &mut MoveList) {
    let us = position.side_to_move();
    let them = us.flip();
    let friendly = position.side(us);
    // Remove king from occupied so sliding pieces "see through" the king when
    // checking destination safety (prevents the king from blocking its own retreat).
    let occupied_no_king = position.occupied() ^ king_sq.bitboard();

    // Normal king moves
    let mut targets = king_attacks(king_sq) & !friendly;
    while let Some((dst, rest)) = targets.pop_lsb() {
        targets = rest;
        if !is_attacked(position, dst, them, occupied_no_king) {
            list.push(Move::new(king_sq, dst));
        }
    }

    // Castling — only when not currently in check
    if is_attacked(position, king_sq, them, position.occupied()) {
        return;
    }

    let castling = position.castling();
    let occupied = position.occupied();

    match us {
        Color::White => {
            // Kingside: E1→G1, F1 and G1 must be empty and not attacked
            if castling.contains(CastleRights::WHITE_KING) {
                let path_clear =
                    !occupied.contains(Square::F1) && !occupied.contains(Square::G1);
                if path_clear
                    && !is_attacked(position, Square::F1, them, occupied)
                    && !is_attacked(position, Square::G1, them, occupied)
                {
                    list.push(Move::new_castle(Square::E1, Square::G1));
                }
            }
            // Queenside: E1→C1, B1/C1/D1 must be empty, C1 and D1 not attacked
            if castling.contains(CastleRights::WHITE_QUEEN) {
                let path_clear = !occupied.contains(Square::B1)
                    && !occupied.contains(Square::C1)
                    && !occupied.contains(Square::D1);
                if path_clear
                    && !is_attacked(position, Square::C1, them, occupied)
                    && !is_attacked(position, Square::D1, them, occupied)
                {
                    list.push(Move::new_castle(Square::E1, Square::C1));
                }
            }
        }
        Color::Black => {
            // Kingside: E8→G8, F8 and G8 must be empty and not attacked
            if castling.contains(CastleRights::BLACK_KING) {
                let path_clear =
                    !occupied.contains(Square::F8) && !occupied.contains(Square::G8);
                if path_clear
                    && !is_attacked(position, Square::F8, them, occupied)
                    && !is_attacked(position, Square::G8, them, occupied)
                {
                    list.push(Move::new_castle(Square::E8, Square::G8));
                }
            }
            // Queenside: E8→C8, B8/C8/D8 must be empty, C8 and D8 not attacked
            if castling.contains(CastleRights::BLACK_QUEEN) {
                let path_clear = !occupied.contains(Square::B8)
                    && !occupied.contains(Square::C8)
                    && !occupied.contains(Square::D8);
                if path_clear
                    && !is_attacked(position, Square::C8, them, occupied)
                    && !is_attacked(position, Square::D8, them, occupied)
                {
                    list.push(Move::new_castle(Square::E8, Square::C8));
                }
            }
        }
    }
}
