//! Sliding piece (bishop, rook, queen) pseudo-legal move generation.

use crate::attacks::{bishop_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::position::Position;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::MoveList;

/// Generate pseudo-legal slider moves (bishops, rooks, queens). Blockers stop
/// a ray; a friendly blocker excludes its square, an enemy blocker includes it.
/// Self-check (including pins) is left to the legality filter.
pub(super) fn gen_sliders(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();
    let friendly = position.side(us);
    let occupied = position.occupied();

    gen_slider_type(position, list, friendly, occupied, PieceKind::Bishop, bishop_attacks);
    gen_slider_type(position, list, friendly, occupied, PieceKind::Rook, rook_attacks);
    gen_slider_type(
        position,
        list,
        friendly,
        occupied,
        PieceKind::Queen,
        |sq, occ| rook_attacks(sq, occ) | bishop_attacks(sq, occ),
    );
}

fn gen_slider_type(
    position: &Position,
    list: &mut MoveList,
    friendly: Bitboard,
    occupied: Bitboard,
    kind: PieceKind,
    attacks_fn: impl Fn(Square, Bitboard) -> Bitboard,
) {
    let us = position.side_to_move();
    let mut pieces = position.pieces(kind) & position.side(us);

    while let Some((src, rest)) = pieces.pop_lsb() {
        pieces = rest;
        let mut targets = attacks_fn(src, occupied) & !friendly;
        while let Some((dst, rest2)) = targets.pop_lsb() {
            targets = rest2;
            list.push(Move::new(src, dst));
        }
    }
}
