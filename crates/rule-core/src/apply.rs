//! Move execution via copy-make, and the public move-submission boundary.
//!
//! [`Position::make_move`] is the pure copy-make step used by both move
//! generation's legality filter and [`apply`], the public entry point callers
//! use to submit a move. `apply` is the only place in this crate that does
//! not trust its input: it validates turn and piece identity, checks
//! membership in the legal-move set, applies the move, and classifies the
//! resulting [`Outcome`].

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::position::{LastMove, Position};
use crate::castle_rights::CastleRights;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::error::RejectReason;
use crate::movegen::generate_legal_moves;
use crate::outcome::{classify, Outcome};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::zobrist;

/// A candidate move as submitted by a caller: the piece code expected on
/// `from` (for validation against the actual position) and the two squares.
///
/// This is the boundary type for [`apply`] — unlike [`Move`], it carries no
/// promotion choice, since this crate always promotes to queen (§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Expected piece code on the origin square (`P N B R Q K`, lowercase for Black).
    pub piece: char,
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

impl MoveRequest {
    /// Construct a move request.
    pub fn new(piece: char, from: Square, to: Square) -> MoveRequest {
        MoveRequest { piece, from, to }
    }
}

/// Submit a move for validation and application.
///
/// Returns the resulting position and its terminal-state classification on
/// success, or the reason the move was rejected. `position` is never
/// mutated; on rejection, the caller's binding is simply not replaced.
pub fn apply(position: &Position, request: MoveRequest) -> Result<(Position, Outcome), RejectReason> {
    let us = position.side_to_move();
    let declared_color = if request.piece.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    if declared_color != us {
        let reason = RejectReason::NotYourTurn {
            color: if us == Color::White { "White" } else { "Black" },
        };
        tracing::debug!(?reason, piece = %request.piece, "apply rejected move");
        return Err(reason);
    }

    let on_square = Piece::from_fen_char(request.piece).filter(|p| {
        position.piece_on(request.from) == Some(p.kind()) && position.color_on(request.from) == Some(us)
    });
    if on_square.is_none() {
        let reason = RejectReason::PieceMismatch { piece: request.piece };
        tracing::debug!(?reason, from = %request.from, "apply rejected move");
        return Err(reason);
    }

    // A promoting pawn has four candidate moves sharing (from, to), one per
    // promotion piece; this crate always promotes to queen (§4.2 Non-goal:
    // no under-promotion), so prefer that candidate when more than one matches.
    let legal = generate_legal_moves(position);
    let mut found: Option<Move> = None;
    for &m in legal.as_slice() {
        if m.source() != request.from || m.dest() != request.to {
            continue;
        }
        if !m.is_promotion() || m.promotion_piece() == crate::chess_move::PromotionPiece::Queen {
            found = Some(m);
            break;
        }
        found.get_or_insert(m);
    }
    let mv = match found {
        Some(mv) => mv,
        None => {
            tracing::debug!(reason = ?RejectReason::IllegalMove, from = %request.from, to = %request.to, "apply rejected move");
            return Err(RejectReason::IllegalMove);
        }
    };

    let next = position.make_move(mv);
    let outcome = classify(&next);
    tracing::trace!(%mv, ?outcome, "apply applied move");
    Ok((next, outcome))
}

/// Maps each square index to the castling rights that must be removed when
/// that square is the source or destination of any move.
const CASTLE_RIGHTS_REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    // E1 (index 4): White king moves — remove both white rights.
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    // A1 (index 0): White queenside rook.
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    // H1 (index 7): White kingside rook.
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    // E8 (index 60): Black king moves — remove both black rights.
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    // A8 (index 56): Black queenside rook.
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    // H8 (index 63): Black kingside rook.
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

impl Position {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Uses reverse-attack lookup: attack patterns are cast from the target
    /// square and intersected with the attacker's pieces of each type.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        self.is_square_attacked_with_occ(sq, by_color, self.occupied())
    }

    /// Return `true` if `sq` is attacked by `by_color`, using a custom `occupied` bitboard.
    ///
    /// Useful for king-move legality checks where the king is temporarily
    /// removed from the occupied set.
    pub(crate) fn is_square_attacked_with_occ(
        &self,
        sq: Square,
        by_color: Color,
        occupied: Bitboard,
    ) -> bool {
        let them = self.side(by_color);

        // Knight attacks: non-sliding, occupancy-independent.
        if (knight_attacks(sq) & them & self.pieces(PieceKind::Knight)).is_nonempty() {
            return true;
        }

        // King attacks: non-sliding, occupancy-independent.
        if (king_attacks(sq) & them & self.pieces(PieceKind::King)).is_nonempty() {
            return true;
        }

        // Pawn attacks: a white pawn on X attacks Y iff pawn_attacks(Black, Y) contains X.
        // So to find pawns of `by_color` that attack `sq`, we cast pawn_attacks from `sq`
        // using the *opposite* color.
        let opp_color = by_color.flip();
        if (pawn_attacks(opp_color, sq) & them & self.pieces(PieceKind::Pawn)).is_nonempty() {
            return true;
        }

        // Rook / Queen (orthogonal sliders).
        let rook_queen = (self.pieces(PieceKind::Rook) | self.pieces(PieceKind::Queen)) & them;
        if (rook_attacks(sq, occupied) & rook_queen).is_nonempty() {
            return true;
        }

        // Bishop / Queen (diagonal sliders).
        let bishop_queen = (self.pieces(PieceKind::Bishop) | self.pieces(PieceKind::Queen)) & them;
        if (bishop_attacks(sq, occupied) & bishop_queen).is_nonempty() {
            return true;
        }

        false
    }

    /// Apply a move and return the resulting position. Copy-make: `self` is not modified.
    ///
    /// # Errors
    ///
    /// If the source square is empty (invalid move), the position is returned unchanged.
    pub fn make_move(&self, mv: Move) -> Position {
        let mut b = *self;
        let us = b.side_to_move();
        let them = us.flip();
        let src = mv.source();
        let dst = mv.dest();

        // The piece on the source square must exist for a valid move.
        let moving_piece = match b.piece_on(src) {
            Some(kind) => kind,
            None => return b,
        };

        // XOR out old en passant file from hash (before clearing).
        if let Some(old_ep) = b.en_passant() {
            b.set_hash(b.hash() ^ zobrist::EN_PASSANT_FILE[old_ep.file().index()]);
        }

        // XOR out old castling rights from hash (before any modifications).
        b.set_hash(b.hash() ^ zobrist::CASTLING[b.castling().bits() as usize]);

        // Clear en passant target set by the previous move.
        b.set_en_passant(None);

        // Detect captures before we move any pieces. Castling moves the king
        // to the rook's square in some encodings, so exclude castling here.
        let is_capture = b.occupied().contains(dst) && !mv.is_castle();

        match mv.kind() {
            MoveKind::Normal => {
                // Remove the captured piece (if any) before placing ours.
                if is_capture && let Some(captured_kind) = b.piece_on(dst) {
                    b.toggle_piece(dst, captured_kind, them);
                    b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[Piece::new(captured_kind, them).index()][dst.index()]);
                }

                // Move our piece: XOR it off src and onto dst.
                b.toggle_piece(src, moving_piece, us);
                b.toggle_piece(dst, moving_piece, us);
                let piece_idx = Piece::new(moving_piece, us).index();
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[piece_idx][src.index()]);
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[piece_idx][dst.index()]);

                // Record en passant target square after a double pawn push.
                if moving_piece == PieceKind::Pawn {
                    let rank_diff = dst.index().abs_diff(src.index());
                    if rank_diff == 16 {
                        let ep_idx = if us == Color::White {
                            src.index() + 8
                        } else {
                            src.index() - 8
                        };
                        b.set_en_passant(Square::from_index(ep_idx as u8));
                    }
                }
            }

            MoveKind::Promotion => {
                // Remove the captured piece at the promotion square (if any).
                if is_capture && let Some(captured_kind) = b.piece_on(dst) {
                    b.toggle_piece(dst, captured_kind, them);
                    b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[Piece::new(captured_kind, them).index()][dst.index()]);
                }

                // Remove the promoting pawn from src.
                b.toggle_piece(src, PieceKind::Pawn, us);
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[Piece::new(PieceKind::Pawn, us).index()][src.index()]);

                // Place the promoted piece on dst.
                let promo_kind = mv.promotion_piece().to_piece_kind();
                b.toggle_piece(dst, promo_kind, us);
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[Piece::new(promo_kind, us).index()][dst.index()]);
            }

            MoveKind::EnPassant => {
                // Move our pawn to the en passant target square.
                b.toggle_piece(src, PieceKind::Pawn, us);
                b.toggle_piece(dst, PieceKind::Pawn, us);
                let pawn_idx = Piece::new(PieceKind::Pawn, us).index();
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[pawn_idx][src.index()]);
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[pawn_idx][dst.index()]);

                // Remove the captured pawn, which stands on the same rank as
                // `src` and the same file as `dst` — one rank behind `dst`.
                let captured_idx = if us == Color::White {
                    dst.index() - 8 // captured pawn is south of the EP square
                } else {
                    dst.index() + 8 // captured pawn is north of the EP square
                };
                if let Some(captured_sq) = Square::from_index(captured_idx as u8) {
                    b.toggle_piece(captured_sq, PieceKind::Pawn, them);
                    b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[Piece::new(PieceKind::Pawn, them).index()][captured_sq.index()]);
                }
            }

            MoveKind::Castling => {
                // Move the king.
                b.toggle_piece(src, PieceKind::King, us);
                b.toggle_piece(dst, PieceKind::King, us);
                let king_idx = Piece::new(PieceKind::King, us).index();
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[king_idx][src.index()]);
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[king_idx][dst.index()]);

                // Move the rook to its post-castling square.
                let (rook_src, rook_dst) = match dst.index() {
                    6 => (Square::H1, Square::F1),   // White kingside:  G1
                    2 => (Square::A1, Square::D1),   // White queenside: C1
                    62 => (Square::H8, Square::F8),  // Black kingside:  G8
                    58 => (Square::A8, Square::D8),  // Black queenside: C8
                    _ => return b,                   // should never occur for a valid move
                };
                b.toggle_piece(rook_src, PieceKind::Rook, us);
                b.toggle_piece(rook_dst, PieceKind::Rook, us);
                let rook_idx = Piece::new(PieceKind::Rook, us).index();
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[rook_idx][rook_src.index()]);
                b.set_hash(b.hash() ^ zobrist::PIECE_SQUARE[rook_idx][rook_dst.index()]);
            }
        }

        // Revoke castling rights affected by any piece touching a corner or king square.
        let new_castling = b
            .castling()
            .remove(CASTLE_RIGHTS_REVOKE[src.index()])
            .remove(CASTLE_RIGHTS_REVOKE[dst.index()]);
        b.set_castling(new_castling);

        // XOR in new castling rights.
        b.set_hash(b.hash() ^ zobrist::CASTLING[new_castling.bits() as usize]);

        // XOR in new en passant file (if set by a double pawn push).
        if let Some(ep_sq) = b.en_passant() {
            b.set_hash(b.hash() ^ zobrist::EN_PASSANT_FILE[ep_sq.file().index()]);
        }

        // Update the halfmove clock (reset on pawn moves and captures).
        if moving_piece == PieceKind::Pawn || is_capture || mv.kind() == MoveKind::EnPassant {
            b.set_halfmove_clock(0);
        } else {
            b.set_halfmove_clock(b.halfmove_clock() + 1);
        }

        // Switch the side to move.
        b.set_side_to_move(them);

        // XOR side-to-move key (always changes).
        b.set_hash(b.hash() ^ zobrist::SIDE_TO_MOVE);

        // Increment the fullmove counter after Black's move.
        if us == Color::Black {
            b.set_fullmove_number(b.fullmove_number() + 1);
        }

        let moved_char = if us == Color::White {
            moving_piece.fen_char().to_ascii_uppercase()
        } else {
            moving_piece.fen_char().to_ascii_lowercase()
        };
        b.set_last_move(LastMove {
            piece: moved_char,
            from: src,
            to: dst,
        });

        b
    }
}
