use anyhow::Result;
use tracing::info;

use rule_core::{apply, initial_position, MoveRequest, Square};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("chessrule starting");

    let position = initial_position();
    info!(fen = %position, "initial position");

    let moves = [
        MoveRequest::new('P', Square::E2, Square::E4),
        MoveRequest::new('p', Square::E7, Square::E5),
        MoveRequest::new('N', Square::G1, Square::F3),
    ];

    let mut position = position;
    for request in moves {
        let (next, outcome) = apply(&position, request)?;
        info!(%next, ?outcome, "applied move");
        position = next;
    }

    Ok(())
}
