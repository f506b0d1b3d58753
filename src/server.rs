//! HTTP move service.
//!
//! One route: `GET /{board}/` where the path segment is a 9-digit
//! board encoding. The service decodes the board, lets the engine
//! play one move for whichever mark is on move (unless the game is
//! already over), and replies with the authoritative board plus
//! terminal flags. It holds no state between requests.

use crate::game::{self, Square, engine};
use crate::protocol::{self, MoveResponse};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, info, instrument};

/// Builds the service router.
pub fn router() -> Router {
    Router::new().route("/{board}/", get(play))
}

/// Plays one computer move against the encoded board.
///
/// A path that is not nine digits of `0`-`2` is a 404, mirroring a
/// route pattern of `[012]{9}`. A board that already holds a win or
/// a full grid passes through unchanged, with the terminal flags
/// set.
#[instrument]
async fn play(Path(encoded): Path<String>) -> Result<Json<MoveResponse>, StatusCode> {
    let mut board = protocol::decode_board(&encoded).map_err(|error| {
        debug!(%error, encoded, "rejecting malformed board path");
        StatusCode::NOT_FOUND
    })?;

    if let Some(pos) = engine::choose_move(&board) {
        let mover = game::to_move(&board);
        board
            .set(pos, Square::Occupied(mover))
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
        info!(position = pos, ?mover, "engine played");
    } else {
        debug!(status = ?game::status(&board), "board already terminal");
    }

    Ok(Json(MoveResponse::from_board(&board)))
}
