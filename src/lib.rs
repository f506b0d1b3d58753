//! Tic-tac-toe split across an HTTP boundary.
//!
//! A client-side [`GameController`] owns the board and the turn
//! gate, renders through an injected [`Renderer`], and asks a
//! remote move service for the computer's replies through an
//! injected [`MoveTransport`]. The service encodes the whole game
//! in the URL path: `GET /{board}/` with nine digits of board
//! state, JSON back with the authoritative board and terminal
//! flags.
//!
//! # Architecture
//!
//! - **game**: pure domain - board, rules, minimax engine
//! - **protocol**: the 9-digit wire codec and response validation
//! - **controller**: the client state machine and turn gating
//! - **render** / **transport**: collaborator contracts plus
//!   default implementations (HTML table markup, reqwest client)
//! - **server**: the axum move service
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_web::{GameController, HtmlRenderer, HttpTransport};
//!
//! # async fn example() {
//! let transport = HttpTransport::new("http://localhost:3000");
//! let mut game = GameController::new(transport, HtmlRenderer::new());
//! game.handle_tap(4).await;
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod controller;
pub mod game;
pub mod protocol;
pub mod render;
pub mod server;
pub mod transport;

// Crate-level exports - client state machine
pub use controller::{GameController, Outcome, PendingMove, Phase};

// Crate-level exports - domain types
pub use game::{Board, GameStatus, Player, Square};

// Crate-level exports - wire protocol
pub use protocol::{MoveResponse, ProtocolError, Verdict, decode_board, encode_board};

// Crate-level exports - collaborators
pub use render::{BoardView, HtmlRenderer, Renderer};
pub use transport::{HttpTransport, MoveTransport, TransportError};
