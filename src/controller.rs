//! The game controller: board state, turn gating, and the state
//! machine that synchronizes with the move service.
//!
//! The controller is an explicitly constructed instance with
//! injected [`MoveTransport`] and [`Renderer`] collaborators, so
//! several independent games (and tests) can coexist. All state
//! transitions run on one logical thread, driven by discrete
//! events: a tap, a service response, or a failure. While a request
//! is in flight the controller sits in [`Phase::AwaitingComputer`]
//! and rejects input by construction rather than by locking.

use crate::game::{Board, Player, Square};
use crate::protocol::MoveResponse;
use crate::render::{BoardView, Renderer};
use crate::transport::{MoveTransport, TransportError};
use tracing::{debug, instrument, warn};

/// Which side the controller is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Input is open; taps on free squares are accepted.
    HumanTurn,
    /// A move request is in flight; all taps are ignored.
    AwaitingComputer,
    /// Terminal. Only a restart leaves this phase.
    GameOver,
}

/// Result of the game as the controller knows it.
///
/// Terminal outcomes are absorbing: once set, neither the board nor
/// the phase changes again until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// The human (X) won.
    HumanWin,
    /// The computer (O) won.
    ComputerWin,
    /// Board filled with no winner.
    Tie,
}

/// A move request the controller wants issued.
///
/// The ticket identifies the request: a completion handed back with
/// any other ticket is stale (duplicated or reordered) and gets
/// discarded instead of clobbering the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    /// Ticket to hand back with the completion.
    pub ticket: u64,
    /// Board snapshot to serialize into the request, including the
    /// optimistic human move.
    pub board: Board,
}

/// Client-side game state machine.
pub struct GameController<T, R> {
    board: Board,
    phase: Phase,
    outcome: Outcome,
    ticket: u64,
    transport: T,
    renderer: R,
}

impl<T, R: Renderer> GameController<T, R> {
    /// Creates a fresh game and renders the empty board.
    pub fn new(transport: T, renderer: R) -> Self {
        let mut controller = Self {
            board: Board::new(),
            phase: Phase::HumanTurn,
            outcome: Outcome::InProgress,
            ticket: 0,
            transport,
            renderer,
        };
        controller.render();
        controller
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The injected renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Handles a tap on square `pos`.
    ///
    /// A tap outside the human turn, on an occupied square, or off
    /// the board is silently ignored; that is policy, not an error.
    /// An accepted tap writes the human mark optimistically,
    /// renders, closes the turn gate, and returns the move request
    /// to issue.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn tap(&mut self, pos: usize) -> Option<PendingMove> {
        if self.phase != Phase::HumanTurn {
            debug!(pos, "ignoring tap outside human turn");
            return None;
        }
        // Occupied and out-of-range squares both fail this check;
        // the two gates are independent so a stale render or a fast
        // double-tap cannot submit two moves for one turn.
        if !self.board.is_empty(pos) {
            debug!(pos, "ignoring tap on occupied square");
            return None;
        }
        if self.board.set(pos, Square::Occupied(Player::X)).is_err() {
            return None;
        }

        self.phase = Phase::AwaitingComputer;
        self.ticket += 1;
        self.render();

        debug!(pos, ticket = self.ticket, "move accepted, requesting reply");
        Some(PendingMove {
            ticket: self.ticket,
            board: self.board,
        })
    }

    /// Applies a move service response.
    ///
    /// The authoritative board replaces the local one wholesale; the
    /// controller never reconciles square by square. A response with
    /// a stale ticket, or arriving outside `AwaitingComputer`, is
    /// discarded. A malformed payload is treated as a failed
    /// request: the optimistic move stands and the gate stays shut.
    #[instrument(skip(self, response), fields(phase = ?self.phase))]
    pub fn response_received(&mut self, ticket: u64, response: &MoveResponse) {
        if self.phase != Phase::AwaitingComputer || ticket != self.ticket {
            debug!(ticket, current = self.ticket, "discarding stale response");
            return;
        }

        let verdict = match response.validate() {
            Ok(verdict) => verdict,
            Err(error) => {
                // A payload that fails shape validation is a failed
                // request, never a silent bad render.
                self.request_failed(ticket, &TransportError::Protocol(error));
                return;
            }
        };

        self.board = verdict.board;
        if verdict.is_over {
            self.outcome = match verdict.winner {
                None => Outcome::Tie,
                Some(Player::X) => Outcome::HumanWin,
                Some(Player::O) => Outcome::ComputerWin,
            };
            self.phase = Phase::GameOver;
        } else {
            self.phase = Phase::HumanTurn;
        }
        self.render();
    }

    /// Records a failed move request.
    ///
    /// The game stays in `AwaitingComputer` with the optimistic move
    /// in place: there is no defined rollback and no auto-retry,
    /// only a user-visible notice. Degraded but non-crashing.
    #[instrument(skip(self, error), fields(phase = ?self.phase))]
    pub fn request_failed(&mut self, ticket: u64, error: &TransportError) {
        if self.phase != Phase::AwaitingComputer || ticket != self.ticket {
            debug!(ticket, current = self.ticket, "discarding stale failure");
            return;
        }

        warn!(%error, "move request failed");
        self.renderer
            .notice(&format!("The computer could not move: {error}"));
    }

    /// Restarts a finished game.
    ///
    /// Honored only in `GameOver`; a restart in any other phase is
    /// ignored, so an in-flight request can never race a reset. The
    /// ticket still advances, which retires any duplicated
    /// completion from the previous game.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn restart(&mut self) {
        if self.phase != Phase::GameOver {
            debug!("ignoring restart outside finished game");
            return;
        }

        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.phase = Phase::HumanTurn;
        self.ticket += 1;
        self.render();
    }

    fn render(&mut self) {
        let view = BoardView::project(&self.board, self.phase, self.outcome);
        self.renderer.render(&view);
    }
}

impl<T: MoveTransport, R: Renderer> GameController<T, R> {
    /// Taps a square and, if the tap was accepted, drives the move
    /// request through the injected transport to completion.
    ///
    /// This is the whole turn as one suspension point: the phase is
    /// already `AwaitingComputer` before the first await, so no
    /// second request can be issued concurrently.
    pub async fn handle_tap(&mut self, pos: usize) {
        let Some(pending) = self.tap(pos) else {
            return;
        };

        match self.transport.request_move(&pending.board).await {
            Ok(response) => self.response_received(pending.ticket, &response),
            Err(error) => self.request_failed(pending.ticket, &error),
        }
    }
}
