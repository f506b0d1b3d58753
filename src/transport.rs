//! Transport contract and the HTTP client for the move service.

use crate::game::Board;
use crate::protocol::{self, MoveResponse, ProtocolError};
use derive_more::{Display, Error, From};
use tracing::{debug, instrument};

/// Errors surfaced by a move request.
///
/// Network failures, bad statuses, and malformed payloads all land
/// here; the controller treats them uniformly as a failed request.
#[derive(Debug, Display, Error, From)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[display("move request failed: {_0}")]
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    #[display("move service returned status {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] u16),
    /// The payload failed shape validation.
    #[display("malformed move response: {_0}")]
    Protocol(ProtocolError),
}

/// Asynchronous move-request collaborator.
///
/// One outstanding call at a time by construction: the controller
/// never issues a second request while a reply is pending.
#[async_trait::async_trait]
pub trait MoveTransport: Send + Sync {
    /// Requests the next board state for `board`.
    async fn request_move(&self, board: &Board) -> Result<MoveResponse, TransportError>;
}

/// HTTP transport: `GET {base_url}/{board}/` with the board encoded
/// as nine digits in the path, no request body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl MoveTransport for HttpTransport {
    #[instrument(skip(self, board), fields(board = %protocol::encode_board(board)))]
    async fn request_move(&self, board: &Board) -> Result<MoveResponse, TransportError> {
        let url = format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            protocol::encode_board(board)
        );
        debug!(%url, "requesting move");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let payload: MoveResponse = response.json().await?;
        debug!(?payload, "move response received");
        Ok(payload)
    }
}
