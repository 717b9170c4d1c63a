use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum RoomError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("websocket handshake failed: {0}")]
    Handshake(#[from] tungstenite::Error),
    #[error("failed to read lexicon {path}: {source}")]
    LexiconRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse lexicon {path}: {source}")]
    LexiconParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("word pool is empty")]
    EmptyWordPool,
}

pub type RoomResult<T> = Result<T, RoomError>;
