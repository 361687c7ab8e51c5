use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Frame-level failure: the raw socket payload never became an event.
///
/// Both variants mean the frame is dropped and the connection stays up.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("frame is not well-formed JSON: {0}")]
    MalformedFrame(#[source] serde_json::Error),

    #[error("frame is missing a required envelope field: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),
}

/// Event-level failure: a decoded event could not become a view model.
///
/// All variants are non-fatal; the event is dropped and the pipeline
/// continues with the next frame.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("unknown event type `{0}`")]
    UnknownType(String),

    #[error("`{kind}` params missing or malformed: {source}")]
    InvalidParams {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

/// Socket lifecycle failure. Ingestion halts until an external caller
/// re-establishes the connection.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid notification endpoint `{endpoint}`: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("websocket handshake with {endpoint} failed: {source}")]
    Handshake {
        endpoint: String,
        #[source]
        source: tungstenite::Error,
    },

    #[error("websocket transport error: {0}")]
    Transport(#[from] tungstenite::Error),

    #[error("connection is not open")]
    NotConnected,
}

/// Failure while fetching the viewer's class list.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("class listing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("class listing returned status {0}")]
    Status(reqwest::StatusCode),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value `{value}` for {name}")]
    InvalidVar { name: &'static str, value: String },
}

/// Main error type for the bellbird-feed client.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Connection(#[from] ConnectionError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// Convenience type alias for Results
pub type FeedResult<T> = Result<T, FeedError>;
