//! Error taxonomy for the SPDY/3 codec, stream and connection layers.

use thiserror::Error;

/// Errors produced while parsing, serialising, or driving a SPDY/3
/// connection.
#[derive(Debug, Error)]
pub enum SpdyError {
    /// The parser needs more bytes before it can produce a frame. The
    /// caller should buffer additional input and retry; this is not a
    /// protocol violation.
    #[error("buffer too short: need {needed} bytes, have {available}")]
    ShortBuffer { needed: usize, available: usize },

    /// The peer violated the SPDY/3 protocol (illegal flag combination, bad
    /// status code, malformed length field, frame addressed to the wrong
    /// scope). The connection should be torn down after sending GOAWAY.
    #[error("protocol error: {0}")]
    ProtocolError(String),

    /// Decoding or encoding the compressed name/value header block failed.
    /// Because the zlib stream is shared and stateful across the whole
    /// connection, this error is always connection-fatal.
    #[error("bad header block: {0}")]
    BadHeaderBlock(String),

    /// The frame declared a SPDY version other than 3.
    #[error("unsupported SPDY version: {0}")]
    UnsupportedVersion(u16),

    /// A frame was addressed to a stream_id no longer present in the
    /// connection's stream table.
    #[error("frame for unknown or closed stream {0}")]
    StreamClosed(u32),

    /// A connection-scoped frame was dispatched to a stream, or vice versa.
    #[error("frame type not valid for this dispatch target")]
    WrongFrameForStream,

    /// The stream was not in a state that permits the requested operation.
    #[error("invalid stream state for this operation")]
    InvalidStreamState,

    /// The remote peer reset the stream; carries the RST_STREAM status.
    #[error("stream reset by peer, status code {0}")]
    StreamReset(u32),

    /// The underlying transport failed.
    #[error("transport error: {0}")]
    TransportError(#[from] std::io::Error),

    /// The connection has exhausted the 31-bit stream-id space.
    #[error("stream id space exhausted")]
    StreamIdSpaceExhausted,

    /// `new_stream` was called after the connection received GOAWAY.
    #[error("connection is going away, no new streams may be opened")]
    GoingAway,
}

pub type Result<T> = std::result::Result<T, SpdyError>;
