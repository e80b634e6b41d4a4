//! spdy3-sans-io: a minimal, sans-I/O SPDY/3 frame codec and stream
//! multiplexer.
//!
//! This crate provides a synchronous SPDY/3 frame parser, encoder, and
//! per-connection stream state machine for environments that want to drive
//! their own I/O loop rather than take on an async runtime.
//!
//! # Features
//!
//! - **Sans-I/O design**: the [`Connection`] never touches a socket, callers
//!   implement [`Transport`] over whatever they already have.
//! - **Bit-exact SPDY/3 framing**: `SYN_STREAM`, `SYN_REPLY`, `RST_STREAM`,
//!   `SETTINGS`, `PING`, `GOAWAY`, `HEADERS`, `WINDOW_UPDATE`, `DATA`.
//! - **Compressed name/value header blocks**: a shared zlib context seeded
//!   with the published SPDY/3 dictionary, never reset mid-connection.
//! - **Stream multiplexing**: a per-stream state machine tracking FIN in
//!   both directions over one shared transport.
//!
//! # Quick Start
//!
//! ```rust
//! use spdy3_sans_io::{Connection, Headers};
//! use spdy3_sans_io::transport::Transport;
//! use std::io;
//!
//! struct NullTransport;
//! impl Transport for NullTransport {
//!     fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> { Ok(0) }
//!     fn write_all(&mut self, _buf: &[u8]) -> io::Result<()> { Ok(()) }
//!     fn close(&mut self) -> io::Result<()> { Ok(()) }
//! }
//!
//! let mut conn = Connection::new("example.com", NullTransport).unwrap();
//! let stream_id = conn.open_request("GET", "/", Headers::new()).unwrap();
//! conn.send_pending(Some(stream_id)).unwrap();
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally minimal. It provides:
//! - Frame parsing and serialising (bytes ↔ typed [`Frame`])
//! - The compressed name/value header block codec
//! - A per-stream state machine and a connection-level multiplexer
//!
//! It does NOT provide:
//! - TCP/UDP transport (you provide the bytes)
//! - TLS or NPN/ALPN negotiation (use rustls, openssl, or similar)
//! - A request-builder convenience API beyond `open_request`/`send_body`

pub mod connection;
pub mod constants;
pub mod dictionary;
pub mod error;
pub mod frame;
pub mod headers;
pub mod nv_codec;
pub mod settings;
pub mod stream;
pub mod transport;

pub use connection::{Connection, Event, CONNECTION_STREAM_ID};
pub use error::{Result, SpdyError};
pub use frame::{Frame, SettingsEntry};
pub use headers::Headers;
pub use settings::SettingsConfig;
pub use stream::{Stream, StreamState};
pub use transport::Transport;
