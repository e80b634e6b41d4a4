//! The sans-I/O boundary: a `Connection` never touches a socket directly,
//! it only reads and writes through this trait. Callers wire it up to
//! whatever they have — a `TcpStream`, a TLS session, an in-memory pipe.

use std::io;

/// A minimal byte transport. Implementations are free to be blocking or
/// non-blocking; `Connection::poll` treats a `WouldBlock`-style zero read
/// as "nothing available right now", not an error.
pub trait Transport {
    /// Reads whatever is currently available into `buf`, returning the
    /// number of bytes read. `0` means no data was available this call.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Writes all of `buf`.
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()>;

    /// Shuts the transport down. Best-effort; errors are not usually fatal
    /// to the caller since the connection is ending either way.
    fn close(&mut self) -> io::Result<()>;
}
