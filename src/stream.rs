//! A single SPDY/3 stream: its state machine and the outbound frame queue
//! a caller drains to put bytes on the wire.

use std::collections::VecDeque;

use crate::constants::Flags;
use crate::error::{Result, SpdyError};
use crate::frame::Frame;
use crate::headers::Headers;

/// Where a stream sits in the SPDY/3 half-close lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    Idle,
    Open,
    HalfClosedLocal,
    HalfClosedRemote,
    Closed,
}

impl StreamState {
    /// Applies a locally-sent FIN.
    fn on_local_fin(self) -> Self {
        match self {
            StreamState::Open => StreamState::HalfClosedLocal,
            StreamState::HalfClosedRemote => StreamState::Closed,
            other => other,
        }
    }

    /// Applies a FIN received from the peer.
    fn on_remote_fin(self) -> Self {
        match self {
            StreamState::Open => StreamState::HalfClosedRemote,
            StreamState::HalfClosedLocal => StreamState::Closed,
            other => other,
        }
    }
}

/// One multiplexed request/response exchange.
#[derive(Debug)]
pub struct Stream {
    pub stream_id: u32,
    pub assoc_stream_id: u32,
    pub priority: u8,
    state: StreamState,
    outbound: VecDeque<Frame>,
}

impl Stream {
    /// Opens a new stream by queuing its SYN_STREAM frame. The frame is
    /// provisionally marked FIN; `prepare_data` clears it the moment any
    /// request body is queued, and re-sets it only on the final chunk.
    pub fn open(stream_id: u32, priority: u8, assoc_stream_id: u32, headers: Headers) -> Self {
        let mut outbound = VecDeque::new();
        outbound.push_back(Frame::SynStream {
            flags: Flags::FIN,
            stream_id,
            assoc_stream_id,
            priority,
            headers,
        });
        Self { stream_id, assoc_stream_id, priority, state: StreamState::Idle, outbound }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Adds or replaces a header on the last still-queued frame that carries
    /// a header block — the `SynStream`, or a later `Headers` frame queued
    /// after it. Fails if no such frame is queued (it has already been
    /// flushed to the wire, or the stream never queued one).
    pub fn add_header(&mut self, name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Result<()> {
        let headers = self
            .outbound
            .iter_mut()
            .rev()
            .find_map(|frame| match frame {
                Frame::SynStream { headers, .. } | Frame::Headers { headers, .. } => Some(headers),
                _ => None,
            })
            .ok_or(SpdyError::InvalidStreamState)?;
        headers.set(name, value);
        Ok(())
    }

    /// Queues a DATA frame carrying `data`. Clears FIN on every
    /// already-queued frame first — only the chunk passed with `last = true`
    /// may carry it.
    pub fn prepare_data(&mut self, data: Vec<u8>, last: bool) {
        for frame in self.outbound.iter_mut() {
            frame.set_fin(false);
        }
        let mut frame = Frame::Data { flags: Flags::empty(), stream_id: self.stream_id, payload: data };
        frame.set_fin(last);
        self.outbound.push_back(frame);
    }

    /// Removes and returns the next outbound frame, transitioning local
    /// state if it carries FIN. Call repeatedly until it returns `None`.
    pub fn next_outbound(&mut self) -> Option<Frame> {
        let frame = self.outbound.pop_front()?;
        if matches!(self.state, StreamState::Idle) {
            self.state = StreamState::Open;
        }
        if frame.has_fin() {
            self.state = self.state.on_local_fin();
        }
        Some(frame)
    }

    pub fn has_outbound(&self) -> bool {
        !self.outbound.is_empty()
    }

    /// Applies an inbound frame addressed to this stream. Returns an error
    /// if the frame is illegal for the stream's current state; the caller
    /// is expected to answer with RST_STREAM in that case.
    pub fn accept_inbound(&mut self, frame: &Frame) -> Result<()> {
        match frame {
            Frame::SynReply { .. } => {
                if matches!(self.state, StreamState::Closed | StreamState::HalfClosedRemote) {
                    return Err(SpdyError::InvalidStreamState);
                }
                if self.state == StreamState::Idle {
                    self.state = StreamState::Open;
                }
            }
            Frame::Headers { .. } | Frame::Data { .. } => {
                if matches!(self.state, StreamState::Closed | StreamState::HalfClosedRemote) {
                    return Err(SpdyError::InvalidStreamState);
                }
            }
            Frame::RstStream { .. } => {
                self.state = StreamState::Closed;
                return Ok(());
            }
            Frame::WindowUpdate { .. } => {}
            _ => return Err(SpdyError::WrongFrameForStream),
        }

        if frame.has_fin() {
            self.state = self.state.on_remote_fin();
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.state == StreamState::Closed
    }
}
