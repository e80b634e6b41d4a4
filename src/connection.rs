//! Owns the transport-adjacent concerns of a SPDY/3 session: the shared NV
//! compressor/decompressor, stream-id allocation, the stream table, and
//! dispatch of inbound frames to the stream (or connection scope) they
//! belong to.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use flate2::{Compress, Compression, Decompress};
use log::{debug, trace, warn};

use crate::constants::Flags;
use crate::dictionary::SPDY3_ZLIB_DICTIONARY;
use crate::error::{Result, SpdyError};
use crate::frame::Frame;
use crate::headers::Headers;
use crate::settings::SettingsConfig;
use crate::stream::Stream;
use crate::transport::Transport;

/// A connection-scoped event surfaced from `poll`. Events not addressed to
/// a particular stream are paired with stream id `0`, which no
/// client-initiated stream ever uses.
#[derive(Debug, Clone)]
pub enum Event {
    HeadersReceived { headers: Headers },
    DataReceived { data: Vec<u8> },
    StreamClosed { status: Option<u32> },
    ConnectionGoAway { last_good_stream_id: u32, status_code: u32 },
    SettingsReceived { settings: SettingsConfig },
    /// A reply to a client-initiated (odd-id) ping. `rtt` is the elapsed time
    /// between `send_ping` queuing the request and this reply being parsed.
    PingReply { ping_id: u32, rtt: Duration },
}

/// Stream id paired with connection-scoped events; never allocated to a
/// real stream.
pub const CONNECTION_STREAM_ID: u32 = 0;

/// One SPDY/3 client connection, driven entirely by the caller through
/// `poll`/`send_pending` against an opaque [`Transport`].
pub struct Connection<T: Transport> {
    host: String,
    transport: T,
    compressor: Compress,
    decompressor: Decompress,
    streams: HashMap<u32, Stream>,
    next_stream_id: u32,
    last_accepted_stream_id: u32,
    remote_last_stream: Option<u32>,
    going_away: bool,
    settings: SettingsConfig,
    read_buffer: Vec<u8>,
    pending_control: VecDeque<Frame>,
    next_ping_id: u32,
    outstanding_pings: HashMap<u32, Instant>,
}

impl<T: Transport> Connection<T> {
    /// Builds a new connection to `host` over an already-established
    /// transport (expected to be a TLS session that negotiated SPDY/3,
    /// though this core never inspects that).
    pub fn new(host: impl Into<String>, transport: T) -> Result<Self> {
        let mut compressor = Compress::new(Compression::default(), true);
        compressor
            .set_dictionary(SPDY3_ZLIB_DICTIONARY)
            .map_err(|e| SpdyError::BadHeaderBlock(format!("failed to seed compressor dictionary: {e}")))?;
        let mut decompressor = Decompress::new(true);
        decompressor
            .set_dictionary(SPDY3_ZLIB_DICTIONARY)
            .map_err(|e| SpdyError::BadHeaderBlock(format!("failed to seed decompressor dictionary: {e}")))?;

        Ok(Self {
            host: host.into(),
            transport,
            compressor,
            decompressor,
            streams: HashMap::new(),
            next_stream_id: 1,
            last_accepted_stream_id: 0,
            remote_last_stream: None,
            going_away: false,
            settings: SettingsConfig::new(),
            read_buffer: Vec::new(),
            pending_control: VecDeque::new(),
            next_ping_id: 1,
            outstanding_pings: HashMap::new(),
        })
    }

    /// Queues a client-initiated PING (an odd id, per SPDY/3 §2.2.4) and
    /// records the send time so the matching `PingReply` event can report
    /// round-trip time once the peer replies. Returns the allocated ping id.
    pub fn send_ping(&mut self) -> u32 {
        let ping_id = self.next_ping_id;
        self.next_ping_id += 2;
        self.outstanding_pings.insert(ping_id, Instant::now());
        self.pending_control.push_back(Frame::Ping { ping_id });
        ping_id
    }

    pub fn settings(&self) -> &SettingsConfig {
        &self.settings
    }

    pub fn is_going_away(&self) -> bool {
        self.going_away
    }

    /// Allocates a new client stream id, queues its `SYN_STREAM` with the
    /// mandatory SPDY/3 pseudo-headers plus `extra_headers`.
    pub fn new_stream(
        &mut self,
        method: &str,
        path: &str,
        scheme: &str,
        host: &str,
        extra_headers: Headers,
    ) -> Result<u32> {
        if self.going_away {
            return Err(SpdyError::GoingAway);
        }
        if self.next_stream_id > 0x7FFF_FFFF {
            return Err(SpdyError::StreamIdSpaceExhausted);
        }

        let stream_id = self.next_stream_id;
        self.next_stream_id += 2;

        let mut headers = Headers::new();
        headers.set(":method", method);
        headers.set(":path", path);
        headers.set(":version", "HTTP/1.1");
        headers.set(":host", host);
        headers.set(":scheme", scheme);
        for (name, values) in extra_headers.iter() {
            headers.set_multi(name.to_vec(), values.to_vec());
        }

        self.streams.insert(stream_id, Stream::open(stream_id, 0, 0, headers));
        self.last_accepted_stream_id = stream_id;
        debug!("opened stream {stream_id}: {method} {path}");
        Ok(stream_id)
    }

    /// `open_request` from the public API surface: a `new_stream` against
    /// this connection's own host, using `https` as the scheme (this core
    /// never runs over plaintext, per the transport contract in §6).
    pub fn open_request(&mut self, method: &str, path: &str, headers: Headers) -> Result<u32> {
        let host = self.host.clone();
        self.new_stream(method, path, "https", &host, headers)
    }

    /// Queues a request/response body chunk on `stream_id`.
    pub fn send_body(&mut self, stream_id: u32, data: Vec<u8>, last: bool) -> Result<()> {
        let stream = self.streams.get_mut(&stream_id).ok_or(SpdyError::StreamClosed(stream_id))?;
        stream.prepare_data(data, last);
        Ok(())
    }

    /// Flushes queued control frames and the outbound queue of `stream_id`
    /// (or, if `None`, every stream in priority order) to the transport.
    pub fn send_pending(&mut self, stream_id: Option<u32>) -> Result<()> {
        while let Some(frame) = self.pending_control.pop_front() {
            let bytes = frame.serialise(&mut self.compressor)?;
            self.transport.write_all(&bytes)?;
        }

        match stream_id {
            Some(id) => {
                if let Some(stream) = self.streams.get_mut(&id) {
                    Self::drain_stream(stream, &mut self.compressor, &mut self.transport)?;
                }
            }
            None => {
                let mut ids: Vec<u32> = self.streams.keys().copied().collect();
                ids.sort_by_key(|id| (self.streams[id].priority, *id));
                for id in ids {
                    if let Some(stream) = self.streams.get_mut(&id) {
                        Self::drain_stream(stream, &mut self.compressor, &mut self.transport)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn drain_stream(stream: &mut Stream, compressor: &mut Compress, transport: &mut T) -> Result<()> {
        while let Some(frame) = stream.next_outbound() {
            let bytes = frame.serialise(compressor)?;
            transport.write_all(&bytes)?;
        }
        Ok(())
    }

    /// Reads from the transport and parses complete frames until at least
    /// one event is ready or `deadline` elapses. Never returns a partial
    /// frame — unconsumed bytes remain buffered for the next call.
    pub fn poll(&mut self, deadline: Duration) -> Result<Vec<(u32, Event)>> {
        let start = Instant::now();
        let mut events = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            while let Some((frame, consumed)) = self.try_parse_one()? {
                self.read_buffer.drain(..consumed);
                events.extend(self.dispatch(frame)?);
            }

            if !events.is_empty() || start.elapsed() >= deadline {
                return Ok(events);
            }

            let n = self.transport.read(&mut chunk)?;
            if n > 0 {
                self.read_buffer.extend_from_slice(&chunk[..n]);
            } else if start.elapsed() >= deadline {
                return Ok(events);
            }
        }
    }

    fn try_parse_one(&mut self) -> Result<Option<(Frame, usize)>> {
        match Frame::parse(&self.read_buffer, &mut self.decompressor) {
            Ok((frame, consumed)) => Ok(Some((frame, consumed))),
            Err(SpdyError::ShortBuffer { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn dispatch(&mut self, frame: Frame) -> Result<Vec<(u32, Event)>> {
        match frame {
            Frame::Settings { flags, entries } => {
                if flags.contains(Flags::CLEAR_SETTINGS) {
                    self.settings.clear();
                }
                for entry in &entries {
                    self.settings.apply(entry);
                }
                trace!("merged {} SETTINGS entries", entries.len());
                Ok(vec![(CONNECTION_STREAM_ID, Event::SettingsReceived { settings: self.settings })])
            }
            Frame::Ping { ping_id } => {
                if ping_id % 2 == 0 {
                    // Server-initiated ping: echo verbatim on the next flush.
                    self.pending_control.push_back(Frame::Ping { ping_id });
                    Ok(Vec::new())
                } else if let Some(sent_at) = self.outstanding_pings.remove(&ping_id) {
                    let rtt = sent_at.elapsed();
                    trace!("ping {ping_id} replied after {rtt:?}");
                    Ok(vec![(CONNECTION_STREAM_ID, Event::PingReply { ping_id, rtt })])
                } else {
                    warn!("received reply to ping {ping_id} we never sent; dropping");
                    Ok(Vec::new())
                }
            }
            Frame::GoAway { last_good_stream_id, status_code } => {
                self.going_away = true;
                self.remote_last_stream = Some(last_good_stream_id);
                self.streams.retain(|id, _| *id <= last_good_stream_id);
                let status_code = status_code.to_u32();
                warn!("received GOAWAY: last_good={last_good_stream_id} status={status_code}");
                Ok(vec![(
                    CONNECTION_STREAM_ID,
                    Event::ConnectionGoAway { last_good_stream_id, status_code },
                )])
            }
            other => {
                let stream_id = other.stream_id().ok_or(SpdyError::WrongFrameForStream)?;
                let events = self.dispatch_stream_frame(stream_id, other)?;
                Ok(events.into_iter().map(|event| (stream_id, event)).collect())
            }
        }
    }

    fn dispatch_stream_frame(&mut self, stream_id: u32, frame: Frame) -> Result<Vec<Event>> {
        if let Frame::RstStream { status_code, .. } = &frame {
            let status = status_code.to_u32();
            self.streams.remove(&stream_id);
            warn!("stream {stream_id} reset by peer, status {status}");
            return Ok(vec![Event::StreamClosed { status: Some(status) }]);
        }

        let stream = self.streams.get_mut(&stream_id).ok_or(SpdyError::StreamClosed(stream_id))?;
        stream.accept_inbound(&frame)?;

        let mut events = Vec::new();
        match frame {
            Frame::SynReply { headers, .. } | Frame::Headers { headers, .. } => {
                events.push(Event::HeadersReceived { headers });
            }
            Frame::Data { payload, .. } => {
                events.push(Event::DataReceived { data: payload });
            }
            Frame::WindowUpdate { .. } => {}
            _ => return Err(SpdyError::WrongFrameForStream),
        }

        if self.streams.get(&stream_id).map(Stream::is_closed).unwrap_or(false) {
            events.push(Event::StreamClosed { status: None });
            self.streams.remove(&stream_id);
        }

        Ok(events)
    }

    /// Shuts down the underlying transport.
    pub fn close(&mut self) -> Result<()> {
        self.transport.close()?;
        Ok(())
    }
}
