//! SPDY/3 frame codec: parsing a byte buffer into a typed `Frame`, and
//! serialising a `Frame` back to bytes. Bit-exact per the SPDY/3 draft.

use flate2::{Compress, Decompress};
use log::warn;

use crate::constants::{
    frame_type, Flags, GoAwayStatusCode, RstStatusCode, SettingsEntryFlags, CONTROL_BIT, SPDY_VERSION,
};
use crate::error::{Result, SpdyError};
use crate::headers::Headers;
use crate::nv_codec;

/// One SETTINGS `(id, flags, value)` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsEntry {
    pub id: u32,
    pub value: u32,
    pub flags: SettingsEntryFlags,
}

/// A single SPDY/3 frame, control or data.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    SynStream {
        flags: Flags,
        stream_id: u32,
        assoc_stream_id: u32,
        priority: u8,
        headers: Headers,
    },
    SynReply {
        flags: Flags,
        stream_id: u32,
        headers: Headers,
    },
    RstStream {
        stream_id: u32,
        status_code: RstStatusCode,
    },
    Settings {
        flags: Flags,
        entries: Vec<SettingsEntry>,
    },
    Ping {
        ping_id: u32,
    },
    GoAway {
        last_good_stream_id: u32,
        status_code: GoAwayStatusCode,
    },
    Headers {
        flags: Flags,
        stream_id: u32,
        headers: Headers,
    },
    WindowUpdate {
        stream_id: u32,
        delta_window_size: u32,
    },
    Data {
        flags: Flags,
        stream_id: u32,
        payload: Vec<u8>,
    },
    /// An unrecognised control frame type. Preserved rather than dropped:
    /// the SPDY/3 draft requires peers to ignore unknown frame types, not
    /// fail the connection over them.
    Unknown {
        type_code: u16,
        flags: Flags,
        body: Vec<u8>,
    },
}

impl Frame {
    /// The flag bits this variant's wire encoding permits. `Unknown` has no
    /// defined flag semantics, so anything is accepted.
    fn legal_flags(&self) -> Option<Flags> {
        match self {
            Frame::SynStream { .. } => Some(Flags::FIN | Flags::UNIDIRECTIONAL),
            Frame::SynReply { .. } | Frame::Headers { .. } | Frame::Data { .. } => Some(Flags::FIN),
            Frame::Settings { .. } => Some(Flags::CLEAR_SETTINGS),
            Frame::RstStream { .. }
            | Frame::Ping { .. }
            | Frame::GoAway { .. }
            | Frame::WindowUpdate { .. } => Some(Flags::empty()),
            Frame::Unknown { .. } => None,
        }
    }

    /// Parses exactly one frame from the front of `buffer`, returning the
    /// frame and the number of bytes consumed. `decompressor` is the
    /// connection-wide shared NV decompression context.
    pub fn parse(buffer: &[u8], decompressor: &mut Decompress) -> Result<(Frame, usize)> {
        if buffer.len() < 8 {
            return Err(SpdyError::ShortBuffer { needed: 8, available: buffer.len() });
        }

        let control = buffer[0] & 0x80 != 0;
        let flags_byte = buffer[4];
        let length = u32::from_be_bytes([0, buffer[5], buffer[6], buffer[7]]) as usize;

        if buffer.len() < 8 + length {
            return Err(SpdyError::ShortBuffer { needed: 8 + length, available: buffer.len() });
        }
        let body = &buffer[8..8 + length];

        let frame = if control {
            let version = u16::from_be_bytes([buffer[0], buffer[1]]) & 0x7FFF;
            if version != SPDY_VERSION {
                return Err(SpdyError::UnsupportedVersion(version));
            }
            let type_code = u16::from_be_bytes([buffer[2], buffer[3]]);
            Self::parse_control_body(type_code, flags_byte, body, decompressor)?
        } else {
            let stream_id = u32::from_be_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]) & 0x7FFFFFFF;
            let flags = Flags::from_bits_truncate(flags_byte);
            check_flags("DATA", flags, Flags::FIN)?;
            Frame::Data { flags, stream_id, payload: body.to_vec() }
        };

        Ok((frame, 8 + length))
    }

    fn parse_control_body(
        type_code: u16,
        flags_byte: u8,
        body: &[u8],
        decompressor: &mut Decompress,
    ) -> Result<Frame> {
        let flags = Flags::from_bits_truncate(flags_byte);

        match type_code {
            frame_type::SYN_STREAM => {
                check_flags("SYN_STREAM", flags, Flags::FIN | Flags::UNIDIRECTIONAL)?;
                if body.len() < 10 {
                    return Err(SpdyError::ProtocolError("SYN_STREAM body too short".into()));
                }
                let stream_id = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) & 0x7FFFFFFF;
                let assoc_stream_id = u32::from_be_bytes([body[4], body[5], body[6], body[7]]) & 0x7FFFFFFF;
                let priority = (body[8] & 0xE0) >> 5;
                let headers = nv_codec::decode(decompressor, &body[10..])?;
                Ok(Frame::SynStream { flags, stream_id, assoc_stream_id, priority, headers })
            }
            frame_type::SYN_REPLY => {
                check_flags("SYN_REPLY", flags, Flags::FIN)?;
                if body.len() < 4 {
                    return Err(SpdyError::ProtocolError("SYN_REPLY body too short".into()));
                }
                let stream_id = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) & 0x7FFFFFFF;
                let headers = nv_codec::decode(decompressor, &body[4..])?;
                Ok(Frame::SynReply { flags, stream_id, headers })
            }
            frame_type::RST_STREAM => {
                check_flags("RST_STREAM", flags, Flags::empty())?;
                if body.len() < 8 {
                    return Err(SpdyError::ProtocolError("RST_STREAM body too short".into()));
                }
                let stream_id = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) & 0x7FFFFFFF;
                let raw_status = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
                let status_code = RstStatusCode::from_u32(raw_status).ok_or_else(|| {
                    SpdyError::ProtocolError(format!("invalid RST_STREAM status code {raw_status}"))
                })?;
                Ok(Frame::RstStream { stream_id, status_code })
            }
            frame_type::SETTINGS => {
                check_flags("SETTINGS", flags, Flags::CLEAR_SETTINGS)?;
                if body.len() < 4 {
                    return Err(SpdyError::ProtocolError("SETTINGS body too short".into()));
                }
                let count = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) as usize;
                let mut entries = Vec::with_capacity(count);
                let mut offset = 4;
                for _ in 0..count {
                    if body.len() < offset + 8 {
                        return Err(SpdyError::ProtocolError("truncated SETTINGS entry".into()));
                    }
                    let id_and_flags = u32::from_be_bytes([
                        body[offset], body[offset + 1], body[offset + 2], body[offset + 3],
                    ]);
                    let value = u32::from_be_bytes([
                        body[offset + 4], body[offset + 5], body[offset + 6], body[offset + 7],
                    ]);
                    let id = id_and_flags & 0x00FF_FFFF;
                    let entry_flags =
                        SettingsEntryFlags::from_bits_truncate(((id_and_flags >> 24) & 0xFF) as u8);
                    entries.push(SettingsEntry { id, value, flags: entry_flags });
                    offset += 8;
                }
                Ok(Frame::Settings { flags, entries })
            }
            frame_type::PING => {
                check_flags("PING", flags, Flags::empty())?;
                if body.len() < 4 {
                    return Err(SpdyError::ProtocolError("PING body too short".into()));
                }
                let ping_id = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
                Ok(Frame::Ping { ping_id })
            }
            frame_type::GOAWAY => {
                check_flags("GOAWAY", flags, Flags::empty())?;
                if body.len() < 8 {
                    return Err(SpdyError::ProtocolError("GOAWAY body too short".into()));
                }
                let last_good_stream_id =
                    u32::from_be_bytes([body[0], body[1], body[2], body[3]]) & 0x7FFFFFFF;
                let raw_status = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
                let status_code = GoAwayStatusCode::from_u32(raw_status);
                Ok(Frame::GoAway { last_good_stream_id, status_code })
            }
            frame_type::HEADERS => {
                check_flags("HEADERS", flags, Flags::FIN)?;
                if body.len() < 4 {
                    return Err(SpdyError::ProtocolError("HEADERS body too short".into()));
                }
                let stream_id = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) & 0x7FFFFFFF;
                let headers = nv_codec::decode(decompressor, &body[4..])?;
                Ok(Frame::Headers { flags, stream_id, headers })
            }
            frame_type::WINDOW_UPDATE => {
                check_flags("WINDOW_UPDATE", flags, Flags::empty())?;
                if body.len() < 8 {
                    return Err(SpdyError::ProtocolError("WINDOW_UPDATE body too short".into()));
                }
                let stream_id = u32::from_be_bytes([body[0], body[1], body[2], body[3]]) & 0x7FFFFFFF;
                let delta_window_size =
                    u32::from_be_bytes([body[4], body[5], body[6], body[7]]) & 0x7FFFFFFF;
                Ok(Frame::WindowUpdate { stream_id, delta_window_size })
            }
            other => {
                warn!("preserving unknown SPDY/3 control frame type {other}");
                Ok(Frame::Unknown { type_code: other, flags, body: body.to_vec() })
            }
        }
    }

    /// Serialises this frame back to wire bytes, the exact inverse of
    /// `parse`. `compressor` is the connection-wide shared NV compression
    /// context.
    pub fn serialise(&self, compressor: &mut Compress) -> Result<Vec<u8>> {
        let flags = self.flags();
        if let Some(legal) = self.legal_flags() {
            check_flags("frame", flags, legal)?;
        }

        match self {
            Frame::Data { stream_id, payload, .. } => {
                if *stream_id == 0 {
                    return Err(SpdyError::ProtocolError("DATA frame must carry stream_id > 0".into()));
                }
                let mut out = Vec::with_capacity(8 + payload.len());
                out.extend_from_slice(&(stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.push(flags.bits());
                out.extend_from_slice(&u24_be(payload.len() as u32));
                out.extend_from_slice(payload);
                Ok(out)
            }
            _ => {
                let body = self.serialise_control_body(compressor)?;
                let mut out = Vec::with_capacity(8 + body.len());
                out.extend_from_slice(&(CONTROL_BIT | SPDY_VERSION).to_be_bytes());
                out.extend_from_slice(&self.type_code().to_be_bytes());
                out.push(flags.bits());
                out.extend_from_slice(&u24_be(body.len() as u32));
                out.extend_from_slice(&body);
                Ok(out)
            }
        }
    }

    fn serialise_control_body(&self, compressor: &mut Compress) -> Result<Vec<u8>> {
        match self {
            Frame::SynStream { stream_id, assoc_stream_id, priority, headers, .. } => {
                let mut out = Vec::new();
                out.extend_from_slice(&(stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.extend_from_slice(&(assoc_stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.push((priority & 0x07) << 5);
                out.push(0); // slot, unused in client requests
                out.extend_from_slice(&nv_codec::encode(compressor, headers)?);
                Ok(out)
            }
            Frame::SynReply { stream_id, headers, .. } => {
                let mut out = Vec::new();
                out.extend_from_slice(&(stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.extend_from_slice(&nv_codec::encode(compressor, headers)?);
                Ok(out)
            }
            Frame::RstStream { stream_id, status_code } => {
                let mut out = Vec::with_capacity(8);
                out.extend_from_slice(&(stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.extend_from_slice(&status_code.to_u32().to_be_bytes());
                Ok(out)
            }
            Frame::Settings { entries, .. } => {
                let mut out = Vec::with_capacity(4 + entries.len() * 8);
                out.extend_from_slice(&(entries.len() as u32).to_be_bytes());
                for entry in entries {
                    let id_and_flags = (entry.id & 0x00FF_FFFF) | ((entry.flags.bits() as u32) << 24);
                    out.extend_from_slice(&id_and_flags.to_be_bytes());
                    out.extend_from_slice(&entry.value.to_be_bytes());
                }
                Ok(out)
            }
            Frame::Ping { ping_id } => Ok(ping_id.to_be_bytes().to_vec()),
            Frame::GoAway { last_good_stream_id, status_code } => {
                let mut out = Vec::with_capacity(8);
                out.extend_from_slice(&(last_good_stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.extend_from_slice(&status_code.to_u32().to_be_bytes());
                Ok(out)
            }
            Frame::Headers { stream_id, headers, .. } => {
                let mut out = Vec::new();
                out.extend_from_slice(&(stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.extend_from_slice(&nv_codec::encode(compressor, headers)?);
                Ok(out)
            }
            Frame::WindowUpdate { stream_id, delta_window_size } => {
                let mut out = Vec::with_capacity(8);
                out.extend_from_slice(&(stream_id & 0x7FFF_FFFF).to_be_bytes());
                out.extend_from_slice(&(delta_window_size & 0x7FFF_FFFF).to_be_bytes());
                Ok(out)
            }
            Frame::Unknown { body, .. } => Ok(body.clone()),
            Frame::Data { .. } => unreachable!("DATA is serialised as a data frame, not control"),
        }
    }

    pub fn flags(&self) -> Flags {
        match self {
            Frame::SynStream { flags, .. }
            | Frame::SynReply { flags, .. }
            | Frame::Settings { flags, .. }
            | Frame::Headers { flags, .. }
            | Frame::Data { flags, .. }
            | Frame::Unknown { flags, .. } => *flags,
            Frame::RstStream { .. }
            | Frame::Ping { .. }
            | Frame::GoAway { .. }
            | Frame::WindowUpdate { .. } => Flags::empty(),
        }
    }

    pub fn stream_id(&self) -> Option<u32> {
        match self {
            Frame::SynStream { stream_id, .. }
            | Frame::SynReply { stream_id, .. }
            | Frame::RstStream { stream_id, .. }
            | Frame::Headers { stream_id, .. }
            | Frame::WindowUpdate { stream_id, .. }
            | Frame::Data { stream_id, .. } => Some(*stream_id),
            Frame::Settings { .. }
            | Frame::Ping { .. }
            | Frame::GoAway { .. }
            | Frame::Unknown { .. } => None,
        }
    }

    /// Sets or clears the FIN flag; no-op on variants that cannot carry it.
    pub fn set_fin(&mut self, fin: bool) {
        let flags = match self {
            Frame::SynStream { flags, .. }
            | Frame::SynReply { flags, .. }
            | Frame::Headers { flags, .. }
            | Frame::Data { flags, .. } => flags,
            _ => return,
        };
        flags.set(Flags::FIN, fin);
    }

    pub fn has_fin(&self) -> bool {
        self.flags().contains(Flags::FIN)
    }

    fn type_code(&self) -> u16 {
        match self {
            Frame::SynStream { .. } => frame_type::SYN_STREAM,
            Frame::SynReply { .. } => frame_type::SYN_REPLY,
            Frame::RstStream { .. } => frame_type::RST_STREAM,
            Frame::Settings { .. } => frame_type::SETTINGS,
            Frame::Ping { .. } => frame_type::PING,
            Frame::GoAway { .. } => frame_type::GOAWAY,
            Frame::Headers { .. } => frame_type::HEADERS,
            Frame::WindowUpdate { .. } => frame_type::WINDOW_UPDATE,
            Frame::Unknown { type_code, .. } => *type_code,
            Frame::Data { .. } => unreachable!("DATA has no control type code"),
        }
    }
}

fn check_flags(name: &'static str, flags: Flags, legal: Flags) -> Result<()> {
    if legal.contains(flags) || flags.is_empty() {
        Ok(())
    } else {
        Err(SpdyError::ProtocolError(format!("illegal flags 0x{:02x} on {name}", flags.bits())))
    }
}

fn u24_be(value: u32) -> [u8; 3] {
    let bytes = value.to_be_bytes();
    [bytes[1], bytes[2], bytes[3]]
}
