//! SPDY/3 wire constants: frame type codes, flag bits, settings IDs and
//! RST_STREAM / GOAWAY status codes.
//!
//! Reference: SPDY Protocol - Draft 3

/// SPDY/3 control frame type codes (SPDY-Protocol-Draft3 Section 2.2).
#[allow(dead_code)]
pub mod frame_type {
    pub const SYN_STREAM: u16 = 1;
    pub const SYN_REPLY: u16 = 2;
    pub const RST_STREAM: u16 = 3;
    pub const SETTINGS: u16 = 4;
    pub const PING: u16 = 6;
    pub const GOAWAY: u16 = 7;
    pub const HEADERS: u16 = 8;
    pub const WINDOW_UPDATE: u16 = 9;
}

/// Control-bit mask on the first 16-bit word of a frame header.
pub const CONTROL_BIT: u16 = 0x8000;

/// SPDY/3 version number.
pub const SPDY_VERSION: u16 = 3;

bitflags::bitflags! {
    /// Frame-header flag bits (the single flags byte at offset 4 of every
    /// frame). Which bits are legal depends on the frame variant — see
    /// `Frame::legal_flags`. `UNIDIRECTIONAL` and `CLEAR_SETTINGS` share a
    /// bit position with each other (never with `FIN`) because they never
    /// appear on the same variant.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flags: u8 {
        const FIN            = 0x01;
        const UNIDIRECTIONAL = 0x02;
        const CLEAR_SETTINGS = 0x01;
    }
}

bitflags::bitflags! {
    /// Per-entry flag bits carried in the top byte of each SETTINGS
    /// `(id, flags, value)` word — a separate namespace from `Flags`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SettingsEntryFlags: u8 {
        const PERSIST_VALUE = 0x01;
        const PERSISTED     = 0x02;
    }
}

/// SETTINGS entry IDs (SPDY-Protocol-Draft3 Section 2.6.4).
#[allow(dead_code)]
pub mod settings_id {
    pub const UPLOAD_BANDWIDTH: u32 = 1;
    pub const DOWNLOAD_BANDWIDTH: u32 = 2;
    pub const ROUND_TRIP_TIME: u32 = 3;
    pub const MAX_CONCURRENT_STREAMS: u32 = 4;
    pub const CURRENT_CWND: u32 = 5;
    pub const DOWNLOAD_RETRANS_RATE: u32 = 6;
    pub const INITIAL_WINDOW_SIZE: u32 = 7;
    pub const CLIENT_CERTIFICATE_VECTOR_SIZE: u32 = 8;
}

/// RST_STREAM status codes (SPDY-Protocol-Draft3 Section 2.2.2). Valid range
/// on the wire is `1..=11`; `0` and values above `11` are protocol errors.
/// This is the actual field type of `Frame::RstStream::status_code` — the
/// frame codec rejects anything `from_u32` can't resolve before a `Frame`
/// carrying this type ever exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RstStatusCode {
    ProtocolError,
    InvalidStream,
    RefusedStream,
    UnsupportedVersion,
    Cancel,
    InternalError,
    FlowControlError,
    StreamInUse,
    StreamAlreadyClosed,
    InvalidCredentials,
    FrameTooLarge,
    /// A code inside the valid `1..=11` range with no name assigned above
    /// `FrameTooLarge`. Unreachable today — SPDY/3 only defines 11 statuses
    /// — kept for forward compatibility, the same way `Frame::Unknown`
    /// preserves unrecognised control frame types instead of rejecting them.
    Other(u32),
}

impl RstStatusCode {
    pub fn from_u32(value: u32) -> Option<Self> {
        Some(match value {
            1 => Self::ProtocolError,
            2 => Self::InvalidStream,
            3 => Self::RefusedStream,
            4 => Self::UnsupportedVersion,
            5 => Self::Cancel,
            6 => Self::InternalError,
            7 => Self::FlowControlError,
            8 => Self::StreamInUse,
            9 => Self::StreamAlreadyClosed,
            10 => Self::InvalidCredentials,
            11 => Self::FrameTooLarge,
            other if (1..=11).contains(&other) => Self::Other(other),
            _ => return None,
        })
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::ProtocolError => 1,
            Self::InvalidStream => 2,
            Self::RefusedStream => 3,
            Self::UnsupportedVersion => 4,
            Self::Cancel => 5,
            Self::InternalError => 6,
            Self::FlowControlError => 7,
            Self::StreamInUse => 8,
            Self::StreamAlreadyClosed => 9,
            Self::InvalidCredentials => 10,
            Self::FrameTooLarge => 11,
            Self::Other(value) => value,
        }
    }
}

/// GOAWAY status codes (SPDY-Protocol-Draft3 Section 2.2.6). A distinct
/// namespace from `RstStatusCode` — `InternalError` is `2` here, `6` there.
/// Unlike RST_STREAM, the wire carries a full 32-bit status with no declared
/// valid range, so `from_u32` is infallible and unrecognised values round-trip
/// through `Other` rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoAwayStatusCode {
    Ok,
    ProtocolError,
    InternalError,
    Other(u32),
}

impl GoAwayStatusCode {
    pub fn from_u32(value: u32) -> Self {
        match value {
            0 => Self::Ok,
            1 => Self::ProtocolError,
            2 => Self::InternalError,
            other => Self::Other(other),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Self::Ok => 0,
            Self::ProtocolError => 1,
            Self::InternalError => 2,
            Self::Other(value) => value,
        }
    }
}
