//! Building frames for transmission: invariants around flags and lengths.

use flate2::{Compress, Compression, Decompress};
use spdy3_sans_io::constants::{Flags, SettingsEntryFlags};
use spdy3_sans_io::dictionary::SPDY3_ZLIB_DICTIONARY;
use spdy3_sans_io::error::SpdyError;
use spdy3_sans_io::frame::{Frame, SettingsEntry};

/// Scenario 3: SETTINGS with two entries, literal on-wire body.
#[test]
fn settings_with_two_entries_parses_flags_and_ids() {
    let body: [u8; 20] = [
        0x00, 0x00, 0x00, 0x02, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x02,
        0x00, 0x00, 0x00, 0x00,
    ];
    let mut header = vec![0x80, 0x03, 0x00, 0x04, 0x00, 0x00, 0x00, 0x14];
    header.extend_from_slice(&body);

    let mut decomp = Decompress::new(true);
    let (frame, consumed) = Frame::parse(&header, &mut decomp).unwrap();
    assert_eq!(consumed, header.len());

    match frame {
        Frame::Settings { entries, .. } => {
            assert_eq!(
                entries,
                vec![
                    SettingsEntry { id: 1, value: 0, flags: SettingsEntryFlags::PERSIST_VALUE },
                    SettingsEntry { id: 2, value: 0, flags: SettingsEntryFlags::PERSISTED },
                ]
            );
        }
        other => panic!("expected Settings, got {other:?}"),
    }
}

#[test]
fn settings_round_trips_byte_identical() {
    let frame = Frame::Settings {
        flags: Flags::empty(),
        entries: vec![
            SettingsEntry { id: 1, value: 0, flags: SettingsEntryFlags::PERSIST_VALUE },
            SettingsEntry { id: 2, value: 0, flags: SettingsEntryFlags::PERSISTED },
        ],
    };
    let mut comp = Compress::new(Compression::default(), true);
    let bytes = frame.serialise(&mut comp).unwrap();

    let mut decomp = Decompress::new(true);
    let (parsed, _) = Frame::parse(&bytes, &mut decomp).unwrap();
    assert_eq!(parsed, frame);
}

/// Invariant: serialising a FIN-flagged frame on a variant that forbids FIN
/// fails with `ProtocolError` rather than silently dropping the bit.
#[test]
fn fin_on_settings_frame_is_rejected() {
    let frame = Frame::Settings { flags: Flags::FIN, entries: vec![] };
    let mut comp = Compress::new(Compression::default(), true);
    let err = frame.serialise(&mut comp).unwrap_err();
    assert!(matches!(err, SpdyError::ProtocolError(_)));
}

#[test]
fn data_frame_with_zero_stream_id_is_rejected() {
    let frame = Frame::Data { flags: Flags::empty(), stream_id: 0, payload: vec![1, 2, 3] };
    let mut comp = Compress::new(Compression::default(), true);
    let err = frame.serialise(&mut comp).unwrap_err();
    assert!(matches!(err, SpdyError::ProtocolError(_)));
}

#[test]
fn unknown_control_type_is_preserved_verbatim() {
    let mut header = vec![0x80, 0x03, 0x00, 0x63, 0x00, 0x00, 0x00, 0x03];
    header.extend_from_slice(&[9, 8, 7]);
    let mut decomp = Decompress::new(true);
    let (frame, consumed) = Frame::parse(&header, &mut decomp).unwrap();
    assert_eq!(consumed, header.len());
    assert_eq!(frame, Frame::Unknown { type_code: 0x63, flags: Flags::empty(), body: vec![9, 8, 7] });

    let mut comp = Compress::new(Compression::default(), true);
    assert_eq!(frame.serialise(&mut comp).unwrap(), header);
}

#[test]
fn syn_reply_round_trip_with_dictionary_seeded_headers() {
    let mut comp = Compress::new(Compression::default(), true);
    comp.set_dictionary(SPDY3_ZLIB_DICTIONARY).unwrap();
    let mut decomp = Decompress::new(true);
    let _ = decomp.set_dictionary(SPDY3_ZLIB_DICTIONARY);

    let mut headers = spdy3_sans_io::Headers::new();
    headers.set(":status", "200");
    headers.set(":version", "HTTP/1.1");
    let frame = Frame::SynReply { flags: Flags::empty(), stream_id: 3, headers };

    let bytes = frame.serialise(&mut comp).unwrap();
    let (parsed, consumed) = Frame::parse(&bytes, &mut decomp).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(parsed, frame);
}
