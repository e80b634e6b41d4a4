//! Connection-scoped control frames: PING, GOAWAY, SETTINGS, as seen both
//! at the frame codec level and driven through a full `Connection`.

use flate2::{Compress, Compression, Decompress};
use spdy3_sans_io::frame::Frame;
use spdy3_sans_io::{Connection, Event, Headers, CONNECTION_STREAM_ID};
use std::time::Duration;

use crate::support::MemoryTransport;

/// Scenario 4: PING echo. An even (server-initiated) ping id round-trips
/// byte-identical at the frame codec level.
#[test]
fn ping_frame_round_trips_byte_identical() {
    let bytes = [0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02];
    let mut decomp = Decompress::new(true);
    let (frame, consumed) = Frame::parse(&bytes, &mut decomp).unwrap();
    assert_eq!(consumed, bytes.len());
    assert_eq!(frame, Frame::Ping { ping_id: 2 });

    let mut comp = Compress::new(Compression::default(), true);
    assert_eq!(frame.serialise(&mut comp).unwrap(), bytes);
}

#[test]
fn connection_echoes_even_ping_on_next_send_pending() {
    let inbound_bytes = vec![0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x02];
    let (transport, _inbound, outbound) = MemoryTransport::with_inbound(&inbound_bytes);
    let mut conn = Connection::new("example.com", transport).unwrap();

    let events = conn.poll(Duration::from_millis(50)).unwrap();
    assert!(events.is_empty(), "a server ping should be echoed, not surfaced as an event");

    conn.send_pending(None).unwrap();
    assert_eq!(outbound.bytes(), inbound_bytes);
}

#[test]
fn connection_surfaces_odd_ping_reply_as_event_with_rtt() {
    let (transport, inbound, outbound) = MemoryTransport::empty();
    let mut conn = Connection::new("example.com", transport).unwrap();

    let ping_id = conn.send_ping();
    assert_eq!(ping_id, 1);
    conn.send_pending(None).unwrap();
    assert_eq!(
        outbound.bytes(),
        vec![0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01]
    );

    inbound.push(&[0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01]);
    let events = conn.poll(Duration::from_millis(50)).unwrap();
    assert_eq!(events.len(), 1);
    match &events[0] {
        (CONNECTION_STREAM_ID, Event::PingReply { ping_id: 1, rtt }) => {
            assert!(*rtt < Duration::from_secs(1));
        }
        other => panic!("expected PingReply, got {other:?}"),
    }
}

#[test]
fn connection_drops_unsolicited_odd_ping_reply() {
    let inbound_bytes = vec![0x80, 0x03, 0x00, 0x06, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x01];
    let (transport, _inbound, _outbound) = MemoryTransport::with_inbound(&inbound_bytes);
    let mut conn = Connection::new("example.com", transport).unwrap();

    let events = conn.poll(Duration::from_millis(50)).unwrap();
    assert!(events.is_empty(), "a ping reply never sent by us should not surface as an event");
}

#[test]
fn goaway_refuses_new_streams_after_receipt() {
    let mut body = Vec::new();
    body.extend_from_slice(&0u32.to_be_bytes());
    body.extend_from_slice(&1u32.to_be_bytes()); // PROTOCOL_ERROR
    let mut inbound_bytes = vec![0x80, 0x03, 0x00, 0x07, 0x00, 0x00, 0x00, 0x08];
    inbound_bytes.extend_from_slice(&body);

    let (transport, _inbound, _outbound) = MemoryTransport::with_inbound(&inbound_bytes);
    let mut conn = Connection::new("example.com", transport).unwrap();
    let events = conn.poll(Duration::from_millis(50)).unwrap();
    assert!(matches!(
        events[0],
        (CONNECTION_STREAM_ID, Event::ConnectionGoAway { last_good_stream_id: 0, status_code: 1 })
    ));

    let err = conn.open_request("GET", "/", Headers::new()).unwrap_err();
    assert!(matches!(err, spdy3_sans_io::SpdyError::GoingAway));
}

#[test]
fn goaway_cancels_streams_opened_above_last_good_id() {
    let (transport, inbound, _outbound) = MemoryTransport::empty();
    let mut conn = Connection::new("example.com", transport).unwrap();
    let first = conn.open_request("GET", "/a", Headers::new()).unwrap();
    let second = conn.open_request("GET", "/b", Headers::new()).unwrap();
    assert_eq!((first, second), (1, 3));

    let mut body = Vec::new();
    body.extend_from_slice(&1u32.to_be_bytes());
    body.extend_from_slice(&0u32.to_be_bytes());
    let mut goaway = vec![0x80, 0x03, 0x00, 0x07, 0x00, 0x00, 0x00, 0x08];
    goaway.extend_from_slice(&body);
    inbound.push(&goaway);

    conn.poll(Duration::from_millis(50)).unwrap();
    let err = conn.send_body(second, vec![1], true);
    assert!(matches!(err, Err(spdy3_sans_io::SpdyError::StreamClosed(3))));
    assert!(conn.send_body(first, vec![1], true).is_ok());
}
