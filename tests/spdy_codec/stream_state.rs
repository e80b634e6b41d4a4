//! The per-stream FIN/half-close state machine, driven from the public API.

use spdy3_sans_io::constants::{Flags, RstStatusCode};
use spdy3_sans_io::frame::Frame;
use spdy3_sans_io::{Headers, Stream, StreamState};

fn syn_reply(stream_id: u32, fin: bool) -> Frame {
    let flags = if fin { Flags::FIN } else { Flags::empty() };
    Frame::SynReply { flags, stream_id, headers: Headers::new() }
}

fn data(stream_id: u32, fin: bool) -> Frame {
    let flags = if fin { Flags::FIN } else { Flags::empty() };
    Frame::Data { flags, stream_id, payload: vec![1, 2, 3] }
}

#[test]
fn new_stream_starts_idle_with_a_queued_syn_stream() {
    let stream = Stream::open(1, 2, 0, Headers::new());
    assert_eq!(stream.state(), StreamState::Idle);
    assert!(stream.has_outbound());
}

#[test]
fn draining_the_syn_stream_frame_opens_then_half_closes_local() {
    let mut stream = Stream::open(1, 0, 0, Headers::new());
    // The provisional SynStream carries FIN until a body chunk is queued.
    let frame = stream.next_outbound().unwrap();
    assert!(frame.has_fin());
    assert_eq!(stream.state(), StreamState::HalfClosedLocal);
}

#[test]
fn queuing_a_body_chunk_clears_fin_until_the_last_chunk() {
    let mut stream = Stream::open(1, 0, 0, Headers::new());
    stream.prepare_data(b"chunk one".to_vec(), false);
    stream.prepare_data(b"chunk two".to_vec(), true);

    let syn = stream.next_outbound().unwrap();
    assert!(!syn.has_fin());
    let first_chunk = stream.next_outbound().unwrap();
    assert!(!first_chunk.has_fin());
    let last_chunk = stream.next_outbound().unwrap();
    assert!(last_chunk.has_fin());
    assert!(stream.next_outbound().is_none());
}

#[test]
fn full_request_response_cycle_reaches_closed() {
    let mut stream = Stream::open(1, 0, 0, Headers::new());
    let _ = stream.next_outbound(); // SynStream with FIN -> HalfClosedLocal
    assert_eq!(stream.state(), StreamState::HalfClosedLocal);

    stream.accept_inbound(&syn_reply(1, false)).unwrap();
    assert_eq!(stream.state(), StreamState::HalfClosedLocal);

    stream.accept_inbound(&data(1, true)).unwrap();
    assert_eq!(stream.state(), StreamState::Closed);
    assert!(stream.is_closed());
}

#[test]
fn remote_fin_before_local_fin_half_closes_remote() {
    let mut stream = Stream::open(1, 0, 0, Headers::new());
    stream.prepare_data(b"body".to_vec(), true); // clears FIN from SynStream
    let _ = stream.next_outbound(); // SynStream, no FIN -> still Idle->Open

    stream.accept_inbound(&syn_reply(1, true)).unwrap();
    assert_eq!(stream.state(), StreamState::HalfClosedRemote);

    let _ = stream.next_outbound(); // Data with FIN -> Closed
    assert_eq!(stream.state(), StreamState::Closed);
}

#[test]
fn data_after_remote_half_close_is_rejected() {
    let mut stream = Stream::open(1, 0, 0, Headers::new());
    let _ = stream.next_outbound();
    stream.accept_inbound(&syn_reply(1, true)).unwrap();

    let err = stream.accept_inbound(&data(1, false)).unwrap_err();
    assert!(matches!(err, spdy3_sans_io::SpdyError::InvalidStreamState));
}

#[test]
fn rst_stream_closes_regardless_of_prior_state() {
    let mut stream = Stream::open(1, 0, 0, Headers::new());
    stream
        .accept_inbound(&Frame::RstStream { stream_id: 1, status_code: RstStatusCode::Cancel })
        .unwrap();
    assert!(stream.is_closed());
}
