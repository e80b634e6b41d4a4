//! Integration-level coverage of the compressed name/value header block,
//! exercised the way it is actually used: through a shared compressor and
//! decompressor pair carried across multiple blocks.

use flate2::{Compress, Compression, Decompress};
use spdy3_sans_io::dictionary::SPDY3_ZLIB_DICTIONARY;
use spdy3_sans_io::nv_codec;
use spdy3_sans_io::Headers;

fn matched_pair() -> (Compress, Decompress) {
    let mut compressor = Compress::new(Compression::default(), true);
    compressor.set_dictionary(SPDY3_ZLIB_DICTIONARY).unwrap();
    let mut decompressor = Decompress::new(true);
    let _ = decompressor.set_dictionary(SPDY3_ZLIB_DICTIONARY);
    (compressor, decompressor)
}

#[test]
fn value_with_embedded_nul_decodes_to_multiple_values() {
    let (mut comp, mut decomp) = matched_pair();
    let mut headers = Headers::new();
    headers.set_multi("set-cookie", vec![b"a=1".to_vec(), b"b=2".to_vec()]);

    let block = nv_codec::encode(&mut comp, &headers).unwrap();
    let decoded = nv_codec::decode(&mut decomp, &block).unwrap();
    assert_eq!(decoded.get_all(b"set-cookie").unwrap(), &[b"a=1".to_vec(), b"b=2".to_vec()]);
}

#[test]
fn value_without_nul_decodes_to_single_value() {
    let (mut comp, mut decomp) = matched_pair();
    let mut headers = Headers::new();
    headers.set(":method", "GET");

    let block = nv_codec::encode(&mut comp, &headers).unwrap();
    let decoded = nv_codec::decode(&mut decomp, &block).unwrap();
    assert_eq!(decoded.get_all(b":method").unwrap(), &[b"GET".to_vec()]);
}

#[test]
fn consecutive_blocks_stay_in_sync_on_a_shared_context() {
    let (mut comp, mut decomp) = matched_pair();

    let mut first = Headers::new();
    first.set(":method", "GET");
    let mut second = Headers::new();
    second.set(":method", "POST");

    let block_a = nv_codec::encode(&mut comp, &first).unwrap();
    let block_b = nv_codec::encode(&mut comp, &second).unwrap();

    let decoded_a = nv_codec::decode(&mut decomp, &block_a).unwrap();
    let decoded_b = nv_codec::decode(&mut decomp, &block_b).unwrap();

    assert_eq!(decoded_a.get(b":method"), Some(b"GET".as_slice()));
    assert_eq!(decoded_b.get(b":method"), Some(b"POST".as_slice()));
}

#[test]
fn empty_header_set_round_trips() {
    let (mut comp, mut decomp) = matched_pair();
    let block = nv_codec::encode(&mut comp, &Headers::new()).unwrap();
    let decoded = nv_codec::decode(&mut decomp, &block).unwrap();
    assert!(decoded.is_empty());
}
