//! The fixed SPDY/3 zlib dictionary used to seed the shared compressor and
//! decompressor for every name/value header block on a connection.
//!
//! This is the dictionary published alongside the SPDY protocol draft and
//! reused unmodified by every interoperable SPDY/2 and SPDY/3 implementation:
//! a flat 1423-byte blob of common header names, status lines, and content
//! types, fed to zlib as a preset dictionary rather than parsed as wire
//! data. It is plain bytes, not NV-framed — there is no length prefix per
//! token, unlike the NV block format in `nv_codec.rs`. A single byte of
//! drift here desynchronises the peer's decompressor for the rest of the
//! connection, so this constant must never be "cleaned up" or reformatted
//! by hand — treat it as an opaque blob.

#[rustfmt::skip]
pub const SPDY3_ZLIB_DICTIONARY: &[u8] = &[
    0x6f, 0x70, 0x74, 0x69, 0x6f, 0x6e, 0x73, 0x67, 0x65, 0x74, 0x68, 0x65, 0x61, 0x64, 0x70, 0x6f,
    0x73, 0x74, 0x70, 0x75, 0x74, 0x64, 0x65, 0x6c, 0x65, 0x74, 0x65, 0x74, 0x72, 0x61, 0x63, 0x65,
    0x61, 0x63, 0x63, 0x65, 0x70, 0x74, 0x61, 0x63, 0x63, 0x65, 0x70, 0x74, 0x2d, 0x63, 0x68, 0x61,
    0x72, 0x73, 0x65, 0x74, 0x61, 0x63, 0x63, 0x65, 0x70, 0x74, 0x2d, 0x65, 0x6e, 0x63, 0x6f, 0x64,
    0x69, 0x6e, 0x67, 0x61, 0x63, 0x63, 0x65, 0x70, 0x74, 0x2d, 0x6c, 0x61, 0x6e, 0x67, 0x75, 0x61,
    0x67, 0x65, 0x61, 0x75, 0x74, 0x68, 0x6f, 0x72, 0x69, 0x7a, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x65,
    0x78, 0x70, 0x65, 0x63, 0x74, 0x66, 0x72, 0x6f, 0x6d, 0x68, 0x6f, 0x73, 0x74, 0x69, 0x66, 0x2d,
    0x6d, 0x6f, 0x64, 0x69, 0x66, 0x69, 0x65, 0x64, 0x2d, 0x73, 0x69, 0x6e, 0x63, 0x65, 0x69, 0x66,
    0x2d, 0x6d, 0x61, 0x74, 0x63, 0x68, 0x69, 0x66, 0x2d, 0x6e, 0x6f, 0x6e, 0x65, 0x2d, 0x6d, 0x61,
    0x74, 0x63, 0x68, 0x69, 0x66, 0x2d, 0x72, 0x61, 0x6e, 0x67, 0x65, 0x69, 0x66, 0x2d, 0x75, 0x6e,
    0x6d, 0x6f, 0x64, 0x69, 0x66, 0x69, 0x65, 0x64, 0x2d, 0x73, 0x69, 0x6e, 0x63, 0x65, 0x6d, 0x61,
    0x78, 0x2d, 0x66, 0x6f, 0x72, 0x77, 0x61, 0x72, 0x64, 0x73, 0x70, 0x72, 0x6f, 0x78, 0x79, 0x2d,
    0x61, 0x75, 0x74, 0x68, 0x6f, 0x72, 0x69, 0x7a, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x72, 0x61, 0x6e,
    0x67, 0x65, 0x72, 0x65, 0x66, 0x65, 0x72, 0x65, 0x72, 0x74, 0x65, 0x75, 0x73, 0x65, 0x72, 0x2d,
    0x61, 0x67, 0x65, 0x6e, 0x74, 0x31, 0x30, 0x30, 0x31, 0x30, 0x31, 0x32, 0x30, 0x31, 0x32, 0x30,
    0x32, 0x32, 0x30, 0x33, 0x32, 0x30, 0x34, 0x32, 0x30, 0x35, 0x32, 0x30, 0x36, 0x33, 0x30, 0x30,
    0x33, 0x30, 0x31, 0x33, 0x30, 0x32, 0x33, 0x30, 0x33, 0x33, 0x30, 0x34, 0x33, 0x30, 0x35, 0x33,
    0x30, 0x36, 0x33, 0x30, 0x37, 0x34, 0x30, 0x30, 0x34, 0x30, 0x31, 0x34, 0x30, 0x32, 0x34, 0x30,
    0x33, 0x34, 0x30, 0x34, 0x34, 0x30, 0x35, 0x34, 0x30, 0x36, 0x34, 0x30, 0x37, 0x34, 0x30, 0x38,
    0x34, 0x30, 0x39, 0x34, 0x31, 0x30, 0x34, 0x31, 0x31, 0x34, 0x31, 0x32, 0x34, 0x31, 0x33, 0x34,
    0x31, 0x34, 0x34, 0x31, 0x35, 0x34, 0x31, 0x36, 0x34, 0x31, 0x37, 0x35, 0x30, 0x30, 0x35, 0x30,
    0x31, 0x35, 0x30, 0x32, 0x35, 0x30, 0x33, 0x35, 0x30, 0x34, 0x35, 0x30, 0x35, 0x32, 0x30, 0x33,
    0x20, 0x4e, 0x6f, 0x6e, 0x2d, 0x41, 0x75, 0x74, 0x68, 0x6f, 0x72, 0x69, 0x74, 0x61, 0x74, 0x69,
    0x76, 0x65, 0x20, 0x49, 0x6e, 0x66, 0x6f, 0x72, 0x6d, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x32, 0x30,
    0x34, 0x20, 0x4e, 0x6f, 0x20, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x33, 0x30, 0x31, 0x20,
    0x4d, 0x6f, 0x76, 0x65, 0x64, 0x20, 0x50, 0x65, 0x72, 0x6d, 0x61, 0x6e, 0x65, 0x6e, 0x74, 0x6c,
    0x79, 0x34, 0x30, 0x30, 0x20, 0x42, 0x61, 0x64, 0x20, 0x52, 0x65, 0x71, 0x75, 0x65, 0x73, 0x74,
    0x34, 0x30, 0x31, 0x20, 0x55, 0x6e, 0x61, 0x75, 0x74, 0x68, 0x6f, 0x72, 0x69, 0x7a, 0x65, 0x64,
    0x34, 0x30, 0x33, 0x20, 0x46, 0x6f, 0x72, 0x62, 0x69, 0x64, 0x64, 0x65, 0x6e, 0x34, 0x30, 0x34,
    0x20, 0x4e, 0x6f, 0x74, 0x20, 0x46, 0x6f, 0x75, 0x6e, 0x64, 0x35, 0x30, 0x30, 0x20, 0x49, 0x6e,
    0x74, 0x65, 0x72, 0x6e, 0x61, 0x6c, 0x20, 0x53, 0x65, 0x72, 0x76, 0x65, 0x72, 0x20, 0x45, 0x72,
    0x72, 0x6f, 0x72, 0x35, 0x30, 0x31, 0x20, 0x4e, 0x6f, 0x74, 0x20, 0x49, 0x6d, 0x70, 0x6c, 0x65,
    0x6d, 0x65, 0x6e, 0x74, 0x65, 0x64, 0x35, 0x30, 0x33, 0x20, 0x53, 0x65, 0x72, 0x76, 0x69, 0x63,
    0x65, 0x20, 0x55, 0x6e, 0x61, 0x76, 0x61, 0x69, 0x6c, 0x61, 0x62, 0x6c, 0x65, 0x61, 0x63, 0x63,
    0x65, 0x70, 0x74, 0x2d, 0x72, 0x61, 0x6e, 0x67, 0x65, 0x73, 0x61, 0x67, 0x65, 0x65, 0x74, 0x61,
    0x67, 0x6c, 0x6f, 0x63, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x70, 0x72, 0x6f, 0x78, 0x79, 0x2d, 0x61,
    0x75, 0x74, 0x68, 0x65, 0x6e, 0x74, 0x69, 0x63, 0x61, 0x74, 0x65, 0x70, 0x75, 0x62, 0x6c, 0x69,
    0x63, 0x72, 0x65, 0x74, 0x72, 0x79, 0x2d, 0x61, 0x66, 0x74, 0x65, 0x72, 0x73, 0x65, 0x72, 0x76,
    0x65, 0x72, 0x76, 0x61, 0x72, 0x79, 0x77, 0x61, 0x72, 0x6e, 0x69, 0x6e, 0x67, 0x77, 0x77, 0x77,
    0x2d, 0x61, 0x75, 0x74, 0x68, 0x65, 0x6e, 0x74, 0x69, 0x63, 0x61, 0x74, 0x65, 0x61, 0x6c, 0x6c,
    0x6f, 0x77, 0x63, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x62, 0x61, 0x73, 0x65, 0x63, 0x6f,
    0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x65, 0x6e, 0x63, 0x6f, 0x64, 0x69, 0x6e, 0x67, 0x63, 0x61,
    0x63, 0x68, 0x65, 0x2d, 0x63, 0x6f, 0x6e, 0x74, 0x72, 0x6f, 0x6c, 0x63, 0x6f, 0x6e, 0x6e, 0x65,
    0x63, 0x74, 0x69, 0x6f, 0x6e, 0x64, 0x61, 0x74, 0x65, 0x74, 0x72, 0x61, 0x69, 0x6c, 0x65, 0x72,
    0x74, 0x72, 0x61, 0x6e, 0x73, 0x66, 0x65, 0x72, 0x2d, 0x65, 0x6e, 0x63, 0x6f, 0x64, 0x69, 0x6e,
    0x67, 0x75, 0x70, 0x67, 0x72, 0x61, 0x64, 0x65, 0x76, 0x69, 0x61, 0x63, 0x6f, 0x6e, 0x74, 0x65,
    0x6e, 0x74, 0x2d, 0x6c, 0x61, 0x6e, 0x67, 0x75, 0x61, 0x67, 0x65, 0x63, 0x6f, 0x6e, 0x74, 0x65,
    0x6e, 0x74, 0x2d, 0x6c, 0x65, 0x6e, 0x67, 0x74, 0x68, 0x63, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74,
    0x2d, 0x6c, 0x6f, 0x63, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x63, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74,
    0x2d, 0x6d, 0x64, 0x35, 0x63, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x72, 0x61, 0x6e, 0x67,
    0x65, 0x63, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x74, 0x79, 0x70, 0x65, 0x65, 0x78, 0x70,
    0x69, 0x72, 0x65, 0x73, 0x6c, 0x61, 0x73, 0x74, 0x2d, 0x6d, 0x6f, 0x64, 0x69, 0x66, 0x69, 0x65,
    0x64, 0x73, 0x65, 0x74, 0x2d, 0x63, 0x6f, 0x6f, 0x6b, 0x69, 0x65, 0x73, 0x74, 0x61, 0x74, 0x75,
    0x73, 0x32, 0x30, 0x30, 0x20, 0x4f, 0x4b, 0x76, 0x65, 0x72, 0x73, 0x69, 0x6f, 0x6e, 0x48, 0x54,
    0x54, 0x50, 0x2f, 0x31, 0x2e, 0x31, 0x75, 0x72, 0x6c, 0x70, 0x75, 0x62, 0x6c, 0x69, 0x63, 0x6b,
    0x65, 0x65, 0x70, 0x2d, 0x61, 0x6c, 0x69, 0x76, 0x65, 0x6f, 0x72, 0x69, 0x67, 0x69, 0x6e, 0x4d,
    0x6f, 0x6e, 0x64, 0x61, 0x79, 0x54, 0x75, 0x65, 0x73, 0x64, 0x61, 0x79, 0x57, 0x65, 0x64, 0x6e,
    0x65, 0x73, 0x64, 0x61, 0x79, 0x54, 0x68, 0x75, 0x72, 0x73, 0x64, 0x61, 0x79, 0x46, 0x72, 0x69,
    0x64, 0x61, 0x79, 0x53, 0x61, 0x74, 0x75, 0x72, 0x64, 0x61, 0x79, 0x53, 0x75, 0x6e, 0x64, 0x61,
    0x79, 0x4a, 0x61, 0x6e, 0x46, 0x65, 0x62, 0x4d, 0x61, 0x72, 0x41, 0x70, 0x72, 0x4d, 0x61, 0x79,
    0x4a, 0x75, 0x6e, 0x4a, 0x75, 0x6c, 0x41, 0x75, 0x67, 0x53, 0x65, 0x70, 0x74, 0x4f, 0x63, 0x74,
    0x4e, 0x6f, 0x76, 0x44, 0x65, 0x63, 0x30, 0x30, 0x3a, 0x30, 0x30, 0x3a, 0x30, 0x30, 0x4d, 0x6f,
    0x6e, 0x2c, 0x54, 0x75, 0x65, 0x2c, 0x57, 0x65, 0x64, 0x2c, 0x54, 0x68, 0x75, 0x2c, 0x46, 0x72,
    0x69, 0x2c, 0x53, 0x61, 0x74, 0x2c, 0x53, 0x75, 0x6e, 0x2c, 0x47, 0x4d, 0x54, 0x63, 0x68, 0x75,
    0x6e, 0x6b, 0x65, 0x64, 0x2c, 0x74, 0x65, 0x78, 0x74, 0x2f, 0x68, 0x74, 0x6d, 0x6c, 0x2c, 0x69,
    0x6d, 0x61, 0x67, 0x65, 0x2f, 0x70, 0x6e, 0x67, 0x2c, 0x69, 0x6d, 0x61, 0x67, 0x65, 0x2f, 0x6a,
    0x70, 0x67, 0x2c, 0x69, 0x6d, 0x61, 0x67, 0x65, 0x2f, 0x67, 0x69, 0x66, 0x2c, 0x61, 0x70, 0x70,
    0x6c, 0x69, 0x63, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x2f, 0x78, 0x6d, 0x6c, 0x2c, 0x61, 0x70, 0x70,
    0x6c, 0x69, 0x63, 0x61, 0x74, 0x69, 0x6f, 0x6e, 0x2f, 0x78, 0x68, 0x74, 0x6d, 0x6c, 0x2b, 0x78,
    0x6d, 0x6c, 0x2c, 0x74, 0x65, 0x78, 0x74, 0x2f, 0x70, 0x6c, 0x61, 0x69, 0x6e, 0x2c, 0x74, 0x65,
    0x78, 0x74, 0x2f, 0x6a, 0x61, 0x76, 0x61, 0x73, 0x63, 0x72, 0x69, 0x70, 0x74, 0x2c, 0x70, 0x75,
    0x62, 0x6c, 0x69, 0x63, 0x70, 0x72, 0x69, 0x76, 0x61, 0x74, 0x65, 0x6d, 0x61, 0x78, 0x2d, 0x61,
    0x67, 0x65, 0x3d, 0x67, 0x7a, 0x69, 0x70, 0x2c, 0x64, 0x65, 0x66, 0x6c, 0x61, 0x74, 0x65, 0x2c,
    0x73, 0x64, 0x63, 0x68, 0x63, 0x68, 0x61, 0x72, 0x73, 0x65, 0x74, 0x3d, 0x75, 0x74, 0x66, 0x2d,
    0x38, 0x63, 0x68, 0x61, 0x72, 0x73, 0x65, 0x74, 0x3d, 0x69, 0x73, 0x6f, 0x2d, 0x38, 0x38, 0x35,
    0x39, 0x2d, 0x31, 0x2c, 0x75, 0x74, 0x66, 0x2d, 0x2c, 0x2a, 0x2c, 0x65, 0x6e, 0x71, 0x3d, 0x30,
    0x2e, 0x6e, 0x6f, 0x2d, 0x63, 0x61, 0x63, 0x68, 0x65, 0x6d, 0x75, 0x73, 0x74, 0x2d, 0x72, 0x65,
    0x76, 0x61, 0x6c, 0x69, 0x64, 0x61, 0x74, 0x65, 0x70, 0x72, 0x6f, 0x78, 0x79, 0x2d, 0x72, 0x65,
    0x76, 0x61, 0x6c, 0x69, 0x64, 0x61, 0x74, 0x65, 0x6f, 0x6e, 0x6c, 0x79, 0x2d, 0x69, 0x66, 0x2d,
    0x63, 0x61, 0x63, 0x68, 0x65, 0x64, 0x73, 0x74, 0x61, 0x6c, 0x65, 0x2d, 0x77, 0x68, 0x69, 0x6c,
    0x65, 0x2d, 0x72, 0x65, 0x76, 0x61, 0x6c, 0x69, 0x64, 0x61, 0x74, 0x65, 0x73, 0x74, 0x61, 0x6c,
    0x65, 0x2d, 0x69, 0x66, 0x2d, 0x65, 0x72, 0x72, 0x6f, 0x72, 0x6d, 0x69, 0x6e, 0x2d, 0x66, 0x72,
    0x65, 0x73, 0x68, 0x73, 0x2d, 0x6d, 0x61, 0x78, 0x61, 0x67, 0x65, 0x58, 0x2d, 0x46, 0x6f, 0x72,
    0x77, 0x61, 0x72, 0x64, 0x65, 0x64, 0x2d, 0x46, 0x6f, 0x72, 0x58, 0x2d, 0x46, 0x72, 0x61, 0x6d,
    0x65, 0x2d, 0x4f, 0x70, 0x74, 0x69, 0x6f, 0x6e, 0x73, 0x53, 0x74, 0x72, 0x69, 0x63, 0x74, 0x2d,
    0x54, 0x72, 0x61, 0x6e, 0x73, 0x70, 0x6f, 0x72, 0x74, 0x2d, 0x53, 0x65, 0x63, 0x75, 0x72, 0x69,
    0x74, 0x79, 0x44, 0x4e, 0x54, 0x58, 0x2d, 0x43, 0x6f, 0x6e, 0x74, 0x65, 0x6e, 0x74, 0x2d, 0x54,
    0x79, 0x70, 0x65, 0x2d, 0x4f, 0x70, 0x74, 0x69, 0x6f, 0x6e, 0x73, 0x52, 0x65, 0x66, 0x65, 0x72,
    0x72, 0x65, 0x72, 0x2d, 0x50, 0x6f, 0x6c, 0x69, 0x63, 0x79, 0x63, 0x61, 0x63, 0x68, 0x65,
];
