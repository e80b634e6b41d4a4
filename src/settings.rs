//! Connection-scoped SETTINGS state. SPDY/3 allows peers to persist
//! settings across connections to the same origin; this core does not own
//! any such store, so persistence flags are accepted on the wire and
//! otherwise ignored for the lifetime of one `Connection`.

use crate::constants::settings_id;
use crate::frame::SettingsEntry;

/// The mutable SETTINGS values a connection tracks for its peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsConfig {
    pub upload_bandwidth: Option<u32>,
    pub download_bandwidth: Option<u32>,
    pub round_trip_time: Option<u32>,
    pub max_concurrent_streams: Option<u32>,
    pub current_cwnd: Option<u32>,
    pub download_retrans_rate: Option<u32>,
    pub initial_window_size: Option<u32>,
    pub client_certificate_vector_size: Option<u32>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            upload_bandwidth: None,
            download_bandwidth: None,
            round_trip_time: None,
            max_concurrent_streams: None,
            current_cwnd: None,
            download_retrans_rate: None,
            initial_window_size: None,
            client_certificate_vector_size: None,
        }
    }
}

impl SettingsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one decoded SETTINGS entry, overwriting any prior value for
    /// that id. Unknown ids are ignored rather than rejected, matching the
    /// SPDY/3 requirement to tolerate settings added by later drafts.
    pub fn apply(&mut self, entry: &SettingsEntry) {
        match entry.id {
            settings_id::UPLOAD_BANDWIDTH => self.upload_bandwidth = Some(entry.value),
            settings_id::DOWNLOAD_BANDWIDTH => self.download_bandwidth = Some(entry.value),
            settings_id::ROUND_TRIP_TIME => self.round_trip_time = Some(entry.value),
            settings_id::MAX_CONCURRENT_STREAMS => self.max_concurrent_streams = Some(entry.value),
            settings_id::CURRENT_CWND => self.current_cwnd = Some(entry.value),
            settings_id::DOWNLOAD_RETRANS_RATE => self.download_retrans_rate = Some(entry.value),
            settings_id::INITIAL_WINDOW_SIZE => self.initial_window_size = Some(entry.value),
            settings_id::CLIENT_CERTIFICATE_VECTOR_SIZE => {
                self.client_certificate_vector_size = Some(entry.value)
            }
            _ => {}
        }
    }

    /// Resets every tracked value, per a SETTINGS frame carrying
    /// FLAG_SETTINGS_CLEAR_SETTINGS.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
