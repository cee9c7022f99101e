use serde::{Deserialize, Serialize};

/// Where the DNS server writes its dnstap stream and how much we buffer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnstapConfig {
    #[serde(default = "default_socket_path")]
    pub socket_path: String,

    /// Capacity of the frame queue between the socket readers and the processor.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Largest accepted data frame, in bytes.
    #[serde(default = "default_max_frame_length")]
    pub max_frame_length: usize,
}

impl Default for DnstapConfig {
    fn default() -> Self {
        Self {
            socket_path: default_socket_path(),
            queue_capacity: default_queue_capacity(),
            max_frame_length: default_max_frame_length(),
        }
    }
}

fn default_socket_path() -> String {
    "/var/run/dns/dnstap.sock".to_string()
}

fn default_queue_capacity() -> usize {
    65_536
}

fn default_max_frame_length() -> usize {
    1024 * 1024
}
