mod dnstap;

pub use dnstap::{run_dnstap_pipeline, spawn_signal_handler};
