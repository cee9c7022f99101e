//! dnstap ingestion: Frame Streams transport, protobuf envelope and decoding.
pub mod decoder;
pub mod framestream;
pub mod listener;
pub mod schema;

pub use decoder::{DnsTransaction, TransactionDecoder};
pub use framestream::{
    ControlFrame, ControlType, Frame, FrameStreamCodec, FrameStreamError, CONTENT_TYPE_DNSTAP,
};
pub use listener::{serve_connection, DnstapListener};
pub use schema::{Dnstap, DnstapMessage, DnstapType, MessageType};
