//! Frame Streams codec.
//!
//! A data frame is a big-endian `u32` length followed by that many payload
//! bytes. A zero length escapes a control frame: `u32` control length, `u32`
//! control type, then `(field type, field length, value)` triples.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use dnsflow_domain::DomainError;
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

pub const CONTENT_TYPE_DNSTAP: &[u8] = b"protobuf:dnstap.Dnstap";

const CONTROL_FIELD_CONTENT_TYPE: u32 = 1;
const MAX_CONTROL_FRAME_LENGTH: usize = 512;
const LENGTH_PREFIX: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ControlType {
    Accept = 1,
    Start = 2,
    Stop = 3,
    Ready = 4,
    Finish = 5,
}

impl ControlType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            1 => Some(Self::Accept),
            2 => Some(Self::Start),
            3 => Some(Self::Stop),
            4 => Some(Self::Ready),
            5 => Some(Self::Finish),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFrame {
    pub control_type: ControlType,
    pub content_types: Vec<Bytes>,
}

impl ControlFrame {
    pub fn new(control_type: ControlType) -> Self {
        Self {
            control_type,
            content_types: Vec::new(),
        }
    }

    pub fn with_content_type(mut self, content_type: &[u8]) -> Self {
        self.content_types.push(Bytes::copy_from_slice(content_type));
        self
    }

    /// A frame without content types places no restriction.
    pub fn offers(&self, content_type: &[u8]) -> bool {
        self.content_types.is_empty()
            || self.content_types.iter().any(|ct| ct.as_ref() == content_type)
    }

    fn encoded_len(&self) -> usize {
        LENGTH_PREFIX
            + self
                .content_types
                .iter()
                .map(|ct| 2 * LENGTH_PREFIX + ct.len())
                .sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Data(Bytes),
    Control(ControlFrame),
}

#[derive(Debug, Error)]
pub enum FrameStreamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data frame of {0} bytes exceeds limit of {1} bytes")]
    FrameTooLarge(usize, usize),

    #[error("Control frame of {0} bytes exceeds limit")]
    ControlTooLarge(usize),

    #[error("Malformed control frame: {0}")]
    MalformedControl(String),

    #[error("Unexpected control frame: {0:?}")]
    UnexpectedControl(ControlType),

    #[error("Data frame received before START")]
    DataBeforeStart,

    #[error("Peer does not offer content type protobuf:dnstap.Dnstap")]
    ContentTypeMismatch,
}

impl From<FrameStreamError> for DomainError {
    fn from(err: FrameStreamError) -> Self {
        DomainError::FrameStream(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FrameStreamCodec {
    max_frame_length: usize,
}

impl FrameStreamCodec {
    pub fn new(max_frame_length: usize) -> Self {
        Self { max_frame_length }
    }
}

fn read_u32(src: &[u8], at: usize) -> usize {
    u32::from_be_bytes([src[at], src[at + 1], src[at + 2], src[at + 3]]) as usize
}

fn parse_control(mut payload: &[u8]) -> Result<ControlFrame, FrameStreamError> {
    if payload.remaining() < LENGTH_PREFIX {
        return Err(FrameStreamError::MalformedControl(
            "missing control type".to_string(),
        ));
    }

    let raw_type = payload.get_u32();
    let control_type = ControlType::from_u32(raw_type).ok_or_else(|| {
        FrameStreamError::MalformedControl(format!("unknown control type {}", raw_type))
    })?;

    let mut frame = ControlFrame::new(control_type);
    while payload.has_remaining() {
        if payload.remaining() < 2 * LENGTH_PREFIX {
            return Err(FrameStreamError::MalformedControl(
                "truncated control field header".to_string(),
            ));
        }
        let field_type = payload.get_u32();
        let field_len = payload.get_u32() as usize;
        if payload.remaining() < field_len {
            return Err(FrameStreamError::MalformedControl(
                "truncated control field".to_string(),
            ));
        }
        if field_type == CONTROL_FIELD_CONTENT_TYPE {
            frame
                .content_types
                .push(Bytes::copy_from_slice(&payload[..field_len]));
        }
        payload.advance(field_len);
    }

    Ok(frame)
}

impl Decoder for FrameStreamCodec {
    type Item = Frame;
    type Error = FrameStreamError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        if src.len() < LENGTH_PREFIX {
            return Ok(None);
        }

        let len = read_u32(src, 0);
        if len > 0 {
            if len > self.max_frame_length {
                return Err(FrameStreamError::FrameTooLarge(len, self.max_frame_length));
            }
            if src.len() < LENGTH_PREFIX + len {
                src.reserve(LENGTH_PREFIX + len - src.len());
                return Ok(None);
            }
            src.advance(LENGTH_PREFIX);
            return Ok(Some(Frame::Data(src.split_to(len).freeze())));
        }

        if src.len() < 2 * LENGTH_PREFIX {
            return Ok(None);
        }
        let control_len = read_u32(src, LENGTH_PREFIX);
        if control_len > MAX_CONTROL_FRAME_LENGTH {
            return Err(FrameStreamError::ControlTooLarge(control_len));
        }
        if src.len() < 2 * LENGTH_PREFIX + control_len {
            src.reserve(2 * LENGTH_PREFIX + control_len - src.len());
            return Ok(None);
        }

        src.advance(2 * LENGTH_PREFIX);
        let payload = src.split_to(control_len);
        parse_control(&payload).map(|control| Some(Frame::Control(control)))
    }
}

impl Encoder<Frame> for FrameStreamCodec {
    type Error = FrameStreamError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match frame {
            Frame::Data(payload) => {
                if payload.is_empty() || payload.len() > self.max_frame_length {
                    return Err(FrameStreamError::FrameTooLarge(
                        payload.len(),
                        self.max_frame_length,
                    ));
                }
                dst.reserve(LENGTH_PREFIX + payload.len());
                dst.put_u32(payload.len() as u32);
                dst.put_slice(&payload);
            }
            Frame::Control(control) => {
                let control_len = control.encoded_len();
                if control_len > MAX_CONTROL_FRAME_LENGTH {
                    return Err(FrameStreamError::ControlTooLarge(control_len));
                }
                dst.reserve(2 * LENGTH_PREFIX + control_len);
                dst.put_u32(0);
                dst.put_u32(control_len as u32);
                dst.put_u32(control.control_type as u32);
                for content_type in &control.content_types {
                    dst.put_u32(CONTROL_FIELD_CONTENT_TYPE);
                    dst.put_u32(content_type.len() as u32);
                    dst.put_slice(content_type);
                }
            }
        }
        Ok(())
    }
}
