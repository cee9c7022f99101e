//! dnstap protobuf schema (`dnstap.proto`), fields this crate reads plus the
//! ones needed to keep encoded fixtures faithful.

#[derive(Clone, PartialEq, prost::Message)]
pub struct Dnstap {
    #[prost(bytes = "vec", optional, tag = "1")]
    pub identity: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "2")]
    pub version: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "3")]
    pub extra: Option<Vec<u8>>,

    #[prost(enumeration = "DnstapType", required, tag = "15")]
    pub r#type: i32,

    #[prost(message, optional, tag = "14")]
    pub message: Option<DnstapMessage>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DnstapMessage {
    #[prost(enumeration = "MessageType", required, tag = "1")]
    pub r#type: i32,

    #[prost(enumeration = "SocketFamily", optional, tag = "2")]
    pub socket_family: Option<i32>,

    #[prost(enumeration = "SocketProtocol", optional, tag = "3")]
    pub socket_protocol: Option<i32>,

    #[prost(bytes = "vec", optional, tag = "4")]
    pub query_address: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "5")]
    pub response_address: Option<Vec<u8>>,

    #[prost(uint32, optional, tag = "6")]
    pub query_port: Option<u32>,

    #[prost(uint32, optional, tag = "7")]
    pub response_port: Option<u32>,

    #[prost(uint64, optional, tag = "8")]
    pub query_time_sec: Option<u64>,

    #[prost(fixed32, optional, tag = "9")]
    pub query_time_nsec: Option<u32>,

    #[prost(bytes = "vec", optional, tag = "10")]
    pub query_message: Option<Vec<u8>>,

    #[prost(bytes = "vec", optional, tag = "11")]
    pub query_zone: Option<Vec<u8>>,

    #[prost(uint64, optional, tag = "12")]
    pub response_time_sec: Option<u64>,

    #[prost(fixed32, optional, tag = "13")]
    pub response_time_nsec: Option<u32>,

    #[prost(bytes = "vec", optional, tag = "14")]
    pub response_message: Option<Vec<u8>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DnstapType {
    Message = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SocketFamily {
    Inet = 1,
    Inet6 = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum SocketProtocol {
    Udp = 1,
    Tcp = 2,
    Dot = 3,
    Doh = 4,
    DnsCryptUdp = 5,
    DnsCryptTcp = 6,
    Doq = 7,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum MessageType {
    AuthQuery = 1,
    AuthResponse = 2,
    ResolverQuery = 3,
    ResolverResponse = 4,
    ClientQuery = 5,
    ClientResponse = 6,
    ForwarderQuery = 7,
    ForwarderResponse = 8,
    StubQuery = 9,
    StubResponse = 10,
    ToolQuery = 11,
    ToolResponse = 12,
    UpdateQuery = 13,
    UpdateResponse = 14,
}

impl DnstapMessage {
    /// A `MESSAGE` envelope payload of the given type carrying a response.
    pub fn response(message_type: MessageType, response_message: Vec<u8>) -> Self {
        Self {
            r#type: message_type as i32,
            response_message: Some(response_message),
            ..Default::default()
        }
    }
}

impl Dnstap {
    pub fn wrap(message: DnstapMessage) -> Self {
        Self {
            r#type: DnstapType::Message as i32,
            message: Some(message),
            ..Default::default()
        }
    }
}
