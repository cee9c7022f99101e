#![allow(dead_code)]

use async_trait::async_trait;
use dnsflow_application::ports::FlowInstaller;
use dnsflow_domain::{DomainError, FlowRule};
use dnsflow_infrastructure::dnstap::{Dnstap, DnstapMessage, MessageType};
use hickory_proto::op::{Message, MessageType as DnsMessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use prost::Message as _;
use std::net::Ipv4Addr;
use std::sync::Mutex;

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(Name::from_ascii(owner).unwrap(), 300, RData::A(A(ip)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(
        Name::from_ascii(owner).unwrap(),
        300,
        RData::CNAME(CNAME(Name::from_ascii(target).unwrap())),
    )
}

pub fn response(questions: &[&str], answers: Vec<Record>) -> Message {
    let mut message = Message::new(0x1234, DnsMessageType::Response, OpCode::Query);
    for question in questions {
        message.add_query(Query::query(Name::from_ascii(question).unwrap(), RecordType::A));
    }
    for answer in answers {
        message.add_answer(answer);
    }
    message
}

pub fn response_bytes(message: &Message) -> Vec<u8> {
    message.to_vec().unwrap()
}

pub fn dnstap_frame(message_type: MessageType, response_message: Vec<u8>) -> Vec<u8> {
    Dnstap::wrap(DnstapMessage::response(message_type, response_message)).encode_to_vec()
}

/// `CLIENT_RESPONSE` frame answering `question` with one A record per address.
pub fn client_response_frame(question: &str, addresses: &[Ipv4Addr]) -> Vec<u8> {
    let answers = addresses.iter().map(|ip| a_record(question, *ip)).collect();
    dnstap_frame(
        MessageType::ClientResponse,
        response_bytes(&response(&[question], answers)),
    )
}

pub fn malformed_frame() -> Vec<u8> {
    // field 1 with wire type 7, which protobuf does not define
    vec![0x0f, 0x0f, 0x0f]
}

#[derive(Default)]
pub struct RecordingInstaller {
    rules: Mutex<Vec<FlowRule>>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> Vec<FlowRule> {
        self.rules.lock().unwrap().clone()
    }

    pub fn pairs(&self) -> Vec<(String, String)> {
        self.rules()
            .iter()
            .map(|r| (r.source.to_string(), r.destination.to_string()))
            .collect()
    }
}

#[async_trait]
impl FlowInstaller for RecordingInstaller {
    async fn install(&self, rule: &FlowRule) -> Result<(), DomainError> {
        self.rules.lock().unwrap().push(rule.clone());
        Ok(())
    }
}
