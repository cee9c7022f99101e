use dnsflow_domain::DomainError;
use hickory_proto::op::Message;
use prost::Message as _;

use super::schema::{Dnstap, MessageType};

/// One decoded dnstap payload.
#[derive(Debug, Clone)]
pub struct DnsTransaction {
    /// `None` when the writer used a message type this build does not know.
    pub message_type: Option<MessageType>,

    pub response_message: Option<Vec<u8>>,
}

impl DnsTransaction {
    pub fn is_client_response(&self) -> bool {
        self.message_type == Some(MessageType::ClientResponse)
    }

    /// Parses the embedded DNS response of a client response.
    ///
    /// Other transaction types yield `Ok(None)` without touching their payload.
    pub fn response(&self) -> Result<Option<Message>, DomainError> {
        if !self.is_client_response() {
            return Ok(None);
        }

        let bytes = self.response_message.as_deref().ok_or_else(|| {
            DomainError::InvalidDnsMessage("client response carries no DNS message".to_string())
        })?;

        Message::from_vec(bytes).map(Some).map_err(|e| {
            DomainError::InvalidDnsMessage(format!("Failed to parse DNS response: {}", e))
        })
    }
}

pub struct TransactionDecoder;

impl TransactionDecoder {
    pub fn decode(frame: &[u8]) -> Result<DnsTransaction, DomainError> {
        let envelope = Dnstap::decode(frame)
            .map_err(|e| DomainError::InvalidFrame(format!("Failed to decode dnstap: {}", e)))?;

        // prost leaves missing proto2 required enums at 0, which no variant uses
        if envelope.r#type == 0 {
            return Err(DomainError::InvalidFrame(
                "dnstap envelope has no type".to_string(),
            ));
        }

        let message = envelope.message.ok_or_else(|| {
            DomainError::InvalidFrame("dnstap envelope has no message".to_string())
        })?;

        if message.r#type == 0 {
            return Err(DomainError::InvalidFrame(
                "dnstap message has no type".to_string(),
            ));
        }

        Ok(DnsTransaction {
            message_type: MessageType::try_from(message.r#type).ok(),
            response_message: message.response_message,
        })
    }
}
