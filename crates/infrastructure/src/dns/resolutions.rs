use dnsflow_domain::ResolutionEvent;
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::{RData, Record};
use std::sync::Arc;

/// Lazily pairs every question with every IPv4 answer of a response.
///
/// Events come out question-major, answers in message order. Names keep the
/// fully qualified ASCII form of the question (`example.com.`, IDN labels
/// stay punycode); the policy matcher strips the trailing dot. Only the query name is used, so CNAME chains
/// resolve to the name the client asked for.
pub struct Resolutions<'a> {
    queries: &'a [Query],
    answers: &'a [Record],
    query: usize,
    answer: usize,
    name: Option<Arc<str>>,
}

pub fn resolutions(message: &Message) -> Resolutions<'_> {
    Resolutions {
        queries: message.queries(),
        answers: message.answers(),
        query: 0,
        answer: 0,
        name: None,
    }
}

impl Iterator for Resolutions<'_> {
    type Item = ResolutionEvent;

    fn next(&mut self) -> Option<ResolutionEvent> {
        let (queries, answers) = (self.queries, self.answers);

        while let Some(query) = queries.get(self.query) {
            while let Some(record) = answers.get(self.answer) {
                self.answer += 1;
                if let RData::A(a) = record.data() {
                    let name = self
                        .name
                        .get_or_insert_with(|| Arc::from(query.name().to_ascii()))
                        .clone();
                    return Some(ResolutionEvent::new(name, a.0.to_string()));
                }
            }
            self.query += 1;
            self.answer = 0;
            self.name = None;
        }
        None
    }
}
