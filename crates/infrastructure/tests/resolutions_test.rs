mod fixtures;

use dnsflow_domain::ResolutionEvent;
use dnsflow_infrastructure::dns::resolutions;
use fixtures::*;
use std::net::Ipv4Addr;

fn events(questions: &[&str], answers: Vec<hickory_proto::rr::Record>) -> Vec<ResolutionEvent> {
    let message = response(questions, answers);
    resolutions(&message).collect()
}

#[test]
fn test_single_question_single_answer() {
    let got = events(
        &["www.example.com."],
        vec![a_record("www.example.com.", Ipv4Addr::new(93, 184, 216, 34))],
    );

    assert_eq!(
        got,
        vec![ResolutionEvent::new("www.example.com.", "93.184.216.34")]
    );
}

#[test]
fn test_cross_product_is_question_major() {
    let got = events(
        &["a.example.com.", "b.example.com."],
        vec![
            a_record("a.example.com.", Ipv4Addr::new(1, 1, 1, 1)),
            a_record("b.example.com.", Ipv4Addr::new(2, 2, 2, 2)),
        ],
    );

    assert_eq!(
        got,
        vec![
            ResolutionEvent::new("a.example.com.", "1.1.1.1"),
            ResolutionEvent::new("a.example.com.", "2.2.2.2"),
            ResolutionEvent::new("b.example.com.", "1.1.1.1"),
            ResolutionEvent::new("b.example.com.", "2.2.2.2"),
        ]
    );
}

#[test]
fn test_cname_answers_are_skipped_and_query_name_is_used() {
    let got = events(
        &["www.example.com."],
        vec![
            cname_record("www.example.com.", "edge.cdn.net."),
            a_record("edge.cdn.net.", Ipv4Addr::new(203, 0, 113, 7)),
        ],
    );

    assert_eq!(
        got,
        vec![ResolutionEvent::new("www.example.com.", "203.0.113.7")]
    );
}

#[test]
fn test_no_answers_yields_nothing() {
    assert!(events(&["www.example.com."], vec![]).is_empty());
}

#[test]
fn test_no_questions_yields_nothing() {
    let got = events(&[], vec![a_record("x.example.com.", Ipv4Addr::new(1, 2, 3, 4))]);

    assert!(got.is_empty());
}

#[test]
fn test_iteration_is_lazy() {
    let answers = (0..200u8)
        .map(|i| a_record("big.example.com.", Ipv4Addr::new(10, 0, 0, i)))
        .collect();
    let message = response(&["big.example.com."], answers);

    let mut iter = resolutions(&message);

    assert_eq!(
        iter.next(),
        Some(ResolutionEvent::new("big.example.com.", "10.0.0.0"))
    );
    assert_eq!(iter.count(), 199);
}

#[test]
fn test_idn_names_keep_punycode_form() {
    let got = events(
        &["www.xn--bcher-kva.example."],
        vec![a_record("www.xn--bcher-kva.example.", Ipv4Addr::new(1, 2, 3, 4))],
    );

    assert_eq!(
        got,
        vec![ResolutionEvent::new("www.xn--bcher-kva.example.", "1.2.3.4")]
    );
}

#[test]
fn test_query_name_case_is_preserved() {
    let got = events(
        &["WWW.Example.COM."],
        vec![a_record("WWW.Example.COM.", Ipv4Addr::new(1, 2, 3, 4))],
    );

    assert_eq!(got[0].name.as_ref(), "WWW.Example.COM.");
}
