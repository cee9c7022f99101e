pub mod dns;
pub mod dnstap;
pub mod flow;
pub mod pipeline;
pub mod policy;
