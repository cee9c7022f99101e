pub mod processor;

pub use processor::{ProcessorStats, TransactionProcessor};
