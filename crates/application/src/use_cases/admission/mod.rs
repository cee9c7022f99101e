pub mod admit_resolution;

pub use admit_resolution::{AdmissionOutcome, AdmitResolutionUseCase};
