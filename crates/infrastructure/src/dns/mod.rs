pub mod resolutions;

pub use resolutions::{resolutions, Resolutions};
