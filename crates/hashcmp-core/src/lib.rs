pub mod config;
pub mod logging;

pub mod algorithm;
pub mod checksum;
pub mod compare;
pub mod error;
pub mod report;
pub mod validate;

pub use algorithm::HashMethod;
pub use checksum::FileRecord;
pub use compare::{Summary, Verdict};
pub use error::CompareError;
