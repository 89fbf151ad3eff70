pub mod summary;

pub use summary::{percent, CenterSummary};
