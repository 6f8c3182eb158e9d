pub mod content_details;

pub use content_details::{ContentDetailsParams, SenseNetContentDetailsTool};
