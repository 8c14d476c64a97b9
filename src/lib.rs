mod error;
mod get;
pub mod json;
mod response;
pub mod sink;

pub use error::Error;
pub use get::HttpClientGetExt;
pub use json::{JsonSettings, JSON_SETTINGS};
pub use response::ResponseExt;
pub use sink::{BufferSink, Sink, TracingSink};
