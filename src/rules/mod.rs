mod client;
mod error;
mod response;

pub use client::RuleEngineClient;
pub use error::RuleError;
pub use response::OperationResult;
