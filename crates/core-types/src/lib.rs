pub mod records;
pub mod route;

// Re-export the core types to provide a clean public API.
pub use records::{LabourParticipation, Message};
pub use route::RouteKey;
