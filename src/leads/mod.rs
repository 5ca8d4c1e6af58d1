pub mod client;
pub mod model;

pub use client::LeadStatusUpdater;
pub use model::{parse_error_payload, ErrorPayload, LeadResponse, LeadStatus, StatusUpdateRequest};
