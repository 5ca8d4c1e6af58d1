pub mod cli;
pub mod config;
pub mod error;
pub mod leads;

pub use error::{LeadStatusError, DEFAULT_ERROR_MESSAGE};
pub use leads::{LeadResponse, LeadStatus, LeadStatusUpdater};
