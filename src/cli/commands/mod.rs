pub mod lead;
pub mod server;
