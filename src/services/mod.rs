pub mod scoring;
pub mod server;
