pub mod config;
pub mod profile;
pub mod record;
pub mod scoring;
pub mod taxonomy;
