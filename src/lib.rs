pub mod config;
pub mod extractor;
pub mod report;
pub mod runner;
pub mod source;
