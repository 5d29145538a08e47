pub mod cli;
pub mod config;
pub mod duration;
pub mod message;
pub mod payload;
pub mod sink;
