#[macro_use]
extern crate log;

pub mod configuration;
pub mod latency;
pub mod logger;
pub mod sample;
pub mod server;
pub mod utils;
