pub mod config;
pub mod games;
pub mod prompt;
pub mod session;
pub mod utils;
