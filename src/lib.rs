pub mod cli;
pub mod constants;
pub mod matrix;
pub mod resolve;
pub mod validate;

pub use anyhow::Result;
