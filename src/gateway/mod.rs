//! Paystack gateway orchestration core.

pub mod client;
pub mod environment;
pub mod error;
pub mod money;
pub mod reference;
pub mod request;
pub mod service;
pub mod signature;
pub mod types;
