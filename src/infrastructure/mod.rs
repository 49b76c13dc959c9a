//! Infrastructure layer - Store implementations and process setup

pub mod id;
pub mod logging;
pub mod user;
