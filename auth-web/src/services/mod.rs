//! Browser services: persistent storage and deferred actions

pub mod storage;
pub mod timers;
