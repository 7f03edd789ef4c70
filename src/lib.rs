#![forbid(unsafe_code)]

pub mod cli;
pub mod docs;
pub mod formats;
pub mod greeting;
pub mod logging;
pub mod metadata;
