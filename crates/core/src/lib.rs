#![deny(warnings)]

pub mod align;
pub mod analysis;
pub mod annotate;
pub mod config;
pub mod emphasis;
pub mod pitch;
pub mod transcript;
