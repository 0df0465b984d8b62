//! Accept loop and worker dispatch.

pub mod listener;
