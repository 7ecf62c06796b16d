//! scriptgen library exports for testing

pub mod core;
pub mod generation;
pub mod oneshot;
pub mod tui;

#[cfg(test)]
pub mod test_support;
