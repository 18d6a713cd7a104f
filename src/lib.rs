//! Solar Tour - interactive solar-system explorer
//!
//! A library crate holding every plugin of the explorer, so the headless
//! parts can be driven from integration tests.

pub mod animation;
pub mod audio;
pub mod camera;
pub mod identity;
pub mod input;
pub mod interaction;
pub mod quiz;
pub mod registry;
pub mod scene;
pub mod schedule;
pub mod speech;
pub mod types;
pub mod ui;

#[cfg(test)]
mod proptest_motion;
#[cfg(test)]
pub mod test_utils;
