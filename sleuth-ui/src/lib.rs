//! sleuth-ui - View components for the sleuth web frontend
//!
//! Contains display types and pure, props-based view components. Nothing in
//! here touches the router or the network; interactions are surfaced as
//! `EventHandler` props so the same components render identically in the
//! browser and under SSR in tests.

pub mod components;
pub mod display_types;

pub use components::*;
pub use display_types::*;
