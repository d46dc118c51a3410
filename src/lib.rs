//! scatter-rs: headless scatter-plot engine.
//!
//! Records flow strictly forward: loader → dimensions → scales → render
//! frame → renderer, with an optional tooltip state machine driven by
//! pointer events on the rendered markers.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod render;
pub mod telemetry;

pub use api::{ChartVariant, ScatterChart, ScatterConfig};
pub use error::{ScatterError, ScatterResult};
