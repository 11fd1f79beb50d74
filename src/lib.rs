//! Live plot of a one-input, two-hidden-unit, one-output tanh network.
//!
//! [`render`] maps seven parameters to a 400×400 graph image plus the formula
//! it shows. [`RedrawGate`] keeps callers from re-rendering unchanged
//! parameters, and [`app::VisualizerApp`] is the eframe front end.

pub mod app;
pub mod canvas;
pub mod config;
pub mod coords;
pub mod error;
pub mod formula;
pub mod gate;
pub mod model;
pub mod render;

pub use config::AppConfig;
pub use coords::{CANVAS_SIZE, PixelPoint, to_pixel};
pub use error::{Result, VisualizerError};
pub use formula::formula;
pub use gate::RedrawGate;
pub use model::NetworkParameters;
pub use render::{CurveRenderer, GraphStyle, Plot, SamplePoint, render, sample_curve};
