pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod navigator;
pub mod runtime;
pub mod sample_data;
pub mod ui;

// Re-exports for convenience
pub use domain::{pipeline, tree};
pub use ui::icon;
