//! Reusable UI components rendered inside pages.

pub mod code_viewer;
pub mod file_tree;
pub mod footer_bar;
pub mod pipeline_status;
pub mod repository_header;
pub mod status_bar;
