pub mod pipeline;
pub mod repository;
pub mod tree;
