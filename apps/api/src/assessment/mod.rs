pub mod axes;
pub mod engine;
pub mod fit;
pub mod handlers;
pub mod narrative;
pub mod questions;
pub mod ranking;
pub mod report;
pub mod responses;
pub mod rubric;
