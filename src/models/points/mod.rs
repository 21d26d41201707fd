pub mod entities;
pub mod responses;
pub mod scoring;
