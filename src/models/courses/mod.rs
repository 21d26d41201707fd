pub mod entities;
pub mod permission;
pub mod requests;
pub mod responses;
