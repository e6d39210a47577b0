pub mod catalog;
pub mod handlers;
pub mod profile;
pub mod scorer;
