pub mod auth;
pub mod availability;
pub mod backup;
pub mod booking;
pub mod log;
pub mod session;
pub mod space;
pub mod validation;
