pub mod booking;
pub mod message;
pub mod park;
pub mod role;
pub mod user;
