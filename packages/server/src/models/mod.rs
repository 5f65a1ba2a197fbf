pub mod auth;
pub mod booking;
pub mod contact;
pub mod park;
pub mod shared;
