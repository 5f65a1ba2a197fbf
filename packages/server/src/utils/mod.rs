pub mod access;
pub mod flash;
pub mod hash;
pub mod jwt;
pub mod queries;
pub mod slug;
