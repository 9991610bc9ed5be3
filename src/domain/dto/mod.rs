pub mod auth;
pub mod collab;
pub mod users;
