pub mod collab;
pub mod tokens;
pub mod users;
pub mod verification;
