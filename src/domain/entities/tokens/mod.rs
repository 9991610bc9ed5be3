pub mod revoked_token;

pub use revoked_token::RevokedToken;
