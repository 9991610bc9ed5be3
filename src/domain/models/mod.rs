pub mod authenticated_user;
pub mod token_claims;

pub use authenticated_user::AuthenticatedUser;
pub use token_claims::{TokenClaims, TokenKind, TokenPair};
