//! 인증 관련 서비스 모듈

pub mod auth_service;
pub mod google_auth_service;
pub mod token_service;
pub mod verification_service;

pub use auth_service::AuthService;
pub use google_auth_service::{GoogleAuthService, GoogleTokenInfo};
pub use token_service::TokenService;
pub use verification_service::VerificationService;
