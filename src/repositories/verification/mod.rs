pub mod verification_code_repo;

pub use verification_code_repo::VerificationCodeRepository;
