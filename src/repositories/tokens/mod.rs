pub mod token_blacklist_repo;

pub use token_blacklist_repo::TokenBlacklistRepository;
