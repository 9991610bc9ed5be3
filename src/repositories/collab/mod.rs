pub mod chat_repo;
pub mod dashboard_repo;
pub mod group_repo;

pub use chat_repo::ChatRepository;
pub use dashboard_repo::DashboardRepository;
pub use group_repo::TransactionalGroupRepository;
