pub mod chat;
pub mod dashboard;
pub mod transactional_group;

pub use chat::{Chat, ChatMessage, ChatParticipant};
pub use dashboard::Dashboard;
pub use transactional_group::TransactionalGroup;
