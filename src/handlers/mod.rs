//! # API 핸들러 계층
//!
//! HTTP 요청을 받아 검증하고 서비스 계층에 위임하는 핸들러들입니다.

pub mod auth;
pub mod chats;
pub mod dashboards;
pub mod transactional_groups;
pub mod users;
