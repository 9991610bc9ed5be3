//! # 서비스 계층
//!
//! 비즈니스 로직을 담당하는 서비스들의 모듈입니다.
//! 각 서비스는 생성자 주입으로 의존성을 받으며 `Arc`로 공유됩니다.

pub mod auth;
pub mod notifications;
pub mod users;
