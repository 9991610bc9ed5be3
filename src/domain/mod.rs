//! 도메인 계층
//!
//! 엔티티(저장소 문서), DTO(요청/응답), 모델(토큰/인증 주체)을 포함합니다.

pub mod dto;
pub mod entities;
pub mod models;
