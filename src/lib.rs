//! 계정 및 협업 백엔드
//!
//! 다중 사용자 계정 관리와 간단한 협업 자원(대시보드, 거래 그룹, 채팅)을
//! 제공하는 REST API 서버입니다.
//!
//! # Features
//!
//! - **계정 관리**: 이메일 인증 코드 기반 회원가입, 프로필 조회, 계정 삭제
//! - **JWT 인증**: 액세스/리프레시 토큰, 로그아웃 시 블랙리스트 무효화
//! - **연합 로그인**: Google ID 토큰 검증
//! - **인증 코드**: 60초 쿨다운 / 600초 유효기간의 일회성 6자리 코드
//! - **협업 자원**: 소유자/공유 모델의 대시보드와 거래 그룹 + 전용 채팅
//! - **MongoDB**: 모든 상태의 영구 저장 (TTL 인덱스로 블랙리스트 정리)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 의존성은 생성자 주입으로 연결되며, actix의 `web::Data`를 통해
//! 핸들러에 전달됩니다. 프로세스 전역 레지스트리는 사용하지 않습니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
