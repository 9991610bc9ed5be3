//! Google 연합 로그인 검증 서비스
//!
//! 클라이언트가 전달한 Google ID 토큰을 Google tokeninfo 엔드포인트로
//! 검증하고 프로필 정보를 추출합니다. 검증 실패의 모든 경로는
//! `InvalidProviderToken` 하나로 수렴합니다 (원인은 로그에만).

use std::sync::Arc;

use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Google tokeninfo 응답에서 사용하는 필드
#[derive(Debug, Deserialize)]
pub struct GoogleTokenInfo {
    /// Google 계정 고유 식별자
    pub sub: String,
    /// 토큰이 발급된 클라이언트 ID
    pub aud: String,
    /// 검증된 이메일 주소
    pub email: String,
    /// 전체 표시 이름 (given/family가 없을 때 분할용)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
}

/// Google ID 토큰 검증 서비스
pub struct GoogleAuthService {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// ID 토큰을 Google에 검증 요청하고 토큰 정보를 반환합니다.
    ///
    /// 서명/만료 검증은 Google 쪽에서 수행되며, 우리는 응답의 `aud`가
    /// 설정된 클라이언트 ID와 일치하는지 추가로 확인합니다.
    pub async fn verify_id_token(&self, id_token: &str) -> Result<GoogleTokenInfo, AppError> {
        let response = self
            .http_client
            .get("https://oauth2.googleapis.com/tokeninfo")
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| {
                log::warn!("Google tokeninfo 요청 실패: {}", e);
                AppError::InvalidProviderToken
            })?;

        if !response.status().is_success() {
            log::warn!("Google tokeninfo 거부 응답: {}", response.status());
            return Err(AppError::InvalidProviderToken);
        }

        let token_info: GoogleTokenInfo = response.json().await.map_err(|e| {
            log::warn!("Google tokeninfo 응답 파싱 실패: {}", e);
            AppError::InvalidProviderToken
        })?;

        if token_info.aud != self.config.auth.google_client_id {
            log::warn!("Google 토큰 aud 불일치: {}", token_info.aud);
            return Err(AppError::InvalidProviderToken);
        }

        Ok(token_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_info_deserializes_without_optional_names() {
        let json = r#"{
            "sub": "118200000000000000000",
            "aud": "client-id.apps.googleusercontent.com",
            "email": "user@gmail.com"
        }"#;

        let info: GoogleTokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.email, "user@gmail.com");
        assert!(info.name.is_empty());
        assert!(info.given_name.is_none());
    }

    #[test]
    fn test_token_info_deserializes_full_profile() {
        let json = r#"{
            "sub": "118200000000000000000",
            "aud": "client-id.apps.googleusercontent.com",
            "email": "user@gmail.com",
            "name": "Hong Gildong",
            "given_name": "Gildong",
            "family_name": "Hong"
        }"#;

        let info: GoogleTokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.given_name.as_deref(), Some("Gildong"));
        assert_eq!(info.family_name.as_deref(), Some("Hong"));
    }
}
