//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 발급, 검증, 무효화를 담당합니다.
//!
//! ## 설계 노트
//!
//! - 두 토큰 종류는 하나의 비밀키와 HMAC-SHA256 서명을 공유하고
//!   수명만 다릅니다 (액세스 30분, 리프레시 7일 기본).
//! - `kind` 클레임으로 액세스/리프레시를 구분합니다. 토큰은 외부에서
//!   여전히 불투명한 bearer 문자열입니다.
//! - 검증 실패의 구체적 원인(만료/서명/페이로드)은 서버 로그에만 남기고
//!   호출자에게는 항상 동일한 `AuthenticationFailed`를 돌려줍니다.
//! - 리프레시 토큰 무효화는 블랙리스트 컬렉션 멤버십으로 판별합니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mongodb::bson::DateTime;

use crate::config::AppConfig;
use crate::domain::entities::tokens::RevokedToken;
use crate::domain::models::{TokenClaims, TokenKind, TokenPair};
use crate::errors::AppError;
use crate::repositories::tokens::TokenBlacklistRepository;

/// JWT 토큰 관리 서비스
pub struct TokenService {
    config: Arc<AppConfig>,
    blacklist: Arc<TokenBlacklistRepository>,
}

impl TokenService {
    pub fn new(config: Arc<AppConfig>, blacklist: Arc<TokenBlacklistRepository>) -> Self {
        Self { config, blacklist }
    }

    /// 액세스 토큰 발급
    pub fn issue_access(&self, subject: &str) -> Result<String, AppError> {
        self.issue(
            subject,
            TokenKind::Access,
            Duration::minutes(self.config.auth.access_token_minutes),
        )
    }

    /// 리프레시 토큰 발급
    pub fn issue_refresh(&self, subject: &str) -> Result<String, AppError> {
        self.issue(
            subject,
            TokenKind::Refresh,
            Duration::days(self.config.auth.refresh_token_days),
        )
    }

    fn issue(
        &self,
        subject: &str,
        kind: TokenKind,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            kind,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.auth.jwt_secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("토큰 생성 실패: {}", e)))
    }

    /// 액세스 + 리프레시 토큰 쌍 발급
    pub fn generate_token_pair(&self, subject: &str) -> Result<TokenPair, AppError> {
        let access_token = self.issue_access(subject)?;
        let refresh_token = self.issue_refresh(subject)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 만료, 서명 오류, 페이로드 손상(sub/kind 누락 등)을 구분하여 로깅하되
    /// 호출자에게는 원인을 알 수 없는 단일 `AuthenticationFailed`를 반환합니다.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.config.auth.jwt_secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        log::debug!("토큰 검증 실패: 만료됨");
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        log::warn!("토큰 검증 실패: 서명 불일치");
                    }
                    _ => {
                        log::debug!("토큰 검증 실패: 잘못된 형식 ({})", e);
                    }
                }
                AppError::AuthenticationFailed
            })
    }

    /// 액세스 토큰 검증 (kind 강제)
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let claims = self.verify(token)?;
        if claims.kind != TokenKind::Access {
            log::warn!("액세스 경로에 리프레시 토큰 사용 시도: {}", claims.sub);
            return Err(AppError::AuthenticationFailed);
        }
        Ok(claims)
    }

    /// 리프레시 토큰 검증 (kind 강제)
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let claims = self.verify(token)?;
        if claims.kind != TokenKind::Refresh {
            log::warn!("리프레시 경로에 액세스 토큰 사용 시도: {}", claims.sub);
            return Err(AppError::AuthenticationFailed);
        }
        Ok(claims)
    }

    /// 리프레시 토큰을 무효화합니다 (멱등, 무조건 성공).
    ///
    /// 토큰이 유효하면 자체 만료 시각을, 해석 불가능하면 리프레시 수명만큼의
    /// 상한을 TTL 기준으로 기록합니다.
    pub async fn revoke(&self, refresh_token: &str) -> Result<(), AppError> {
        let expires_at = match self.verify(refresh_token) {
            Ok(claims) => DateTime::from_millis(claims.exp * 1000),
            // 검증 불가 토큰도 무조건 등록하되 보수적인 만료 상한 사용
            Err(_) => DateTime::from_chrono(
                Utc::now() + Duration::days(self.config.auth.refresh_token_days),
            ),
        };

        self.blacklist
            .insert(RevokedToken::new(refresh_token.to_string(), expires_at))
            .await
    }

    /// 리프레시 토큰의 무효화 여부를 확인합니다.
    pub async fn is_revoked(&self, refresh_token: &str) -> Result<bool, AppError> {
        self.blacklist.contains(refresh_token).await
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::AuthenticationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 블랙리스트 조회가 없는 경로만 검증하는 테스트용 서비스
    //
    // Database 연결 없이 TokenService를 만들 수 없으므로, 서명/검증처럼
    // 저장소를 건드리지 않는 로직은 발급 로직을 그대로 복제한 헬퍼로 검증한다.
    fn issue_with(
        secret: &str,
        subject: &str,
        kind: TokenKind,
        lifetime: Duration,
    ) -> String {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject.to_string(),
            kind,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap()
    }

    fn verify_with(secret: &str, token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
        .map(|d| d.claims)
    }

    #[test]
    fn test_access_token_round_trip() {
        let token = issue_with("secret", "a@x.com", TokenKind::Access, Duration::minutes(30));
        let claims = verify_with("secret", &token).unwrap();

        assert_eq!(claims.sub, "a@x.com");
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_fails_verification() {
        let token = issue_with("secret", "a@x.com", TokenKind::Access, Duration::seconds(-120));
        let err = verify_with("secret", &token).unwrap_err();

        assert!(matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ));
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = issue_with("secret", "a@x.com", TokenKind::Access, Duration::minutes(30));
        assert!(verify_with("other-secret", &token).is_err());
    }

    #[test]
    fn test_token_without_subject_fails_deserialization() {
        // sub 클레임이 없는 페이로드는 역직렬화 단계에서 거부된다
        #[derive(serde::Serialize)]
        struct NoSub {
            kind: TokenKind,
            iat: i64,
            exp: i64,
        }
        let now = Utc::now();
        let token = encode(
            &Header::default(),
            &NoSub {
                kind: TokenKind::Access,
                iat: now.timestamp(),
                exp: (now + Duration::minutes(5)).timestamp(),
            },
            &EncodingKey::from_secret("secret".as_ref()),
        )
        .unwrap();

        assert!(verify_with("secret", &token).is_err());
    }

    #[test]
    fn test_access_and_refresh_share_format_but_differ_in_kind() {
        let access = issue_with("secret", "a@x.com", TokenKind::Access, Duration::minutes(30));
        let refresh = issue_with("secret", "a@x.com", TokenKind::Refresh, Duration::days(7));

        let access_claims = verify_with("secret", &access).unwrap();
        let refresh_claims = verify_with("secret", &refresh).unwrap();

        assert_eq!(access_claims.kind, TokenKind::Access);
        assert_eq!(refresh_claims.kind, TokenKind::Refresh);
        assert!(refresh_claims.exp > access_claims.exp);
    }

    // Database 사용 여부와 무관한 bearer 추출 로직은 순수 함수처럼 검증
    #[test]
    fn test_extract_bearer_token() {
        fn extract(header: &str) -> Option<&str> {
            header.strip_prefix("Bearer ")
        }

        assert_eq!(extract("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract("bearer abc"), None);
        assert_eq!(extract("abc"), None);
    }
}
