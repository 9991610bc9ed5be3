//! 인증 흐름 오케스트레이션 서비스
//!
//! 회원가입, 로그인, 토큰 갱신, 로그아웃, 연합 로그인의 전체 흐름을
//! 조합합니다. 개별 단계(비밀번호, 토큰, 인증 코드)는 각 전담 서비스에
//! 위임하고, 이 계층은 순서와 오류 정책만 책임집니다.

use std::sync::Arc;

use crate::domain::entities::users::User;
use crate::domain::models::{TokenKind, TokenPair};
use crate::errors::AppError;
use crate::services::auth::{GoogleAuthService, TokenService, VerificationService};
use crate::services::users::UserService;
use crate::utils::string_utils::split_display_name;

/// 인증 흐름 오케스트레이션 서비스
pub struct AuthService {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
    verification_service: Arc<VerificationService>,
    google_auth_service: Arc<GoogleAuthService>,
}

impl AuthService {
    pub fn new(
        user_service: Arc<UserService>,
        token_service: Arc<TokenService>,
        verification_service: Arc<VerificationService>,
        google_auth_service: Arc<GoogleAuthService>,
    ) -> Self {
        Self {
            user_service,
            token_service,
            verification_service,
            google_auth_service,
        }
    }

    /// 자격 증명 검증
    ///
    /// 계정 없음, 비밀번호 불일치, 비밀번호 없는 연합 계정을 모두
    /// 동일한 `InvalidCredentials`로 반환합니다. 계정 존재 여부가
    /// 응답으로 구분되지 않아야 합니다.
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_service
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let Some(stored_hash) = &user.hashed_password else {
            log::info!("연합 전용 계정의 비밀번호 로그인 시도: {}", user.email);
            return Err(AppError::InvalidCredentials);
        };

        if !self.user_service.verify_password(password, stored_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// 이메일 + 비밀번호 로그인
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user = self.authenticate(email, password).await?;
        log::info!("로그인 성공: {}", user.email);

        self.token_service.generate_token_pair(&user.email)
    }

    /// 인증 코드 검증을 포함한 회원가입
    ///
    /// 코드 검증과 소모가 먼저 수행됩니다. 이후 계정 생성이 실패해도
    /// 코드는 이미 소모된 상태로 남습니다 (재발급으로 복구).
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        code: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<User, AppError> {
        self.verification_service.validate_code(email, code).await?;

        let user = self
            .user_service
            .create_local_user(email, password, first_name, last_name)
            .await?;

        log::info!("회원가입 완료: {}", user.email);
        Ok(user)
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 블랙리스트 확인이 서명/만료 검증보다 먼저 수행되어, 무효화된
    /// 토큰은 만료 여부와 무관하게 `TokenRevoked`로 구분됩니다.
    /// 기존 리프레시 토큰은 자연 만료까지 계속 유효합니다.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        if self.token_service.is_revoked(refresh_token).await? {
            log::info!("무효화된 리프레시 토큰 사용 시도");
            return Err(AppError::TokenRevoked);
        }

        let claims = self.token_service.verify(refresh_token)?;
        if claims.kind != TokenKind::Refresh {
            log::warn!("갱신 경로에 액세스 토큰 사용 시도: {}", claims.sub);
            return Err(AppError::AuthenticationFailed);
        }

        // 토큰 발급 이후 삭제된 계정의 갱신 차단
        if self.user_service.find_by_email(&claims.sub).await?.is_none() {
            log::warn!("존재하지 않는 계정의 토큰 갱신 시도: {}", claims.sub);
            return Err(AppError::AuthenticationFailed);
        }

        self.token_service.generate_token_pair(&claims.sub)
    }

    /// 로그아웃 (리프레시 토큰 무효화)
    ///
    /// 이미 무효화되었거나 해석 불가능한 토큰이어도 항상 성공합니다.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AppError> {
        self.token_service.revoke(refresh_token).await?;
        log::info!("로그아웃 처리 완료");
        Ok(())
    }

    /// Google ID 토큰으로 연합 로그인
    ///
    /// 해당 이메일 계정이 없으면 비밀번호 없는 계정을 새로 만듭니다.
    /// 같은 이메일의 기존 로컬 계정이 있으면 그 계정으로 로그인됩니다.
    pub async fn federated_login(&self, id_token: &str) -> Result<TokenPair, AppError> {
        let token_info = self.google_auth_service.verify_id_token(id_token).await?;

        let (first_name, last_name) = match (&token_info.given_name, &token_info.family_name) {
            (Some(given), Some(family)) => (given.clone(), family.clone()),
            _ => split_display_name(&token_info.name),
        };

        let user = self
            .user_service
            .find_or_create_federated(&token_info.email, &first_name, &last_name)
            .await?;

        log::info!("Google 로그인 성공: {}", user.email);
        self.token_service.generate_token_pair(&user.email)
    }
}
