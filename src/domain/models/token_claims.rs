//! JWT 클레임 및 토큰 쌍 모델

use serde::{Deserialize, Serialize};

/// 토큰 종류
///
/// 액세스/리프레시 토큰은 같은 비밀키와 알고리즘을 공유하므로
/// 구조만으로는 구분되지 않습니다. `kind` 클레임을 명시적으로 넣어
/// 리프레시 경로에 액세스 토큰을 밀어 넣는 오용을 차단합니다.
/// 외부에서 보는 토큰은 여전히 불투명한 bearer 문자열입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 주체 (사용자 이메일, 소문자 정규화)
    pub sub: String,
    /// 토큰 종류 (access/refresh)
    pub kind: TokenKind,
    /// 발급 시각 (unix epoch 초)
    pub iat: i64,
    /// 만료 시각 (unix epoch 초)
    pub exp: i64,
}

/// 액세스 + 리프레시 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TokenKind::Access).unwrap(),
            "\"access\""
        );
        assert_eq!(
            serde_json::to_string(&TokenKind::Refresh).unwrap(),
            "\"refresh\""
        );
    }

    #[test]
    fn test_token_pair_is_bearer() {
        let pair = TokenPair::new("a".to_string(), "r".to_string());
        assert_eq!(pair.token_type, "bearer");
    }
}
