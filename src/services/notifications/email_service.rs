//! 이메일 발송 서비스
//!
//! SMTP를 통한 트랜잭션 이메일(인증 코드 등) 발송을 담당합니다.
//! 발송 실패는 호출자의 흐름을 깨지 않도록 bool로만 알립니다.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

/// SMTP 이메일 발송 서비스
///
/// SMTP 자격 증명이 설정되지 않은 환경(로컬 개발 등)에서는 전송을
/// 건너뛰고 본문을 로그로만 남깁니다.
pub struct EmailService {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from_address: String,
}

impl EmailService {
    pub fn new(config: &SmtpConfig) -> Self {
        let transport = if config.username.is_empty() {
            log::warn!("SMTP 자격 증명 미설정: 이메일은 로그로만 출력됩니다");
            None
        } else {
            match AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host) {
                Ok(builder) => Some(
                    builder
                        .credentials(Credentials::new(
                            config.username.clone(),
                            config.password.clone(),
                        ))
                        .port(config.port)
                        .build(),
                ),
                Err(e) => {
                    log::error!("SMTP 트랜스포트 초기화 실패: {}", e);
                    None
                }
            }
        };

        Self {
            transport,
            from_address: config.from_address.clone(),
        }
    }

    /// 이메일 발송
    ///
    /// 성공 여부를 반환하며, 실패 시 원인은 로그에만 남깁니다.
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> bool {
        let Some(transport) = &self.transport else {
            log::info!("[메일 생략] to={}, subject={}, body={}", to, subject, body);
            return true;
        };

        let from: Mailbox = match self.from_address.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                log::error!("발신자 주소 파싱 실패 ({}): {}", self.from_address, e);
                return false;
            }
        };

        let to: Mailbox = match to.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                log::warn!("수신자 주소 파싱 실패 ({}): {}", to, e);
                return false;
            }
        };

        let message = match Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .body(body.to_string())
        {
            Ok(message) => message,
            Err(e) => {
                log::warn!("이메일 메시지 구성 실패: {}", e);
                return false;
            }
        };

        match transport.send(message).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("이메일 전송 실패: {}", e);
                false
            }
        }
    }
}
