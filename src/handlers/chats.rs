//! 채팅 API 핸들러

use actix_web::{HttpResponse, get, post, web};

use crate::domain::dto::collab::ChatCreateRequest;
use crate::domain::entities::collab::Chat;
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::collab::ChatRepository;

/// 채팅 생성
#[post("/create")]
pub async fn create_chat(
    _user: AuthenticatedUser,
    chat_repo: web::Data<ChatRepository>,
    payload: web::Json<ChatCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let chat = Chat::new(payload.into_inner().participants);

    chat_repo.insert(&chat).await?;
    log::info!("채팅 생성: {}", chat.chat_id);

    Ok(HttpResponse::Created().json(chat))
}

/// 거래 그룹에 연결된 채팅 조회
#[get("/from-transactional-group/{group_id}")]
pub async fn chat_by_group(
    _user: AuthenticatedUser,
    chat_repo: web::Data<ChatRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let group_id = path.into_inner();

    let chat = chat_repo
        .find_by_group(&group_id)
        .await?
        .ok_or_else(|| AppError::NotFound("해당 그룹의 채팅이 없습니다".to_string()))?;

    Ok(HttpResponse::Ok().json(chat))
}
