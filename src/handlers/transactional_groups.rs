//! 거래 그룹 API 핸들러
//!
//! 그룹 생성 시 전용 채팅이 함께 만들어지고 양방향으로 연결됩니다:
//! 그룹 문서는 `chat_id`를 갖고, 채팅 문서에는 그룹 ID가 역방향으로
//! 채워집니다.

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::dto::collab::{MyGroupsResponse, TransactionalGroupCreateRequest};
use crate::domain::entities::collab::{Chat, ChatParticipant, TransactionalGroup};
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::collab::{ChatRepository, TransactionalGroupRepository};

/// 거래 그룹 생성 (전용 채팅 포함)
#[post("/create")]
pub async fn create_group(
    user: AuthenticatedUser,
    group_repo: web::Data<TransactionalGroupRepository>,
    chat_repo: web::Data<ChatRepository>,
    payload: web::Json<TransactionalGroupCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();

    // 1. 생성자를 첫 참가자로 하는 전용 채팅 생성
    let chat = Chat::new(vec![ChatParticipant {
        user_id: user.user_id.clone(),
        user_first_name: user.first_name.clone(),
        user_last_name: user.last_name.clone(),
        user_email: user.email.clone(),
    }]);
    chat_repo.insert(&chat).await?;

    // 2. 채팅을 참조하는 그룹 생성
    let group = TransactionalGroup::new(
        user.user_id,
        request.title,
        request.description,
        request.color,
        chat.chat_id.clone(),
    );
    group_repo.insert(&group).await?;

    // 3. 채팅 문서에 그룹 ID 역방향 연결
    chat_repo
        .link_group(&chat.chat_id, &group.transactional_group_id)
        .await?;

    log::info!(
        "거래 그룹 생성: {} (chat={})",
        group.transactional_group_id,
        chat.chat_id
    );

    Ok(HttpResponse::Created().json(group))
}

/// 내가 소유한 그룹과 공유받은 그룹 목록
#[get("/my-transactional-groups")]
pub async fn my_groups(
    user: AuthenticatedUser,
    group_repo: web::Data<TransactionalGroupRepository>,
) -> Result<HttpResponse, AppError> {
    let owned = group_repo.find_owned(&user.user_id).await?;
    let shared_access = group_repo.find_shared(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(MyGroupsResponse {
        owned,
        shared_access,
    }))
}
