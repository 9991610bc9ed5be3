//! 대시보드 API 핸들러

use actix_web::{HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::dto::collab::DashboardCreateRequest;
use crate::domain::entities::collab::Dashboard;
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::collab::DashboardRepository;

/// 대시보드 생성
#[post("/create")]
pub async fn create_dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DashboardRepository>,
    payload: web::Json<DashboardCreateRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let request = payload.into_inner();
    let dashboard = Dashboard::new(
        user.user_id,
        request.title,
        request.description,
        request.theme_color,
    );

    repo.insert(&dashboard).await?;
    log::info!("대시보드 생성: {} ({})", dashboard.title, dashboard.dashboard_id);

    Ok(HttpResponse::Created().json(dashboard))
}

/// 내가 소유하거나 공유받은 대시보드 목록
#[get("/my-dashboards")]
pub async fn my_dashboards(
    user: AuthenticatedUser,
    repo: web::Data<DashboardRepository>,
) -> Result<HttpResponse, AppError> {
    let dashboards = repo.find_for_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(dashboards))
}
