//! Publisher HTTP routes.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::testing::TestingService;
use crate::state::app_state::AppState;
use crate::transfer::PublisherRecord;

/// POST /publisher
async fn create_publisher(
    app_state: web::Data<AppState>,
    body: web::Json<PublisherRecord>,
) -> Result<HttpResponse, AppError> {
    let record = body.into_inner();
    info!(name = %record.name, "creating publisher");

    let saved = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_publisher(txn, record).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(saved))
}

/// PUT /publisher/{publisher_id}
///
/// The id in the path wins over any id in the body.
async fn update_publisher(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PublisherRecord>,
) -> Result<HttpResponse, AppError> {
    let publisher_id = path.into_inner();
    let mut record = body.into_inner();
    record.id = Some(publisher_id);
    info!(publisher_id, "updating publisher");

    let saved = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_publisher(txn, record).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(saved))
}

/// GET /publisher/{publisher_id}
async fn get_publisher(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let publisher_id = path.into_inner();
    info!(publisher_id, "retrieving publisher");

    let record = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.publisher_by_id(txn, publisher_id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// GET /publisher
async fn list_publishers(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    info!("retrieving all publishers");

    let records = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.list_publishers(txn).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

#[derive(serde::Serialize)]
struct DeleteResponse {
    message: String,
}

/// DELETE /publisher/{publisher_id}
async fn delete_publisher(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let publisher_id = path.into_inner();
    info!(publisher_id, "deleting publisher");

    with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.delete_publisher(txn, publisher_id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(DeleteResponse {
        message: format!("Publisher with ID={publisher_id} was deleted successfully."),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/publisher")
            .route(web::post().to(create_publisher))
            .route(web::get().to(list_publishers)),
    );
    cfg.service(
        web::resource("/publisher/{publisher_id}")
            .route(web::put().to(update_publisher))
            .route(web::get().to(get_publisher))
            .route(web::delete().to(delete_publisher)),
    );
}
