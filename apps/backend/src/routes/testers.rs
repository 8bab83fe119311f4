//! Tester HTTP routes.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::testing::TestingService;
use crate::state::app_state::AppState;
use crate::transfer::TesterRecord;

/// POST /tester
async fn create_tester(
    app_state: web::Data<AppState>,
    body: web::Json<TesterRecord>,
) -> Result<HttpResponse, AppError> {
    let record = body.into_inner();
    info!(name = %record.name, "creating tester");

    let saved = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_tester(txn, record).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(saved))
}

/// GET /tester/{tester_id}
async fn get_tester(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let tester_id = path.into_inner();
    info!(tester_id, "retrieving tester");

    let record = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.tester_by_id(txn, tester_id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(record))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/tester").route(web::post().to(create_tester)));
    cfg.service(web::resource("/tester/{tester_id}").route(web::get().to(get_tester)));
}
