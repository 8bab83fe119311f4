//! Game HTTP routes, including tester assignment.

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::services::testing::TestingService;
use crate::state::app_state::AppState;
use crate::transfer::GameRecord;

/// POST /{publisher_id}/game
///
/// Creates a game under the publisher, or fully overwrites an existing one
/// when the body carries an id.
async fn add_game(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<GameRecord>,
) -> Result<HttpResponse, AppError> {
    let publisher_id = path.into_inner();
    let record = body.into_inner();
    info!(publisher_id, name = %record.name, "saving game");

    let saved = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_game(txn, publisher_id, record).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Created().json(saved))
}

/// POST /game/{game_id}/tester/{tester_id}
async fn assign_tester(
    app_state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (game_id, tester_id) = path.into_inner();
    info!(game_id, tester_id, "assigning tester to game");

    let record = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.assign_tester_to_game(txn, game_id, tester_id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(record))
}

/// GET /game/{game_id}/testers
async fn list_testers(
    app_state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let game_id = path.into_inner();
    info!(game_id, "retrieving testers for game");

    let records = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.testers_for_game(txn, game_id).await?)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(records))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/game/{game_id}/tester/{tester_id}").route(web::post().to(assign_tester)),
    );
    cfg.service(web::resource("/game/{game_id}/testers").route(web::get().to(list_testers)));
    cfg.service(web::resource("/{publisher_id}/game").route(web::post().to(add_game)));
}
