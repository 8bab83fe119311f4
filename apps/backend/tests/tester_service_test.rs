mod common;

use backend::db::txn::with_txn;
use backend::error::AppError;
use backend::repos;
use backend::services::associations;
use backend::services::testing::TestingService;
use backend::ErrorCode;

/// Test: save then fetch returns an equal record
#[tokio::test]
async fn tester_round_trip() -> Result<(), AppError> {
    let state = common::test_state().await;

    let saved = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_tester(txn, common::tester("Ada")).await?)
        })
    })
    .await?;

    let id = saved.id.expect("id assigned on create");

    let fetched = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.tester_by_id(txn, id).await?)
        })
    })
    .await?;

    assert_eq!(fetched, saved);
    Ok(())
}

/// Test: fetching an unknown tester is NotFound
#[tokio::test]
async fn unknown_tester_fails_not_found() {
    let state = common::test_state().await;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.tester_by_id(txn, 999).await?)
        })
    })
    .await
    .expect_err("unknown tester must fail");

    assert_eq!(err.code(), ErrorCode::TesterNotFound);
}

/// Test: assignment shows up on both sides of the relation
#[tokio::test]
async fn assignment_is_visible_from_both_sides() -> Result<(), AppError> {
    let state = common::test_state().await;

    let (game_id, tester_id) = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let publisher = service.save_publisher(txn, common::publisher("Nova")).await?;
            let game = service.save_game(txn, publisher.id.unwrap(), common::game("Orbit")).await?;
            let tester = service.save_tester(txn, common::tester("Ada")).await?;
            let game_id = game.id.unwrap();
            let tester_id = tester.id.unwrap();

            let updated = service.assign_tester_to_game(txn, game_id, tester_id).await?;
            assert_eq!(updated.tester_ids, vec![tester_id]);

            Ok((game_id, tester_id))
        })
    })
    .await?;

    with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();

            // Owning side: the game lists the tester.
            let testers = service.testers_for_game(txn, game_id).await?;
            assert_eq!(testers.len(), 1);
            assert_eq!(testers[0].name, "Ada");

            // Derived inverse side: the tester lists the game.
            let tester = repos::testers::find_by_id(txn, tester_id).await?.unwrap();
            let games = associations::games_of(txn, &tester).await?;
            assert_eq!(games.len(), 1);
            assert_eq!(games[0].id, game_id);

            Ok::<_, AppError>(())
        })
    })
    .await?;

    Ok(())
}

/// Test: assigning the same tester twice leaves exactly one association
#[tokio::test]
async fn assignment_is_idempotent() -> Result<(), AppError> {
    let state = common::test_state().await;

    let record = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let publisher = service.save_publisher(txn, common::publisher("Nova")).await?;
            let game = service.save_game(txn, publisher.id.unwrap(), common::game("Orbit")).await?;
            let tester = service.save_tester(txn, common::tester("Ada")).await?;
            let game_id = game.id.unwrap();
            let tester_id = tester.id.unwrap();

            service.assign_tester_to_game(txn, game_id, tester_id).await?;
            Ok(service.assign_tester_to_game(txn, game_id, tester_id).await?)
        })
    })
    .await?;

    assert_eq!(record.tester_ids.len(), 1);
    Ok(())
}

/// Test: assignment against unknown ids fails with the matching NotFound
#[tokio::test]
async fn assignment_not_found_cases() -> Result<(), AppError> {
    let state = common::test_state().await;

    let (game_id, tester_id) = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let publisher = service.save_publisher(txn, common::publisher("Nova")).await?;
            let game = service.save_game(txn, publisher.id.unwrap(), common::game("Orbit")).await?;
            let tester = service.save_tester(txn, common::tester("Ada")).await?;
            Ok((game.id.unwrap(), tester.id.unwrap()))
        })
    })
    .await?;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.assign_tester_to_game(txn, 999, tester_id).await?)
        })
    })
    .await
    .expect_err("unknown game must fail");
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.assign_tester_to_game(txn, game_id, 999).await?)
        })
    })
    .await
    .expect_err("unknown tester must fail");
    assert_eq!(err.code(), ErrorCode::TesterNotFound);

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.testers_for_game(txn, 999).await?)
        })
    })
    .await
    .expect_err("listing testers of an unknown game must fail");
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    Ok(())
}
