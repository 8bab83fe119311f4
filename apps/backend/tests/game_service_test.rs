mod common;

use backend::db::txn::with_txn;
use backend::error::AppError;
use backend::services::testing::TestingService;
use backend::ErrorCode;

/// Test: a new game gets an id and lands in the publisher's game set
#[tokio::test]
async fn new_game_joins_publisher_game_set() -> Result<(), AppError> {
    let state = common::test_state().await;

    let (publisher_id, game) = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let publisher = service.save_publisher(txn, common::publisher("Nova")).await?;
            let publisher_id = publisher.id.unwrap();
            let game = service.save_game(txn, publisher_id, common::game("Orbit")).await?;
            Ok((publisher_id, game))
        })
    })
    .await?;

    let game_id = game.id.expect("id assigned on create");
    assert!(game_id > 0);
    assert!(game.tester_ids.is_empty());

    let publisher = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.publisher_by_id(txn, publisher_id).await?)
        })
    })
    .await?;

    assert_eq!(publisher.games, vec![game]);
    Ok(())
}

/// Test: updating scalar fields keeps id and tester associations intact
#[tokio::test]
async fn game_update_preserves_associations() -> Result<(), AppError> {
    let state = common::test_state().await;

    let (publisher_id, game_id, tester_id) = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let publisher = service.save_publisher(txn, common::publisher("Nova")).await?;
            let publisher_id = publisher.id.unwrap();
            let game = service.save_game(txn, publisher_id, common::game("Orbit")).await?;
            let tester = service.save_tester(txn, common::tester("Ada")).await?;
            let game_id = game.id.unwrap();
            let tester_id = tester.id.unwrap();
            service.assign_tester_to_game(txn, game_id, tester_id).await?;
            Ok((publisher_id, game_id, tester_id))
        })
    })
    .await?;

    let mut replacement = common::game("Orbit Deluxe");
    replacement.id = Some(game_id);
    replacement.genre = "Action".to_string();

    let updated = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_game(txn, publisher_id, replacement).await?)
        })
    })
    .await?;

    assert_eq!(updated.id, Some(game_id));
    assert_eq!(updated.name, "Orbit Deluxe");
    assert_eq!(updated.genre, "Action");
    assert_eq!(updated.tester_ids, vec![tester_id]);
    Ok(())
}

/// Test: addressing another publisher's game is an ownership violation, not a not-found
#[tokio::test]
async fn game_of_other_publisher_is_ownership_mismatch() -> Result<(), AppError> {
    let state = common::test_state().await;

    let (other_publisher_id, game_id) = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let owner = service.save_publisher(txn, common::publisher("Nova")).await?;
            let other = service.save_publisher(txn, common::publisher("Umbra")).await?;
            let game = service.save_game(txn, owner.id.unwrap(), common::game("Orbit")).await?;
            Ok((other.id.unwrap(), game.id.unwrap()))
        })
    })
    .await?;

    let mut record = common::game("Orbit");
    record.id = Some(game_id);

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_game(txn, other_publisher_id, record).await?)
        })
    })
    .await
    .expect_err("must reject the wrong publisher");

    assert_eq!(err.code(), ErrorCode::GamePublisherMismatch);
    assert_eq!(err.status().as_u16(), 400);
    Ok(())
}

/// Test: unknown publisher and unknown game each fail with their own NotFound
#[tokio::test]
async fn save_game_not_found_cases() -> Result<(), AppError> {
    let state = common::test_state().await;

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_game(txn, 999, common::game("Orbit")).await?)
        })
    })
    .await
    .expect_err("unknown publisher must fail");
    assert_eq!(err.code(), ErrorCode::PublisherNotFound);

    let publisher_id = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let publisher = service.save_publisher(txn, common::publisher("Nova")).await?;
            Ok(publisher.id.unwrap())
        })
    })
    .await?;

    let mut record = common::game("Orbit");
    record.id = Some(999);

    let err = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.save_game(txn, publisher_id, record).await?)
        })
    })
    .await
    .expect_err("unknown game must fail");
    assert_eq!(err.code(), ErrorCode::GameNotFound);

    Ok(())
}

/// Test: a failed step rolls the whole operation back
#[tokio::test]
async fn failed_operation_leaves_no_partial_writes() -> Result<(), AppError> {
    let state = common::test_state().await;

    // The publisher insert inside this transaction must be rolled back when
    // the ownership check on the foreign game fails.
    let game_id = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let owner = service.save_publisher(txn, common::publisher("Nova")).await?;
            let game = service.save_game(txn, owner.id.unwrap(), common::game("Orbit")).await?;
            Ok(game.id.unwrap())
        })
    })
    .await?;

    let mut stolen = common::game("Orbit");
    stolen.id = Some(game_id);

    let result = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            let intruder = service.save_publisher(txn, common::publisher("Umbra")).await?;
            Ok(service.save_game(txn, intruder.id.unwrap(), stolen).await?)
        })
    })
    .await;
    assert!(result.is_err());

    let listed = with_txn(&state, |txn| {
        Box::pin(async move {
            let service = TestingService::new();
            Ok(service.list_publishers(txn).await?)
        })
    })
    .await?;

    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Nova"], "the intruder publisher must be rolled back");
    Ok(())
}
