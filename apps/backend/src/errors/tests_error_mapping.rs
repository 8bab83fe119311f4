// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_ownership_mismatch_to_400() {
    let de = DomainError::validation(
        ValidationKind::GamePublisherMismatch,
        "Game with ID=3 is not published by ID=9.",
    );
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::GamePublisherMismatch);
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn ownership_mismatch_is_not_a_not_found() {
    let de = DomainError::validation(ValidationKind::GamePublisherMismatch, "mismatch");
    let app: AppError = de.into();
    assert!(matches!(app, AppError::Validation { .. }));
    assert_ne!(app.status().as_u16(), 404);
}

#[test]
fn maps_not_found_per_entity() {
    let pairs = [
        (DomainError::publisher_not_found(1), ErrorCode::PublisherNotFound),
        (DomainError::game_not_found(2), ErrorCode::GameNotFound),
        (DomainError::tester_not_found(3), ErrorCode::TesterNotFound),
        (
            DomainError::not_found(NotFoundKind::Other("thing".into()), "no thing"),
            ErrorCode::NotFound,
        ),
    ];
    for (de, expected) in pairs {
        let app: AppError = de.into();
        assert_eq!(app.code(), expected);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn maps_conflicts() {
    let unique = DomainError::conflict(ConflictKind::UniqueViolation, "duplicate");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_VIOLATION");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("some conflict".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let other = DomainError::infra(InfraErrorKind::Other("unknown".to_string()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
    assert_eq!(app.status().as_u16(), 500);
}
