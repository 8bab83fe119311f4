//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers then map `DomainError` to `AppError` via `From`.

use sea_orm::DbErr;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

/// Translate a low-level database error into a domain error.
///
/// Unique-constraint violations become conflicts; lost connections become
/// `Infra(DbUnavailable)`; everything else is an opaque infra failure that
/// propagates to the boundary as a server error.
pub fn map_db_err(e: DbErr) -> DomainError {
    match &e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            DomainError::infra(InfraErrorKind::DbUnavailable, format!("database unavailable: {e}"))
        }
        _ => {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
                DomainError::conflict(ConflictKind::UniqueViolation, msg)
            } else {
                DomainError::infra(InfraErrorKind::Other("database error".to_string()), msg)
            }
        }
    }
}
