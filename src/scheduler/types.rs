use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Options du déplacement calendrier (drag & drop).
///
/// Les créations et éditions vérifient toujours la disponibilité déclarée ;
/// pour un déplacement, la re-vérification est laissée au choix de
/// l'appelant.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveOptions {
    pub check_availability: bool,
}

/// Rejet métier d'un candidat (shift ou absence). Jamais fatal : chaque
/// variante porte le contexte à afficher tel quel à l'utilisateur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("invalid time range: end must be after start")]
    InvalidRange,
    #[error("blocked by holiday \"{name}\" on {date}")]
    HolidayBlocked { name: String, date: NaiveDate },
    #[error("employee is absent from {} to {}", .start.format("%Y-%m-%d"), .end.format("%Y-%m-%d"))]
    AbsenceOverlap {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("employee already works from {} to {}", .start.format("%Y-%m-%d %H:%M"), .end.format("%Y-%m-%d %H:%M"))]
    ShiftOverlap {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[error("employee is marked unavailable on the requested time")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown shift: {0}")]
    UnknownShift(String),
    #[error("move invalid: {0}")]
    MoveInvalid(&'static str),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
