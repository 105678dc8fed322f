#![forbid(unsafe_code)]
//! Horaires — bibliothèque de planification d'équipe locale (sans BD).
//!
//! - Shifts, absences, jours fériés, disponibilités hebdomadaires.
//! - Contrôle de conflits avec raison précise, jamais fatal.
//! - Suivi des shifts modifiés en attente de notification.
//! - Tout en UTC ; parsing RFC3339 ; affichage local en dehors de la lib.

pub mod availability;
pub mod interval;
pub mod model;
pub mod notification;
pub mod scheduler;
pub mod storage;

pub use availability::{DayAvailability, SlotStatus, TimeBlock, WeeklyAvailability};
pub use model::{
    Absence, AbsenceId, AbsenceType, Agenda, Coverage, Department, Employee, EmployeeId, Location,
    Shift, ShiftId, SpecialDay, SpecialDayId, SpecialDayType,
};
pub use notification::{prepare_notices, Notice, NoticeRenderer, TextNotice};
pub use scheduler::{ConflictError, MoveOptions, Planner, SchedError};
pub use storage::{JsonStorage, Storage};
