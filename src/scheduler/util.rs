use crate::model::{Shift, ShiftId};
use chrono::{DateTime, NaiveDate, Utc};

pub(super) fn find_shift_index(shifts: &[Shift], shift_id: &ShiftId) -> Option<usize> {
    shifts.iter().position(|s| &s.id == shift_id)
}

/// Transplante l'heure de début d'un shift sur un autre jour, durée conservée.
pub(super) fn transplant(shift: &Shift, day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(shift.start.time()).and_utc();
    let end = start + (shift.end - shift.start);
    (start, end)
}
