use super::{conflicts, util, MoveOptions, Planner, SchedError};
use crate::model::{Absence, AbsenceId, Coverage, Shift, ShiftId, SpecialDay, SpecialDayId};
use chrono::NaiveDate;

pub(super) fn upsert_shift(planner: &mut Planner, shift: Shift) {
    let id = shift.id.clone();
    match util::find_shift_index(&planner.agenda.shifts, &id) {
        Some(pos) => planner.agenda.shifts[pos] = shift,
        None => planner.agenda.shifts.push(shift),
    }
    planner.agenda.pending_notifications.insert(id);
}

pub(super) fn delete_shifts(planner: &mut Planner, ids: &[ShiftId]) {
    planner.agenda.shifts.retain(|s| !ids.contains(&s.id));
    for id in ids {
        // un shift supprimé n'a plus rien à notifier
        planner.agenda.pending_notifications.remove(id);
    }
}

pub(super) fn move_shift(
    planner: &mut Planner,
    shift_id: &ShiftId,
    day: NaiveDate,
    opts: MoveOptions,
) -> Result<(), SchedError> {
    let Some(pos) = util::find_shift_index(&planner.agenda.shifts, shift_id) else {
        return Err(SchedError::UnknownShift(shift_id.as_str().to_string()));
    };

    let original = planner.agenda.shifts[pos].clone();
    if original.is_open() {
        return Err(SchedError::MoveInvalid("open shift cannot be moved"));
    }

    let (new_start, new_end) = util::transplant(&original, day);
    conflicts::check_move(&planner.agenda, &original, new_start, new_end, opts)?;

    let shift = &mut planner.agenda.shifts[pos];
    shift.start = new_start;
    shift.end = new_end;
    planner.agenda.pending_notifications.insert(original.id);
    Ok(())
}

pub(super) fn upsert_absence(planner: &mut Planner, absence: Absence) {
    match planner
        .agenda
        .absences
        .iter()
        .position(|a| a.id == absence.id)
    {
        Some(pos) => planner.agenda.absences[pos] = absence,
        None => planner.agenda.absences.push(absence),
    }
}

pub(super) fn delete_absence(planner: &mut Planner, id: &AbsenceId) {
    planner.agenda.absences.retain(|a| &a.id != id);
}

/// Au plus un jour spécial par date : recherche puis mise à jour en place,
/// sinon création.
pub(super) fn upsert_special_day(
    planner: &mut Planner,
    date: NaiveDate,
    kind: &str,
    coverage: Coverage,
) -> SpecialDayId {
    if let Some(day) = planner
        .agenda
        .special_days
        .iter_mut()
        .find(|d| d.date == date)
    {
        day.kind = kind.to_string();
        day.coverage = coverage;
        return day.id.clone();
    }
    let day = SpecialDay {
        id: SpecialDayId::random(),
        date,
        kind: kind.to_string(),
        coverage,
    };
    let id = day.id.clone();
    planner.agenda.special_days.push(day);
    id
}

pub(super) fn delete_special_day(planner: &mut Planner, date: NaiveDate) {
    planner.agenda.special_days.retain(|d| d.date != date);
}
