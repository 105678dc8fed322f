use super::types::{ConflictError, MoveOptions};
use crate::availability::{self, SlotStatus};
use crate::interval;
use crate::model::{Absence, Agenda, Coverage, Shift, SpecialDay, SpecialDayType};
use chrono::{DateTime, NaiveDate, Utc};

/// Jour spécial bloquant : férié couvrant la journée entière.
fn blocking_holiday(agenda: &Agenda, date: NaiveDate) -> Option<(&SpecialDay, &SpecialDayType)> {
    let day = agenda.find_special_day(date)?;
    if day.coverage != Coverage::AllDay {
        return None;
    }
    let kind = agenda.find_special_day_type(&day.kind)?;
    kind.is_holiday.then_some((day, kind))
}

/// Valide un shift candidat. L'ordre des contrôles est contractuel : premier
/// rejet applicable gagne.
///
/// 1. bornes (`end > start`) ;
/// 2. férié bloquant sur le jour de début ;
/// 3. si assigné : chevauchement d'absence, puis indisponibilité déclarée.
///
/// En cas d'acceptation, renvoie le statut consultatif du créneau
/// (`available` / `preferred`), à afficher côté éditeur.
pub fn check_shift(agenda: &Agenda, candidate: &Shift) -> Result<SlotStatus, ConflictError> {
    if candidate.end <= candidate.start {
        return Err(ConflictError::InvalidRange);
    }

    if let Some((day, kind)) = blocking_holiday(agenda, candidate.start.date_naive()) {
        return Err(ConflictError::HolidayBlocked {
            name: kind.name.clone(),
            date: day.date,
        });
    }

    let Some(employee) = &candidate.employee else {
        // shift ouvert : ni absence ni disponibilité à consulter
        return Ok(SlotStatus::Available);
    };

    if let Some(absence) = agenda
        .absences_of(employee)
        .find(|a| interval::overlaps(a.start, a.end, candidate.start, candidate.end))
    {
        return Err(ConflictError::AbsenceOverlap {
            start: absence.start,
            end: absence.end,
        });
    }

    let status = availability::resolve(
        employee,
        candidate.start,
        candidate.end,
        &agenda.availabilities,
    );
    if status == SlotStatus::Unavailable {
        return Err(ConflictError::Unavailable);
    }

    Ok(status)
}

/// Valide une absence candidate. Même logique de premier rejet :
///
/// 1. bornes (`end >= start`, fin de journée comprise) ;
/// 2. férié bloquant sur chaque jour de l'intervalle (premier fautif nommé) ;
/// 3. chevauchement avec un shift existant de l'employé.
pub fn check_absence(agenda: &Agenda, candidate: &Absence) -> Result<(), ConflictError> {
    if candidate.end < candidate.start {
        return Err(ConflictError::InvalidRange);
    }

    // premier jour fautif de l'intervalle
    let offender = agenda
        .special_days
        .iter()
        .filter(|d| interval::within_day_range(d.date, candidate.start, candidate.end))
        .filter_map(|d| blocking_holiday(agenda, d.date))
        .min_by_key(|(d, _)| d.date);
    if let Some((special, kind)) = offender {
        return Err(ConflictError::HolidayBlocked {
            name: kind.name.clone(),
            date: special.date,
        });
    }

    if let Some(shift) = agenda
        .shifts_of(&candidate.employee)
        .find(|s| interval::overlaps(s.start, s.end, candidate.start, candidate.end))
    {
        return Err(ConflictError::ShiftOverlap {
            start: shift.start,
            end: shift.end,
        });
    }

    Ok(())
}

/// Valide le créneau recalculé d'un déplacement calendrier. Mêmes contrôles
/// férié + absence que la création ; la disponibilité déclarée n'est
/// re-vérifiée que si `opts.check_availability` est actif.
pub fn check_move(
    agenda: &Agenda,
    shift: &Shift,
    new_start: DateTime<Utc>,
    new_end: DateTime<Utc>,
    opts: MoveOptions,
) -> Result<(), ConflictError> {
    if let Some((day, kind)) = blocking_holiday(agenda, new_start.date_naive()) {
        return Err(ConflictError::HolidayBlocked {
            name: kind.name.clone(),
            date: day.date,
        });
    }

    let Some(employee) = &shift.employee else {
        return Ok(());
    };

    if let Some(absence) = agenda
        .absences_of(employee)
        .find(|a| interval::overlaps(a.start, a.end, new_start, new_end))
    {
        return Err(ConflictError::AbsenceOverlap {
            start: absence.start,
            end: absence.end,
        });
    }

    if opts.check_availability {
        let status = availability::resolve(employee, new_start, new_end, &agenda.availabilities);
        if status == SlotStatus::Unavailable {
            return Err(ConflictError::Unavailable);
        }
    }

    Ok(())
}
