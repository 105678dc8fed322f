mod conflicts;
mod mutate;
mod types;
mod util;

pub use types::{ConflictError, MoveOptions, SchedError};

use crate::availability::{SlotStatus, TimeBlock, WeeklyAvailability};
use crate::model::{
    Absence, AbsenceId, Agenda, Coverage, Employee, EmployeeId, Shift, ShiftId, SpecialDayId,
};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Planner : encapsule l'état d'un planning (un tenant) et l'ensemble des
/// shifts en attente de notification.
///
/// Le contrôle de conflit (`check_*`) et la mutation (`upsert_*`, `delete_*`)
/// sont séparés : la mutation fait confiance à l'appelant et ne valide rien
/// elle-même. Les flux "éditeur" (`save_*`) enchaînent les deux.
#[derive(Debug, Default)]
pub struct Planner {
    agenda: Agenda,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agenda(agenda: Agenda) -> Self {
        Self { agenda }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }
    pub fn agenda_mut(&mut self) -> &mut Agenda {
        &mut self.agenda
    }

    pub fn add_employees(&mut self, employees: Vec<Employee>) {
        self.agenda.employees.extend(employees);
    }

    // --- contrôle de conflit (aucune mutation) ---

    pub fn check_shift(&self, candidate: &Shift) -> Result<SlotStatus, ConflictError> {
        conflicts::check_shift(&self.agenda, candidate)
    }

    pub fn check_absence(&self, candidate: &Absence) -> Result<(), ConflictError> {
        conflicts::check_absence(&self.agenda, candidate)
    }

    // --- flux éditeur : contrôle puis commit ---

    /// Valide puis enregistre un shift ; renvoie le statut consultatif du
    /// créneau en cas d'acceptation.
    pub fn save_shift(&mut self, shift: Shift) -> Result<SlotStatus, ConflictError> {
        let status = self.check_shift(&shift)?;
        mutate::upsert_shift(self, shift);
        Ok(status)
    }

    /// Valide puis enregistre une absence.
    pub fn save_absence(&mut self, absence: Absence) -> Result<(), ConflictError> {
        self.check_absence(&absence)?;
        mutate::upsert_absence(self, absence);
        Ok(())
    }

    // --- mutations brutes (l'appelant a déjà validé) ---

    pub fn upsert_shift(&mut self, shift: Shift) {
        mutate::upsert_shift(self, shift);
    }

    pub fn delete_shift(&mut self, id: &ShiftId) {
        mutate::delete_shifts(self, std::slice::from_ref(id));
    }

    pub fn delete_shifts(&mut self, ids: &[ShiftId]) {
        mutate::delete_shifts(self, ids);
    }

    /// Déplace un shift assigné sur un autre jour (heure et durée conservées),
    /// après validation du créneau recalculé. En cas de rejet, le shift et
    /// l'ensemble en attente restent intacts.
    pub fn move_shift(
        &mut self,
        id: &ShiftId,
        day: NaiveDate,
        opts: MoveOptions,
    ) -> Result<(), SchedError> {
        mutate::move_shift(self, id, day, opts)
    }

    pub fn upsert_absence(&mut self, absence: Absence) {
        mutate::upsert_absence(self, absence);
    }

    pub fn delete_absence(&mut self, id: &AbsenceId) {
        mutate::delete_absence(self, id);
    }

    pub fn upsert_special_day(
        &mut self,
        date: NaiveDate,
        kind: &str,
        coverage: Coverage,
    ) -> SpecialDayId {
        mutate::upsert_special_day(self, date, kind, coverage)
    }

    pub fn delete_special_day(&mut self, date: NaiveDate) {
        mutate::delete_special_day(self, date);
    }

    // --- disponibilités déclarées ---

    /// Fixe le statut d'un bloc de la grille hebdomadaire (création de la
    /// grille au premier réglage).
    pub fn set_availability(
        &mut self,
        employee: &EmployeeId,
        monday_index: usize,
        block: TimeBlock,
        status: SlotStatus,
    ) {
        if let Some(record) = self.agenda.availability_of_mut(employee) {
            record.day_mut(monday_index).set(block, status);
            return;
        }
        let mut record = WeeklyAvailability::all_available(employee.clone());
        record.day_mut(monday_index).set(block, status);
        self.agenda.availabilities.push(record);
    }

    /// Fait tourner un bloc d'un cran dans le cycle d'édition manuelle et
    /// renvoie le nouveau statut.
    pub fn cycle_availability(
        &mut self,
        employee: &EmployeeId,
        monday_index: usize,
        block: TimeBlock,
    ) -> SlotStatus {
        let current = self
            .agenda
            .availability_of(employee)
            .map(|r| r.day(monday_index).status(block))
            .unwrap_or_default();
        let next = current.next();
        self.set_availability(employee, monday_index, block, next);
        next
    }

    // --- notifications en attente ---

    /// Shifts modifiés depuis le dernier envoi de notifications.
    pub fn pending_notifications(&self) -> &HashSet<ShiftId> {
        &self.agenda.pending_notifications
    }

    /// Vide l'ensemble en attente, une fois l'envoi externe effectué.
    pub fn clear_pending(&mut self) {
        self.agenda.pending_notifications.clear();
    }
}
