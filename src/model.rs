use crate::availability::WeeklyAvailability;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Employé planifiable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub handle: String,
    pub display_name: String,
}

impl Employee {
    pub fn new<H: Into<String>, D: Into<String>>(handle: H, display_name: D) -> Self {
        Self {
            id: EmployeeId::random(),
            handle: handle.into(),
            display_name: display_name.into(),
        }
    }
}

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Créneau de travail (UTC). `employee = None` : shift ouvert, non assigné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub employee: Option<EmployeeId>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl Shift {
    /// Crée un shift en validant que `end > start`.
    pub fn new(
        employee: Option<EmployeeId>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            id: ShiftId::random(),
            employee,
            start,
            end,
            location: None,
            department: None,
        })
    }

    /// Shift ouvert (sans employé) : visible au planning, mais non déplaçable.
    pub fn is_open(&self) -> bool {
        self.employee.is_none()
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Identifiant fort pour Absence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsenceId(String);

impl AbsenceId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Absence sur un intervalle de jours inclusif.
///
/// Les bornes sont normalisées à la construction : `start` à 00:00:00.000,
/// `end` à 23:59:59.999, pour que le chevauchement avec les shifts se calcule
/// en temps continu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub id: AbsenceId,
    pub employee: EmployeeId,
    pub kind: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Absence {
    /// Crée une absence en validant que `end_day >= start_day`.
    pub fn new(
        employee: EmployeeId,
        kind: impl Into<String>,
        start_day: NaiveDate,
        end_day: NaiveDate,
    ) -> Result<Self, String> {
        if end_day < start_day {
            return Err("absence end day must not precede start day".to_string());
        }
        let start = start_day
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| "invalid start of day".to_string())?
            .and_utc();
        let end = end_day
            .and_hms_milli_opt(23, 59, 59, 999)
            .ok_or_else(|| "invalid end of day".to_string())?
            .and_utc();
        Ok(Self {
            id: AbsenceId::random(),
            employee,
            kind: kind.into(),
            start,
            end,
        })
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start.date_naive()
    }
    pub fn end_day(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

/// Type d'absence (congé, maladie, ...) — annuaire fourni par l'appelant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceType {
    pub id: String,
    pub name: String,
}

/// Plage du jour couverte par un jour spécial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coverage {
    AllDay,
    Morning,
    Afternoon,
    Evening,
}

/// Identifiant fort pour SpecialDay
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecialDayId(String);

impl SpecialDayId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Jour spécial du calendrier (férié ou évènement). Au plus un par date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDay {
    pub id: SpecialDayId,
    pub date: NaiveDate,
    pub kind: String,
    pub coverage: Coverage,
}

/// Type de jour spécial. Seule la combinaison `is_holiday` + couverture
/// `AllDay` bloque le planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDayType {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_holiday: bool,
}

/// Lieu de travail — annuaire en lecture seule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
}

/// Service / département — annuaire en lecture seule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// État complet d'un planning (un tenant) : collections mutables + annuaires.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Agenda {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
    pub absences: Vec<Absence>,
    pub special_days: Vec<SpecialDay>,
    #[serde(default)]
    pub availabilities: Vec<WeeklyAvailability>,
    #[serde(default)]
    pub absence_types: Vec<AbsenceType>,
    #[serde(default)]
    pub special_day_types: Vec<SpecialDayType>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub departments: Vec<Department>,
    /// Shifts modifiés depuis le dernier envoi de notifications. Géré par le
    /// `Planner`, distinct de la collection de shifts elle-même.
    #[serde(default)]
    pub pending_notifications: HashSet<ShiftId>,
}

impl Agenda {
    pub fn find_employee_by_handle<'a>(&'a self, handle: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.handle == handle)
    }
    pub fn find_employee_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
    pub fn find_shift<'a>(&'a self, id: &ShiftId) -> Option<&'a Shift> {
        self.shifts.iter().find(|s| &s.id == id)
    }
    pub fn find_shift_mut(&mut self, id: &ShiftId) -> Option<&mut Shift> {
        self.shifts.iter_mut().find(|s| &s.id == id)
    }
    pub fn find_special_day<'a>(&'a self, date: NaiveDate) -> Option<&'a SpecialDay> {
        self.special_days.iter().find(|d| d.date == date)
    }
    pub fn find_special_day_type<'a>(&'a self, id: &str) -> Option<&'a SpecialDayType> {
        self.special_day_types.iter().find(|t| t.id == id)
    }
    pub fn find_absence_type<'a>(&'a self, id: &str) -> Option<&'a AbsenceType> {
        self.absence_types.iter().find(|t| t.id == id)
    }
    pub fn availability_of<'a>(&'a self, employee: &EmployeeId) -> Option<&'a WeeklyAvailability> {
        self.availabilities.iter().find(|a| &a.employee == employee)
    }
    pub fn availability_of_mut(&mut self, employee: &EmployeeId) -> Option<&mut WeeklyAvailability> {
        self.availabilities
            .iter_mut()
            .find(|a| &a.employee == employee)
    }
    pub fn absences_of<'a>(
        &'a self,
        employee: &'a EmployeeId,
    ) -> impl Iterator<Item = &'a Absence> {
        self.absences.iter().filter(move |a| &a.employee == employee)
    }
    pub fn shifts_of<'a>(&'a self, employee: &'a EmployeeId) -> impl Iterator<Item = &'a Shift> {
        self.shifts
            .iter()
            .filter(move |s| s.employee.as_ref() == Some(employee))
    }
}
