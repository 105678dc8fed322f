//! Disponibilités hebdomadaires déclarées et leur résolution en statut
//! consultatif pour un créneau candidat.
//!
//! La journée est partitionnée en trois blocs fixes (matin < 12 h,
//! après-midi < 18 h, soir) utilisés uniquement ici ; les contrôles de
//! conflit, eux, travaillent en temps continu.

use crate::model::EmployeeId;
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statut déclaré d'un bloc horaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    #[default]
    Available,
    Preferred,
    Unavailable,
}

impl SlotStatus {
    /// Successeur dans le cycle d'édition manuelle :
    /// available → preferred → unavailable → available.
    pub fn next(self) -> Self {
        match self {
            Self::Available => Self::Preferred,
            Self::Preferred => Self::Unavailable,
            Self::Unavailable => Self::Available,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Preferred => "preferred",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "preferred" => Ok(Self::Preferred),
            "unavailable" => Ok(Self::Unavailable),
            other => Err(format!("unknown availability status: {other}")),
        }
    }
}

/// Bloc horaire fixe de la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBlock {
    /// Classement d'une heure pleine : < 12 matin, < 18 après-midi, sinon soir.
    pub fn of_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 18 {
            Self::Afternoon
        } else {
            Self::Evening
        }
    }
}

impl FromStr for TimeBlock {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "morning" | "matin" => Ok(Self::Morning),
            "afternoon" | "apres-midi" => Ok(Self::Afternoon),
            "evening" | "soir" => Ok(Self::Evening),
            other => Err(format!("unknown time block: {other}")),
        }
    }
}

/// Blocs touchés par un créneau : bloc de début, bloc de fin, et l'après-midi
/// inclus explicitement quand le créneau va du matin au soir (un créneau qui
/// traverse la journée touche les trois blocs, même si seules les deux bornes
/// ont été classées).
pub fn spanned_blocks(start: TimeBlock, end: TimeBlock) -> Vec<TimeBlock> {
    let mut blocks = vec![start];
    if start == TimeBlock::Morning && end == TimeBlock::Evening {
        blocks.push(TimeBlock::Afternoon);
    }
    if end != start {
        blocks.push(end);
    }
    blocks
}

/// Statut des trois blocs d'une journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DayAvailability {
    pub morning: SlotStatus,
    pub afternoon: SlotStatus,
    pub evening: SlotStatus,
}

impl DayAvailability {
    pub fn status(&self, block: TimeBlock) -> SlotStatus {
        match block {
            TimeBlock::Morning => self.morning,
            TimeBlock::Afternoon => self.afternoon,
            TimeBlock::Evening => self.evening,
        }
    }

    pub fn set(&mut self, block: TimeBlock, status: SlotStatus) {
        match block {
            TimeBlock::Morning => self.morning = status,
            TimeBlock::Afternoon => self.afternoon = status,
            TimeBlock::Evening => self.evening = status,
        }
    }
}

/// Grille hebdomadaire d'un employé. Index 0 = lundi ... 6 = dimanche.
/// Un employé sans grille est réputé disponible partout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub employee: EmployeeId,
    pub days: [DayAvailability; 7],
}

impl WeeklyAvailability {
    pub fn all_available(employee: EmployeeId) -> Self {
        Self {
            employee,
            days: [DayAvailability::default(); 7],
        }
    }

    pub fn day(&self, monday_index: usize) -> &DayAvailability {
        &self.days[monday_index]
    }
    pub fn day_mut(&mut self, monday_index: usize) -> &mut DayAvailability {
        &mut self.days[monday_index]
    }
}

/// Résout le statut consultatif d'un créneau candidat pour un employé.
///
/// Le bloc le plus restrictif gagne : un seul bloc `unavailable` rend tout le
/// créneau `unavailable` ; `preferred` ne remonte que si tous les blocs
/// touchés le sont.
pub fn resolve(
    employee: &EmployeeId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    records: &[WeeklyAvailability],
) -> SlotStatus {
    let Some(record) = records.iter().find(|r| &r.employee == employee) else {
        return SlotStatus::Available;
    };

    let day = record.day(start.weekday().num_days_from_monday() as usize);
    let blocks = spanned_blocks(TimeBlock::of_hour(start.hour()), TimeBlock::of_hour(end.hour()));

    let statuses: Vec<SlotStatus> = blocks.iter().map(|b| day.status(*b)).collect();
    if statuses.contains(&SlotStatus::Unavailable) {
        SlotStatus::Unavailable
    } else if statuses.iter().all(|s| *s == SlotStatus::Preferred) {
        SlotStatus::Preferred
    } else {
        SlotStatus::Available
    }
}
