//! Prédicats temporels purs sur lesquels reposent tous les contrôles de
//! conflit. Intervalles semi-ouverts `[start, end)` : deux créneaux qui se
//! touchent exactement ne se chevauchent pas.

use chrono::{DateTime, NaiveDate, Utc};

/// Chevauchement semi-ouvert. Symétrique ; `a_end == b_start` ne chevauche pas.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Même jour calendaire (année/mois/jour), heure ignorée.
pub fn same_calendar_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Appartenance d'un jour à un intervalle de jours inclusif, bornes rabattues
/// à la date seule (l'heure des bornes est ignorée).
pub fn within_day_range(day: NaiveDate, range_start: DateTime<Utc>, range_end: DateTime<Utc>) -> bool {
    range_start.date_naive() <= day && day <= range_end.date_naive()
}
