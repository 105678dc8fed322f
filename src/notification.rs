use crate::model::{Employee, Shift};
use crate::scheduler::Planner;
use anyhow::{Context, Result};

/// Message prêt à partir pour un shift modifié.
#[derive(Debug, Clone)]
pub struct Notice {
    pub shift_id: String,
    pub employee_handle: String,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, SMS, etc.).
pub trait NoticeRenderer {
    fn render(&self, employee: &Employee, shift: &Shift) -> String;
}

/// Gabarit texte simple destiné à un futur mail/SMS.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNotice;

impl NoticeRenderer for TextNotice {
    fn render(&self, employee: &Employee, shift: &Shift) -> String {
        format!(
            "Bonjour {name},\n\nTon créneau a été mis à jour : du {start} au {end}.\nMerci de vérifier ton planning.\n",
            name = employee.display_name,
            start = shift.start.to_rfc3339(),
            end = shift.end.to_rfc3339()
        )
    }
}

/// Prépare un message par shift en attente de notification.
///
/// Les shifts ouverts (sans employé) sont ignorés : personne à prévenir.
/// L'appelant effectue l'envoi, puis vide l'ensemble via
/// [`Planner::clear_pending`].
pub fn prepare_notices(planner: &Planner, renderer: &dyn NoticeRenderer) -> Result<Vec<Notice>> {
    let agenda = planner.agenda();
    let mut out = Vec::new();

    for shift_id in planner.pending_notifications() {
        let Some(shift) = agenda.find_shift(shift_id) else {
            // supprimé entre-temps : rien à notifier
            continue;
        };
        let Some(employee_id) = &shift.employee else {
            continue;
        };
        let employee = agenda
            .find_employee_by_id(employee_id)
            .with_context(|| format!("unknown employee id: {}", employee_id.as_str()))?;

        out.push(Notice {
            shift_id: shift.id.as_str().to_string(),
            employee_handle: employee.handle.clone(),
            content: renderer.render(employee, shift),
        });
    }

    out.sort_by(|a, b| a.shift_id.cmp(&b.shift_id));
    Ok(out)
}
