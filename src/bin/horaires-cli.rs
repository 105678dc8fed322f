#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use horaires::{
    model::{Absence, Coverage, Employee, Shift, ShiftId, SpecialDayType},
    notification::{prepare_notices, TextNotice},
    scheduler::{MoveOptions, Planner},
    storage::{JsonStorage, Storage},
    SlotStatus, TimeBlock,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification d'équipe (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'agenda
    #[arg(long, global = true, default_value = "agenda.json")]
    agenda: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un employé
    AddEmployee {
        #[arg(long)]
        handle: String,
        #[arg(long)]
        name: String,
    },

    /// Créer un shift (ouvert si --employee est omis)
    CreateShift {
        /// handle de l'employé assigné
        #[arg(long)]
        employee: Option<String>,
        /// RFC3339 UTC
        #[arg(long)]
        start: String,
        /// RFC3339 UTC
        #[arg(long)]
        end: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },

    /// Déclarer une absence (jours inclusifs)
    AddAbsence {
        #[arg(long)]
        employee: String,
        /// id du type d'absence (congé, maladie, ...)
        #[arg(long)]
        kind: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        start: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        end: String,
    },

    /// Enregistrer un type de jour spécial
    AddSpecialDayType {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        /// Bloque le planning (combiné à une couverture all-day)
        #[arg(long)]
        holiday: bool,
    },

    /// Marquer un jour spécial (au plus un par date)
    AddSpecialDay {
        /// AAAA-MM-JJ
        #[arg(long)]
        date: String,
        /// id du type de jour spécial
        #[arg(long)]
        kind: String,
        /// all-day | morning | afternoon | evening
        #[arg(long, default_value = "all-day")]
        coverage: String,
    },

    /// Régler ou faire tourner la disponibilité d'un bloc
    SetAvailability {
        #[arg(long)]
        employee: String,
        /// 0 = lundi ... 6 = dimanche
        #[arg(long)]
        day: usize,
        /// morning | afternoon | evening
        #[arg(long)]
        block: TimeBlock,
        /// available | preferred | unavailable ; omis = cycle d'un cran
        #[arg(long)]
        status: Option<SlotStatus>,
    },

    /// Déplacer un shift assigné sur un autre jour (drag & drop)
    MoveShift {
        #[arg(long)]
        shift_id: String,
        /// AAAA-MM-JJ
        #[arg(long)]
        day: String,
        /// Re-vérifie aussi la disponibilité déclarée
        #[arg(long)]
        check_availability: bool,
    },

    /// Lister shifts et absences
    List,

    /// Afficher les notifications en attente puis vider l'ensemble
    Notify,
}

fn parse_day(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

fn parse_coverage(raw: &str) -> Result<Coverage> {
    match raw.to_ascii_lowercase().as_str() {
        "all-day" => Ok(Coverage::AllDay),
        "morning" => Ok(Coverage::Morning),
        "afternoon" => Ok(Coverage::Afternoon),
        "evening" => Ok(Coverage::Evening),
        other => bail!("unknown coverage: {other}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.agenda)?;
    let mut planner = match storage.load() {
        Ok(agenda) => Planner::with_agenda(agenda),
        Err(_) => Planner::new(),
    };

    match cli.cmd {
        Commands::AddEmployee { handle, name } => {
            planner.add_employees(vec![Employee::new(handle, name)]);
            storage.save(planner.agenda())?;
        }
        Commands::CreateShift {
            employee,
            start,
            end,
            location,
            department,
        } => {
            let assigned = match employee {
                Some(handle) => Some(
                    planner
                        .agenda()
                        .find_employee_by_handle(&handle)
                        .with_context(|| format!("unknown employee handle: {handle}"))?
                        .id
                        .clone(),
                ),
                None => None,
            };
            let start = start.parse().context("start RFC3339")?;
            let end = end.parse().context("end RFC3339")?;
            let mut shift = Shift::new(assigned, start, end).map_err(anyhow::Error::msg)?;
            shift.location = location;
            shift.department = department;
            let id = shift.id.clone();
            let status = planner.save_shift(shift)?;
            storage.save(planner.agenda())?;
            println!("shift {} créé (statut: {status})", id.as_str());
        }
        Commands::AddAbsence {
            employee,
            kind,
            start,
            end,
        } => {
            let employee = planner
                .agenda()
                .find_employee_by_handle(&employee)
                .with_context(|| format!("unknown employee handle: {employee}"))?
                .id
                .clone();
            let absence = Absence::new(employee, kind, parse_day(&start)?, parse_day(&end)?)
                .map_err(anyhow::Error::msg)?;
            planner.save_absence(absence)?;
            storage.save(planner.agenda())?;
        }
        Commands::AddSpecialDayType { id, name, holiday } => {
            planner.agenda_mut().special_day_types.push(SpecialDayType {
                id,
                name,
                is_holiday: holiday,
            });
            storage.save(planner.agenda())?;
        }
        Commands::AddSpecialDay {
            date,
            kind,
            coverage,
        } => {
            let date = parse_day(&date)?;
            let coverage = parse_coverage(&coverage)?;
            planner.upsert_special_day(date, &kind, coverage);
            storage.save(planner.agenda())?;
        }
        Commands::SetAvailability {
            employee,
            day,
            block,
            status,
        } => {
            if day > 6 {
                bail!("day index must be 0..=6 (0 = lundi)");
            }
            let employee = planner
                .agenda()
                .find_employee_by_handle(&employee)
                .with_context(|| format!("unknown employee handle: {employee}"))?
                .id
                .clone();
            let applied = match status {
                Some(status) => {
                    planner.set_availability(&employee, day, block, status);
                    status
                }
                None => planner.cycle_availability(&employee, day, block),
            };
            storage.save(planner.agenda())?;
            println!("bloc réglé sur {applied}");
        }
        Commands::MoveShift {
            shift_id,
            day,
            check_availability,
        } => {
            let id = ShiftId::new(shift_id);
            let day = parse_day(&day)?;
            let opts = MoveOptions { check_availability };
            // rejet non fatal : le shift reste en place, on avertit seulement
            match planner.move_shift(&id, day, opts) {
                Ok(()) => {
                    storage.save(planner.agenda())?;
                    println!("shift déplacé au {day}");
                }
                Err(err) => println!("déplacement refusé : {err}"),
            }
        }
        Commands::List => {
            let agenda = planner.agenda();
            for s in &agenda.shifts {
                let handle = s
                    .employee
                    .as_ref()
                    .and_then(|id| agenda.find_employee_by_id(id))
                    .map(|e| e.handle.as_str())
                    .unwrap_or("(ouvert)");
                println!(
                    "shift {} {} -> {} [{handle}]",
                    s.id.as_str(),
                    s.start.to_rfc3339(),
                    s.end.to_rfc3339()
                );
            }
            for a in &agenda.absences {
                let handle = agenda
                    .find_employee_by_id(&a.employee)
                    .map(|e| e.handle.as_str())
                    .unwrap_or("?");
                println!(
                    "absence {} {} -> {} [{handle}] ({})",
                    a.id.as_str(),
                    a.start_day(),
                    a.end_day(),
                    a.kind
                );
            }
        }
        Commands::Notify => {
            let notices = prepare_notices(&planner, &TextNotice)?;
            println!("{} notification(s) en attente", notices.len());
            for n in &notices {
                println!("--- {} ({})\n{}", n.shift_id, n.employee_handle, n.content);
            }
            planner.clear_pending();
            storage.save(planner.agenda())?;
        }
    }

    Ok(())
}
