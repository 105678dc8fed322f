#![forbid(unsafe_code)]
use chrono::{TimeZone, Utc};
use horaires::{
    model::{Employee, Shift},
    notification::{prepare_notices, TextNotice},
    scheduler::Planner,
    storage::{JsonStorage, Storage},
};

#[test]
fn create_and_save_basic() {
    let mut p = Planner::new();
    let alice = Employee::new("alice", "Alice");
    let bob = Employee::new("bob", "Bob");
    p.add_employees(vec![alice.clone(), bob.clone()]);

    let t0 = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 10, 6, 16, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2025, 10, 7, 8, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2025, 10, 7, 16, 0, 0).unwrap();

    let s1 = Shift::new(Some(alice.id.clone()), t0, t1).unwrap();
    let s2 = Shift::new(Some(bob.id.clone()), t2, t3).unwrap();
    let id1 = s1.id.clone();
    let id2 = s2.id.clone();

    p.save_shift(s1).unwrap();
    p.save_shift(s2).unwrap();

    assert_eq!(p.agenda().shifts.len(), 2);
    assert!(p.pending_notifications().contains(&id1));
    assert!(p.pending_notifications().contains(&id2));
}

#[test]
fn upsert_is_idempotent() {
    let mut p = Planner::new();
    let alice = Employee::new("alice", "Alice");
    p.add_employees(vec![alice.clone()]);

    let t0 = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 10, 6, 16, 0, 0).unwrap();
    let shift = Shift::new(Some(alice.id.clone()), t0, t1).unwrap();

    p.upsert_shift(shift.clone());
    p.upsert_shift(shift.clone());

    let matching = p
        .agenda()
        .shifts
        .iter()
        .filter(|s| s.id == shift.id)
        .count();
    assert_eq!(matching, 1);
    assert_eq!(p.pending_notifications().len(), 1);
}

#[test]
fn delete_drops_pending_mark() {
    let mut p = Planner::new();
    let alice = Employee::new("alice", "Alice");
    p.add_employees(vec![alice.clone()]);

    let t0 = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 10, 6, 16, 0, 0).unwrap();
    let shift = Shift::new(Some(alice.id.clone()), t0, t1).unwrap();
    let id = shift.id.clone();

    p.upsert_shift(shift);
    assert!(p.pending_notifications().contains(&id));

    p.delete_shift(&id);
    assert!(p.agenda().shifts.is_empty());
    assert!(p.pending_notifications().is_empty());
}

#[test]
fn notify_flow_renders_then_clears() {
    let mut p = Planner::new();
    let alice = Employee::new("alice", "Alice");
    p.add_employees(vec![alice.clone()]);

    let t0 = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 10, 6, 16, 0, 0).unwrap();
    p.save_shift(Shift::new(Some(alice.id.clone()), t0, t1).unwrap())
        .unwrap();

    // un shift ouvert en attente ne produit pas de message
    let t2 = Utc.with_ymd_and_hms(2025, 10, 7, 8, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2025, 10, 7, 16, 0, 0).unwrap();
    p.save_shift(Shift::new(None, t2, t3).unwrap()).unwrap();

    let notices = prepare_notices(&p, &TextNotice).unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].employee_handle, "alice");
    assert!(notices[0].content.contains("Alice"));

    p.clear_pending();
    assert!(p.pending_notifications().is_empty());
    assert!(prepare_notices(&p, &TextNotice).unwrap().is_empty());
}

#[test]
fn agenda_json_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.json");

    let mut p = Planner::new();
    let alice = Employee::new("alice", "Alice");
    p.add_employees(vec![alice.clone()]);
    let t0 = Utc.with_ymd_and_hms(2025, 10, 6, 8, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2025, 10, 6, 16, 0, 0).unwrap();
    p.save_shift(Shift::new(Some(alice.id.clone()), t0, t1).unwrap())
        .unwrap();

    let storage = JsonStorage::open(&path).unwrap();
    storage.save(p.agenda()).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.employees.len(), 1);
    assert_eq!(loaded.shifts.len(), 1);
    // l'ensemble en attente fait partie de l'état persisté
    assert_eq!(loaded.pending_notifications.len(), 1);
}
