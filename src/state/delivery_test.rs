use super::*;

use chrono::TimeZone;

fn sample(material: &str, quantity: f64, unit: &str, unit_cost: f64) -> DeliveryRecord {
    DeliveryRecord {
        id: Uuid::new_v4(),
        material: material.to_owned(),
        quantity,
        unit: unit.to_owned(),
        unit_cost,
        notes: None,
        photo_name: None,
        recorded_at: Utc.with_ymd_and_hms(2026, 8, 22, 14, 30, 0).unwrap(),
    }
}

// =============================================================
// DeliveryRecord
// =============================================================

#[test]
fn line_total_multiplies_quantity_by_unit_cost() {
    let record = sample("Cement", 40.0, "bags", 12.5);
    assert!((record.line_total() - 500.0).abs() < f64::EPSILON);
}

#[test]
fn matches_is_case_insensitive_on_material() {
    let record = sample("Portland Cement", 40.0, "bags", 12.5);
    assert!(record.matches("portland"));
    assert!(record.matches("CEMENT"));
    assert!(!record.matches("rebar"));
}

#[test]
fn matches_looks_at_unit_and_notes_too() {
    let mut record = sample("Sand", 3.0, "m³", 55.0);
    record.notes = Some("For the east foundation".to_owned());
    assert!(record.matches("m³"));
    assert!(record.matches("east"));
    assert!(!record.matches("west"));
}

#[test]
fn blank_query_matches_everything() {
    let record = sample("Gravel", 2.0, "tons", 80.0);
    assert!(record.matches(""));
    assert!(record.matches("   "));
}

// =============================================================
// DeliveryLog
// =============================================================

#[test]
fn record_prepends_so_newest_is_first() {
    let mut log = DeliveryLog::default();
    log.record(sample("Cement", 40.0, "bags", 12.5));
    log.record(sample("Rebar", 120.0, "pieces", 8.0));

    assert_eq!(log.len(), 2);
    assert_eq!(log.entries[0].material, "Rebar");
    assert_eq!(log.entries[1].material, "Cement");
}

#[test]
fn remove_drops_only_the_matching_entry() {
    let mut log = DeliveryLog::default();
    let keep = sample("Cement", 40.0, "bags", 12.5);
    let drop = sample("Sand", 3.0, "m³", 55.0);
    let drop_id = drop.id;
    log.record(keep);
    log.record(drop);

    assert!(log.remove(drop_id));
    assert_eq!(log.len(), 1);
    assert_eq!(log.entries[0].material, "Cement");
}

#[test]
fn remove_of_unknown_id_reports_false() {
    let mut log = DeliveryLog::default();
    log.record(sample("Cement", 40.0, "bags", 12.5));
    assert!(!log.remove(Uuid::new_v4()));
    assert_eq!(log.len(), 1);
}

#[test]
fn filtered_keeps_log_order() {
    let mut log = DeliveryLog::default();
    log.record(sample("Cement bags", 40.0, "bags", 12.5));
    log.record(sample("Sand", 3.0, "m³", 55.0));
    log.record(sample("Cement blocks", 200.0, "pieces", 3.2));

    let hits = log.filtered("cement");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].material, "Cement blocks");
    assert_eq!(hits[1].material, "Cement bags");
}

#[test]
fn total_value_sums_line_totals() {
    let mut log = DeliveryLog::default();
    log.record(sample("Cement", 40.0, "bags", 12.5));
    log.record(sample("Sand", 2.0, "m³", 50.0));
    assert!((log.total_value() - 600.0).abs() < f64::EPSILON);
}

#[test]
fn log_survives_a_storage_round_trip() {
    let mut log = DeliveryLog::default();
    let mut record = sample("Rebar", 120.0, "pieces", 8.0);
    record.notes = Some("grade 60".to_owned());
    record.photo_name = Some("rebar.jpg".to_owned());
    log.record(record);

    let encoded = serde_json::to_string(&log).unwrap();
    let decoded: DeliveryLog = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, log);
}

// =============================================================
// DeliveryDraft
// =============================================================

#[test]
fn default_draft_is_blank() {
    assert!(DeliveryDraft::default().is_blank());
}

#[test]
fn whitespace_only_draft_is_still_blank() {
    let draft = DeliveryDraft {
        material: "  ".to_owned(),
        ..DeliveryDraft::default()
    };
    assert!(draft.is_blank());
}

#[test]
fn any_filled_field_makes_the_draft_non_blank() {
    let draft = DeliveryDraft {
        unit_cost: "12.50".to_owned(),
        ..DeliveryDraft::default()
    };
    assert!(!draft.is_blank());
}

#[test]
fn into_record_trims_and_parses_fields() {
    let draft = DeliveryDraft {
        material: "  Cement  ".to_owned(),
        quantity: "40".to_owned(),
        unit: " bags ".to_owned(),
        unit_cost: "12.50".to_owned(),
        notes: "   ".to_owned(),
    };
    let at = Utc.with_ymd_and_hms(2026, 8, 22, 9, 0, 0).unwrap();
    let record = draft.into_record(Some("slip.jpg".to_owned()), at);

    assert_eq!(record.material, "Cement");
    assert!((record.quantity - 40.0).abs() < f64::EPSILON);
    assert_eq!(record.unit, "bags");
    assert!((record.unit_cost - 12.5).abs() < f64::EPSILON);
    assert_eq!(record.notes, None);
    assert_eq!(record.photo_name.as_deref(), Some("slip.jpg"));
    assert_eq!(record.recorded_at, at);
}

#[test]
fn into_record_keeps_real_notes() {
    let draft = DeliveryDraft {
        material: "Sand".to_owned(),
        quantity: "3".to_owned(),
        unit: "m³".to_owned(),
        unit_cost: "55".to_owned(),
        notes: " east foundation ".to_owned(),
    };
    let at = Utc.with_ymd_and_hms(2026, 8, 22, 9, 0, 0).unwrap();
    let record = draft.into_record(None, at);
    assert_eq!(record.notes.as_deref(), Some("east foundation"));
}

#[test]
fn every_record_gets_its_own_id() {
    let at = Utc.with_ymd_and_hms(2026, 8, 22, 9, 0, 0).unwrap();
    let first = DeliveryDraft::default().into_record(None, at);
    let second = DeliveryDraft::default().into_record(None, at);
    assert_ne!(first.id, second.id);
}

// =============================================================
// Storage keys
// =============================================================

#[test]
fn storage_keys_are_stable_and_distinct() {
    assert_eq!(LOG_STORAGE_KEY, "sitestock.deliveries");
    assert_eq!(DRAFT_STORAGE_KEY, "sitestock.draft");
    assert_ne!(LOG_STORAGE_KEY, DRAFT_STORAGE_KEY);
}
