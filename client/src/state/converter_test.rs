use super::*;

fn filled(zone_id: &str, date: &str, hour: &str) -> ConverterState {
    ConverterState {
        selection: UserSelection {
            zone_id: zone_id.to_owned(),
            date: date.to_owned(),
            hour: hour.to_owned(),
        },
        result: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn converter_state_default_has_no_result() {
    let state = ConverterState::default();
    assert_eq!(state.phase(), ConverterPhase::NoResult);
    assert_eq!(state.selection.zone_id, "Asia/Shanghai");
}

// =============================================================
// trigger: NoResult
// =============================================================

#[test]
fn trigger_with_missing_date_stays_without_result() {
    let mut state = filled("Asia/Shanghai", "", "09");
    assert!(!state.trigger());
    assert_eq!(state.phase(), ConverterPhase::NoResult);
}

#[test]
fn trigger_with_missing_hour_stays_without_result() {
    let mut state = filled("Asia/Shanghai", "2025-04-05", "");
    assert!(!state.trigger());
    assert_eq!(state.result, None);
}

#[test]
fn trigger_with_complete_input_produces_result() {
    let mut state = filled("America/Los_Angeles", "2025-04-04", "18");
    assert!(state.trigger());
    assert_eq!(state.phase(), ConverterPhase::HasResult);
    assert_eq!(state.result.as_deref(), Some("Friday, Apr 4, 2025 6:00 PM"));
}

// =============================================================
// trigger: HasResult
// =============================================================

#[test]
fn incomplete_trigger_keeps_previous_result() {
    let mut state = filled("Asia/Shanghai", "2025-04-05", "09");
    assert!(state.trigger());
    let before = state.result.clone();

    state.selection.hour.clear();
    assert!(!state.trigger());
    assert_eq!(state.result, before);

    state.selection.hour = "09".to_owned();
    state.selection.date.clear();
    assert!(!state.trigger());
    assert_eq!(state.result, before);
}

#[test]
fn malformed_trigger_keeps_previous_result() {
    let mut state = filled("Asia/Shanghai", "2025-04-05", "09");
    assert!(state.trigger());
    state.selection.date = "not-a-date".to_owned();
    assert!(!state.trigger());
    assert_eq!(state.result.as_deref(), Some("Friday, Apr 4, 2025 6:00 PM"));
}

#[test]
fn complete_trigger_replaces_previous_result() {
    let mut state = filled("Asia/Shanghai", "2025-04-05", "09");
    assert!(state.trigger());

    state.selection.zone_id = "America/Chicago".to_owned();
    state.selection.hour = "10".to_owned();
    assert!(state.trigger());
    assert_eq!(state.phase(), ConverterPhase::HasResult);
    assert_eq!(state.result.as_deref(), Some("Saturday, Apr 5, 2025 8:00 AM"));
}
