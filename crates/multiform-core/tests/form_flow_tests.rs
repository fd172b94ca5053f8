//! Integration tests for the form state model driven through dotted field paths

use multiform_core::datetime::{select_date, select_time_component_str};
use multiform_core::{
    validate, Field, FieldValue, FormState, FormValues, ModeKind, ValidForm,
};
use chrono::{NaiveDate, NaiveDateTime};

fn set(state: &mut FormState, path: &str, value: FieldValue) {
    let field: Field = path.parse().expect("known field");
    state.set_field(field, value).expect("field accepts value");
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_end_to_end_two_blank_plan_names() {
    let mut state = FormState::new();
    set(&mut state, "email", FieldValue::from("a@b.com"));
    set(&mut state, "mode", FieldValue::Mode(ModeKind::Create));
    set(&mut state, "isCheck", FieldValue::Bool(true));

    state.append_day().unwrap();
    assert_eq!(
        state.watch("days.0.dayIndex".parse().unwrap()).unwrap(),
        FieldValue::Index(0)
    );
    set(&mut state, "days.0.steps.0.planName", FieldValue::from("run"));

    let mut calls = 0;
    let mut handler = |_: &ValidForm| calls += 1;
    let report = state.submit(&mut handler).unwrap_err();

    let paths: Vec<String> = report.iter().map(|e| e.path.to_string()).collect();
    assert_eq!(
        paths,
        vec!["days.0.steps.1.planName", "days.0.steps.2.planName"]
    );
    assert_eq!(calls, 0);

    // Errors route to the offending fields
    assert!(state
        .error_for(Field::PlanName { day: 0, step: 1 })
        .is_some());
    assert!(state
        .error_for(Field::PlanName { day: 0, step: 0 })
        .is_none());
}

#[test]
fn test_fixing_fields_after_submit_clears_errors_then_submits() {
    let mut state = FormState::new();
    set(&mut state, "email", FieldValue::from("a@b.com"));
    set(&mut state, "isCheck", FieldValue::Bool(true));
    state.append_day().unwrap();

    let mut submitted: Vec<ValidForm> = Vec::new();
    assert!(state
        .submit(&mut |f: &ValidForm| submitted.push(f.clone()))
        .is_err());
    assert_eq!(state.errors().len(), 3);

    set(&mut state, "days.0.steps.0.planName", FieldValue::from("a"));
    set(&mut state, "days.0.steps.1.planName", FieldValue::from("b"));
    assert_eq!(state.errors().len(), 1);
    set(&mut state, "days.0.steps.2.planName", FieldValue::from("c"));
    assert!(state.errors().is_empty());

    let form = state
        .submit(&mut |f: &ValidForm| submitted.push(f.clone()))
        .unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(form.checked.days()[0].steps[2].plan_name, "c");
}

#[test]
fn test_toggle_round_trip_leaves_no_days() {
    let mut state = FormState::new();
    set(&mut state, "isCheck", FieldValue::Bool(true));
    for _ in 0..3 {
        state.append_day().unwrap();
    }
    set(&mut state, "days.2.steps.1.desc", FieldValue::from("stretch"));

    set(&mut state, "isCheck", FieldValue::Bool(false));
    set(&mut state, "isCheck", FieldValue::Bool(true));

    assert_eq!(
        state.watch(Field::Days).unwrap(),
        FieldValue::Days(Some(Vec::new()))
    );
}

#[test]
fn test_remove_day_shrinks_list_and_drops_identity() {
    let mut state = FormState::new();
    set(&mut state, "isCheck", FieldValue::Bool(true));
    let keys: Vec<_> = (0..4).map(|_| state.append_day().unwrap()).collect();

    for (removed_at, expected_len) in [(2, 3), (0, 2)] {
        let before = state.days().len();
        let removed_key = state.days()[removed_at].key;
        state.remove_day(removed_at).unwrap();
        assert_eq!(state.days().len(), before - 1);
        assert_eq!(state.days().len(), expected_len);
        assert!(state.days().iter().all(|d| d.key != removed_key));
    }

    let remaining: Vec<_> = state.days().iter().map(|d| d.key).collect();
    assert_eq!(remaining, vec![keys[1], keys[3]]);
}

#[test]
fn test_four_shape_combinations() {
    let named_days = || {
        let mut state = FormState::new();
        set(&mut state, "isCheck", FieldValue::Bool(true));
        state.append_day().unwrap();
        for step in 0..3 {
            state
                .set_field(Field::PlanName { day: 0, step }, FieldValue::from("x"))
                .unwrap();
        }
        state.values().days
    };

    for mode in [ModeKind::Create, ModeKind::Edit] {
        for is_check in [false, true] {
            let values = FormValues {
                email: "a@b.com".to_string(),
                mode,
                phone_number: (mode == ModeKind::Edit).then_some(13800138000),
                is_check,
                days: if is_check { named_days() } else { None },
                start_date: None,
            };
            let form = validate(&values).unwrap();
            assert_eq!(form.mode.kind(), mode);
            assert_eq!(form.checked.is_checked(), is_check);
        }
    }
}

#[test]
fn test_date_time_picker_writes_back_into_form() {
    let mut state = FormState::new();
    let now = at(2030, 1, 1, 0, 0, 0);

    let first = select_time_component_str(state.start_date(), "hour", "5", now).unwrap();
    set(&mut state, "start_date", FieldValue::Timestamp(Some(first)));
    assert_eq!(state.start_date(), Some(at(2030, 1, 1, 5, 0, 0)));

    let picked = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
    let merged = select_date(state.start_date(), picked);
    set(&mut state, "start_date", FieldValue::Timestamp(Some(merged)));
    assert_eq!(state.start_date(), Some(at(2024, 3, 3, 5, 0, 0)));

    set(&mut state, "email", FieldValue::from("a@b.com"));
    let form = state.submit(&mut |_: &ValidForm| {}).unwrap();
    assert_eq!(form.start_date, Some(at(2024, 3, 3, 5, 0, 0)));
}
