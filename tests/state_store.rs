//! Integration tests for the device-state store: validation classes,
//! persistence, the reset law and external-write visibility.

use std::fs;

use tempfile::TempDir;

use mb::error::MbError;
use mb::state::{DeviceState, StateKey, ValueClass, VALUE_MAX};

fn temp_store() -> (TempDir, DeviceState) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    (dir, DeviceState::new(path.to_string_lossy().into_owned()))
}

/// Rewrite one field of the backing file, as an external harness would.
fn edit_backing_file(state: &DeviceState, key: &str, value: i64) {
    let path = state.state_file();
    let text = fs::read_to_string(&path).unwrap();
    let mut object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&text).unwrap();
    object.insert(key.to_string(), serde_json::Value::from(value));
    fs::write(&path, serde_json::to_string(&object).unwrap()).unwrap();
}

// ===== Validation Boundary Tests =====

#[test]
fn test_bounded_keys_accept_1023_reject_1024() {
    let (_dir, mut state) = temp_store();

    for key in StateKey::ALL {
        if key.class() != ValueClass::Bounded {
            continue;
        }
        let name = key.as_str();

        state.set(name, VALUE_MAX).unwrap();
        assert_eq!(state.get_int(name), 1023, "key {name}");

        assert!(
            matches!(
                state.set(name, VALUE_MAX + 1),
                Err(MbError::ValueOutOfRange { .. })
            ),
            "key {name} should reject 1024"
        );
        assert!(state.set(name, -1).is_err(), "key {name} should reject -1");
    }
}

#[test]
fn test_press_counters_unbounded_above_zero() {
    let (_dir, mut state) = temp_store();

    for name in ["button_a_presses", "button_b_presses"] {
        state.set(name, 0).unwrap();
        state.set(name, 1023).unwrap();
        state.set(name, 1024).unwrap();
        state.set(name, 10_240).unwrap();
        assert_eq!(state.get_int(name), 10_240);

        assert!(matches!(
            state.set(name, -1),
            Err(MbError::ValueOutOfRange { .. })
        ));
    }
}

#[test]
fn test_accelerometer_any_integer() {
    let (_dir, mut state) = temp_store();

    for name in ["accelerometer_x", "accelerometer_y", "accelerometer_z"] {
        for value in [-10_240_i64, -1024, -1, 0, 1023, 1024, 10_240] {
            state.set(name, value).unwrap();
            assert_eq!(state.get_int(name), value, "key {name} value {value}");
        }
    }
}

#[test]
fn test_state_file_takes_any_string() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let mut state = DeviceState::new(path.to_string_lossy().into_owned());

    let new_path = dir.path().join("elsewhere.json");
    state
        .set("state_file", new_path.to_string_lossy().into_owned())
        .unwrap();
    assert_eq!(state.state_file(), new_path);

    // Numeric keys refuse strings, state_file refuses integers
    assert!(matches!(
        state.set("pin0", "five"),
        Err(MbError::WrongValueType { .. })
    ));
    assert!(matches!(
        state.set("state_file", 5),
        Err(MbError::WrongValueType { .. })
    ));
}

// ===== Reset Law =====

#[test]
fn test_reset_law() {
    let (_dir, mut state) = temp_store();

    for key in StateKey::ALL {
        if key == StateKey::StateFile {
            continue;
        }
        state.set(key.as_str(), 1).unwrap();
    }
    let file_before = state.state_file();

    state.reset();

    for key in StateKey::ALL {
        match key {
            StateKey::StateFile => assert_eq!(state.state_file(), file_before),
            StateKey::Power => assert_eq!(state.get_int("power"), 1),
            _ => assert_eq!(state.get_int(key.as_str()), 0, "key {}", key.as_str()),
        }
    }
}

#[test]
fn test_reset_persists() {
    let (_dir, mut state) = temp_store();
    state.set("pin4", 44).unwrap();
    state.reset();

    let reloaded = DeviceState::new(state.state_file().to_string_lossy().into_owned());
    assert_eq!(reloaded.get_int("pin4"), 0);
    assert_eq!(reloaded.get_int("power"), 1);
}

// ===== External-Write Visibility =====

#[test]
fn test_external_write_visible_after_local_set() {
    let (_dir, mut state) = temp_store();
    state.dump();

    edit_backing_file(&state, "accelerometer_y", -512);

    // A local write to a different key adopts the external value first
    state.set("pin2", 7).unwrap();

    assert_eq!(state.get_int("accelerometer_y"), -512);
    assert_eq!(state.get_int("pin2"), 7);
}

#[test]
fn test_local_write_wins_for_its_own_key() {
    let (_dir, mut state) = temp_store();
    state.dump();

    edit_backing_file(&state, "pin2", 100);
    state.set("pin2", 7).unwrap();

    assert_eq!(state.get_int("pin2"), 7);

    // And the winning value was persisted
    let reloaded = DeviceState::new(state.state_file().to_string_lossy().into_owned());
    assert_eq!(reloaded.get_int("pin2"), 7);
}

#[test]
fn test_sleep_adopts_external_writes() {
    let (_dir, mut state) = temp_store();
    state.dump();

    edit_backing_file(&state, "button_b", 1);
    state.sleep(1);

    assert_eq!(state.get_int("button_b"), 1);
}

// ===== Persistence Resilience =====

#[test]
fn test_fresh_store_from_existing_file() {
    let (_dir, mut first) = temp_store();
    first.set("pin9", 900).unwrap();
    first.set("accelerometer_z", -42).unwrap();

    let second = DeviceState::new(first.state_file().to_string_lossy().into_owned());
    assert_eq!(second.get_int("pin9"), 900);
    assert_eq!(second.get_int("accelerometer_z"), -42);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never_created.json");
    let state = DeviceState::new(path.to_string_lossy().into_owned());

    assert_eq!(state.get_int("power"), 1);
    assert_eq!(state.get_int("pin0"), 0);
    assert!(!path.exists());
}

#[test]
fn test_empty_and_malformed_files_use_defaults() {
    for contents in ["", "not json at all", "[1,2,3]", "42"] {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, contents).unwrap();

        let state = DeviceState::new(path.to_string_lossy().into_owned());
        assert_eq!(state.get_int("power"), 1, "contents {contents:?}");
        assert_eq!(state.get_int("pin0"), 0);
    }
}

#[test]
fn test_keys_absent_from_file_read_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, r#"{"pin0": 5}"#).unwrap();

    let state = DeviceState::new(path.to_string_lossy().into_owned());
    assert_eq!(state.get_int("pin0"), 5);
    // Wholesale load: power was not in the file, so it reads 0
    assert_eq!(state.get_int("power"), 0);
    assert!(!state.is_on());
}

#[test]
fn test_dump_writes_sorted_pretty_json() {
    let (_dir, state) = temp_store();
    state.dump();

    let text = fs::read_to_string(state.state_file()).unwrap();
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&text).unwrap();

    assert_eq!(object.len(), StateKey::ALL.len());
    let names: Vec<&String> = object.keys().collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

// ===== Press Semantics =====

#[test]
fn test_press_sets_and_counts() {
    let (_dir, mut state) = temp_store();

    state.press("button_a").unwrap();
    state.press("button_a").unwrap();
    state.press("button_b").unwrap();

    assert_eq!(state.get_int("button_a"), 1);
    assert_eq!(state.get_int("button_a_presses"), 2);
    assert_eq!(state.get_int("button_b_presses"), 1);
}

#[test]
fn test_press_and_release_round_trip() {
    let (_dir, mut state) = temp_store();

    state.press_and_release("button_a", 1).unwrap();
    assert_eq!(state.get_int("button_a"), 0);
    assert_eq!(state.get_int("button_a_presses"), 1);
}

#[test]
fn test_press_unknown_input_is_noop() {
    let (_dir, mut state) = temp_store();
    state.press("button_c").unwrap();
    assert_eq!(state.get_int("button_c"), 0);
    assert_eq!(state.get_int("button_c_presses"), 0);
}

// ===== Case Insensitivity =====

#[test]
fn test_keys_case_insensitive() {
    let (_dir, mut state) = temp_store();

    state.set("ACCELEROMETER_X", 300).unwrap();
    assert_eq!(state.get_int("accelerometer_x"), 300);
    assert_eq!(state.get_int("Accelerometer_X"), 300);

    state.press("BUTTON_A").unwrap();
    assert_eq!(state.get_int("button_a_presses"), 1);
}
