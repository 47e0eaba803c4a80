//! Normalization of raw portal records into stable location entries
//!
//! The upstream schema is undocumented and its field names have shifted
//! between deployments, so slot fields are recognized by value shape, never
//! by name: a display time carries an Indonesian timezone marker, a slot id
//! looks like a UUID (36 chars with hyphens). Pure functions, no I/O.

use serde_json::Value;

use crate::core::{LocationEntry, SlotEntry};

/// Timezone markers that identify a display-time value (WIT is a substring
/// of WITA, so `any` over `contains` covers all three).
const TIMEZONE_MARKERS: [&str; 3] = ["WIB", "WITA", "WIT"];

/// Sentinel for slots whose identifier was never recognized.
const NO_ID: &str = "N/A";

/// Normalize the raw `data` records of one listing response.
///
/// A location is emitted only when at least one of its slots has a
/// recognizable display time; quota still accumulates over every raw slot
/// record, parseable or not. Slot order follows the origin's own ordering.
pub fn normalize(raw: &[Value]) -> Vec<LocationEntry> {
    let mut entries = Vec::new();

    for item in raw {
        let mut slots = Vec::new();
        let mut total_remaining_quota = 0;

        if let Some(slot_list) = item.get("SlotList").and_then(Value::as_array) {
            for record in slot_list {
                let quota = record.get("SisaQuota").and_then(Value::as_i64).unwrap_or(0);
                total_remaining_quota += quota;

                let (display_time, slot_id) = match_slot_fields(record);
                if let Some(display_time) = display_time {
                    slots.push(SlotEntry {
                        display_time,
                        remaining_quota: quota,
                        slot_id: slot_id.unwrap_or_else(|| NO_ID.to_string()),
                    });
                }
            }
        }

        if slots.is_empty() {
            continue;
        }

        entries.push(LocationEntry {
            location_name: string_field(item, "Lokasi"),
            kaskel_id: string_field(item, "KaskelId"),
            open_date: string_field(item, "OpenDateToString"),
            total_remaining_quota,
            slots,
        });
    }

    entries
}

/// Scan every string value of a raw slot record for the two field shapes.
///
/// Time match takes precedence for a given value; order of fields in the
/// record does not matter since the predicates are independent.
fn match_slot_fields(record: &Value) -> (Option<String>, Option<String>) {
    let mut display_time = None;
    let mut slot_id = None;

    if let Some(object) = record.as_object() {
        for value in object.values() {
            let Some(text) = value.as_str() else {
                continue;
            };

            let upper = text.to_uppercase();
            if TIMEZONE_MARKERS.iter().any(|tz| upper.contains(tz)) {
                display_time = Some(text.trim().to_string());
            } else if text.len() == 36 && text.contains('-') {
                slot_id = Some(text.to_string());
            }
        }
    }

    (display_time, slot_id)
}

fn string_field(item: &Value, key: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .unwrap_or(NO_ID)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SLOT_ID: &str = "11111111-1111-1111-1111-111111111111";

    fn fixture() -> Vec<Value> {
        vec![json!({
            "Lokasi": "A",
            "KaskelId": "K1",
            "OpenDateToString": "2024-01-01",
            "SlotList": [
                {"SisaQuota": 3, "Waktu": "08:00 WIB", "Id": SLOT_ID},
                {"SisaQuota": 2, "Other": "no time here"},
            ],
        })]
    }

    #[test]
    fn normalizes_fixture_location() {
        let entries = normalize(&fixture());

        assert_eq!(
            entries,
            vec![LocationEntry {
                location_name: "A".to_string(),
                kaskel_id: "K1".to_string(),
                open_date: "2024-01-01".to_string(),
                total_remaining_quota: 5,
                slots: vec![SlotEntry {
                    display_time: "08:00 WIB".to_string(),
                    remaining_quota: 3,
                    slot_id: SLOT_ID.to_string(),
                }],
            }]
        );
    }

    #[test]
    fn quota_counts_slots_without_parseable_time() {
        let entries = normalize(&fixture());
        // 3 from the displayed slot plus 2 from the dropped record.
        assert_eq!(entries[0].total_remaining_quota, 5);
        assert_eq!(entries[0].slots.len(), 1);
    }

    #[test]
    fn location_without_any_time_match_is_dropped() {
        let raw = vec![json!({
            "Lokasi": "B",
            "KaskelId": "K2",
            "OpenDateToString": "2024-01-02",
            "SlotList": [
                {"SisaQuota": 7, "Note": "nothing resembling a time"},
            ],
        })];

        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn missing_identifier_defaults_to_sentinel() {
        let raw = vec![json!({
            "Lokasi": "C",
            "SlotList": [
                {"SisaQuota": 1, "Waktu": "13:30 WITA"},
            ],
        })];

        let entries = normalize(&raw);
        assert_eq!(entries[0].slots[0].slot_id, "N/A");
        assert_eq!(entries[0].kaskel_id, "N/A");
        assert_eq!(entries[0].open_date, "N/A");
    }

    #[test]
    fn field_order_does_not_change_the_result() {
        let id_first = vec![json!({
            "Lokasi": "D",
            "SlotList": [{"Id": SLOT_ID, "Waktu": "09:00 WIT", "SisaQuota": 4}],
        })];
        let time_first = vec![json!({
            "Lokasi": "D",
            "SlotList": [{"Waktu": "09:00 WIT", "SisaQuota": 4, "Id": SLOT_ID}],
        })];

        assert_eq!(normalize(&id_first), normalize(&time_first));
    }

    #[test]
    fn normalize_is_deterministic() {
        let raw = fixture();
        assert_eq!(normalize(&raw), normalize(&raw));
    }

    #[test]
    fn time_value_is_trimmed() {
        let raw = vec![json!({
            "Lokasi": "E",
            "SlotList": [{"SisaQuota": 1, "Waktu": "  10:00 wib  "}],
        })];

        let entries = normalize(&raw);
        assert_eq!(entries[0].slots[0].display_time, "10:00 wib");
    }

    #[test]
    fn slot_order_follows_origin() {
        let raw = vec![json!({
            "Lokasi": "F",
            "SlotList": [
                {"SisaQuota": 1, "Waktu": "13:00 WIB"},
                {"SisaQuota": 1, "Waktu": "08:00 WIB"},
            ],
        })];

        let entries = normalize(&raw);
        let times: Vec<_> = entries[0]
            .slots
            .iter()
            .map(|s| s.display_time.as_str())
            .collect();
        assert_eq!(times, vec!["13:00 WIB", "08:00 WIB"]);
    }

    #[test]
    fn non_object_records_contribute_nothing() {
        let raw = vec![json!({
            "Lokasi": "G",
            "SlotList": [42, "stray", {"SisaQuota": 2, "Waktu": "08:00 WIB"}],
        })];

        let entries = normalize(&raw);
        assert_eq!(entries[0].total_remaining_quota, 2);
        assert_eq!(entries[0].slots.len(), 1);
    }
}
