// ABOUTME: Local models for muster-client
// ABOUTME: Permission enumeration, log pages, and config-document helpers

use chrono::{DateTime, Utc};
use muster_proto::LogEntry;

/// Actions this client knows how to ask about in CheckPermissions.
///
/// Wire codes are matched exactly; a code outside this set in a server
/// response is surfaced as [`FleetError::UnknownPermission`](crate::FleetError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    ReadOrganization,
    WriteOrganization,
    ReadLocation,
    WriteLocation,
    ReadRobot,
    ControlRobot,
}

impl Permission {
    /// The wire code for this permission.
    pub fn as_code(&self) -> &'static str {
        match self {
            Permission::ReadOrganization => "read_organization",
            Permission::WriteOrganization => "write_organization",
            Permission::ReadLocation => "read_location",
            Permission::WriteLocation => "write_location",
            Permission::ReadRobot => "read_robot",
            Permission::ControlRobot => "control_robot",
        }
    }

    /// Parse a wire code by exact value match.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "read_organization" => Some(Permission::ReadOrganization),
            "write_organization" => Some(Permission::WriteOrganization),
            "read_location" => Some(Permission::ReadLocation),
            "write_location" => Some(Permission::WriteLocation),
            "read_robot" => Some(Permission::ReadRobot),
            "control_robot" => Some(Permission::ControlRobot),
            _ => None,
        }
    }
}

/// One page of robot-part logs plus the token for the next page.
///
/// The token is opaque and server-issued; an empty token means there are no
/// further pages.
#[derive(Debug, Clone)]
pub struct LogPage {
    /// Entries in the page, newest first.
    pub logs: Vec<LogEntry>,
    pub next_page_token: String,
}

/// Timestamp of a log entry as a chrono datetime, if the entry carries one.
pub fn log_time(entry: &LogEntry) -> Option<DateTime<Utc>> {
    let ts = entry.time.as_ref()?;
    DateTime::from_timestamp(ts.seconds, u32::try_from(ts.nanos).ok()?)
}

/// Build a robot-part configuration document from a JSON object.
///
/// Returns None if the value is not a JSON object; configuration documents
/// are maps at the top level.
pub fn config_from_json(value: serde_json::Value) -> Option<prost_types::Struct> {
    match value {
        serde_json::Value::Object(map) => Some(struct_from_map(map)),
        _ => None,
    }
}

/// Render a configuration document back into JSON.
pub fn config_to_json(config: &prost_types::Struct) -> serde_json::Value {
    let map = config
        .fields
        .iter()
        .map(|(k, v)| (k.clone(), json_from_prost(v)))
        .collect();
    serde_json::Value::Object(map)
}

fn struct_from_map(map: serde_json::Map<String, serde_json::Value>) -> prost_types::Struct {
    prost_types::Struct {
        fields: map
            .into_iter()
            .map(|(k, v)| (k, prost_from_json(v)))
            .collect(),
    }
}

fn prost_from_json(value: serde_json::Value) -> prost_types::Value {
    use prost_types::value::Kind;

    let kind = match value {
        serde_json::Value::Null => Kind::NullValue(0),
        serde_json::Value::Bool(b) => Kind::BoolValue(b),
        serde_json::Value::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Kind::StringValue(s),
        serde_json::Value::Array(items) => Kind::ListValue(prost_types::ListValue {
            values: items.into_iter().map(prost_from_json).collect(),
        }),
        serde_json::Value::Object(map) => Kind::StructValue(struct_from_map(map)),
    };
    prost_types::Value { kind: Some(kind) }
}

fn json_from_prost(value: &prost_types::Value) -> serde_json::Value {
    use prost_types::value::Kind;

    match &value.kind {
        None | Some(Kind::NullValue(_)) => serde_json::Value::Null,
        Some(Kind::BoolValue(b)) => serde_json::Value::Bool(*b),
        Some(Kind::NumberValue(n)) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Some(Kind::StringValue(s)) => serde_json::Value::String(s.clone()),
        Some(Kind::ListValue(list)) => {
            serde_json::Value::Array(list.values.iter().map(json_from_prost).collect())
        }
        Some(Kind::StructValue(s)) => config_to_json(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn permission_codes_round_trip() {
        let all = [
            Permission::ReadOrganization,
            Permission::WriteOrganization,
            Permission::ReadLocation,
            Permission::WriteLocation,
            Permission::ReadRobot,
            Permission::ControlRobot,
        ];
        for p in all {
            assert_eq!(Permission::from_code(p.as_code()), Some(p));
        }
    }

    #[test]
    fn permission_from_unknown_code_is_none() {
        assert_eq!(Permission::from_code("do_everything"), None);
        // Exact value match only: no case folding, no trimming.
        assert_eq!(Permission::from_code("Read_Organization"), None);
        assert_eq!(Permission::from_code(" read_organization"), None);
    }

    #[test]
    fn config_round_trips_through_struct() {
        let doc = json!({
            "motor": {"max_rpm": 120.0, "reversed": true},
            "sensors": ["lidar", "camera"],
            "label": "front-left",
            "deprecated": null,
        });

        let config = config_from_json(doc.clone()).unwrap();
        assert_eq!(config_to_json(&config), doc);
    }

    #[test]
    fn config_from_non_object_is_none() {
        assert!(config_from_json(json!("just a string")).is_none());
        assert!(config_from_json(json!([1, 2, 3])).is_none());
    }

    #[test]
    fn log_time_reads_the_proto_timestamp() {
        let entry = LogEntry {
            time: Some(prost_types::Timestamp {
                seconds: 1_700_000_000,
                nanos: 500_000_000,
            }),
            ..Default::default()
        };

        let dt = log_time(&entry).unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
        assert_eq!(dt.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn log_time_without_timestamp_is_none() {
        let entry = LogEntry::default();
        assert!(log_time(&entry).is_none());
    }
}
