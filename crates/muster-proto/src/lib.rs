// ABOUTME: Re-exports generated protobuf types for the muster fleet protocol.
// ABOUTME: Single source of truth for FleetService stubs and message types.

#![allow(clippy::derive_partial_eq_without_eq)]

/// Generated protobuf types for the `muster.v1` package.
///
/// The module under `src/gen/` is checked in; regenerate it from
/// `proto-src/muster.proto` as described there.
pub mod muster {
    pub mod v1 {
        include!("gen/muster.v1.rs");
    }
}

// Re-export commonly used types at crate root for convenience
pub use muster::v1::*;

// Re-export client types under a client module
pub mod client {
    pub use super::muster::v1::fleet_service_client::FleetServiceClient;
}

// Re-export server types under a server module
pub mod server {
    pub use super::muster::v1::fleet_service_server::{FleetService, FleetServiceServer};
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn robot_part_roundtrips_through_wire_encoding() {
        let part = RobotPart {
            id: "part-1".to_string(),
            name: "arm".to_string(),
            robot_id: "robot-1".to_string(),
            main_part: true,
            robot_config: None,
            created_on: None,
            last_updated: None,
        };

        let bytes = part.encode_to_vec();
        let decoded = RobotPart::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, part);
    }

    #[test]
    fn empty_page_token_encodes_to_nothing() {
        // proto3 default scalars are absent on the wire; the first-page
        // request stays a single field.
        let req = GetRobotPartLogsRequest {
            id: "part-1".to_string(),
            errors_only: false,
            page_token: String::new(),
        };
        let bytes = req.encode_to_vec();
        let decoded = GetRobotPartLogsRequest::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.page_token, "");
        assert!(!decoded.errors_only);
    }
}
