use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use lawn_defence_core::{CellCoord, PlantKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PLAN_DOMAIN: &str = "lawn";
const PLAN_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded plan payload.
pub(crate) const PLAN_HEADER: &str = "lawn:v1";
/// Delimiter used to separate the prefix and payload.
const FIELD_DELIMITER: char = ':';

/// Ordered list of placements attempted during a headless run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlacementPlan {
    /// Placements in the order they should be attempted.
    pub(crate) placements: Vec<PlannedPlacement>,
}

/// Single placement scheduled at a tick boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlannedPlacement {
    /// Number of ticks already run when the placement is attempted.
    pub(crate) tick: u64,
    /// Plant kind to place.
    pub(crate) kind: PlantKind,
    /// Target column.
    pub(crate) column: u32,
    /// Target lane.
    pub(crate) row: u32,
}

impl PlannedPlacement {
    pub(crate) const fn cell(&self) -> CellCoord {
        CellCoord::new(self.column, self.row)
    }
}

impl PlacementPlan {
    /// Encodes the plan into a single-line string suitable for clipboard transfer.
    pub(crate) fn encode(&self) -> Result<String, PlanTransferError> {
        let json = serde_json::to_vec(&self.placements).map_err(PlanTransferError::Serialize)?;
        let encoded = STANDARD_NO_PAD.encode(json);
        Ok(format!("{PLAN_HEADER}{FIELD_DELIMITER}{encoded}"))
    }

    /// Decodes a plan from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, PlanTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(PlanTransferError::EmptyPayload);
        }

        let mut parts = trimmed.splitn(3, FIELD_DELIMITER);
        let domain = parts.next().ok_or(PlanTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(PlanTransferError::MissingVersion)?;
        let payload = parts.next().ok_or(PlanTransferError::MissingPayload)?;

        if domain != PLAN_DOMAIN {
            return Err(PlanTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != PLAN_VERSION {
            return Err(PlanTransferError::UnsupportedVersion(version.to_owned()));
        }

        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(PlanTransferError::InvalidEncoding)?;
        let placements: Vec<PlannedPlacement> =
            serde_json::from_slice(&bytes).map_err(PlanTransferError::InvalidPayload)?;

        Ok(Self { placements })
    }
}

/// Errors that can occur while transferring placement plans.
#[derive(Debug, Error)]
pub(crate) enum PlanTransferError {
    /// The provided string was empty or contained only whitespace.
    #[error("plan string was empty")]
    EmptyPayload,
    /// The prefix segment was missing from the encoded plan.
    #[error("plan string is missing the prefix")]
    MissingPrefix,
    /// The encoded plan did not contain a version segment.
    #[error("plan string is missing the version")]
    MissingVersion,
    /// The encoded plan did not include the payload segment.
    #[error("plan string is missing the payload")]
    MissingPayload,
    /// The encoded plan used an unexpected prefix segment.
    #[error("plan prefix '{0}' is not supported")]
    InvalidPrefix(String),
    /// The encoded plan used an unsupported version identifier.
    #[error("plan version '{0}' is not supported")]
    UnsupportedVersion(String),
    /// The base64 payload could not be decoded.
    #[error("could not decode plan payload: {0}")]
    InvalidEncoding(#[source] base64::DecodeError),
    /// The decoded payload could not be deserialised.
    #[error("could not parse plan payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
    /// The plan could not be serialised.
    #[error("could not serialise plan: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_populated_plan() {
        let plan = PlacementPlan {
            placements: vec![
                PlannedPlacement {
                    tick: 0,
                    kind: PlantKind::Generator,
                    column: 0,
                    row: 0,
                },
                PlannedPlacement {
                    tick: 120,
                    kind: PlantKind::Shooter,
                    column: 1,
                    row: 4,
                },
            ],
        };

        let encoded = plan.encode().expect("plan encodes");
        assert!(encoded.starts_with(&format!("{PLAN_HEADER}:")));

        let decoded = PlacementPlan::decode(&encoded).expect("plan decodes");
        assert_eq!(plan, decoded);
    }

    #[test]
    fn rejects_foreign_prefixes_and_versions() {
        assert!(matches!(
            PlacementPlan::decode("turf:v1:W10"),
            Err(PlanTransferError::InvalidPrefix(prefix)) if prefix == "turf"
        ));
        assert!(matches!(
            PlacementPlan::decode("lawn:v2:W10"),
            Err(PlanTransferError::UnsupportedVersion(version)) if version == "v2"
        ));
        assert!(matches!(
            PlacementPlan::decode("lawn:v1"),
            Err(PlanTransferError::MissingPayload)
        ));
        assert!(matches!(
            PlacementPlan::decode("   "),
            Err(PlanTransferError::EmptyPayload)
        ));
    }

    #[test]
    fn rejects_corrupt_payloads() {
        assert!(matches!(
            PlacementPlan::decode("lawn:v1:!!!"),
            Err(PlanTransferError::InvalidEncoding(_))
        ));

        let not_a_plan = STANDARD_NO_PAD.encode(br#"{"tick":1}"#);
        let error = PlacementPlan::decode(&format!("lawn:v1:{not_a_plan}"))
            .expect_err("objects are not plans");
        assert!(matches!(error, PlanTransferError::InvalidPayload(_)));
        assert!(error.to_string().starts_with("could not parse plan payload"));
    }
}
