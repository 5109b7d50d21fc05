use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, PointId};
use crate::error::{ChartError, ChartResult};

use super::ChartDemoState;

pub const DEMO_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Per-sample state captured in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub id: PointId,
    pub month: String,
    pub value: f64,
    pub revealed: bool,
    pub progress: f64,
}

/// Serializable view of the demo state at one clock instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSnapshot {
    pub kind: ChartKind,
    pub animating: bool,
    pub clock_ms: u64,
    pub pending_reveals: usize,
    pub points: Vec<PointSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DemoSnapshot,
}

impl ChartDemoState {
    #[must_use]
    pub fn snapshot(&self) -> DemoSnapshot {
        let points = self
            .points()
            .iter()
            .enumerate()
            .map(|(index, point)| PointSnapshot {
                id: point.id,
                month: point.month.clone(),
                value: point.value,
                revealed: point.revealed,
                progress: self.progress_at(index),
            })
            .collect();

        DemoSnapshot {
            kind: self.kind(),
            animating: self.is_animating(),
            clock_ms: u64::try_from(self.now().as_millis()).unwrap_or(u64::MAX),
            pending_reveals: self.pending_reveal_count(),
            points,
        }
    }
}

impl DemoSnapshot {
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.points.iter().filter(|point| point.revealed).count()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DemoSnapshotJsonContractV1 {
            schema_version: DEMO_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DemoSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DemoSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != DEMO_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
