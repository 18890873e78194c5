use serde::{Deserialize, Serialize};

/// Why a streaming run ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "message")]
pub enum StopReason {
    EndOfStream,
    StopRequested,
    /// The frame source failed; treated like end-of-stream.
    SourceFailed(String),
    /// The frame sink failed; the run stops after the failing frame.
    SinkFailed(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub frames_processed: u64,
    pub stop_reason: StopReason,
    pub total_ms: f64,
    pub mean_frame_ms: f64,
}

impl RunSummary {
    pub fn new(frames_processed: u64, stop_reason: StopReason, total_ms: f64) -> Self {
        let mean_frame_ms = if frames_processed > 0 {
            total_ms / frames_processed as f64
        } else {
            0.0
        };
        Self {
            frames_processed,
            stop_reason,
            total_ms,
            mean_frame_ms,
        }
    }
}
