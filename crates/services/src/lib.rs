#![forbid(unsafe_code)]

pub mod assessment;
pub mod error;

pub use assessment_core::Clock;

pub use error::FlowError;

pub use assessment::{
    AdvanceOutcome, AssessmentFlow, AssessmentService, AssessmentTimings, FlowPhase, FlowProgress,
    RecordingChange, RecordingTicket,
};
