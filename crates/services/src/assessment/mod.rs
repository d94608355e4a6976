mod flow;
mod progress;
mod timings;
mod workflow;

// Public API of the assessment subsystem.
pub use crate::error::FlowError;
pub use flow::{AdvanceOutcome, AssessmentFlow, FlowPhase, RecordingChange, RecordingTicket};
pub use progress::FlowProgress;
pub use timings::AssessmentTimings;
pub use workflow::AssessmentService;
