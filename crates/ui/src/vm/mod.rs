mod assessment_vm;
mod results_vm;
mod time_fmt;

pub use assessment_vm::{
    AssessmentIntent, AssessmentScreen, AssessmentVm, OptionVm, QuestionCardVm, TUTOR_NAME,
};
pub use results_vm::{ResultsVm, ReviewRowVm, map_results};
