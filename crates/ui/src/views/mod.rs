mod assessment;
mod classroom;
mod dashboard;
mod home;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use classroom::ClassroomView;
pub use dashboard::DashboardView;
pub use home::HomeView;
pub use state::ViewError;
