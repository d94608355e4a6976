use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use assessment_core::model::AssessmentPath;
use services::AssessmentService;

pub trait UiApp: Send + Sync {
    fn assessment_service(&self) -> AssessmentService;

    /// Assessment to open when the window first shows, if any.
    fn launch_path(&self) -> Option<AssessmentPath>;
}

#[derive(Clone)]
pub struct AppContext {
    assessment_service: AssessmentService,
    launch_path: Option<AssessmentPath>,
    open_on_launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let launch_path = app.launch_path();
        Self {
            assessment_service: app.assessment_service(),
            open_on_launch_once: Arc::new(AtomicBool::new(launch_path.is_some())),
            launch_path,
        }
    }

    #[must_use]
    pub fn assessment_service(&self) -> AssessmentService {
        self.assessment_service
    }

    #[must_use]
    pub fn launch_path(&self) -> Option<&AssessmentPath> {
        self.launch_path.as_ref()
    }

    /// Returns the launch path the first time only.
    #[must_use]
    pub fn take_launch_path(&self) -> Option<AssessmentPath> {
        if self.open_on_launch_once.swap(false, Ordering::AcqRel) {
            self.launch_path.clone()
        } else {
            None
        }
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
