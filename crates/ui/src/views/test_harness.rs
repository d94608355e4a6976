use std::sync::Arc;
use std::time::Duration;

use assessment_core::model::AssessmentPath;
use assessment_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AssessmentService, AssessmentTimings};

use crate::context::{UiApp, build_app_context};
use crate::views::assessment::AssessmentTestHandles;
use crate::views::{AssessmentView, ClassroomView, DashboardView, HomeView};
use crate::vm::{AssessmentIntent, AssessmentVm};

#[derive(Clone)]
struct TestApp {
    service: AssessmentService,
    launch_path: Option<AssessmentPath>,
}

impl UiApp for TestApp {
    fn assessment_service(&self) -> AssessmentService {
        self.service
    }

    fn launch_path(&self) -> Option<AssessmentPath> {
        self.launch_path.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Dashboard,
    Classroom(AssessmentPath),
    Assessment(AssessmentPath),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: Option<AssessmentTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    if let Some(handles) = props.handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/dashboard")]
    Dashboard {},
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Classroom(path) => rsx! {
            ClassroomView {
                subject: path.subject().to_string(),
                topic: path.topic().to_string(),
                subtopic: path.subtopic().to_string(),
            }
        },
        ViewKind::Assessment(path) => rsx! {
            AssessmentView {
                subject: path.subject().to_string(),
                topic: path.topic().to_string(),
                subtopic: path.subtopic().to_string(),
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: Option<AssessmentTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Sends an intent through the view's own dispatcher, then lets spawned timers run.
    pub async fn dispatch(&mut self, intent: AssessmentIntent) {
        let handles = self.handles.clone().expect("assessment handles");
        self.dom.in_runtime(|| handles.dispatch().call(intent));
        drive_dom(&mut self.dom);
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn vm(&self) -> AssessmentVm {
        let handles = self.handles.clone().expect("assessment handles");
        self.dom.in_runtime(|| handles.vm().read().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Keeps driving spawned tasks until `done` accepts the rendered html.
    pub async fn settle_until(&mut self, done: impl Fn(&str) -> bool, rounds: usize) -> String {
        for _ in 0..rounds {
            let html = self.render();
            if done(&html) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Recording and grading finish immediately; the redirect does not fire within a test.
pub fn test_timings() -> AssessmentTimings {
    AssessmentTimings {
        redirect: Duration::from_secs(600),
        ..AssessmentTimings::immediate()
    }
}

pub fn setup_view_harness(view: ViewKind, launch_path: Option<AssessmentPath>) -> ViewHarness {
    setup_view_harness_with_timings(view, launch_path, test_timings())
}

pub fn setup_view_harness_with_timings(
    view: ViewKind,
    launch_path: Option<AssessmentPath>,
    timings: AssessmentTimings,
) -> ViewHarness {
    let handles = matches!(view, ViewKind::Assessment(_)).then(AssessmentTestHandles::default);
    let app = Arc::new(TestApp {
        service: AssessmentService::new(fixed_clock(), timings),
        launch_path,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
