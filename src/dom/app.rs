//! Application state and pass execution
//!
//! One `App` per page, held in a thread-local slot (WASM runs the main
//! thread only) and borrowed per event. A pass runs profile refresh,
//! curve regeneration, placement, and the header side-channel in that
//! order; each step consumes the previous one's output, so the ordering
//! is load-bearing.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::curve::reference_curves;
use crate::models::select_profile;
use crate::schedule::{Coordinator, PassKind, TimerHost, TimerId, Trigger, FONTS_FALLBACK_MS};

use super::events::{self, DomTimers};
use super::stage::{self, PlaceOutcome, SkipReason};
use super::header;

/// Per-page state.
pub struct App {
    pub coordinator: Coordinator,
    pub timers: DomTimers,

    /// Manual override for the profile's vertical fine-tune, set through
    /// `adjustY`. `None` means the profile's own value applies.
    pub fine_tune_override: Option<f64>,

    listeners_wired: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            coordinator: Coordinator::new(),
            timers: DomTimers::new(),
            fine_tune_override: None,
            listeners_wired: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static APP: RefCell<Option<Rc<RefCell<App>>>> = const { RefCell::new(None) };
}

/// Install the app state if no page has done so yet.
pub fn ensure_app() {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(Rc::new(RefCell::new(App::new())));
        }
    });
}

fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    let app = APP.with(|slot| slot.borrow().clone())?;
    let mut app = app.borrow_mut();
    Some(f(&mut app))
}

/// What one pass did, reported back to JS callers.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PassReport {
    /// False only when a geometry query failed
    pub success: bool,

    /// Whether the glyph was actually repositioned
    pub placed: bool,

    /// Why the pass did no work, when it was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,

    /// Geometry failure detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The applied placement, when there was one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<crate::placement::Placement>,
}

impl PassReport {
    pub fn placed(placement: crate::placement::Placement) -> Self {
        Self {
            success: true,
            placed: true,
            skipped: None,
            error: None,
            placement: Some(placement),
        }
    }

    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            success: true,
            placed: false,
            skipped: Some(reason.as_str().to_string()),
            error: None,
            placement: None,
        }
    }

    pub fn failed(detail: &str) -> Self {
        Self {
            success: false,
            placed: false,
            skipped: None,
            error: Some(detail.to_string()),
            placement: None,
        }
    }
}

fn viewport_width(document: &Document) -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .filter(|w| *w > 0.0)
        .or_else(|| {
            document
                .document_element()
                .map(|el| el.client_width() as f64)
        })
        .unwrap_or(0.0)
}

fn run_pass(app: &mut App, trigger: Trigger) -> PassReport {
    let kind = trigger.pass_kind();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return PassReport::failed("document unavailable");
    };

    let mut profile = select_profile(viewport_width(&document));
    if let Some(fine_tune_y) = app.fine_tune_override {
        profile.fine_tune_y = fine_tune_y;
    }

    let curves = reference_curves();
    if kind == PassKind::Full {
        stage::apply_curves(&document, &curves);
    }

    let outcome = stage::place_and_rotate(&document, &curves.lower, &profile);

    if kind == PassKind::Full {
        header::publish_height(&document);
    }

    match outcome {
        PlaceOutcome::Placed(p) => {
            log::debug!(
                "pass {:?}: glyph at ({:.1}, {:.1}), {:.1}x{:.1}, {:.1}deg",
                trigger,
                p.x,
                p.y,
                p.width,
                p.height,
                p.angle_deg
            );
            PassReport::placed(p)
        }
        PlaceOutcome::Skipped(reason) => {
            log::debug!("pass {:?}: skipped ({})", trigger, reason.as_str());
            PassReport::skipped(reason)
        }
        PlaceOutcome::Failed(err) => {
            log::warn!("pass {:?}: geometry query failed: {}", trigger, err);
            PassReport::failed(&err.to_string())
        }
    }
}

fn run_full_with_retries(app: &mut App, trigger: Trigger) -> PassReport {
    let report = run_pass(app, trigger);
    let App {
        coordinator,
        timers,
        ..
    } = app;
    coordinator.pass_completed(timers);
    report
}

fn wire_listeners_once(app: &mut App) {
    if !app.listeners_wired {
        app.listeners_wired = true;
        events::wire_window_listeners();
    }
}

/// Entry for every fired timer, including the fonts fallback.
pub(crate) fn timer_fired(id: TimerId, trigger: Trigger) {
    with_app(|app| {
        app.timers.complete(id);
        app.coordinator.fired(trigger);
        if trigger == Trigger::FontsReady {
            wire_listeners_once(app);
        }
        match trigger.pass_kind() {
            PassKind::Full => {
                run_full_with_retries(app, trigger);
            }
            PassKind::PlacementOnly => {
                run_pass(app, trigger);
            }
        }
    });
}

/// The Font Loading API resolved; run the first pass and start listening.
pub(crate) fn fonts_ready() {
    with_app(|app| {
        wire_listeners_once(app);
        run_full_with_retries(app, Trigger::FontsReady);
    });
}

/// No Font Loading API; stand in with one deferred pass.
pub(crate) fn schedule_fonts_fallback() {
    with_app(|app| {
        app.timers.schedule(FONTS_FALLBACK_MS, Trigger::FontsReady);
    });
}

pub(crate) fn resized() {
    with_app(|app| {
        let App {
            coordinator,
            timers,
            ..
        } = app;
        coordinator.resize(timers);
    });
}

pub(crate) fn orientation_changed() {
    with_app(|app| {
        let App {
            coordinator,
            timers,
            ..
        } = app;
        coordinator.orientation_changed(timers);
    });
}

pub(crate) fn menu_toggled(open: bool) {
    with_app(|app| {
        let App {
            coordinator,
            timers,
            ..
        } = app;
        coordinator.menu_toggled(timers, open);
    });
}

/// Manual full pass, for the JS control surface.
pub fn recalc() -> PassReport {
    ensure_app();
    with_app(|app| run_full_with_retries(app, Trigger::Manual))
        .unwrap_or_else(|| PassReport::failed("module not initialised"))
}

/// Override the vertical fine-tune and re-run.
pub fn adjust_y(offset: f64) -> PassReport {
    ensure_app();
    with_app(|app| {
        app.fine_tune_override = Some(offset);
        run_full_with_retries(app, Trigger::Manual)
    })
    .unwrap_or_else(|| PassReport::failed("module not initialised"))
}
