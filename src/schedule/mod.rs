//! Recomputation scheduling
//!
//! Placement is recomputed on font readiness, viewport changes, and menu
//! transitions. Resize events debounce into a single pass; every full pass
//! queues two settle retries to catch late layout shifts. All deferral
//! goes through the [`TimerHost`] seam so the browser backs it with
//! `setTimeout` while tests drive a virtual clock.

/// Debounce window for resize bursts, in ms. Each event cancels the
/// pending pass and reschedules; only the last event in a burst fires.
pub const RESIZE_DEBOUNCE_MS: u32 = 160;

/// Fixed delay after an orientation change. Infrequent enough that no
/// debounce is needed.
pub const ORIENTATION_SETTLE_MS: u32 = 180;

/// Follow-up placement passes queued after every full pass, to correct
/// for bounding boxes that move once fonts and layout finish settling.
pub const SETTLE_RETRY_DELAYS_MS: [u32; 2] = [100, 250];

/// Delay after the menu opens; its animation reflows the page around it.
pub const MENU_OPEN_SETTLE_MS: u32 = 250;

/// Delay after the menu closes.
pub const MENU_CLOSE_SETTLE_MS: u32 = 150;

/// One-shot fallback when the host has no Font Loading API.
pub const FONTS_FALLBACK_MS: u32 = 250;

/// What caused a pass to be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    FontsReady,
    Resize,
    Orientation,
    MenuOpened,
    MenuClosed,
    Settle,
    Manual,
}

/// How much of the pipeline a pass runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PassKind {
    /// Profile refresh, curve regeneration, placement, header side-channel.
    Full,

    /// Placement only. Settle retries re-measure and re-place; re-running
    /// the full pipeline would queue further retries without end.
    PlacementOnly,
}

impl Trigger {
    pub fn pass_kind(self) -> PassKind {
        match self {
            Trigger::Settle => PassKind::PlacementOnly,
            _ => PassKind::Full,
        }
    }
}

/// Handle to one scheduled task; lets the debounce cancel and reschedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerId(pub u32);

/// Deferred-callback seam.
///
/// The browser implementation wraps `setTimeout`/`clearTimeout`; tests
/// substitute a virtual clock and fire tasks by hand.
pub trait TimerHost {
    /// Arrange for `trigger` to fire after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, trigger: Trigger) -> TimerId;

    /// Cancel a task that has not fired yet. Unknown or already-fired
    /// handles are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Decides when passes run.
///
/// Holds the one cancellable handle — the resize debounce. Every other
/// trigger schedules fire-and-forget tasks; stale passes are harmless
/// because passes are idempotent and the latest viewport wins.
#[derive(Debug, Default)]
pub struct Coordinator {
    resize_timer: Option<TimerId>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self { resize_timer: None }
    }

    /// Resize events coalesce: cancel any pending pass and schedule a new
    /// one `RESIZE_DEBOUNCE_MS` after this event.
    pub fn resize<H: TimerHost>(&mut self, host: &mut H) {
        if let Some(id) = self.resize_timer.take() {
            host.cancel(id);
        }
        self.resize_timer = Some(host.schedule(RESIZE_DEBOUNCE_MS, Trigger::Resize));
    }

    pub fn orientation_changed<H: TimerHost>(&mut self, host: &mut H) {
        host.schedule(ORIENTATION_SETTLE_MS, Trigger::Orientation);
    }

    /// Menu transitions reflow the surrounding layout; schedule a pass
    /// once the animation has had time to settle.
    pub fn menu_toggled<H: TimerHost>(&mut self, host: &mut H, open: bool) {
        if open {
            host.schedule(MENU_OPEN_SETTLE_MS, Trigger::MenuOpened);
        } else {
            host.schedule(MENU_CLOSE_SETTLE_MS, Trigger::MenuClosed);
        }
    }

    /// Mark a scheduled trigger as fired, releasing its handle.
    pub fn fired(&mut self, trigger: Trigger) {
        if trigger == Trigger::Resize {
            self.resize_timer = None;
        }
    }

    /// Queue the settle retries that follow every full pass.
    pub fn pass_completed<H: TimerHost>(&mut self, host: &mut H) {
        for delay in SETTLE_RETRY_DELAYS_MS {
            host.schedule(delay, Trigger::Settle);
        }
    }
}
