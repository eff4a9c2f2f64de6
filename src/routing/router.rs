//! Route lookup and mount reconciliation.
//!
//! # Responsibilities
//! - Match the current location against the compiled tree
//! - Keep the mounted component chain in step with the match path
//! - Apply the fallback policy for unmatched locations
//! - Publish `NavigationState` to any number of readers
//!
//! # Design Decisions
//! - One writer: only the router mutates navigation state
//! - Common prefix of old and new match paths stays mounted
//! - Stale components unmount deepest-first before new ones mount
//!   shallowest-first; there is never a moment with both leaves mounted
//! - Explicit Unmatched outcome rather than silent default

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use crate::config::FallbackPolicy;
use crate::history::{History, Location, LocationError};
use crate::layout::NotFoundPage;
use crate::observability::{metrics, tracing::navigation_span};
use crate::routing::{match_location, MatchOutcome, MatchPath, NodeId, RouteTree};
use crate::view::{Element, Slot, View};

/// What triggered a navigation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationSource {
    Initial,
    Push,
    Replace,
    Pop,
}

/// Current location and its match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub path: String,
    pub outcome: MatchOutcome,
}

/// Router state machine.
///
/// ```text
/// Idle(path) → Matching → Matched | Unmatched → Idle(new path)
/// ```
///
/// A cycle runs synchronously, so between cycles `Router::phase` is always
/// `Idle`. Every transition is logged at `trace` with a `phase` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterPhase {
    Idle(String),
    Matching,
    Matched(MatchPath),
    Unmatched,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mounted {
    Node(NodeId),
    Fallback,
}

/// Navigation router. Owns the mounted component chain.
#[derive(Debug)]
pub struct Router {
    tree: Arc<RouteTree>,
    history: Arc<dyn History>,
    fallback: FallbackPolicy,
    not_found: Element,
    metrics_enabled: bool,
    mounted: Vec<Mounted>,
    phase: RouterPhase,
    state: watch::Sender<NavigationState>,
}

impl Router {
    /// Create a router in `Idle` at the history's current location.
    /// Nothing is mounted until the first `sync` or `navigate`.
    pub fn new(tree: Arc<RouteTree>, history: Arc<dyn History>) -> Self {
        let path = history.location();
        let (state, _) = watch::channel(NavigationState {
            path: path.clone(),
            outcome: MatchOutcome::Pending,
        });

        Self {
            tree,
            history,
            fallback: FallbackPolicy::default(),
            not_found: Arc::new(NotFoundPage),
            metrics_enabled: false,
            mounted: Vec::new(),
            phase: RouterPhase::Idle(path),
            state,
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Replace the built-in not-found page.
    pub fn with_not_found(mut self, element: Element) -> Self {
        self.not_found = element;
        self
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    /// Programmatic navigation: push a history entry, then match.
    ///
    /// Navigating to the current location adds no entry and leaves the
    /// mounted tree untouched.
    pub fn navigate(&mut self, href: &str) -> Result<NavigationState, LocationError> {
        let path = Location::parse(href)?.into_path();
        let current = Location::parse(&self.history.location())
            .ok()
            .map(Location::into_path);
        if current.as_deref() != Some(path.as_str()) {
            self.history.push(&path);
        }
        Ok(self.run_cycle(path, NavigationSource::Push))
    }

    /// Programmatic navigation that overwrites the current history entry.
    pub fn replace(&mut self, href: &str) -> Result<NavigationState, LocationError> {
        let path = Location::parse(href)?.into_path();
        self.history.replace(&path);
        Ok(self.run_cycle(path, NavigationSource::Replace))
    }

    /// Step back in history and match the new location.
    pub fn back(&mut self) -> NavigationState {
        self.history.back();
        self.sync(NavigationSource::Pop)
    }

    /// Step forward in history and match the new location.
    pub fn forward(&mut self) -> NavigationState {
        self.history.forward();
        self.sync(NavigationSource::Pop)
    }

    /// Match whatever location the history currently holds.
    pub fn sync(&mut self, source: NavigationSource) -> NavigationState {
        let raw = self.history.location();
        let path = match Location::parse(&raw) {
            Ok(location) => location.into_path(),
            Err(e) => {
                tracing::warn!(location = %raw, error = %e, "Unparseable history location");
                raw
            }
        };
        self.run_cycle(path, source)
    }

    fn run_cycle(&mut self, mut path: String, source: NavigationSource) -> NavigationState {
        let span = navigation_span(&path, source);
        let _entered = span.enter();

        self.transition(RouterPhase::Matching);
        let mut outcome = match_location(&self.tree, &path);

        if outcome == MatchOutcome::Unmatched
            && self.fallback == FallbackPolicy::RedirectHome
            && path != "/"
        {
            tracing::info!(from = %path, "No route matched, redirecting home");
            self.history.replace("/");
            path = "/".to_string();
            outcome = match_location(&self.tree, &path);
        }

        let target = match &outcome {
            MatchOutcome::Matched(match_path) => {
                self.transition(RouterPhase::Matched(match_path.clone()));
                match_path.nodes().iter().copied().map(Mounted::Node).collect()
            }
            _ => {
                self.transition(RouterPhase::Unmatched);
                tracing::warn!(path = %path, fallback = ?self.fallback, "No route matched");
                match self.fallback {
                    FallbackPolicy::Empty => Vec::new(),
                    FallbackPolicy::NotFound | FallbackPolicy::RedirectHome => {
                        vec![Mounted::Fallback]
                    }
                }
            }
        };

        self.reconcile(target);

        if self.metrics_enabled {
            metrics::record_navigation(outcome.label());
        }

        self.transition(RouterPhase::Idle(path.clone()));
        let next = NavigationState { path, outcome };
        self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next.clone();
                true
            }
        });
        next
    }

    fn transition(&mut self, phase: RouterPhase) {
        tracing::trace!(phase = ?phase, "Router phase");
        self.phase = phase;
    }

    fn reconcile(&mut self, target: Vec<Mounted>) {
        let keep = self
            .mounted
            .iter()
            .zip(&target)
            .take_while(|(current, next)| current == next)
            .count();

        if keep == self.mounted.len() && keep == target.len() {
            tracing::trace!("Mounted tree unchanged");
            return;
        }

        let stale = self.mounted.split_off(keep);
        for entry in stale.iter().rev() {
            let element = self.element(*entry);
            tracing::debug!(component = element.name(), "Unmounting");
            element.unmounted();
        }

        for entry in &target[keep..] {
            let element = Arc::clone(self.element(*entry));
            tracing::debug!(component = element.name(), "Mounting");
            element.mounted();
            if self.metrics_enabled {
                metrics::record_mount(element.name());
            }
            self.mounted.push(*entry);
        }
    }

    fn element(&self, entry: Mounted) -> &Element {
        match entry {
            Mounted::Node(id) => self.tree.element(id),
            Mounted::Fallback => &self.not_found,
        }
    }

    /// Compose the mounted chain: each component renders into its parent's
    /// slot, deepest first.
    pub fn render(&self) -> View {
        self.mounted
            .iter()
            .rev()
            .fold(Slot::empty(), |slot, entry| {
                Slot::filled(self.element(*entry).render(slot))
            })
            .into_view()
    }

    /// Unmount every component, deepest first.
    pub fn teardown(&mut self) {
        self.reconcile(Vec::new());
    }

    /// Names of the mounted components, root first.
    pub fn mounted_components(&self) -> Vec<String> {
        self.mounted
            .iter()
            .map(|entry| self.element(*entry).name().to_string())
            .collect()
    }

    pub fn state(&self) -> NavigationState {
        self.state.borrow().clone()
    }

    /// Receiver notified whenever the navigation state changes.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> &RouterPhase {
        &self.phase
    }

    pub fn tree(&self) -> &Arc<RouteTree> {
        &self.tree
    }

    pub fn history(&self) -> &Arc<dyn History> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistory;
    use crate::routing::{dashboard_routes, DashboardPages};
    use crate::view::Mountable;
    use std::sync::Mutex;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    type Log = Arc<Mutex<Vec<String>>>;

    #[derive(Debug)]
    struct Probe {
        name: &'static str,
        layout: bool,
        log: Log,
    }

    impl Mountable for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn render(&self, slot: Slot) -> View {
            let view = View::element("div").attr("data-probe", self.name);
            if self.layout {
                view.child(slot.into_view())
            } else {
                view
            }
        }

        fn mounted(&self) {
            self.log.lock().unwrap().push(format!("mount {}", self.name));
        }

        fn unmounted(&self) {
            self.log.lock().unwrap().push(format!("unmount {}", self.name));
        }
    }

    fn probe(name: &'static str, layout: bool, log: &Log) -> Element {
        Arc::new(Probe {
            name,
            layout,
            log: Arc::clone(log),
        })
    }

    fn fixture(initial: &str) -> (Router, Arc<MemoryHistory>, Log) {
        let log: Log = Arc::default();
        let pages = DashboardPages {
            layout: probe("Main", true, &log),
            peers: probe("Peers", false, &log),
            logs: probe("Logs", false, &log),
        };
        let tree = Arc::new(dashboard_routes(pages).unwrap());
        let history = Arc::new(MemoryHistory::new(initial));
        let shared: Arc<dyn History> = history.clone();
        let router = Router::new(tree, shared);
        (router, history, log)
    }

    fn take(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    /// Collects the variant name of every `phase` field logged.
    #[derive(Clone, Default)]
    struct PhaseRecorder(Log);

    struct PhaseField(Option<String>);

    impl tracing::field::Visit for PhaseField {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "phase" {
                let rendered = format!("{:?}", value);
                let variant = rendered.split('(').next().unwrap_or_default().to_string();
                self.0 = Some(variant);
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for PhaseRecorder {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut field = PhaseField(None);
            event.record(&mut field);
            if let Some(phase) = field.0 {
                self.0.lock().unwrap().push(phase);
            }
        }
    }

    fn record_phases(f: impl FnOnce()) -> Vec<String> {
        let recorder = PhaseRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        tracing::subscriber::with_default(subscriber, f);
        take(&recorder.0)
    }

    #[test]
    fn test_nothing_mounted_before_first_sync() {
        let (router, _, log) = fixture("/");
        assert_eq!(router.phase(), &RouterPhase::Idle("/".into()));
        assert_eq!(router.state().outcome, MatchOutcome::Pending);
        assert!(router.render().is_empty());
        assert!(take(&log).is_empty());
    }

    #[test]
    fn test_root_mounts_peers_inside_main() {
        let (mut router, _, log) = fixture("/");
        let state = router.sync(NavigationSource::Initial);

        assert!(state.outcome.is_matched());
        assert_eq!(take(&log), vec!["mount Main", "mount Peers"]);
        assert_eq!(
            router.render().to_html(),
            "<div data-probe=\"Main\"><div data-probe=\"Peers\"></div></div>"
        );
    }

    #[test]
    fn test_switch_unmounts_before_mounting() {
        let (mut router, history, log) = fixture("/");
        router.sync(NavigationSource::Initial);
        take(&log);

        router.navigate("/logs").unwrap();

        assert_eq!(take(&log), vec!["unmount Peers", "mount Logs"]);
        assert_eq!(router.mounted_components(), vec!["Main", "Logs"]);
        assert_eq!(history.entries(), vec!["/", "/logs"]);
    }

    #[test]
    fn test_same_path_is_noop() {
        let (mut router, history, log) = fixture("/");
        router.navigate("/logs").unwrap();
        take(&log);

        let mut rx = router.subscribe();
        rx.borrow_and_update();

        router.navigate("/logs").unwrap();
        router.navigate("/logs/").unwrap();

        assert!(take(&log).is_empty());
        assert!(!rx.has_changed().unwrap());
        assert_eq!(history.entries(), vec!["/", "/logs"]);
    }

    #[test]
    fn test_unknown_path_mounts_not_found_only() {
        let (mut router, _, log) = fixture("/");
        router.sync(NavigationSource::Initial);
        take(&log);

        let state = router.navigate("/unknown").unwrap();

        assert_eq!(state.outcome, MatchOutcome::Unmatched);
        assert!(state.outcome.match_path().is_empty());
        assert_eq!(take(&log), vec!["unmount Peers", "unmount Main"]);
        assert_eq!(router.mounted_components(), vec!["NotFoundPage"]);
        assert!(router.render().find_by_attr("data-page", "not-found").is_some());
    }

    #[test]
    fn test_empty_fallback_renders_nothing() {
        let (router, _, _) = fixture("/missing");
        let mut router = router.with_fallback(FallbackPolicy::Empty);
        router.sync(NavigationSource::Initial);

        assert!(router.render().is_empty());
        assert!(router.mounted_components().is_empty());
    }

    #[test]
    fn test_redirect_home_replaces_entry() {
        let (router, history, log) = fixture("/missing");
        let mut router = router.with_fallback(FallbackPolicy::RedirectHome);
        let state = router.sync(NavigationSource::Initial);

        assert_eq!(state.path, "/");
        assert!(state.outcome.is_matched());
        assert_eq!(history.entries(), vec!["/"]);
        assert_eq!(take(&log), vec!["mount Main", "mount Peers"]);
    }

    #[test]
    fn test_back_and_forward() {
        let (mut router, _, log) = fixture("/");
        router.sync(NavigationSource::Initial);
        router.navigate("/logs").unwrap();
        take(&log);

        let state = router.back();
        assert_eq!(state.path, "/");
        assert_eq!(take(&log), vec!["unmount Logs", "mount Peers"]);

        let state = router.forward();
        assert_eq!(state.path, "/logs");
        assert_eq!(take(&log), vec!["unmount Peers", "mount Logs"]);
    }

    #[test]
    fn test_phase_transitions_are_logged() {
        let (mut router, _, _) = fixture("/");

        let phases = record_phases(|| {
            router.sync(NavigationSource::Initial);
        });
        assert_eq!(phases, vec!["Matching", "Matched", "Idle"]);

        let phases = record_phases(|| {
            router.navigate("/nowhere").unwrap();
        });
        assert_eq!(phases, vec!["Matching", "Unmatched", "Idle"]);
    }

    #[test]
    fn test_doubled_leading_slash_is_a_path() {
        let (mut router, _, log) = fixture("//unknown");
        let state = router.sync(NavigationSource::Initial);

        assert_eq!(state.path, "/unknown");
        assert_eq!(state.outcome, MatchOutcome::Unmatched);
        assert!(take(&log).is_empty());
        assert_eq!(router.mounted_components(), vec!["NotFoundPage"]);

        let state = router.navigate("//logs").unwrap();
        assert_eq!(state.path, "/logs");
        assert!(state.outcome.is_matched());
        assert_eq!(take(&log), vec!["mount Main", "mount Logs"]);
    }

    #[test]
    fn test_foreign_origin_rejected() {
        let (mut router, history, log) = fixture("/");
        router.sync(NavigationSource::Initial);
        take(&log);

        assert!(matches!(
            router.navigate("https://evil.example/logs"),
            Err(LocationError::ForeignOrigin { .. })
        ));
        assert!(take(&log).is_empty());
        assert_eq!(history.entries(), vec!["/"]);
    }

    #[test]
    fn test_same_path_with_unnormalised_entry_is_noop() {
        let (mut router, history, log) = fixture("/logs/");
        router.sync(NavigationSource::Initial);
        take(&log);

        router.navigate("/logs").unwrap();

        assert!(take(&log).is_empty());
        assert_eq!(history.entries(), vec!["/logs/"]);
    }

    #[test]
    fn test_custom_not_found_page() {
        let (router, _, log) = fixture("/missing");
        let mut router = router.with_not_found(probe("Missing", false, &log));
        router.sync(NavigationSource::Initial);

        assert_eq!(take(&log), vec!["mount Missing"]);
        assert_eq!(router.mounted_components(), vec!["Missing"]);
        assert_eq!(router.render().to_html(), "<div data-probe=\"Missing\"></div>");
    }

    #[test]
    fn test_phase_returns_to_idle() {
        let (mut router, _, _) = fixture("/");
        router.navigate("/nowhere").unwrap();
        assert_eq!(router.phase(), &RouterPhase::Idle("/nowhere".into()));
    }

    #[test]
    fn test_teardown_unmounts_deepest_first() {
        let (mut router, _, log) = fixture("/");
        router.sync(NavigationSource::Initial);
        take(&log);

        router.teardown();
        assert_eq!(take(&log), vec!["unmount Peers", "unmount Main"]);
        assert!(router.render().is_empty());
    }

    #[test]
    fn test_recovering_from_unmatched() {
        let (mut router, _, log) = fixture("/nope");
        router.sync(NavigationSource::Initial);
        take(&log);

        router.navigate("/").unwrap();
        assert_eq!(take(&log), vec!["mount Main", "mount Peers"]);
        assert_eq!(router.mounted_components(), vec!["Main", "Peers"]);
    }
}
