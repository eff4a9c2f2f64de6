//! Metrics collection.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): navigation cycles by outcome
//! - `shell_mounts_total` (counter): component mounts by component name

/// Record one completed navigation cycle.
pub fn record_navigation(outcome: &'static str) {
    ::metrics::counter!("shell_navigations_total", "outcome" => outcome).increment(1);
}

/// Record one component entering the mounted tree.
pub fn record_mount(component: &str) {
    ::metrics::counter!("shell_mounts_total", "component" => component.to_string()).increment(1);
}
