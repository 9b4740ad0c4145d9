use listing_advisor::advisor::taxonomy::{Condition, Involvement, Timeline};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_timeline(raw: &str) -> Result<Timeline, String> {
    raw.trim()
        .parse()
        .map_err(|err| format!("{err} (expected one of: fast, standard, flexible)"))
}

pub(crate) fn parse_involvement(raw: &str) -> Result<Involvement, String> {
    raw.trim()
        .parse()
        .map_err(|err| format!("{err} (expected one of: minimal, moderate, high)"))
}

pub(crate) fn parse_condition(raw: &str) -> Result<Condition, String> {
    raw.trim()
        .parse()
        .map_err(|err| format!("{err} (expected one of: needs_work, marketable, showcase)"))
}
