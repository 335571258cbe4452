//! In-process counter registry with Prometheus text exposition.
//!
//! Counters carry dynamic labels backed by `DashMap`. Labels are flattened
//! into sorted key vectors, and `render` sorts families by name and series by
//! label set, so a scrape always sees a deterministic snapshot.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Map a metric name onto the exposition charset (`[a-zA-Z0-9_:]`, no leading
/// digit). Dotted names like `http.req.counter` become `http_req_counter`.
fn sanitize_name(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == ':' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn format_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Monotonic counter family with dynamic labels.
///
/// One atomic cell per unique label combination, created lazily on first use
/// and kept for the life of the process.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary non-negative delta.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let cell = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        cell.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for a label combination (0 if never incremented).
    pub fn value(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Number of distinct label combinations seen so far.
    pub fn series(&self) -> usize {
        self.map.len()
    }

    /// Render in Prometheus text exposition format, series sorted by label set.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| (format_labels(r.key()), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (labels, val) in rows {
            if labels.is_empty() {
                let _ = writeln!(out, "{} {}", name, val);
            } else {
                let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
            }
        }
    }
}

/// Process-wide counter registry.
///
/// Created once at startup and injected by handle; tests build isolated
/// instances instead of sharing a global.
#[derive(Default)]
pub struct Registry {
    counters: DashMap<String, Arc<CounterVec>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to a named counter family, created if absent. Names are
    /// sanitized on registration, so repeat lookups with the raw name return
    /// the same family.
    pub fn counter(&self, name: &str) -> Arc<CounterVec> {
        let name = sanitize_name(name);
        let entry = self.counters.entry(name.clone()).or_insert_with(|| {
            tracing::debug!(%name, "registered counter family");
            Arc::new(CounterVec::default())
        });
        Arc::clone(entry.value())
    }

    /// Deterministic text snapshot of all counters, families in name order.
    pub fn render(&self) -> String {
        let mut names: Vec<String> = self.counters.iter().map(|r| r.key().clone()).collect();
        names.sort();

        let mut out = String::new();
        for name in names {
            if let Some(counter) = self.counters.get(&name) {
                counter.render(&name, &mut out);
            }
        }
        out
    }
}
