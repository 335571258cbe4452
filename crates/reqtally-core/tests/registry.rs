//! Counter registry behavior tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use reqtally_core::metrics::Registry;

#[test]
fn counter_handles_share_state() {
    let reg = Registry::new();
    let a = reg.counter("requests");
    let b = reg.counter("requests");

    a.inc(&[("uri", "/hello")]);
    a.inc(&[("uri", "/hello")]);

    assert_eq!(b.value(&[("uri", "/hello")]), 2);
}

#[test]
fn names_are_sanitized_for_exposition() {
    let reg = Registry::new();
    let c = reg.counter("http.req.counter");
    c.inc(&[("uri", "/hello")]);

    let out = reg.render();
    assert!(out.contains("# TYPE http_req_counter counter"));
    assert!(out.contains("http_req_counter{uri=\"/hello\"} 1"));
    assert!(!out.contains("http.req.counter"));

    // raw and sanitized names resolve to the same family
    let same = reg.counter("http_req_counter");
    assert_eq!(same.value(&[("uri", "/hello")]), 1);
}

#[test]
fn leading_digit_gets_prefixed() {
    let reg = Registry::new();
    reg.counter("2xx_total").inc(&[]);
    assert!(reg.render().contains("_2xx_total 1"));
}

#[test]
fn empty_label_set_renders_bare_name() {
    let reg = Registry::new();
    reg.counter("boots_total").add(&[], 3);

    let out = reg.render();
    assert!(out.contains("boots_total 3\n"));
    assert!(!out.contains("boots_total{"));
}

#[test]
fn label_values_are_escaped() {
    let reg = Registry::new();
    let c = reg.counter("odd_labels");
    c.inc(&[("uri", "/a\"b\\c\nd")]);

    let out = reg.render();
    assert!(out.contains("odd_labels{uri=\"/a\\\"b\\\\c\\nd\"} 1"));
}

#[test]
fn one_series_per_distinct_label_set() {
    let reg = Registry::new();
    let c = reg.counter("requests");
    c.inc(&[("uri", "/hello")]);
    c.inc(&[("uri", "/hello")]);
    c.inc(&[("uri", "/echo")]);

    assert_eq!(c.series(), 2);
    assert_eq!(c.value(&[("uri", "/hello")]), 2);
    assert_eq!(c.value(&[("uri", "/echo")]), 1);
}

#[test]
fn label_order_does_not_split_series() {
    let reg = Registry::new();
    let c = reg.counter("requests");
    c.inc(&[("uri", "/x"), ("method", "GET")]);
    c.inc(&[("method", "GET"), ("uri", "/x")]);

    assert_eq!(c.series(), 1);
    assert_eq!(c.value(&[("uri", "/x"), ("method", "GET")]), 2);
}

#[test]
fn render_is_sorted_and_deterministic() {
    let reg = Registry::new();
    let c = reg.counter("zeta_total");
    c.inc(&[("uri", "/b")]);
    c.inc(&[("uri", "/a")]);
    reg.counter("alpha_total").inc(&[]);

    let out = reg.render();
    assert_eq!(out, reg.render());

    let alpha = out.find("# TYPE alpha_total").unwrap();
    let zeta = out.find("# TYPE zeta_total").unwrap();
    assert!(alpha < zeta);

    let a = out.find("zeta_total{uri=\"/a\"} 1").unwrap();
    let b = out.find("zeta_total{uri=\"/b\"} 1").unwrap();
    assert!(a < b);
}

#[test]
fn concurrent_adds_do_not_lose_updates() {
    let reg = Registry::new();
    let c = reg.counter("hot");

    let threads: u64 = 8;
    let per_thread: u64 = 10_000;
    let mut joins = Vec::new();
    for _ in 0..threads {
        let c = Arc::clone(&c);
        joins.push(thread::spawn(move || {
            for _ in 0..per_thread {
                c.inc(&[("uri", "/hello")]);
            }
        }));
    }
    for j in joins {
        j.join().unwrap();
    }

    assert_eq!(c.value(&[("uri", "/hello")]), threads * per_thread);
}

#[test]
fn add_accumulates_delta() {
    let reg = Registry::new();
    let c = reg.counter("bytes_total");
    c.add(&[("dir", "rx")], 100);
    c.add(&[("dir", "rx")], 23);
    assert_eq!(c.value(&[("dir", "rx")]), 123);
}
