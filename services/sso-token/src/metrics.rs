//! Prometheus metrics for token issuance.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, register_histogram_vec, CounterVec, HistogramVec};

/// Tokens issued counter.
pub static TOKENS_ISSUED: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "sso_token_tokens_issued_total",
        "Total number of SSO handoff tokens issued",
        &["algorithm"]
    )
    .expect("Failed to register tokens_issued metric")
});

/// Mint failures counter.
pub static MINT_FAILURES: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "sso_token_mint_failures_total",
        "Total number of failed mint operations",
        &["kind"]
    )
    .expect("Failed to register mint_failures metric")
});

/// Mint operation latency histogram.
pub static MINT_LATENCY: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "sso_token_mint_latency_seconds",
        "Mint operation latency in seconds",
        &["status"],
        vec![0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25]
    )
    .expect("Failed to register mint_latency metric")
});

/// Record a token issuance.
pub fn record_token_issued(algorithm: &str) {
    TOKENS_ISSUED.with_label_values(&[algorithm]).inc();
}

/// Record a failed mint operation.
pub fn record_mint_failure(kind: &str) {
    MINT_FAILURES.with_label_values(&[kind]).inc();
}

/// Record mint operation latency.
pub fn record_mint_latency(status: &str, duration_secs: f64) {
    MINT_LATENCY
        .with_label_values(&[status])
        .observe(duration_secs);
}
