//! Metrics registration
//!
//! Prometheus metric descriptions with standardized naming conventions.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, Unit};

/// Metrics prefix for all LabArchive metrics
pub const METRICS_PREFIX: &str = "labarchive";

/// Register all metric descriptions
pub fn register_metrics() {
    // Request metrics
    describe_counter!(
        format!("{}_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of HTTP requests"
    );

    describe_histogram!(
        format!("{}_request_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "HTTP request latency in seconds"
    );

    // Search metrics
    describe_counter!(
        format!("{}_paper_searches_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of paper search queries"
    );

    describe_gauge!(
        format!("{}_paper_search_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of results returned from the last search"
    );

    // Mutation metrics
    describe_counter!(
        format!("{}_papers_created_total", METRICS_PREFIX),
        Unit::Count,
        "Total papers created"
    );

    describe_counter!(
        format!("{}_papers_deleted_total", METRICS_PREFIX),
        Unit::Count,
        "Total papers deleted"
    );

    describe_counter!(
        format!("{}_projects_created_total", METRICS_PREFIX),
        Unit::Count,
        "Total projects created"
    );

    describe_counter!(
        format!("{}_users_created_total", METRICS_PREFIX),
        Unit::Count,
        "Total users created"
    );

    // Auth metrics
    describe_counter!(
        format!("{}_logins_total", METRICS_PREFIX),
        Unit::Count,
        "Total successful logins"
    );

    describe_counter!(
        format!("{}_login_failures_total", METRICS_PREFIX),
        Unit::Count,
        "Total rejected login attempts"
    );
}

/// Metric name helper
pub fn name(suffix: &str) -> String {
    format!("{}_{}", METRICS_PREFIX, suffix)
}

/// Record a login attempt outcome
pub fn record_login(success: bool) {
    if success {
        counter!(name("logins_total")).increment(1);
    } else {
        counter!(name("login_failures_total")).increment(1);
    }
}

/// Record a paper search and how many results it returned
pub fn record_search(result_count: usize) {
    counter!(name("paper_searches_total")).increment(1);
    gauge!(name("paper_search_results_count")).set(result_count as f64);
}

/// Record a created entity by kind ("papers", "projects", "users")
pub fn record_created(kind: &'static str) {
    counter!(format!("{}_{}_created_total", METRICS_PREFIX, kind)).increment(1);
}

/// Record a deleted paper
pub fn record_paper_deleted() {
    counter!(name("papers_deleted_total")).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_name() {
        assert_eq!(name("logins_total"), "labarchive_logins_total");
    }
}
