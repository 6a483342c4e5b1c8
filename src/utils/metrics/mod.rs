//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines system gauges and the request, classification, upstream and
//!   completion metrics of the service.

pub mod server;
use lazy_static::lazy_static;
use prometheus::{
	Encoder, Gauge, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
	TextEncoder,
};
use sysinfo::System;

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Gauge for CPU usage percentage.
	pub static ref CPU_USAGE: Gauge = {
	  let gauge = Gauge::new("cpu_usage_percentage", "Current CPU usage percentage").unwrap();
	  REGISTRY.register(Box::new(gauge.clone())).unwrap();
	  gauge
	};

	// Gauge for memory usage in bytes.
	pub static ref MEMORY_USAGE: Gauge = {
		let gauge = Gauge::new("memory_usage_bytes", "Memory usage in bytes").unwrap();
		REGISTRY.register(Box::new(gauge.clone())).unwrap();
		gauge
	};

	// Gauge for total memory in bytes.
	pub static ref TOTAL_MEMORY: Gauge = {
	  let gauge = Gauge::new("total_memory_bytes", "Total memory in bytes").unwrap();
	  REGISTRY.register(Box::new(gauge.clone())).unwrap();
	  gauge
	};

	// API responses by route and HTTP status.
	pub static ref API_RESPONSES: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("api_responses_total", "API responses by route and status"),
			&["route", "status"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Classification outcomes by input kind and resolved chain ("undetermined" when none).
	pub static ref CLASSIFICATIONS: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("classifications_total", "Classification outcomes"),
			&["kind", "outcome"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Verification results per chain.
	pub static ref VERIFICATIONS: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("verifications_total", "Hash verification results per chain"),
			&["chain", "confirmed"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Tie-breaks where more than one chain confirmed the same hash.
	pub static ref AMBIGUOUS_CLASSIFICATIONS: IntCounter = {
		let counter = IntCounter::new(
			"ambiguous_classifications_total",
			"Hashes confirmed on more than one chain"
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Failed transaction fetches per chain.
	pub static ref UPSTREAM_FETCH_FAILURES: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("upstream_fetch_failures_total", "Failed transaction fetches per chain"),
			&["chain"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Completion latency by generation kind.
	pub static ref COMPLETION_DURATION: HistogramVec = {
		let histogram = HistogramVec::new(
			HistogramOpts::new("completion_duration_seconds", "Text completion latency")
				.buckets(vec![0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0]),
			&["kind", "outcome"]
		).unwrap();
		REGISTRY.register(Box::new(histogram.clone())).unwrap();
		histogram
	};
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}

/// Updates the system metrics for CPU and memory usage.
pub fn update_system_metrics() {
	let mut sys = System::new_all();
	sys.refresh_all();

	CPU_USAGE.set(sys.global_cpu_usage() as f64);
	TOTAL_MEMORY.set(sys.total_memory() as f64);
	MEMORY_USAGE.set(sys.used_memory() as f64);
}
