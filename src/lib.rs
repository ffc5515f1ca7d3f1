//! # Coastrisk Backend
//!
//! Coastal risk assessment engine for the interactive risk predictor frontend.
//!
//! This crate evaluates two pre-trained predictive signals for a geographic
//! coordinate (a continuous tide risk score and a categorical coastal flood
//! risk label) and combines them into a structured risk report. The frontend
//! (map widget, coordinate form, styling) is an external collaborator; this
//! crate exposes the session navigation and risk classification logic behind
//! a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (coordinates, risk bands, reports, sessions)
//! - [`store`]: File-based model store for the pre-trained artifacts
//! - [`services`]: Risk evaluation, page navigation, and assessment logic
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Model signals
//!
//! Either model artifact may be absent or fail at invocation time. A degraded
//! signal is reported as unavailable alongside the healthy one; only the
//! absence of both models blocks interaction entirely.

pub mod models;

pub mod services;

pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
