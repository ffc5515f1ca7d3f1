//! HTTP server module for the coastrisk backend.
//!
//! This module provides an axum-based HTTP server that exposes the risk
//! assessment core as a REST API for the web frontend. It reuses the service
//! layer and the model store from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and coordinate validation              │
//! │  - Session registry, JSON serialization                   │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Navigation state machine                               │
//! │  - Risk evaluation and aggregation                        │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Model Store (store/)                                     │
//! │  - Pre-trained artifacts loaded at startup                │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod sessions;
pub mod state;

pub use router::create_router;
pub use state::AppState;
