//! # Utab Architecture
//!
//! Utab is a **UI-agnostic data-view library** for a remote read-only user
//! directory, with a console client as the shipped surface. The same core
//! could back a browser surface—nothing below the CLI layer knows about a
//! terminal.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the SessionState                      │
//! │  - Resolves route tokens, drives fetches, dispatches to     │
//! │    engines, returns structured Result types                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (commands/*.rs)                               │
//! │  - Pure functions over in-memory records: filter, sort,     │
//! │    aggregate, export                                        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Fetch Boundary (client.rs)                                 │
//! │  - Abstract UserSource trait                                │
//! │  - HttpSource (production), StaticSource (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, engines, state), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## State Model
//!
//! [`state::SessionState`] owns the most recently fetched full set (the
//! cache, replaced wholesale on refetch) and the active [`state::ViewState`]
//! (sort key, direction, filtered subset). Each navigation starts a new
//! epoch; a fetch result tagged with a superseded epoch is discarded rather
//! than clobbering a newer view.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Pure engines: filter, sort, stats, export, list pipeline
//! - [`client`]: Upstream fetch boundary behind the `UserSource` trait
//! - [`route`]: Location-token resolver (list / detail / not-found)
//! - [`state`]: Session and view state, navigation epochs
//! - [`model`]: The normalized `User` record with nested address/company
//! - [`config`]: Configuration (upstream base URL)
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod route;
pub mod state;
