//! Server-side API backend and business logic.
//!
//! The backend serves read-only siege results over HTTP. It uses Axum as the web framework
//! and SeaORM for database access.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Concurrent lookups, aggregation and missing-data rules
//! - **Data Layer** (`data/`) - Repositories and the `SiegeStore` trait services depend on
//! - **Model Layer** (`model/`) - Domain models converted from entities
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (data store, lookup strategy)
//! - **Startup** (`startup`) - Database connection, migrations and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** parses the siege id and calls a service
//! 3. **Service** queries the store, concurrently where lookups are independent
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
