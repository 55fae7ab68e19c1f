// Copyright 2023 The AppSvc CLI Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! AppSvc Tools - Admin CLI for hosted Kafka instances and connectors
//!
//! This crate provides both:
//! - **Core**: Reusable business logic (consumer group lookup, connector add-on parameters)
//! - **CLI**: Command-line interface with formatting and validation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        CLI Layer (commands/, cli/)      │
//! │  - Command parsing (clap)               │
//! │  - Report rendering (render, tabled)    │
//! │  - Input validation (validators)        │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │         Core Logic (core/)              │
//! │  - Consumer group describe + classify   │
//! │  - Connector operations                 │
//! │  - Connection and context               │
//! └─────────────────┬───────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────┐
//! │        REST clients (admin/)            │
//! │  - Kafka management API                 │
//! │  - Kafka instance admin API             │
//! │  - Connector management API             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ## As a Library (using core)
//!
//! ```rust,ignore
//! use appsvc_tools::cli::formatters::OutputFormat;
//! use appsvc_tools::cli::render::render_consumer_group;
//! use appsvc_tools::core::admin::ConnectionBuilder;
//! use appsvc_tools::core::consumer_group::ConsumerGroupService;
//!
//! let connection = ConnectionBuilder::new().access_token(token).build()?;
//! let (admin, instance) = connection.kafka_admin("c9abc").await?;
//! let group = ConsumerGroupService::describe(&admin, &instance, "orders").await?;
//! render_consumer_group(&group, OutputFormat::Table, &mut std::io::stdout())?;
//! ```
//!
//! ## As a CLI Tool
//!
//! ```bash
//! appsvc-admin-cli kafka consumer-group describe --instance-id c9abc --id orders -o json
//! ```

// Core business logic - reusable across different interfaces
pub mod core {
    //! Core business logic module
    //!
    //! Independent of any presentation concern: no printing, no process exit.
    //!
    //! - [`admin`] - Connection builder and API client factory
    //! - [`consumer_group`] - Consumer group describe and error classification
    //! - [`connector`] - Connector cluster operations
    //! - [`context`] - Per-invocation configuration context

    pub mod admin;
    pub mod connector;
    pub mod consumer_group;
    pub mod context;

    pub use appsvc_error::AppSvcError;
    pub use appsvc_error::AppSvcResult;
    pub use appsvc_error::ToolsError;
}

// CLI presentation layer
pub mod cli {
    //! CLI presentation layer
    //!
    //! - [`formatters`] - Output formatters (JSON, YAML, Table)
    //! - [`render`] - Consumer group report
    //! - [`validators`] - Input validators

    pub mod formatters;
    pub mod render;
    pub mod validators;
}

// UI utilities for terminal output
pub mod ui;

// REST API clients
pub mod admin;

pub(crate) mod commands;

// CLI entry point
pub mod appsvc_cli;
