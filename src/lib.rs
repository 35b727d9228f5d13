//! # Alpscout - AI Research Engine for Mountain Tourism Locations
//!
//! Alpscout queries a generative text model to produce structured
//! tourism-location reports and tag sets, then coerces the model's
//! loosely-formatted output into strict, schema-conformant data for a
//! downstream admin application.
//!
//! The core is the AI-response normalization pipeline:
//!
//! - **Prompt construction** ([`prompt`]): enumerated modes, one template per
//!   variant, all demanding JSON-only output.
//! - **Model invocation** ([`invoker`]): the `ModelInvoker` seam with a
//!   Gemini implementation, tagged error variants and an explicit deadline.
//! - **Sanitization** ([`sanitize`]): best-effort JSON extraction from noisy
//!   model text - fence stripping, brace slicing, trailing-comma repair.
//! - **Orchestration** ([`pipeline`]): drives every request to a uniform
//!   success/error envelope; failures are classified, never thrown past the
//!   boundary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alpscout::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = AppConfig::from_env()?;
//!     alpscout::server::serve(config).await
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod diaglog;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod invoker;
pub mod pipeline;
pub mod prompt;
pub mod sanitize;
pub mod server;
pub mod types;

pub use envelope::ApiEnvelope;
pub use error::{AiError, ErrorCategory};
pub use invoker::{GeminiInvoker, InvokeOptions, ModelInvoker};
pub use pipeline::Pipeline;
pub use sanitize::sanitize;
