//! Core domain layer for Fraglet.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All templating, rendering, and HTTP concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No engine types**: context values are plain `serde_json` maps
//! - **Immutable value objects**: `AssetSpec` is Clone + PartialEq

pub mod asset_spec;
pub mod error;
pub mod system_values;

pub use asset_spec::AssetSpec;
pub use error::{DomainError, ErrorCategory};
pub use system_values::SystemValues;

use std::collections::BTreeMap;
use std::sync::Arc;

/// Caller-supplied context variables for a render.
///
/// On key collision with system values, caller keys win.
pub type ContextMap = BTreeMap<String, serde_json::Value>;

/// Lazily-evaluated CSRF token accessor bound to a request.
///
/// Carried outside the JSON context because it is a callable, not a value;
/// engine adapters expose it to templates as a function named
/// `get_csrf_token`.
pub type CsrfTokenFn = Arc<dyn Fn() -> String + Send + Sync>;
