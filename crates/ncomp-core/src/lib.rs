//! ncomp Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the `ncomp` component scaffolder,
//! following the ports and adapters architecture.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             ncomp-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Application Services                  │
//! │   (ScaffoldService, Renderer)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   Ports (Filesystem, TemplateStore,     │
//! │   CodeFormatter, ProgressReporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   ncomp-adapters (Infrastructure)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ncomp_core::prelude::*;
//!
//! let service = ScaffoldService::new(store, filesystem, formatter, FormatRules::default());
//! let request = ComponentRequest::new(
//!     "Widget",
//!     "./src",
//!     ComponentType::Functional,
//!     LanguageFlavor::Script,
//! );
//! let result = service.scaffold(&request)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService,
        ports::{
            CodeFormatter, Filesystem, ProgressReporter, ScaffoldEvent, SilentProgress,
            TemplateStore,
        },
    };
    pub use crate::domain::{
        ComponentRequest, ComponentType, EffectiveConfig, FormatRules, LanguageFlavor,
        ScaffoldResult, Template, TemplateKey,
    };
    pub use crate::error::{NcompError, NcompResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
