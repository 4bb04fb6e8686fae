//! Record sources and sample types for hydrate.
//!
//! These are the collaborators around the materialization core: adapters
//! that turn already-parsed data into [`Record`](hydrate_core::Record)s,
//! the sample type family, and the backend profiles that pair each consumer
//! with its construction policy.
//!
//! # Example
//!
//! ```rust
//! use hydrate_core::Engine;
//! use hydrate_sources::{Backend, catalog};
//!
//! let descriptor = catalog::default_only()?;
//! let backend = Backend::Table;
//! let record = backend.sample_record()?;
//!
//! let instance = Engine::new().run(&descriptor, &record, backend.policy())?;
//! assert_eq!(instance.value(catalog::FULL_PROP), Some("vbn"));
//! # Ok::<(), hydrate_sources::Error>(())
//! ```

mod backend;
pub mod catalog;
mod error;
pub mod json;
mod table;

pub use backend::Backend;
pub use error::{Error, Result};
pub use table::Table;
