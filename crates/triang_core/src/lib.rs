//! # triang_core: Domain Foundation for the Triangle-Test Flight Generator
//!
//! ## Layer 1 (Foundation) Role
//!
//! triang_core serves as the bottom layer of the workspace, providing:
//! - Sample pool and draw types (`types::pool`, `types::draw`)
//! - Draw-size constants shared by every layer (`types`)
//! - Error types: `PoolError`, `ConfigError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other triang_* crates, with minimal
//! external dependencies:
//! - thiserror: Structured error derives
//! - serde: Serialisation support for domain types
//!
//! ## Usage Examples
//!
//! ```rust
//! use triang_core::types::{SamplePool, DRAW_SIZE};
//!
//! let pool = SamplePool::new(vec![
//!     "Amber".to_string(),
//!     "Brown".to_string(),
//!     "Citra".to_string(),
//!     "Dunkel".to_string(),
//! ])
//! .unwrap();
//!
//! assert_eq!(pool.len(), 4);
//! assert_eq!(DRAW_SIZE, 3);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
