//! # triang_report: Flight Enumeration and Datasheet Rendering
//!
//! ## Layer 3 (Reporting) Role
//!
//! triang_report consumes the sampler's draws wholesale and renders the
//! two-view datasheet:
//! - `flight`: the enumeration pass assigning flight ids and global pour
//!   serials
//! - `datasheet`: the two rendering passes (flight listing and reverse
//!   sample index)
//!
//! ## Usage Example
//!
//! ```rust
//! use triang_core::types::Draw;
//! use triang_report::Datasheet;
//!
//! let draws = vec![
//!     Draw::new(vec!["B".into(), "D".into(), "A".into()]),
//!     Draw::new(vec!["C".into(), "A".into(), "D".into()]),
//! ];
//!
//! let text = Datasheet::build(&draws);
//! assert!(text.starts_with("1.\t1:B\t2:D\t3:A\t\n"));
//! assert!(text.contains("A:\t3 5 \n"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod datasheet;
pub mod flight;


pub use datasheet::Datasheet;
pub use flight::{enumerate_flights, Flight, SampleOccurrence};
