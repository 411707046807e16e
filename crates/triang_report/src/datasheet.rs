//! Two-view datasheet rendering.
//!
//! This module renders the enumerated flights into the printable
//! datasheet: the flight listing (View A), an 80-dash rule, and the
//! reverse sample index (View B). Rendering is a pure function of the
//! enumerated structure; no I/O happens here.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use triang_core::types::Draw;

use crate::flight::{enumerate_flights, Flight};

/// Width of the rule separating the two views.
pub const RULE_WIDTH: usize = 80;

/// Two-view triangulation datasheet.
///
/// Holds the enumerated flights and renders them as text. The rendered
/// format follows the historical datasheet layout byte-for-byte: flight
/// lines carry a trailing tab before the newline and index lines a
/// trailing space, so regression diffs against archived sheets stay
/// clean.
///
/// # Examples
///
/// ```rust
/// use triang_core::types::Draw;
/// use triang_report::Datasheet;
///
/// let draws = vec![Draw::new(vec!["A".into(), "C".into(), "B".into()])];
/// let sheet = Datasheet::from_draws(&draws);
///
/// assert_eq!(sheet.flights().len(), 1);
/// let text = sheet.render();
/// assert!(text.contains("1.\t1:A\t2:C\t3:B\t"));
/// ```
#[derive(Clone, Debug)]
pub struct Datasheet {
    /// Enumerated flights in ascending id order.
    flights: Vec<Flight>,
}

impl Datasheet {
    /// Creates a datasheet by enumerating the given draws.
    #[inline]
    pub fn from_draws(draws: &[Draw]) -> Self {
        Self {
            flights: enumerate_flights(draws),
        }
    }

    /// Creates a datasheet from already-enumerated flights.
    #[inline]
    pub fn from_flights(flights: Vec<Flight>) -> Self {
        Self { flights }
    }

    /// Returns the enumerated flights.
    #[inline]
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Enumerates and renders in one step.
    ///
    /// Convenience for callers that do not need the intermediate
    /// [`Flight`] structure.
    #[inline]
    pub fn build(draws: &[Draw]) -> String {
        Self::from_draws(draws).render()
    }

    /// Renders the two-view datasheet text.
    ///
    /// An empty flight list degrades to the bare rule between two empty
    /// views rather than failing.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out)
            .expect("writing to a String cannot fail");
        out
    }

    /// Writes both views and the separating rule to any `fmt::Write`
    /// sink.
    fn write<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.write_flights(out)?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        self.write_sample_index(out)
    }

    /// View A: one line per flight, samples in selection order.
    fn write_flights<W: Write>(&self, out: &mut W) -> fmt::Result {
        for flight in &self.flights {
            write!(out, "{}.\t", flight.id)?;
            for sample in &flight.samples {
                write!(out, "{}:{}\t", sample.serial, sample.name)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// View B: serials grouped by sample name, keys in ascending
    /// lexicographic order.
    ///
    /// Within a group, serials keep enumeration-encounter order (which
    /// is already ascending) rather than being re-sorted numerically.
    fn write_sample_index<W: Write>(&self, out: &mut W) -> fmt::Result {
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for flight in &self.flights {
            for sample in &flight.samples {
                groups.entry(&sample.name).or_default().push(sample.serial);
            }
        }

        for (name, serials) in &groups {
            write!(out, "{}:\t", name)?;
            for serial in serials {
                write!(out, "{} ", serial)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
