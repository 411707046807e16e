//! Flight enumeration.
//!
//! This module provides the single enumeration pass that turns raw draws
//! into display-ready flights: each draw receives a sequential 1-based
//! flight id, and each individual pour receives a globally unique serial
//! number assigned in flight order, then within-flight order.

use serde::Serialize;

use triang_core::types::Draw;

/// One poured sample on the datasheet.
///
/// Binds the globally unique serial number to the sample name it rendered.
/// Serials start at 1 and increase strictly with no gaps or reuse across
/// the whole datasheet; they never reset per flight. The serial is what
/// cross-references the flight listing with the reverse sample index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SampleOccurrence {
    /// Globally unique, strictly increasing serial number (1-based).
    pub serial: usize,
    /// Sample name as it appears in the pool.
    pub name: String,
}

/// One participant's draw tagged with its display identifier.
///
/// Flight ids are 1-based and increase by one in draw order. The wrapped
/// occurrences keep the draw's selection order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flight {
    /// Sequential 1-based flight identifier.
    pub id: usize,
    /// Poured samples in selection order.
    pub samples: Vec<SampleOccurrence>,
}

/// Enumerates draws into flights with global pour serials.
///
/// This is the single enumeration pass: draws are walked in order and
/// assigned ids 1, 2, 3, ...; within each draw the names are walked in
/// selection order and each receives the next serial, starting at 1.
///
/// # Examples
///
/// ```rust
/// use triang_core::types::Draw;
/// use triang_report::enumerate_flights;
///
/// let draws = vec![Draw::new(vec!["A".into(), "B".into(), "C".into()])];
/// let flights = enumerate_flights(&draws);
///
/// assert_eq!(flights[0].id, 1);
/// assert_eq!(flights[0].samples[2].serial, 3);
/// ```
pub fn enumerate_flights(draws: &[Draw]) -> Vec<Flight> {
    let mut serial = 0;
    draws
        .iter()
        .enumerate()
        .map(|(index, draw)| Flight {
            id: index + 1,
            samples: draw
                .names()
                .iter()
                .map(|name| {
                    serial += 1;
                    SampleOccurrence {
                        serial,
                        name: name.clone(),
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(raw: &[&str]) -> Draw {
        Draw::new(raw.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_flight_ids_are_sequential_from_one() {
        let draws = vec![
            draw(&["A", "B", "C"]),
            draw(&["B", "C", "D"]),
            draw(&["D", "A", "B"]),
        ];
        let flights = enumerate_flights(&draws);

        let ids: Vec<usize> = flights.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_serials_are_global_and_gapless() {
        let draws = vec![draw(&["A", "B", "C"]), draw(&["B", "C", "D"])];
        let flights = enumerate_flights(&draws);

        let serials: Vec<usize> = flights
            .iter()
            .flat_map(|f| f.samples.iter().map(|s| s.serial))
            .collect();
        assert_eq!(serials, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_names_keep_selection_order() {
        let draws = vec![draw(&["C", "A", "B"])];
        let flights = enumerate_flights(&draws);

        let names: Vec<&str> = flights[0]
            .samples
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_names_get_distinct_serials() {
        let draws = vec![draw(&["A", "A", "B"])];
        let flights = enumerate_flights(&draws);

        assert_eq!(flights[0].samples[0].name, "A");
        assert_eq!(flights[0].samples[1].name, "A");
        assert_ne!(flights[0].samples[0].serial, flights[0].samples[1].serial);
    }

    #[test]
    fn test_empty_draws_enumerate_to_nothing() {
        assert!(enumerate_flights(&[]).is_empty());
    }

    use proptest::prelude::*;

    proptest! {
        /// Property test: serial numbering spans exactly 3 x draws with
        /// no gaps, starting at 1, for any draw count.
        #[test]
        fn prop_serial_span(n in 0..60usize) {
            let draws: Vec<Draw> = (0..n)
                .map(|i| {
                    Draw::new(vec![
                        format!("S{}", i),
                        format!("T{}", i),
                        format!("U{}", i),
                    ])
                })
                .collect();
            let flights = enumerate_flights(&draws);

            let serials: Vec<usize> = flights
                .iter()
                .flat_map(|f| f.samples.iter().map(|s| s.serial))
                .collect();
            let expected: Vec<usize> = (1..=3 * n).collect();
            prop_assert_eq!(serials, expected);
        }
    }
}
