//! Unit tests for fl-route.
//!
//! All tests use hand-crafted or seeded-random tables so they run without
//! any data files.

#[cfg(test)]
mod helpers {
    use fl_core::AddressIdx;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use crate::{AddressBook, DistanceOracle, DistanceTable};

    /// Depot plus three stops.
    ///
    /// ```text
    ///        depot  A    B    C
    /// depot    0    3    4    2
    /// A        3    0    2    5
    /// B        4    2    0    1
    /// C        2    5    1    0
    /// ```
    ///
    /// From the depot the greedy order is C (2), B (1), A (2); back home 3.
    pub fn diamond() -> DistanceOracle {
        let table = DistanceTable::from_rows(vec![
            vec![0.0, 3.0, 4.0, 2.0],
            vec![3.0, 0.0, 2.0, 5.0],
            vec![4.0, 2.0, 0.0, 1.0],
            vec![2.0, 5.0, 1.0, 0.0],
        ])
        .unwrap();
        let mut book = AddressBook::new();
        book.insert(AddressIdx(0), "Hub", "4001 South 700 East").unwrap();
        book.insert(AddressIdx(1), "A", "1 A St").unwrap();
        book.insert(AddressIdx(2), "B", "2 B St").unwrap();
        book.insert(AddressIdx(3), "C", "3 C St").unwrap();
        DistanceOracle::new(table, book).unwrap()
    }

    /// Random symmetric table with one-decimal distances (like real mileage
    /// data, which makes ties likely).
    pub fn random_oracle(size: usize, seed: u64) -> DistanceOracle {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut rows = vec![vec![0.0; size]; size];
        for i in 0..size {
            for j in 0..i {
                let d = rng.gen_range(1..100) as f64 / 10.0;
                rows[i][j] = d;
                rows[j][i] = d;
            }
        }
        DistanceOracle::new(DistanceTable::from_rows(rows).unwrap(), AddressBook::new()).unwrap()
    }

    pub fn idx(list: &[u32]) -> Vec<AddressIdx> {
        list.iter().map(|&i| AddressIdx(i)).collect()
    }
}

// ── DistanceTable ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use fl_core::AddressIdx;

    use crate::{DistanceTable, RouteError};

    #[test]
    fn random_table_symmetric_with_zero_diagonal() {
        let oracle = super::helpers::random_oracle(25, 3);
        for i in 0..25u32 {
            assert_eq!(oracle.distance(AddressIdx(i), AddressIdx(i)), 0.0);
            for j in 0..25u32 {
                assert_eq!(
                    oracle.distance(AddressIdx(i), AddressIdx(j)),
                    oracle.distance(AddressIdx(j), AddressIdx(i)),
                );
            }
        }
    }

    #[test]
    fn lower_triangle_is_mirrored() {
        let t = DistanceTable::from_partial_rows(vec![
            vec![Some(0.0)],
            vec![Some(7.2), Some(0.0)],
            vec![Some(3.8), Some(7.1), None],
        ])
        .unwrap();
        assert_eq!(t.size(), 3);
        assert_eq!(t.get(AddressIdx(0), AddressIdx(1)), 7.2);
        assert_eq!(t.get(AddressIdx(1), AddressIdx(2)), 7.1);
        assert_eq!(t.get(AddressIdx(2), AddressIdx(2)), 0.0);
    }

    #[test]
    fn asymmetric_rejected() {
        let err = DistanceTable::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap_err();
        assert!(matches!(err, RouteError::Asymmetric { .. }));
    }

    #[test]
    fn nonzero_diagonal_rejected() {
        let err = DistanceTable::from_rows(vec![vec![0.5]]).unwrap_err();
        assert!(matches!(err, RouteError::NonZeroDiagonal(AddressIdx(0))));
    }

    #[test]
    fn negative_rejected() {
        let err = DistanceTable::from_rows(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, RouteError::InvalidDistance { .. }));
    }

    #[test]
    fn long_row_rejected() {
        let err = DistanceTable::from_rows(vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, RouteError::NotSquare { row: 0, len: 3, size: 2 }));
    }

    #[test]
    fn gap_on_both_sides_rejected() {
        let err = DistanceTable::from_partial_rows(vec![vec![Some(0.0)], vec![None, Some(0.0)]])
            .unwrap_err();
        assert!(matches!(err, RouteError::MissingDistance { .. }));
    }

    #[test]
    fn empty_table() {
        let t = DistanceTable::from_rows(vec![]).unwrap();
        assert!(t.is_empty());
    }
}

// ── AddressBook & oracle construction ─────────────────────────────────────────

#[cfg(test)]
mod addresses {
    use fl_core::{AddressIdx, ErrorKind};

    use crate::{AddressBook, DistanceOracle, DistanceTable, RouteError};

    #[test]
    fn resolve_trims_whitespace() {
        let oracle = super::helpers::diamond();
        assert_eq!(oracle.resolve("  2 B St "), Some(AddressIdx(2)));
        assert_eq!(oracle.require("4001 South 700 East").unwrap(), AddressIdx(0));
    }

    #[test]
    fn unknown_address_is_lookup_miss() {
        let oracle = super::helpers::diamond();
        assert!(oracle.resolve("9 Nowhere Rd").is_none());
        let err = oracle.require("9 Nowhere Rd").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupMiss);
    }

    #[test]
    fn duplicate_address_rejected() {
        let mut book = AddressBook::new();
        book.insert(AddressIdx(0), "Hub", "1 Main").unwrap();
        let err = book.insert(AddressIdx(1), "Other", "1 Main ").unwrap_err();
        assert!(matches!(err, RouteError::DuplicateAddress(_)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn out_of_range_index_rejected() {
        let mut book = AddressBook::new();
        book.insert(AddressIdx(5), "Far", "5 Far Rd").unwrap();
        let table = DistanceTable::from_rows(vec![vec![0.0]]).unwrap();
        let err = DistanceOracle::new(table, book).unwrap_err();
        assert!(matches!(err, RouteError::IndexOutOfRange { size: 1, .. }));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

// ── Nearest neighbor ──────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use fl_core::AddressIdx;

    use super::helpers::{diamond, idx};
    use crate::{AddressBook, DistanceOracle, DistanceTable};

    #[test]
    fn picks_closest() {
        let oracle = diamond();
        let (best, d) = oracle.nearest_unvisited(AddressIdx(0), &idx(&[1, 2, 3]));
        assert_eq!(best, Some(AddressIdx(3)));
        assert_eq!(d, 2.0);
    }

    #[test]
    fn empty_candidates() {
        let oracle = diamond();
        let (best, d) = oracle.nearest_unvisited(AddressIdx(0), &[]);
        assert_eq!(best, None);
        assert!(d.is_infinite());
    }

    #[test]
    fn ties_go_to_first_seen() {
        // 1 and 2 are both 5.0 from 0.
        let table = DistanceTable::from_rows(vec![
            vec![0.0, 5.0, 5.0],
            vec![5.0, 0.0, 1.0],
            vec![5.0, 1.0, 0.0],
        ])
        .unwrap();
        let oracle = DistanceOracle::new(table, AddressBook::new()).unwrap();

        assert_eq!(oracle.nearest_unvisited(AddressIdx(0), &idx(&[1, 2])).0, Some(AddressIdx(1)));
        assert_eq!(oracle.nearest_unvisited(AddressIdx(0), &idx(&[2, 1])).0, Some(AddressIdx(2)));
    }
}

// ── Route building ────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use fl_core::AddressIdx;

    use super::helpers::{diamond, idx, random_oracle};
    use crate::{DistanceOracle, NearestNeighbor, PlannedRoute, RoutePlanner};

    fn leg_sum(oracle: &DistanceOracle, start: AddressIdx, route: &PlannedRoute) -> f64 {
        route.legs(start).map(|(a, b)| oracle.distance(a, b)).sum()
    }

    #[test]
    fn greedy_order_on_diamond() {
        let oracle = diamond();
        // Input order A, B, C (3, 4, 2 from the depot).
        let route = oracle.build_route(AddressIdx(0), &idx(&[1, 2, 3]));
        assert_eq!(route.stops, idx(&[3, 2, 1]));
        assert_eq!(route.total_distance, 5.0);
        assert_eq!(route.end(AddressIdx(0)), AddressIdx(1));
    }

    #[test]
    fn empty_route() {
        let oracle = diamond();
        let route = oracle.build_route(AddressIdx(0), &[]);
        assert!(route.is_empty());
        assert_eq!(route.total_distance, 0.0);
        assert_eq!(route.end(AddressIdx(0)), AddressIdx(0));
        assert_eq!(route.legs(AddressIdx(0)).count(), 0);
    }

    #[test]
    fn duplicates_visited_consecutively() {
        let oracle = diamond();
        let route = oracle.build_route(AddressIdx(0), &idx(&[1, 3, 1, 2]));
        assert_eq!(route.stops, idx(&[3, 2, 1, 1]));
        assert_eq!(route.total_distance, 5.0);
    }

    #[test]
    fn start_in_required_is_visited_first() {
        let oracle = diamond();
        let route = oracle.build_route(AddressIdx(0), &idx(&[2, 0]));
        assert_eq!(route.stops, idx(&[0, 2]));
        assert_eq!(route.total_distance, 4.0);
    }

    #[test]
    fn greedy_is_not_optimal() {
        // Points on a line: start 0 at x=0, A at x=1, B at x=-2, C at x=10.
        // Greedy takes A, doubles back to B, then crosses to C: 1 + 3 + 12.
        // Start → B → A → C is 2 + 3 + 9.
        let table = crate::DistanceTable::from_rows(vec![
            vec![0.0, 1.0, 2.0, 10.0],
            vec![1.0, 0.0, 3.0, 9.0],
            vec![2.0, 3.0, 0.0, 12.0],
            vec![10.0, 9.0, 12.0, 0.0],
        ])
        .unwrap();
        let oracle = DistanceOracle::new(table, crate::AddressBook::new()).unwrap();
        let route = oracle.build_route(AddressIdx(0), &idx(&[1, 2, 3]));
        assert_eq!(route.stops, idx(&[1, 2, 3]));
        assert_eq!(route.total_distance, 16.0);

        let better = PlannedRoute { stops: idx(&[2, 1, 3]), total_distance: 14.0 };
        assert_eq!(leg_sum(&oracle, AddressIdx(0), &better), 14.0);
        assert!(better.total_distance < route.total_distance);
    }

    #[test]
    fn random_routes_complete_and_consistent() {
        for seed in 0..20 {
            let oracle = random_oracle(15, seed);
            // Every index once, a few repeated.
            let mut required: Vec<AddressIdx> = (1..15).map(AddressIdx).collect();
            required.extend(idx(&[4, 4, 9]));

            let route = oracle.build_route(AddressIdx(0), &required);

            let mut got = route.stops.clone();
            let mut want = required.clone();
            got.sort_unstable();
            want.sort_unstable();
            assert_eq!(got, want, "seed {seed}: route must be a permutation");

            let sum = leg_sum(&oracle, AddressIdx(0), &route);
            assert!((sum - route.total_distance).abs() < 1e-9, "seed {seed}");
        }
    }

    #[test]
    fn each_step_is_a_nearest_choice() {
        let oracle = random_oracle(12, 99);
        let required: Vec<AddressIdx> = (1..12).map(AddressIdx).collect();
        let route = oracle.build_route(AddressIdx(0), &required);

        let mut remaining = required.clone();
        let mut current = AddressIdx(0);
        for &stop in &route.stops {
            let (best, _) = oracle.nearest_unvisited(current, &remaining);
            assert_eq!(best, Some(stop));
            let pos = remaining.iter().position(|&r| r == stop).unwrap();
            remaining.remove(pos);
            current = stop;
        }
    }

    #[test]
    fn nearest_neighbor_planner_matches_oracle() {
        let oracle = random_oracle(10, 5);
        let required: Vec<AddressIdx> = (1..10).rev().map(AddressIdx).collect();
        assert_eq!(
            NearestNeighbor.plan(&oracle, AddressIdx(0), &required),
            oracle.build_route(AddressIdx(0), &required),
        );
    }
}

// ── Loaders ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use fl_core::AddressIdx;

    use crate::{RouteError, load_addresses_csv, load_addresses_reader, load_distances_csv, load_distances_reader};

    const ADDRESSES: &str = "\
0,Western Governors University,4001 South 700 East\n\
1,International Peace Gardens,1060 Dalton Ave S\n\
2,Sugar House Park,1330 2100 S\n\
";

    const DISTANCES: &str = "\
0.0\n\
7.2,0.0\n\
3.8,7.1,0.0\n\
";

    #[test]
    fn loads_addresses() {
        let book = load_addresses_reader(Cursor::new(ADDRESSES)).unwrap();
        assert_eq!(book.len(), 3);
        assert_eq!(book.resolve("1330 2100 S"), Some(AddressIdx(2)));
        assert_eq!(book.entries()[1].label, "International Peace Gardens");
    }

    #[test]
    fn loads_lower_triangle() {
        let table = load_distances_reader(Cursor::new(DISTANCES)).unwrap();
        assert_eq!(table.size(), 3);
        assert_eq!(table.get(AddressIdx(0), AddressIdx(2)), 3.8);
        assert_eq!(table.get(AddressIdx(2), AddressIdx(0)), 3.8);
    }

    #[test]
    fn loads_full_square_with_blank_cells() {
        let csv = "0.0,,\n7.2,0.0,\n3.8,7.1,0.0\n";
        let table = load_distances_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.get(AddressIdx(1), AddressIdx(2)), 7.1);
    }

    #[test]
    fn bad_cell_is_parse_error() {
        let csv = "0.0\nfar,0.0\n";
        let err = load_distances_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }

    #[test]
    fn bad_address_index_is_parse_error() {
        let err = load_addresses_reader(Cursor::new("x,Hub,1 Main\n")).unwrap_err();
        assert!(matches!(err, RouteError::Parse(_)));
    }

    #[test]
    fn loads_from_files() {
        let mut a = tempfile::NamedTempFile::new().unwrap();
        a.write_all(ADDRESSES.as_bytes()).unwrap();
        let mut d = tempfile::NamedTempFile::new().unwrap();
        d.write_all(DISTANCES.as_bytes()).unwrap();

        let book = load_addresses_csv(a.path()).unwrap();
        let table = load_distances_csv(d.path()).unwrap();
        let oracle = crate::DistanceOracle::new(table, book).unwrap();
        let hub = oracle.require("4001 South 700 East").unwrap();
        let park = oracle.require("1330 2100 S").unwrap();
        assert_eq!(oracle.distance(hub, park), 3.8);
    }
}
