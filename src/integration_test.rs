#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    type Grid = PlaneGrid<u32, BoundsTable<u32, Plane>>;

    fn grid_with(resolution: i32, objects: &[(u32, f64, f64, f64, f64)]) -> Grid {
        let mut grid = Grid::new(resolution, BoundsTable::new()).unwrap();
        for &(h, cx, cy, hw, hh) in objects {
            grid.model_mut().set(h, Vec2::new(cx, cy), Vec2::new(hw, hh));
            let _ = grid.add(h);
        }
        grid
    }

    #[test]
    fn test_point_in_box_boundary() {
        let grid = grid_with(1, &[(1, 0.0, 0.0, 1.0, 1.0)]);
        let mut results = Vec::new();

        assert_eq!(grid.query_point(Vec2::new(1.0, 1.0), &mut results), 1, "Corner (1,1) is on the closed boundary");
        assert_eq!(results, vec![1], "The box is reported");

        assert_eq!(grid.query_point(Vec2::new(1.0001, 0.0), &mut results), 0, "(1.0001, 0) is outside");
        assert!(results.is_empty(), "Nothing reported outside the box");
    }

    #[test]
    fn test_box_overlap_strictness() {
        // A spans x in [0,2], B spans x in [2,4], same y-range
        let grid = grid_with(1, &[(1, 1.0, 0.0, 1.0, 1.0)]);
        let mut results = Vec::new();
        let found = grid.query_box(Vec2::new(3.0, 0.0), Vec2::new(1.0, 1.0), &mut results);
        assert_eq!(found, 0, "Boxes sharing exactly one edge do not overlap");

        let grid = grid_with(1, &[(1, 1.0, 0.0, 1.0, 1.0), (2, 3.0, 0.0, 1.0, 1.0)]);
        assert_eq!(grid.query_object(1, &mut results), 0, "Object query agrees on shared edges");
    }

    #[test]
    fn test_update_correctness() {
        let mut grid = grid_with(1, &[(1, 0.0, 0.0, 1.0, 1.0)]);
        grid.model_mut().set(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        let _ = grid.update(1);

        let mut results = Vec::new();
        assert_eq!(grid.query_point(Vec2::new(0.0, 0.0), &mut results), 0, "Old location returns empty");
        assert_eq!(grid.query_point(Vec2::new(100.0, 100.0), &mut results), 1, "New location returns the object");
        assert_eq!(results, vec![1], "The moved object is reported");
    }

    #[test]
    fn test_remove_before_contains() {
        let mut grid = grid_with(1, &[(1, 0.0, 0.0, 1.0, 1.0)]);
        let before = grid.len();
        assert!(!grid.remove(7), "Removing a never-added handle returns false");
        assert_eq!(grid.len(), before, "size() is unchanged");
        assert!(!grid.contains(7), "Never-added handle is not contained");
    }

    #[test]
    fn test_line_query_finds_contained_box() {
        let grid = grid_with(1, &[(1, 5.0, 5.0, 1.0, 1.0)]);
        let mut results = Vec::new();

        let found = grid.query_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), &mut results);
        assert_eq!(found, 1, "Diagonal line crosses the box");
        assert_eq!(results, vec![1], "The box is reported");

        let found = grid.query_line(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), &mut results);
        assert_eq!(found, 0, "Vertical line misses the box");
    }

    #[test]
    fn test_dedup_across_cells_for_every_query_kind() {
        let mut grid = grid_with(1, &[(1, 0.0, 0.0, 4.0, 4.0)]);
        grid.model_mut().set(2, Vec2::new(0.0, 0.0), Vec2::new(3.0, 3.0));
        assert!(grid.occupied_cells() > 1, "Object spans several cells");

        let mut results = Vec::new();
        assert_eq!(grid.query_point(Vec2::new(0.0, 0.0), &mut results), 1, "Point query reports once");
        assert_eq!(grid.query_rect(-3.0, -3.0, 3.0, 3.0, &mut results), 1, "Box query reports once");
        assert_eq!(grid.query_object(2, &mut results), 1, "Object query reports once");
        assert_eq!(
            grid.query_line(Vec2::new(-5.0, -3.0), Vec2::new(5.0, 3.0), &mut results),
            1,
            "Line query reports once"
        );
    }

    #[test]
    fn test_repeated_queries_return_same_set() {
        let objects: Vec<_> = (0..30_u32)
            .map(|i| (i, f64::from(i % 6) * 3.0, f64::from(i / 6) * 3.0, 2.0, 1.0))
            .collect();
        let grid = grid_with(2, &objects);

        let mut first = Vec::new();
        let mut second = Vec::new();
        let _ = grid.query_rect(2.0, 2.0, 9.0, 7.0, &mut first);
        let _ = grid.query_rect(2.0, 2.0, 9.0, 7.0, &mut second);
        first.sort_unstable();
        second.sort_unstable();
        assert!(!first.is_empty(), "Query should find objects");
        assert_eq!(first, second, "Identical queries return the same set");
    }

    #[test]
    fn test_membership_follows_last_operation() {
        let mut grid = grid_with(1, &[]);
        grid.model_mut().set(1, Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0));

        let _ = grid.add(1);
        assert!(grid.contains(1), "Member after add");
        let _ = grid.update(1);
        assert!(grid.contains(1), "Still a member after update");
        let _ = grid.remove(1);
        assert!(!grid.contains(1), "Not a member after remove");
        let _ = grid.update(1);
        assert!(!grid.contains(1), "Update does not resurrect a removed object");
        let _ = grid.add(1);
        assert!(grid.contains(1), "Member again after re-add");
    }

    #[test]
    fn test_concurrent_readers_with_own_scratch() {
        let grid = grid_with(2, &[(1, 0.0, 0.0, 3.0, 3.0), (2, 10.0, 10.0, 1.0, 1.0)]);

        std::thread::scope(|scope| {
            for t in 0..4_u32 {
                let grid = &grid;
                let _ = scope.spawn(move || {
                    let mut scratch = QueryScratch::new();
                    let mut results = Vec::new();
                    for i in 0..100_u32 {
                        let p = Vec2::new(f64::from(i % 5) * 0.5, f64::from(t) * 0.5);
                        let found = grid.query_point_with(p, &mut scratch, &mut results);
                        assert_eq!(found, 1, "Reader {t} should find object 1 at {p:?}");
                        assert_eq!(results, vec![1], "Reader {t} should see only object 1");
                    }
                });
            }
        });
    }
}
