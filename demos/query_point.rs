//! Find boxes that contain a point.
use cellgrid::prelude::*;

fn main() {
    let mut model: BoundsTable<u32, Plane> = BoundsTable::new();
    model.set(0, Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0));
    model.set(1, Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0));
    model.set(2, Vec2::new(5.5, 5.5), Vec2::new(0.5, 0.5));

    let mut grid = PlaneGrid::new(2, model).unwrap();
    for h in 0..3 {
        let _ = grid.add(h);
    }

    let mut results = Vec::new();
    let _ = grid.query_point(Vec2::new(1.5, 1.5), &mut results);
    println!("Contains point (1.5, 1.5): {:?}", results);
}
