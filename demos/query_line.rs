//! Find boxes crossed by a line segment.
use cellgrid::GridWalk;
use cellgrid::prelude::*;

fn main() {
    let mut model: BoundsTable<&str, Plane> = BoundsTable::new();
    model.set("wall", Vec2::new(5.0, 5.0), Vec2::new(1.0, 3.0));
    model.set("pillar", Vec2::new(2.0, 8.0), Vec2::new(0.5, 0.5));
    model.set("crate", Vec2::new(9.0, 1.0), Vec2::new(1.0, 1.0));

    let mut grid = PlaneGrid::new(1, model).unwrap();
    for name in ["wall", "pillar", "crate"] {
        let _ = grid.add(name);
    }

    let mut results = Vec::new();
    let from = Vec2::new(0.0, 0.0);
    let to = Vec2::new(10.0, 10.0);
    let _ = grid.query_line(from, to, &mut results);
    println!("Line {:?} -> {:?} hits: {:?}", from, to, results);

    let walked = GridWalk::new(from, to, 1.0).map_or(0, Iterator::count);
    println!("Cells walked at resolution 1: {}", walked);
}
