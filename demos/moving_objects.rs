//! Move objects each frame and keep the grid in sync with `update`.
use cellgrid::prelude::*;

fn main() {
    let mut model: BoundsTable<u32, Plane> = BoundsTable::new();
    for h in 0..10_u32 {
        let x = f64::from(h) * 4.0;
        model.set(h, Vec2::new(x, 0.0), Vec2::new(1.0, 1.0));
    }

    let mut grid = PlaneGrid::new(4, model).unwrap();
    for h in 0..10 {
        let _ = grid.add(h);
    }

    let mut scratch = QueryScratch::new();
    let mut results = Vec::new();
    for frame in 0..5 {
        // Every object drifts right; object 0 also sweeps ahead of itself
        for h in 0..10 {
            let Some(b) = grid.model().get(&h).copied() else {
                continue;
            };
            grid.model_mut().set(h, Vec2::new(b.center.x + 1.5, b.center.y), b.half);
            if h == 0 {
                let _ = grid.model_mut().set_sweep(&0, Some(Vec2::new(3.0, 0.0)));
            }
            let _ = grid.update(h);
        }

        let _ = grid.query_object_with(0, &mut scratch, &mut results);
        println!("Frame {frame}: object 0 is near {:?}", results);
    }
}
