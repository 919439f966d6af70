//! One-dimensional grid over time intervals.
use cellgrid::prelude::*;

fn main() {
    // (start, end) of bookings in minutes
    let bookings = [(0.0, 30.0), (45.0, 90.0), (60.0, 75.0), (120.0, 180.0)];
    let model = FnBounds::new(
        |h: &usize| (bookings[*h].0 + bookings[*h].1) * 0.5,
        |h: &usize| (bookings[*h].1 - bookings[*h].0) * 0.5,
    );

    let mut grid: AxisGrid<usize, _> = AxisGrid::new(15, model).unwrap();
    for h in 0..bookings.len() {
        let _ = grid.add(h);
    }

    let mut results = Vec::new();
    let _ = grid.query_range(50.0, 70.0, &mut results);
    results.sort();
    println!("Bookings overlapping 50..70: {:?}", results);

    let _ = grid.query_object(2, &mut results);
    println!("Bookings clashing with booking 2: {:?}", results);
}
