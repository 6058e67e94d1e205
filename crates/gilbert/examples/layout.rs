//! Fold a sequence into a grid along the curve and unfold it again.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let values: Vec<u32> = (0..24).collect();

    // 4 rows, 6 columns.
    let grid = gilbert::to_grid(&values, 4)?;
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
        println!("{}", line.join(""));
    }

    let round_trip = gilbert::to_sequence(&grid)?;
    assert_eq!(round_trip, values);

    let curve = gilbert::Gilbert::new(4, 6)?;
    let p = curve.point(10)?;
    println!("offset 10 sits at ({}, {})", p.x, p.y);
    assert_eq!(curve.index(p)?, 10);

    Ok(())
}
