//! Integration tests checking coverage, locality and fixed traces.
#[cfg(test)]
mod tests {
    use gilbert::{Gilbert, Point, error, gilbert2d};

    fn pattern_covers(curve: &Gilbert) {
        let (w, h) = (curve.width() as usize, curve.height() as usize);
        let mut seen = vec![false; w * h];
        for p in curve {
            let cell = p.x as usize * h + p.y as usize;
            assert!(!seen[cell], "{w}x{h}: {p:?} visited twice");
            seen[cell] = true;
        }
        assert!(seen.iter().all(|&s| s), "{w}x{h}: cells missed");
    }

    /// Count the steps that are not between edge-adjacent cells, asserting
    /// none is longer than a diagonal.
    fn seams(curve: &Gilbert) -> usize {
        let cells: Vec<Point> = curve.iter().collect();
        cells
            .windows(2)
            .filter(|pair| {
                let d = pair[0].manhattan(&pair[1]);
                assert!(
                    d <= 2,
                    "{}x{}: jump of {d} between {:?} and {:?}",
                    curve.width(),
                    curve.height(),
                    pair[0],
                    pair[1]
                );
                d != 1
            })
            .count()
    }

    macro_rules! curve_tests {
        ($(($width:expr, $height:expr)),* $(,)?) => {
            $(
                paste::paste! {
                    #[test]
                    fn [<covers_ $width x $height>]() -> error::Result<()> {
                        pattern_covers(&Gilbert::new($width, $height)?);
                        Ok(())
                    }

                    #[test]
                    fn [<locality_ $width x $height>]() -> error::Result<()> {
                        let curve = Gilbert::new($width, $height)?;
                        let seams = seams(&curve);
                        assert!(seams <= 1, "{} seams", seams);
                        if $width % 2 == 0 && $height % 2 == 0 {
                            assert_eq!(seams, 0, "even grids are continuous");
                        }
                        Ok(())
                    }
                }
            )*
        };
    }

    curve_tests! {
        (1, 1),
        (1, 7),
        (7, 1),
        (2, 2),
        (3, 3),
        (3, 5),
        (5, 3),
        (4, 4),
        (4, 5),
        (6, 4),
        (8, 8),
        (9, 9),
        (10, 3),
        (16, 16),
        (17, 31),
        (32, 7),
        (100, 63),
        (63, 100),
        (128, 128),
        (257, 2),
    }

    #[test]
    fn locality_over_many_shapes() -> error::Result<()> {
        for w in 4..=40 {
            for h in 4..=40 {
                let curve = Gilbert::new(w, h)?;
                let steps = curve.length() - 1;
                let adjacent = steps - seams(&curve) as u64;
                assert!(
                    adjacent * 10 >= steps * 9,
                    "{w}x{h}: only {adjacent} of {steps} steps are adjacent"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn degenerate_shapes() -> error::Result<()> {
        let column: Vec<(u32, u32)> = gilbert2d(1, 5)?.map(Into::into).collect();
        assert_eq!(column, [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        let row: Vec<(u32, u32)> = gilbert2d(5, 1)?.map(Into::into).collect();
        assert_eq!(row, [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        Ok(())
    }

    #[test]
    fn fixed_traces() -> error::Result<()> {
        let square: Vec<(u32, u32)> = gilbert2d(2, 2)?.map(Into::into).collect();
        assert_eq!(square, [(0, 0), (0, 1), (1, 1), (1, 0)]);

        let four: Vec<(u32, u32)> = gilbert2d(4, 4)?.map(Into::into).collect();
        assert_eq!(
            four,
            [
                (0, 0),
                (1, 0),
                (1, 1),
                (0, 1),
                (0, 2),
                (0, 3),
                (1, 3),
                (1, 2),
                (2, 2),
                (2, 3),
                (3, 3),
                (3, 2),
                (3, 1),
                (2, 1),
                (2, 0),
                (3, 0),
            ]
        );

        let tall: Vec<(u32, u32)> = gilbert2d(3, 5)?.map(Into::into).collect();
        assert_eq!(
            tall,
            [
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (1, 1),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2),
                (2, 3),
                (2, 4),
                (1, 4),
                (1, 3),
                (0, 3),
                (0, 4),
            ]
        );
        Ok(())
    }

    #[test]
    fn deterministic() -> error::Result<()> {
        let a: Vec<Point> = gilbert2d(23, 17)?.collect();
        let b: Vec<Point> = gilbert2d(23, 17)?.collect();
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn early_termination_yields_prefix() -> error::Result<()> {
        let full: Vec<Point> = gilbert2d(12, 9)?.collect();
        let prefix: Vec<Point> = gilbert2d(12, 9)?.take(20).collect();
        assert_eq!(prefix, full[..20]);
        Ok(())
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            gilbert2d(0, 4),
            Err(error::Error::InvalidArgument(_))
        ));
        assert!(matches!(
            gilbert2d(4, 0),
            Err(error::Error::InvalidArgument(_))
        ));
    }
}
