#![cfg(test)]

use shapes_core::{
    Circle, Comparison, Figure, Rectangle, Shape, Square, compare, compare_area, compare_perimeter,
};

#[test]
fn demo_pair_area_differs() -> anyhow::Result<()> {
    let r1 = Rectangle::new(3.0, 5.0)?;
    let s1 = Square::new(4.0)?;
    assert!(!compare_area(&r1, &s1));
    Ok(())
}

#[test]
fn demo_pair_perimeter_matches() -> anyhow::Result<()> {
    let r1 = Rectangle::new(3.0, 5.0)?;
    let s1 = Square::new(4.0)?;
    assert!(compare_perimeter(&r1, &s1));
    Ok(())
}

#[test]
fn square_and_equal_rectangle_compare_equal() -> anyhow::Result<()> {
    let square = Square::new(4.0)?;
    let rect = Rectangle::new(4.0, 4.0)?;
    assert_eq!(
        compare(&square, &rect),
        Comparison {
            same_area: true,
            same_perimeter: true,
        }
    );
    Ok(())
}

#[test]
fn every_pair_is_comparable() -> anyhow::Result<()> {
    let figures: Vec<Figure> = vec![
        Rectangle::new(3.0, 5.0)?.into(),
        Square::new(4.0)?.into(),
        Circle::new(3.0)?.into(),
    ];
    for a in &figures {
        for b in &figures {
            let comparison = compare(a, b);
            assert_eq!(comparison.same_area, a.area() == b.area());
            assert_eq!(comparison.same_perimeter, a.perimeter() == b.perimeter());
            assert_eq!(compare(b, a), comparison);
        }
    }
    Ok(())
}

/// Exact comparison does not forgive rounding: these rectangles have the
/// same area on paper but not in binary floating point.
#[test]
fn exact_equality_reports_rounding_differences() -> anyhow::Result<()> {
    let thin = Rectangle::new(0.1, 3.0)?;
    let unit = Rectangle::new(0.3, 1.0)?;
    assert!((thin.area() - unit.area()).abs() < 1e-12);
    assert!(!compare_area(&thin, &unit));
    Ok(())
}
