#![cfg(test)]

use std::f64::consts::PI;

use shapes_common::error::ShapeError;
use shapes_core::{Circle, Figure, Rectangle, Shape, Square};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/*************************************************************
                 Metrics of the reference shapes
**************************************************************/

#[test]
fn reference_rectangle() -> anyhow::Result<()> {
    let r1 = Rectangle::new(3.0, 5.0)?;
    assert_eq!(r1.describe(), "Rectangle(width=3, height=5)");
    assert_eq!(r1.area(), 15.0);
    assert_eq!(r1.perimeter(), 16.0);
    Ok(())
}

#[test]
fn reference_square() -> anyhow::Result<()> {
    let s1 = Square::new(4.0)?;
    assert_eq!(s1.describe(), "Square(side=4)");
    assert_eq!(s1.area(), 16.0);
    assert_eq!(s1.perimeter(), 16.0);
    Ok(())
}

#[test]
fn reference_circle() -> anyhow::Result<()> {
    let c1 = Circle::new(3.0)?;
    assert_eq!(c1.describe(), "Circle(radius=3)");
    assert!(approx_eq(c1.area(), 28.274333882308138));
    assert!(approx_eq(c1.perimeter(), 18.84955592153876));
    Ok(())
}

/*************************************************************
                     Formula checks over grids
**************************************************************/

const DIMENSIONS: &[f64] = &[1e-6, 0.1, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 17.25, 1e3, 1e9];

#[test]
fn rectangle_formulas_hold() -> anyhow::Result<()> {
    for &width in DIMENSIONS {
        for &height in DIMENSIONS {
            let rect = Rectangle::new(width, height)?;
            assert_eq!(rect.area(), width * height);
            assert_eq!(rect.perimeter(), 2.0 * (width + height));
        }
    }
    Ok(())
}

#[test]
fn square_formulas_hold() -> anyhow::Result<()> {
    for &side in DIMENSIONS {
        let square = Square::new(side)?;
        assert_eq!(square.area(), side * side);
        assert!(square.describe().contains("Square"));
    }
    Ok(())
}

#[test]
fn circle_formulas_hold() -> anyhow::Result<()> {
    for &radius in DIMENSIONS {
        let circle = Circle::new(radius)?;
        assert!(approx_eq(circle.area(), PI * radius * radius));
        assert!(approx_eq(circle.perimeter(), 2.0 * PI * radius));
    }
    Ok(())
}

#[test]
fn metrics_are_idempotent() -> anyhow::Result<()> {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(1.3, 7.9)?),
        Box::new(Square::new(0.7)?),
        Box::new(Circle::new(2.2)?),
    ];
    for shape in &shapes {
        let area = shape.area();
        let perimeter = shape.perimeter();
        let description = shape.describe();
        for _ in 0..5 {
            assert_eq!(shape.area().to_bits(), area.to_bits());
            assert_eq!(shape.perimeter().to_bits(), perimeter.to_bits());
            assert_eq!(shape.describe(), description);
        }
    }
    Ok(())
}

/*************************************************************
                       Invalid construction
**************************************************************/

#[test]
fn non_positive_dimensions_are_rejected() {
    for bad in [0.0, -0.0, -1.0, -1e-9, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            Rectangle::new(bad, 1.0),
            Err(ShapeError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            Rectangle::new(1.0, bad),
            Err(ShapeError::InvalidDimension { name: "height", .. })
        ));
        assert!(matches!(
            Square::new(bad),
            Err(ShapeError::InvalidDimension { name: "side", .. })
        ));
        assert!(matches!(
            Circle::new(bad),
            Err(ShapeError::InvalidDimension { name: "radius", .. })
        ));
    }
}

#[test]
fn invalid_dimension_propagates_with_question_mark() {
    fn build() -> anyhow::Result<Circle> {
        Ok(Circle::new(-3.0)?)
    }

    let err = build().unwrap_err();
    assert_eq!(
        err.downcast_ref::<ShapeError>(),
        Some(&ShapeError::InvalidDimension { name: "radius", value: -3.0 })
    );
}

/*************************************************************
                          Shape strings
**************************************************************/

#[test]
fn parsed_figures_match_constructed_shapes() -> anyhow::Result<()> {
    let parsed: Vec<Figure> = ["rectangle:3x5", "square:4", "circle:3"]
        .iter()
        .map(|s| s.parse::<Figure>())
        .collect::<Result<_, _>>()?;

    assert_eq!(parsed[0].describe(), Rectangle::new(3.0, 5.0)?.describe());
    assert_eq!(parsed[1].describe(), Square::new(4.0)?.describe());
    assert_eq!(parsed[2].describe(), Circle::new(3.0)?.describe());
    assert_eq!(parsed[2].area(), Circle::new(3.0)?.area());
    Ok(())
}

#[test]
fn parse_errors_are_descriptive() {
    let err = "square:-1".parse::<Figure>().unwrap_err();
    assert_eq!(err.to_string(), "invalid dimension: side must be a positive number, got -1");

    let err = "pentagon:1".parse::<Figure>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown shape 'pentagon', expected rectangle, square or circle"
    );
}
