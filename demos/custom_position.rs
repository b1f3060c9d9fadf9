//! Using your own point type with the evaluators.
//!
//! Anything that implements `Position` can be parametrized, interpolated
//! and put on a rational curve. Here a plain 2D point with `f32`
//! coordinates plays that role.

use parametric_splines::{
    ControlPoint, ControlSequence, KnotVector, ParametricCurve, Parametrization,
    PolylineCursor, Position, RationalCurve,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pixel {
    x: f32,
    y: f32,
}

impl Pixel {
    fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Position for Pixel {
    type Scalar = f32;

    fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    fn blend(&self, other: &Self, omega: f32) -> Self {
        Self::new(
            self.x * (1.0 - omega) + other.x * omega,
            self.y * (1.0 - omega) + other.y * omega,
        )
    }

    fn scale(&self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    fn accumulate(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    fn distance(&self, other: &Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn offset_xy(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

fn main() {
    println!("=== Custom Position Type Example ===\n");

    // Clicked points of a 2D path.
    let mut path = ControlSequence::from_positions([
        Pixel::new(10.0, 10.0),
        Pixel::new(200.0, 40.0),
        Pixel::new(220.0, 180.0),
        Pixel::new(40.0, 300.0),
    ]);
    path.parametrize(Parametrization::Centripetal).unwrap();

    println!("Centripetal path samples:");
    let mut cursor = PolylineCursor::new(path.points()).unwrap();
    for point in cursor.sample(8).unwrap() {
        println!("  ({:7.2}, {:7.2})", point.x, point.y);
    }

    // The rational circle only needs `offset_xy` to place its control
    // points.
    println!("\nCircle of radius 50 around (100, 100):");
    let mut circle = RationalCurve::circle(Pixel::new(100.0, 100.0), 50.0).unwrap();
    for point in circle.sample(9).unwrap() {
        let radius = point.distance(&Pixel::new(100.0, 100.0));
        println!("  ({:7.2}, {:7.2})  r = {radius:.4}", point.x, point.y);
    }

    // A quadratic rational arc with a hand-made knot vector.
    println!("\nQuarter arc from a single Bézier segment:");
    let weight = std::f32::consts::FRAC_1_SQRT_2;
    let arc = RationalCurve::try_new(
        2,
        KnotVector::try_new(vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap(),
        vec![
            ControlPoint::new(Pixel::new(1.0, 0.0)),
            ControlPoint::weighted(Pixel::new(1.0, 1.0), weight),
            ControlPoint::new(Pixel::new(0.0, 1.0)),
        ],
    )
    .unwrap();
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        let point = arc.curve_point(t).unwrap();
        println!("  C({t:.2}) = ({:.4}, {:.4})", point.x, point.y);
    }
}
