//! Basic usage example for parametric-splines

use nalgebra::{Point2, Point3};
use parametric_splines::prelude::*;
use parametric_splines::{sample_surface, PolylineScene, SectorOptions, SectorScene};

fn main() {
    println!("=== Basic Parametrization and Sampling Example ===\n");

    // Example 1: Parametrizing a control polygon three ways
    println!("Parameters of an L-shaped polygon:");
    let mut polygon = ControlSequence::from_positions([
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(5.0, 0.0),
        Point2::new(5.0, 4.0),
    ]);
    for policy in Parametrization::ALL {
        polygon.parametrize(policy).unwrap();
        let parameters = polygon
            .parameters()
            .map(|t| format!("{t:.3}"))
            .collect::<Vec<_>>();
        println!("  {policy:<12} [{}]", parameters.join(", "));
    }

    // Example 2: Sampling the polyline through it
    println!("\nSix chordal samples:");
    polygon.parametrize(Parametrization::Chordal).unwrap();
    let mut cursor = PolylineCursor::new(polygon.points()).unwrap();
    for point in cursor.sample(6).unwrap() {
        println!("  ({:.3}, {:.3})", point.x, point.y);
    }

    // Example 3: The rational circle
    println!("\nRational circle around (2, 1) with radius 3:");
    let mut circle = RationalCurve::circle(Point2::new(2.0f64, 1.0), 3.0).unwrap();
    for t in [0.0, 0.5, 1.0, 2.0, 3.5, 4.0] {
        let point = circle.curve_point(t).unwrap();
        let radius = (point - Point2::new(2.0, 1.0)).norm();
        println!("  C({t:.1}) = ({:.4}, {:.4}), |C − center| = {radius:.6}", point.x, point.y);
    }
    let worst = circle
        .sample(360)
        .unwrap()
        .iter()
        .map(|point| ((point - Point2::new(2.0, 1.0)).norm() - 3.0).abs())
        .fold(0.0, f64::max);
    println!("  Largest radius error over 360 samples: {worst:e}");

    // Example 4: A bilinear patch
    println!("\nBilinear patch through a 3×3 saddle:");
    let mut grid = ControlGrid::from_fn(3, 3, |i, j| {
        let (x, y) = (i as f64 - 1.0, j as f64 - 1.0);
        Point3::new(x, y, x * y)
    })
    .unwrap();
    grid.parametrize(Parametrization::Centripetal).unwrap();
    let samples = sample_surface(&mut BilinearSurface::new(&grid), 4, 4).unwrap();
    for row in samples.stack_rows() {
        let heights = row.iter().map(|p| format!("{:+.2}", p.z)).collect::<Vec<_>>();
        println!("  {}", heights.join(" "));
    }

    // Example 5: Scenes keep the last good samples
    println!("\nEditing sessions:");
    let mut scene = PolylineScene::new(Default::default());
    for position in [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), Point2::new(6.0, 0.0)] {
        scene.push(position).unwrap();
    }
    println!("  Polyline with {} samples", scene.samples().len());
    if let Err(e) = scene.set_sample_count(0) {
        println!("  Error: {e}; still showing {} samples", scene.samples().len());
    }

    let mut cone = SectorScene::new(SectorOptions::default()).unwrap();
    cone.set_position(SectorScene::APEX, Point3::new(1.0, 0.0, 4.0)).unwrap();
    println!(
        "  Cone with {} samples, tip at {:?}",
        cone.samples().points().len(),
        cone.samples().get(0, cone.options().stacks)
    );

    // Example 6: Error handling
    println!("\nError handling:");
    match RationalCurve::circle(Point2::new(0.0, 0.0), -1.0) {
        Ok(_) => println!("  Unexpected circle"),
        Err(e) => println!("  Error: {e}"),
    }
    match cursor.evaluate(1.5) {
        Ok(point) => println!("  Result: {point}"),
        Err(e) => println!("  Error: {e}"),
    }
}
