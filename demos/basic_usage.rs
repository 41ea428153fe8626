//! Basic usage example for sample-bspline

use sample_bspline::prelude::*;

fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(move |i| start + i as f64 * step)
}

fn main() -> Result<(), SplineError> {
    println!("=== Curves Following Samples ===\n");

    // Example 1: The same samples at increasing degree.
    let y = [4.0, 0.0, 3.0, 0.0, 2.0, 0.0, 3.0];
    println!("Samples: {:?}", y);

    let options = BuildOptions::default();
    let curves = (0..5)
        .map(|degree| build_scalar_spline(degree, &y, None, &options))
        .collect::<SplineResult<Vec<_>>>()?;

    print!("     t");
    for curve in &curves {
        print!("    k = {}", curve.degree());
    }
    println!();
    for t in linspace(0.0, 6.0, 13) {
        print!("  {:4.1}", t);
        for curve in &curves {
            print!("  {:7.4}", curve.evaluate_scalar(t, 0)?);
        }
        println!();
    }

    // Example 2: Position, velocity and acceleration of the cubic.
    println!("\nCubic derivatives:");
    let cubic = &curves[3];
    for t in linspace(0.0, 6.0, 7) {
        println!(
            "  t = {:.1}: pos = {:7.4}, vel = {:7.4}, acc = {:7.4}",
            t,
            cubic.evaluate_scalar(t, 0)?,
            cubic.evaluate_scalar(t, 1)?,
            cubic.evaluate_scalar(t, 2)?
        );
    }

    // Example 3: Synthesized knots and control points.
    println!("\nCubic knots:          {:?}", cubic.knots());
    println!("Cubic control points: {:?}", cubic.control_points());

    // Example 4: 2D points with non-uniform parameters.
    println!("\nPlanar curve:");
    let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [-1.0, 0.0]];
    let x = [0.0, 1.0, 3.0, 4.0, 6.0];
    let planar = build_spline(3, &points, Some(&x[..]), &options)?;
    for t in linspace(0.0, 6.0, 7) {
        let [px, py] = planar.evaluate(t, 0)?;
        println!("  t = {:.1}: ({:7.4}, {:7.4})", t, px, py);
    }

    // Example 5: Error handling.
    println!("\nError handling:");
    let strict = BuildOptions::default().with_extrapolate(false);
    let bounded = build_scalar_spline(3, &y, None, &strict)?;
    match bounded.evaluate_scalar(100.0, 0) {
        Ok(v) => println!("  Result: {}", v),
        Err(e) => println!("  Error: {}", e),
    }
    match build_scalar_spline(3, &y, Some(&[0.0, 1.0][..]), &options) {
        Ok(curve) => println!("  Built degree {} curve", curve.degree()),
        Err(e) => println!("  Error: {}", e),
    }

    Ok(())
}
