//! Mathematical properties of the closed-form posterior density.

use coin_posterior::{EvaluationGrid, PosteriorDensity, GRID_POINTS};

/// Trapezoidal integral of the density over [0, 1].
fn integrate(post: &PosteriorDensity, n: u64, k: u64, steps: usize) -> f64 {
    let h = 1.0 / steps as f64;
    let mut total = 0.0;
    for i in 0..steps {
        let a = post.evaluate(i as f64 * h, n, k);
        let b = post.evaluate((i + 1) as f64 * h, n, k);
        total += 0.5 * (a + b) * h;
    }
    total
}

#[test]
fn density_integrates_to_one() {
    let post = PosteriorDensity::derive();
    for (n, k) in [(0, 0), (1, 0), (1, 1), (5, 2), (10, 10), (20, 7), (40, 13)] {
        let integral = integrate(&post, n, k, 2000);
        assert!(
            (integral - 1.0).abs() < 1e-3,
            "density for (n={n}, k={k}) integrates to {integral}, expected 1"
        );
    }
}

#[test]
fn no_data_posterior_is_uniform() {
    let post = PosteriorDensity::derive();
    let grid = EvaluationGrid::new();
    for value in post.evaluate_grid(&grid, 0, 0) {
        assert!((value - 1.0).abs() < 1e-12);
    }
}

#[test]
fn density_is_never_negative() {
    let post = PosteriorDensity::derive();
    let grid = EvaluationGrid::new();
    for (n, k) in [(1, 0), (3, 3), (12, 5), (30, 30)] {
        for value in post.evaluate_grid(&grid, n, k) {
            assert!(value >= 0.0);
        }
    }
}

#[test]
fn all_heads_curve_is_strictly_increasing() {
    let post = PosteriorDensity::derive();
    let grid = EvaluationGrid::new();
    let curve = post.evaluate_grid(&grid, 3, 3);
    assert_eq!(curve.len(), GRID_POINTS);
    for pair in curve.windows(2) {
        assert!(pair[1] > pair[0], "expected strictly increasing curve");
    }
    assert!(post.evaluate(0.99, 3, 3) > post.evaluate(0.5, 3, 3));
    assert!(post.evaluate(0.5, 3, 3) > post.evaluate(0.01, 3, 3));
}

#[test]
fn one_tail_curve_is_strictly_decreasing() {
    let post = PosteriorDensity::derive();
    let grid = EvaluationGrid::new();
    let curve = post.evaluate_grid(&grid, 1, 0);
    for pair in curve.windows(2) {
        assert!(pair[1] < pair[0], "expected strictly decreasing curve");
    }
    assert!(post.evaluate(0.01, 1, 0) > post.evaluate(0.99, 1, 0));
}

#[test]
fn posterior_peaks_at_observed_frequency() {
    // The mode of Beta(k+1, n-k+1) is k/n; the grid point nearest the
    // mode should carry the largest density.
    let post = PosteriorDensity::derive();
    let grid = EvaluationGrid::new();
    let (n, k) = (20, 15);
    let curve = post.evaluate_grid(&grid, n, k);

    let argmax = curve
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    let mode = k as f64 / n as f64;
    let spacing = 1.0 / (GRID_POINTS - 1) as f64;
    assert!(
        (grid.thetas()[argmax] - mode).abs() <= spacing,
        "curve peak should sit on the grid point nearest k/n"
    );
}

#[test]
fn marginal_matches_beta_identity() {
    let post = PosteriorDensity::derive();
    for n in 0..30 {
        let expected = 1.0 / (n as f64 + 1.0);
        assert!((post.marginal_likelihood(n) - expected).abs() < 1e-15);
    }
}
