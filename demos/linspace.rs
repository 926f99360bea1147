use erfcinv::erfcinv;

const DEFAULT_POINTS: usize = 100;

fn demo_points() -> usize {
    if let Ok(value) = std::env::var("ERFCINV_DEMO_POINTS") {
        if let Ok(n) = value.trim().parse::<usize>() {
            return n;
        }
        eprintln!("ignoring ERFCINV_DEMO_POINTS={value:?}; using {DEFAULT_POINTS}");
    }
    DEFAULT_POINTS
}

/// `n` evenly spaced points over `[lo, hi]`, both ends included exactly.
fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            let mut xs: Vec<f64> = (0..n).map(|i| lo + i as f64 * step).collect();
            xs[n - 1] = hi;
            xs
        }
    }
}

fn main() {
    for x in linspace(0.0, 2.0, demo_points()) {
        match erfcinv(x) {
            Ok(y) => println!("x: {x}, erfcinv(x): {y}"),
            Err(e) => eprintln!("x: {x}, {e}"),
        }
    }
}
