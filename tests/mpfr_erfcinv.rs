#![cfg(feature = "mpfr")]

use erfcinv::{Regime, erfcinv, regime};
use rug::{Float, float::Constant};
use std::env;

const MPFR_PREC: u32 = 256;

/// Solves erfc(y) = x at `MPFR_PREC` bits by Newton iteration on
/// ln erfc(y) = ln x, starting from `seed`.
fn mpfr_erfcinv_f64(x: f64, seed: f64) -> f64 {
    if x > 1.0 {
        return -mpfr_erfcinv_f64(2.0 - x, -seed);
    }
    let ln_target = Float::with_val(MPFR_PREC, x).ln();
    let half_sqrt_pi = Float::with_val(MPFR_PREC, Constant::Pi).sqrt() / 2u32;
    let mut y = Float::with_val(MPFR_PREC, seed);
    for _ in 0..6 {
        let erfc_y = y.clone().erfc();
        let slope = erfc_y.clone() * y.clone().square().exp() * &half_sqrt_pi;
        let residual = erfc_y.ln() - &ln_target;
        y += residual * slope;
    }
    y.to_f64()
}

fn ulp_size(x: f64) -> f64 {
    if x == 0.0 {
        return f64::from_bits(1);
    }
    if x.is_nan() || x.is_infinite() {
        return f64::NAN;
    }
    let next = if x.is_sign_negative() {
        x.next_down()
    } else {
        x.next_up()
    };
    (next - x).abs()
}

fn ulp_error(actual: f64, expected: f64) -> f64 {
    let diff = (actual - expected).abs();
    if diff == 0.0 {
        return 0.0;
    }
    let ulp = ulp_size(expected);
    if !ulp.is_finite() || ulp == 0.0 {
        return f64::INFINITY;
    }
    diff / ulp
}

fn eval(x: f64) -> f64 {
    erfcinv(x).unwrap_or_else(|e| panic!("erfcinv({x}): {e}"))
}

fn sweep_offsets(radius: i64, stride: i64) -> Vec<i64> {
    let mut offsets = Vec::new();
    let mut off = -radius;
    while off <= radius {
        offsets.push(off);
        off = off.saturating_add(stride);
        if off == i64::MAX {
            break;
        }
    }
    offsets
}

struct ReportRow {
    label: &'static str,
    x: f64,
    regime: Option<Regime>,
    mpfr: f64,
    ours: f64,
    ulps: f64,
}

fn push_report(rows: &mut Vec<ReportRow>, label: &'static str, x: f64) {
    let ours = eval(x);
    let mpfr = mpfr_erfcinv_f64(x, ours);
    rows.push(ReportRow {
        label,
        x,
        regime: regime(x),
        mpfr,
        ours,
        ulps: ulp_error(ours, mpfr),
    });
}

fn print_report(rows: &[ReportRow]) {
    println!("| Case | x | regime | mpfr bits | erfcinv bits | ulp |");
    println!("| :--- | ---: | :--- | :--- | :--- | ---: |");
    for row in rows {
        let regime = match row.regime {
            Some(r) => format!("{r:?}"),
            None => "special".to_string(),
        };
        println!(
            "| {} | {:.17e} | {} | {:016x} | {:016x} | {:.3} |",
            row.label,
            row.x,
            regime,
            row.mpfr.to_bits(),
            row.ours.to_bits(),
            row.ulps
        );
    }
}

#[test]
fn mpfr_erfcinv_regime_midpoints() {
    // One point well inside each regime, from both sides of x = 1.
    let points = [
        (0.75, 1.0),
        (1.25, 1.0),
        (0.3, 1.0),
        (1.7, 1.0),
        (1e-2, 1.0),
        (1.99, 1.0),
        (1e-8, 1.0),
        (1.99999999, 1.0),
        (1e-30, 1.0),
        (1e-100, 2.0),
    ];
    for &(x, max_ulps) in &points {
        let ours = eval(x);
        let mpfr = mpfr_erfcinv_f64(x, ours);
        let ulps = ulp_error(ours, mpfr);
        assert!(
            ulps <= max_ulps + 1.0,
            "erfcinv({x}) = {ours:.17e}, mpfr {mpfr:.17e} ({ulps} ulp, {:?})",
            regime(x)
        );
    }
}

#[test]
fn mpfr_erfcinv_sweep() {
    let x0 = match env::var("ERFCINV_MPFR_X") {
        Ok(v) => v.parse::<f64>().expect("ERFCINV_MPFR_X must be f64"),
        Err(_) => return,
    };
    let radius = env::var("ERFCINV_MPFR_RADIUS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(10_000);
    let stride = env::var("ERFCINV_MPFR_STRIDE")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(1);

    let base_bits = x0.to_bits();
    let mut max_ulps = 0.0f64;
    let mut max_x = x0;
    let mut first_mismatch: Option<(f64, f64, f64)> = None;
    let mut report = Vec::new();

    push_report(&mut report, "x0", x0);

    for offset in sweep_offsets(radius, stride.max(1)) {
        let bits = if offset < 0 {
            base_bits.wrapping_sub((-offset) as u64)
        } else {
            base_bits.wrapping_add(offset as u64)
        };
        let x = f64::from_bits(bits);
        if regime(x).is_none() {
            continue;
        }
        let actual = eval(x);
        let expected = mpfr_erfcinv_f64(x, actual);
        let ulps = ulp_error(actual, expected);
        if ulps > max_ulps {
            max_ulps = ulps;
            max_x = x;
        }
        if first_mismatch.is_none() && ulps != 0.0 {
            first_mismatch = Some((x, actual, expected));
        }
    }

    println!("MPFR sweep around x0={x0} (radius={radius} stride={stride})");
    println!("erfcinv max ulp error vs MPFR: ulps={max_ulps} at x={max_x}");
    if let Some((x, actual, expected)) = first_mismatch {
        println!(
            "first erfcinv mismatch: x={x} actual={actual:.17e} expected={expected:.17e} ulps={}",
            ulp_error(actual, expected)
        );
    } else {
        println!("no mismatches against MPFR in sweep range");
    }

    push_report(&mut report, "erfcinv_max", max_x);
    if let Some((x, _, _)) = first_mismatch {
        push_report(&mut report, "erfcinv_first", x);
    }

    let report_enabled = env::var("ERFCINV_MPFR_REPORT")
        .ok()
        .map(|v| v != "0")
        .unwrap_or(true);
    if report_enabled {
        print_report(&report);
    }
}
