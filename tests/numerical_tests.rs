use typemaths::calculus::read;
use typemaths::numerical::{Bisection, NewtonRaphson, Secant, limit, newton_raphson};

#[test]
fn newton_step() {
    // x^2 - 2 from 1: 1 - (-1)/2 = 1.5
    let step = newton_raphson(|x| x * x - 2.0, |x| 2.0 * x);
    assert_eq!(step(1.0), 1.5);
    assert!((step(step(1.5)) - 2f64.sqrt()).abs() < 1e-5);
}

#[test]
fn newton_yields_the_starting_point_first() {
    let first: Vec<_> = NewtonRaphson::new(f64::ln, |x| 1.0 / x, 2.0).take(2).collect();
    assert_eq!(first[0], 2.0);
    assert_eq!(first[1], 2.0 - 2f64.ln() * 2.0);
}

#[test]
fn newton_finds_root_of_ln() {
    let root = limit(1e-6, NewtonRaphson::new(f64::ln, |x| 1.0 / x, 2.0)).unwrap();
    assert!((root - 1.0).abs() < 1e-9);
}

#[test]
fn secant_finds_root_of_ln() {
    let root = limit(1e-9, Secant::new(f64::ln, 0.5, 2.0)).unwrap();
    assert!((root - 1.0).abs() < 1e-8);
}

#[test]
fn secant_stops_on_flat_secant() {
    let steps: Vec<_> = Secant::new(|_| 3.0, 0.0, 1.0).collect();
    assert_eq!(steps, vec![1.0]);
    assert_eq!(limit(1e-6, Secant::new(|_| 3.0, 0.0, 1.0)), None);
}

#[test]
fn bisection_halves_the_interval() {
    let mids: Vec<_> = Bisection::new(f64::ln, 0.5, 2.0).take(3).collect();
    assert_eq!(mids, vec![1.25, 0.875, 1.0625]);

    let root = limit(1e-6, Bisection::new(f64::ln, 0.5, 2.0)).unwrap();
    assert!((root - 1.0).abs() < 1e-5);
}

#[test]
fn limit_of_short_sequences() {
    assert_eq!(limit(0.1, Vec::<f64>::new()), None);
    assert_eq!(limit(0.1, vec![1.0]), None);
    assert_eq!(limit(0.1, vec![1.0, 2.0, 3.0]), None);
    assert_eq!(limit(0.5, vec![1.0, 3.0, 3.4, 3.45]), Some(3.4));
}

#[test]
fn limit_gives_up_on_diverging_newton() {
    // 5 → -3.04… → NaN: ln is undefined past the first step
    let steps: Vec<_> = NewtonRaphson::new(f64::ln, |x| 1.0 / x, 5.0).take(3).collect();
    assert!(steps[1] < 0.0);
    assert!(steps[2].is_nan());

    assert_eq!(limit(1e-6, NewtonRaphson::new(f64::ln, |x| 1.0 / x, 5.0)), None);
}

#[test]
fn limit_gives_up_on_diverging_secant() {
    assert_eq!(limit(1e-6, Secant::new(f64::ln, 5.0, 10.0)), None);
}

#[test]
fn limit_stops_at_nan() {
    let approximations = [1.0, 4.0, f64::NAN].into_iter().chain(std::iter::repeat(0.0));
    assert_eq!(limit(1e-6, approximations), None);
}

#[test]
fn newton_on_a_parsed_function() {
    // x^2 - 2 has a root at sqrt(2)
    let f = read("x^2 - 2").unwrap();
    let df = f.derivative();
    let root = limit(1e-10, NewtonRaphson::new(|x| f.eval(x), |x| df.eval(x), 1.0)).unwrap();
    assert!((root - 2f64.sqrt()).abs() < 1e-12);
}
