use typemaths::calculus::{
    Function, constant, cos, div, exp, identity, ln, log, mul, pow, read, sin, sub,
};
use typemaths::parser::{ExpressionError, HandlerError};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn linear_function() {
    // f(x) = 4x, f'(x) = 4
    let f = mul(constant(4.0), identity());
    assert_eq!(f.eval(3.0), 12.0);
    assert_eq!(f.derivative().eval(3.0), 4.0);
}

#[test]
fn quadratic_function() {
    // g(x) = 4x^2, g'(x) = 8x
    let g = mul(constant(4.0), pow(identity(), constant(2.0)));
    assert_eq!(g.eval(3.0), 36.0);
    assert_eq!(g.derivative().eval(3.0), 24.0);
}

#[test]
fn power_rule_handles_negative_base() {
    let g = pow(identity(), constant(2.0));
    assert_eq!(g.derivative().eval(-3.0), -6.0);
}

#[test]
fn logarithm_of_square() {
    // h(x) = ln(x^2), h'(x) = 2/x
    let h = ln(pow(identity(), constant(2.0)));
    assert!(close(h.eval(3.0), 2.1972245773362196));
    assert!(close(h.derivative().eval(3.0), 2.0 / 3.0));

    let h2 = log(pow(identity(), constant(2.0)), constant(std::f64::consts::E));
    assert!(close(h2.eval(3.0), 2.1972245773362196));
    assert!(close(h2.derivative().eval(3.0), 2.0 / 3.0));
}

#[test]
fn trigonometric_derivatives() {
    let x = 0.7_f64;
    assert!(close(sin(identity()).derivative().eval(x), x.cos()));
    assert!(close(cos(identity()).derivative().eval(x), -x.sin()));
    // chain rule: sin(2x)' = 2 cos(2x)
    let f = sin(mul(constant(2.0), identity()));
    assert!(close(f.derivative().eval(x), 2.0 * (2.0 * x).cos()));
}

#[test]
fn quotient_and_exponential() {
    let x = 1.3_f64;
    // (1/x)' = -1/x^2
    let f = div(constant(1.0), identity());
    assert!(close(f.derivative().eval(x), -1.0 / (x * x)));
    // exp(x^2)' = 2x exp(x^2)
    let g = exp(pow(identity(), constant(2.0)));
    assert!(close(g.derivative().eval(x), 2.0 * x * (x * x).exp()));
}

#[test]
fn variable_exponent() {
    // (x^x)' = x^x (ln x + 1)
    let x = 1.7_f64;
    let f = pow(identity(), identity());
    assert!(close(f.derivative().eval(x), x.powf(x) * (x.ln() + 1.0)));
}

#[test]
fn higher_derivatives() {
    // x^3 → 3x^2 → 6x → 6
    let f = pow(identity(), constant(3.0));
    assert!(close(f.nth_derivative(1).eval(2.0), 12.0));
    assert!(close(f.nth_derivative(2).eval(2.0), 12.0));
    assert!(close(f.nth_derivative(3).eval(2.0), 6.0));
    assert_eq!(f.nth_derivative(0), f);
}

#[test]
fn constant_has_zero_derivative() {
    assert_eq!(constant(5.0).derivative(), Function::Constant(0.0));
    assert_eq!(identity().derivative(), Function::Constant(1.0));
}

#[test]
fn display_is_infix() {
    let f = sub(mul(constant(4.0), identity()), ln(identity()));
    assert_eq!(f.to_string(), "((4 * x) - ln(x))");
}

#[test]
fn read_parses_functions_of_x() {
    let f = read("x^2-ln(x)/(sin(x)*cos(x))").unwrap();
    let x = 0.5_f64;
    let expected = x * x - x.ln() / (x.sin() * x.cos());
    assert!(close(f.eval(x), expected));

    // numeric check of the symbolic derivative
    let h = 1e-6;
    let numeric = (f.eval(x + h) - f.eval(x - h)) / (2.0 * h);
    assert!((f.derivative().eval(x) - numeric).abs() < 1e-5);
}

#[test]
fn read_supports_unary_and_constants() {
    let f = read("-x + 2*pi").unwrap();
    assert!(close(f.eval(1.0), 2.0 * std::f64::consts::PI - 1.0));
    assert_eq!(f.derivative().eval(1.0), -1.0);

    let g = read("sqrt(x) + log(x, 2)").unwrap();
    assert!(close(g.eval(4.0), 4.0));
}

#[test]
fn read_rejects_other_variables() {
    match read("y + 1") {
        Err(ExpressionError::Handler(HandlerError::UnknownOperation { name, arity })) => {
            assert_eq!(name, "y");
            assert_eq!(arity, 0);
        }
        other => panic!("expected handler error, got {other:?}"),
    }
}
