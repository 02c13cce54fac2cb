use super::{ErrorKind, EvalError, LogBase, Operation, Outcome};

const DIVIDE_BY_ZERO: &str = "Cannot divide by zero.";
const MODULO_BY_ZERO: &str = "Cannot take a remainder modulo zero.";
const ZERO_TO_NEGATIVE_POWER: &str = "0.0 cannot be raised to a negative power.";
const OVERFLOW: &str = "The value is too large to compute.";
const LOG_ARGUMENT_DOMAIN: &str = "The logarithm argument (a) must be greater than 0.";
const LOG_BASE_DOMAIN: &str = "The logarithm base (b) must be greater than 0 and not equal to 1.";

/// 演算を1回実行する
///
/// 対数の場合、`a` が真数、`b` が底です（`log_b(a)`）。
/// オペランドが有限でない場合は `ErrorKind::Unknown` を返します。
pub fn evaluate(operation: Operation, a: f64, b: f64) -> Outcome {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;

    match operation {
        Operation::Add => Ok(a + b),
        Operation::Subtract => Ok(a - b),
        Operation::Multiply => Ok(a * b),
        Operation::Divide => divide(a, b),
        Operation::Modulo => modulo(a, b),
        Operation::Power => power(a, b),
        Operation::Logarithm => logarithm(a, b),
    }
}

/// 底のショートカットを考慮して対数を計算する
///
/// `base` が `Manual` 以外の場合、`b` は使用されません。
pub fn evaluate_log(a: f64, base: LogBase, b: f64) -> Outcome {
    evaluate(Operation::Logarithm, a, base.resolve(b))
}

fn ensure_finite(name: &str, value: f64) -> Result<(), EvalError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EvalError::unknown(format!(
            "operand `{name}` is not a finite number"
        )))
    }
}

fn divide(a: f64, b: f64) -> Outcome {
    if b == 0.0 {
        return Err(EvalError::new(ErrorKind::DivisionByZero, DIVIDE_BY_ZERO));
    }
    Ok(a / b)
}

/// 剰余の符号は除数に合わせる（floored division）
fn modulo(a: f64, b: f64) -> Outcome {
    if b == 0.0 {
        return Err(EvalError::new(ErrorKind::DivisionByZero, MODULO_BY_ZERO));
    }
    let rem = a % b;
    if rem == 0.0 {
        // 割り切れた場合も0の符号を除数に合わせる
        Ok(0.0_f64.copysign(b))
    } else if (rem < 0.0) != (b < 0.0) {
        Ok(rem + b)
    } else {
        Ok(rem)
    }
}

fn power(a: f64, b: f64) -> Outcome {
    if a == 0.0 && b < 0.0 {
        return Err(EvalError::new(
            ErrorKind::DivisionByZero,
            ZERO_TO_NEGATIVE_POWER,
        ));
    }
    // 負の底に非整数の指数は NaN になるが、エラーにはしない
    let result = a.powf(b);
    if result.is_infinite() {
        return Err(EvalError::new(ErrorKind::Overflow, OVERFLOW));
    }
    Ok(result)
}

#[allow(clippy::float_cmp)]
fn logarithm(value: f64, base: f64) -> Outcome {
    if value <= 0.0 {
        return Err(EvalError::new(ErrorKind::InvalidDomain, LOG_ARGUMENT_DOMAIN));
    }
    if base <= 0.0 || base == 1.0 {
        return Err(EvalError::new(ErrorKind::InvalidDomain, LOG_BASE_DOMAIN));
    }
    Ok(value.ln() / base.ln())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(outcome: Outcome, expected: f64) {
        let actual = outcome.expect("expected a successful outcome");
        assert!(
            (actual - expected).abs() <= TOLERANCE * expected.abs().max(1.0),
            "expected {expected}, got {actual}"
        );
    }

    fn kind_of(outcome: Outcome) -> ErrorKind {
        outcome.expect_err("expected an error outcome").kind()
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate(Operation::Add, 2.0, 3.0), Ok(5.0));
        assert_eq!(evaluate(Operation::Subtract, 2.0, 3.0), Ok(-1.0));
        assert_eq!(evaluate(Operation::Multiply, -4.0, 2.5), Ok(-10.0));
        assert_eq!(evaluate(Operation::Divide, 7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = evaluate(Operation::Divide, 10.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(err.message(), "Cannot divide by zero.");
        assert_eq!(
            kind_of(evaluate(Operation::Divide, 10.0, -0.0)),
            ErrorKind::DivisionByZero
        );
    }

    #[test]
    fn test_modulo_by_zero() {
        let err = evaluate(Operation::Modulo, 10.0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(err.message(), "Cannot take a remainder modulo zero.");
    }

    #[test]
    fn test_modulo_follows_divisor_sign() {
        assert_eq!(evaluate(Operation::Modulo, 7.0, 3.0), Ok(1.0));
        assert_eq!(evaluate(Operation::Modulo, -7.0, 3.0), Ok(2.0));
        assert_eq!(evaluate(Operation::Modulo, 7.0, -3.0), Ok(-2.0));
        assert_eq!(evaluate(Operation::Modulo, -7.0, -3.0), Ok(-1.0));
        assert_eq!(evaluate(Operation::Modulo, 5.5, 2.0), Ok(1.5));
        assert_eq!(evaluate(Operation::Modulo, 6.0, 3.0), Ok(0.0));
    }

    #[test]
    fn test_modulo_zero_remainder_takes_divisor_sign() {
        let rem = evaluate(Operation::Modulo, -6.0, 3.0).unwrap();
        assert_eq!(rem, 0.0);
        assert!(!rem.is_sign_negative());

        let rem = evaluate(Operation::Modulo, 6.0, -3.0).unwrap();
        assert_eq!(rem, 0.0);
        assert!(rem.is_sign_negative());

        assert!(!evaluate(Operation::Modulo, 0.0, 5.0).unwrap().is_sign_negative());
        assert!(!evaluate(Operation::Modulo, -0.0, 5.0).unwrap().is_sign_negative());
    }

    #[test]
    fn test_power() {
        assert_close(evaluate(Operation::Power, 2.0, 10.0), 1024.0);
        assert_close(evaluate(Operation::Power, 4.0, 0.5), 2.0);
        assert_close(evaluate(Operation::Power, 2.0, -2.0), 0.25);
        assert_close(evaluate(Operation::Power, 0.0, 0.0), 1.0);
    }

    #[test]
    fn test_power_overflow() {
        let err = evaluate(Operation::Power, 10.0, 400.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(err.message(), "The value is too large to compute.");
    }

    #[test]
    fn test_power_zero_to_negative() {
        let err = evaluate(Operation::Power, 0.0, -1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_nan() {
        let result = evaluate(Operation::Power, -8.0, 1.0 / 3.0).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_logarithm() {
        assert_close(evaluate(Operation::Logarithm, 8.0, 2.0), 3.0);
        assert_close(evaluate(Operation::Logarithm, 1000.0, 10.0), 3.0);
        assert_close(evaluate(Operation::Logarithm, 1.0, 5.0), 0.0);
        assert_close(evaluate(Operation::Logarithm, 0.25, 2.0), -2.0);
    }

    #[test]
    fn test_logarithm_invalid_domain() {
        let err = evaluate(Operation::Logarithm, -1.0, 2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDomain);
        assert_eq!(
            err.message(),
            "The logarithm argument (a) must be greater than 0."
        );

        let err = evaluate(Operation::Logarithm, 8.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDomain);
        assert_eq!(
            err.message(),
            "The logarithm base (b) must be greater than 0 and not equal to 1."
        );

        assert_eq!(
            kind_of(evaluate(Operation::Logarithm, 0.0, 2.0)),
            ErrorKind::InvalidDomain
        );
        assert_eq!(
            kind_of(evaluate(Operation::Logarithm, 8.0, -2.0)),
            ErrorKind::InvalidDomain
        );
    }

    #[test]
    fn test_logarithm_checks_argument_before_base() {
        let err = evaluate(Operation::Logarithm, -1.0, 1.0).unwrap_err();
        assert_eq!(
            err.message(),
            "The logarithm argument (a) must be greater than 0."
        );
    }

    #[test]
    fn test_log_shortcuts() {
        assert_close(
            evaluate_log(std::f64::consts::E, LogBase::Natural, 0.0),
            1.0,
        );
        assert_close(evaluate_log(100.0, LogBase::Common, 0.0), 2.0);
        assert_close(evaluate_log(8.0, LogBase::Manual, 2.0), 3.0);
    }

    #[test]
    fn test_log_shortcut_overrides_manual_base() {
        // 入力された底が不正でもショートカットが優先される
        assert_close(evaluate_log(100.0, LogBase::Common, 1.0), 2.0);
        assert_close(evaluate_log(100.0, LogBase::Common, f64::NAN), 2.0);
    }

    #[test]
    fn test_non_finite_operand_is_unknown() {
        let err = evaluate(Operation::Add, f64::NAN, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(
            err.message(),
            "An unknown error occurred: operand `a` is not a finite number"
        );
        assert_eq!(
            kind_of(evaluate(Operation::Divide, 1.0, f64::INFINITY)),
            ErrorKind::Unknown
        );
    }

    fn finite() -> impl Strategy<Value = f64> {
        -1e12f64..1e12
    }

    fn non_zero() -> impl Strategy<Value = f64> {
        finite().prop_filter("non-zero", |b| *b != 0.0)
    }

    proptest! {
        #[test]
        fn prop_divide_matches_native_division(a in finite(), b in non_zero()) {
            prop_assert_eq!(evaluate(Operation::Divide, a, b), Ok(a / b));
        }

        #[test]
        fn prop_zero_divisor_is_division_by_zero(a in finite()) {
            prop_assert_eq!(kind_of(evaluate(Operation::Divide, a, 0.0)), ErrorKind::DivisionByZero);
            prop_assert_eq!(kind_of(evaluate(Operation::Modulo, a, 0.0)), ErrorKind::DivisionByZero);
        }

        #[test]
        fn prop_modulo_takes_divisor_sign(a in finite(), b in non_zero()) {
            let rem = evaluate(Operation::Modulo, a, b).unwrap();
            prop_assert_eq!(rem.is_sign_negative(), b < 0.0);
            prop_assert!(rem.abs() <= b.abs());
        }

        #[test]
        fn prop_log_non_positive_argument(a in -1e6f64..=0.0, b in 0.1f64..100.0) {
            prop_assert_eq!(kind_of(evaluate(Operation::Logarithm, a, b)), ErrorKind::InvalidDomain);
        }

        #[test]
        fn prop_log_non_positive_base(a in 0.1f64..1e6, b in -1e6f64..=0.0) {
            prop_assert_eq!(kind_of(evaluate(Operation::Logarithm, a, b)), ErrorKind::InvalidDomain);
            prop_assert_eq!(kind_of(evaluate(Operation::Logarithm, a, 1.0)), ErrorKind::InvalidDomain);
        }

        #[test]
        fn prop_shortcuts_match_manual_base(a in 1e-6f64..1e6) {
            prop_assert_eq!(
                evaluate_log(a, LogBase::Natural, 0.0),
                evaluate(Operation::Logarithm, a, std::f64::consts::E)
            );
            prop_assert_eq!(
                evaluate_log(a, LogBase::Common, 0.0),
                evaluate(Operation::Logarithm, a, 10.0)
            );
        }

        #[test]
        fn prop_power_inverts_logarithm(a in 1e-3f64..1e6, b in 1.5f64..50.0) {
            let exponent = evaluate(Operation::Logarithm, a, b).unwrap();
            let back = evaluate(Operation::Power, b, exponent).unwrap();
            prop_assert!((back - a).abs() <= 1e-9 * a.max(1.0));
        }
    }
}
