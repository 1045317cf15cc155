#![cfg(feature = "dev")]

use lwls_rs::internals::primitives::errors::LwlsError;

#[test]
fn test_lwls_error_display() {
    // EmptyInput
    let err = LwlsError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // DimensionMismatch
    let err = LwlsError::DimensionMismatch {
        what: "weights",
        expected: 10,
        got: 9,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: weights has 9 elements, expected 10"
    );

    // UnknownKernel
    let err = LwlsError::UnknownKernel("tricube".to_string());
    assert_eq!(
        format!("{}", err),
        "Unknown kernel: 'tricube' (expected one of epan, rect, gauss, gausvar, quar, tria)"
    );

    // InvalidBandwidth
    let err = LwlsError::InvalidBandwidth(-0.5);
    assert_eq!(
        format!("{}", err),
        "Invalid bandwidth: -0.5 (must be > 0 and finite)"
    );

    // InvalidPolynomialOrder
    let err = LwlsError::InvalidPolynomialOrder(3);
    assert_eq!(
        format!("{}", err),
        "Invalid polynomial order: 3 (must be 1 or 2)"
    );

    // InvalidGrid
    let err = LwlsError::InvalidGrid("xgrid is empty".to_string());
    assert_eq!(format!("{}", err), "Invalid grid: xgrid is empty");

    // InvalidNumericValue
    let err = LwlsError::InvalidNumericValue("values[2]=NaN".to_string());
    assert_eq!(
        format!("{}", err),
        "Invalid numeric value: values[2]=NaN"
    );

    // NegativeWeight
    let err = LwlsError::NegativeWeight {
        index: 4,
        value: -1.0,
    };
    assert_eq!(
        format!("{}", err),
        "Negative weight: weights[4]=-1 (must be >= 0)"
    );

    // DuplicateParameter
    let err = LwlsError::DuplicateParameter {
        parameter: "bandwidth",
    };
    assert_eq!(
        format!("{}", err),
        "Parameter 'bandwidth' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_lwls_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(LwlsError::EmptyInput);
    assert_eq!(err.to_string(), "Input arrays are empty");
}

#[test]
fn test_lwls_error_equality() {
    assert_eq!(
        LwlsError::InvalidPolynomialOrder(0),
        LwlsError::InvalidPolynomialOrder(0)
    );
    assert_ne!(
        LwlsError::UnknownKernel("a".to_string()),
        LwlsError::UnknownKernel("b".to_string())
    );
}
