use chrono::NaiveDate;
use multi_calc::core::units::{LENGTH_UNITS, TIME_UNITS};
use multi_calc::{forms, FixedClock};

#[test]
fn test_calculator_matches_native_operators() {
    let operands = [(1.5, 2.25), (-10.0, 4.0), (1e6, 1e-3), (0.0, -7.0)];
    for (a, b) in operands {
        assert_eq!(forms::calculator("Addition", a, Some(b)), (a + b).to_string());
        assert_eq!(forms::calculator("Subtraction", a, Some(b)), (a - b).to_string());
        assert_eq!(
            forms::calculator("Multiplication", a, Some(b)),
            (a * b).to_string()
        );
    }
}

#[test]
fn test_division_by_zero_for_any_numerator() {
    for a in [0.0, 1.0, -3.5, f64::MAX] {
        assert_eq!(
            forms::calculator("Division", a, Some(0.0)),
            "Error: Division by zero!"
        );
    }
}

#[test]
fn test_bmi_outputs() {
    assert_eq!(forms::calculate_bmi(70.0, 0.0), "Error: Height cannot be zero");
    assert_eq!(forms::calculate_bmi(70.0, 1.75), "BMI: 22.86 (Normal weight)");
    assert_eq!(forms::calculate_bmi(50.0, 1.75), "BMI: 16.33 (Underweight)");
    assert_eq!(forms::calculate_bmi(85.0, 1.75), "BMI: 27.76 (Overweight)");
    assert_eq!(forms::calculate_bmi(100.0, 1.75), "BMI: 32.65 (Obesity)");
}

#[test]
fn test_age_on_fixed_date() {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    assert_eq!(forms::calculate_age_with("2000-01-01", &clock), "Age: 24 years");
    assert_eq!(
        forms::calculate_age_with("2000/01/01", &clock),
        "Error: Invalid date format! Use YYYY-MM-DD."
    );
}

#[test]
fn test_length_and_area_outputs() {
    assert_eq!(forms::length_converter(1.0, "km", "m"), "1 km = 1000.00 m");
    assert_eq!(forms::length_converter(1.0, "km", "parsec"), "Error: Invalid units");
    assert_eq!(forms::length_converter(12.0, "inch", "foot"), "12 inch = 1.00 foot");
    assert_eq!(forms::calculate_area("Circle", 2.0, 0.0), "Area: 12.57 sq units");
    assert_eq!(forms::calculate_area("Square", 1.5, 0.0), "Area: 2.25 sq units");
}

#[test]
fn test_time_converter_rejects_length_units() {
    assert_eq!(forms::time_converter(1.0, "hours", "km"), "Error: Invalid units");
    assert_eq!(
        forms::time_converter(3600.0, "seconds", "hours"),
        "3600 seconds = 1.00 hours"
    );
}

#[test]
fn test_unit_tables_round_trip_through_forms() {
    for (table, convert) in [
        (&LENGTH_UNITS, forms::length_converter as fn(f64, &str, &str) -> String),
        (&TIME_UNITS, forms::time_converter as fn(f64, &str, &str) -> String),
    ] {
        for a in table.units() {
            for b in table.units() {
                let there = multi_calc::core::units::convert(table, 42.0, a, b).unwrap();
                let back = multi_calc::core::units::convert(table, there, b, a).unwrap();
                assert!((back - 42.0).abs() < 1e-9, "{} <-> {}", a, b);

                let rendered = convert(42.0, a, b);
                assert!(rendered.starts_with(&format!("42 {} = ", a)));
                assert!(rendered.ends_with(&format!(" {}", b)));
            }
        }
    }
}
