//! One function per calculator form.
//!
//! Inputs arrive already parsed; the output is always the text shown to the
//! user. Failures are rendered, never returned.

use crate::core::currency::CurrencyConverter;
use crate::core::health::SystemClock;
use crate::core::units::{self, LENGTH_UNITS, TIME_UNITS};
use crate::core::{arithmetic, geometry, health};
use crate::domain::model::UnitTable;
use crate::domain::ports::{Clock, RateProvider};
use crate::utils::error::{CalcError, Result};
use std::fmt::Display;

fn render<T: Display>(form: &str, result: Result<T>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => render_error(form, e),
    }
}

fn render_error(form: &str, e: CalcError) -> String {
    if e.is_domain_error() {
        tracing::debug!("{} rejected input: {:?}", form, e);
    } else {
        tracing::warn!("{} failed: {} ({})", form, e, e.recovery_suggestion());
    }
    e.to_string()
}

pub fn calculator(operation: &str, num1: f64, num2: Option<f64>) -> String {
    render("calculator", arithmetic::calculate(operation, num1, num2))
}

pub fn log_calculator(number: f64, base: f64) -> String {
    render("log_calculator", arithmetic::logarithm(number, base))
}

pub fn antilog_calculator(log_value: f64, base: f64) -> String {
    render("antilog_calculator", arithmetic::antilogarithm(log_value, base))
}

pub fn square_root(number: f64) -> String {
    render("square_root", arithmetic::square_root(number))
}

pub fn cube_root(number: f64) -> String {
    arithmetic::cube_root(number).to_string()
}

pub fn calculate_bmi(weight: f64, height: f64) -> String {
    render(
        "calculate_bmi",
        health::body_mass_index(weight, height)
            .map(|r| format!("BMI: {:.2} ({})", r.bmi, r.category)),
    )
}

pub fn calculate_age(birthdate: &str) -> String {
    calculate_age_with(birthdate, &SystemClock)
}

pub fn calculate_age_with(birthdate: &str, clock: &dyn Clock) -> String {
    render(
        "calculate_age",
        health::age_in_years(birthdate, clock).map(|age| format!("Age: {} years", age)),
    )
}

pub fn calculate_area(shape: &str, dimension_1: f64, dimension_2: f64) -> String {
    render(
        "calculate_area",
        geometry::area_by_name(shape, dimension_1, dimension_2)
            .map(|area| format!("Area: {:.2} sq units", area)),
    )
}

fn unit_converter(
    form: &str,
    table: &UnitTable,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> String {
    render(
        form,
        units::convert(table, value, from_unit, to_unit).map(|converted| {
            format!("{} {} = {:.2} {}", value, from_unit, converted, to_unit)
        }),
    )
}

pub fn length_converter(value: f64, from_unit: &str, to_unit: &str) -> String {
    unit_converter("length_converter", &LENGTH_UNITS, value, from_unit, to_unit)
}

pub fn time_converter(value: f64, from_unit: &str, to_unit: &str) -> String {
    unit_converter("time_converter", &TIME_UNITS, value, from_unit, to_unit)
}

pub async fn currency_converter<R: RateProvider>(
    converter: &CurrencyConverter<R>,
    amount: f64,
    from_currency: &str,
    to_currency: &str,
) -> String {
    match converter.convert(amount, from_currency, to_currency).await {
        Ok(converted) => format!(
            "{} {} = {:.2} {}",
            amount, from_currency, converted, to_currency
        ),
        Err(e) => render_error("currency_converter", e),
    }
}
