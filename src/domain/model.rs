use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponent,
    Modulus,
}

impl ArithmeticOp {
    pub const ALL: [ArithmeticOp; 6] = [
        ArithmeticOp::Addition,
        ArithmeticOp::Subtraction,
        ArithmeticOp::Multiplication,
        ArithmeticOp::Division,
        ArithmeticOp::Exponent,
        ArithmeticOp::Modulus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ArithmeticOp::Addition => "Addition",
            ArithmeticOp::Subtraction => "Subtraction",
            ArithmeticOp::Multiplication => "Multiplication",
            ArithmeticOp::Division => "Division",
            ArithmeticOp::Exponent => "Exponent",
            ArithmeticOp::Modulus => "Modulus",
        }
    }
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArithmeticOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArithmeticOp::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalcError::InvalidOperation {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Rectangle,
    Square,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Rectangle, Shape::Square];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Rectangle => "Rectangle",
            Shape::Square => "Square",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| CalcError::InvalidShape {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Each band includes its lower bound and excludes its upper bound.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 24.9 {
            BmiCategory::NormalWeight
        } else if bmi < 29.9 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        };
        f.write_str(label)
    }
}

/// Unit name to multiplier against the table's base unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitTable {
    pub quantity: &'static str,
    pub base_unit: &'static str,
    entries: &'static [(&'static str, f64)],
}

impl UnitTable {
    pub const fn new(
        quantity: &'static str,
        base_unit: &'static str,
        entries: &'static [(&'static str, f64)],
    ) -> Self {
        Self {
            quantity,
            base_unit,
            entries,
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn multiplier(&self, unit: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    pub fn units(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// One response from the exchange-rate API. Valid only for the call that fetched it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeRates {
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub rates: Option<HashMap<String, f64>>,
}

impl ExchangeRates {
    pub fn from_rates<I, K>(base_code: &str, rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            base_code: Some(base_code.to_string()),
            rates: Some(rates.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.as_ref()?.get(currency).copied()
    }
}
