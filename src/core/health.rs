use crate::domain::model::BmiCategory;
use crate::domain::ports::Clock;
use crate::utils::error::{CalcError, Result};
use chrono::{Datelike, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Weight in kilograms, height in metres.
pub fn body_mass_index(weight: f64, height: f64) -> Result<BmiReading> {
    if height == 0.0 {
        return Err(CalcError::ZeroHeight);
    }
    let bmi = weight / (height * height);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

/// Whole years between `birthdate` (YYYY-MM-DD) and the clock's today.
/// A birthdate in the future yields a negative age.
pub fn age_in_years(birthdate: &str, clock: &dyn Clock) -> Result<i32> {
    let born = NaiveDate::parse_from_str(birthdate, DATE_FORMAT).map_err(|_| {
        CalcError::InvalidDate {
            input: birthdate.to_string(),
        }
    })?;
    let today = clock.today();

    let before_birthday = (today.month(), today.day()) < (born.month(), born.day());
    Ok(today.year() - born.year() - i32::from(before_birthday))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
