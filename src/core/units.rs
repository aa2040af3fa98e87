use crate::domain::model::UnitTable;
use crate::utils::error::{CalcError, Result};

pub static LENGTH_UNITS: UnitTable = UnitTable::new(
    "length",
    "m",
    &[
        ("m", 1.0),
        ("km", 1000.0),
        ("cm", 0.01),
        ("mm", 0.001),
        ("inch", 0.0254),
        ("foot", 0.3048),
    ],
);

pub static TIME_UNITS: UnitTable = UnitTable::new(
    "time",
    "seconds",
    &[
        ("seconds", 1.0),
        ("minutes", 60.0),
        ("hours", 3600.0),
        ("days", 86400.0),
    ],
);

/// Both units must be present in `table`; names are matched exactly.
pub fn convert(table: &UnitTable, value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    match (table.multiplier(from_unit), table.multiplier(to_unit)) {
        (Some(from), Some(to)) => Ok(value * from / to),
        _ => {
            tracing::debug!(
                "Unknown {} unit in conversion {} -> {}",
                table.quantity,
                from_unit,
                to_unit
            );
            Err(CalcError::InvalidUnits {
                from: from_unit.to_string(),
                to: to_unit.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        assert_eq!(convert(&LENGTH_UNITS, 1.0, "km", "m").unwrap(), 1000.0);
        assert!((convert(&LENGTH_UNITS, 1.0, "foot", "inch").unwrap() - 12.0).abs() < 1e-9);
        assert!((convert(&LENGTH_UNITS, 250.0, "cm", "m").unwrap() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_time_conversions() {
        assert_eq!(convert(&TIME_UNITS, 2.0, "hours", "minutes").unwrap(), 120.0);
        assert_eq!(convert(&TIME_UNITS, 1.0, "days", "seconds").unwrap(), 86400.0);
    }

    #[test]
    fn test_unknown_units() {
        assert!(convert(&LENGTH_UNITS, 1.0, "km", "parsec").is_err());
        assert!(convert(&LENGTH_UNITS, 1.0, "KM", "m").is_err());
        assert!(convert(&TIME_UNITS, 1.0, "m", "seconds").is_err());
    }

    #[test]
    fn test_round_trip_every_pair() {
        let value = 123.456;
        for table in [&LENGTH_UNITS, &TIME_UNITS] {
            for a in table.units() {
                for b in table.units() {
                    let there = convert(table, value, a, b).unwrap();
                    let back = convert(table, there, b, a).unwrap();
                    assert!(
                        (back - value).abs() < 1e-9 * value,
                        "{} -> {} -> {} gave {}",
                        a,
                        b,
                        a,
                        back
                    );
                }
            }
        }
    }
}
