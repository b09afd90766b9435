//! Time arithmetic and hours aggregation.
//!
//! This module converts `HH:MM` clock strings to minute offsets, computes
//! worked minutes per timesheet entry net of unpaid breaks, and splits a
//! timesheet's total hours into normal and overtime hours against the
//! configured weekly threshold.

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::TimesheetEntry;

use super::rounding::round_to_two_dp;

/// The split of a timesheet's total hours into normal and overtime hours.
///
/// Derived data, never persisted independently. `normal_hours` never
/// exceeds the overtime threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatedHours {
    /// Hours paid at the base rate, capped at the overtime threshold.
    pub normal_hours: Decimal,
    /// Hours above the threshold, paid at the overtime multiplier.
    pub overtime_hours: Decimal,
}

/// Parses an `HH:MM` clock string into minutes since midnight.
///
/// Only the shape of the string is validated; out-of-range components
/// such as `"25:00"` are accepted, matching the upstream input contract
/// where range checks belong to request validation.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] when the string is not two
/// colon-separated numeric fields.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_time_to_minutes;
///
/// assert_eq!(parse_time_to_minutes("09:00").unwrap(), 540);
/// assert_eq!(parse_time_to_minutes("17:30").unwrap(), 1050);
/// assert!(parse_time_to_minutes("9am").is_err());
/// ```
pub fn parse_time_to_minutes(time: &str) -> EngineResult<i64> {
    let invalid = || EngineError::InvalidTimeFormat {
        value: time.to_string(),
    };

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;

    Ok(hours * 60 + minutes)
}

/// Computes the worked minutes for a timesheet entry.
///
/// Worked minutes are the shift duration minus the unpaid break, floored
/// at zero. Entries whose end time precedes their start time are clamped
/// to zero worked minutes by policy; overnight shifts are not supported
/// and the clamp is deliberate, not an error.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] if either clock string is
/// malformed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::worked_minutes;
/// use payroll_engine::models::TimesheetEntry;
/// use chrono::NaiveDate;
///
/// let entry = TimesheetEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     start: "09:00".to_string(),
///     end: "17:30".to_string(),
///     unpaid_break_mins: 30,
/// };
/// assert_eq!(worked_minutes(&entry).unwrap(), 480);
/// ```
pub fn worked_minutes(entry: &TimesheetEntry) -> EngineResult<i64> {
    let start = parse_time_to_minutes(&entry.start)?;
    let end = parse_time_to_minutes(&entry.end)?;
    let worked = end - start - i64::from(entry.unpaid_break_mins);

    Ok(worked.max(0))
}

/// Converts minutes to hours, rounded to 2 decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(480), Decimal::new(800, 2)); // 8.00
/// assert_eq!(minutes_to_hours(50), Decimal::new(83, 2));   // 0.83
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    round_to_two_dp(Decimal::new(minutes, 0) / Decimal::new(60, 0))
}

/// Aggregates a timesheet's entries into normal and overtime hours.
///
/// Sums worked minutes across all entries (order-independent), converts
/// the total to hours, and splits against the configured threshold.
/// Overtime applies to the period total only; there is no per-day
/// overtime and no partial-period proration.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] if any entry contains a
/// malformed clock string.
pub fn calculate_hours(
    entries: &[TimesheetEntry],
    config: &PayrollConfig,
) -> EngineResult<CalculatedHours> {
    let mut total_minutes: i64 = 0;
    for entry in entries {
        total_minutes += worked_minutes(entry)?;
    }

    let total_hours = minutes_to_hours(total_minutes);
    let threshold = config.overtime().threshold_hours;

    if total_hours <= threshold {
        return Ok(CalculatedHours {
            normal_hours: total_hours,
            overtime_hours: Decimal::ZERO,
        });
    }

    Ok(CalculatedHours {
        normal_hours: threshold,
        overtime_hours: round_to_two_dp(total_hours - threshold),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_entry(start: &str, end: &str, unpaid_break_mins: u32) -> TimesheetEntry {
        TimesheetEntry {
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            start: start.to_string(),
            end: end.to_string(),
            unpaid_break_mins,
        }
    }

    #[test]
    fn test_parse_time_to_minutes() {
        assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_time_to_minutes("09:00").unwrap(), 540);
        assert_eq!(parse_time_to_minutes("17:30").unwrap(), 1050);
        assert_eq!(parse_time_to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_parse_time_rejects_missing_colon() {
        let result = parse_time_to_minutes("0900");
        assert!(matches!(
            result,
            Err(EngineError::InvalidTimeFormat { value }) if value == "0900"
        ));
    }

    #[test]
    fn test_parse_time_rejects_non_numeric_fields() {
        assert!(parse_time_to_minutes("nine:00").is_err());
        assert!(parse_time_to_minutes("09:3o").is_err());
        assert!(parse_time_to_minutes(":30").is_err());
        assert!(parse_time_to_minutes("09:").is_err());
    }

    /// 09:00-17:30 with a 30 minute break is 480 worked minutes.
    #[test]
    fn test_worked_minutes_with_unpaid_break() {
        let entry = create_entry("09:00", "17:30", 30);
        assert_eq!(worked_minutes(&entry).unwrap(), 480);
    }

    #[test]
    fn test_worked_minutes_no_break() {
        let entry = create_entry("09:00", "17:00", 0);
        assert_eq!(worked_minutes(&entry).unwrap(), 480);
    }

    #[test]
    fn test_worked_minutes_zero_duration_shift() {
        let entry = create_entry("09:00", "09:00", 0);
        assert_eq!(worked_minutes(&entry).unwrap(), 0);
    }

    #[test]
    fn test_worked_minutes_end_before_start_clamps_to_zero() {
        // Overnight shifts are not supported; the negative duration is
        // floored to zero rather than wrapped to the next day.
        let entry = create_entry("22:00", "06:00", 0);
        assert_eq!(worked_minutes(&entry).unwrap(), 0);
    }

    #[test]
    fn test_worked_minutes_break_exceeding_shift_clamps_to_zero() {
        let entry = create_entry("09:00", "09:30", 60);
        assert_eq!(worked_minutes(&entry).unwrap(), 0);
    }

    #[test]
    fn test_worked_minutes_malformed_time_propagates_error() {
        let entry = create_entry("9am", "17:00", 0);
        assert!(worked_minutes(&entry).is_err());
    }

    #[test]
    fn test_minutes_to_hours_exact() {
        assert_eq!(minutes_to_hours(480), dec("8.00"));
        assert_eq!(minutes_to_hours(0), dec("0.00"));
        assert_eq!(minutes_to_hours(2280), dec("38.00"));
    }

    #[test]
    fn test_minutes_to_hours_rounds_to_two_dp() {
        // 50/60 = 0.8333... -> 0.83
        assert_eq!(minutes_to_hours(50), dec("0.83"));
        // 55/60 = 0.91666... -> 0.92
        assert_eq!(minutes_to_hours(55), dec("0.92"));
    }

    #[test]
    fn test_calculate_hours_under_threshold() {
        let config = PayrollConfig::default();
        // Five 7.4 hour days = 37 hours
        let entries: Vec<_> = (5..10)
            .map(|day| TimesheetEntry {
                date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
                start: "09:00".to_string(),
                end: "16:54".to_string(),
                unpaid_break_mins: 30,
            })
            .collect();

        let hours = calculate_hours(&entries, &config).unwrap();
        assert_eq!(hours.normal_hours, dec("37.00"));
        assert_eq!(hours.overtime_hours, dec("0"));
    }

    #[test]
    fn test_calculate_hours_exactly_at_threshold() {
        let config = PayrollConfig::default();
        // 38 hours exactly: no overtime
        let entries = vec![create_entry("00:00", "19:00", 0), create_entry("00:00", "19:00", 0)];

        let hours = calculate_hours(&entries, &config).unwrap();
        assert_eq!(hours.normal_hours, dec("38.00"));
        assert_eq!(hours.overtime_hours, dec("0"));
    }

    #[test]
    fn test_calculate_hours_over_threshold_splits() {
        let config = PayrollConfig::default();
        // Five 9 hour days = 45 hours
        let entries: Vec<_> = (5..10)
            .map(|day| TimesheetEntry {
                date: NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
                start: "08:00".to_string(),
                end: "17:30".to_string(),
                unpaid_break_mins: 30,
            })
            .collect();

        let hours = calculate_hours(&entries, &config).unwrap();
        assert_eq!(hours.normal_hours, dec("38"));
        assert_eq!(hours.overtime_hours, dec("7.00"));
    }

    #[test]
    fn test_calculate_hours_empty_entries() {
        let config = PayrollConfig::default();
        let hours = calculate_hours(&[], &config).unwrap();
        assert_eq!(hours.normal_hours, dec("0.00"));
        assert_eq!(hours.overtime_hours, dec("0"));
    }

    #[test]
    fn test_calculate_hours_is_order_independent() {
        let config = PayrollConfig::default();
        let mut entries = vec![
            create_entry("09:00", "17:30", 30),
            create_entry("08:00", "12:00", 0),
            create_entry("13:00", "18:15", 15),
        ];
        let forward = calculate_hours(&entries, &config).unwrap();
        entries.reverse();
        let backward = calculate_hours(&entries, &config).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_calculate_hours_respects_configured_threshold() {
        use crate::config::{OvertimeConfig, SuperannuationConfig, TaxTable};

        let config = PayrollConfig::new(
            OvertimeConfig {
                threshold_hours: dec("10"),
                multiplier: dec("1.5"),
            },
            SuperannuationConfig::default(),
            TaxTable::default(),
        );
        let entries = vec![create_entry("08:00", "20:00", 0)]; // 12 hours

        let hours = calculate_hours(&entries, &config).unwrap();
        assert_eq!(hours.normal_hours, dec("10"));
        assert_eq!(hours.overtime_hours, dec("2.00"));
    }
}
