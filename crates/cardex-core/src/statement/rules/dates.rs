//! Date canonicalization for statement fields.
//!
//! Captured dates keep their original rendering (a statement printing
//! `01/23/22` stays `01/23/22`); canonicalization only unifies separators
//! and rejects captures that cannot form a real calendar date under the
//! issuer's date order.

use chrono::NaiveDate;

/// Component order of numeric dates for an issuer's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// US style: MM/DD/YY or MM/DD/YYYY.
    MonthFirst,
    /// Indian style: DD/MM/YYYY.
    DayFirst,
}

/// Canonicalize a numeric date: trim, unify `-`/`.` separators to `/`, and
/// (when `validate` is set) reject values that are not real calendar dates.
pub fn canonicalize_date(raw: &str, order: DateOrder, validate: bool) -> Option<String> {
    let canonical = raw.trim().replace(['-', '.'], "/");

    let parts: Vec<&str> = canonical.split('/').collect();
    if parts.len() != 3 {
        return None;
    }

    if validate && !is_valid_date(&parts, order) {
        return None;
    }

    Some(canonical)
}

/// Canonicalize a date range ("11/27/21 - 12/26/21" -> "11/27/21-12/26/21").
/// Both endpoints must canonicalize under the given order.
pub fn canonicalize_range(raw: &str, order: DateOrder, validate: bool) -> Option<String> {
    let (start, end) = raw.split_once(" - ").or_else(|| raw.split_once('-'))?;
    let start = canonicalize_date(start, order, validate)?;
    let end = canonicalize_date(end, order, validate)?;
    Some(format!("{}-{}", start, end))
}

/// Canonicalize a month-name date ("Mar 1, 2024"). The original rendering is
/// kept; chrono is used only as a validity gate.
pub fn canonicalize_month_name(raw: &str, validate: bool) -> Option<String> {
    let trimmed = raw.trim().to_string();

    if validate {
        let parsed = NaiveDate::parse_from_str(&trimmed, "%b %d, %Y")
            .or_else(|_| NaiveDate::parse_from_str(&trimmed, "%b %d %Y"));
        if parsed.is_err() {
            return None;
        }
    }

    Some(trimmed)
}

fn is_valid_date(parts: &[&str], order: DateOrder) -> bool {
    let nums: Vec<u32> = parts.iter().filter_map(|p| p.trim().parse().ok()).collect();
    if nums.len() != 3 {
        return false;
    }

    let (month, day) = match order {
        DateOrder::MonthFirst => (nums[0], nums[1]),
        DateOrder::DayFirst => (nums[1], nums[0]),
    };

    NaiveDate::from_ymd_opt(expand_year(nums[2]), month, day).is_some()
}

fn expand_year(year: u32) -> i32 {
    // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
    if year < 100 {
        if year <= 50 {
            2000 + year as i32
        } else {
            1900 + year as i32
        }
    } else {
        year as i32
    }
}
