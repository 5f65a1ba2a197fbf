use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

use crate::error::AppError;

/// Where a rejected booking form sends the user back to.
const BOOKING_FORM: &str = "/booking/new";

/// Accepted local date-time layouts, tried in order after RFC 3339.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Raw booking form as posted by the browser.
///
/// `health_safety` is a checkbox: present under any value means acknowledged.
#[derive(Deserialize, Default)]
pub struct BookingForm {
    #[serde(default)]
    pub park_id: String,
    #[serde(default)]
    pub date: String,
    pub num_tickets: Option<String>,
    pub health_safety: Option<String>,
}

/// A booking form that passed validation.
#[derive(Debug, PartialEq, Eq)]
pub struct NewBooking {
    pub park_id: i32,
    pub date: NaiveDateTime,
    pub num_tickets: i32,
    pub health_safety: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingFormError {
    #[error("Please choose a park.")]
    MissingPark,
    #[error("Selected park does not exist.")]
    InvalidPark,
    #[error("Please choose a date.")]
    MissingDate,
    #[error("'{0}' is not a valid date. Use YYYY-MM-DDTHH:MM.")]
    InvalidDate(String),
    #[error("Number of tickets must be a whole number of at least 1.")]
    InvalidTickets,
}

impl From<BookingFormError> for AppError {
    fn from(err: BookingFormError) -> Self {
        AppError::validation(err.to_string(), BOOKING_FORM)
    }
}

pub fn parse_booking_form(form: &BookingForm) -> Result<NewBooking, BookingFormError> {
    let park_id = form.park_id.trim();
    if park_id.is_empty() {
        return Err(BookingFormError::MissingPark);
    }
    let park_id = park_id
        .parse::<i32>()
        .map_err(|_| BookingFormError::InvalidPark)?;

    Ok(NewBooking {
        park_id,
        date: parse_visit_date(&form.date)?,
        num_tickets: parse_num_tickets(form.num_tickets.as_deref())?,
        health_safety: form.health_safety.is_some(),
    })
}

/// Parse an ISO-8601 visit date. Offsets are normalised to UTC; a bare date means midnight.
pub fn parse_visit_date(raw: &str) -> Result<NaiveDateTime, BookingFormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(BookingFormError::MissingDate);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }

    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| BookingFormError::InvalidDate(raw.to_owned()))
}

/// Absent or blank means one ticket.
pub fn parse_num_tickets(raw: Option<&str>) -> Result<i32, BookingFormError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(1);
    }
    match raw.parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(BookingFormError::InvalidTickets),
    }
}
