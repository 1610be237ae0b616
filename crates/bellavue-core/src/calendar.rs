// Calendar view support: date-bucketing of a flat event list into the days
// of one month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::event::Event;

/// One day of a month view with the events booked on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

/// Bucket `events` into the days of the given month.
///
/// Events whose `date` does not parse as `YYYY-MM-DD` are skipped; events in
/// other months are ignored. Returns `None` for an invalid year/month pair.
/// Within a day, the incoming order (date-ascending snapshot) is preserved.
pub fn month_days(year: i32, month: u32, events: &[Event]) -> Option<Vec<CalendarDay>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let mut days: Vec<CalendarDay> = Vec::new();
    let mut day = first;
    while day.month() == month {
        days.push(CalendarDay {
            date: day,
            events: Vec::new(),
        });
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    for event in events {
        let Ok(date) = NaiveDate::parse_from_str(&event.date, "%Y-%m-%d") else {
            continue;
        };
        if date.year() == year && date.month() == month {
            let index = (date.day() - 1) as usize;
            days[index].events.push(event.clone());
        }
    }

    Some(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_on(date: &str, title: &str) -> Event {
        Event {
            title: title.into(),
            date: date.into(),
            ..Event::default()
        }
    }

    #[test]
    fn buckets_events_by_day() {
        let events = vec![
            event_on("2025-06-01", "Geburtstag Müller"),
            event_on("2025-06-01", "Firmenfeier"),
            event_on("2025-06-15", "Hochzeit Yilmaz"),
            event_on("2025-07-01", "anderer Monat"),
        ];
        let days = month_days(2025, 6, &events).unwrap();

        assert_eq!(days.len(), 30);
        assert_eq!(days[0].events.len(), 2);
        assert_eq!(days[0].events[0].title, "Geburtstag Müller");
        assert_eq!(days[14].events.len(), 1);
        assert_eq!(days[14].events[0].title, "Hochzeit Yilmaz");
        // The July event lands nowhere in June
        let total: usize = days.iter().map(|d| d.events.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn skips_unparsable_dates() {
        let events = vec![
            event_on("06/01/2025", "falsches Format"),
            event_on("", "kein Datum"),
            event_on("2025-06-02", "gültig"),
        ];
        let days = month_days(2025, 6, &events).unwrap();
        let total: usize = days.iter().map(|d| d.events.len()).sum();
        assert_eq!(total, 1);
        assert_eq!(days[1].events[0].title, "gültig");
    }

    #[test]
    fn rejects_invalid_month() {
        assert!(month_days(2025, 13, &[]).is_none());
        assert!(month_days(2025, 0, &[]).is_none());
    }

    #[test]
    fn february_leap_year() {
        let days = month_days(2024, 2, &[]).unwrap();
        assert_eq!(days.len(), 29);
        let days = month_days(2025, 2, &[]).unwrap();
        assert_eq!(days.len(), 28);
    }
}
