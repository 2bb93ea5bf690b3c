use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// One tracked houseplant.
///
/// `id` is the stable identity of the record and the only lookup key for
/// mutations. Everything except `last_watered` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: Uuid,
    pub name: String,
    /// Days between waterings. Always positive for records created through
    /// the add command.
    pub water_every: i64,
    pub last_watered: DateTime<Utc>,
}

impl Plant {
    pub fn new(name: String, water_every: i64, last_watered: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            water_every,
            last_watered: last_watered.unwrap_or_else(Utc::now),
        }
    }

    /// Fractional days elapsed since the last watering, measured in real
    /// time (milliseconds), not calendar days.
    pub fn days_since_watered(&self, now: DateTime<Utc>) -> f64 {
        (now - self.last_watered).num_milliseconds() as f64 / MILLIS_PER_DAY
    }

    /// The next watering as a calendar date: the local date the plant was
    /// last watered plus the interval in whole days.
    ///
    /// This intentionally uses calendar-day addition while [`needs_water`]
    /// uses elapsed real time; the two can disagree near a day boundary.
    ///
    /// [`needs_water`]: Plant::needs_water
    pub fn next_watering(&self) -> NaiveDate {
        let date = self.last_watered.with_timezone(&Local).date_naive();
        u64::try_from(self.water_every)
            .ok()
            .and_then(|days| date.checked_add_days(Days::new(days)))
            .unwrap_or(date)
    }

    /// True once the elapsed time since watering reaches the interval.
    /// The threshold is inclusive: exactly `water_every` days counts as due.
    pub fn needs_water(&self, now: DateTime<Utc>) -> bool {
        self.days_since_watered(now) >= self.water_every as f64
    }

    pub fn schedule(&self, now: DateTime<Utc>) -> Schedule {
        Schedule {
            next_watering: self.next_watering(),
            needs_water: self.needs_water(now),
        }
    }
}

/// Derived scheduling fields, computed at read time and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub next_watering: NaiveDate,
    pub needs_water: bool,
}
