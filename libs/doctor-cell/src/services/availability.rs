use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};
use tracing::debug;

use crate::models::{BookedSlotIndex, DaySlots, TimeSlot, WorkingHoursPolicy};

/// Number of days offered in the slot picker, today included.
pub const BOOKING_WINDOW_DAYS: i64 = 7;

/// Minute at which today's first slot snaps to the half hour.
const HALF_HOUR_MINUTE: u32 = 30;

/// Day-key used to index booked slots: unpadded `day_month_year`.
pub fn day_key(date: NaiveDate) -> String {
    format!("{}_{}_{}", date.day(), date.month(), date.year())
}

/// Display label of a slot, e.g. `02:30 PM`. Booked labels use the same format.
pub fn format_slot_label(date_time: NaiveDateTime) -> String {
    date_time.format("%I:%M %p").to_string()
}

pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "SUN",
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
    }
}

#[derive(Debug, Clone, Default)]
pub struct SlotGenerator {
    policy: WorkingHoursPolicy,
}

impl SlotGenerator {
    pub fn new() -> Self {
        Self {
            policy: WorkingHoursPolicy::STANDARD,
        }
    }

    /// Builds the week of bookable slots starting at `now`'s calendar day.
    ///
    /// `now` is a single clinic-local clock reading; it is never re-read while
    /// the week is built. Labels found in `booked` under the day's key are
    /// left out, and unknown day-keys count as having no bookings.
    pub fn generate(&self, now: NaiveDateTime, booked: &BookedSlotIndex) -> Vec<DaySlots> {
        debug!("Generating {} days of slots from {}", BOOKING_WINDOW_DAYS, now);

        let step = Duration::minutes(self.policy.slot_minutes);

        (0..BOOKING_WINDOW_DAYS)
            .map(|offset| {
                let date = now.date() + Duration::days(offset);
                let key = day_key(date);
                let booked_labels = booked.get(&key);
                let mut slots = Vec::new();

                let start = self.day_start(now, offset, date);
                let end = date.and_hms_opt(self.policy.end_hour, 0, 0);

                if let (Some(mut current), Some(end)) = (start, end) {
                    while current < end {
                        let label = format_slot_label(current);

                        if booked_labels.is_some_and(|labels| labels.contains(&label)) {
                            debug!("Skipping booked slot {} on {}", label, key);
                        } else {
                            slots.push(TimeSlot {
                                date_time: current,
                                label,
                            });
                        }

                        current += step;
                    }
                }

                DaySlots {
                    date,
                    weekday: weekday_label(date).to_string(),
                    day_key: key,
                    slots,
                }
            })
            .collect()
    }

    /// First bookable slot across the generated week.
    pub fn next_available(&self, now: NaiveDateTime, booked: &BookedSlotIndex) -> Option<TimeSlot> {
        self.generate(now, booked)
            .into_iter()
            .find_map(|day| day.slots.into_iter().next())
    }

    /// Opening time of the day at `offset`. For today the hour moves past the
    /// current one once opening time has gone, and the minute only snaps to
    /// :00 or :30. An hour past midnight yields `None`, leaving the day empty.
    fn day_start(&self, now: NaiveDateTime, offset: i64, date: NaiveDate) -> Option<NaiveDateTime> {
        let (hour, minute) = if offset == 0 {
            let hour = if now.hour() > self.policy.start_hour {
                now.hour() + 1
            } else {
                self.policy.start_hour
            };
            let minute = if now.minute() > HALF_HOUR_MINUTE {
                HALF_HOUR_MINUTE
            } else {
                0
            };
            (hour, minute)
        } else {
            (self.policy.start_hour, 0)
        };

        date.and_hms_opt(hour, minute, 0)
    }
}
