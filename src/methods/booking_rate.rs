use chrono::NaiveDate;

/// A booking is priced per started calendar day with a floor of one day.
/// The rate is snapshotted into the booking row at creation, so catalog
/// price edits never touch existing bookings.
pub fn rental_days(pickup_date: NaiveDate, return_date: NaiveDate) -> i32 {
    let diff = (return_date - pickup_date).num_days();
    diff.max(1) as i32
}

pub fn total_price(price_per_day: i32, days: i32) -> i32 {
    price_per_day * days
}

// The only temporal rule the domain enforces. Pickup dates in the past are
// a presentation concern, not rejected here.
pub fn date_range_is_valid(pickup_date: NaiveDate, return_date: NaiveDate) -> bool {
    return_date > pickup_date
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn two_night_rental() {
        let days = rental_days(d(2025, 6, 1), d(2025, 6, 3));
        assert_eq!(days, 2);
        assert_eq!(total_price(8000, days), 16000);
    }

    #[test]
    fn single_day_rental() {
        let days = rental_days(d(2025, 6, 1), d(2025, 6, 2));
        assert_eq!(days, 1);
        assert_eq!(total_price(6000, days), 6000);
    }

    #[test]
    fn day_count_floors_at_one() {
        assert_eq!(rental_days(d(2025, 6, 1), d(2025, 6, 1)), 1);
    }

    #[test]
    fn month_boundary() {
        let days = rental_days(d(2025, 1, 30), d(2025, 2, 2));
        assert_eq!(days, 3);
        assert_eq!(total_price(18000, days), 54000);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(!date_range_is_valid(d(2025, 6, 3), d(2025, 6, 1)));
    }

    #[test]
    fn same_day_is_rejected() {
        assert!(!date_range_is_valid(d(2025, 6, 1), d(2025, 6, 1)));
    }

    #[test]
    fn forward_range_is_accepted() {
        assert!(date_range_is_valid(d(2025, 6, 1), d(2025, 6, 3)));
    }
}
