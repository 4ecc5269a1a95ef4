use crate::helper_model::DashboardStats;
use crate::model::{Booking, BookingStatus, ContactMessage};

/// Rolls the full booking and message sets up into the dashboard numbers.
/// Revenue counts Confirmed bookings only; Pending money is not yet earned
/// and Cancelled money never will be.
pub fn dashboard_stats(bookings: &[Booking], messages: &[ContactMessage]) -> DashboardStats {
    let pending = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .count() as i64;
    let confirmed = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .count() as i64;
    let revenue: i64 = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| b.total_price as i64)
        .sum();
    let unread_messages = messages.iter().filter(|m| !m.read).count() as i64;
    DashboardStats {
        total: bookings.len() as i64,
        pending,
        confirmed,
        revenue,
        unread_messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn booking(booking_id: i32, status: BookingStatus, total_price: i32) -> Booking {
        Booking {
            id: booking_id,
            name: "Ali Raza".to_string(),
            email: "ali@example.com".to_string(),
            phone: "0300 1234567".to_string(),
            car_id: "toyota-yaris-1".to_string(),
            car_name: "Toyota Yaris".to_string(),
            pickup_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            return_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            days: 2,
            price_per_day: total_price / 2,
            total_price,
            with_driver: true,
            status,
            user_id: None,
            created_at: Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap(),
        }
    }

    fn message(message_id: i32, read: bool) -> ContactMessage {
        ContactMessage {
            id: message_id,
            name: "Sana".to_string(),
            email: "sana@example.com".to_string(),
            phone: "0321 7654321".to_string(),
            message: "Do you deliver to the airport?".to_string(),
            read,
            created_at: Utc.with_ymd_and_hms(2025, 5, 30, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn revenue_counts_confirmed_only() {
        let bookings = vec![
            booking(1, BookingStatus::Confirmed, 12000),
            booking(2, BookingStatus::Pending, 9000),
            booking(3, BookingStatus::Cancelled, 15000),
        ];
        let stats = dashboard_stats(&bookings, &[]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.confirmed, 1);
        assert_eq!(stats.revenue, 12000);
    }

    #[test]
    fn empty_sets_roll_up_to_zero() {
        let stats = dashboard_stats(&[], &[]);
        assert_eq!(
            stats,
            DashboardStats {
                total: 0,
                pending: 0,
                confirmed: 0,
                revenue: 0,
                unread_messages: 0,
            }
        );
    }

    #[test]
    fn unread_count_ignores_read_messages() {
        let messages = vec![message(1, false), message(2, true), message(3, false)];
        let stats = dashboard_stats(&[], &messages);
        assert_eq!(stats.unread_messages, 2);
    }

    #[test]
    fn revenue_sums_every_confirmed_row() {
        let bookings = vec![
            booking(1, BookingStatus::Confirmed, 16000),
            booking(2, BookingStatus::Confirmed, 54000),
            booking(3, BookingStatus::Pending, 6000),
        ];
        assert_eq!(dashboard_stats(&bookings, &[]).revenue, 70000);
    }
}
