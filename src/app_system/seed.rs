use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::{Booking, BookingStatus, Package, TrainingType, User};

/// Initial contents of the three collections.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub packages: Vec<Package>,
    pub bookings: Vec<Booking>,
}

impl SeedData {
    /// The demo studio. Bookings are placed 2, 4 and 6 hours after `now`.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            users: demo_users(),
            packages: demo_packages(),
            bookings: demo_bookings(now),
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn demo_users() -> Vec<User> {
    vec![
        User::trainer("t1", "أحمد محمود", "الرياض", "لياقة بدنية", date(2023, 1, 15)),
        User::trainer("t2", "خالد الغامدي", "جدة", "EMS", date(2023, 2, 20)),
        User::trainer("t3", "سارة عبد العزيز", "الدمام", "Platten", date(2023, 3, 10)),
        User::client("c1", "فاطمة علي", "الرياض", Some("p2".into()), Some(6), date(2024, 5, 1)),
        User::client("c2", "محمد صالح", "جدة", Some("p3".into()), Some(10), date(2024, 5, 15)),
        User::client("c3", "علي حسن", "الرياض", Some("p1".into()), Some(2), date(2024, 6, 1)),
        User::client("c4", "نورة خالد", "الدمام", Some("p4".into()), Some(1), date(2024, 6, 5)),
    ]
}

fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("p1", "باقة البداية", TrainingType::Normal, 4, 400.0),
        Package::new("p2", "باقة اللياقة", TrainingType::Normal, 8, 750.0),
        Package::new("p3", "باقة EMS الذهبية", TrainingType::Ems, 12, 1500.0),
        Package::new("p4", "باقة Platten المكثفة", TrainingType::Platten, 4, 600.0),
        Package::new("p5", "باقة تجريبية", TrainingType::Normal, 1, 120.0),
    ]
}

fn demo_bookings(now: DateTime<Utc>) -> Vec<Booking> {
    let booking = |id: &str, client: (&str, &str), trainer: (&str, &str), hours: i64, status| Booking {
        id: id.to_string(),
        client_id: client.0.to_string(),
        client_name: client.1.to_string(),
        trainer_id: trainer.0.to_string(),
        trainer_name: trainer.1.to_string(),
        booking_date: now + Duration::hours(hours),
        status,
    };
    vec![
        booking("b1", ("c1", "فاطمة علي"), ("t1", "أحمد محمود"), 2, BookingStatus::Confirmed),
        booking("b2", ("c2", "محمد صالح"), ("t2", "خالد الغامدي"), 4, BookingStatus::Confirmed),
        booking("b3", ("c4", "نورة خالد"), ("t3", "سارة عبد العزيز"), 6, BookingStatus::Pending),
    ]
}
