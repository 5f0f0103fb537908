use chrono::{DateTime, Utc};

use super::table::TextTable;
use super::Ui;
use crate::dashboard::AppState;
use crate::domain::Booking;

/// One bar group of the overview chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyFigures {
    pub month_key: &'static str,
    pub subscriptions: u32,
    pub revenue: f64,
}

/// Static figures for the first half of the year.
pub const MONTHLY_OVERVIEW: [MonthlyFigures; 6] = [
    MonthlyFigures { month_key: "month_jan", subscriptions: 30, revenue: 15000.0 },
    MonthlyFigures { month_key: "month_feb", subscriptions: 45, revenue: 22000.0 },
    MonthlyFigures { month_key: "month_mar", subscriptions: 50, revenue: 26000.0 },
    MonthlyFigures { month_key: "month_apr", subscriptions: 62, revenue: 31000.0 },
    MonthlyFigures { month_key: "month_may", subscriptions: 70, revenue: 38000.0 },
    MonthlyFigures { month_key: "month_jun", subscriptions: 85, revenue: 45000.0 },
];

pub const MONTHLY_REVENUE: f64 = 45000.0;

const UPCOMING_LIMIT: usize = 5;
const BAR_WIDTH: u32 = 20;

/// Bookings at or after `now`, soonest first.
pub fn upcoming_bookings(bookings: &[Booking], now: DateTime<Utc>) -> Vec<&Booking> {
    let mut upcoming: Vec<&Booking> = bookings.iter().filter(|b| b.booking_date >= now).collect();
    upcoming.sort_by_key(|b| b.booking_date);
    upcoming.truncate(UPCOMING_LIMIT);
    upcoming
}

pub fn render_dashboard(ui: &Ui<'_>, state: &AppState, now: DateTime<Utc>) -> String {
    let mut out = vec![ui.t("dashboard_title")];

    let cards = [
        ("stat_total_trainers", ui.number(state.trainers().len() as f64)),
        ("stat_total_clients", ui.number(state.clients().len() as f64)),
        ("stat_total_packages", ui.number(state.packages.len() as f64)),
        ("stat_monthly_revenue", ui.currency(MONTHLY_REVENUE)),
    ];
    out.push(
        cards
            .iter()
            .map(|(key, value)| format!("{}: {}", ui.t(key), value))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    out.push(render_chart(ui));
    out.push(render_upcoming(ui, &state.bookings, now));
    out.join("\n\n")
}

fn render_chart(ui: &Ui<'_>) -> String {
    let max = MONTHLY_OVERVIEW
        .iter()
        .map(|m| m.subscriptions)
        .max()
        .unwrap_or(1)
        .max(1);
    let mut lines = vec![format!(
        "{} ({} / {})",
        ui.t("chart_title"),
        ui.t("chart_subscriptions"),
        ui.t("chart_revenue")
    )];
    for month in &MONTHLY_OVERVIEW {
        let bar = "#".repeat((month.subscriptions * BAR_WIDTH / max) as usize);
        lines.push(format!(
            "{} {} {} | {}",
            ui.t(month.month_key),
            bar,
            ui.number(f64::from(month.subscriptions)),
            ui.currency(month.revenue)
        ));
    }
    lines.join("\n")
}

fn render_upcoming(ui: &Ui<'_>, bookings: &[Booking], now: DateTime<Utc>) -> String {
    let upcoming = upcoming_bookings(bookings, now);
    let title = ui.t("upcoming_bookings");
    if upcoming.is_empty() {
        return format!("{}\n{}", title, ui.t("no_upcoming_bookings"));
    }

    let mut table = TextTable::new([ui.t("client_name"), ui.t("with_trainer"), String::new(), String::new()]);
    for booking in upcoming {
        table.push_row([
            booking.client_name.clone(),
            booking.trainer_name.clone(),
            booking.booking_date.format("%Y-%m-%d %H:%M").to_string(),
            ui.t(booking.status.label_key()),
        ]);
    }
    format!("{}\n{}", title, table.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::seed::SeedData;
    use crate::i18n::{Catalog, Locale};
    use chrono::Duration;

    #[test]
    fn test_upcoming_bookings_skip_past_and_sort() {
        let now = Utc::now();
        let mut bookings = SeedData::demo(now).bookings;
        bookings.reverse();
        bookings[0].booking_date = now - Duration::hours(1);

        let ids: Vec<&str> = upcoming_bookings(&bookings, now).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    #[test]
    fn test_stat_cards_use_localized_numbers() {
        let catalog = Catalog::builtin().unwrap();
        let now = Utc::now();
        let seed = SeedData::demo(now);
        let state = AppState {
            users: seed.users,
            packages: seed.packages,
            bookings: seed.bookings,
            ..AppState::default()
        };

        let ar = render_dashboard(&Ui::new(&catalog, Locale::Ar), &state, now);
        assert!(ar.contains("٤٥٬٠٠٠ ريال"));
        let en = render_dashboard(&Ui::new(&catalog, Locale::En), &state, now);
        assert!(en.contains("Total Clients: 4"));
        assert!(en.contains("Monthly Revenue: 45,000 SAR"));
        assert!(en.contains("Jun #################### 85"));
        assert!(en.contains("Pending"));
    }
}
