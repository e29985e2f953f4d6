//! Dashboard aggregation.
//!
//! Counts and sums across every collection, with change labels computed
//! against yesterday / last calendar month. Appointment and visit dates are
//! ISO-8601 strings, so range filters compare lexicographically.

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;

use super::RecordError;
use crate::models::dashboard::{
    AppointmentStatusCounts, DashboardData, DashboardStats, QuickAction, RecentPatient,
    TodayAppointment,
};

/// How many of today's appointments the dashboard lists.
const TODAY_APPOINTMENTS_LIMIT: i64 = 4;

/// How many recently added patients the dashboard lists.
const RECENT_PATIENTS_LIMIT: i64 = 3;

/// Build the aggregated dashboard view.
pub async fn overview(pool: &PgPool) -> Result<DashboardData, RecordError> {
    let now = Utc::now();
    let today = now.date_naive();
    let yesterday = today.pred_opt().unwrap_or(today);

    let this_month_first = month_first(today);
    let last_month_end = this_month_first.pred_opt().unwrap_or(today);
    let last_month_first = month_first(last_month_end);

    // timestamptz bounds for created_at comparisons
    let last_month_start_ts = last_month_first.and_time(NaiveTime::MIN).and_utc();
    let this_month_start_ts = this_month_first.and_time(NaiveTime::MIN).and_utc();

    let total_patients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM patients")
        .fetch_one(pool)
        .await?;

    let patients_last_month: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM patients WHERE created_at >= $1 AND created_at < $2",
    )
    .bind(last_month_start_ts)
    .bind(this_month_start_ts)
    .fetch_one(pool)
    .await?;

    let appointments_today = appointments_between(pool, &day_start(today), &day_end(today)).await?;
    let appointments_yesterday =
        appointments_between(pool, &day_start(yesterday), &day_end(yesterday)).await?;

    let staff_members: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff")
        .fetch_one(pool)
        .await?;

    let staff_this_month: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM staff WHERE hire_date >= $1")
            .bind(day_start(today))
            .fetch_one(pool)
            .await?;

    let total_revenue: f64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(paid_amount), 0)::float8 FROM billing WHERE payment_status = 'Paid'",
    )
    .fetch_one(pool)
    .await?;

    let revenue_last_month: f64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(paid_amount), 0)::float8 FROM billing \
         WHERE payment_status = 'Paid' AND billing_date >= $1 AND billing_date <= $2",
    )
    .bind(day_start(last_month_first))
    .bind(day_end(last_month_end))
    .fetch_one(pool)
    .await?;

    let today_appointments = today_appointments(pool, &day_start(today), &day_end(today)).await?;
    let appointment_stats = status_counts(pool, &day_start(today), &day_end(today)).await?;
    let recent_patients = recent_patients(pool).await?;

    let patient_change = percent_change(total_patients, patients_last_month);
    let appointment_delta = appointments_today - appointments_yesterday;
    let revenue_change = if revenue_last_month > 0.0 {
        ((total_revenue - revenue_last_month) / revenue_last_month * 100.0) as i64
    } else {
        0
    };

    Ok(DashboardData {
        stats: DashboardStats {
            total_patients,
            patients_change: month_change_label(patient_change),
            appointments_today,
            appointments_change: if appointment_delta > 0 {
                format!("+{appointment_delta} than yesterday")
            } else {
                format!("{appointment_delta} than yesterday")
            },
            staff_members,
            staff_change: format!("+{staff_this_month} this month"),
            total_revenue: usd(total_revenue),
            revenue_change: month_change_label(revenue_change),
        },
        today_appointments,
        appointment_stats,
        recent_patients,
        quick_actions: quick_actions(),
    })
}

async fn appointments_between(pool: &PgPool, from: &str, to: &str) -> Result<i64, RecordError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM appointments WHERE appointment_date >= $1 AND appointment_date <= $2",
    )
    .bind(from)
    .bind(to)
    .fetch_one(pool)
    .await?;
    Ok(count)
}

async fn today_appointments(
    pool: &PgPool,
    from: &str,
    to: &str,
) -> Result<Vec<TodayAppointment>, RecordError> {
    type Row = (
        String,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        String,
    );
    let rows = sqlx::query_as::<_, Row>(
        "SELECT a.appointment_date, p.first_name, p.last_name, s.first_name, s.last_name, a.status \
         FROM appointments a \
         LEFT JOIN patients p ON p.patient_id = a.patient_id \
         LEFT JOIN staff s ON s.staff_id = a.doctor_id \
         WHERE a.appointment_date >= $1 AND a.appointment_date <= $2 \
         ORDER BY a.appointment_date \
         LIMIT $3",
    )
    .bind(from)
    .bind(to)
    .bind(TODAY_APPOINTMENTS_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(date, pat_first, pat_last, doc_first, doc_last, status)| TodayAppointment {
            patient_name: match (pat_first, pat_last) {
                (Some(f), Some(l)) => format!("{f} {l}"),
                _ => "Unknown Patient".to_string(),
            },
            doctor_name: match (doc_first, doc_last) {
                (Some(f), Some(l)) => format!("Dr. {f} {l}"),
                _ => "Unknown Doctor".to_string(),
            },
            time: clock_label(&date),
            status,
        })
        .collect())
}

async fn status_counts(
    pool: &PgPool,
    from: &str,
    to: &str,
) -> Result<AppointmentStatusCounts, RecordError> {
    let (confirmed, pending, cancelled): (i64, i64, i64) = sqlx::query_as(
        "SELECT COUNT(*) FILTER (WHERE status = 'Confirmed'), \
                COUNT(*) FILTER (WHERE status = 'Scheduled'), \
                COUNT(*) FILTER (WHERE status = 'Cancelled') \
         FROM appointments WHERE appointment_date >= $1 AND appointment_date <= $2",
    )
    .bind(from)
    .bind(to)
    .fetch_one(pool)
    .await?;
    Ok(AppointmentStatusCounts {
        confirmed,
        pending,
        cancelled,
    })
}

async fn recent_patients(pool: &PgPool) -> Result<Vec<RecentPatient>, RecordError> {
    let rows = sqlx::query_as::<_, (String, String, String, Option<String>)>(
        "SELECT p.first_name, p.last_name, p.contact_number, \
                (SELECT MAX(mr.visit_date) FROM medical_records mr \
                 WHERE mr.patient_id = p.patient_id) \
         FROM patients p \
         ORDER BY p.created_at DESC \
         LIMIT $1",
    )
    .bind(RECENT_PATIENTS_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(first, last, phone, last_visit)| RecentPatient {
            name: format!("{first} {last}"),
            phone,
            last_visit: match last_visit {
                Some(v) => v.split_once('T').map(|(d, _)| d.to_string()).unwrap_or(v),
                None => "No visits yet".to_string(),
            },
        })
        .collect())
}

fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Add New Patient",
            icon: "+",
            route: "/patients/new",
        },
        QuickAction {
            label: "Schedule Appointment",
            icon: "+",
            route: "/appointments/new",
        },
        QuickAction {
            label: "Add Staff Member",
            icon: "+",
            route: "/staff/new",
        },
        QuickAction {
            label: "Create Medical Record",
            icon: "+",
            route: "/medical-records/new",
        },
        QuickAction {
            label: "View Billing & Invoices",
            icon: "$",
            route: "/billing",
        },
    ]
}

/// Inclusive lower bound of a day, as an ISO-8601 string.
fn day_start(d: NaiveDate) -> String {
    format!("{d}T00:00:00")
}

/// Inclusive upper bound of a day, as an ISO-8601 string.
fn day_end(d: NaiveDate) -> String {
    format!("{d}T23:59:59.999999")
}

fn month_first(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// Whole-percent change, 0 when there is no baseline.
fn percent_change(current: i64, previous: i64) -> i64 {
    if previous > 0 {
        ((current - previous) as f64 / previous as f64 * 100.0) as i64
    } else {
        0
    }
}

fn month_change_label(change: i64) -> String {
    if change > 0 {
        format!("+{change}% from last month")
    } else {
        format!("{change}% from last month")
    }
}

/// `HH:MM` of an ISO instant plus a morning/afternoon marker, e.g.
/// `"09:30 AM"`. Falls back to the raw string when the instant has no time
/// component.
fn clock_label(appointment_date: &str) -> String {
    let Some((_, time)) = appointment_date.split_once('T') else {
        return appointment_date.to_string();
    };
    let hhmm = time.get(..5).unwrap_or(time);
    let hour: u32 = hhmm
        .get(..2)
        .and_then(|h| h.parse().ok())
        .unwrap_or(0);
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    format!("{hhmm} {meridiem}")
}

/// Dollar amount with thousands separators, `$1,234,567.50`.
fn usd(amount: f64) -> String {
    let s = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("${sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_label_marks_mornings_and_afternoons() {
        assert_eq!(clock_label("2026-08-06T09:30:00"), "09:30 AM");
        assert_eq!(clock_label("2026-08-06T14:05:00"), "14:05 PM");
        assert_eq!(clock_label("2026-08-06T00:00:00"), "00:00 AM");
    }

    #[test]
    fn clock_label_passes_through_dateless_input() {
        assert_eq!(clock_label("2026-08-06"), "2026-08-06");
    }

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(usd(0.0), "$0.00");
        assert_eq!(usd(999.5), "$999.50");
        assert_eq!(usd(1_234_567.5), "$1,234,567.50");
        assert_eq!(usd(-1234.5), "$-1,234.50");
    }

    #[test]
    fn percent_change_guards_zero_baseline() {
        assert_eq!(percent_change(10, 0), 0);
        assert_eq!(percent_change(150, 100), 50);
        assert_eq!(percent_change(50, 100), -50);
    }

    #[test]
    fn month_change_label_signs_positive_changes() {
        assert_eq!(month_change_label(12), "+12% from last month");
        assert_eq!(month_change_label(-3), "-3% from last month");
        assert_eq!(month_change_label(0), "0% from last month");
    }

    #[test]
    fn month_first_clamps_to_day_one() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).expect("date");
        assert_eq!(month_first(d), NaiveDate::from_ymd_opt(2026, 8, 1).expect("date"));
    }

    #[test]
    fn day_bounds_are_iso_strings() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 6).expect("date");
        assert_eq!(day_start(d), "2026-08-06T00:00:00");
        assert_eq!(day_end(d), "2026-08-06T23:59:59.999999");
    }
}
