//! Dashboard view models.
//!
//! Read-only aggregation shapes; computed by [`crate::records::dashboard`].

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub today_appointments: Vec<TodayAppointment>,
    pub appointment_stats: AppointmentStatusCounts,
    pub recent_patients: Vec<RecentPatient>,
    pub quick_actions: Vec<QuickAction>,
}

/// Headline counters with human-readable change labels
/// (`"+12% from last month"`, `"-1 than yesterday"`).
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_patients: i64,
    pub patients_change: String,
    pub appointments_today: i64,
    pub appointments_change: String,
    pub staff_members: i64,
    pub staff_change: String,
    pub total_revenue: String,
    pub revenue_change: String,
}

#[derive(Debug, Serialize)]
pub struct TodayAppointment {
    pub patient_name: String,
    pub doctor_name: String,
    /// Clock time of the appointment, `HH:MM AM|PM`.
    pub time: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct AppointmentStatusCounts {
    pub confirmed: i64,
    pub pending: i64,
    pub cancelled: i64,
}

#[derive(Debug, Serialize)]
pub struct RecentPatient {
    pub name: String,
    pub phone: String,
    pub last_visit: String,
}

#[derive(Debug, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: &'static str,
}
