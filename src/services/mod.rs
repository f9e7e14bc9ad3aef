pub mod admin_dashboard;
pub mod confirm;
pub mod notify;
pub mod permissions;
pub mod reminders;
pub mod student_dashboard;
pub mod urgency;

pub use admin_dashboard::{AdminDashboard, AdminOverview};
pub use confirm::{AssumeYes, Confirm, StdinConfirm};
pub use notify::{ConsoleNotifier, Notifier};
pub use permissions::{Capabilities, ManageAction};
pub use student_dashboard::{DashboardState, StudentDashboard};
