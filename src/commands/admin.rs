use clap::{Args, Subcommand};

use classdesk::config::ClientConfig;
use classdesk::error::AppError;
use classdesk::models::{
    AccountType, NewStudentRequest, NewTimetableEntryRequest, Period, Role, Weekday,
};
use classdesk::services::AdminDashboard;
use classdesk::session::SessionStore;
use classdesk::state::AppState;
use classdesk::view;

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// List every student account.
    Students,

    /// Create a student account.
    AddStudent(AddStudentArgs),

    /// Change a student's role.
    SetRole {
        student_id: String,
        /// student or class_rep.
        role: Role,
    },

    /// Show the full timetable grouped by day.
    Timetable,

    /// Add a subject to a class timetable slot.
    AddPeriod(AddPeriodArgs),

    /// Remove a timetable entry.
    RemovePeriod { entry_id: String },

    /// Totals for students, class representatives and timetable entries.
    Overview,
}

#[derive(Args, Debug)]
pub struct AddStudentArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "class")]
    pub class_name: String,
    #[arg(long)]
    pub username: String,
    /// Prompted for when omitted.
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long, default_value = "student")]
    pub role: Role,
}

#[derive(Args, Debug)]
pub struct AddPeriodArgs {
    #[arg(long = "class")]
    pub class_name: String,
    /// Monday to Friday.
    #[arg(long, default_value = "Monday")]
    pub day: Weekday,
    /// 1 to 10.
    #[arg(long, default_value = "1")]
    pub period: Period,
    #[arg(long)]
    pub subject: String,
}

pub async fn run(command: AdminCommand) -> Result<bool, AppError> {
    let config = ClientConfig::new_from_env()?;
    let session = SessionStore::new(&config.session_file).require(AccountType::Admin)?;
    let state = AppState::for_session(&config, &session)?;
    let mut dashboard = AdminDashboard::new(state.api, state.notifier);

    let applied = match command {
        AdminCommand::Students => {
            dashboard.refresh_students().await;
            print!("{}", view::StudentList(dashboard.students()));
            true
        }
        AdminCommand::AddStudent(args) => {
            let password = super::secret_or_prompt(args.password, "Password: ")?;
            dashboard
                .create_student(NewStudentRequest {
                    name: args.name,
                    class_name: args.class_name,
                    username: args.username,
                    password,
                    role: args.role,
                })
                .await
        }
        AdminCommand::SetRole { student_id, role } => dashboard.update_role(&student_id, role).await,
        AdminCommand::Timetable => {
            dashboard.refresh_timetable().await;
            let entries = dashboard.timetable();
            print!("{}", view::TimetableView { entries, show_ids: true });
            true
        }
        AdminCommand::AddPeriod(args) => {
            dashboard
                .create_timetable_entry(NewTimetableEntryRequest {
                    class_name: args.class_name,
                    day: args.day,
                    period: args.period,
                    subject: args.subject,
                })
                .await
        }
        AdminCommand::RemovePeriod { entry_id } => dashboard.delete_timetable_entry(&entry_id).await,
        AdminCommand::Overview => {
            dashboard.load_all().await;
            print!("{}", view::OverviewView(dashboard.overview()));
            true
        }
    };

    Ok(applied)
}
