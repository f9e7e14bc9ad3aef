use clap::{Args, Subcommand};

use classdesk::config::ClientConfig;
use classdesk::error::AppError;
use classdesk::models::{
    AccountType, ExamEdit, ExamForm, ExamType, HomeworkEdit, HomeworkForm, NoticeForm,
};
use classdesk::services::{AssumeYes, Confirm, StdinConfirm, StudentDashboard};
use classdesk::session::SessionStore;
use classdesk::state::AppState;
use classdesk::view;

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Everything at once: reminders, progress, homework, exams, notices, timetable.
    Dashboard,

    /// List homework for your class.
    Homework,

    /// Pending homework for subjects taught tomorrow.
    Reminders,

    /// Assign homework to your class (class representatives).
    AddHomework(HomeworkArgs),

    /// Change homework; omitted fields stay as they are (class representatives).
    EditHomework(EditHomeworkArgs),

    /// Delete homework (class representatives).
    DeleteHomework(DeleteArgs),

    /// Mark homework completed, or pending again.
    Toggle { homework_id: String },

    /// Upcoming exams, soonest first.
    Exams,

    /// Schedule an exam for your class (class representatives).
    AddExam(ExamArgs),

    /// Change an exam; omitted fields stay as they are (class representatives).
    EditExam(EditExamArgs),

    /// Delete an exam (class representatives).
    DeleteExam(DeleteArgs),

    /// Class notices.
    Notices,

    /// Post a notice to your class (class representatives).
    PostNotice(NoticeArgs),

    /// Delete a notice (class representatives).
    DeleteNotice(DeleteArgs),

    /// Homework completion, overall and per subject.
    Progress,

    /// Your class timetable.
    Timetable,
}

#[derive(Args, Debug)]
pub struct HomeworkArgs {
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub description: String,
    /// Due date, YYYY-MM-DD.
    #[arg(long = "due")]
    pub due_date: String,
}

#[derive(Args, Debug)]
pub struct EditHomeworkArgs {
    pub homework_id: String,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long = "due")]
    pub due_date: Option<String>,
}

#[derive(Args, Debug)]
pub struct ExamArgs {
    #[arg(long)]
    pub subject: String,
    /// Exam date, YYYY-MM-DD.
    #[arg(long)]
    pub date: String,
    #[arg(long, default_value = "")]
    pub syllabus: String,
    /// Midterm, Final, Quiz or Test.
    #[arg(long = "type", default_value = "Midterm")]
    pub exam_type: ExamType,
}

#[derive(Args, Debug)]
pub struct EditExamArgs {
    pub exam_id: String,
    #[arg(long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub syllabus: Option<String>,
    #[arg(long = "type")]
    pub exam_type: Option<ExamType>,
}

#[derive(Args, Debug)]
pub struct NoticeArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub message: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl DeleteArgs {
    fn confirmer(&self) -> Box<dyn Confirm> {
        if self.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(StdinConfirm)
        }
    }
}

pub async fn run(command: StudentCommand) -> Result<bool, AppError> {
    let config = ClientConfig::new_from_env()?;
    let session = SessionStore::new(&config.session_file).require(AccountType::Student)?;
    let state = AppState::for_session(&config, &session)?;
    let mut dashboard = StudentDashboard::new(state.api, state.notifier, session.user);
    let caps = dashboard.capabilities();

    let applied = match command {
        StudentCommand::Dashboard => {
            dashboard.load_all().await;
            let page = view::StudentDashboardView {
                user: dashboard.user(),
                state: dashboard.state(),
                capabilities: caps,
            };
            print!("{}", page);
            true
        }
        StudentCommand::Homework => {
            dashboard.refresh_homework().await;
            let homework = &dashboard.state().homework;
            print!("{}", view::HomeworkList { homework, capabilities: caps });
            true
        }
        StudentCommand::Reminders => {
            dashboard.refresh_homework().await;
            let reminders = dashboard.pending_reminders();
            if reminders.is_empty() {
                println!("No reminders");
            } else {
                print!("{}", view::Reminders(&reminders));
            }
            true
        }
        StudentCommand::AddHomework(args) => {
            dashboard
                .create_homework(HomeworkForm {
                    subject: args.subject,
                    description: args.description,
                    due_date: args.due_date,
                })
                .await
        }
        StudentCommand::EditHomework(args) => {
            let edit = HomeworkEdit {
                subject: args.subject,
                description: args.description,
                due_date: args.due_date,
            };
            dashboard.update_homework(&args.homework_id, edit).await
        }
        StudentCommand::DeleteHomework(args) => {
            let confirm = args.confirmer();
            dashboard.delete_homework(&args.id, confirm.as_ref()).await
        }
        StudentCommand::Toggle { homework_id } => dashboard.toggle_homework_status(&homework_id).await,
        StudentCommand::Exams => {
            dashboard.refresh_exams().await;
            let exams = &dashboard.state().exams;
            print!("{}", view::ExamList { exams, capabilities: caps });
            true
        }
        StudentCommand::AddExam(args) => {
            dashboard
                .create_exam(ExamForm {
                    subject: args.subject,
                    date: args.date,
                    syllabus: args.syllabus,
                    exam_type: args.exam_type,
                })
                .await
        }
        StudentCommand::EditExam(args) => {
            let edit = ExamEdit {
                subject: args.subject,
                date: args.date,
                syllabus: args.syllabus,
                exam_type: args.exam_type,
            };
            dashboard.update_exam(&args.exam_id, edit).await
        }
        StudentCommand::DeleteExam(args) => {
            let confirm = args.confirmer();
            dashboard.delete_exam(&args.id, confirm.as_ref()).await
        }
        StudentCommand::Notices => {
            dashboard.refresh_notices().await;
            let notices = &dashboard.state().notices;
            print!("{}", view::NoticeList { notices, capabilities: caps });
            true
        }
        StudentCommand::PostNotice(args) => {
            dashboard
                .create_notice(NoticeForm {
                    title: args.title,
                    message: args.message,
                })
                .await
        }
        StudentCommand::DeleteNotice(args) => {
            let confirm = args.confirmer();
            dashboard.delete_notice(&args.id, confirm.as_ref()).await
        }
        StudentCommand::Progress => {
            dashboard.refresh_progress().await;
            match &dashboard.state().progress {
                Some(progress) => print!("{}", view::ProgressView(progress)),
                None => println!("No progress available"),
            }
            true
        }
        StudentCommand::Timetable => {
            dashboard.refresh_timetable().await;
            let entries = &dashboard.state().timetable;
            print!("{}", view::TimetableView { entries, show_ids: false });
            true
        }
    };

    Ok(applied)
}
