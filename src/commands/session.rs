use clap::{Args, Subcommand};

use classdesk::config::session_file_from_env;
use classdesk::error::AppError;
use classdesk::models::{AccountType, Role};
use classdesk::session::{Session, SessionStore, UserInfo};

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Cache a token issued by the backend along with the account profile.
    Save(SaveArgs),

    /// Show who is signed in.
    Show,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Bearer token returned by the backend login. Prompted for when omitted.
    #[arg(long)]
    pub token: Option<String>,

    /// Account type: admin or student.
    #[arg(long = "type")]
    pub account_type: AccountType,

    #[arg(long)]
    pub name: String,

    #[arg(long = "class")]
    pub class_name: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    /// student or class_rep.
    #[arg(long)]
    pub role: Option<Role>,
}

pub fn run(command: SessionCommand) -> Result<bool, AppError> {
    let store = SessionStore::new(session_file_from_env());

    match command {
        SessionCommand::Save(args) => {
            let role = match args.account_type {
                AccountType::Student => Some(args.role.unwrap_or_default()),
                AccountType::Admin => args.role,
            };
            let token = super::secret_or_prompt(args.token, "Bearer token: ")?;
            let session = Session {
                token,
                user: UserInfo {
                    name: args.name,
                    account_type: args.account_type,
                    class_name: args.class_name,
                    username: args.username,
                    role,
                },
            };
            store.save(&session)?;
            println!("Session saved to {}", store.path().display());
        }
        SessionCommand::Show => match store.load()? {
            Some(session) => {
                let user = &session.user;
                println!("{} ({:?})", user.name, user.account_type);
                if let Some(username) = &user.username {
                    println!("  username: {}", username);
                }
                if let Some(class_name) = &user.class_name {
                    println!("  class:    {}", class_name);
                }
                if let Some(role) = user.role {
                    println!("  role:     {}", role.label());
                }
                println!("  token:    {}", mask(&session.token));
            }
            None => println!("Not signed in"),
        },
    }
    Ok(true)
}

pub fn logout() -> Result<bool, AppError> {
    let store = SessionStore::new(session_file_from_env());
    store.clear()?;
    println!("Signed out");
    Ok(true)
}

fn mask(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{}…", visible)
}
