pub mod admin;
pub mod session;
pub mod student;

use classdesk::error::AppError;

/// Uses the value given on the command line, otherwise asks for it without echo.
pub fn secret_or_prompt(value: Option<String>, prompt: &str) -> Result<String, AppError> {
    let secret = match value {
        Some(secret) => secret,
        None => rpassword::prompt_password(prompt)?,
    };
    if secret.trim().is_empty() {
        let what = prompt.trim_end_matches(": ");
        return Err(AppError::BadRequest(format!("{} cannot be empty", what)));
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_secret_is_used_without_prompting() {
        let secret = secret_or_prompt(Some("s3cret".to_string()), "Password: ").unwrap();
        assert_eq!(secret, "s3cret");
    }

    #[test]
    fn blank_secret_is_rejected() {
        let err = secret_or_prompt(Some("  ".to_string()), "Password: ").unwrap_err();
        assert_eq!(err.to_string(), "Bad request: Password cannot be empty");
    }
}
