use crate::cli::actions::form::{connect, report};
use crate::client::AppConfig;
use crate::form::{SignupInput, UiState};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub input: SignupInput,
    pub otp: Option<String>,
}

/// Execute the signup action.
/// # Errors
/// Returns an error if the page cannot be reached or the form ends on an error.
pub async fn execute(args: Args) -> Result<()> {
    let controller = connect(args.config).await?;

    let ui = controller.on_signup_submit(args.input).await;

    if ui == UiState::ShowingOtpPanel {
        let email = controller.state().otp_email().to_string();
        info!(%email, "verification code required");

        let code = match args.otp {
            Some(code) => code,
            None => prompt_code(&email)?,
        };
        controller.on_verify_otp_click(&code, &email).await;
    }

    report(&controller)
}

fn prompt_code(email: &str) -> Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "Verification code sent to {email}: ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read verification code")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
