use crate::cli::actions::form::{connect, report};
use crate::client::AppConfig;
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
    pub email: String,
    pub otp: String,
}

/// Execute the verify action.
/// # Errors
/// Returns an error if the page cannot be reached or the code is rejected.
pub async fn execute(args: Args) -> Result<()> {
    let controller = connect(args.config).await?;

    controller.on_verify_otp_click(&args.otp, &args.email).await;

    report(&controller)
}
