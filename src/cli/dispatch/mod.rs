use crate::cli::actions::{signup, verify, Action};
use crate::client::AppConfig;
use crate::form::SignupInput;
use anyhow::{anyhow, Context, Result};
use url::Url;

/// # Errors
/// Returns an error if required arguments are missing or the page URL is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = app_config(matches)?;

    // Closure to return subcommand-scoped string arguments
    let arg = |sub_m: &clap::ArgMatches, name: &str| -> Result<String> {
        sub_m
            .get_one::<String>(name)
            .cloned()
            .with_context(|| format!("missing required argument: --{name}"))
    };

    match matches.subcommand() {
        Some(("signup", sub_m)) => Ok(Action::Signup(signup::Args {
            config,
            input: SignupInput::new(
                arg(sub_m, "first-name")?,
                arg(sub_m, "last-name")?,
                arg(sub_m, "email")?,
                arg(sub_m, "password")?,
            ),
            otp: sub_m.get_one::<String>("otp").cloned(),
        })),
        Some(("verify", sub_m)) => Ok(Action::Verify(verify::Args {
            config,
            email: arg(sub_m, "email")?,
            otp: arg(sub_m, "otp")?,
        })),
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

fn app_config(matches: &clap::ArgMatches) -> Result<AppConfig> {
    let page_url = matches
        .get_one::<String>("url")
        .cloned()
        .context("missing required argument: --url")?;
    Url::parse(&page_url).context("invalid SIGNUP_FORM_URL")?;

    let mut config = AppConfig::new(page_url);
    if let Some(path) = matches.get_one::<String>("verify-path") {
        config.verify_path.clone_from(path);
    }
    if let Some(path) = matches.get_one::<String>("login-path") {
        config.login_path.clone_from(path);
    }
    if let Some(path) = matches.get_one::<String>("dashboard-path") {
        config.dashboard_path.clone_from(path);
    }

    Ok(config)
}
