pub mod logging;

use crate::client::config::{DEFAULT_DASHBOARD_PATH, DEFAULT_LOGIN_PATH, DEFAULT_VERIFY_PATH};
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("signup-form")
        .about("Sign up and verify an email one-time code from the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Signup page URL, example: https://shop.tld/signup/")
                .env("SIGNUP_FORM_URL")
                .required(true),
        )
        .arg(
            Arg::new("verify-path")
                .long("verify-path")
                .help("Verification endpoint, resolved against the page URL")
                .env("SIGNUP_FORM_VERIFY_PATH")
                .default_value(DEFAULT_VERIFY_PATH),
        )
        .arg(
            Arg::new("login-path")
                .long("login-path")
                .help("Fallback destination after a signup without further steps")
                .env("SIGNUP_FORM_LOGIN_PATH")
                .default_value(DEFAULT_LOGIN_PATH),
        )
        .arg(
            Arg::new("dashboard-path")
                .long("dashboard-path")
                .help("Fallback destination after a successful verification")
                .env("SIGNUP_FORM_DASHBOARD_PATH")
                .default_value(DEFAULT_DASHBOARD_PATH),
        )
        .subcommand(
            Command::new("signup")
                .about("Submit the signup form, then verify the emailed code if asked")
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .help("First name")
                        .required(true),
                )
                .arg(
                    Arg::new("last-name")
                        .long("last-name")
                        .help("Last name")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Email address")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Password, at least 6 characters")
                        .env("SIGNUP_FORM_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("otp")
                        .long("otp")
                        .help("Verification code; prompted for on stdin when omitted"),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verify an emailed code for an existing signup")
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("Email address the code was sent to")
                        .required(true),
                )
                .arg(
                    Arg::new("otp")
                        .long("otp")
                        .help("Verification code")
                        .required(true),
                ),
        );

    logging::with_args(command)
}
