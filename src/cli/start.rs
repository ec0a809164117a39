use crate::cli::{actions::Action, commands, dispatch::handler};
use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Start the CLI
///
/// # Errors
/// Returns an error if the subscriber is already set or the arguments are inconsistent.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level = commands::logging::level(
        matches
            .get_one::<u8>(commands::logging::ARG_VERBOSITY)
            .map_or(0, |&v| v),
    );

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    // RUST_LOG=
    let env_filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy();

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    let action = handler(&matches)?;

    Ok(action)
}
