#[cfg(not(target_arch = "wasm32"))]
use signup_form::cli;

// Main function
#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let action = cli::start()?;

    action.execute().await?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn main() {}
