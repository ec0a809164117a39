pub mod form;
pub mod signup;
pub mod verify;

// Internal "interpreter" for `Action`.
mod run;

#[derive(Debug)]
pub enum Action {
    Signup(signup::Args),
    Verify(verify::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails or the form ends up showing an error.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
