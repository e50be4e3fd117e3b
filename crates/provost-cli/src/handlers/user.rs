//! User command handlers.
//!
//! Superadmin accounts are created from the shell only; the HTTP API has
//! no route for them.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::user_commands::UserCommand;
use crate::utils::input;
use provost_core::services::NewSuperadmin;

/// Execute a user subcommand.
///
/// # Errors
///
/// Returns an error if input fails or the account cannot be created.
pub async fn execute(ctx: &CliContext, command: UserCommand) -> Result<()> {
    match command {
        UserCommand::CreateAdmin {
            username,
            email,
            password,
            first_name,
            last_name,
        } => create_admin(ctx, username, email, password, first_name, last_name).await,
    }
}

async fn create_admin(
    ctx: &CliContext,
    username: String,
    email: String,
    password: Option<String>,
    first_name: String,
    last_name: String,
) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => input::prompt_string("Password")?,
    };
    if password.is_empty() {
        return Err(CliError::Arguments("Password must not be empty".to_string()).into());
    }

    let profile = ctx
        .app()
        .directory()
        .create_superadmin(NewSuperadmin {
            username,
            password,
            email,
            first_name,
            last_name,
        })
        .await?;

    println!("Created superadmin '{}' (ID {})", profile.username, profile.id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::bootstrap_with;
    use provost_core::NoopWorkbookCodec;
    use provost_db::TestDb;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_admin_persists_an_account_that_can_log_in() {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(NoopWorkbookCodec));

        create_admin(
            &ctx,
            "root".to_string(),
            "root@example.edu".to_string(),
            Some("swordfish".to_string()),
            String::new(),
            String::new(),
        )
        .await
        .unwrap();

        let account = ctx.app().auth().authenticate("root", "swordfish").await.unwrap();
        assert_eq!(account.username, "root");
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        let db = TestDb::new().await.unwrap();
        let ctx = bootstrap_with(db.repos(), Arc::new(NoopWorkbookCodec));

        for attempt in 0..2 {
            let result = create_admin(
                &ctx,
                "root".to_string(),
                "root@example.edu".to_string(),
                Some("swordfish".to_string()),
                String::new(),
                String::new(),
            )
            .await;
            if attempt == 0 {
                result.unwrap();
            } else {
                assert!(result.is_err());
            }
        }
    }
}
