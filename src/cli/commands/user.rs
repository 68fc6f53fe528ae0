use crate::api::user::{NewUser, User, UserPatch};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users
    List(PageArgs),
    /// Create a user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: String,
    },
    /// Get a user
    Get(IdArg),
    /// Update a user
    Update {
        #[command(flatten)]
        target: IdArg,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        is_active: Option<bool>,
    },
    /// Delete a user
    Delete(IdArg),
    /// Activate a user
    Activate(IdArg),
    /// Deactivate a user
    Deactivate(IdArg),
    /// Reset a user's password
    ResetPassword {
        #[command(flatten)]
        target: IdArg,
        #[arg(long)]
        new_password: String,
    },
}

impl TextSummary for User {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id,
            self.username,
            na(self.email.as_deref()),
            self.is_active,
            self.is_staff
        )
    }
}

pub async fn run(ctx: &CommandContext, command: UserCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        UserCommand::List(page) => {
            let page = client.list_users(page.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        UserCommand::Create {
            username,
            email,
            password,
        } => {
            let user = NewUser {
                username,
                email,
                password,
            };
            render_record(ctx.format, &client.create_user(&user).await?)?
        }
        UserCommand::Get(IdArg { id }) => render_record(ctx.format, &client.get_user(id).await?)?,
        UserCommand::Update {
            target,
            email,
            is_active,
        } => {
            let patch = UserPatch { email, is_active };
            render_record(ctx.format, &client.update_user(target.id, &patch).await?)?
        }
        UserCommand::Delete(IdArg { id }) => {
            client.delete_user(id).await?;
            render_deleted(ctx.format, id)?
        }
        UserCommand::Activate(IdArg { id }) => {
            client.activate_user(id).await?;
            ctx.output.success("User activated.");
            return Ok(());
        }
        UserCommand::Deactivate(IdArg { id }) => {
            client.deactivate_user(id).await?;
            ctx.output.success("User deactivated.");
            return Ok(());
        }
        UserCommand::ResetPassword {
            target,
            new_password,
        } => {
            client.reset_user_password(target.id, &new_password).await?;
            ctx.output.success("Password reset.");
            return Ok(());
        }
    };
    emit(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_without_email() {
        let user = User {
            id: 2,
            username: "alice".to_string(),
            email: None,
            is_active: true,
            is_staff: false,
            ..User::default()
        };
        assert_eq!(user.summary(), "2 alice <NA> true false");
    }
}
