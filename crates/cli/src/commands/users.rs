//! Users command - user record management.

use common::AppResult;
use domain::{RegisterUser, UpdateUser, UserResponse};

use crate::cli::args::{UsersAction, UsersArgs};
use crate::cli::OutputFormat;
use crate::container::Services;
use crate::output;

/// Execute the users command
pub async fn execute(args: UsersArgs, services: &Services, format: OutputFormat) -> AppResult<()> {
    let accounts = services.accounts();

    match args.action {
        UsersAction::Register {
            name,
            email,
            password,
            document,
            phone,
            avatar,
        } => {
            let input = RegisterUser {
                name,
                email,
                password,
                document,
                phone,
                avatar,
            };
            tracing::debug!(?input, "Registering user");
            let user = accounts.register(input).await?;
            output::user(UserResponse::from(user), format)
        }
        UsersAction::List { with_deleted } => {
            let users = accounts.list_users(with_deleted).await?;
            output::users(users.into_iter().map(UserResponse::from).collect(), format)
        }
        UsersAction::Get { id } => {
            let user = accounts.get_user(id).await?;
            output::user(user.into(), format)
        }
        UsersAction::Update {
            id,
            name,
            phone,
            avatar,
        } => {
            let changes = UpdateUser {
                name,
                phone,
                avatar,
            };
            let user = accounts.update_user(id, changes).await?;
            output::user(user.into(), format)
        }
        UsersAction::Delete { id } => {
            accounts.delete_user(id).await?;
            println!("Deleted user {id}");
            Ok(())
        }
        UsersAction::Restore { id } => {
            let user = accounts.restore_user(id).await?;
            output::user(user.into(), format)
        }
    }
}
