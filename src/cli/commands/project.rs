use crate::api::project::{NewProject, Project, ProjectPatch};
use crate::cli::args::IdArg;
use crate::cli::context::CommandContext;
use crate::cli::render::{
    emit, na, render_deleted, render_list, render_record, render_value, TextSummary,
};
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ProjectCommand {
    /// List projects
    List {
        /// Project ID
        #[arg(short = 'i', long)]
        id: Option<i64>,
        /// Project name
        #[arg(short = 'n', long)]
        name: Option<String>,
    },
    /// Create a project
    Create {
        #[arg(short = 'n', long)]
        name: String,
        /// Column holding user ids in uploaded data
        #[arg(short = 'u', long)]
        user_column: String,
        /// Column holding item ids in uploaded data
        #[arg(short = 'i', long)]
        item_column: String,
        /// Column holding timestamps, required for time-based splits
        #[arg(short = 't', long)]
        time_column: Option<String>,
    },
    /// Get a project
    Get(IdArg),
    /// Update a project
    Update {
        #[command(flatten)]
        target: IdArg,
        #[arg(short = 'n', long)]
        name: Option<String>,
        #[arg(short = 'u', long)]
        user_column: Option<String>,
        #[arg(long)]
        item_column: Option<String>,
        #[arg(short = 't', long)]
        time_column: Option<String>,
    },
    /// Delete a project
    Delete(IdArg),
    /// Show data and model counts for a project
    Summary(IdArg),
}

impl TextSummary for Project {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id,
            self.name,
            self.user_column,
            self.item_column,
            na(self.time_column.as_deref())
        )
    }
}

pub async fn run(ctx: &CommandContext, command: ProjectCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        ProjectCommand::List { id, name } => {
            let projects = client.list_projects(id, name.as_deref()).await?;
            render_list(ctx.format, &projects, &projects)?
        }
        ProjectCommand::Create {
            name,
            user_column,
            item_column,
            time_column,
        } => {
            let project = client
                .create_project(&NewProject {
                    name,
                    user_column,
                    item_column,
                    time_column,
                })
                .await?;
            render_record(ctx.format, &project)?
        }
        ProjectCommand::Get(IdArg { id }) => {
            render_record(ctx.format, &client.get_project(id).await?)?
        }
        ProjectCommand::Update {
            target,
            name,
            user_column,
            item_column,
            time_column,
        } => {
            let patch = ProjectPatch {
                name,
                user_column,
                item_column,
                time_column,
            };
            render_record(ctx.format, &client.update_project(target.id, &patch).await?)?
        }
        ProjectCommand::Delete(IdArg { id }) => {
            client.delete_project(id).await?;
            render_deleted(ctx.format, id)?
        }
        ProjectCommand::Summary(IdArg { id }) => {
            render_value(ctx.format, &client.project_summary(id).await?)?
        }
    };
    emit(&rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_summary_line() {
        let project = Project {
            id: 1,
            name: "movielens".to_string(),
            user_column: "userId".to_string(),
            item_column: "movieId".to_string(),
            time_column: None,
            ..Project::default()
        };
        assert_eq!(project.summary(), "1 movielens userId movieId <NA>");
    }
}
