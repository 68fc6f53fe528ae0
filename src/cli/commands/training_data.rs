use super::save_download;
use crate::api::training_data::{DataFileFilter, TrainingData};
use crate::cli::args::{IdArg, PageArgs};
use crate::cli::context::CommandContext;
use crate::cli::render::{
    emit, na, render_deleted, render_list, render_record, render_value, TextSummary,
};
use crate::error::Error;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Flags shared by the training-data and item-meta-data lists.
#[derive(Args, Debug, Clone, Copy)]
pub struct DataFileListArgs {
    /// File ID
    #[arg(short = 'i', long)]
    pub id: Option<i64>,
    /// Project ID
    #[arg(long)]
    pub project: Option<i64>,
    #[command(flatten)]
    pub page: PageArgs,
}

impl From<DataFileListArgs> for DataFileFilter {
    fn from(args: DataFileListArgs) -> Self {
        Self {
            id: args.id,
            project: args.project,
            page: args.page.into(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// Project ID
    #[arg(short = 'p', long)]
    pub project: i64,
    /// Local file to upload
    #[arg(short = 'f', long)]
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct DownloadArgs {
    #[command(flatten)]
    pub target: IdArg,
    /// Destination path
    #[arg(short = 'O', long = "output-file", value_name = "PATH")]
    pub output_file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum TrainingDataCommand {
    /// List training data
    List(DataFileListArgs),
    /// Upload a training data file
    #[command(visible_alias = "create")]
    Upload(UploadArgs),
    /// Delete training data
    Delete(IdArg),
    /// Download a training data file
    Download(DownloadArgs),
    /// Show the first rows of a training data file
    Preview(IdArg),
}

impl TextSummary for TrainingData {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.id,
            self.project,
            na(self.basename.as_deref()),
            na(self.filesize),
            na(self.ins_datetime.as_deref())
        )
    }
}

pub async fn run(ctx: &CommandContext, command: TrainingDataCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        TrainingDataCommand::List(args) => {
            let page = client.list_training_data(args.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        TrainingDataCommand::Upload(UploadArgs { project, file }) => {
            let data = client.upload_training_data(project, &file).await?;
            render_record(ctx.format, &data)?
        }
        TrainingDataCommand::Delete(IdArg { id }) => {
            client.delete_training_data(id).await?;
            render_deleted(ctx.format, id)?
        }
        TrainingDataCommand::Download(DownloadArgs {
            target,
            output_file,
        }) => {
            let bytes = client.download_training_data(target.id).await?;
            return save_download(&output_file, &bytes).await;
        }
        TrainingDataCommand::Preview(IdArg { id }) => {
            render_value(ctx.format, &client.preview_training_data(id).await?)?
        }
    };
    emit(&rendered);
    Ok(())
}
