use super::save_download;
use super::training_data::{DataFileListArgs, DownloadArgs, UploadArgs};
use crate::api::item_meta_data::ItemMetaData;
use crate::cli::args::IdArg;
use crate::cli::context::CommandContext;
use crate::cli::render::{emit, na, render_deleted, render_list, render_record, TextSummary};
use crate::error::Error;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ItemMetaDataCommand {
    /// List item metadata files
    List(DataFileListArgs),
    /// Upload an item metadata file
    #[command(visible_alias = "create")]
    Upload(UploadArgs),
    /// Delete an item metadata file
    Delete(IdArg),
    /// Download an item metadata file
    Download(DownloadArgs),
}

impl TextSummary for ItemMetaData {
    fn summary(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            na(self.basename.as_deref()),
            na(self.filesize),
            na(self.ins_datetime.as_deref())
        )
    }
}

pub async fn run(ctx: &CommandContext, command: ItemMetaDataCommand) -> Result<(), Error> {
    let client = ctx.authenticated_client().await?;
    let rendered = match command {
        ItemMetaDataCommand::List(args) => {
            let page = client.list_item_meta_data(args.into()).await?;
            render_list(ctx.format, &page.results, &page)?
        }
        ItemMetaDataCommand::Upload(UploadArgs { project, file }) => {
            render_record(ctx.format, &client.upload_item_meta_data(project, &file).await?)?
        }
        ItemMetaDataCommand::Delete(IdArg { id }) => {
            client.delete_item_meta_data(id).await?;
            render_deleted(ctx.format, id)?
        }
        ItemMetaDataCommand::Download(DownloadArgs {
            target,
            output_file,
        }) => {
            let bytes = client.download_item_meta_data(target.id).await?;
            return save_download(&output_file, &bytes).await;
        }
    };
    emit(&rendered);
    Ok(())
}
