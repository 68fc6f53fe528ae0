use clap::Parser;
use recotem_cli::cli::commands::{
    ab_test, api_key, auth, completion, conversion_event, deployment_slot, evaluation_config,
    item_meta_data, model_configuration, parameter_tuning_job, project, retraining_run,
    retraining_schedule, split_config, task_log, trained_model, training_data, user,
};
use recotem_cli::cli::context::CommandContext;
use recotem_cli::cli::errors::print_error_with_json;
use recotem_cli::cli::tracing_init::init_tracing;
use recotem_cli::cli::{Cli, Commands};
use recotem_cli::config::manager::ConfigManager;
use recotem_cli::constants::ENV_CONFIG_DIR;
use recotem_cli::error::Error;
use recotem_cli::fs::OsFileSystem;
use recotem_cli::output::Output;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_errors = cli.json_errors;
    init_tracing(cli.verbosity);

    let manager = std::env::var(ENV_CONFIG_DIR).map_or_else(
        |_| match ConfigManager::new() {
            Ok(manager) => manager,
            Err(e) => {
                print_error_with_json(&e, json_errors);
                std::process::exit(1);
            }
        },
        |config_dir| ConfigManager::with_fs(OsFileSystem, PathBuf::from(config_dir)),
    );

    let ctx = CommandContext::new(
        cli.output,
        cli.api_key,
        Output::new(cli.quiet, json_errors),
        manager,
    );

    if let Err(e) = run_command(cli.command, &ctx).await {
        print_error_with_json(&e, json_errors);
        std::process::exit(1);
    }
}

async fn run_command(command: Commands, ctx: &CommandContext) -> Result<(), Error> {
    match command {
        Commands::Version => println!("{}", completion::version_text()),
        Commands::Completion(args) => completion::completion(&args),
        Commands::Login(args) => auth::login(ctx, args).await?,
        Commands::Logout => auth::logout(ctx).await?,
        Commands::Ping => auth::ping(ctx).await?,
        Commands::Project(command) => project::run(ctx, command).await?,
        Commands::TrainingData(command) => training_data::run(ctx, command).await?,
        Commands::ItemMetaData(command) => item_meta_data::run(ctx, command).await?,
        Commands::TrainedModel(command) => trained_model::run(ctx, command).await?,
        Commands::ModelConfiguration(command) => model_configuration::run(ctx, command).await?,
        Commands::EvaluationConfig(command) => evaluation_config::run(ctx, command).await?,
        Commands::SplitConfig(command) => split_config::run(ctx, command).await?,
        Commands::ParameterTuningJob(command) => parameter_tuning_job::run(ctx, command).await?,
        Commands::ApiKey(command) => api_key::run(ctx, command).await?,
        Commands::DeploymentSlot(command) => deployment_slot::run(ctx, command).await?,
        Commands::AbTest(command) => ab_test::run(ctx, command).await?,
        Commands::ConversionEvent(command) => conversion_event::run(ctx, command).await?,
        Commands::RetrainingSchedule(command) => retraining_schedule::run(ctx, command).await?,
        Commands::RetrainingRun(command) => retraining_run::run(ctx, command).await?,
        Commands::TaskLog(command) => task_log::run(ctx, command).await?,
        Commands::User(command) => user::run(ctx, command).await?,
    }
    Ok(())
}
