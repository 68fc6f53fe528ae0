pub mod args;
pub mod commands;
pub mod context;
pub mod errors;
pub mod render;
pub mod tracing_init;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{
    ab_test::AbTestCommand, api_key::ApiKeyCommand, auth::LoginArgs,
    completion::CompletionArgs, conversion_event::ConversionEventCommand,
    deployment_slot::DeploymentSlotCommand, evaluation_config::EvaluationConfigCommand,
    item_meta_data::ItemMetaDataCommand, model_configuration::ModelConfigurationCommand,
    parameter_tuning_job::ParameterTuningJobCommand, project::ProjectCommand,
    retraining_run::RetrainingRunCommand, retraining_schedule::RetrainingScheduleCommand,
    split_config::SplitConfigCommand, task_log::TaskLogCommand,
    trained_model::TrainedModelCommand, training_data::TrainingDataCommand, user::UserCommand,
};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One summary line per record
    #[default]
    Text,
    /// Full server response as JSON
    Json,
    /// Full server response as YAML
    Yaml,
}

#[derive(Parser, Debug)]
#[command(
    name = "recotem",
    author,
    version,
    about = "CLI for recotem recommendation system",
    long_about = "Command line interface for managing recotem recommendation system resources.\n\n\
                  Examples:\n  \
                  recotem login\n  \
                  recotem project list\n  \
                  recotem -o json trained-model recommend -i 3 --user-id 42 -n 5"
)]
pub struct Cli {
    /// Output format for response data
    #[arg(
        long,
        short = 'o',
        global = true,
        value_enum,
        default_value = "text",
        help = "Output format (text, json, yaml)"
    )]
    pub output: OutputFormat,

    /// API key used for this invocation only; never written to the config file
    #[arg(
        long,
        global = true,
        value_name = "KEY",
        help = "API key for authentication"
    )]
    pub api_key: Option<String>,

    /// Output all errors as structured JSON to stderr
    #[arg(long, global = true, help = "Output errors in JSON format")]
    pub json_errors: bool,

    /// Suppress confirmation messages; requested data is still printed
    #[arg(
        long,
        short = 'q',
        global = true,
        help = "Suppress informational output"
    )]
    pub quiet: bool,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        global = true,
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with the recotem server
    #[command(
        long_about = "Login to the recotem server using username and password to obtain JWT tokens.\n\n\
                      Missing credentials are prompted for; the password is read without echo."
    )]
    Login(LoginArgs),
    /// Clear authentication tokens
    #[command(
        long_about = "Logout from the recotem server by blacklisting the refresh token and clearing stored credentials."
    )]
    Logout,
    /// Check that the server is reachable
    Ping,
    /// Print version information
    Version,
    /// Generate shell completion scripts
    #[command(long_about = "Generate shell completion scripts for recotem CLI.\n\n\
                      Examples:\n  \
                      source <(recotem completion bash)\n  \
                      recotem completion zsh > \"${fpath[1]}/_recotem\"\n  \
                      recotem completion fish > ~/.config/fish/completions/recotem.fish")]
    Completion(CompletionArgs),
    /// Manage projects
    #[command(visible_alias = "p", subcommand)]
    Project(ProjectCommand),
    /// Manage training data files
    #[command(visible_alias = "td", subcommand)]
    TrainingData(TrainingDataCommand),
    /// Manage item metadata files
    #[command(visible_alias = "imd", subcommand)]
    ItemMetaData(ItemMetaDataCommand),
    /// Manage trained models and get recommendations
    #[command(visible_alias = "tm", subcommand)]
    TrainedModel(TrainedModelCommand),
    /// Manage model configurations
    #[command(visible_alias = "mc", subcommand)]
    ModelConfiguration(ModelConfigurationCommand),
    /// Manage evaluation configs
    #[command(visible_alias = "ec", subcommand)]
    EvaluationConfig(EvaluationConfigCommand),
    /// Manage split configs
    #[command(visible_alias = "sc", subcommand)]
    SplitConfig(SplitConfigCommand),
    /// Manage parameter tuning jobs
    #[command(visible_alias = "ptj", subcommand)]
    ParameterTuningJob(ParameterTuningJobCommand),
    /// Manage API keys
    #[command(visible_alias = "ak", subcommand)]
    ApiKey(ApiKeyCommand),
    /// Manage deployment slots
    #[command(visible_alias = "ds", subcommand)]
    DeploymentSlot(DeploymentSlotCommand),
    /// Manage A/B tests
    #[command(visible_alias = "ab", subcommand)]
    AbTest(AbTestCommand),
    /// Manage conversion events
    #[command(visible_alias = "ce", subcommand)]
    ConversionEvent(ConversionEventCommand),
    /// Manage retraining schedules
    #[command(visible_alias = "rs", subcommand)]
    RetrainingSchedule(RetrainingScheduleCommand),
    /// View retraining runs
    #[command(visible_alias = "rr", subcommand)]
    RetrainingRun(RetrainingRunCommand),
    /// View task logs
    #[command(visible_alias = "tl", subcommand)]
    TaskLog(TaskLogCommand),
    /// Manage users
    #[command(visible_alias = "u", subcommand)]
    User(UserCommand),
}
