use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use colored::*;

use issue_provisioner::cli_context::CliContextBuilder;
use issue_provisioner::constants::{
    DEFAULT_DATA_FILE, DEFAULT_REPO, GITHUB_API_URL, TOKEN_ENV_VAR,
};
use issue_provisioner::error::{ErrorContext, ProvisionError};
use issue_provisioner::logging::{init_logging, log_error, log_panic_info};
use issue_provisioner::provision;

fn build_cli() -> Command {
    Command::new("provision-issues")
        .about("Create labels and issues on a GitHub repository from a JSON data file")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("TOKEN")
                .env(TOKEN_ENV_VAR)
                .hide_env_values(true)
                .help("GitHub token used as bearer credential")
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .short('r')
                .value_name("OWNER/NAME")
                .default_value(DEFAULT_REPO)
                .help("Target repository")
        )
        .arg(
            Arg::new("data")
                .long("data")
                .short('f')
                .value_name("FILE")
                .default_value(DEFAULT_DATA_FILE)
                .value_parser(value_parser!(PathBuf))
                .help("JSON file with a top-level \"issues\" list")
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .default_value(GITHUB_API_URL)
                .help("Base URL of the REST API")
        )
        .arg(
            Arg::new("colors")
                .long("colors")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("JSON object of label name to hex color, merged over the built-in table")
        )
        .arg(
            Arg::new("label-delay-ms")
                .long("label-delay-ms")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .help("Pause after each label operation [default: 100]")
        )
        .arg(
            Arg::new("issue-delay-ms")
                .long("issue-delay-ms")
                .value_name("MS")
                .value_parser(value_parser!(u64))
                .help("Pause after each issue creation attempt [default: 500]")
        )
        .arg(
            Arg::new("timeout-secs")
                .long("timeout-secs")
                .value_name("SECS")
                .value_parser(value_parser!(u64))
                .help("Per-request timeout [default: 30]")
        )
        .arg(
            Arg::new("fail-on-error")
                .long("fail-on-error")
                .help("Exit with status 2 when any issue fails to be created")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Print the labels and issues that would be created, without sending requests")
                .action(ArgAction::SetTrue)
        )
}

fn context_builder(matches: &ArgMatches) -> CliContextBuilder {
    let mut builder = CliContextBuilder::new()
        .with_token(matches.get_one::<String>("token").cloned())
        .fail_on_error(matches.get_flag("fail-on-error"))
        .dry_run(matches.get_flag("dry-run"));

    if let Some(repo) = matches.get_one::<String>("repo") {
        builder = builder.with_repo(repo);
    }
    if let Some(data) = matches.get_one::<PathBuf>("data") {
        builder = builder.with_data_file(data);
    }
    if let Some(api_url) = matches.get_one::<String>("api-url") {
        builder = builder.with_api_base(api_url);
    }
    if let Some(colors) = matches.get_one::<PathBuf>("colors") {
        builder = builder.with_colors_file(colors);
    }
    if let Some(ms) = matches.get_one::<u64>("label-delay-ms") {
        builder = builder.with_label_delay(Duration::from_millis(*ms));
    }
    if let Some(ms) = matches.get_one::<u64>("issue-delay-ms") {
        builder = builder.with_issue_delay(Duration::from_millis(*ms));
    }
    if let Some(secs) = matches.get_one::<u64>("timeout-secs") {
        builder = builder.with_timeout(Duration::from_secs(*secs));
    }

    builder
}

fn report_fatal(err: &ProvisionError) {
    log_error(&err.to_string());
    eprintln!("{} {}", "❌ Error:".red().bold(), err);
    if matches!(err, ProvisionError::MissingToken) {
        eprintln!("Usage: {}=your_token provision-issues [OPTIONS]", TOKEN_ENV_VAR);
    }
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
        eprintln!("{}", info);
    }));

    let matches = build_cli().get_matches();

    let mut context = match context_builder(&matches).build() {
        Ok(context) => context,
        Err(e) => {
            report_fatal(&e);
            process::exit(1);
        }
    };

    // The run continues without a log file if the cache directory is unusable
    if let Err(e) = init_logging().context("Failed to initialize logging") {
        eprintln!("{} {}", "warning:".yellow(), e);
    }

    let fail_on_error = context.settings().fail_on_error;
    match provision::run(&mut context).await {
        Ok(summary) => process::exit(summary.exit_code(fail_on_error)),
        Err(e) => {
            report_fatal(&e);
            process::exit(1);
        }
    }
}
