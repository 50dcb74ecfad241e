//! Panopto Downloader - CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use panopto_downloader::{
    api::PanoptoApi,
    cli::Args,
    config::{parse_panopto_id, validate_config, Config, DownloadMode},
    download::{
        download_folder, download_session, run_until, shutdown_signal, AuthCookie, YoutubeDl,
    },
    error::{exit_codes, Error, Result},
    output::{
        print_folder_summary, print_info, print_run_summary, print_success, print_warning,
        report,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(e) => {
            let (code, line) = report(&e);
            eprintln!("{}", line);
            ExitCode::from(code)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse_normalized();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        tracing::debug!(
            "No configuration file at {}, using defaults",
            config_path.display()
        );
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let raw_id = config
        .options
        .target_id
        .as_deref()
        .ok_or_else(|| Error::MissingConfig("id".into()))?;
    let target_id = parse_panopto_id(raw_id)?;

    let mode = DownloadMode::from_folder_flag(config.options.folder);
    let output = config.options.output.clone();

    if !config.options.quiet {
        print_run_summary(
            &mode.to_string(),
            &target_id,
            &output.display().to_string(),
        );
    }

    let api = PanoptoApi::from_config(&config)?;
    let cookie = AuthCookie::new(
        config.cookie_domain()?,
        config.account.auth_token.clone(),
    );
    let downloader = YoutubeDl::new(config.options.downloader.clone())
        .with_leading_args(config.options.downloader_args.clone())
        .with_progress(!config.options.quiet);

    // Dropping the work on Ctrl-C removes the cookie jar and kills the downloader.
    let work = async {
        match mode {
            DownloadMode::Session => {
                download_session(&api, &downloader, &cookie, &target_id, &output).await?;
                print_success(&format!("Saved {}", output.display()));
            }
            DownloadMode::Folder => {
                print_info(&format!("Listing folder {}", target_id));
                let summary =
                    download_folder(&api, &downloader, &cookie, &target_id, &output).await?;

                if summary.listed == 0 {
                    print_warning(&format!("Folder {} has no sessions", target_id));
                }
                print_folder_summary(&summary, &output.display().to_string());
            }
        }
        Ok::<(), Error>(())
    };

    run_until(work, shutdown_signal()).await?;

    Ok(())
}
