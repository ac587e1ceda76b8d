mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, Settings, CONFIG_FILENAME};
use license_sniffer::adapters::outbound::console::StderrProgressReporter;
use license_sniffer::adapters::outbound::filesystem::TokioFileSystem;
use license_sniffer::adapters::outbound::markdown::PulldownMarkdownParser;
use license_sniffer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use license_sniffer::application::LicenseSniffer;
use license_sniffer::license_detection::domain::{DependencyRecord, LicenseCatalog};
use license_sniffer::ports::inbound::LicenseSniffingPort;
use license_sniffer::shared::error::{ExitCode, SnifferError};
use license_sniffer::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    validate_module_path(&args.path)?;

    let config = match args.config.as_deref() {
        Some(path) => {
            let config = load_config_from_path(path)?;
            eprintln!("📄 Loaded config from: {}", path.display());
            Some(config)
        }
        None => {
            let config = discover_config(&args.path)?;
            if config.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", CONFIG_FILENAME);
            }
            config
        }
    };
    let settings = Settings::resolve(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let sniffer = LicenseSniffer::new(
        TokioFileSystem::new(),
        PulldownMarkdownParser::new(),
        StderrProgressReporter::new(),
        LicenseCatalog::global(),
    );

    let records = if args.tree {
        sniffer.sniff_tree(&args.path, &settings.options).await?
    } else {
        let license = sniffer.sniff_module(&args.path, &settings.options).await?;
        vec![DependencyRecord::new(args.path.clone(), license, Vec::new())]
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let report = FormatterFactory::create(settings.format).format(&records)?;
    PresenterFactory::create(PresenterType::from_output(args.output)).present(&report)?;

    Ok(exit_code_for(&records, settings.fail_on_unknown))
}

fn exit_code_for(records: &[DependencyRecord], fail_on_unknown: bool) -> ExitCode {
    if fail_on_unknown && records.iter().any(|record| !record.is_known()) {
        ExitCode::UnknownLicensesDetected
    } else {
        ExitCode::Success
    }
}

fn validate_module_path(path: &Path) -> Result<()> {
    let invalid = |reason: &str| -> anyhow::Error {
        SnifferError::InvalidModulePath {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
        .into()
    };

    if !path.exists() {
        return Err(invalid("Directory does not exist"));
    }

    if !path.is_dir() {
        return Err(invalid("Not a directory"));
    }

    Ok(())
}
