use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use vitalmap::analysis::analyze_patient;
use vitalmap::classifier::{synthetic, TrainedClassifier};
use vitalmap::cli::{Cli, Commands};
use vitalmap::config::{init_config_file, VitalmapConfig};
use vitalmap::core::PatientRecord;
use vitalmap::io::output::{create_writer, OutputFormat};
use vitalmap::server;
use vitalmap::storage::PatientStore;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Analyze {
            record,
            sample,
            format,
            output,
            no_classifier,
            config,
        } => run_analyze(record, sample, format, output, no_classifier, config),
        Commands::Serve {
            host,
            port,
            config,
            no_classifier,
        } => run_serve(host, port, config, no_classifier).await,
        Commands::Portal {
            host,
            port,
            database,
            config,
        } => run_portal(host, port, database, config).await,
        Commands::Init { force } => {
            let path = init_config_file(force)?;
            println!("Created {} configuration file", path.display());
            Ok(())
        }
    }
}

fn run_analyze(
    record_path: Option<PathBuf>,
    sample: bool,
    format: OutputFormat,
    output: Option<PathBuf>,
    no_classifier: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = VitalmapConfig::load(config_path.as_deref())?;

    let record: PatientRecord = if sample {
        synthetic::sample_patient().record
    } else {
        let path = record_path
            .ok_or_else(|| anyhow::anyhow!("provide a patient record file, or pass --sample"))?;
        serde_json::from_str(&std::fs::read_to_string(&path)?)?
    };

    let classifier = train_if_enabled(&config, no_classifier);
    let report = analyze_patient(&record, classifier.as_ref());

    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(format, destination).write_report(&report)
}

async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
    no_classifier: bool,
) -> Result<()> {
    let mut config = VitalmapConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let classifier = train_if_enabled(&config, no_classifier);

    info!(
        "Starting vitalmap API on {}:{}",
        config.server.host, config.server.port
    );
    info!("Upload folder: {}", config.uploads.dir.display());
    server::run_api_server(config, classifier).await?;
    Ok(())
}

async fn run_portal(
    host: Option<String>,
    port: Option<u16>,
    database: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = VitalmapConfig::load(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(url) = database {
        config.database.url = url;
    }

    let store = PatientStore::connect(&config.database.url).await?;

    info!(
        "Starting vitalmap portal on {}:{}",
        config.server.host, config.server.port
    );
    info!("Patient store: {}", config.database.url);
    server::run_portal_server(config, store).await?;
    Ok(())
}

/// Training failures degrade to rule-only analysis; the health endpoint
/// reports the missing model.
fn train_if_enabled(config: &VitalmapConfig, no_classifier: bool) -> Option<TrainedClassifier> {
    if !config.classifier.enabled || no_classifier {
        info!("Classifier disabled; serving rule-based analysis only");
        return None;
    }

    info!(
        "Training classifier on {} synthetic records (depth {})",
        config.classifier.samples, config.classifier.max_depth
    );
    match TrainedClassifier::train(&config.classifier) {
        Ok(model) => {
            info!("Classifier trained");
            Some(model)
        }
        Err(e) => {
            warn!("Classifier training failed: {e}; continuing without it");
            None
        }
    }
}
