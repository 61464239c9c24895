/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Signature token obtained from the verifier backend
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or the startup flow
*/

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use id_verifier_client::{SignatureButton, VerifierClient};
use id_verifier_signer::{FileProofProvider, SignerConfig};

#[derive(Parser, Debug)]
#[command(name = "id-verifier-signer", version, about = "Request an identity-proof signature from a verifier backend")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    info!(
        config_path = %args.config_path.display(),
        dry_run = args.dry_run,
        "starting id-verifier-signer"
    );

    let config = load_config(&args.config_path)?;
    info!(
        verifier_url = %config.verifier_url,
        account = %config.account,
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let client =
        VerifierClient::new(&config.verifier_url).context("create verifier client")?;
    let provider = Arc::new(FileProofProvider::new(&config.proof_path));

    let (tx, rx) = mpsc::channel();
    let button = SignatureButton::new(
        client,
        provider,
        &config.account,
        config.disabled,
        Box::new(move |signature| {
            let _ = tx.send(signature);
        }),
    );

    button.click().await.context("signature flow")?;

    match rx.try_recv() {
        Ok(signature) => {
            info!("signature obtained");
            println!("{signature}");
        }
        Err(_) => {
            // A suppressed activation completes without a callback.
            warn!("signature control disabled; nothing signed");
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<SignerConfig> {
    let path_str = path.to_str().context("config path must be valid utf-8")?;
    SignerConfig::from_file(path_str).context("load config")
}
