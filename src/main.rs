//! kubectl-rook-ceph - kubectl plugin for Rook-managed Ceph clusters

use anyhow::Result;
use clap::Parser;
use rook_ceph::cli::{Cli, Command};
use rook_ceph::commands;
use rook_ceph::config::Settings;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: &Cli) -> rook_ceph::error::Result<()> {
    match &cli.command {
        Command::Completions(args) => {
            generate_completions(args.shell);
            Ok(())
        }
        Command::Mons => commands::run_mons(&load_settings(cli)?).await,
        Command::Debug(args) => commands::run_debug(&load_settings(cli)?, args).await,
        Command::Status => commands::run_status(&load_settings(cli)?).await,
    }
}

fn load_settings(cli: &Cli) -> rook_ceph::error::Result<Settings> {
    let settings = Settings::load(cli)?;
    debug!(
        namespace = %settings.namespace,
        operator_namespace = %settings.operator_namespace,
        "resolved settings"
    );
    Ok(settings)
}

fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "info,rook_ceph=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "kubectl-rook-ceph", &mut std::io::stdout());
}
