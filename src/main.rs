use std::io;

use tracing_subscriber::EnvFilter;

use settings_writer_lib::writer::SettingsWriter;

/// Install the GLM endpoint settings into ~/.claude/settings.json
#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let _args = Args::parse();
    init_tracing();

    let result = SettingsWriter::for_current_user().and_then(|writer| {
        let mut stdout = io::stdout().lock();
        writer.run(&mut stdout)
    });

    if let Err(err) = result {
        tracing::debug!(error = ?err, operation = %err.operation(), "run aborted");
        eprintln!("{}", err.diagnostics());
        return Err(anyhow::anyhow!("settings were not installed"));
    }

    Ok(())
}
