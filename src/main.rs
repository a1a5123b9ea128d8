use clap::Parser;
use rootnav::OnboardingMode;
use rootnav::core::config::{CliOverrides, apply_log_level, init_file_logger, load_config, resolve};
use std::fs::File;

#[derive(Parser)]
#[command(name = "rootnav", about = "Single-screen root navigation demo")]
struct Args {
    /// How onboarding is wired up (overrides config file)
    #[arg(short, long, value_enum)]
    onboarding: Option<OnboardingMode>,

    /// Duration of fade and slide transitions in milliseconds
    #[arg(short, long)]
    transition_ms: Option<u64>,

    /// Deep link stored at startup, JSON or plain text
    #[arg(short, long)]
    deeplink: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to rootnav.log in current directory
    if let Ok(log_file) = File::create("rootnav.log") {
        init_file_logger(log_file);
    }

    let config = load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        onboarding: args.onboarding,
        transition_ms: args.transition_ms,
        deeplink: args.deeplink,
    };
    let resolved = resolve(&config, &cli);
    apply_log_level(resolved.log_level);

    log::info!(
        "rootnav starting up (onboarding: {:?}, transitions: {:?})",
        resolved.onboarding,
        resolved.options.transitions
    );

    rootnav::tui::run(resolved)
}
