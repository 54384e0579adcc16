use clap::{Parser, Subcommand};

use home_remote::{AppError, Config, ConsoleOutput, Scenario};

#[derive(Parser)]
#[command(name = "home-remote")]
#[command(about = "Command pattern demo: a remote for a conditioner and a kettle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Wire up the remote and run it once
    Run {
        /// Fail on an empty slot instead of skipping it
        #[arg(long, overrides_with = "no_strict")]
        strict: bool,
        /// Skip empty slots even if the config says strict
        #[arg(long, overrides_with = "strict")]
        no_strict: bool,
        /// Execute the conditioner-off slot in the second step
        #[arg(long, overrides_with = "no_use_off_slot")]
        use_off_slot: bool,
        /// Re-run the conditioner-on slot in the second step
        #[arg(long, overrides_with = "use_off_slot")]
        no_use_off_slot: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Logs go to stderr; stdout carries the remote's lines
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { strict, no_strict, use_off_slot, no_use_off_slot } => run(
            &cli.config,
            switch(strict, no_strict),
            switch(use_off_slot, no_use_off_slot),
        ),
        Commands::Version => {
            println!("home-remote v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(&cli.config),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn run(config_path: &str, strict: Option<bool>, use_off_slot: Option<bool>) -> Result<(), AppError> {
    let mut config = Config::load_or_default(config_path)?;
    config.invoker.override_with(strict, use_off_slot);

    let policy = config.invoker.policy();
    tracing::info!("Starting home-remote (strict: {}, use-off-slot: {})", policy.strict, policy.use_off_slot);

    Scenario::new(config.labels)
        .with_policy(policy)
        .run(&ConsoleOutput::new())?;
    Ok(())
}

fn init_config(config_path: &str) -> Result<(), AppError> {
    Config::default().save(config_path)?;
    println!("Config written to {}", config_path);
    Ok(())
}
