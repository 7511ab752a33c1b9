use game_video_retrofit::cli::{CliArgs, ReportFormatter};
use game_video_retrofit::{
    init_logging, ConfigError, Driver, LoggingConfig, RealFileSystem, RetrofitConfig, VERSION,
};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    init_logging(LoggingConfig::from_flags(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
    ));

    debug!("game-video-retrofit v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let formatter = ReportFormatter::new();
    println!("{}", formatter.banner());

    let driver = Driver::new(config, RealFileSystem::new());
    let summary = driver.run(|record, outcome| {
        println!("{}", formatter.file_line(record, outcome));
    });

    println!("{}", formatter.summary(&summary));
}

fn load_config(args: &CliArgs) -> Result<RetrofitConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => RetrofitConfig::from_file(path)?,
        None => RetrofitConfig::default(),
    };

    if let Some(base_dir) = &args.base_dir {
        config = config.with_base_dir(base_dir.clone());
    }

    config.validate()?;
    Ok(config)
}
