use clap::Parser;
use std::path::PathBuf;

/// Retrofits the shared game video widget into Flutter game screens
#[derive(Parser, Debug)]
#[command(
    name = "game-video-retrofit",
    about = "Retrofits the shared game video widget into Flutter game screens",
    version,
    long_about = "Rewrites each configured game screen in place: adds the video widget \
                  import, the _getCurrentVideoType() helper, and a two-column layout with \
                  the video next to the game area. Files that are already migrated are \
                  left untouched, so the tool can be run any number of times.\n\n\
                  Examples:\n  \
                  game-video-retrofit\n  \
                  game-video-retrofit --base-dir /path/to/app/lib/presentation/screens/games\n  \
                  game-video-retrofit --config retrofit.toml"
)]
pub struct CliArgs {
    #[arg(
        short = 'c',
        long,
        value_name = "FILE",
        help = "TOML file with the base directory and game file list"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'd',
        long,
        value_name = "DIR",
        help = "Directory holding the game screens (overrides the config file)"
    )]
    pub base_dir: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Show debug diagnostics")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}
