// Pose Overlay 🚀 AGPL-3.0 License

use clap::Parser;
use pose_overlay::cli::args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "annotate")]
        Commands::Replay(args) => pose_overlay::cli::replay::run_replay(&args),
        #[cfg(feature = "annotate")]
        Commands::Reference(args) => pose_overlay::cli::replay::run_reference(&args),
        #[cfg(not(feature = "annotate"))]
        _ => {
            eprintln!(
                "This command requires the 'annotate' feature. Rebuild with --features annotate."
            );
            std::process::exit(1);
        }
    }
}
