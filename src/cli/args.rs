// Pose Overlay 🚀 AGPL-3.0 License

use clap::{Args, Parser, Subcommand};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Replay Options:
    --input, -i <INPUT>    Recorded landmark CSV to replay
    --alpha <ALPHA>        EMA smoothing factor, 1.0 = off [default: 0.5]
    --fps <FPS>            Playback rate [default: 30]
    --size <SIZE>          Canvas size in pixels (square) [default: 640]
    --show                 Display the overlay in a window
    --save                 Save annotated frames to runs/overlay/replay
    --verbose              Show verbose output

Examples:
    pose-overlay replay --input recording.csv --show
    pose-overlay replay -i recording.csv --alpha 0.3 --save
    pose-overlay reference --size 480 --output reference.png"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded landmark CSV through the smoothing overlay
    Replay(ReplayArgs),
    /// Render the canonical reference pose
    Reference(ReferenceArgs),
}

/// Arguments for the replay command.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Recorded landmark CSV file to replay
    #[arg(short, long)]
    pub input: String,

    /// EMA smoothing factor (0.0 to 1.0); 1.0 disables smoothing
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f32,

    /// Playback frame rate
    #[arg(long, default_value_t = 30.0)]
    pub fps: f32,

    /// Canvas size in pixels (square)
    #[arg(long, default_value_t = 640)]
    pub size: u32,

    /// Visibility threshold for drawing landmarks
    #[arg(long, default_value_t = 0.5)]
    pub vis_threshold: f32,

    /// Display the overlay in a window
    #[arg(long, default_value_t = false)]
    pub show: bool,

    /// Save annotated frames to runs/overlay/replay
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}

/// Arguments for the reference command.
#[derive(Args, Debug)]
pub struct ReferenceArgs {
    /// Canvas size in pixels (square)
    #[arg(long, default_value_t = 640)]
    pub size: u32,

    /// Output image path
    #[arg(short, long, default_value = "reference.png")]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_replay_args_defaults() {
        let args = Cli::parse_from(["app", "replay", "--input", "recording.csv"]);
        match args.command {
            Commands::Replay(replay) => {
                assert_eq!(replay.input, "recording.csv");
                assert!((replay.alpha - 0.5).abs() < f32::EPSILON);
                assert!((replay.fps - 30.0).abs() < f32::EPSILON);
                assert_eq!(replay.size, 640);
                assert!(!replay.show);
                assert!(!replay.save);
                assert!(replay.verbose);
            }
            Commands::Reference(_) => panic!("expected replay command"),
        }
    }

    #[test]
    fn test_replay_args_custom() {
        let args = Cli::parse_from([
            "app",
            "replay",
            "-i",
            "run.csv",
            "--alpha",
            "0.3",
            "--save",
            "--verbose",
            "false",
        ]);
        match args.command {
            Commands::Replay(replay) => {
                assert_eq!(replay.input, "run.csv");
                assert!((replay.alpha - 0.3).abs() < f32::EPSILON);
                assert!(replay.save);
                assert!(!replay.verbose);
            }
            Commands::Reference(_) => panic!("expected replay command"),
        }
    }

    #[test]
    fn test_reference_args() {
        let args = Cli::parse_from(["app", "reference", "--size", "480"]);
        match args.command {
            Commands::Reference(reference) => {
                assert_eq!(reference.size, 480);
                assert_eq!(reference.output, "reference.png");
            }
            Commands::Replay(_) => panic!("expected reference command"),
        }
    }
}
