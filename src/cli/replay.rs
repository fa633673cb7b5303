// Pose Overlay 🚀 AGPL-3.0 License

use std::process;
use std::time::Duration;

use crate::annotate::{AnnotateOptions, annotate_pose, blank_canvas, find_next_run_dir};
use crate::cli::args::{ReferenceArgs, ReplayArgs};
use crate::export::read_csv;
use crate::landmark::PoseResult;
use crate::pipeline::OverlayConfig;
use crate::smoothing::LandmarkSmoother;
use crate::visualizer::skeleton::reference_pose;
use crate::{error, verbose, warn};

#[cfg(feature = "visualize")]
use crate::visualizer::Viewer;

/// Replay a recorded landmark CSV through the smoothing overlay.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn run_replay(args: &ReplayArgs) {
    crate::cli::logging::set_verbose(args.verbose);

    let frames = match read_csv(&args.input) {
        Ok(frames) => frames,
        Err(e) => {
            error!("Failed to read {}: {e}", args.input);
            process::exit(1);
        }
    };
    if frames.is_empty() {
        warn!("{} contains no frames", args.input);
        return;
    }

    verbose!(
        "pose-overlay {} 🚀 replaying {} frames from {} (alpha={})",
        crate::VERSION,
        frames.len(),
        args.input,
        args.alpha
    );

    #[cfg(not(feature = "visualize"))]
    if args.show {
        warn!(
            "--show requires the 'visualize' feature. Compile with --features visualize to enable the window."
        );
    }

    let save_dir = if args.save {
        let dir = find_next_run_dir("runs/overlay", "replay");
        if let Err(e) = std::fs::create_dir_all(&dir) {
            error!("Failed to create save directory {dir}: {e}");
            process::exit(1);
        }
        Some(dir)
    } else {
        None
    };

    let config = OverlayConfig::new()
        .with_alpha(args.alpha)
        .with_visibility_threshold(args.vis_threshold);
    let mut smoother = LandmarkSmoother::new(config.alpha);
    let opts = AnnotateOptions::from(&config);
    let frame_delay = Duration::from_secs_f32(1.0 / args.fps.max(1.0));

    #[cfg(feature = "visualize")]
    let mut viewer: Option<Viewer> = None;

    for frame in &frames {
        let smoothed = smoother.update(&frame.landmarks);
        let result = PoseResult::single(smoothed);

        let canvas = blank_canvas(args.size, args.size);
        let annotated = annotate_pose(&canvas, &result, Some(&opts));

        verbose!(
            "frame {}/{} t={:.3}s: {}",
            frame.frame + 1,
            frames.len(),
            frame.timestamp,
            result.verbose()
        );

        if let Some(ref dir) = save_dir {
            let path = format!("{dir}/frame_{:05}.png", frame.frame);
            if let Err(e) = annotated.save(&path) {
                error!("Failed to save {path}: {e}");
            }
        }

        #[cfg(feature = "visualize")]
        if args.show {
            if viewer.is_none() {
                match Viewer::new("Pose Overlay", args.size as usize, args.size as usize) {
                    Ok(v) => viewer = Some(v),
                    Err(e) => {
                        error!("Failed to open window: {e}");
                        process::exit(1);
                    }
                }
            }
            if let Some(ref mut v) = viewer {
                match v.update(&annotated) {
                    Ok(true) => {
                        let _ = v.wait(frame_delay);
                    }
                    Ok(false) => break, // window dismissed
                    Err(e) => {
                        error!("Viewer error: {e}");
                        break;
                    }
                }
            }
        }

        #[cfg(not(feature = "visualize"))]
        let _ = frame_delay;
    }

    if let Some(dir) = save_dir {
        verbose!("Results saved to {dir}");
    }
}

/// Render the canonical reference pose to an image file.
pub fn run_reference(args: &ReferenceArgs) {
    let canvas = blank_canvas(args.size, args.size);
    let result = PoseResult::single(reference_pose());
    let annotated = annotate_pose(&canvas, &result, None);

    match annotated.save(&args.output) {
        Ok(()) => {
            crate::success!("Reference pose saved to {}", args.output);
        }
        Err(e) => {
            error!("Failed to save {}: {e}", args.output);
            process::exit(1);
        }
    }
}
