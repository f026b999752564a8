//! Tesseract viewer - headless driver
//!
//! Runs the animation loop for the configured number of frames and prints
//! projected frames to stdout. A rendering backend would replace the print
//! step with a buffer upload of the same snapshot.

use tesseract_core::{FrameSnapshot, HypercubeModel};
use tesseract_viz::config::AppConfig;
use tesseract_viz::systems::AnimationSystem;

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging; RUST_LOG overrides the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting tesseract viewer");

    let mut model = config.build_model().unwrap_or_else(|e| {
        log::warn!("Invalid model configuration: {}. Using defaults.", e);
        HypercubeModel::default()
    });
    log::info!(
        "Model ready: {} vertices, {} edges, planes {}, {:?} projection",
        model.vertices().len(),
        model.edges().len(),
        config.model.rotation_planes.label(),
        model.projection()
    );

    let mut animation = AnimationSystem::new(&model);
    let frames = config.animation.frames;
    let dump_every = config.debug.dump_every;

    for _ in 0..frames {
        let theta = animation.update(&mut model).theta;
        let n = animation.frame_count();
        log::trace!("frame {} theta {}", n, theta);
        if dump_every > 0 && n % dump_every == 0 {
            print_frame(n, animation.front());
        }
    }

    if dump_every == 0 || frames % dump_every != 0 {
        print_frame(animation.frame_count(), animation.front());
    }

    let elapsed = animation.elapsed().as_secs_f64();
    log::info!(
        "Computed {} frames in {:.3} ms",
        animation.frame_count(),
        elapsed * 1000.0
    );
}

fn print_frame(n: u64, frame: &FrameSnapshot) {
    println!(
        "# frame {} theta {:.5} {:?} marker {:.3}",
        n, frame.theta, frame.projection, frame.marker_scale
    );
    for (i, v) in frame.vertices.iter().enumerate() {
        let [x, y, z] = v.position;
        println!(
            "v {:2} {:+.5} {:+.5} {:+.5}  rgb {:.2} {:.2} {:.2}",
            i, x, y, z, v.color.r, v.color.g, v.color.b
        );
    }
}
