use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use raylib::prelude::*;

use showcase::constants::*;
use showcase::texture_loader::{load_sorted_image_paths, load_textures};
use showcase::viewer::{Button, Layout, ViewerSurface, collect_inputs};
use showcase::{CarouselController, CarouselInput, PreferenceStore, ShowcaseConfig, ThemeToggle};

/// Certificate carousel viewer.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding the certificate images
    image_directory: PathBuf,

    /// Settings file (TOML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Auto-advance interval in milliseconds
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Where to keep the theme preference
    #[arg(long)]
    preferences: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<ShowcaseConfig> {
    let mut config = ShowcaseConfig::load(args.config.as_deref()).context("loading settings")?;
    if let Some(interval_ms) = args.interval_ms {
        config.carousel.interval_ms = interval_ms;
    }
    if let Some(path) = &args.preferences {
        config.preferences_path = path.clone();
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let image_paths = load_sorted_image_paths(&args.image_directory)
        .with_context(|| format!("loading certificates from {}", args.image_directory.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Certificates")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let certificates = load_textures(&mut rl, &thread, &image_paths);
    let missing = certificates.iter().filter(|c| c.is_missing()).count();
    info!(
        "Loaded {} certificates ({} shown as placeholders)",
        certificates.len(),
        missing
    );

    let slide_count = certificates.len();
    let mut carousel = CarouselController::new(
        slide_count,
        ViewerSurface::new(certificates),
        config.carousel_options(),
    );
    let mut theme = ThemeToggle::new(PreferenceStore::open(&config.preferences_path));
    let mut hovering = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let frame_time = rl.get_frame_time();
        let layout = Layout::new(
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
            slide_count,
        );

        let mouse = rl.get_mouse_position();
        for input in collect_inputs(&rl, &layout, &mut hovering) {
            match input {
                CarouselInput::PreviousButton => {
                    carousel.surface_mut().press_button(Button::Previous, &layout, mouse)
                }
                CarouselInput::NextButton => {
                    carousel.surface_mut().press_button(Button::Next, &layout, mouse)
                }
                _ => {}
            }
            carousel.handle(input);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_T) {
            theme.toggle();
        }

        let dt = Duration::from_secs_f32(frame_time);
        carousel.update(dt);
        carousel.surface_mut().update(dt);

        let hint = format!("[T] {} mode   [<-/->] browse", theme.theme().toggle());
        let mut d = rl.begin_drawing(&thread);
        carousel.surface().draw(&mut d, &layout, theme.theme(), &hint);
    }

    carousel.shutdown();
    Ok(())
}
