use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use skyframe_input::{InputEvent, Keymap};
use skyframe_render::{DebugTextRenderer, FrameBuffer, PointRenderer, Renderer};
use skyframe_scene::{Preset, Scene, SceneConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skyframe-cli", about = "Drive the plane/camera exercises headlessly")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Scene configuration (YAML, or JSON by extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    DualView,
    Hierarchy,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::DualView => Preset::DualView,
            PresetArg::Hierarchy => Preset::Hierarchy,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and preset summary
    Info,
    /// Play key presses and a script against a scene, then print the frame
    Run {
        /// Preset to start from (overrides the config file's preset)
        #[arg(short, long, value_enum)]
        preset: Option<PresetArg>,
        /// Key presses, played in order
        #[arg(short, long, default_value = "")]
        keys: String,
        /// YAML list of input events, played after the keys
        #[arg(short, long)]
        script: Option<PathBuf>,
        /// Print the frame as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rasterise the frame's item origins into a PPM
    Raster {
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long, default_value = "800")]
        width: u32,
        #[arg(long, default_value = "600")]
        height: u32,
        #[arg(short, long, value_enum)]
        preset: Option<PresetArg>,
        #[arg(short, long, default_value = "")]
        keys: String,
    },
    /// Draw the blue test line into a 400x300 PPM
    Line {
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Mark window-space clicks in red on a 400x300 PPM
    Click {
        #[arg(short, long)]
        out: PathBuf,
        /// Click positions as X,Y (window coordinates, y down)
        #[arg(value_parser = parse_point, required = true)]
        points: Vec<(i32, i32)>,
    },
}

const EXERCISE_WIDTH: u32 = 400;
const EXERCISE_HEIGHT: u32 = 300;

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok((x, y))
}

fn load_config(path: Option<&Path>, preset: Option<PresetArg>) -> anyhow::Result<SceneConfig> {
    let mut config = match path {
        Some(p) => SceneConfig::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(preset) = preset {
        config.preset = preset.into();
    }
    Ok(config)
}

fn play_keys(scene: &mut Scene, keymap: &Keymap, keys: &str) -> usize {
    keys.chars()
        .filter(|c| scene.handle_event(keymap, InputEvent::Key(*c)))
        .count()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("skyframe-cli v{}", env!("CARGO_PKG_VERSION"));
            let step = skyframe_common::Step::default();
            println!(
                "default step: {} units, {} degrees",
                step.linear,
                step.angular_degrees()
            );
            for (name, preset) in [("dual-view", Preset::DualView), ("hierarchy", Preset::Hierarchy)] {
                let scene = preset.scene();
                let parts: usize = scene.bodies().iter().map(|b| b.parts().len()).sum();
                println!(
                    "{name}: bodies={}, parts={}, cameras={}, bindings={}",
                    scene.bodies().len(),
                    parts,
                    scene.cameras().len(),
                    preset.keymap().len()
                );
            }
        }
        Commands::Run {
            preset,
            keys,
            script,
            json,
        } => {
            let config = load_config(cli.config.as_deref(), preset)?;
            let (mut scene, keymap) = config.build()?;

            let mut redraws = play_keys(&mut scene, &keymap, &keys);
            if let Some(path) = script {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let events: Vec<InputEvent> = serde_yaml::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?;
                tracing::debug!(events = events.len(), "playing script");
                for event in events {
                    if scene.handle_event(&keymap, event) {
                        redraws += 1;
                    }
                }
            }
            tracing::info!(redraws, "input played");

            let frame = scene.frame();
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                print!("{}", DebugTextRenderer::new().render(&frame));
            }
        }
        Commands::Raster {
            out,
            width,
            height,
            preset,
            keys,
        } => {
            let mut config = load_config(cli.config.as_deref(), preset)?;
            config.window.width = width;
            config.window.height = height;
            let (mut scene, keymap) = config.build()?;
            play_keys(&mut scene, &keymap, &keys);

            let fb = PointRenderer::new(width, height).render(&scene.frame());
            fb.save_ppm(&out)?;
            println!("wrote {} ({width}x{height})", out.display());
        }
        Commands::Line { out } => {
            let mut fb = FrameBuffer::new(EXERCISE_WIDTH, EXERCISE_HEIGHT);
            fb.draw_hline(50, 249, 25, FrameBuffer::BLUE)?;
            fb.save_ppm(&out)?;
            println!("wrote {}", out.display());
        }
        Commands::Click { out, points } => {
            let mut fb = FrameBuffer::new(EXERCISE_WIDTH, EXERCISE_HEIGHT);
            let mut marked = 0;
            for (x, y) in points {
                match fb.plot_window_point(x, y, FrameBuffer::RED) {
                    Ok(()) => marked += 1,
                    Err(e) => tracing::warn!(error = %e, "click ignored"),
                }
            }
            fb.save_ppm(&out)?;
            println!("wrote {} ({marked} clicks)", out.display());
        }
    }

    Ok(())
}
