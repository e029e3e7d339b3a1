use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchpad::config::Config;
use sketchpad::draw;
use sketchpad::script::EventScript;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand sketch editor with stroke selection, move and rotate")]
struct Cli {
    /// Pointer event script (TOML) to replay into the editor
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Render the final frame to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: i32,

    /// Config file to use instead of ~/.config/sketchpad/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the final frame's primitives as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    print_primitives: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.width <= 0 || cli.height <= 0 {
        log::error!("Canvas size must be positive (got {}x{})", cli.width, cli.height);
        return Err(anyhow::anyhow!("Invalid canvas size"));
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = EventScript::load(&cli.script)?;
    let mut state = config.build_input_state();
    script.replay(&mut state);
    log::info!(
        "Replayed {} events from {}",
        script.events.len(),
        cli.script.display()
    );

    let primitives = state.render_primitives();

    if let Some(output) = &cli.output {
        draw::write_png(
            output,
            &primitives,
            config.style.background.to_color(),
            cli.width,
            cli.height,
        )?;
    }

    if cli.print_primitives {
        let json =
            serde_json::to_string_pretty(&primitives).context("Failed to serialize primitives")?;
        println!("{json}");
    } else {
        println!(
            "Stroke: {} points, mode: {:?}, selected: {}",
            state.stroke().len(),
            state.mode(),
            state.is_selected()
        );
    }

    Ok(())
}
