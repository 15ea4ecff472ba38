//! Command-line front end (native).

use crate::native::{encode_png, SystemClipboard};
use clap::{Parser, Subcommand, ValueEnum};
use huewheel_core::{
    copy_swatch, render, Clipboard, ColorError, ConfigError, HarmonyMode, PickerConfig,
    SelectionController, Swatch, SwatchDisplay, SwatchSlot,
};
use kurbo::Point;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Command-line errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("Failed to encode PNG: {0}")]
    Png(#[from] png::EncodingError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Parser)]
#[command(name = "huewheel", about = "Hue/saturation color wheel with color harmonies")]
pub struct Cli {
    /// JSON picker config; flags override its values
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the color wheel to a PNG file
    Render {
        #[arg(long, default_value = "wheel.png")]
        out: PathBuf,
        #[arg(long)]
        diameter: Option<u32>,
    },
    /// Pick the color at a point on the wheel (origin at the top-left corner)
    Pick {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long)]
        diameter: Option<u32>,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Copy this swatch's hex code to the clipboard
        #[arg(long, value_enum)]
        copy: Option<SlotArg>,
    },
    /// Show the harmony swatches for a color
    Harmony {
        /// Color as #rrggbb
        #[arg(long)]
        hex: String,
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
        /// Copy this swatch's hex code to the clipboard
        #[arg(long, value_enum)]
        copy: Option<SlotArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Analogous,
    Triadic,
}

impl From<ModeArg> for HarmonyMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Analogous => HarmonyMode::Analogous,
            ModeArg::Triadic => HarmonyMode::Triadic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SlotArg {
    Left,
    Middle,
    Right,
}

impl From<SlotArg> for SwatchSlot {
    fn from(slot: SlotArg) -> Self {
        match slot {
            SlotArg::Left => SwatchSlot::Left,
            SlotArg::Middle => SwatchSlot::Middle,
            SlotArg::Right => SwatchSlot::Right,
        }
    }
}

/// Collects swatches as aligned text rows.
#[derive(Debug, Default)]
pub struct SwatchTable {
    rows: Vec<String>,
}

impl SwatchTable {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl SwatchDisplay for SwatchTable {
    fn show_swatch(&mut self, slot: SwatchSlot, swatch: &Swatch) {
        let name = match slot {
            SwatchSlot::Left => "left",
            SwatchSlot::Middle => "middle",
            SwatchSlot::Right => "right",
        };
        self.rows.push(format!("{:<7}{}  {}", name, swatch.hex, swatch.rgb));
    }
}

/// Load the config file, or the defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<PickerConfig, CliError> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = PickerConfig::from_json(&json)?;
    log::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Run a parsed command line against the system clipboard and stdout.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let stdout = io::stdout();
    execute(cli, &SystemClipboard, &mut stdout.lock())
}

/// Run a parsed command line.
pub fn execute<C, W>(cli: Cli, clipboard: &C, out: &mut W) -> Result<(), CliError>
where
    C: Clipboard + ?Sized,
    W: Write + ?Sized,
{
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render { out: path, diameter } => {
            if let Some(diameter) = diameter {
                config.diameter = diameter;
            }
            config.validate()?;

            let buffer = render(config.diameter);
            let png_data = encode_png(&buffer)?;
            std::fs::write(&path, &png_data).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("Exported PNG to: {:?}", path);
            writeln!(
                out,
                "Wrote {}x{} wheel to {}",
                buffer.width(),
                buffer.height(),
                path.display()
            )?;
        }
        Command::Pick {
            x,
            y,
            diameter,
            mode,
            copy,
        } => {
            if let Some(diameter) = diameter {
                config.diameter = diameter;
            }
            if let Some(mode) = mode {
                config.initial_mode = mode.into();
            }
            config.validate()?;

            let mut controller = SelectionController::from_config(&config)?;
            if !controller.pick_color(Point::new(x, y)) {
                writeln!(out, "({}, {}) is outside the wheel; nothing picked", x, y)?;
                return Ok(());
            }
            report(&controller, copy, clipboard, out)?;
        }
        Command::Harmony { hex, mode, copy } => {
            if let Some(mode) = mode {
                config.initial_mode = mode.into();
            }
            let mut controller = SelectionController::from_config(&config)?;
            controller.select_hex(&hex)?;
            report(&controller, copy, clipboard, out)?;
        }
    }

    Ok(())
}

fn report<C, W>(
    controller: &SelectionController,
    copy: Option<SlotArg>,
    clipboard: &C,
    out: &mut W,
) -> Result<(), CliError>
where
    C: Clipboard + ?Sized,
    W: Write + ?Sized,
{
    let mut table = SwatchTable::default();
    controller.present(&mut table);

    writeln!(out, "{} harmony", controller.mode().label())?;
    for row in table.rows() {
        writeln!(out, "{}", row)?;
    }

    if let Some(slot) = copy {
        let notice = pollster::block_on(copy_swatch(controller, slot.into(), clipboard));
        writeln!(out, "{}", notice)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use huewheel_core::MemoryClipboard;

    fn run_args(args: &[&str], clipboard: &MemoryClipboard) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        execute(cli, clipboard, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_harmony_triadic() {
        let clipboard = MemoryClipboard::new();
        let output = run_args(
            &["huewheel", "harmony", "--hex", "#ff0000", "--mode", "triadic"],
            &clipboard,
        );
        assert_eq!(
            output,
            "Triadic harmony\n\
             left   #00ff00  rgb(0, 255, 0)\n\
             middle #ff0000  rgb(255, 0, 0)\n\
             right  #0000ff  rgb(0, 0, 255)\n"
        );
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_pick_and_copy() {
        let clipboard = MemoryClipboard::new();
        let output = run_args(
            &[
                "huewheel", "pick", "--x", "0", "--y", "150", "--diameter", "300", "--copy", "left",
            ],
            &clipboard,
        );
        assert!(output.starts_with("Analogous harmony\n"));
        assert!(output.contains("middle #ff0000"));
        assert!(output.ends_with("Hex code #ff8000 copied to clipboard!\n"));
        assert_eq!(clipboard.contents().as_deref(), Some("#ff8000"));
    }

    #[test]
    fn test_pick_outside_wheel() {
        let clipboard = MemoryClipboard::new();
        let output = run_args(
            &["huewheel", "pick", "--x", "-5", "--y", "-5", "--copy", "middle"],
            &clipboard,
        );
        assert_eq!(output, "(-5, -5) is outside the wheel; nothing picked\n");
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_pick_nan_is_outside_wheel() {
        let clipboard = MemoryClipboard::new();
        let output = run_args(
            &["huewheel", "pick", "--x", "NaN", "--y", "0", "--copy", "middle"],
            &clipboard,
        );
        assert_eq!(output, "(NaN, 0) is outside the wheel; nothing picked\n");
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_harmony_rejects_bad_hex() {
        let cli = Cli::try_parse_from(["huewheel", "harmony", "--hex", "red"]).unwrap();
        let result = execute(cli, &MemoryClipboard::new(), &mut Vec::<u8>::new());
        assert!(matches!(result, Err(CliError::Color(ColorError::InvalidHex(_)))));
    }

    #[test]
    fn test_unknown_mode_is_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "huewheel",
            "harmony",
            "--hex",
            "#ff0000",
            "--mode",
            "complementary",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_writes_png() {
        let dir = std::env::temp_dir().join(format!("huewheel-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wheel.png");

        let clipboard = MemoryClipboard::new();
        let output = run_args(
            &["huewheel", "render", "--diameter", "32", "--out", path.to_str().unwrap()],
            &clipboard,
        );
        assert!(output.starts_with("Wrote 32x32 wheel to "));

        let png_data = std::fs::read(&path).unwrap();
        assert_eq!(&png_data[1..4], b"PNG");
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_file() {
        let dir = std::env::temp_dir().join(format!("huewheel-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("picker.json");
        std::fs::write(&path, r#"{ "diameter": 100, "initial_mode": "triadic" }"#).unwrap();

        let clipboard = MemoryClipboard::new();
        let output = run_args(
            &["huewheel", "--config", path.to_str().unwrap(), "pick", "--x", "0", "--y", "50"],
            &clipboard,
        );
        assert!(output.starts_with("Triadic harmony\n"));
        assert!(output.contains("left   #00ff00"));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config(Some(Path::new("/nonexistent/huewheel.json")));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }
}
