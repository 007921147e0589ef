//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::device::SHOW_DELAY_DEFAULT;
use crate::state::PRESS_DELAY_DEFAULT;

/// micro:bit emulator CLI - drive the emulated device state and display.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output
/// optimized for AI agents.
#[derive(Parser, Debug)]
#[command(name = "mb", version, about, long_about = None)]
#[command(propagate_version = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags naturally use multiple bools
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "MB_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json (optimized for AI agents)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (repeat for more detail)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Backing state file (overrides microbit_settings.toml)
    #[arg(long, short = 's', global = true, env = "MICROBIT_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // === State Store ===
    /// Read one state value
    Get(GetArgs),

    /// Write one state value (validated)
    Set(SetArgs),

    /// Show the full state table
    State,

    /// Reset all state to defaults
    Reset,

    // === Inputs ===
    /// Press a named input (button_a, button_b, a pin, ...)
    Press(InputArgs),

    /// Release a named input
    Release(InputArgs),

    /// Press then release an input with a delay after each
    #[command(visible_alias = "press-and-release")]
    Tap(TapArgs),

    // === Power ===
    /// Switch emulated power or query it
    Power(PowerArgs),

    // === Display ===
    /// Render an image pattern or built-in icon on the display
    Show(ShowArgs),

    /// Scroll text across the display
    Scroll(ScrollArgs),

    // === Clock ===
    /// Advance the emulated clock (picks up external state writes)
    Sleep(SleepArgs),

    /// Show milliseconds since the device was switched on
    Uptime,

    // === Utilities ===
    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// State key, e.g. pin0 or button_a_presses (case-insensitive)
    pub key: String,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// State key (case-insensitive)
    pub key: String,

    /// Integer value (or a path for state_file)
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input name, e.g. button_a
    pub name: String,
}

#[derive(clap::Args, Debug)]
pub struct TapArgs {
    /// Input name, e.g. button_a
    pub name: String,

    /// Delay in milliseconds after press and after release
    #[arg(long, default_value_t = PRESS_DELAY_DEFAULT)]
    pub delay: u64,
}

#[derive(clap::Args, Debug)]
pub struct PowerArgs {
    /// What to do with the power switch
    #[arg(value_enum)]
    pub action: PowerAction,
}

/// Power subcommand actions.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PowerAction {
    /// Switch power on
    On,
    /// Switch power off (silences the display, zeroes the clock)
    Off,
    /// Report whether power is on
    Status,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Colon-delimited pattern (e.g. "90009:09090:00900:") or icon name
    /// (e.g. HEART)
    pub image: String,

    /// Delay in milliseconds before the frame
    #[arg(long, default_value_t = 0)]
    pub delay: u64,

    /// Clear the display afterwards
    #[arg(long)]
    pub clear: bool,
}

#[derive(clap::Args, Debug)]
pub struct ScrollArgs {
    /// Text to scroll
    pub text: String,

    /// Delay in milliseconds per character
    #[arg(long, default_value_t = SHOW_DELAY_DEFAULT)]
    pub delay: u64,
}

#[derive(clap::Args, Debug)]
pub struct SleepArgs {
    /// Milliseconds of emulated device time
    pub millis: u64,
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_robot_flag_implies_json() {
        let cli = Cli::parse_from(["mb", "--robot", "state"]);
        assert!(cli.use_json());
        assert!(!cli.use_compact_json());
    }

    #[test]
    fn test_format_json_compact() {
        let cli = Cli::parse_from(["mb", "--format", "json-compact", "version"]);
        assert!(cli.use_json());
        assert!(cli.use_compact_json());
    }

    #[test]
    fn test_tap_default_delay() {
        let cli = Cli::parse_from(["mb", "tap", "button_a"]);
        match cli.command {
            Some(Commands::Tap(args)) => {
                assert_eq!(args.name, "button_a");
                assert_eq!(args.delay, PRESS_DELAY_DEFAULT);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_state_file_flag() {
        let cli = Cli::parse_from(["mb", "--state-file", "custom.json", "state"]);
        assert_eq!(cli.state_file, Some(PathBuf::from("custom.json")));
    }
}
