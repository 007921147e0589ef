//! micro:bit emulator CLI - drive emulated device state and display.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

use clap::{CommandFactory, Parser};
use console::style;
use serde::Serialize;
use serde_json::json;

use mb::cli::{self, Cli, Commands, PowerAction};
use mb::config;
use mb::device::Emulator;
use mb::error::{MbError, Result};
use mb::image::{icons, Image};
use mb::logging;
use mb::state::{DeviceState, StateKey, StateValue};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
    }

    // Run the command
    let result = run(&cli);

    // Handle errors
    if let Err(e) = result {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => print_quick_start(cli),
        Some(Commands::Get(args)) => cmd_get(cli, args),
        Some(Commands::Set(args)) => cmd_set(cli, args),
        Some(Commands::State) => cmd_state(cli),
        Some(Commands::Reset) => cmd_reset(cli),
        Some(Commands::Press(args)) => cmd_press(cli, args),
        Some(Commands::Release(args)) => cmd_release(cli, args),
        Some(Commands::Tap(args)) => cmd_tap(cli, args),
        Some(Commands::Power(args)) => cmd_power(cli, args),
        Some(Commands::Show(args)) => cmd_show(cli, args),
        Some(Commands::Scroll(args)) => cmd_scroll(cli, args),
        Some(Commands::Sleep(args)) => cmd_sleep(cli, args),
        Some(Commands::Uptime) => cmd_uptime(cli),
        Some(Commands::Version) => cmd_version(cli),
        Some(Commands::Completions(args)) => cmd_completions(args),
    }
}

/// Open the device-state store at the resolved backing-file path.
fn open_state(cli: &Cli) -> Result<DeviceState> {
    let path = config::resolve_state_file(cli.state_file.as_deref())?;
    Ok(DeviceState::new(path.to_string_lossy().into_owned()))
}

// === Quick Start (Robot Mode Optimized) ===

/// Prints quick-start help optimized for both humans and AI agents.
#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn print_quick_start(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        print_robot_quick_start();
    } else {
        print_human_quick_start();
    }
    Ok(())
}

fn print_robot_quick_start() {
    let help = RobotQuickStart {
        tool: "mb",
        version: VERSION,
        description: "Offline micro:bit emulator with robot mode for AI agents",
        state: RobotState {
            read_key: "mb get <KEY> --robot",
            write_key: "mb set <KEY> <VALUE>",
            full_table: "mb state --robot",
            reset: "mb reset",
        },
        inputs: RobotInputs {
            press: "mb press button_a",
            release: "mb release button_a",
            tap: "mb tap button_a --delay 50",
        },
        display: RobotDisplay {
            show_icon: "mb show HEART",
            show_pattern: "mb show 90009:09090:00900:",
            scroll_text: "mb scroll hello",
        },
        keys: RobotKeys {
            note: "Keys are case-insensitive; unknown keys read as 0 and ignore writes",
            examples: "accelerometer_x, button_a, button_a_presses, pin0-pin16, pin19, pin20, power, state_file",
        },
        output_modes: RobotOutputModes {
            human: "--format=text (default)",
            robot: "--robot or --format=json",
            compact: "--format=json-compact",
        },
        state_file: "Defaults to microbit_state.json; override with --state-file or MICROBIT_STATE_FILE",
    };

    match serde_json::to_string_pretty(&help) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{{}}"),
    }
}

fn print_human_quick_start() {
    println!(
        "{} {} - micro:bit emulator CLI\n",
        style("mb").bold().cyan(),
        VERSION
    );

    println!("{}", style("QUICK START").bold().underlined());
    println!();

    println!("  {}  Read a state key", style("mb get pin0").green());
    println!("  {}  Write a state key", style("mb set pin0 512").green());
    println!("  {}  Full state table", style("mb state").green());
    println!("  {}  Press a button", style("mb press button_a").green());
    println!("  {}  Render an icon", style("mb show HEART").green());
    println!("  {}  Scroll a message", style("mb scroll hello").green());
    println!("  {}  Back to defaults", style("mb reset").green());
    println!();

    println!("{}", style("ROBOT MODE (for AI agents)").bold().underlined());
    println!();
    println!("  {}  JSON output", style("mb --robot <command>").cyan());
    println!("  {}  Quick-start JSON", style("mb --robot").cyan());
    println!();

    println!(
        "Run {} for full help",
        style("mb --help").yellow()
    );
}

// === Robot Mode JSON Structures ===

#[derive(Serialize)]
struct RobotQuickStart {
    tool: &'static str,
    version: &'static str,
    description: &'static str,
    state: RobotState,
    inputs: RobotInputs,
    display: RobotDisplay,
    keys: RobotKeys,
    output_modes: RobotOutputModes,
    state_file: &'static str,
}

#[derive(Serialize)]
struct RobotState {
    read_key: &'static str,
    write_key: &'static str,
    full_table: &'static str,
    reset: &'static str,
}

#[derive(Serialize)]
struct RobotInputs {
    press: &'static str,
    release: &'static str,
    tap: &'static str,
}

#[derive(Serialize)]
struct RobotDisplay {
    show_icon: &'static str,
    show_pattern: &'static str,
    scroll_text: &'static str,
}

#[derive(Serialize)]
struct RobotKeys {
    note: &'static str,
    examples: &'static str,
}

#[derive(Serialize)]
struct RobotOutputModes {
    human: &'static str,
    robot: &'static str,
    compact: &'static str,
}

// === Command Implementations ===

fn cmd_get(cli: &Cli, args: &cli::GetArgs) -> Result<()> {
    let state = open_state(cli)?;
    let value = state.get(&args.key);

    if cli.use_json() {
        output_json(
            cli,
            &json!({
                "key": args.key.to_ascii_lowercase(),
                "value": value.to_json(),
            }),
        );
    } else {
        println!("{value}");
    }
    Ok(())
}

fn cmd_set(cli: &Cli, args: &cli::SetArgs) -> Result<()> {
    let mut state = open_state(cli)?;

    // Integers stay integers; anything else is a string (only valid for
    // state_file, the store's validation rejects it elsewhere)
    let value = args
        .value
        .parse::<i64>()
        .map_or_else(|_| StateValue::from(args.value.as_str()), StateValue::Int);

    state.set(&args.key, value)?;
    let stored = state.get(&args.key);

    if cli.use_json() {
        output_json(
            cli,
            &json!({
                "key": args.key.to_ascii_lowercase(),
                "value": stored.to_json(),
            }),
        );
    } else {
        println!("{} = {stored}", args.key.to_ascii_lowercase());
    }
    Ok(())
}

fn cmd_state(cli: &Cli) -> Result<()> {
    let state = open_state(cli)?;

    if cli.use_json() {
        let mut object = serde_json::Map::new();
        for key in StateKey::ALL {
            object.insert(key.as_str().to_string(), state.get(key.as_str()).to_json());
        }
        output_json(cli, &serde_json::Value::Object(object));
    } else {
        for line in state.to_string().lines() {
            match line.split_once(':') {
                Some((key, value)) => {
                    println!("{}: {value}", style(key).cyan());
                }
                None => println!("{line}"),
            }
        }
    }
    Ok(())
}

fn cmd_reset(cli: &Cli) -> Result<()> {
    let mut state = open_state(cli)?;
    state.reset();

    if cli.use_json() {
        output_json(cli, &json!({"reset": true}));
    } else {
        println!("State reset (power on, everything else 0)");
    }
    Ok(())
}

fn cmd_press(cli: &Cli, args: &cli::InputArgs) -> Result<()> {
    let mut state = open_state(cli)?;
    state.press(&args.name)?;
    report_input(cli, &state, &args.name, "pressed");
    Ok(())
}

fn cmd_release(cli: &Cli, args: &cli::InputArgs) -> Result<()> {
    let mut state = open_state(cli)?;
    state.release(&args.name)?;
    report_input(cli, &state, &args.name, "released");
    Ok(())
}

fn cmd_tap(cli: &Cli, args: &cli::TapArgs) -> Result<()> {
    let mut state = open_state(cli)?;
    state.press_and_release(&args.name, args.delay)?;
    report_input(cli, &state, &args.name, "tapped");
    Ok(())
}

fn report_input(cli: &Cli, state: &DeviceState, name: &str, action: &str) {
    let name = name.to_ascii_lowercase();
    let presses = state.get_int(&format!("{name}_presses"));

    if cli.use_json() {
        output_json(
            cli,
            &json!({
                "input": name,
                "action": action,
                "presses": presses,
            }),
        );
    } else {
        println!("{} {action} ({presses} presses)", style(&name).green());
    }
}

fn cmd_power(cli: &Cli, args: &cli::PowerArgs) -> Result<()> {
    let mut state = open_state(cli)?;

    match args.action {
        PowerAction::On => state.power_on()?,
        PowerAction::Off => state.power_off()?,
        PowerAction::Status => {}
    }

    if cli.use_json() {
        output_json(cli, &json!({"power": state.is_on()}));
    } else if state.is_on() {
        println!("{}", style("on").green());
    } else {
        println!("{}", style("off").red());
    }
    Ok(())
}

fn cmd_show(cli: &Cli, args: &cli::ShowArgs) -> Result<()> {
    let state = open_state(cli)?;

    let pattern = icons::by_name(&args.image).unwrap_or(args.image.as_str());
    let image = Image::parse(pattern)?;

    if cli.use_json() {
        let sink = BufferSink::default();
        let mut emulator = Emulator::with_sink(state, Box::new(sink.clone()));
        emulator
            .display
            .show_images(std::slice::from_ref(&image), args.delay, args.clear);
        output_json(
            cli,
            &json!({
                "image": image.to_pattern(),
                "rendered": !sink.contents().is_empty(),
                "frames": sink.contents(),
            }),
        );
    } else {
        let mut emulator = Emulator::new(state);
        emulator
            .display
            .show_images(std::slice::from_ref(&image), args.delay, args.clear);
    }
    Ok(())
}

fn cmd_scroll(cli: &Cli, args: &cli::ScrollArgs) -> Result<()> {
    let state = open_state(cli)?;

    if cli.use_json() {
        let sink = BufferSink::default();
        let mut emulator = Emulator::with_sink(state, Box::new(sink.clone()));
        emulator.display.scroll(&args.text, args.delay);
        output_json(
            cli,
            &json!({
                "text": args.text,
                "frames": sink.contents(),
            }),
        );
    } else {
        let mut emulator = Emulator::new(state);
        emulator.display.scroll(&args.text, args.delay);
    }
    Ok(())
}

fn cmd_sleep(cli: &Cli, args: &cli::SleepArgs) -> Result<()> {
    let mut state = open_state(cli)?;
    state.sleep(args.millis);

    if cli.use_json() {
        output_json(cli, &json!({"slept_ms": args.millis}));
    } else {
        println!("slept {} ms", args.millis);
    }
    Ok(())
}

fn cmd_uptime(cli: &Cli) -> Result<()> {
    let mut state = open_state(cli)?;
    let millis = state.running_time();

    if cli.use_json() {
        output_json(cli, &json!({"running_time_ms": millis}));
    } else {
        println!("{millis} ms");
    }
    Ok(())
}

fn cmd_version(cli: &Cli) -> Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &json!({
                "name": "mb",
                "version": VERSION,
            }),
        );
    } else {
        println!("mb {VERSION}");
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &cli::CompletionsArgs) -> Result<()> {
    clap_complete::generate(args.shell, &mut Cli::command(), "mb", &mut io::stdout());
    Ok(())
}

// === Output Helpers ===

fn output_json(cli: &Cli, value: &serde_json::Value) {
    let rendered = if cli.use_compact_json() {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{{}}"),
    }
}

fn output_error(cli: &Cli, error: &MbError) {
    if cli.use_json() {
        let payload = json!({
            "error": error.to_string(),
            "suggestion": error.suggestion(),
        });
        eprintln!(
            "{}",
            serde_json::to_string(&payload).unwrap_or_else(|_| error.to_string())
        );
    } else {
        eprintln!("{} {error}", style("error:").red().bold());
        if let Some(suggestion) = error.suggestion() {
            eprintln!("  {}", style(suggestion).dim());
        }
    }
}

/// Display sink that captures frames for robot-mode output.
#[derive(Clone, Default)]
struct BufferSink(Arc<Mutex<Vec<u8>>>);

impl BufferSink {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buffer| String::from_utf8_lossy(&buffer).into_owned())
            .unwrap_or_default()
    }
}

impl Write for BufferSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.0.lock() {
            Ok(mut buffer) => buffer.write(buf),
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
