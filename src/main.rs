//! Dashboard entry point — CLI wiring and config-driven engine construction.

use std::path::Path;
use std::process;

use home_sim::config::HomeConfig;
use home_sim::home::clock::WallClock;
use home_sim::home::controller::HomeController;
use home_sim::home::types::Command;
use home_sim::io::export::{export_history_csv, export_log_csv};

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    log_out: Option<String>,
    history_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
    #[cfg(feature = "tui")]
    tui: bool,
}

fn print_help() {
    eprintln!("home-sim — Simulated smart-home dashboard");
    eprintln!();
    eprintln!("Usage: home-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load household config from TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (baseline, high_draw)");
    eprintln!("  --log-out <path>         Export the action log to CSV");
    eprintln!("  --history-out <path>     Export the hourly history to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after the demo run");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Launch the interactive dashboard");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        log_out: None,
        history_out: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
        #[cfg(feature = "tui")]
        tui: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--log-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --log-out requires a path argument");
                    process::exit(1);
                }
                cli.log_out = Some(args[i].clone());
            }
            "--history-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --history-out requires a path argument");
                    process::exit(1);
                }
                cli.history_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            #[cfg(feature = "tui")]
            "--tui" => {
                cli.tui = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Fixed command sequence exercising every device for the demo run.
fn demo_commands() -> Vec<Command> {
    vec![
        Command::ToggleLight,
        Command::ToggleLock,
        Command::ToggleThermostatPower,
        Command::SetThermostatSetpoint { setpoint_c: 24.5 },
        Command::SetFanSpeed { speed: 2.0 },
        Command::SetFanSpeed { speed: 0.0 },
        Command::ToggleLight,
        Command::ToggleLight,
    ]
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then baseline
    let config = if let Some(ref path) = cli.config_path {
        match HomeConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match HomeConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        HomeConfig::baseline()
    };

    // Validate
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Interactive dashboard takes over the terminal entirely
    #[cfg(feature = "tui")]
    if cli.tui {
        home_sim::tui::run(&config);
        return;
    }

    // Demo run: apply the fixed sequence, print each action as it lands
    let mut controller = HomeController::new(&config, WallClock);
    for command in demo_commands() {
        let snapshot = controller.apply(command);
        if let Some(entry) = snapshot.log_head.first() {
            println!("{entry}  │ {:6.1} W", snapshot.power_w);
        }
    }

    // Summary
    let snapshot = controller.snapshot();
    println!("\n--- Dashboard Summary ---");
    println!("Current power: {:.1} W", snapshot.power_w);
    println!("Hourly history (active slots):");
    for (hour, power_w) in snapshot
        .history_w
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > 0.0)
    {
        println!("  {hour:02}:00  {power_w:.1} W");
    }
    println!("Recent actions:");
    for entry in &snapshot.log_head {
        println!("  {entry}");
    }

    // Export CSVs if requested
    if let Some(ref path) = cli.log_out {
        let entries: Vec<_> = controller
            .log()
            .recent(controller.log().len())
            .cloned()
            .collect();
        if let Err(e) = export_log_csv(&entries, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Action log written to {path}");
    }
    if let Some(ref path) = cli.history_out {
        if let Err(e) = export_history_csv(&snapshot.history_w, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("History written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(home_sim::api::AppState::new(controller));
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(home_sim::api::serve(state, addr));
    }
}
