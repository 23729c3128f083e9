//! Binary entry point and high-level flow coordination.
//!
//! The main flow consists of:
//! 1. Argument parsing and early exit for help/version
//! 2. Signal handler setup
//! 3. Solar boundary time resolution (always succeeds, possibly with the
//!    fallback constants)
//! 4. Handing off to the monitor loop until shutdown
//!
//! Boundary resolution failures are never fatal: every path through startup
//! ends with the monitor running.

use anyhow::Result;

use greetr::args::{self, CliAction, ParsedArgs};
use greetr::monitor::Monitor;
use greetr::signals::setup_signal_handler;
use greetr::solar::{
    IpLocationProvider, LocationProvider, SunriseSunsetApi, resolve_boundary_times,
};
use greetr::surface::TerminalSurface;
use greetr::{log_block_start, log_debug, log_end, log_indented, log_pipe, log_version};

fn main() -> Result<()> {
    let parsed = ParsedArgs::parse(std::env::args());

    match parsed.action {
        CliAction::Run { debug_enabled } => run(debug_enabled),
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowVersion => {
            args::display_version();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(1);
        }
    }
}

fn run(debug_enabled: bool) -> Result<()> {
    log_version!();
    if debug_enabled {
        log_pipe!();
        log_debug!("Debug mode enabled - showing detailed startup operations");
    }

    let signal_state = setup_signal_handler(debug_enabled)?;

    // A provider that cannot be built means the location capability is
    // unavailable, not a startup error.
    let provider = match IpLocationProvider::new() {
        Ok(provider) => Some(provider),
        Err(e) => {
            if debug_enabled {
                log_pipe!();
                log_debug!("Could not build location provider: {e}");
            }
            None
        }
    };

    let times = resolve_boundary_times(
        provider.as_ref().map(|p| p as &dyn LocationProvider),
        &SunriseSunsetApi,
    );

    if debug_enabled {
        log_pipe!();
        log_debug!("Monitoring with boundary times:");
        log_indented!("sunrise {}", times.sunrise.format("%H:%M"));
        log_indented!("noon    {}", times.noon.format("%H:%M"));
        log_indented!("sunset  {}", times.sunset.format("%H:%M"));
    }

    let monitor = Monitor::new(times, TerminalSurface::new());
    monitor.run(&signal_state)?;

    log_block_start!("Shutting down greetr...");
    log_end!();
    Ok(())
}
