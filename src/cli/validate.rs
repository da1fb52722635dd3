//! Config validation command implementation.

use super::CliError;
use deuce::MatchConfig;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or is invalid.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    println!("Validating: {}", path.display());
    println!();

    let config = match MatchConfig::load(path) {
        Ok(config) => {
            print_check("Config parses", true);
            config
        }
        Err(e) => {
            print_check("Config parses", false);
            return Err(CliError::new(format!("Config load failed: {e}")));
        }
    };

    let names_ok = config
        .team_names
        .as_ref()
        .is_none_or(|names| !names.a.trim().is_empty() && !names.b.trim().is_empty());
    print_check("Team names non-empty", names_ok);
    if !names_ok {
        return Err(CliError::new("Team names must not be blank"));
    }

    println!();
    println!("Summary:");
    println!("  Sets:            best of {}", u8::from(config.sets));
    println!("  Scoring mode:    {:?}", config.scoring_mode);
    println!("  Super tie-break: {}", config.super_tie_break);
    println!("  First server:    {}", config.first_server());
    if let Some(names) = &config.team_names {
        println!("  Teams:           {} vs {}", names.a, names.b);
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
