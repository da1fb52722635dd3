//! Play command implementation.

use super::output::{JsonMatchResult, format_scoreboard, format_step};
use super::{CliError, ModeArg, OutputFormat, TeamArg};
use deuce::replay::{parse_commands, replay_with};
use deuce::{AnnounceOptions, BestOf, MatchConfig};
use std::fs;
use std::path::PathBuf;

/// Arguments for the `play` command.
#[derive(clap::Args, Debug)]
pub(crate) struct PlayArgs {
    /// Match config file (JSON); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Best of 3 or 5 sets
    #[arg(long)]
    sets: Option<u8>,

    /// Deuce rule
    #[arg(short, long)]
    mode: Option<ModeArg>,

    /// Decide a deciding set at 6-6 with a tie-break to 10
    #[arg(long)]
    super_tie_break: bool,

    /// Display name for side A
    #[arg(long)]
    team_a: Option<String>,

    /// Display name for side B
    #[arg(long)]
    team_b: Option<String>,

    /// Side serving the first game
    #[arg(long)]
    first_server: Option<TeamArg>,

    /// Point stream, e.g. "AABB U A" (A/B = point won, U = undo)
    #[arg(short, long, conflicts_with = "points_file", required_unless_present = "points_file")]
    points: Option<String>,

    /// File containing the point stream
    #[arg(long)]
    points_file: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Append the serving side to each announcement
    #[arg(long)]
    serving: bool,

    /// Only print the final score
    #[arg(short, long)]
    quiet: bool,
}

impl PlayArgs {
    /// Resolve the match config from the file and flag overrides.
    fn match_config(&self) -> Result<MatchConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)?,
            None => MatchConfig::default(),
        };

        if let Some(sets) = self.sets {
            config.sets = BestOf::try_from(sets)?;
        }
        if let Some(mode) = self.mode {
            config.scoring_mode = mode.into();
        }
        if self.super_tie_break {
            config.super_tie_break = true;
        }
        if self.team_a.is_some() || self.team_b.is_some() {
            let existing = config.team_names.take();
            let a = self
                .team_a
                .clone()
                .or_else(|| existing.as_ref().map(|n| n.a.clone()))
                .unwrap_or_else(|| "Team A".to_owned());
            let b = self
                .team_b
                .clone()
                .or_else(|| existing.map(|n| n.b))
                .unwrap_or_else(|| "Team B".to_owned());
            config = config.with_team_names(a, b);
        }
        if let Some(team) = self.first_server {
            config = config.with_first_server(team.into());
        }
        Ok(config)
    }

    /// Read the point stream from the flag or file.
    fn stream(&self) -> Result<String, CliError> {
        match (&self.points, &self.points_file) {
            (Some(points), _) => Ok(points.clone()),
            (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
                CliError::new(format!("Failed to read {}: {e}", path.display()))
            }),
            (None, None) => Err(CliError::new("No point stream given")),
        }
    }
}

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the config or stream is invalid or the engine rejects a command.
pub(crate) fn execute(args: &PlayArgs) -> Result<(), CliError> {
    let config = args.match_config()?;
    let commands = parse_commands(&args.stream()?)?;
    let options = AnnounceOptions {
        include_serving: args.serving,
    };
    let print_steps = args.format == OutputFormat::Text && !args.quiet;

    let state = replay_with(config, &commands, |step, command, state| {
        if print_steps {
            println!("{}", format_step(step, command, state, options));
        }
    })?;

    match args.format {
        OutputFormat::Text => {
            if print_steps {
                println!();
            }
            print!("{}", format_scoreboard(&state));
        }
        OutputFormat::Json => {
            let result = JsonMatchResult::new(&state, commands.len(), options);
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
