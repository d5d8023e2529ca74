//! Command-line parsing. Arguments are read once, at process start.

use crate::config::Preset;
use crate::error::FlapperError;

pub const USAGE: &str = "\
Flapper - fly through the gaps

Usage: flapper [options]

Options:
  --preset <name>   Use a built-in preset (classic, relaxed)
  --write-config    Write the selected preset to ~/.flapper/config.json and exit
  --version         Show version information
  --help            Show this help message";

/// What the process should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play. `None` means: config file if present, else the classic preset.
    Play { preset: Option<Preset> },
    WriteConfig { preset: Preset },
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, FlapperError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut preset = None;
    let mut write_config = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--write-config" => write_config = true,
            "--preset" | "-p" => {
                let name = args.next().ok_or(FlapperError::MissingValue("--preset"))?;
                let name = name.as_ref();
                preset = Some(
                    Preset::from_name(name)
                        .ok_or_else(|| FlapperError::UnknownPreset(name.to_string()))?,
                );
            }
            other => return Err(FlapperError::UnknownArgument(other.to_string())),
        }
    }

    if write_config {
        Ok(Command::WriteConfig {
            preset: preset.unwrap_or(Preset::Classic),
        })
    } else {
        Ok(Command::Play { preset })
    }
}
