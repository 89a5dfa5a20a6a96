//! Command-line arguments.

use std::path::PathBuf;

use crate::CliError;

pub const USAGE: &str = "\
Usage: turntable <scene-file> [options]

Options:
  --settings <file>   apply a settings document before running
  --frames <n>        number of frames to simulate (default 180)
  --dt <seconds>      frame duration (default 1/60)
  --camera <n>        select camera n from the list (1-based)
  --export            print the final settings document
  -h, --help          show this message";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub scene: PathBuf,
    pub settings: Option<PathBuf>,
    pub frames: u32,
    pub dt: f64,
    /// 1-based camera number, as printed in the camera list.
    pub camera: Option<usize>,
    pub export: bool,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Args),
    Help,
}

pub fn parse<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut scene = None;
    let mut settings = None;
    let mut frames = 180;
    let mut dt: f64 = 1.0 / 60.0;
    let mut camera = None;
    let mut export = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--settings" => settings = Some(PathBuf::from(value(&mut args, "--settings")?)),
            "--frames" => frames = number(&mut args, "--frames")?,
            "--dt" => {
                dt = number(&mut args, "--dt")?;
                if !(dt.is_finite() && dt >= 0.0) {
                    return Err(CliError::Usage(format!(
                        "--dt must be a non-negative number, got {dt}"
                    )));
                }
            }
            "--camera" => {
                let n: usize = number(&mut args, "--camera")?;
                if n == 0 {
                    return Err(CliError::Usage("cameras are numbered from 1".into()));
                }
                camera = Some(n);
            }
            "--export" => export = true,
            flag if flag.starts_with("--") => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")))
            }
            path if scene.is_none() => scene = Some(PathBuf::from(path)),
            extra => return Err(CliError::Usage(format!("unexpected argument '{extra}'"))),
        }
    }

    let scene = scene.ok_or_else(|| CliError::Usage("missing <scene-file>".into()))?;
    Ok(Command::Run(Args {
        scene,
        settings,
        frames,
        dt,
        camera,
        export,
    }))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T, CliError> {
    let raw = value(args, flag)?;
    raw.parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a number, got '{raw}'")))
}
