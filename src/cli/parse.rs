use thiserror::Error;

use super::CliFlags;
use crate::theme::Theme;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid theme: {0} (expected 'dark' or 'light')")]
    InvalidTheme(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-p" | "--print" => flags.print = true,
            "-b" | "--board" => flags.clipboard = true,
            "--save" => flags.save = true,
            "--quick" => flags.quick = true,
            "-d" | "--digits" => flags.digits = Some(true),
            "--no-digits" => flags.digits = Some(false),
            "-s" | "--symbols" => flags.symbols = Some(true),
            "--no-symbols" => flags.symbols = Some(false),
            "-l" | "--length" => {
                flags.length = Some(number(args, &mut i)?);
            }
            "--delay" => {
                flags.delay_ms = Some(number(args, &mut i)?);
            }
            "--seed" => {
                flags.seed = Some(number(args, &mut i)?);
            }
            "--theme" => {
                let name = value(args, &mut i)?;
                flags.theme =
                    Some(Theme::from_name(name).ok_or_else(|| ParseError::InvalidTheme(name.to_string()))?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Advance to the value following the flag at `args[*i]`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let raw = value(args, i)?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}
