//! Command-line front end
//!
//! `convert` and `units` are one-shot commands; `interactive` drives the
//! converter widget from stdin, one keystroke or command per line.

use crate::api::commands::{settings, units};
use crate::core::catalog::UnitCatalog;
use crate::core::widget::ConverterWidget;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::WidgetSettings;
use crate::shared::types::ConvertUnitsRequest;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "unit-widget")]
#[command(about = "Convert lengths, masses and temperatures", long_about = None)]
pub struct Cli {
    /// Settings file (default: platform config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single value
    Convert {
        /// Value to convert (e.g., "12.5")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit symbol (e.g., "m", "°C")
        from: String,

        /// Target unit symbol (e.g., "cm", "°F")
        to: String,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available units
    Units {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keypad session on stdin
    Interactive,

    /// Change the units the widget starts with
    SetDefaults {
        from: String,
        to: String,
    },
}

pub fn execute(cli: Cli) -> AppResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Convert { value, from, to, json } => {
            let response = units::convert_units_command(ConvertUnitsRequest {
                input: value,
                from_unit: from,
                to_unit: to,
            })?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            } else {
                writeln!(out, "{}", response.result)?;
            }
        }
        Commands::Units { json } => {
            let response = units::get_all_units_command()?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            } else {
                for unit in &response.units {
                    writeln!(out, "{:<4} {:<12} {}", unit.id, unit.label, unit.category)?;
                }
            }
        }
        Commands::Interactive => {
            let widget_settings = load_settings_or_default(cli.settings.as_deref());
            let widget = ConverterWidget::new(UnitCatalog::default(), &widget_settings)?;
            let stdin = std::io::stdin();
            run_session(widget, stdin.lock(), &mut out)?;
        }
        Commands::SetDefaults { from, to } => {
            let widget_settings = WidgetSettings {
                default_from_unit: from,
                default_to_unit: to,
            };
            settings::save_settings(&widget_settings, cli.settings.as_deref())?;
            info!(from = %widget_settings.default_from_unit, to = %widget_settings.default_to_unit, "Saved default units");
        }
    }

    Ok(())
}

// A broken settings file should not keep the widget from opening
fn load_settings_or_default(path: Option<&std::path::Path>) -> WidgetSettings {
    match settings::get_settings(path) {
        Ok(loaded) if loaded.validate(&UnitCatalog::default()).is_ok() => loaded,
        Ok(loaded) => {
            warn!(from = %loaded.default_from_unit, to = %loaded.default_to_unit, "Settings name unknown units, using defaults");
            WidgetSettings::default()
        }
        Err(e) => {
            warn!(error = %e, "Failed to load settings, using defaults");
            WidgetSettings::default()
        }
    }
}

/// One line of keypad input
#[derive(Debug, Clone, PartialEq)]
enum KeypadCommand {
    Digit(u8),
    DecimalPoint,
    Delete,
    Clear,
    From(String),
    To(String),
    Input(String),
    Convert,
    Quit,
}

fn parse_keypad_line(line: &str) -> AppResult<KeypadCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match (word, rest) {
        (".", "") => KeypadCommand::DecimalPoint,
        ("=", "") | ("convert", "") => KeypadCommand::Convert,
        ("del", "") | ("delete", "") => KeypadCommand::Delete,
        ("clear", "") => KeypadCommand::Clear,
        ("quit", "") | ("exit", "") => KeypadCommand::Quit,
        ("from", symbol) if !symbol.is_empty() => KeypadCommand::From(symbol.to_string()),
        ("to", symbol) if !symbol.is_empty() => KeypadCommand::To(symbol.to_string()),
        ("input", text) => KeypadCommand::Input(text.to_string()),
        (digit, "") if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
            KeypadCommand::Digit(digit.as_bytes()[0] - b'0')
        }
        _ => return Err(AppError::Validation(format!("Unrecognized key: {}", line))),
    };

    Ok(command)
}

/// Feed keypad lines into the widget until EOF or `quit`
///
/// Every line echoes the widget state; `=` also prints the result line.
/// Bad keys are reported and the session continues.
pub fn run_session<R: BufRead, W: Write>(mut widget: ConverterWidget, reader: R, out: &mut W) -> AppResult<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let applied = parse_keypad_line(&line).and_then(|command| {
            match command {
                KeypadCommand::Digit(d) => widget.press_digit(d)?,
                KeypadCommand::DecimalPoint => widget.press_decimal_point(),
                KeypadCommand::Delete => widget.delete(),
                KeypadCommand::Clear => widget.clear(),
                KeypadCommand::From(symbol) => widget.select_from_unit(&symbol)?,
                KeypadCommand::To(symbol) => widget.select_to_unit(&symbol)?,
                KeypadCommand::Input(text) => widget.set_input(text),
                KeypadCommand::Convert => {
                    widget.convert();
                }
                KeypadCommand::Quit => return Ok(false),
            }
            Ok(true)
        });

        match applied {
            Ok(false) => break,
            Ok(true) => {
                writeln!(out, "[{}] {} -> {}", widget.input(), widget.from_unit(), widget.to_unit())?;
                if let Some(result_line) = widget.result_line() {
                    writeln!(out, "{}", result_line)?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let widget = ConverterWidget::new(UnitCatalog::default(), &WidgetSettings::default()).unwrap();
        let mut out = Vec::new();
        run_session(widget, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_keypad_line() {
        assert_eq!(parse_keypad_line("7").unwrap(), KeypadCommand::Digit(7));
        assert_eq!(parse_keypad_line(" . ").unwrap(), KeypadCommand::DecimalPoint);
        assert_eq!(parse_keypad_line("from °C").unwrap(), KeypadCommand::From("°C".to_string()));
        assert_eq!(parse_keypad_line("input 1.5").unwrap(), KeypadCommand::Input("1.5".to_string()));
        assert_eq!(parse_keypad_line("input").unwrap(), KeypadCommand::Input(String::new()));
        assert!(parse_keypad_line("12").is_err());
        assert!(parse_keypad_line("from").is_err());
    }

    #[test]
    fn test_keypad_session_converts() {
        let output = session("1\n.\n5\n=\n");
        assert!(output.contains("[1.5] m -> cm"));
        assert!(output.ends_with("Result: 150 cm\n"), "{}", output);
    }

    #[test]
    fn test_session_stops_at_quit() {
        let output = session("4\nquit\n5\n");
        assert!(output.contains("[4] m -> cm"));
        assert!(!output.contains("[45]"));
    }

    #[test]
    fn test_bad_key_is_reported() {
        let output = session("to mi\n");
        assert!(output.contains("Unit not in catalog: mi"), "{}", output);
    }

    #[test]
    fn test_temperature_session() {
        let output = session("from K\nto °C\ninput 0\n=\ndel\n");
        assert!(output.contains("Result: -273.15 °C"), "{}", output);
        assert!(output.ends_with("[] K -> °C\nResult: -273.15 °C\n"), "{}", output);
    }
}
