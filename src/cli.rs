use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::{FormatConfig, load_format_config};
use crate::error::{Error, Result};
use crate::units::{ByteCount, FormatDirective};
use crate::wrap_err;

#[derive(Parser, Debug, Clone)]
#[command(name = "byteunits", version, about = "Round and format byte counts")]
pub struct Args {
    /// Size to operate on, e.g. 1536, 2MiB, 1.5kB
    pub size: String,

    /// Rounding operation applied before formatting
    #[arg(long, value_enum, default_value_t = Operation::None)]
    pub op: Operation,

    /// Magnitude for `truncate` and `round-by`, e.g. 1kiB or 500
    #[arg(long, value_name = "SIZE")]
    pub by: Option<String>,

    /// Format directive such as %s, %#.2f or %6k (defaults to $BYTEUNITS_FORMAT or %s)
    #[arg(short, long, value_name = "DIRECTIVE")]
    pub format: Option<String>,

    /// Use decimal (1000-based) magnitudes
    #[arg(long)]
    pub decimal: bool,

    /// Print a JSON object instead of the formatted value
    #[arg(long)]
    pub json: bool,
}

/// Rounding operation selectable from the command line.
#[derive(ValueEnum, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    None,
    Ceil,
    DecimalCeil,
    Floor,
    DecimalFloor,
    Truncate,
    RoundBy,
    Round,
    DecimalRound,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::None => "none",
            Operation::Ceil => "ceil",
            Operation::DecimalCeil => "decimal-ceil",
            Operation::Floor => "floor",
            Operation::DecimalFloor => "decimal-floor",
            Operation::Truncate => "truncate",
            Operation::RoundBy => "round-by",
            Operation::Round => "round",
            Operation::DecimalRound => "decimal-round",
        }
    }

    /// Apply the operation. Results that would wrap past `u64::MAX` are
    /// reported as errors rather than wrapped.
    pub fn apply(self, bytes: ByteCount, by: Option<ByteCount>) -> Result<ByteCount> {
        let overflow = || Error::ArithmeticOverflow {
            operation: self.name().to_string(),
            bytes: bytes.as_u64(),
        };
        let magnitude = || {
            by.ok_or_else(|| Error::MissingMagnitude {
                operation: self.name().to_string(),
            })
        };

        match self {
            Operation::None => Ok(bytes),
            Operation::Ceil => bytes.checked_ceil().ok_or_else(overflow),
            Operation::DecimalCeil => bytes.checked_decimal_ceil().ok_or_else(overflow),
            Operation::Floor => Ok(bytes.floor()),
            Operation::DecimalFloor => Ok(bytes.decimal_floor()),
            Operation::Truncate => Ok(bytes.truncate(magnitude()?)),
            Operation::RoundBy => bytes.checked_round_by(magnitude()?).ok_or_else(overflow),
            Operation::Round => bytes
                .checked_round_by(bytes.binary_magnitude())
                .ok_or_else(overflow),
            Operation::DecimalRound => bytes
                .checked_round_by(bytes.decimal_magnitude())
                .ok_or_else(overflow),
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    input: ByteCount,
    operation: Operation,
    result: ByteCount,
    formatted: String,
}

pub fn run(args: Args) -> Result<()> {
    // The environment only supplies the directive when --format is absent.
    let config = match args.format {
        Some(_) => FormatConfig::default(),
        None => load_format_config()?,
    };
    let output = render(&args, &config)?;
    println!("{output}");
    Ok(())
}

/// Produce the text `run` prints for `args`.
pub fn render(args: &Args, config: &FormatConfig) -> Result<String> {
    let input: ByteCount = args.size.parse()?;
    let by = args.by.as_deref().map(parse_magnitude).transpose()?;

    let mut directive = match &args.format {
        Some(text) => text.parse::<FormatDirective>()?,
        None => config.directive,
    };
    directive.decimal |= args.decimal;

    log::debug!(
        "render input={} op={} by={:?} directive={}",
        input.as_u64(),
        args.op.name(),
        by.map(ByteCount::as_u64),
        directive
    );

    let result = wrap_err!(
        args.op.apply(input, by),
        OperationFailed {
            operation: args.op.name().to_string(),
            input: args.size.clone()
        }
    )?;
    let formatted = result.format(&directive);

    if !args.json {
        return Ok(formatted);
    }
    let report = Report {
        input,
        operation: args.op,
        result,
        formatted,
    };
    Ok(serde_json::to_string(&report)?)
}

fn parse_magnitude(text: &str) -> Result<ByteCount> {
    let magnitude: ByteCount = text.parse()?;
    if magnitude.as_u64() == 0 {
        return Err(Error::ZeroMagnitude {
            input: text.to_string(),
        });
    }
    Ok(magnitude)
}
