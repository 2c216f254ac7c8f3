mod report;

use autoparse::{Culture, DateStyles, NumberStyles, ResultStrategy, ShapeRequest, Value, ValueKind, dispatch};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let mut config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Ok(Command::Version) => {
            println!("autoparse {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    if config.input.is_none() {
        match read_stdin_input() {
            Ok(input) => config.input = Some(input),
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(2);
            }
        }
    }

    match run(&config) {
        Ok(Some(value)) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

enum Command {
    Run(CliConfig),
    Help,
    Version,
}

struct CliConfig {
    kind: ValueKind,
    /// `None` until read from stdin.
    input: Option<String>,
    culture: Option<&'static Culture>,
    number_styles: Option<NumberStyles>,
    date_styles: Option<DateStyles>,
    formats: Vec<String>,
    default: Option<String>,
    optional: bool,
    verbose: bool,
    color: bool,
}

fn run(config: &CliConfig) -> Result<Option<Value>, String> {
    let formats: Vec<&str> = config.formats.iter().map(String::as_str).collect();
    let request = build_request(config, &formats);
    let input = config.input.as_deref().unwrap_or_default();

    let strategy = match &config.default {
        Some(text) => {
            // The fallback is read under the same culture and styles as the input.
            let fallback = dispatch(config.kind, text, &request, ResultStrategy::Optional)
                .map_err(|err| format!("error: {err}"))?
                .ok_or_else(|| format!("error: --default '{text}' is not a valid {}", config.kind))?;
            ResultStrategy::ExplicitDefault(fallback)
        }
        None if config.optional => ResultStrategy::Optional,
        None => ResultStrategy::ImplicitDefault,
    };

    let result = dispatch(config.kind, input, &request, strategy).map_err(|err| format!("error: {err}"))?;

    if config.verbose {
        let parsed =
            dispatch(config.kind, input, &request, ResultStrategy::Optional).map_err(|err| format!("error: {err}"))?;
        let run = report::Run {
            kind: config.kind,
            text: input,
            request: &request,
            strategy: &strategy,
            parsed,
            result,
        };
        report::print_run(&run, config.color);
    }

    Ok(result)
}

/// Pick the argument shape from the options given: formats select the exact
/// shape, explicit styles select their shape, and a bare culture selects the
/// styled shape that fits the kind.
fn build_request<'a>(config: &CliConfig, formats: &'a [&'a str]) -> ShapeRequest<'a> {
    let culture = config.culture.unwrap_or_else(Culture::invariant);

    if !formats.is_empty() {
        return ShapeRequest::Exact { formats, culture, styles: config.date_styles.unwrap_or_default() };
    }
    if let Some(styles) = config.date_styles {
        return ShapeRequest::Date { culture, styles };
    }
    if let Some(styles) = config.number_styles {
        return ShapeRequest::Numeric { styles, culture };
    }
    if config.culture.is_none() {
        return ShapeRequest::Plain;
    }

    if config.kind.is_calendar() {
        ShapeRequest::Date { culture, styles: DateStyles::default() }
    } else {
        ShapeRequest::Numeric { styles: default_number_styles(config.kind), culture }
    }
}

fn default_number_styles(kind: ValueKind) -> NumberStyles {
    match kind {
        ValueKind::F32 | ValueKind::F64 => NumberStyles::FLOAT | NumberStyles::ALLOW_THOUSANDS,
        _ => NumberStyles::default(),
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut kind: Option<ValueKind> = None;
    let mut input: Option<String> = None;
    let mut culture = None;
    let mut number_styles = None;
    let mut date_styles = None;
    let mut formats = Vec::new();
    let mut default = None;
    let mut optional = false;
    let mut verbose = false;
    let mut color = io::stderr().is_terminal();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        let (flag, mut inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--color" => color = true,
            "--no-color" => color = false,
            "--optional" => optional = true,
            "-v" | "--verbose" => verbose = true,
            "--culture" => {
                let value = take_value("--culture", inline.take(), &mut args)?;
                culture = Some(Culture::lookup(&value).map_err(|err| format!("error: {err}"))?);
            }
            "--number-style" => {
                let value = take_value("--number-style", inline.take(), &mut args)?;
                number_styles = Some(NumberStyles::from_names(&value).map_err(|err| format!("error: {err}"))?);
            }
            "--date-style" => {
                let value = take_value("--date-style", inline.take(), &mut args)?;
                date_styles = Some(DateStyles::from_names(&value).map_err(|err| format!("error: {err}"))?);
            }
            "--format" => formats.push(take_value("--format", inline.take(), &mut args)?),
            "--default" => {
                if default.is_some() {
                    return Err("error: --default provided multiple times".to_string());
                }
                default = Some(take_value("--default", inline.take(), &mut args)?);
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>();
                if kind.is_none() {
                    return Err(format!("error: missing value type\n\n{}", help_text()));
                }
                if !rest.is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest.join(" "));
                }
                break;
            }
            _ if arg.starts_with("--") || (kind.is_none() && arg.starts_with('-') && arg.len() > 1) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ if kind.is_none() => {
                kind = Some(arg.parse::<ValueKind>().map_err(|err| format!("error: {err}"))?);
            }
            _ => {
                // Everything after the type is text up to the next option.
                let mut words = vec![arg];
                while let Some(next) = args.peek() {
                    if is_option(next) {
                        break;
                    }
                    words.extend(args.next());
                }
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(words.join(" "));
            }
        }
    }

    let kind = kind.ok_or_else(|| format!("error: missing value type\n\n{}", help_text()))?;
    if optional && default.is_some() {
        return Err("error: --optional and --default cannot be combined".to_string());
    }

    Ok(Command::Run(CliConfig {
        kind,
        input,
        culture,
        number_styles,
        date_styles,
        formats,
        default,
        optional,
        verbose,
        color,
    }))
}

/// Whether `arg` is one of the options above. Anything else after the type,
/// `-5` included, is text.
fn is_option(arg: &str) -> bool {
    if arg.starts_with("--") {
        return true;
    }
    matches!(arg, "-h" | "-V" | "-v")
}

fn take_value(name: &str, inline: Option<String>, args: &mut impl Iterator<Item = String>) -> Result<String, String> {
    inline.or_else(|| args.next()).ok_or_else(|| format!("error: {name} expects a value"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    let trimmed = buffer.strip_suffix('\n').map(|s| s.strip_suffix('\r').unwrap_or(s)).unwrap_or(&buffer);
    Ok(trimmed.to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    let types = ValueKind::ALL.iter().map(|kind| kind.name()).collect::<Vec<_>>().join(", ");
    let cultures = Culture::names().collect::<Vec<_>>().join(", ");
    format!(
        "autoparse {version}

Parse text as a typed value, falling back to a default on malformed input.

Usage:
  autoparse [OPTIONS] <type> [--] <text...>
  echo <text> | autoparse [OPTIONS] <type>

Options:
  --culture <name>           Culture for numeric or date conventions.
                             Known: {cultures}
  --number-style <flags>     Number styles, e.g. 'float,allow-thousands'.
  --date-style <flags>       Date styles, e.g. 'allow-whitespaces'.
  --format <fmt>             strftime format for exact date parsing. Repeatable.
  --default <value>          Print this value when the text is malformed. Read
                             with the same culture and styles as the text.
  --optional                 Print nothing and exit 1 when the text is malformed.
  -v, --verbose              Print a report of the request to stderr.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Types:
  {types}

Exit codes:
  0  A value was printed.
  1  The text was malformed and --optional was given.
  2  Invalid arguments, or options that do not apply to the type.

Set RUST_LOG=trace to log fallbacks.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
