use autoparse::{Culture, ResultStrategy, ShapeRequest, Value, ValueKind};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Everything `--verbose` shows about one request.
pub struct Run<'a> {
    pub kind: ValueKind,
    pub text: &'a str,
    pub request: &'a ShapeRequest<'a>,
    pub strategy: &'a ResultStrategy<Value>,
    /// The value before the strategy was applied; `None` when the text was malformed.
    pub parsed: Option<Value>,
    pub result: Option<Value>,
}

pub fn print_run(run: &Run<'_>, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\" as {}", run.text, run.kind), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Request ━━━", ansi::GRAY));
    print_request(run, &palette);

    eprintln!("\n{}", palette.paint("━━━ Outcome ━━━", ansi::GRAY));
    match &run.parsed {
        Some(value) => eprintln!("  {} {}", palette.paint("✓ parsed", ansi::GREEN), palette.bold(value.to_string())),
        None => eprintln!("  {}", palette.dim("✗ malformed input")),
    }

    let shaped = match (&run.result, run.parsed.is_some()) {
        (Some(value), true) => palette.bold(palette.paint(value.to_string(), ansi::GREEN)),
        (Some(value), false) => format!("{} {}", palette.paint(value.to_string(), ansi::YELLOW), palette.dim("(fallback)")),
        (None, _) => palette.dim("<absent>"),
    };
    eprintln!("  {} {}", palette.dim("result:"), shaped);
    eprintln!();
}

fn print_request(run: &Run<'_>, palette: &ansi::Palette) {
    eprintln!("  {} {}", palette.dim("shape:   "), palette.paint(run.request.shape().to_string(), ansi::BLUE));

    match run.request {
        ShapeRequest::Plain => {}
        ShapeRequest::Numeric { styles, culture } => {
            print_culture(culture, palette);
            let names: Vec<&str> = styles.iter_names().map(|(name, _)| name).collect();
            eprintln!("  {} {}", palette.dim("styles:  "), palette.paint(join_or_none(&names), ansi::YELLOW));
        }
        ShapeRequest::Date { culture, styles } => {
            print_culture(culture, palette);
            let names: Vec<&str> = styles.iter_names().map(|(name, _)| name).collect();
            eprintln!("  {} {}", palette.dim("styles:  "), palette.paint(join_or_none(&names), ansi::YELLOW));
        }
        ShapeRequest::Exact { formats, culture, styles } => {
            print_culture(culture, palette);
            let names: Vec<&str> = styles.iter_names().map(|(name, _)| name).collect();
            eprintln!("  {} {}", palette.dim("styles:  "), palette.paint(join_or_none(&names), ansi::YELLOW));
            for (idx, format) in formats.iter().enumerate() {
                eprintln!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), palette.paint(*format, ansi::CYAN));
            }
        }
    }

    let strategy = match run.strategy {
        ResultStrategy::ImplicitDefault => "implicit default".to_string(),
        ResultStrategy::Optional => "optional".to_string(),
        ResultStrategy::ExplicitDefault(value) => format!("explicit default ({})", value),
    };
    eprintln!("  {} {}", palette.dim("strategy:"), palette.paint(strategy, ansi::BLUE));
}

fn print_culture(culture: &Culture, palette: &ansi::Palette) {
    eprintln!(
        "  {} {}  {} {:?}  {} {:?}  {} {:?}",
        palette.dim("culture: "),
        palette.paint(culture.name, ansi::CYAN),
        palette.dim("decimal"),
        culture.decimal_separator,
        palette.dim("group"),
        culture.group_separator,
        palette.dim("date order"),
        culture.date_order,
    );
}

fn join_or_none(names: &[&str]) -> String {
    if names.is_empty() { "none".to_string() } else { names.join(" | ") }
}
