use lotsize::NormalizeResultVerbose;

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

pub fn print_run(res: &NormalizeResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Normalizing: {:?}", res.raw), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Cleaning ━━━", ansi::GRAY));
    if details.cleaned == res.raw {
        println!("  {} {}", palette.paint("cleaned:", ansi::BLUE), palette.dim("(unchanged)"));
    } else {
        println!("  {} {}", palette.paint("cleaned:", ansi::BLUE), palette.paint(format!("{:?}", details.cleaned), ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    println!(
        "  {} {}  {} {}",
        palette.dim("evaluated:"),
        palette.paint(details.evaluated.to_string(), ansi::YELLOW),
        palette.dim("skipped by gating:"),
        palette.paint(details.skipped.to_string(), ansi::YELLOW),
    );

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match (&details.rule, details.rule_index) {
        (Some(rule), Some(index)) => {
            println!(
                "  {} {} {}",
                palette.bold(palette.paint(format!("{:?}", res.value), ansi::GREEN)),
                palette.dim("│ rule:"),
                palette.paint(format!("[{index}] {rule}"), ansi::CYAN),
            );
            if res.value.contains("NaN") {
                println!("  {}", palette.paint("• value contains NaN: a captured number did not parse", ansi::YELLOW));
            }
        }
        _ => {
            println!("{}", palette.dim("  No rule matched"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • Unrecognized unit or bucket label");
            println!("  • Dimensions with a separator other than 'x' or 'by'");
            println!("\n{}", palette.dim("  Tip: Set RUST_LOG=lotsize=trace to see every rule evaluated"));
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}
