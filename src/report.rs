use wordcycle::{MatchQuery, SearchDetails, SearchOutcome, Solution, WordMatch};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
        if self.enabled { format!("{}{}{}", color, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    fn bold(&self, s: impl AsRef<str>) -> String {
        self.paint(s, ansi::BOLD)
    }

    fn dim(&self, s: impl AsRef<str>) -> String {
        self.paint(s, ansi::DIM)
    }

    fn section(&self, title: &str) {
        println!("\n{}", self.paint(format!("━━━ {title} ━━━"), ansi::GRAY));
    }
}

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

pub fn print_header(outcome: &SearchOutcome, palette: &Palette) {
    let [r1, r2, r3] = &outcome.rules;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Cycles from \"{}\"", outcome.start), ansi::CYAN)));
    println!("  {} {}, {}, {}", palette.dim("rules:"), r1, r2, r3);
}

/// `shown` is the ranked, possibly truncated list; `count` the full total.
pub fn print_solutions(shown: &[Solution], count: usize, palette: &Palette) {
    palette.section("Solutions");
    if shown.is_empty() {
        println!("{}", palette.dim("  No solutions found"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • No word ends with a prefix of the starting word");
        println!("  • A rule filtered out every candidate at some stage");
        return;
    }

    for (idx, solution) in shown.iter().enumerate() {
        let rank = MEDALS.get(idx).map(|m| m.to_string()).unwrap_or_else(|| format!("{:>2}.", idx + 1));
        println!("  {} {}", rank, fmt_solution(solution, palette));
    }
    if count > shown.len() {
        println!("  {}", palette.dim(format!("... and {} more", count - shown.len())));
    }
    println!("\n  {} {}", palette.dim("found:"), palette.bold(count.to_string()));
}

fn fmt_solution(solution: &Solution, palette: &Palette) -> String {
    let arrow = palette.dim(" → ");
    let chain: Vec<String> = solution.words.iter().map(|w| palette.paint(w, ansi::GREEN)).collect();
    let [o1, o2, o3, o4] = solution.overlaps;
    format!(
        "{}  {} {}",
        chain.join(&arrow),
        palette.paint(format!("(overlap: {})", solution.score), ansi::YELLOW),
        palette.dim(format!("[{o1}+{o2}+{o3}+{o4}]"))
    )
}

pub fn print_details(details: &SearchDetails, palette: &Palette) {
    palette.section("Search");
    let [p1, p2, p3] = details.pool_sizes;
    println!(
        "  {} {}  │  {} {} / {} / {}",
        palette.dim("lexicon:"),
        palette.paint(details.lexicon_size.to_string(), ansi::BLUE),
        palette.dim("pools:"),
        p1,
        p2,
        p3
    );
    println!(
        "  {} {}  │  {} {}  │  {} {}",
        palette.dim("stage 1:"),
        palette.paint(details.stage1_candidates.to_string(), ansi::BLUE),
        palette.dim("stage 2 expansions:"),
        palette.paint(details.stage2_expansions.to_string(), ansi::BLUE),
        palette.dim("stage 3 evaluations:"),
        palette.paint(details.stage3_evaluations.to_string(), ansi::BLUE)
    );
    if details.cap_reached {
        println!("  {}", palette.paint("stopped at the solution limit", ansi::YELLOW));
    }

    palette.section("Timing");
    println!(
        "  Total: {}  │  Prefilter: {}  │  Search: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.prefilter), ansi::CYAN),
        palette.dim(format!("{:?}", details.search)),
    );
    println!();
}

pub fn print_matches(query: &MatchQuery, found: &[WordMatch], limit: Option<usize>, palette: &Palette) {
    let target = match &query.suffix {
        Some(suffix) => format!("\"{}\" … \"{}\"", query.prefix, suffix),
        None => format!("\"{}\" …", query.prefix),
    };
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Matches for {target}"), ansi::CYAN)));
    if !query.filter.is_empty() {
        let specs: Vec<String> = query.filter.specs().iter().map(ToString::to_string).collect();
        println!("  {} {}", palette.dim("filter:"), specs.join(", "));
    }

    palette.section("Words");
    if found.is_empty() {
        println!("{}", palette.dim("  No matches"));
        return;
    }
    let shown = &found[..limit.unwrap_or(found.len()).min(found.len())];
    for (idx, m) in shown.iter().enumerate() {
        println!(
            "  {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&m.word, ansi::GREEN)),
            palette.dim(format!("(overlap: {})", m.score))
        );
    }
    if found.len() > shown.len() {
        println!("  {}", palette.dim(format!("... and {} more", found.len() - shown.len())));
    }
    println!();
}
