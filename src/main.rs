mod report;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use wordcycle::{
    Category, Error, Filter, Lexicon, MatchQuery, PredicateSpec, SearchOptions, find_matches, parse_rule_list,
    parse_rules, search_specs_with,
};

const DEFAULT_WORDS: &str = "popular.txt";
const DEFAULT_SOLUTIONS: usize = 5;

/// Find cyclic word chains with overlapping boundaries.
#[derive(Parser, Debug)]
#[command(name = "wordcycle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Word list, one word per line
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_WORDS, global = true)]
    words: PathBuf,

    /// Directory holding nouns.txt, verbs.txt, adjectives.txt, adverbs.txt
    /// (default: the word list's directory)
    #[arg(long, value_name = "DIR", global = true)]
    pos_dir: Option<PathBuf>,

    /// Force ANSI color output
    #[arg(long, conflicts_with = "no_color", global = true)]
    color: bool,

    /// Disable ANSI color output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            io::stdout().is_terminal()
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for cycles start → w1 → w2 → w3 → start
    Solve(SolveArgs),

    /// List words continuing a prefix (and optionally leading into a suffix)
    Match(MatchArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Starting word
    #[arg(value_name = "START")]
    start: String,

    /// Three comma-separated rules, one per stage (e.g. "noun,6-letters,any")
    #[arg(short, long, value_name = "RULES")]
    rules: String,

    /// Stop after this many solutions
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_SOLUTIONS)]
    solutions: usize,

    /// Search exhaustively (ignores --solutions)
    #[arg(long, conflicts_with = "solutions")]
    all: bool,

    /// Print only the best N solutions
    #[arg(short, long, value_name = "N")]
    print: Option<usize>,

    /// Keep only the top K candidates at each stage
    #[arg(long, value_name = "K")]
    candidate_limit: Option<usize>,

    /// Reject unknown rule tokens instead of treating them as "any"
    #[arg(long)]
    strict_rules: bool,

    /// Print search counters and timings
    #[arg(long)]
    stats: bool,
}

impl SolveArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            max_solutions: (!self.all).then_some(self.solutions),
            candidate_limit: self.candidate_limit,
            strict_rules: self.strict_rules,
        }
    }
}

#[derive(Args, Debug)]
struct MatchArgs {
    #[arg(value_name = "PREFIX")]
    prefix: String,

    #[arg(value_name = "SUFFIX")]
    suffix: Option<String>,

    /// Exact word length
    #[arg(long, value_name = "N")]
    length: Option<usize>,

    /// Exact number of vowels
    #[arg(long, value_name = "N")]
    vowels: Option<usize>,

    /// Exact number of consonants
    #[arg(long, value_name = "N")]
    consonants: Option<usize>,

    /// Part of speech (noun, verb, adjective, adverb)
    #[arg(long, value_name = "CATEGORY")]
    pos: Option<String>,

    /// Require a doubled letter
    #[arg(long)]
    double_letters: bool,

    /// Print at most N matches
    #[arg(short, long, value_name = "N")]
    limit: Option<usize>,
}

impl MatchArgs {
    fn query(&self) -> Result<MatchQuery, Error> {
        let mut filter = Filter::new();
        if let Some(n) = self.length {
            filter = filter.with(PredicateSpec::Length(n));
        }
        if let Some(n) = self.vowels {
            filter = filter.with(PredicateSpec::Vowels(n));
        }
        if let Some(n) = self.consonants {
            filter = filter.with(PredicateSpec::Consonants(n));
        }
        if let Some(pos) = &self.pos {
            filter = filter.with(PredicateSpec::PartOfSpeech(pos.parse::<Category>()?));
        }
        if self.double_letters {
            filter = filter.with(PredicateSpec::DoubleLetters);
        }

        let mut query = MatchQuery::new(self.prefix.as_str()).with_filter(filter);
        if let Some(suffix) = &self.suffix {
            query = query.with_suffix(suffix.as_str());
        }
        Ok(query)
    }
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            if err.is_input_error() { 2 } else { 1 }
        }
    };
    process::exit(code);
}

/// Runs the selected command and returns the process exit code.
fn run(cli: &Cli) -> Result<i32, Error> {
    let palette = report::Palette::new(cli.color());

    match &cli.command {
        Command::Solve(args) => {
            // Parse before paying for the lexicon load.
            let specs = parse_rules(&parse_rule_list(&args.rules), args.strict_rules)?;

            let lexicon = Lexicon::load(&cli.words, cli.pos_dir.as_deref())?;
            let mut verbose = search_specs_with(&lexicon, &args.start, specs, &args.options())?;
            let count = verbose.outcome.count;

            report::print_header(&verbose.outcome, &palette);
            let shown = verbose.outcome.ranked(args.print).to_vec();
            report::print_solutions(&shown, count, &palette);
            if args.stats {
                report::print_details(&verbose.details, &palette);
            }
            Ok(if count == 0 { 1 } else { 0 })
        }
        Command::Match(args) => {
            let query = args.query()?;
            let lexicon = Lexicon::load(&cli.words, cli.pos_dir.as_deref())?;
            let found = find_matches(&lexicon, &query)?;
            report::print_matches(&query, &found, args.limit, &palette);
            Ok(if found.is_empty() { 1 } else { 0 })
        }
    }
}
