use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;
use rack_helper::{Analysis, Helper, SearchOptions, Suggestion, RACK_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "rack-helper",
    about = "Find the words you can make with your scrabble tiles, and the words worth going for",
    after_help = "Examples:\n    rack-helper \"ska \"\n    rack-helper \"ska \" -s\n    rack-helper \"ska \" -a bungee",
    version
)]
struct Cli {
    /// Your tiles, up to a max of 7 (' ' for blank)
    letters: String,

    /// Turn on target word suggestions
    #[arg(short, long)]
    suggest: bool,

    /// Maximum number of letters to acquire for a suggestion
    #[arg(short, long, default_value_t = 2)]
    budget: usize,

    /// Wordfile with one word per line
    #[arg(short, long, env = "RACK_HELPER_WORDFILE", default_value = "words.txt")]
    wordfile: String,

    /// Number of words shown per section
    #[arg(short = 'n', long, default_value_t = 5)]
    count: usize,

    /// Minimum word length
    #[arg(long, default_value_t = 2)]
    min_len: usize,

    /// Maximum number of tiles on the rack
    #[arg(long, default_value_t = RACK_SIZE)]
    max_rack: usize,

    /// Also list dictionary words close to WORD, e.g. to check its spelling
    #[arg(short, long, value_name = "WORD")]
    alternatives: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn suggestion_description(suggestion: &Suggestion, blanks: usize) -> String {
    let letters: Vec<String> = suggestion
        .missing_letters()
        .iter()
        .map(char::to_string)
        .collect();
    let mut description = format!("- {}. You need", suggestion.word);
    if blanks > 0 {
        description += &format!(" {} of", suggestion.required);
    }
    description += &format!(
        " these letter(s): [{}], for a total score of {}",
        letters.join(","),
        suggestion.range
    );
    description
}

fn print_analysis(letters: &str, analysis: &Analysis, blanks: usize, cli: &Cli) {
    println!("Letters: '{}'", letters);
    if analysis.plays.is_empty() {
        println!("\nNo words can be made with these letters.");
    } else {
        println!("\nWith these letters you can make:");
        for play in analysis.plays.iter().take(cli.count) {
            println!("- {} ({} points)", play.tiles, play.score);
        }
    }
    if !cli.suggest {
        return;
    }
    if analysis.suggestions.is_empty() {
        println!("\nNo idea what to go for.");
        return;
    }
    println!("\nPerhaps you should try going for:");
    let mut shown = 0;
    for (required, group) in analysis.suggestions.groups() {
        if shown >= cli.count {
            break;
        }
        println!("  (acquire {} letter(s))", required);
        for suggestion in group.iter().take(cli.count - shown) {
            println!("{}", suggestion_description(suggestion, blanks));
            shown += 1;
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = SearchOptions::default()
        .with_budget(cli.budget)
        .with_min_len(cli.min_len)
        .with_max_rack_len(cli.max_rack);
    let helper = Helper::new().with_options(options);
    // Check the rack before the wordfile is read
    let rack = helper
        .rack(&cli.letters)
        .with_context(|| format!("Invalid letters '{}'", cli.letters))?;
    let helper = helper
        .with_dictionary_from_file(&cli.wordfile)
        .with_context(|| format!("Could not load dictionary '{}'", cli.wordfile))?;
    debug!("{}", helper.dictionary());
    let analysis = helper.analyse_rack(&rack, cli.suggest)?;
    print_analysis(&cli.letters, &analysis, rack.blanks(), cli);
    if let Some(word) = &cli.alternatives {
        let alternatives = helper
            .alternatives(word, cli.count)
            .with_context(|| format!("Invalid word '{}'", word))?;
        if alternatives.is_empty() {
            println!("\nNo words close to '{}'.", word);
        } else {
            println!("\nWords close to '{}':", word);
            for alternative in alternatives {
                println!("- {}", alternative);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
    run(&cli)
}
