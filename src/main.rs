use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, error};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use messier::{Catalogue, Survey};

/// Answer the standard questions about a Messier catalogue file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Catalogue file, one object per line
    #[arg(default_value = "messier.txt")]
    catalogue: PathBuf,

    /// Category to average apparent magnitudes over
    #[arg(long, default_value = "Globular Cluster")]
    average_category: String,

    /// Category to find the least distant member of
    #[arg(long, default_value = "Open cluster")]
    nearest_category: String,

    /// Constellation to find the highest declination object in
    #[arg(long, default_value = "Sagittarius")]
    constellation: String,

    /// Reference object for the angular distance search
    #[arg(long, default_value = "M45")]
    reference: String,

    /// Print the sorted catalogue without asking
    #[arg(short, long)]
    yes: bool,

    /// Log loading and query details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }
}

/// Ask a yes/no question on stdin. Anything but `y` is a no.
fn confirm(question: &str) -> bool {
    println!("\n{question} (Y/N)");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => answer.trim().eq_ignore_ascii_case("y"),
        Err(err) => {
            error!("Error reading answer: {err}");
            false
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(err) = TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not initialize logging: {err}");
    }
    debug!("{args:?}");

    let mut catalogue = Catalogue::new();
    if let Err(err) = catalogue.load_file(&args.catalogue) {
        println!("{err}");
    }

    let survey = Survey::new()
        .with_average_category(&args.average_category)
        .with_nearest_category(&args.nearest_category)
        .with_declination_constellation(&args.constellation)
        .with_reference(&args.reference);
    println!();
    print!("{}", survey.run(&catalogue));

    if args.yes || confirm("Do you want to print the entire catalogue sorted by constellation?") {
        catalogue.sort_by_constellation();
        print!("{catalogue}");
    } else {
        println!("Catalogue not printed.");
    }
}
