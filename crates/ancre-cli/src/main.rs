mod logging;

use ancre::Slugger;
use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The heading text to slugify, e.g. "# Hello World!"
    text: String,

    /// Suppress diagnostic output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.quiet);

    // Uniqueness state lives and dies with the process, every invocation
    // starts from a clean slate.
    let mut slugger = Slugger::new();
    let slug = slugger.slug(&cli.text);

    debug!("slugified {:?} into {:?}", cli.text, slug);

    println!("{}", slug);
}
