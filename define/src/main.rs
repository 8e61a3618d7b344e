use clap::Parser;
use dictionary::Dictionary;

mod render;

/// Look a word up and print its definitions, synonyms and antonyms.
#[derive(Parser)]
#[command(name = "define", version)]
struct Args {
    /// The word to look up; multiple words are joined into a single term
    #[arg(required = true)]
    search: Vec<String>,

    /// Show every definition and the full synonym/antonym lists
    #[arg(short, long, visible_alias = "extended")]
    more: bool,

    /// Scrape google's define: results instead of the dictionary api
    #[arg(long)]
    google: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let word = args.search.join(" ");
    let dict = Dictionary::new();
    let words = if args.google {
        dict.lookup_google(&word).await?
    } else {
        dict.lookup(&word).await?
    };
    print!("{}", render::render(&word, &words, args.more));
    Ok(())
}
