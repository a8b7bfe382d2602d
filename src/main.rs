use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use wordcloud::config::Config;

#[derive(Parser)]
#[command(name = "wordcloud", about = "Word cloud generator — count words in text and render them as a PNG")]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the image is written to (default: from config or "output")
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TrueType font used for drawing
    #[arg(long)]
    font: Option<PathBuf>,

    /// Maximum number of words drawn
    #[arg(long)]
    max_words: Option<usize>,

    /// Do not draw the title above the cloud
    #[arg(long)]
    no_title: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text = fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config
    let mut config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["wordcloud.config.json", "config/wordcloud.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    // CLI overrides
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(font) = cli.font {
        config.font_path = Some(font);
    }
    if let Some(n) = cli.max_words {
        config.max_words = n;
    }
    if cli.no_title {
        config.title = None;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = wordcloud::shell::run(stdin.lock(), stdout.lock(), &config) {
        println!("Error: {}", e);
    }
}
