use clap::Parser;
use log::{debug, error};
use recipe_browser::command::HELP;
use recipe_browser::config::load_config;
use recipe_browser::{BrowserConfig, Command, RecipeBrowser, Region, Screen};
use std::io::Write;
use std::ops::ControlFlow;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search recipes, scale servings, keep a shopping list")]
struct Args {
    /// Config file to read (TOML, extension optional)
    #[arg(long, default_value = "recipe-browser")]
    config: String,

    /// Recipe API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// JSON file holding the shopping list and likes
    #[arg(long)]
    storage: Option<String>,

    /// Seconds to wait for each API request
    #[arg(long)]
    timeout: Option<u64>,

    /// Run these commands instead of reading from stdin, e.g. "search pizza"
    #[arg(short = 'e', long = "exec")]
    exec: Vec<String>,
}

/// Screen that prints every region update to the terminal
struct TerminalScreen;

impl Screen for TerminalScreen {
    fn render(&mut self, region: Region, content: String) {
        match region {
            Region::Help | Region::Servings | Region::LikeButton => print!("{}", content),
            _ => print!("\n== {:?} ==\n{}", region, content),
        }
        if !content.ends_with('\n') {
            println!();
        }
    }

    fn clear(&mut self, region: Region) {
        debug!("clear {:?}", region);
    }

    fn show_loader(&mut self, region: Region) {
        println!("[{:?}] Loading...", region);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("!! {}", message);
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config: BrowserConfig = load_config(&args.config)?;
    if let Some(secs) = args.timeout {
        config.timeout = Some(secs);
    }
    let mut builder = RecipeBrowser::builder().config(config);
    if let Some(url) = args.api_url {
        builder = builder.api_base_url(url);
    }
    if let Some(path) = args.storage {
        builder = builder.storage_path(path);
    }
    let mut controller = builder.build()?;

    let mut screen = TerminalScreen;
    controller.restore(&mut screen);

    if !args.exec.is_empty() {
        for line in &args.exec {
            match line.parse::<Command>() {
                Ok(command) => {
                    if controller.dispatch(command, &mut screen).await.is_break() {
                        break;
                    }
                }
                Err(e) => error!("{}", e),
            }
        }
        return Ok(());
    }

    print!("{}", HELP);
    prompt();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt();
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if let ControlFlow::Break(()) = controller.dispatch(command, &mut screen).await {
                    break;
                }
            }
            Err(e) => screen.alert(&e.to_string()),
        }
        prompt();
    }

    Ok(())
}
