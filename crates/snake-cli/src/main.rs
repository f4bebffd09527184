//! Command-line runner for the sample snake bot
//!
//! Connects to a Cygni snake server, registers the selected bot and
//! plays one game, printing the board as it evolves.

use anyhow::{Result, bail};
use clap::Parser;
use snake_client::SnakeClient;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod printer;
mod registry;
mod sample;

use printer::GamePrinter;
use registry::BotRegistry;

const TRAINING_MODE: &str = "training";
const TOURNAMENT_MODE: &str = "tournament";

#[derive(Parser)]
#[command(name = "snake-bot", about = "Plays snake on a Cygni snake server")]
struct Options {
    /// User and snake name
    #[arg(short, long, default_value = "RustSnake")]
    user: String,

    /// Game mode, 'training' or 'tournament'
    #[arg(short, long, default_value = TRAINING_MODE)]
    mode: String,

    /// Start the game automatically once registered. Only applicable
    /// in training mode
    #[arg(short, long)]
    auto: bool,

    /// Bot implementation, as registered in main.rs
    #[arg(short, long, default_value = "default")]
    snake: String,

    /// Server host:port
    #[arg(long, default_value = "snake.cygni.se:80")]
    server: String,
}

impl Options {
    fn validate(&self) -> Result<()> {
        if self.mode != TRAINING_MODE && self.mode != TOURNAMENT_MODE {
            bail!(
                "invalid mode '{}', valid values are '{TRAINING_MODE}' and '{TOURNAMENT_MODE}'",
                self.mode
            );
        }
        if self.user.trim().is_empty() {
            bail!("invalid name '{}'", self.user);
        }
        Ok(())
    }

    fn server_url(&self) -> String {
        format!("ws://{}/{}", self.server, self.mode)
    }

    fn auto_start(&self) -> bool {
        self.auto && self.mode == TRAINING_MODE
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut bots = BotRegistry::new();
    bots.register("default", |name, auto_start| {
        Box::new(sample::SafeBot::new(name, auto_start))
    });
    // register additional bot implementations here

    let options = Options::parse();
    options.validate()?;
    let mut bot = bots.create(&options.snake, &options.user, options.auto_start())?;

    let url = options.server_url();
    info!(%url, "connecting");
    let mut client = SnakeClient::connect(&url, Box::new(GamePrinter::new())).await?;
    client.start(bot.as_mut()).await?;
    Ok(())
}
