use clap::Parser;
use log::{error, info};
use tokio::time::Duration;

use room::{listener, logger, Config, RoomResult, WordPool};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Address to bind
    #[clap(short = 'H', long, default_value = "0.0.0.0")]
    host: String,
    #[clap(short, long, default_value = "54321")]
    port: u16,
    /// Rounds played before the final ranking
    #[clap(short, long, default_value = "5")]
    max_turns: u32,
    /// Countdown length of one round, in ticks
    #[clap(short, long, default_value = "30")]
    round_secs: u32,
    #[clap(long, default_value = "1000")]
    tick_ms: u64,
    #[clap(long, default_value = "10")]
    heartbeat_secs: u64,
    /// JSON lexicon with the word pool; the built-in pool is used otherwise
    #[clap(short, long)]
    lexicon: Option<String>,
    /// Seed for word selection
    #[clap(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> RoomResult<Config> {
        let words = match self.lexicon {
            Some(path) => WordPool::from_lexicon_file(path)?,
            None => WordPool::builtin(),
        };
        Ok(Config {
            host: self.host,
            port: self.port,
            max_turns: self.max_turns,
            round_secs: self.round_secs,
            tick: Duration::from_millis(self.tick_ms.max(1)),
            heartbeat: Duration::from_secs(self.heartbeat_secs.max(1)),
            words,
            seed: self.seed,
        })
    }
}

#[tokio::main]
async fn main() -> RoomResult<()> {
    logger::init();
    let launch_time = tokio::time::Instant::now();
    let config = Args::parse().into_config().map_err(|e| {
        error!("{}", e);
        e
    })?;
    info!(
        "{} words in pool, {} rounds of {} ticks",
        config.words.len(),
        config.max_turns,
        config.round_secs
    );

    tokio::select! {
        res = listener::run(config) => {
            if let Err(ref e) = res {
                error!("{}", e);
            }
            res
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutting down after {:?}", launch_time.elapsed());
            Ok(())
        }
    }
}
