use anyhow::Result;
use clap::Parser;
use cosmoforge_lib::app::App;
use cosmoforge_lib::model::world::World;
use cosmoforge_lib::ui::tui::Tui;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the sandbox in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Scenario override (name or slug, e.g. "binary-black-holes")
    #[arg(short, long)]
    scenario: Option<String>,

    /// Tick count for headless runs
    #[arg(long, default_value_t = 1000)]
    ticks: u64,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Stdout belongs to the TUI, so logs go to a file.
    let log_file = Arc::new(std::fs::File::create("cosmoforge.log")?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "cosmoforge=info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_file),
        )
        .init();

    let args = Args::parse();
    let mut config = App::load_config(&args.config);
    if let Some(scenario) = args.scenario {
        config.world.scenario = scenario;
    }

    match args.mode {
        Mode::Headless => {
            println!("Running headless for {} ticks...", args.ticks);
            let mut world = World::new(config.clone());
            world.load_scenario(&config.world.scenario)?;
            for _ in 0..args.ticks {
                let events = world.update(None)?;
                for event in &events {
                    tracing::info!(?event, "sim event");
                }
                if world.bodies.is_empty() {
                    break;
                }
            }
            println!("{}", serde_json::to_string_pretty(&world.snapshot(None))?);
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let mut app = App::new(config)?;
            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
