use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use descramble::memory::{MemoryDocument, MemorySurface};
use descramble::{Config, DecodeLoop};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to run the decode effect over
    #[arg(default_value = "INCOMING TRANSMISSION DECODED")]
    text: String,
    /// Stop after this many cycles instead of looping forever
    #[arg(long)]
    cycles: Option<usize>,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = Config::default();
    let surface = MemorySurface::from_text(&args.text, &config);
    let mut document = MemoryDocument::new();
    document.insert(config.selector.clone(), Arc::clone(&surface));

    // Repaint the line while the cycles run.
    let painter_surface = Arc::clone(&surface);
    let painter = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_millis(50));
        loop {
            ticker.tick().await;
            print!("\r{}", painter_surface.render_line());
            let _ = std::io::stdout().flush();
        }
    });

    let mut decode_loop = match args.seed {
        Some(seed) => DecodeLoop::with_seed(document, config, seed),
        None => DecodeLoop::new(document, config),
    };
    let outcome = decode_loop.run(args.cycles).await;

    painter.abort();
    println!("\r{}", surface.render_line());
    if let Err(error) = outcome {
        eprintln!("decode loop stopped: {error}");
        std::process::exit(1);
    }
}
