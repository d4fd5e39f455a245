use clap::builder::RangedU64ValueParser;
use clap::Parser;
use pcap_timing::{time_capture_file, BenchConfig, DEFAULT_BUFFER_SIZE};
use std::path::PathBuf;
use std::process;

/// Time the iteration of all blocks in PCAP or PCAPNG files
#[derive(Parser, Debug)]
#[clap(name = "pcap-timing")]
struct Cli {
    /// Capacity of the streaming reader buffer, in bytes
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BUFFER_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    buffer_size: usize,
    /// Number of passes over each file, accumulated in the same timer
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,
    /// Capture files to read
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            buffer_size: self.buffer_size,
            rounds: self.rounds,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.config();

    for path in &cli.files {
        match time_capture_file(path, &config) {
            Ok(report) => println!(
                "{}: {} blocks, {} packets, {}",
                path.display(),
                report.stats.blocks,
                report.stats.packets,
                report
            ),
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }
}
