use clap::Parser;
use tailwind_formatter::{format_files, handle_pipe_command, pack_command, Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format(args) => {
            init_logging(args.verbose);
            let check = args.check;

            match format_files(args).await {
                Ok(result) => {
                    if check {
                        let changed = result.changed_files();
                        for path in &changed {
                            println!("Would reformat: {}", path);
                        }
                        if !changed.is_empty() {
                            println!("{} of {} files would be reformatted",
                                     changed.len(), result.total_files_processed);
                            std::process::exit(1);
                        }
                        println!("All {} files are formatted", result.total_files_processed);
                    } else {
                        println!("Formatting successful!");
                        println!("  - Processed {} files", result.total_files_processed);
                        println!("  - Reformatted {} files", result.files_changed);
                        println!("  - Rewrote {} tags", result.tags_formatted);
                        if let Some(stats) = &result.performance_stats {
                            println!("  - Read {} bytes in {:.2?} ({:.1} files/sec)",
                                     stats.bytes_processed, stats.total_duration, stats.files_per_second);
                        }
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Pipe(args) => {
            init_logging(false);
            handle_pipe_command(args).await?;
            Ok(())
        }
        Commands::Pack(args) => {
            init_logging(false);
            println!("{}", pack_command(&args));
            Ok(())
        }
    }
}
