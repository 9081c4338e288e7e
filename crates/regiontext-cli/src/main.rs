mod cli;
mod document;
mod extract_cmd;
mod links_cmd;
mod page_range;
mod regions;
mod report;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to install log subscriber: {e}");
    }

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            ref pages,
            ref regions,
            ref regions_file,
            tolerance,
            link_tolerance,
            ref unicode_norm,
            parallel,
            ref format,
            ref output,
        } => extract_cmd::run(&extract_cmd::ExtractRequest {
            file,
            pages: pages.as_deref(),
            regions,
            regions_file: regions_file.as_deref(),
            tolerance,
            link_tolerance,
            unicode_norm: unicode_norm
                .as_ref()
                .map(cli::UnicodeNormArg::to_unicode_norm)
                .unwrap_or_default(),
            parallel,
            format,
            output: output.as_deref(),
        }),
        cli::Commands::Links {
            ref file,
            ref pages,
            ref format,
        } => links_cmd::run(file, pages.as_deref(), format),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
