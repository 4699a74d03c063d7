use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use fs_visitor::cli::Cli;
use fs_visitor::visitor::{CollectionSink, FileSystemVisitor, FsClassifier, Recorder};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    cli.validate().context("invalid arguments")?;

    info!("running fs-visitor over {}", cli.root);
    let start_time = Instant::now();

    let filter = cli.build_filter().context("failed to build filter")?;
    let mut visitor = FileSystemVisitor::new(FsClassifier::new(), filter, CollectionSink::new());

    let recorder = Recorder::with_limits(cli.cancel_after, cli.exclude_after);
    recorder.attach(&mut visitor);

    visitor
        .search(&cli.root)
        .with_context(|| format!("search of {} failed", cli.root))?;

    for item in visitor.iter() {
        println!("{}", item);
    }

    let elapsed = start_time.elapsed();
    info!(
        "saw {} notifications, saved {} items in {:.2?}",
        recorder.count(),
        visitor.count(),
        elapsed
    );

    Ok(())
}
