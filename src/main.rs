use std::env;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use midquad::cli::{Invocation, USAGE};
use midquad::plot::scatter::error_plot;
use midquad::report::Report;
use midquad::{sweep, timed_integrate, SweepConfig, REFERENCE_INTEGRAL};

fn main() -> anyhow::Result<()> {
    // logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();
    let invocation = match Invocation::parse(args.get(1).map(String::as_str)) {
        Ok(inv) => inv,
        Err(e) => {
            warn!("{}", e);
            eprintln!("{}", USAGE);
            return Ok(());
        }
    };
    debug!(?invocation, "dispatch");

    match invocation {
        Invocation::Single(n) => {
            let report = Report::new(timed_integrate(n), REFERENCE_INTEGRAL);
            println!("{}", report);
        }
        Invocation::Graph => graph(&SweepConfig::default())?,
    }

    Ok(())
}

fn graph(cfg: &SweepConfig) -> anyhow::Result<()> {
    let pb = ProgressBar::new(cfg.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] N {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    let points = sweep::run_with_progress(cfg, &pb);
    pb.finish_and_clear();

    error_plot(&points).show();
    Ok(())
}
