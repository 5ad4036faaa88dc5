use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bijections::{find_nth_bijection, sample, BijectionGroup, BijectionSet, Domain, Group};

#[derive(Parser, Debug)]
#[command(
    name = "bijections",
    about = "List the bijections of a small set and exercise the group they form."
)]
struct Cli {
    /// Elements of the set. Repeated elements are ignored.
    #[arg(default_values_t = [1, 2, 3, 4], allow_negative_numbers = true)]
    elements: Vec<i64>,

    /// Show the bijection with this index, its inverse and their composition.
    #[arg(long, allow_negative_numbers = true)]
    nth: Option<i64>,

    /// Only print the number of bijections.
    #[arg(long)]
    count: bool,
}

/// Log filter from `RUST_LOG` style directives, `info` for everything they leave unset.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .init();

    let cli = Cli::parse();

    let domain = Domain::new(cli.elements)?;
    let bijections = BijectionSet::of(&domain);

    if cli.count {
        println!("{}", bijections.len());
        return Ok(());
    }

    for bijection in &bijections {
        println!("{}", sample::render(domain.as_slice(), bijection)?);
    }

    let Some(n) = cli.nth else {
        return Ok(());
    };

    let group = BijectionGroup::new(domain.clone());
    let bijection = find_nth_bijection(n, &bijections)?;
    let f = bijection.to_mapping();
    let inverse = group.inverse_of(&f);
    let composed = group.binary_operation(&f, &inverse);

    println!();
    println!("bijection {n}: {bijection}");
    println!("  {}", sample::render(domain.as_slice(), &f)?);
    println!("inverse: {}", bijection.inverse());
    println!("  {}", sample::render(domain.as_slice(), &inverse)?);
    println!("composed with its inverse:");
    println!("  {}", sample::render(domain.as_slice(), &composed)?);
    println!("order: {}", bijection.order());

    Ok(())
}
