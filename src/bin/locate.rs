//! Facility location demo.
//!
//! Computes the taxicab and Euclidean optimal locations for a fixed set
//! of customer coordinates and reports each with its total service cost.
//!
//! Options: --iterations, --tolerance, --policy {skip|snap}

use clap::Parser;
use hubpoint::geometry::Euclidean;
use hubpoint::geometry::Metric;
use hubpoint::geometry::Point;
use hubpoint::geometry::Taxicab;
use hubpoint::solver;
use hubpoint::solver::Policy;
use hubpoint::solver::Weiszfeld;

#[derive(Parser)]
#[command(about = "optimal facility location over a sample customer set")]
struct Args {
    /// Weiszfeld iteration budget.
    #[arg(long, default_value_t = hubpoint::WEISZFELD_ITERATIONS)]
    iterations: usize,
    /// Componentwise convergence tolerance.
    #[arg(long, default_value_t = hubpoint::WEISZFELD_TOLERANCE)]
    tolerance: f64,
    /// Degenerate-point strategy.
    #[arg(long, default_value = "snap")]
    policy: Policy,
}

fn main() -> anyhow::Result<()> {
    hubpoint::log();
    let args = Args::parse();
    let ref customers = [(2., 3.), (6., 7.), (3., 4.), (5., 1.), (4., 2.)].map(Point::from);
    let manhattan = solver::manhattan(customers)?;
    let euclidean = Weiszfeld::from((&customers[..], args.iterations, args.tolerance))
        .policy(args.policy)
        .solve()?;
    log::info!("{:<32}{}", "taxicab optimal location", manhattan);
    log::info!(
        "{:<32}{:.6}",
        "taxicab service cost",
        Taxicab.cost(&manhattan, customers)
    );
    log::info!("{:<32}{}", "euclidean optimal location", euclidean);
    log::info!(
        "{:<32}{:.6}",
        "euclidean service cost",
        Euclidean.cost(&euclidean, customers)
    );
    Ok(())
}
