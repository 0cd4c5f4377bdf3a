//! Generate command: simulate a season, aggregate it, report.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use rainsim_aggregate::aggregate;
use rainsim_generator::generate_daily;

use crate::cli::GenerateArgs;
use crate::config::{self, RainsimConfig};
use crate::convert;
use crate::display;
use crate::export::{self, GeneratedReport};

/// Run the generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Load config, or fall back to built-in defaults
    let config = match args.config {
        Some(ref path) => {
            info!(path = %path.display(), "loading config");
            config::load(path)?
        }
        None => RainsimConfig::default(),
    };

    // 2. Build generator config; CLI flags override file values
    let gen_cfg = convert::build_generator_config(&config, args.start, args.end)?;
    let seed = args.seed.or(config.seed);
    info!(
        location = %config.location.name,
        latitude = config.location.latitude,
        longitude = config.location.longitude,
        start = %gen_cfg.start(),
        end = %gen_cfg.end(),
        ?seed,
        "generator configured"
    );

    // 3. Create RNG
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // 4. Generate and aggregate
    let daily = generate_daily(&gen_cfg, &mut rng).context("rainfall generation failed")?;
    let report = aggregate(&daily).context("rainfall aggregation failed")?;
    info!(
        n_days = report.daily().len(),
        total = report.stats().total_rainfall(),
        "season generated"
    );

    // 5. Render
    print!("{}", display::render(&config.location.name, &report));

    // 6. Optional JSON export
    if let Some(path) = args.output.or(config.output.path.clone()) {
        let out = GeneratedReport {
            location: &config.location,
            seed,
            report: &report,
        };
        export::write_json(&path, &out, args.pretty || config.output.pretty)?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}
