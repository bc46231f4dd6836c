use clap::{value_t, App, AppSettings, Arg};

use sorted_array_benchmarks::helpers::{export_json, gen_keys, KeyDistribution};
use sorted_array_benchmarks::profile::run_profile;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[rustfmt::skip]
    let matches = App::new("Sorted array profiler")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(Arg::with_name("distribution")
                 .long("distribution")
                 .short("d")
                 .default_value("random")
                 .help("Key distribution: random, asc, dsc, or dupsN for N distinct keys"))
        .arg(Arg::with_name("n")
                 .long("num-elements")
                 .short("n")
                 .default_value("100000")
                 .help("Number of keys to add"))
        .arg(Arg::with_name("measure-every")
                 .long("measure-every")
                 .short("m")
                 .default_value("1000")
                 .help("Take a checkpoint every N adds"))
        .arg(Arg::with_name("output")
                 .long("output")
                 .short("o")
                 .takes_value(true)
                 .help("JSON output file [default: results/profile_<distribution>.json]"))
        .get_matches();

    let distribution = value_t!(matches, "distribution", KeyDistribution)?;
    let n = value_t!(matches, "n", usize)?;
    let measure_every = value_t!(matches, "measure-every", usize)?;
    let output = matches
        .value_of("output")
        .map(String::from)
        .unwrap_or_else(|| format!("results/profile_{}.json", distribution));

    log::info!("Profiling {} keys with distribution {}", n, distribution);
    let profile = run_profile(&gen_keys(distribution, n), measure_every)?;

    for (name, stats) in [
        ("add", &profile.adds),
        ("hit", &profile.hits),
        ("miss", &profile.misses),
        ("remove", &profile.removes),
    ].iter() {
        log::info!(
            "{:<6} mean comparisons: {:6.2}    max comparisons: {}",
            name, stats.mean(), stats.max_cmp_calls
        );
    }
    let placement = profile.placement;
    log::info!(
        "Placement: {} new keys, {} behind their run, {} inside their run",
        placement.new_key, placement.run_end, placement.run_interior
    );

    export_json(&output, &profile.to_json())?;
    log::info!("Profile written to {}", output);
    Ok(())
}
