//! Generates a dataset from an arbitrary seed and reference time, then runs
//! it through [`surveyseed::test::invariants`].

#![no_main]

use chrono::{DateTime, TimeDelta};
use libfuzzer_sys::fuzz_target;
use surveyseed::{
    Generator,
    catalog::Catalog,
    config::GeneratorConfig,
    sql::render_script,
    test::invariants::{check_dataset, check_script},
};

fuzz_target!(|input: (u64, u32)| {
    let (seed, minutes) = input;
    // somewhere between 1970 and 2050
    let minutes = minutes as i64 % (80 * 365 * 24 * 60);
    let Some(now) = DateTime::from_timestamp(0, 0)
        .map(|epoch| epoch.naive_utc() + TimeDelta::minutes(minutes))
    else {
        return;
    };

    let config = GeneratorConfig::default();
    let dataset =
        Generator::from_seed(seed, now, config.clone(), Catalog::default())
            .unwrap()
            .generate();

    check_dataset(&dataset, &config);
    check_script(&render_script(&dataset), &dataset);
});
