// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Circograph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Circograph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Criterion config shared by the layout benches.
//
// Knobs (env):
// - `BENCH_SAMPLE_SIZE`, `BENCH_WARMUP_SECS`, `BENCH_MEASUREMENT_SECS`: criterion timing.
// - `BENCH_NOISE_PCT`: change (in percent) below which criterion reports "no change".
// - `PROFILE_FREQ`: pprof sampling frequency in Hz; `0` turns the flamegraph profiler off,
//   which keeps the `large` pipeline case from producing multi-megabyte SVGs.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let frequency = env_parse::<i32>("PROFILE_FREQ", 100).clamp(0, 1000);
    let sample_size = env_parse::<usize>("BENCH_SAMPLE_SIZE", 40).clamp(10, 200);
    let warmup_secs = env_parse::<u64>("BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs = env_parse::<u64>("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);
    let noise_pct = env_parse::<f64>("BENCH_NOISE_PCT", 2.0).clamp(0.0, 50.0);

    let config = Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .noise_threshold(noise_pct / 100.0);

    if frequency == 0 {
        config
    } else {
        config.with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
    }
}
