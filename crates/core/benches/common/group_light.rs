use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;

use crate::bench_env::BenchTier;

pub fn configure_group_light<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tier: BenchTier) {
    let (sample_size, measurement) = match tier {
        BenchTier::Quick => (20, Duration::from_secs(2)),
        BenchTier::Full => (50, Duration::from_secs(5)),
    };
    group.sample_size(sample_size);
    group.measurement_time(measurement);
}
