use criterion::{Criterion, black_box, criterion_group, criterion_main};
use miqat_solar::{
    EventDirection, HORIZON_ALTITUDE_DEG, SunAltitude, altitude_event_utc_hours, solar_position,
};
use miqat_time::calendar_to_jd;

fn position_bench(c: &mut Criterion) {
    let jd = calendar_to_jd(2024, 3, 20.5);
    c.bench_function("solar_position", |b| {
        b.iter(|| solar_position(black_box(jd)))
    });
}

fn event_bench(c: &mut Criterion) {
    let jd_0h = calendar_to_jd(2024, 3, 20.0);

    let mut group = c.benchmark_group("altitude_event");
    group.bench_function("sunrise", |b| {
        b.iter(|| {
            altitude_event_utc_hours(
                black_box(jd_0h),
                40.7128,
                -74.006,
                SunAltitude::Fixed(HORIZON_ALTITUDE_DEG),
                EventDirection::Rising,
            )
        })
    });
    group.bench_function("asr_shadow", |b| {
        b.iter(|| {
            altitude_event_utc_hours(
                black_box(jd_0h),
                40.7128,
                -74.006,
                SunAltitude::Shadow(1.0),
                EventDirection::Setting,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, position_bench, event_bench);
criterion_main!(benches);
