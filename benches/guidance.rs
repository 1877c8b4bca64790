use clearway::{build_guidance_steps, build_summary_text, Locale, RouteData};
use clearway_fixtures::{read_fixture, CITY_HALL_TO_SEOUL_STATION, IRREGULAR_PAYLOAD, PATH_ONLY};
use criterion::criterion_main;

struct GuidanceScenario {
    name: &'static str,
    source_file: &'static str,
    expected_steps: usize,
}

const GUIDANCE_CASES: [GuidanceScenario; 3] = [
    GuidanceScenario {
        name: "CITY_HALL_TO_SEOUL_STATION",
        source_file: CITY_HALL_TO_SEOUL_STATION,
        expected_steps: 4,
    },
    GuidanceScenario {
        name: "PATH_ONLY",
        source_file: PATH_ONLY,
        expected_steps: 1,
    },
    GuidanceScenario {
        name: "IRREGULAR_PAYLOAD",
        source_file: IRREGULAR_PAYLOAD,
        expected_steps: 4,
    },
];

fn target_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("guidance");
    group.significance_level(0.1).sample_size(50);

    GUIDANCE_CASES.into_iter().for_each(|sc| {
        let payload = read_fixture(sc.source_file);

        group.bench_function(format!("decode+build: {}", sc.name), |b| {
            b.iter(|| {
                let route = RouteData::from_json(&payload).expect("Route must decode");
                let steps = build_guidance_steps(&route, Locale::Korean);
                assert_eq!(steps.len(), sc.expected_steps);

                build_summary_text(&route, None, Locale::Korean)
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(guidance_benches, target_benchmark);
criterion_main!(guidance_benches);
