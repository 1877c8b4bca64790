use clearway_fixtures::{read_fixture, CITY_HALL_TO_SEOUL_STATION, IRREGULAR_PAYLOAD, PATH_ONLY};
use clearway_geo::{lat_lng, LatLng};
use serde_json::json;
use strum::IntoEnumIterator;

use crate::guidance::builder::{approach_text, distance_label, parse_distance_text, trigger_distance};
use crate::guidance::{build_guidance_steps, build_summary_text, Locale, StepId, Turn};
use crate::route::{RawInstruction, RouteData};

fn fixture(name: &str) -> RouteData {
    RouteData::from_json(&read_fixture(name)).expect("fixture decodes")
}

fn instruction(value: serde_json::Value) -> RawInstruction {
    serde_json::from_value(value).expect("instruction decodes")
}

#[test_log::test]
fn path_without_instructions_yields_fallback() {
    let route = fixture(PATH_ONLY);
    let steps = build_guidance_steps(&route, Locale::English);

    assert_eq!(steps.len(), 1);
    let step = &steps[0];
    assert_eq!(step.id, StepId::fallback());
    assert_eq!(step.target, Some(lat_lng(37.2, 127.2)));
    assert_eq!(step.trigger_distance, 20.0);
    assert!(!step.approach_text.is_empty());
    assert!(!step.action_text.is_empty());
}

#[test]
fn empty_route_has_no_steps() {
    assert!(build_guidance_steps(&RouteData::default(), Locale::Korean).is_empty());
}

#[test]
fn trigger_distance_is_clamped() {
    let route = RouteData::from_value(json!({
        "voiceInstructions": [
            { "distanceMeters": 500, "text": "Go straight" },
            { "distanceMeters": 10, "text": "Go straight" },
            { "distanceMeters": 150, "text": "Go straight" },
            { "distanceText": "1.2km" },
            { "distanceMeters": 0 },
            { "text": "no distance at all" }
        ]
    }))
    .expect("route decodes");

    let radii = build_guidance_steps(&route, Locale::English)
        .iter()
        .map(|step| step.trigger_distance)
        .collect::<Vec<_>>();

    assert_eq!(radii, vec![50.0, 12.0, 30.0, 50.0, 20.0, 20.0]);
    assert_eq!(trigger_distance(None), 20.0);
    assert_eq!(trigger_distance(Some(-40.0)), 20.0);
    assert_eq!(trigger_distance(Some(62.0)), 12.0);
    assert_eq!(trigger_distance(Some(200.0)), 40.0);
}

#[test_log::test]
fn builds_korean_route() {
    let route = fixture(CITY_HALL_TO_SEOUL_STATION);
    let steps = build_guidance_steps(&route, Locale::Korean);
    assert_eq!(steps.len(), 4);

    assert_eq!(steps[0].id.as_str(), "0-세종대로에서 좌회전");
    assert_eq!(steps[0].approach_text, "현재 위치에서 좌회전 (세종대로)");
    assert_eq!(steps[0].action_text, "이제 좌회전 하세요.");
    assert_eq!(steps[0].target, Some(lat_lng(37.5664, 126.9779)));
    assert_eq!(steps[0].trigger_distance, 12.0);

    assert_eq!(steps[1].approach_text, "415m 남대문로 방향으로 직진");
    assert_eq!(steps[1].action_text, "계속 직진하세요.");
    assert_eq!(steps[1].target, Some(lat_lng(37.5633, 126.9754)));
    assert_eq!(steps[1].trigger_distance, 50.0);

    assert_eq!(steps[2].approach_text, "480m 이동 후 우회전");
    assert_eq!(steps[2].action_text, "이제 우회전 하세요.");
    assert_eq!(steps[2].target, Some(lat_lng(37.55985, 126.97292)));

    assert_eq!(steps[3].id.as_str(), "3-step");
    assert_eq!(steps[3].approach_text, "0.6km 이동 후 우회전 (한강대로)");
    assert_eq!(steps[3].action_text, "이제 우회전 하세요.");
    assert_eq!(steps[3].target, Some(lat_lng(37.5547, 126.9707)));
    assert_eq!(steps[3].trigger_distance, 50.0);
}

#[test_log::test]
fn irregular_payload_degrades_gracefully() {
    let route = fixture(IRREGULAR_PAYLOAD);
    let steps = build_guidance_steps(&route, Locale::English);
    assert_eq!(steps.len(), 4);

    assert_eq!(steps[0].id.as_str(), "0-step");
    assert_eq!(steps[0].approach_text, "Step 1: guidance unavailable");
    assert_eq!(steps[0].action_text, "Follow the current instruction now.");
    // Path entry 1 is broken: a target that can never be reached.
    assert!(!steps[0].target.expect("positional target").is_finite());
    assert_eq!(steps[0].trigger_distance, 20.0);

    // "about" holds no number, so there is no distance to speak.
    assert_eq!(steps[1].approach_text, "Step 2: guidance unavailable");
    assert_eq!(steps[1].trigger_distance, 20.0);

    assert_eq!(steps[2].id.as_str(), "2-Turn right onto Teheran-ro");
    assert_eq!(steps[2].approach_text, "1250m ahead, right turn");
    assert_eq!(steps[2].action_text, "Turn right now.");
    assert_eq!(steps[2].target, Some(lat_lng(37.52, 127.02)));
    assert_eq!(steps[2].trigger_distance, 50.0);

    // Past the end of the path the destination is used.
    assert_eq!(steps[3].approach_text, "Step 4: guidance unavailable");
    assert_eq!(steps[3].target, Some(lat_lng(37.52, 127.02)));
}

#[test]
fn ids_are_unique_for_repeated_text() {
    let route = RouteData::from_value(json!({
        "voiceInstructions": [
            { "text": "Go straight" },
            { "text": "Go straight" },
            {},
            {}
        ]
    }))
    .expect("route decodes");

    let ids = build_guidance_steps(&route, Locale::English)
        .into_iter()
        .map(|step| step.id)
        .collect::<Vec<_>>();

    assert_eq!(ids.len(), 4);
    for (index, id) in ids.iter().enumerate() {
        assert_eq!(ids.iter().filter(|other| *other == id).count(), 1, "duplicate id at {index}");
    }
}

#[test]
fn approach_text_variants() {
    let immediate = instruction(json!({ "distanceMeters": 5, "maneuver": "left turn", "streetName": "Main St" }));
    assert_eq!(
        approach_text(0, &immediate, Locale::English),
        "From current position, left turn (Main St)"
    );

    // Not the first step: the distance is spoken even when short.
    assert_eq!(approach_text(1, &immediate, Locale::English), "5m ahead, left turn (Main St)");

    let no_distance = instruction(json!({ "action": "right turn" }));
    assert_eq!(approach_text(0, &no_distance, Locale::English), "From current position, right turn");
    assert_eq!(approach_text(2, &no_distance, Locale::English), "Step 3: guidance unavailable");

    let far_first = instruction(json!({ "distanceMeters": 120, "text": "Turn left at the park" }));
    assert_eq!(approach_text(0, &far_first, Locale::English), "120m ahead, left turn");
    assert_eq!(approach_text(0, &far_first, Locale::Korean), "120m 이동 후 좌회전");

    let text_only = instruction(json!({ "distanceText": "300m", "text": "Follow the river path" }));
    assert_eq!(approach_text(1, &text_only, Locale::English), "300m Follow the river path");

    let bare = instruction(json!({ "text": "Cross at the lights" }));
    assert_eq!(approach_text(4, &bare, Locale::English), "Cross at the lights");
}

#[test]
fn actions_follow_direction_words() {
    let cases = [
        ("좌측 골목으로", "Turn left now."),
        ("우측 방향", "Turn right now."),
        ("직진하세요", "Continue straight."),
        ("유턴 하세요", "Make a U-turn now."),
        ("Keep LEFT at the fork", "Turn left now."),
        ("Bear right", "Turn right now."),
        ("Go Straight ahead", "Continue straight."),
        ("Make a U-Turn", "Make a U-turn now."),
        ("make a u turn", "Make a U-turn now."),
        ("Walk towards the bright sign", "Follow the current instruction now."),
        ("Arrive", "Follow the current instruction now."),
    ];

    for (text, expected) in cases {
        let source = instruction(json!({ "text": text }));
        let steps = build_guidance_steps(
            &RouteData {
                voice_instructions: vec![source],
                ..RouteData::default()
            },
            Locale::English,
        );
        assert_eq!(steps[0].action_text, expected, "for {text:?}");
    }
}

#[test]
fn every_turn_has_phrases() {
    for turn in Turn::iter() {
        for locale in [Locale::Korean, Locale::English] {
            assert!(!locale.turn_label(turn).is_empty());
            assert_ne!(locale.action(Some(turn)), locale.action(None));
        }
    }
}

#[test]
fn locale_parses_from_configuration_values() {
    assert_eq!("ko".parse::<Locale>(), Ok(Locale::Korean));
    assert_eq!("ko-KR".parse::<Locale>(), Ok(Locale::Korean));
    assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
    assert!("fr".parse::<Locale>().is_err());
    assert_eq!(Locale::English.to_string(), "en");
}

#[test]
fn distance_strings() {
    assert_eq!(parse_distance_text("480m"), Some(480.0));
    assert_eq!(parse_distance_text("1.2km"), Some(1200.0));
    assert_eq!(parse_distance_text("1,200 m"), Some(1200.0));
    assert_eq!(parse_distance_text("약 35m"), Some(35.0));
    assert_eq!(parse_distance_text(".5km"), Some(500.0));
    assert_eq!(parse_distance_text("약 .8 km"), Some(800.0));
    assert_eq!(parse_distance_text("about"), None);
    assert_eq!(parse_distance_text(""), None);
}

#[test]
fn distance_labels_round_up_to_five() {
    let label = |value: serde_json::Value| distance_label(&instruction(value));

    assert_eq!(label(json!({ "distanceMeters": 412 })), Some("415m".to_string()));
    assert_eq!(label(json!({ "distanceMeters": 10 })), Some("10m".to_string()));
    assert_eq!(label(json!({ "distanceMeters": 0 })), Some("5m".to_string()));
    assert_eq!(label(json!({ "distanceMeters": 2.5 })), Some("5m".to_string()));
    assert_eq!(
        label(json!({ "distanceMeters": 412, "distanceText": "약 400m" })),
        Some("약 400m".to_string())
    );
    assert_eq!(label(json!({ "distanceText": "soon" })), None);
    assert_eq!(label(json!({})), None);
}

#[test_log::test]
fn summary_narrates_route() {
    let route = fixture(CITY_HALL_TO_SEOUL_STATION);

    assert_eq!(
        build_summary_text(&route, Some("서울역"), Locale::Korean),
        "'서울역'까지의 안전 경로를 찾았습니다. 총 1.5km, 예상 소요 22분. \
         흡연 구역 2곳을 우회합니다. 첫 안내: 현재 위치에서 좌회전 (세종대로)"
    );
}

#[test]
fn summary_without_totals_or_instructions() {
    let route = fixture(PATH_ONLY);

    assert_eq!(
        build_summary_text(&route, None, Locale::Korean),
        "안전 경로 안내를 시작합니다. 흡연 구역을 만나지 않는 경로입니다."
    );
    assert_eq!(
        build_summary_text(&route, None, Locale::English),
        "Starting safe route guidance. This route passes no smoking areas."
    );
}
