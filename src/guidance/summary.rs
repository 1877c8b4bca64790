use itertools::Itertools;

use crate::guidance::builder::approach_text;
use crate::guidance::Locale;
use crate::route::RouteData;

/// The sentence narrated once a route has been found.
///
/// ```rust
/// use clearway::{build_summary_text, Locale, RouteData};
///
/// let route = RouteData::from_json(r#"{ "distanceText": "900m", "avoidedAreasCount": 1 }"#).unwrap();
/// assert_eq!(
///     build_summary_text(&route, Some("Gangnam Station"), Locale::English),
///     "Found a safe route to 'Gangnam Station'. Total 900m, estimated unknown time. Avoiding 1 smoking area."
/// );
/// ```
pub fn build_summary_text(route: &RouteData, destination: Option<&str>, locale: Locale) -> String {
    let distance = route.total_distance();
    let duration = route.total_duration();

    let totals = (distance.is_some() || duration.is_some()).then(|| locale.totals(distance, duration));
    let first = route
        .voice_instructions
        .first()
        .map(|instruction| locale.first_instruction(&approach_text(0, instruction, locale)));

    [
        Some(locale.route_found(destination)),
        totals,
        Some(locale.avoided(route.avoided_areas())),
        first,
    ]
    .into_iter()
    .flatten()
    .join(" ")
}
