//! End-to-end parser tests
//!
//! Sample documents are loaded through `Samples` and checked with `assert_trip`.
//! Short inline documents are used where a test is about one line shape.

use rstest::rstest;
use trip_parser::trip::parsing::scan;
use trip_parser::trip::testing::{assert_trip, Samples};
use trip_parser::{parse_document, FailureKind, TripError};

const BERLIN_LOOP: &str = "\
# Berlin Loop
**Duration:** 2 days
## Day 1: Berlin, Germany
**Coordinates:** 52.52, 13.405
**Camping:** Site A
Arrival day.
**Activities:**
- Unpack
- Walk around
## Day 2: Bruges, Belgium
**Coordinates:** 51.2093, 3.2247
";

#[test]
fn test_berlin_loop_end_to_end() {
    let trip = parse_document(BERLIN_LOOP).unwrap();

    assert_trip(&trip)
        .title("Berlin Loop")
        .subtitle("2 days")
        .day_count(2)
        .day(0, |day| {
            day.id(1)
                .label("Day 1")
                .city("Berlin")
                .country("Germany")
                .coordinates(52.52, 13.405)
                .campsite(Some("Site A"))
                .description("Arrival day.")
                .activities(&["Unpack", "Walk around"]);
        })
        .day(1, |day| {
            day.id(2)
                .city("Bruges")
                .country("Belgium")
                .coordinates(51.2093, 3.2247)
                .description("")
                .activities(&[]);
        });
}

#[test]
fn test_day_without_coordinates_rejects_document() {
    let err = parse_document("# Berlin Loop\n## Day 1: Berlin, Germany\n**Camping:** Site A\n")
        .unwrap_err();
    assert_eq!(err, TripError::NoDays);
    assert_eq!(err.kind(), FailureKind::InvalidFormat);
}

#[test]
fn test_missing_title_rejects_document() {
    let err =
        parse_document("## Day 1: Berlin, Germany\n**Coordinates:** 52.52, 13.405\n").unwrap_err();
    assert_eq!(err, TripError::MissingTitle);
}

#[test]
fn test_empty_document_is_rejected() {
    assert_eq!(parse_document("").unwrap_err(), TripError::MissingTitle);
    assert_eq!(
        parse_document("# Only a title\n").unwrap_err(),
        TripError::NoDays
    );
}

#[test]
fn test_legacy_subtitle_accumulates_in_order() {
    let trip = parse_document(
        "# Loop\n**Duration:** 7 days\n**Dates:** Jul 18-24\n**Type:** Camping\n\
         ## Day 1: Berlin\n**Coordinates:** 52.52, 13.405\n",
    )
    .unwrap();
    assert_trip(&trip).subtitle("7 days • Jul 18-24 • Camping");
}

#[test]
fn test_explicit_location_overrides_heading() {
    let trip = parse_document(
        "# Loop\n## Day 1: Somewhere, Nowhere\n- **Location**: Ghent, Belgium\n- **Coords**: 51.05, 3.72\n",
    )
    .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.city("Ghent").country("Belgium");
    });
}

#[test]
fn test_heading_without_comma_has_empty_country() {
    let trip = parse_document("# Loop\n## Day 1: Mont-Saint-Michel\n**Coordinates:** 48.63, -1.51\n")
        .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.city("Mont-Saint-Michel").country("");
    });
}

#[test]
fn test_day_ids_are_taken_verbatim() {
    let trip = parse_document(
        "# Loop\n## Day 3: A\n**Coordinates:** 1, 1\n## Day 1: B\n**Coordinates:** 2, 2\n## Day 7: C\n**Coordinates:** 3, 3\n",
    )
    .unwrap();
    assert_trip(&trip)
        .day_ids(&[3, 1, 7])
        .day(2, |day| {
            day.label("Day 7");
        });
}

#[test]
fn test_heading_without_number_gets_ordinal() {
    let trip = parse_document(
        "# Loop\n## Day 1: A\n**Coordinates:** 1, 1\n## Day two: B\n**Coordinates:** 2, 2\n",
    )
    .unwrap();
    assert_trip(&trip).day_ids(&[1, 2]).day(1, |day| {
        day.city("B");
    });
}

/// Days lacking valid coordinates are dropped silently rather than failing the
/// document. This is the lenient policy partial documents rely on.
#[rstest]
#[case::missing("")]
#[case::malformed("**Coordinates:** abc, 2.3")]
#[case::one_component("**Coordinates:** 52.5")]
#[case::three_components("**Coordinates:** 52.5, 13.4, 30")]
#[case::not_finite("**Coordinates:** inf, 13.4")]
#[case::empty_value("- **Coords**:")]
fn test_day_without_valid_coordinates_is_dropped(#[case] coordinates_line: &str) {
    let source = format!(
        "# Loop\n## Day 1: Berlin, Germany\n**Camping:** Site A\n{}\n\
         Plenty of notes here.\n**Activities:**\n- Walk\n\
         ## Day 2: Bruges, Belgium\n**Coordinates:** 51.2093, 3.2247\n",
        coordinates_line
    );
    let trip = parse_document(&source).unwrap();
    assert_trip(&trip).day_count(1).day(0, |day| {
        day.id(2).city("Bruges");
    });

    let draft = scan(&source);
    assert_eq!(draft.dropped, vec!["Day 1".to_string()]);
}

#[rstest]
#[case::legacy_bare("**Coordinates:** 52.52, 13.405")]
#[case::legacy_list("- **Coords:** 52.52, 13.405")]
#[case::legacy_bare_short("**Coords:** 52.52, 13.405")]
#[case::modern_list("- **Coords**: 52.52, 13.405")]
#[case::no_spaces("**Coordinates:** 52.52,13.405")]
#[case::degree_suffix("**Coordinates:** 52.52° N, 13.405° E")]
#[case::unit_suffix("- **Coords**: 52.52deg, 13.405deg")]
fn test_coordinate_spellings(#[case] coordinates_line: &str) {
    let source = format!("# Loop\n## Day 1: Berlin\n{}\n", coordinates_line);
    let trip = parse_document(&source).unwrap();
    assert_trip(&trip).day(0, |day| {
        day.coordinates(52.52, 13.405);
    });
}

#[test]
fn test_legacy_fields_before_any_day_are_ignored() {
    let trip = parse_document(
        "# Loop\n**Date:** July 1\n**Coordinates:** 1, 1\n## Day 1: A\n**Coordinates:** 2, 2\n",
    )
    .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.date(None).coordinates(2.0, 2.0);
    });
}

#[test]
fn test_modern_fields_before_any_day_never_attach() {
    let trip = parse_document(
        "# Loop\n- **Camping**: Orphan site\n- **Coords**: 9, 9\n## Day 1: A\n**Coordinates:** 2, 2\n",
    )
    .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.campsite(None).coordinates(2.0, 2.0);
    });
}

#[test]
fn test_text_in_activities_section_is_not_description() {
    let trip = parse_document(
        "# Loop\n## Day 1: A\n**Coordinates:** 1, 1\nIntro.\n**Activities:**\n- Hike\nAfterthought.\n",
    )
    .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.description("Intro.").activities(&["Hike"]);
    });
}

#[test]
fn test_list_items_outside_activities_are_ignored() {
    let trip =
        parse_document("# Loop\n## Day 1: A\n**Coordinates:** 1, 1\n- stray bullet\n").unwrap();
    assert_trip(&trip).day(0, |day| {
        day.description("").activities(&[]);
    });
}

#[test]
fn test_notes_replace_narrative() {
    let trip = parse_document(
        "# Loop\n## Day 1: A\n**Coordinates:** 1, 1\nFirst draft.\n**Notes:** Final word.\n",
    )
    .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.description("Final word.");
    });
}

#[test]
fn test_empty_list_notes_clear_narrative() {
    let trip = parse_document(
        "# Loop\n## Day 1: A\n- **Coords**: 1, 1\nNarrative.\n- **Notes**:\n",
    )
    .unwrap();
    assert_trip(&trip).day(0, |day| {
        day.description("");
    });
}

#[test]
fn test_suffixed_coordinates_place_the_day() {
    let trip = parse_document(
        "# Paris Hop\n## Day 1: Paris, France\n**Coordinates:** 48.8566° N, 2.3522° E\n\
         ## Day 2: Caen, France\n**Coordinates:** 49.18, -0.37\n",
    )
    .unwrap();
    assert_trip(&trip).day_ids(&[1, 2]).day(0, |day| {
        day.coordinates(48.8566, 2.3522);
    });
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let trip = parse_document(
        "\u{feff}# Berlin Loop\n## Day 1: Berlin, Germany\n**Coordinates:** 52.52, 13.405\n",
    )
    .unwrap();
    assert_trip(&trip).title("Berlin Loop").day_count(1);

    let trip = parse_document(
        "\u{feff}---\ntitle: Coast\nsubtitle: Two days\n---\n## Day 1: Caen, France\n- **Coords**: 49.18, -0.37\n",
    )
    .unwrap();
    assert_trip(&trip).title("Coast").subtitle("Two days");
}

#[test]
fn test_crlf_line_endings() {
    let source = BERLIN_LOOP.replace('\n', "\r\n");
    let trip = parse_document(&source).unwrap();
    assert_trip(&trip)
        .title("Berlin Loop")
        .day(0, |day| {
            day.activities(&["Unpack", "Walk around"]);
        });
}

#[test]
fn test_sample_legacy_loop() {
    let trip = Samples::legacy_loop().parse().unwrap();
    assert_trip(&trip)
        .title("Berlin to Normandy")
        .subtitle("4 days • Jul 18-21 • Camping")
        .day_count(4)
        .day(0, |day| {
            day.date(Some("July 18"))
                .coordinates(52.52, 13.405)
                .campsite(Some("Campingplatz Am Krossinsee"))
                .description(
                    "Pick up the van at Tegel. Stock up on groceries before leaving the city.",
                )
                .activities(&["Pick up the van", "Walk around Mitte"]);
        })
        .day(1, |day| {
            day.date(Some("July 19"))
                .coordinates(51.2093, 3.2247)
                .distance(Some("780 km"))
                .campsite(Some("Camping Memling"))
                .description("Long driving day, stop in Cologne for lunch.")
                .activities(&["Canal boat tour", "Climb the Belfry"]);
        })
        .day(2, |day| {
            day.city("Bayeux")
                .distance(Some("430 km"))
                .description("Tapestry museum opens at 9.")
                .activities(&[]);
        })
        .day(3, |day| {
            day.city("Mont-Saint-Michel")
                .description("")
                .activities(&["Cross the bay at low tide"]);
        });
}

#[test]
fn test_sample_front_matter_coast() {
    let trip = Samples::front_matter_coast().parse().unwrap();
    assert_trip(&trip)
        .title("Normandy Coast")
        .subtitle("Five days • July 2025")
        .day_ids(&[1, 2, 3, 5])
        .day(0, |day| {
            day.city("Caen")
                .country("France")
                .coordinates(49.1829, -0.3707)
                .campsite(Some("Camping Le Courtils"))
                .image_hints(&["Abbaye aux Hommes", "Château de Caen"])
                .description("Arrive by ferry from Portsmouth.");
        })
        .day(1, |day| {
            day.city("Colleville-sur-Mer")
                .country("France")
                .image_hints(&["Omaha Beach Memorial", "Normandy American Cemetery"]);
        })
        .day(2, |day| {
            day.city("Saint-Malo")
                .description("Walk the ramparts at sunset.")
                .image_hints(&[]);
        });
}

#[test]
fn test_sample_mixed_formats() {
    let trip = Samples::mixed_formats().parse().unwrap();
    assert_trip(&trip)
        .title("Alpine Crossing")
        .subtitle("3 days")
        .day_count(2)
        .day(0, |day| {
            day.date(Some("August 2"))
                .coordinates(47.3769, 8.5417)
                .campsite(Some("Camping Seebucht"))
                .description("Lake swim in the morning.")
                .activities(&["Old town walk", "Fondue dinner"]);
        })
        .day(1, |day| {
            day.city("Chamonix")
                .distance(Some("310 km"))
                .image_hints(&["Aiguille du Midi"]);
        });
}

#[test]
fn test_sample_partial_draft_keeps_placeable_days() {
    let sample = Samples::partial_draft();
    let trip = sample.parse().unwrap();
    assert_trip(&trip)
        .title("Draft: Baltic Loop")
        .subtitle("Sep 1-4")
        .day_count(1)
        .day(0, |day| {
            day.city("Tallinn").coordinates(59.437, 24.7536);
        });

    let draft = scan(sample.source());
    assert_eq!(draft.dropped, vec!["Day 2", "Day 3", "Day 4"]);
}

#[test]
fn test_every_sample_parses() {
    for sample in Samples::all() {
        let trip = sample
            .parse()
            .unwrap_or_else(|err| panic!("{} failed to parse: {}", sample.name(), err));
        assert!(!trip.days.is_empty(), "{} has no days", sample.name());
    }
}

#[test]
fn test_route_follows_document_order() {
    let trip = Samples::legacy_loop().parse().unwrap();
    let route: Vec<[f64; 2]> = trip.route().iter().map(|c| c.as_array()).collect();
    assert_eq!(
        route,
        vec![
            [52.52, 13.405],
            [51.2093, 3.2247],
            [49.2764, -0.7028],
            [48.6361, -1.5115]
        ]
    );
    assert_eq!(trip.day(3).map(|d| d.city.as_str()), Some("Bayeux"));
}
