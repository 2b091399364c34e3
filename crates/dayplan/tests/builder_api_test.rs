//! Integration tests for the DayBuilder API
//!
//! These tests verify that the public API works end to end.

use dayplan::{
    DayBuilder, DayplanError, Event, Schedule, TimeSpan,
    config::{AppConfig, CalendarConfig, StyleConfig},
    layout_day,
};

const SAMPLE_DAY: &str = r#"
    [[event]]
    start = 30
    end = 150
    name = "Design review"
    location = "Room 4"

    [[event]]
    start = 540
    end = 600

    [[event]]
    start = 560
    end = 620

    [[event]]
    start = 610
    end = 670
"#;

#[test]
fn test_parse_sample_day() {
    let builder = DayBuilder::default();
    let result = builder.parse(SAMPLE_DAY);
    assert!(
        result.is_ok(),
        "Should parse valid schedule: {:?}",
        result.err()
    );
    assert_eq!(result.unwrap().len(), 4);
}

#[test]
fn test_layout_sample_day() {
    let builder = DayBuilder::default();
    let schedule = builder.parse(SAMPLE_DAY).expect("Failed to parse schedule");
    let placed = builder.layout(&schedule).expect("Failed to lay out schedule");

    let summary: Vec<_> = placed
        .iter()
        .map(|p| (p.start(), p.end(), p.column(), p.clashes()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (30, 150, 0, 0),
            (540, 600, 0, 1),
            (610, 670, 0, 1),
            (560, 620, 1, 1),
        ]
    );
}

#[test]
fn test_render_sample_day() {
    let builder = DayBuilder::default();
    let schedule = builder.parse(SAMPLE_DAY).expect("Failed to parse schedule");
    let placed = builder.layout(&schedule).expect("Failed to lay out schedule");
    let result = builder.render_svg(&placed);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
        assert!(svg.contains("Design review"));
        assert!(svg.contains("Sample location"));
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_empty_day_renders_grid_only() {
    let builder = DayBuilder::default();
    let schedule = builder.parse("").expect("Empty source is an empty day");
    let placed = builder.layout(&schedule).expect("Empty day lays out");
    assert!(placed.is_empty());

    let svg = builder.render_svg(&placed).expect("Failed to render empty day");
    assert!(svg.contains("data-layer=\"grid\""));
    assert!(!svg.contains("data-layer=\"event\""));
}

#[test]
fn test_parse_invalid_source_returns_error() {
    let builder = DayBuilder::default();
    let result = builder.parse("[[event]]\nstart = nine\n");
    assert!(matches!(result, Err(DayplanError::Parse { .. })));
}

#[test]
fn test_invalid_event_fails_whole_layout() {
    let builder = DayBuilder::default();
    let schedule = Schedule::new(vec![
        Event::new(30, 150),
        Event::new(200, 100).with_name("Backwards"),
    ]);

    let err = builder.layout(&schedule).unwrap_err();
    match err {
        DayplanError::InvalidEvent(invalid) => {
            assert_eq!(invalid.index(), 1);
            assert_eq!(invalid.label(), Some("Backwards"));
        }
        other => panic!("expected an invalid event, got {other:?}"),
    }
}

#[test]
fn test_builder_with_invalid_config_fails_on_render() {
    let config = AppConfig::new(
        CalendarConfig::new(600.0, 720.0, 21, 9),
        StyleConfig::default(),
    );
    let builder = DayBuilder::new(config);

    let placed = layout_day(&[Event::new(0, 60)]).unwrap();
    let result = builder.render_svg(&placed);
    assert!(matches!(result, Err(DayplanError::Config(_))));
}

#[test]
fn test_builder_rejects_non_finite_calendar() {
    let config: AppConfig =
        toml::from_str("[calendar]\ngutter_width = nan\npadding = inf\n").unwrap();
    let builder = DayBuilder::new(config);

    let result = builder.render_svg(&[]);
    assert!(matches!(result, Err(DayplanError::Config(_))));
}

#[test]
fn test_builder_reusability() {
    let builder = DayBuilder::default();

    let first = builder.parse(SAMPLE_DAY).expect("Failed to parse first day");
    let svg1 = builder
        .render_svg(&builder.layout(&first).expect("Failed to lay out first day"))
        .expect("Failed to render first day");

    let second = builder
        .parse("[[event]]\nstart = 0\nend = 45\nname = \"Standup\"\n")
        .expect("Failed to parse second day");
    let svg2 = builder
        .render_svg(&builder.layout(&second).expect("Failed to lay out second day"))
        .expect("Failed to render second day");

    assert!(svg1.contains("Design review"));
    assert!(svg2.contains("Standup"));
    assert!(!svg2.contains("Design review"));
}
