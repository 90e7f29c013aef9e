//! End-to-end checks against hand-verified fixtures.

use ftui_sunburst::{
    ConstantWidth, NoGap, Path, PathValues, Sunburst, SunburstConfig, SunburstError,
    SunburstLayout, complete,
};

fn p(s: &str) -> Path {
    Path::from_chars(s).unwrap()
}

fn named(s: &str) -> Path {
    s.parse().unwrap()
}

fn digits() -> PathValues {
    PathValues::from_chars([
        ("1", 5.0),
        ("111", 92.0),
        ("1111", 15.0),
        ("1112", 99.0),
        ("112", 0.0),
        ("1121", 70.0),
        ("113", 27.0),
        ("12", 51.0),
        ("121", 43.0),
        ("122", 29.0),
        ("13", 69.0),
        ("2", 29.0),
        ("211", 43.0),
    ])
    .unwrap()
}

fn lorem() -> PathValues {
    PathValues::from_delimited(
        [
            ("ipsum", 40.45),
            ("ipsum/eirmod", 29.34),
            ("ipsum/eirmod/dolor", 94.4),
            ("lorem", 36.12),
            ("lorem/sadipscing/dolor", 44.32),
            ("lorem/sadipscing/lorem", 37.15),
            ("lorem/sadipscing/nonumy", 23.98),
            ("lorem/eirmod", 11.12),
            ("lorem/eirmod/lorem", 45.65),
            ("lorem/sadipscing", 79.67),
        ],
        '/',
    )
    .unwrap()
}

fn with_order(order: &str) -> SunburstConfig {
    SunburstConfig {
        order: order.parse().unwrap(),
        ..SunburstConfig::default()
    }
}

/// Segment names of `parent`'s children, in display order.
///
/// Only the level directly below `parent` is searched; the root is its own
/// parent at level 0.
fn children(layout: &SunburstLayout, parent: &str) -> Vec<String> {
    let parent = named(parent);
    layout
        .structure()
        .level(parent.depth() + 1)
        .into_iter()
        .flat_map(|level| level.groups.iter())
        .find(|group| group.parent == parent)
        .map(|group| {
            group
                .members
                .iter()
                .filter_map(|path| path.last().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn digits_complete_to_cumulative_sums() {
    let completed = complete(&digits()).unwrap();
    let expected = [
        ("", 572.0),
        ("1", 500.0),
        ("11", 303.0),
        ("111", 206.0),
        ("1111", 15.0),
        ("1112", 99.0),
        ("112", 70.0),
        ("1121", 70.0),
        ("113", 27.0),
        ("12", 123.0),
        ("121", 43.0),
        ("122", 29.0),
        ("13", 69.0),
        ("2", 72.0),
        ("21", 43.0),
        ("211", 43.0),
    ];
    assert_eq!(completed.len(), expected.len());
    for (path, value) in expected {
        assert_eq!(completed.get(&p(path)), Some(value), "path {path:?}");
    }
}

#[test]
fn digits_layout_widths() {
    let mut chart = Sunburst::new(digits());
    let layout = chart.layout().unwrap();

    let one = layout.get(&p("1")).unwrap();
    assert!((one.angles.width() - 360.0 * 500.0 / 572.0).abs() < 1e-9);
    assert!((one.angles.width() - 314.685).abs() < 1e-3);
    // largest first: "1" opens the circle
    assert_eq!(one.angles.start, 0.0);

    let two = layout.get(&p("2")).unwrap();
    assert_eq!(two.angles.start, one.angles.end);
    assert!((two.angles.end - 360.0).abs() < 1e-9);

    // "21" is an inserted ancestor, sharing its only child's span
    let inserted = layout.get(&p("21")).unwrap();
    let leaf = layout.get(&p("211")).unwrap();
    assert_eq!(inserted.angles, leaf.angles);
    assert_eq!(inserted.value, 43.0);

    assert_eq!(layout.max_level(), 4);
    assert_eq!(layout.len(), 16);
}

#[test]
fn digits_ring_radii() {
    let layout = SunburstLayout::compute(
        &digits(),
        &SunburstConfig::default(),
        &ConstantWidth(0.4),
        &NoGap,
    )
    .unwrap();
    for wedge in layout.wedges() {
        if wedge.path.is_root() {
            assert!(!wedge.visible);
            continue;
        }
        let expected_inner = 0.4 * (wedge.depth - 1) as f64;
        assert!((wedge.inner_radius - expected_inner).abs() < 1e-12);
        assert!((wedge.outer_radius - expected_inner - 0.4).abs() < 1e-12);
    }
}

#[test]
fn explicit_root_is_rejected_before_work() {
    let mut input = digits();
    input.insert(Path::root(), 1.0).unwrap();
    assert_eq!(
        complete(&input),
        Err(SunburstError::InvalidInput { path: Path::root() })
    );
    let mut chart = Sunburst::new(input);
    assert!(matches!(
        chart.layout(),
        Err(SunburstError::InvalidInput { .. })
    ));
}

#[test]
fn lorem_orders() {
    let cases = [
        ("keep", ["ipsum", "lorem"], ["eirmod", "sadipscing"]),
        ("key", ["ipsum", "lorem"], ["eirmod", "sadipscing"]),
        ("value", ["ipsum", "lorem"], ["eirmod", "sadipscing"]),
        ("value reverse", ["lorem", "ipsum"], ["sadipscing", "eirmod"]),
        ("key reverse", ["lorem", "ipsum"], ["sadipscing", "eirmod"]),
    ];
    for (order, top, under_lorem) in cases {
        let mut chart = Sunburst::new(lorem()).with_config(with_order(order));
        let layout = chart.layout().unwrap();
        assert_eq!(children(layout, ""), top, "order {order:?}");
        assert_eq!(children(layout, "lorem"), under_lorem, "order {order:?}");
    }
}

#[test]
fn root_children_live_on_level_one() {
    let mut chart = Sunburst::new(lorem());
    let layout = chart.layout().unwrap();
    let level0 = layout.structure().level(0).unwrap();
    assert_eq!(level0.groups.len(), 1);
    assert_eq!(level0.groups[0].parent, Path::root());
    assert_eq!(level0.groups[0].members, vec![Path::root()]);
    assert_eq!(children(layout, ""), ["lorem", "ipsum"]);
    assert_eq!(children(layout, "ipsum/eirmod"), ["dolor"]);
    assert!(children(layout, "ipsum/eirmod/dolor").is_empty());
}

#[test]
fn lorem_values_and_spans() {
    let mut chart = Sunburst::new(lorem()).with_config(with_order("key"));
    let layout = chart.layout().unwrap();
    let total = 442.2;
    assert!((layout.total() - total).abs() < 1e-9);

    let ipsum = layout.get(&named("ipsum")).unwrap();
    assert!((ipsum.value - 164.19).abs() < 1e-9);
    assert!((ipsum.angles.width() - 360.0 * 164.19 / total).abs() < 1e-9);

    let lorem = layout.get(&named("lorem")).unwrap();
    assert!((lorem.value - 278.01).abs() < 1e-9);
    assert_eq!(lorem.angles.start, ipsum.angles.end);

    // "lorem" holds its own 36.12 beyond its children
    let sadipscing = layout.get(&named("lorem/sadipscing")).unwrap();
    let eirmod = layout.get(&named("lorem/eirmod")).unwrap();
    assert!(eirmod.angles.width() + sadipscing.angles.width() < lorem.angles.width());
    assert!(sadipscing.angles.end < lorem.angles.end);
}
