use super::*;
use proptest::prelude::*;
use regex::Regex;

fn text(s: &str) -> Segment<'_> {
    Segment::Text(s)
}

fn image<'a>(alt: &'a str, url: &'a str) -> Segment<'a> {
    Segment::Image(ImageMarker { alt, url })
}

fn reassemble(content: &str) -> String {
    segments(content).map(|segment| segment.raw()).collect()
}

#[test]
fn text_image_text_keeps_order() {
    let content = "a![门头](/uploads/a.jpg)b";
    assert_eq!(
        parse(content),
        vec![text("a"), image("门头", "/uploads/a.jpg"), text("b")]
    );
}

#[test]
fn adjacent_markers_yield_two_images() {
    let content = "![a](u1)![b](u2)";
    assert_eq!(parse(content), vec![image("a", "u1"), image("b", "u2")]);
}

#[test]
fn plain_text_is_one_segment() {
    assert_eq!(parse("墙面翻新，当天入住"), vec![text("墙面翻新，当天入住")]);
    assert!(parse("").is_empty());
}

#[test]
fn whitespace_between_markers_is_preserved() {
    let content = "![](x)\n\n  ![图片](y)";
    let parsed = parse(content);
    assert_eq!(parsed, vec![image("", "x"), text("\n\n  "), image("图片", "y")]);
    assert!(parsed[1].is_blank());
}

#[test]
fn unterminated_markers_stay_text() {
    for content in ["see ![alt", "see ![alt](", "see ![alt](/a.png", "![alt] (x)"] {
        assert_eq!(parse(content), vec![text(content)], "{content:?}");
    }
}

#[test]
fn empty_url_is_not_a_marker() {
    let content = "![a]() then ![b](c)";
    assert_eq!(
        parse(content),
        vec![text("![a]() then "), image("b", "c")]
    );
}

#[test]
fn alt_may_not_span_lines() {
    let content = "![broken\nalt](x) ![ok](y)";
    assert_eq!(
        parse(content),
        vec![text("![broken\nalt](x) "), image("ok", "y")]
    );
}

#[test]
fn alt_may_contain_brackets() {
    assert_eq!(parse("![a]b](c)"), vec![image("a]b", "c")]);
}

#[test]
fn url_stops_at_first_paren() {
    let content = "![x](/img/a(1).png)";
    assert_eq!(parse(content), vec![image("x", "/img/a(1"), text(".png)")]);
    assert_eq!(reassemble(content), content);
}

#[test]
fn caption_hides_default_and_empty_alt() {
    assert_eq!(ImageMarker { alt: "客厅效果", url: "u" }.caption(), Some("客厅效果"));
    assert_eq!(ImageMarker { alt: DEFAULT_ALT, url: "u" }.caption(), None);
    assert_eq!(ImageMarker { alt: "", url: "u" }.caption(), None);
}

#[test]
fn insert_into_collapsed_selection() {
    let insertion = insert_image("AB", 1..1, "x.png").unwrap();
    assert_eq!(insertion.content, "A![图片](x.png)B");
    assert_eq!(&insertion.content[insertion.cursor..], "B");
}

#[test]
fn insert_replaces_selection() {
    let insertion = insert_image("Hello World", 0..5, "x.png").unwrap();
    assert_eq!(insertion.content, "![图片](x.png) World");
}

#[test]
fn insert_at_ends() {
    assert_eq!(insert_image("", 0..0, "u").unwrap().content, "![图片](u)");
    assert_eq!(insert_image("ab", 2..2, "u").unwrap().content, "ab![图片](u)");
}

#[test]
fn insert_rejects_bad_selections() {
    let (start, end) = (2, 1);
    assert_eq!(
        insert_image("AB", start..end, "u"),
        Err(EditError::Reversed { start: 2, end: 1 })
    );
    assert_eq!(
        insert_image("AB", 0..3, "u"),
        Err(EditError::OutOfBounds { end: 3, len: 2 })
    );
    assert_eq!(insert_image("新闻", 1..1, "u"), Err(EditError::NotCharBoundary(1)));
}

#[test]
fn marker_at_requires_caret_inside() {
    let content = "ab![图片](u.png)cd";
    let start = 2;
    let end = start + "![图片](u.png)".len();

    assert!(marker_at(content, start).is_none());
    assert!(marker_at(content, end).is_none());
    let (range, marker) = marker_at(content, start + 1).unwrap();
    assert_eq!(range, start..end);
    assert_eq!(marker.url, "u.png");
    assert!(marker_at(content, end - 1).is_some());
}

#[test]
fn remove_range_deletes_marker() {
    let content = "ab![图片](u.png)cd";
    let (range, _) = marker_at(content, 4).unwrap();
    assert_eq!(remove_range(content, range).unwrap(), "abcd");
}

#[test]
fn relabel_keeps_url_and_moves_cursor() {
    let content = "ab![图片](u.png)cd";
    let (range, _) = marker_at(content, 4).unwrap();
    let relabeled = relabel_image(content, range, "客厅效果").unwrap();
    assert_eq!(relabeled.content, "ab![客厅效果](u.png)cd");
    assert_eq!(&relabeled.content[relabeled.cursor..], "cd");
    assert_eq!(
        parse(&relabeled.content)[1],
        image("客厅效果", "u.png")
    );
}

#[test]
fn relabel_rejects_breaking_alt_and_non_markers() {
    let content = "ab![图片](u.png)cd";
    let (range, _) = marker_at(content, 4).unwrap();
    assert_eq!(
        relabel_image(content, range.clone(), "两行\n说明"),
        Err(EditError::InvalidAlt)
    );
    assert_eq!(
        relabel_image(content, range.clone(), "a](b"),
        Err(EditError::InvalidAlt)
    );
    assert_eq!(
        relabel_image(content, 0..range.end, "x"),
        Err(EditError::NotAMarker { start: 0, end: range.end })
    );
    assert_eq!(
        relabel_image(content, range.start..range.end - 1, "x"),
        Err(EditError::NotAMarker { start: range.start, end: range.end - 1 })
    );
}

#[test]
fn image_urls_in_order() {
    let content = "intro ![a](/1.jpg) mid ![](/2.jpg)";
    assert_eq!(image_urls(content), vec!["/1.jpg", "/2.jpg"]);
}

/// Segments produced by splitting on the marker pattern with a regex, the way
/// a browser-side renderer would.
fn regex_split(content: &str) -> Vec<Segment<'_>> {
    let re = Regex::new(r"!\[(.*?)\]\(([^)]+)\)").unwrap();
    let mut out = Vec::new();
    let mut last = 0;
    for caps in re.captures_iter(content) {
        let whole = caps.get(0).unwrap();
        if whole.start() > last {
            out.push(Segment::Text(&content[last..whole.start()]));
        }
        out.push(Segment::Image(ImageMarker {
            alt: caps.get(1).unwrap().as_str(),
            url: caps.get(2).unwrap().as_str(),
        }));
        last = whole.end();
    }
    if last < content.len() {
        out.push(Segment::Text(&content[last..]));
    }
    out
}

fn well_formed_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z 装修，\n]{0,8}",
        ("[a-z 图片]{0,5}", "[a-z/._]{1,10}").prop_map(|(alt, url)| format!("![{alt}]({url})")),
    ]
}

proptest! {
    #[test]
    fn parse_is_lossless(content in "[a!\\[\\]()\\n 图]{0,40}") {
        prop_assert_eq!(reassemble(&content), content);
    }

    #[test]
    fn parse_is_lossless_for_any_text(content in ".{0,60}") {
        prop_assert_eq!(reassemble(&content), content);
    }

    #[test]
    fn no_empty_segments(content in "[a!\\[\\]()]{0,30}") {
        prop_assert!(segments(&content).all(|segment| !segment.is_empty()));
    }

    #[test]
    fn agrees_with_regex_on_well_formed_content(
        pieces in prop::collection::vec(well_formed_piece(), 0..6)
    ) {
        let content = pieces.concat();
        prop_assert_eq!(parse(&content), regex_split(&content));
    }

    #[test]
    fn insertion_keeps_surroundings(
        content in "[a-z中 ]{0,20}",
        a in 0usize..=20,
        b in 0usize..=20,
        url in "[a-z/.]{1,12}",
    ) {
        let boundaries: Vec<usize> = content
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(content.len()))
            .collect();
        let start = boundaries[a.min(b) % boundaries.len()];
        let end = boundaries[a.max(b) % boundaries.len()].max(start);

        let insertion = insert_image(&content, start..end, &url).unwrap();
        let inserted = marker(&url);
        prop_assert!(insertion.content.starts_with(&content[..start]));
        prop_assert!(insertion.content.ends_with(&content[end..]));
        prop_assert_eq!(&insertion.content[start..insertion.cursor], inserted.as_str());
        prop_assert!(image_urls(&insertion.content).contains(&url.as_str()));
    }
}
