use dcbor::prelude::*;
use indoc::indoc;

fn known_tags() -> TagsStore {
    TagsStore::new([Tag::new(1, "date")])
}

#[allow(clippy::too_many_arguments)]
fn run(
    cbor: CBOR,
    description: &str,
    debug_description: &str,
    diagnostic: &str,
    diagnostic_annotated: &str,
    hex: &str,
    hex_annotated: &str,
) {
    let tags = known_tags();

    assert_eq!(format!("{}", cbor), description);
    assert_eq!(format!("{:?}", cbor), debug_description);
    assert_eq!(cbor.diagnostic(), diagnostic);
    assert_eq!(
        cbor.diagnostic_opt(
            &DiagFormatOpts::default().annotate(true).tags(TagsStoreOpt::Custom(&tags))
        ),
        diagnostic_annotated
    );
    assert_eq!(cbor.hex(), hex);
    assert_eq!(
        cbor.hex_opt(HexFormatOpts::default().annotate(true).context(TagsStoreOpt::Custom(&tags))),
        hex_annotated
    );
}

#[test]
fn format_simple() {
    run(CBOR::r#false(), "false", "simple(false)", "false", "false", "f4", "f4  # false");
    run(CBOR::r#true(), "true", "simple(true)", "true", "true", "f5", "f5  # true");
    run(CBOR::null(), "null", "simple(null)", "null", "null", "f6", "f6  # null");
}

#[test]
fn format_unsigned() {
    run(CBOR::from(0u64), "0", "unsigned(0)", "0", "0", "00", "00  # unsigned(0)");
    run(CBOR::from(23u64), "23", "unsigned(23)", "23", "23", "17", "17  # unsigned(23)");
    run(
        CBOR::from(65546u64),
        "65546",
        "unsigned(65546)",
        "65546",
        "65546",
        "1a0001000a",
        "1a0001000a  # unsigned(65546)",
    );
    run(
        CBOR::from(1000000000u64),
        "1000000000",
        "unsigned(1000000000)",
        "1000000000",
        "1000000000",
        "1a3b9aca00",
        "1a3b9aca00  # unsigned(1000000000)",
    );
}

#[test]
fn format_negative() {
    run((-1i64).into(), "-1", "negative(-1)", "-1", "-1", "20", "20  # negative(-1)");
    run((-1000i64).into(), "-1000", "negative(-1000)", "-1000", "-1000", "3903e7", "3903e7  # negative(-1000)");
    run(
        (-1000000i64).into(),
        "-1000000",
        "negative(-1000000)",
        "-1000000",
        "-1000000",
        "3a000f423f",
        "3a000f423f  # negative(-1000000)",
    );
}

#[test]
fn format_string() {
    run(
        "Test".into(),
        r#""Test""#,
        r#"text("Test")"#,
        r#""Test""#,
        r#""Test""#,
        "6454657374",
        indoc! {r#"
        64              # text(4)
            54657374    # "Test"
        "#}
        .trim(),
    )
}

#[test]
fn format_simple_array() {
    let a: CBOR = vec![CBOR::from(1u64), CBOR::from(2u64), CBOR::from(3u64)].into();
    run(
        a,
        "[1, 2, 3]",
        "array([unsigned(1), unsigned(2), unsigned(3)])",
        "[1, 2, 3]",
        "[1, 2, 3]",
        "83010203",
        indoc! {r#"
        83      # array(3)
            01  # unsigned(1)
            02  # unsigned(2)
            03  # unsigned(3)
        "#}
        .trim(),
    )
}

#[test]
fn format_nested_array() {
    let a: CBOR = vec![CBOR::from(1u64), CBOR::from(2u64), CBOR::from(3u64)].into();
    let b: CBOR = vec![CBOR::from("A"), CBOR::from("B"), CBOR::from("C")].into();
    let c: CBOR = vec![a, b].into();
    run(
        c,
        r#"[[1, 2, 3], ["A", "B", "C"]]"#,
        r#"array([array([unsigned(1), unsigned(2), unsigned(3)]), array([text("A"), text("B"), text("C")])])"#,
        indoc! {r#"
        [
            [1, 2, 3],
            ["A", "B", "C"]
        ]
        "#}
        .trim(),
        indoc! {r#"
        [
            [1, 2, 3],
            ["A", "B", "C"]
        ]
        "#}
        .trim(),
        "828301020383614161426143",
        indoc! {r#"
        82              # array(2)
            83          # array(3)
                01      # unsigned(1)
                02      # unsigned(2)
                03      # unsigned(3)
            83          # array(3)
                61      # text(1)
                    41  # "A"
                61      # text(1)
                    42  # "B"
                61      # text(1)
                    43  # "C"
        "#}
        .trim(),
    )
}

#[test]
fn format_map() {
    let mut map = Map::new();
    map.insert(1, "A");
    map.insert(2, "B");
    run(
        map.into(),
        r#"{1: "A", 2: "B"}"#,
        r#"map({0x01: (unsigned(1), text("A")), 0x02: (unsigned(2), text("B"))})"#,
        r#"{1: "A", 2: "B"}"#,
        r#"{1: "A", 2: "B"}"#,
        "a2016141026142",
        indoc! {r#"
        a2          # map(2)
            01      # unsigned(1)
            61      # text(1)
                41  # "A"
            02      # unsigned(2)
            61      # text(1)
                42  # "B"
        "#}
        .trim(),
    )
}

#[test]
fn format_tagged() {
    let a = CBOR::tagged_value(100, "Hello");
    run(
        a,
        r#"100("Hello")"#,
        r#"tagged(100, text("Hello"))"#,
        r#"100("Hello")"#,
        r#"100("Hello")"#,
        "d8646548656c6c6f",
        indoc! {r#"
        d8 64               # tag(100)
            65              # text(5)
                48656c6c6f  # "Hello"
        "#}
        .trim(),
    )
}

#[test]
fn format_date() {
    run(
        Date::from_timestamp(-100.0).into(),
        "1(-100)",
        "tagged(1, negative(-100))",
        "1(-100)",
        "1(-100)   / date /",
        "c13863",
        "c1          # tag(1) date\n    3863    # negative(-100)",
    );

    run(
        Date::from_timestamp(1675854714.0).into(),
        "1(1675854714)",
        "tagged(1, unsigned(1675854714))",
        "1(1675854714)",
        "1(1675854714)   / date /",
        "c11a63e3837a",
        "c1              # tag(1) date\n    1a63e3837a  # unsigned(1675854714)",
    );
}

#[test]
fn format_key_order() {
    let mut m = Map::new();
    m.insert(-1, 3);
    m.insert(vec![-1], 7);
    m.insert("z", 4);
    m.insert(10, 1);
    m.insert(false, 8);
    m.insert(100, 2);
    m.insert("aa", 5);
    m.insert(vec![100], 6);

    let cbor: CBOR = m.into();
    let description = r#"{10: 1, 100: 2, -1: 3, "z": 4, "aa": 5, [100]: 6, [-1]: 7, false: 8}"#;
    let debug_description = r#"map({0x0a: (unsigned(10), unsigned(1)), 0x1864: (unsigned(100), unsigned(2)), 0x20: (negative(-1), unsigned(3)), 0x617a: (text("z"), unsigned(4)), 0x626161: (text("aa"), unsigned(5)), 0x811864: (array([unsigned(100)]), unsigned(6)), 0x8120: (array([negative(-1)]), unsigned(7)), 0xf4: (simple(false), unsigned(8))})"#;
    let diagnostic = indoc! {r#"
    {
        10:
        1,
        100:
        2,
        -1:
        3,
        "z":
        4,
        "aa":
        5,
        [100]:
        6,
        [-1]:
        7,
        false:
        8
    }
    "#}
    .trim();
    assert_eq!(format!("{}", cbor), description);
    assert_eq!(format!("{:?}", cbor), debug_description);
    assert_eq!(cbor.diagnostic(), diagnostic);
}

#[test]
fn format_structure() {
    let encoded_cbor_hex = "d83183015829536f6d65206d7973746572696573206172656e2774206d65616e7420746f20626520736f6c7665642e82d902c3820158402b9238e19eafbc154b49ec89edd4e0fb1368e97332c6913b4beb637d1875824f3e43bd7fb0c41fb574f08ce00247413d3ce2d9466e0ccfa4a89b92504982710ad902c3820158400f9c7af36804ffe5313c00115e5a31aa56814abaa77ff301da53d48613496e9c51a98b36d55f6fb5634fdb0123910cfa4904f1c60523df41013dc3749b377900";
    let cbor = CBOR::try_from_hex(encoded_cbor_hex).unwrap();
    let description = "49([1, h'536f6d65206d7973746572696573206172656e2774206d65616e7420746f20626520736f6c7665642e', [707([1, h'2b9238e19eafbc154b49ec89edd4e0fb1368e97332c6913b4beb637d1875824f3e43bd7fb0c41fb574f08ce00247413d3ce2d9466e0ccfa4a89b92504982710a']), 707([1, h'0f9c7af36804ffe5313c00115e5a31aa56814abaa77ff301da53d48613496e9c51a98b36d55f6fb5634fdb0123910cfa4904f1c60523df41013dc3749b377900'])]])";
    assert_eq!(format!("{}", cbor), description);
    let diagnostic = indoc! {"
    49(
        [
            1,
            h'536f6d65206d7973746572696573206172656e2774206d65616e7420746f20626520736f6c7665642e',
            [
                707(
                    [
                        1,
                        h'2b9238e19eafbc154b49ec89edd4e0fb1368e97332c6913b4beb637d1875824f3e43bd7fb0c41fb574f08ce00247413d3ce2d9466e0ccfa4a89b92504982710a'
                    ]
                ),
                707(
                    [
                        1,
                        h'0f9c7af36804ffe5313c00115e5a31aa56814abaa77ff301da53d48613496e9c51a98b36d55f6fb5634fdb0123910cfa4904f1c60523df41013dc3749b377900'
                    ]
                )
            ]
        ]
    )
    "}.trim();
    assert_eq!(
        cbor.diagnostic_opt(&DiagFormatOpts::default().annotate(true).tags(TagsStoreOpt::None)),
        diagnostic
    );
}
