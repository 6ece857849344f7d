//! Snapshot tests for tagstyle output.
//!
//! Escape characters are shown as `\e` so snapshots stay readable.
//! Run with `cargo insta review` to update snapshots.

use tagstyle_render::Styler;

/// Helper to format markup with the named formatter.
fn render(formatter: &str, input: &str, width: Option<isize>) -> String {
    let mut styler = Styler::new();
    styler.set_formatter(formatter).unwrap();
    styler.format(input, width).unwrap().replace('\x1b', "\\e")
}

fn split(input: &str, width: Option<isize>) -> String {
    Styler::new().split(input, width)
}

// =============================================================================
// ANSI Snapshots
// =============================================================================

#[test]
fn test_snapshot_ansi_nested() {
    let output = render(
        "ansi",
        r#"my <cs color="red">message <cs color="blue" background-color="red" bold="true" blink="true" highlight="true" underline="true">style</cs></cs>"#,
        None,
    );
    insta::assert_snapshot!(output, @r"my \e[31mmessage \e[0m\e[31m\e[34;41;1;4;5;7mstyle\e[0m\e[31m\e[0m\e[31m\e[0m");
}

#[test]
fn test_snapshot_ansi_default_tags() {
    let output = render(
        "ansi",
        "<info>i</info> <success>s</success> <warning>w</warning> <error>e</error>",
        None,
    );
    insta::assert_snapshot!(output, @r"\e[97;44mi\e[0m \e[97;42ms\e[0m \e[97;43mw\e[0m \e[97;41me\e[0m");
}

#[test]
fn test_snapshot_ansi_wrapped() {
    let output = render("ansi", r#"ab <cs color="green" style="underline">cdefgh</cs> ij"#, Some(4));
    insta::assert_snapshot!(output, @r"
    ab \e[32;4mc\e[0m
    \e[32;4mdefg\e[0m
    \e[32;4mh\e[0m ij
    ");
}

#[test]
fn test_snapshot_ansi_true_color() {
    let output = render("ansi", r##"<cs color="#ff8000" background-color="#000000">fire</cs>"##, None);
    insta::assert_snapshot!(output, @r"\e[38;2;255;128;0;48;2;0;0;0mfire\e[0m");
}

// =============================================================================
// Split Snapshots
// =============================================================================

#[test]
fn test_snapshot_split_width() {
    let output = split(r#"my <cs color="red" style="bold">message</cs>"#, Some(6));
    insta::assert_snapshot!(output, @r#"
    my <cs color="red" style="bold">mes</cs>
    <cs color="red" style="bold">sage</cs>
    "#);
}

#[test]
fn test_snapshot_split_nested_registered() {
    let output = split(r#"<warning>careful <cs style="bold">now</cs> please</warning>"#, Some(8));
    insta::assert_snapshot!(output, @r#"
    <warning>careful </warning>
    <warning><cs style="bold">now</cs></warning><warning> plea</warning>
    <warning>se</warning>
    "#);
}

#[test]
fn test_snapshot_split_newline_run() {
    let output = split("<cs color='red' style='bold'>\n\nmessage</cs>", Some(3));
    // Debug form keeps the leading newlines visible
    insta::assert_snapshot!(format!("{output:?}"), @r#""\n\n<cs color='red' style='bold'>mes</cs>\n<cs color='red' style='bold'>sag</cs>\n<cs color='red' style='bold'>e</cs>""#);
}

// =============================================================================
// Plain and Raw Snapshots
// =============================================================================

#[test]
fn test_snapshot_plain() {
    let output = render(
        "plain",
        r#"my <cs color="red">text</cs> with <warning>warning</warning> and <undefined>undefined</undefined>"#,
        None,
    );
    insta::assert_snapshot!(output, @"my text with warning and <undefined>undefined</undefined>");
}

#[test]
fn test_snapshot_raw() {
    let output = render("raw", r#"<cs color="blue">hello</cs>"#, Some(10));
    insta::assert_snapshot!(output, @r#"
    <cs color=
    "blue">hel
    lo</cs>
    "#);
}
