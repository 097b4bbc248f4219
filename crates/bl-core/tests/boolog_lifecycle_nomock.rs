//! Lifecycle tests against real sinks: files on disk and shared memory buffers.

use bl_core::constants::{
    EMOJI_BOOLOG, EMOJI_CAUSED_BY, EMOJI_DEBUG, EMOJI_ERROR, EMOJI_FAILING_TEST,
    EMOJI_INCONCLUSIVE_TEST, EMOJI_OBJECT, EMOJI_PASSING_TEST, EMOJI_TEXT_BOOLOG_CONCLUDE,
};
use bl_core::{Boolog, BoologOptions, MemorySink, SectionStyle, TestBoolog, TestStatus, Theme};
use chrono::{Local, TimeZone};
use std::fs::File;

#[test]
fn conclude_is_idempotent_and_closes_once() {
    let html = MemorySink::new();
    let mut log = Boolog::new(BoologOptions::new("Once").with_html(html.clone()));
    log.info("only line").unwrap();

    let first = log.conclude().unwrap();
    let second = log.conclude().unwrap();

    assert_eq!(first, second);
    assert_eq!(html.close_count(), 1);
    assert!(log.is_concluded());
}

#[test]
fn timestamps_off_discards_explicit_timestamps() {
    let render = |hour: u32| {
        let text = MemorySink::new();
        let mut log = Boolog::new(
            BoologOptions::new("T")
                .with_plain_text(text.clone())
                .with_timestamps(false),
        );
        let ts = Local.with_ymd_and_hms(2023, 6, 1, hour, 0, 0).unwrap();
        log.info_at("x", "", ts).unwrap();
        log.info_at("x", "", ts).unwrap();
        let body = log.conclude().unwrap();
        (text.contents(), body)
    };

    let (text_a, html_a) = render(1);
    let (text_b, html_b) = render(13);
    assert_eq!(text_a, text_b);
    assert_eq!(html_a, html_b);
    assert!(!html_a.contains("2023-06-01"));
}

#[derive(Debug, thiserror::Error)]
#[error("request could not be completed")]
struct RequestFailed {
    #[source]
    cause: std::io::Error,
}

#[test]
fn emojis_off_hides_every_emoji() {
    let text = MemorySink::new();
    let html = MemorySink::new();
    let mut log = Boolog::new(
        BoologOptions::new("Quiet")
            .with_plain_text(text.clone())
            .with_html(html.clone())
            .with_emojis(false)
            .with_theme(Theme::None),
    );
    log.info_with("hello", "🦀").unwrap();
    log.debug("bug").unwrap();
    log.error("broken").unwrap();
    let mut child = log.subsection("child");
    child.info("inner").unwrap();
    log.show_boolog(&mut child).unwrap();

    let mut deep = serde_json::json!("bottom");
    for _ in 0..15 {
        deep = serde_json::json!({ "inner": deep });
    }
    let rendered = log.show(&deep, "deep").unwrap();
    assert!(rendered.contains("Too Many Levels In"));

    let failure = RequestFailed {
        cause: std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
    };
    let rendered = log.show_error(&failure).unwrap();
    assert!(rendered.contains("(show cause)"));

    let mut passing = TestBoolog::new(BoologOptions::new("passing").with_emojis(false));
    passing.check(true, "holds").unwrap();
    let mut failing = TestBoolog::new(BoologOptions::new("failing").with_emojis(false));
    failing.check(false, "does not hold").unwrap();
    let mut unsure = TestBoolog::new(BoologOptions::new("unsure").with_emojis(false));
    unsure.assume(false, "precondition missing").unwrap();
    for test in [&mut passing, &mut failing, &mut unsure] {
        log.show_test_boolog(test).unwrap();
    }
    log.conclude().unwrap();

    let glyphs = [
        "🦀",
        EMOJI_BOOLOG,
        EMOJI_CAUSED_BY,
        EMOJI_DEBUG,
        EMOJI_ERROR,
        EMOJI_FAILING_TEST,
        EMOJI_INCONCLUSIVE_TEST,
        EMOJI_OBJECT,
        EMOJI_PASSING_TEST,
        EMOJI_TEXT_BOOLOG_CONCLUDE,
    ];
    for output in [text.contents(), html.contents()] {
        for glyph in glyphs {
            assert!(!output.contains(glyph), "found {glyph}");
        }
    }
}

#[test]
fn embedding_consumes_the_child() {
    let mut parent = Boolog::new(BoologOptions::new("Parent"));
    let mut child = parent.subsection("Child");
    child.info("child says hi").unwrap();

    parent.show_boolog(&mut child).unwrap();

    assert!(child.is_concluded());
    assert!(child.info("too late").unwrap_err().is_concluded());
    assert!(parent.content().contains("<h2>Child</h2>"));
    assert!(parent.content().contains("child says hi"));
}

#[test]
fn used_flag_tracks_html_writes() {
    let text = MemorySink::new();
    let mut log = Boolog::new(BoologOptions::new("U").with_plain_text(text.clone()));
    assert!(!log.was_used());
    log.echo_plain_text("console only", "", None).unwrap();
    assert!(!log.was_used());
    log.write_to_html("html", "", None).unwrap();
    assert!(log.was_used());
}

#[test]
fn suite_with_passing_test_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("suite.html");
    let mut suite = Boolog::new(
        BoologOptions::new("Suite").with_html(File::create(&path).unwrap()),
    );
    let mut test = suite.subsection("Test1");
    test.info("step one").unwrap();

    suite
        .show_boolog_with(&mut test, EMOJI_PASSING_TEST, SectionStyle::PassingTestResult)
        .unwrap();
    let body = suite.conclude().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.matches("<h2>Test1</h2>").count(), 1);
    assert!(written.contains("<div class=\"boolog passing_test_result\">"));
    assert!(written.contains("step one"));
    assert!(written.ends_with("</html>"));
    assert!(written.contains(&body));
    assert_eq!(suite.conclude().unwrap(), body);
}

#[test]
fn test_boolog_status_drives_embedding() {
    let mut suite = Boolog::new(BoologOptions::new("Suite"));
    let mut test = TestBoolog::new(BoologOptions::new("Checks"));
    test.check(1 + 1 == 2, "arithmetic holds").unwrap();
    assert_eq!(test.status(), TestStatus::Passing);

    let fragment = suite.show_test_boolog(&mut test).unwrap();
    assert!(fragment.contains("passing_test_result"));
    assert!(fragment.contains("arithmetic holds"));
}

#[test]
fn dropping_an_unconcluded_root_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dropped.html");
    {
        let mut log = Boolog::new(
            BoologOptions::new("Dropped").with_html(File::create(&path).unwrap()),
        );
        log.info("before early return").unwrap();
    }
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("before early return"));
    assert!(written.ends_with("</body>\r\n</html>"));
}

#[test]
fn dropping_a_memory_root_closes_it() {
    let html = MemorySink::new();
    drop(Boolog::new(BoologOptions::new("D").with_html(html.clone())));
    assert_eq!(html.close_count(), 1);
}

#[test]
fn panicking_header_falls_back_to_default() {
    let html = MemorySink::new();
    let mut log = Boolog::new(
        BoologOptions::new("Sturdy")
            .with_html(html.clone())
            .with_header(|_| panic!("header exploded")),
    );
    log.info("body survives").unwrap();
    log.conclude().unwrap();

    let written = html.contents();
    assert!(written.contains("Powered by Boolog"));
    assert!(written.contains("&nbsp;Sturdy</h1>"));
    assert!(written.contains("body survives"));
}

#[test]
fn plain_text_file_gets_every_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("console.txt");
    let mut log = Boolog::new(
        BoologOptions::new("File text").with_plain_text(File::create(&path).unwrap()),
    );
    log.info("alpha").unwrap();
    log.skip_line().unwrap();
    log.info("omega").unwrap();
    log.conclude().unwrap();
    drop(log);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\tFile text\n"));
    let alpha = text.find("alpha").unwrap();
    let omega = text.find("omega").unwrap();
    assert!(alpha < omega);
}
