//! Integration tests for the full parse -> render -> splice pipeline.

use std::fs;

use resumd::{parse_str, render, JsonFormat, RenderOptions, Resumd};

const RESUME_MD: &str = "\
# Resume

| Ezra Newman | SKILLS Fluent in Python and Rust. Experienced with web tooling (HTML) Practiced in technical writing. ACTIVITIES Reading, hiking, and board games. GETS ME UP IN THE MORNING Building tools people actually use. |
| :---------- | :------- |
| **EDUCATION BlueDot** — *Certificate* January 2023 - Present GPA: 3.9. Relevant CS Coursework: Algorithms, Systems. Relevant Philosophy Coursework: Ethics, Logic. Remaining notes. **State University** — *BS* *Computer Science* September 2015 - June 2019 Graduated with honors. **WORK EXPERIENCE Acme Corp** — *Engineer* January 2020 - Present Built the [widget pipeline](https://example.com/widgets) end\\-to\\-end. **Initech** June 2019 - December 2019 Maintained internal tooling. |  |
";

const TARGET_HTML: &str = "\
<!DOCTYPE html>
<html>
\t<body>
\t\t<main>
\t\t\t<ol class=\"resume-list\">
\t\t\t\t<li>stale content</li>
\t\t\t</ol>
\t\t</main>
\t</body>
</html>
";

#[test]
fn test_parse_sidebar_end_to_end() {
    let md = "\
| Name | SKILLS Fluent in X. Experienced with Y. ACTIVITIES Reading. GETS ME UP IN THE MORNING Coffee. |
| :--- | :--- |
| body |  |
";
    let resume = parse_str(md).unwrap();
    assert_eq!(resume.skills, vec!["Fluent in X.", "Experienced with Y."]);
    assert_eq!(resume.activities, "Reading.");
    assert_eq!(resume.morning_motivation, "Coffee.");
}

#[test]
fn test_parse_education_entry_end_to_end() {
    let resume = parse_str(RESUME_MD).unwrap();

    assert_eq!(resume.education.len(), 2);
    let bluedot = &resume.education[0];
    assert_eq!(bluedot.title, "BlueDot");
    assert_eq!(bluedot.subtitle, "Certificate");
    assert!(bluedot.body.starts_with("January 2023 - Present"));

    // Consecutive italic runs join into a single subtitle.
    assert_eq!(resume.education[1].subtitle, "BS Computer Science");

    assert_eq!(resume.experience.len(), 2);
    assert_eq!(resume.experience[0].title, "Acme Corp");
    // Links reduce to display text; escaped hyphens are unescaped.
    assert_eq!(
        resume.experience[0].body,
        "January 2020 - Present Built the widget pipeline end-to-end."
    );
    assert_eq!(resume.experience[1].subtitle, "");
}

#[test]
fn test_rendered_fragment_shape() {
    let resume = parse_str(RESUME_MD).unwrap();
    let html = render::to_html(&resume, &RenderOptions::default()).unwrap();

    // The BlueDot entry: date line first, then the peeled paragraphs.
    assert!(html.contains("\t\t\t\t\t<h4>BlueDot&mdash;Certificate</h4>"));
    assert!(html.contains("\t\t\t\t\t<p>January 2023 - Present</p>"));
    assert!(html.contains("\t\t\t\t\t<p>GPA: 3.9.</p>"));
    assert!(html.contains("\t\t\t\t\t<p>Relevant CS Coursework: Algorithms, Systems.</p>"));
    assert!(html.contains("\t\t\t\t\t<p>Relevant Philosophy Coursework: Ethics, Logic.</p>"));
    assert!(html.contains("\t\t\t\t\t<p>Remaining notes.</p>"));

    // Experience bodies stay as one paragraph after the date line.
    assert!(html.contains("\t\t\t\t\t<p>Built the widget pipeline end-to-end.</p>"));

    // Entries without a subtitle render a plain title heading.
    assert!(html.contains("\t\t\t\t\t<h4>Initech</h4>"));
}

#[test]
fn test_json_round_trips_model() {
    let resume = parse_str(RESUME_MD).unwrap();
    let json = render::to_json(&resume, JsonFormat::Compact).unwrap();
    let back: resumd::Resume = serde_json::from_str(&json).unwrap();
    assert_eq!(back.skills, resume.skills);
    assert_eq!(back.education, resume.education);
}

#[test]
fn test_sync_file_updates_target_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let md_path = dir.path().join("resume.md");
    let html_path = dir.path().join("index.html");
    fs::write(&md_path, RESUME_MD).unwrap();
    fs::write(&html_path, TARGET_HTML).unwrap();

    let resume = resumd::sync_file(&md_path, &html_path).unwrap();
    assert_eq!(resume.entry_count(), 4);

    let updated = fs::read_to_string(&html_path).unwrap();
    assert!(!updated.contains("stale content"));
    assert!(updated.contains("<h3 class=\"tag\">education</h3>"));
    // Everything outside the region is preserved.
    assert!(updated.starts_with("<!DOCTYPE html>\n<html>\n\t<body>\n\t\t<main>\n"));
    assert!(updated.ends_with("\t\t\t</ol>\n\t\t</main>\n\t</body>\n</html>\n"));
}

#[test]
fn test_sync_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let md_path = dir.path().join("resume.md");
    let html_path = dir.path().join("index.html");
    fs::write(&md_path, RESUME_MD).unwrap();
    fs::write(&html_path, TARGET_HTML).unwrap();

    resumd::sync_file(&md_path, &html_path).unwrap();
    let first = fs::read(&html_path).unwrap();

    resumd::sync_file(&md_path, &html_path).unwrap();
    let second = fs::read(&html_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_sync_missing_region_fails_and_leaves_target_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let md_path = dir.path().join("resume.md");
    let html_path = dir.path().join("index.html");
    fs::write(&md_path, RESUME_MD).unwrap();
    fs::write(&html_path, "<html><body>no region</body></html>\n").unwrap();

    let result = resumd::sync_file(&md_path, &html_path);
    assert!(matches!(result, Err(resumd::Error::RegionNotFound(_))));

    let untouched = fs::read_to_string(&html_path).unwrap();
    assert_eq!(untouched, "<html><body>no region</body></html>\n");
}

#[test]
fn test_builder_pipeline_with_custom_indent() {
    let html = Resumd::new()
        .with_indent_level(1)
        .parse_str(RESUME_MD)
        .unwrap()
        .to_html()
        .unwrap();
    assert!(html.starts_with("\t<li>\n\t\t<h3 class=\"tag\">education</h3>"));
}
