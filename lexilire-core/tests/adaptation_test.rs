use lexilire_core::{
    adapt_text, adapt_text_json, AdaptationStep, Adapter, MonospaceMeasurer, RenderSurface,
    StyleEntry,
};
use serde_json::json;

fn strip_tags(html: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn step(function_id: &str, format: StyleEntry) -> AdaptationStep {
    AdaptationStep {
        function_id: function_id.to_string(),
        format: vec![format],
        ..Default::default()
    }
}

fn color(c: &str) -> StyleEntry {
    StyleEntry {
        color: Some(c.to_string()),
        ..Default::default()
    }
}

#[test]
fn combined_profile_preserves_text() {
    let steps = vec![
        step("alternating_syllables", StyleEntry::default()),
        step("liaisons", color("#888888")),
        step("default", StyleEntry { bold: true, ..Default::default() }),
    ];
    let text = "Les enfants mangent une pomme.";
    let html = adapt_text(text, &steps, &RenderSurface::headless()).unwrap();
    assert_eq!(strip_tags(&html), text);
    assert!(html.contains("lx-liaison"));
    assert!(html.contains("font-weight:bold;"));
}

#[test]
fn profile_from_json() {
    let profile = json!([
        {
            "functionId": "syllables",
            "format": [{"color": "#0066cc"}],
            "params": {"separator": "·"}
        },
        {
            "functionId": "phonemes",
            "format": [{"color": "#d40000", "keys": ["an", "on", "in"]}]
        }
    ])
    .to_string();
    let html = adapt_text_json("maman", &profile, &RenderSurface::headless()).unwrap();
    // syllable separator is presentation only
    assert_eq!(strip_tags(&html), "ma·man");
    assert!(html.contains("lx-syllable"));
    assert!(html.contains("color:#d40000;"));
}

#[test]
fn unknown_function_in_json_profile() {
    let profile = r#"[{"functionId": "glitter"}]"#;
    let err = adapt_text_json("chat", profile, &RenderSurface::headless()).unwrap_err();
    assert!(err.to_string().contains("glitter"));
}

#[test]
fn reading_rule_follows_surface_width() {
    let measurer = MonospaceMeasurer {
        char_width: 1.0,
        line_height: 12.0,
    };
    let mut rule = step(
        "reading_rule",
        StyleEntry {
            background: Some("#ffff99".to_string()),
            ..Default::default()
        },
    );
    rule.params.insert("line".into(), json!(0));

    // wide surface: one visual line, the whole text is highlighted
    let wide = adapt_text(
        "le petit chat dort",
        std::slice::from_ref(&rule),
        &RenderSurface::new(&measurer, 100.0),
    )
    .unwrap();
    assert_eq!(wide.matches("lx-rule").count(), 1);
    assert!(wide.starts_with(r#"<span class="lx-rule""#));

    // narrow surface: highlight covers only the first line
    let narrow = adapt_text(
        "le petit chat dort",
        std::slice::from_ref(&rule),
        &RenderSurface::new(&measurer, 9.0),
    )
    .unwrap();
    assert_eq!(
        narrow,
        concat!(
            r#"<span class="lx-rule" style="background-color:#ffff99;">"#,
            r#"<span class="lx-word">le</span> <span class="lx-word">petit</span> "#,
            r#"</span>"#,
            r#"<span class="lx-word">chat</span> <span class="lx-word">dort</span>"#
        )
    );
}

#[test]
fn adapter_reuse_keeps_rotating() {
    let mut adapter =
        Adapter::from_profile(&[step("alternating_words", StyleEntry::default())]).unwrap();
    let surface = RenderSurface::headless();
    let a = adapter.adapt("mot", &surface);
    let b = adapter.adapt("mot", &surface);
    let c = adapter.adapt("mot", &surface);
    let d = adapter.adapt("mot", &surface);
    assert_ne!(a, b);
    assert_ne!(b, c);
    // palette of three, fourth render wraps around
    assert_eq!(a, d);
}

#[test]
fn two_phase_rendering_matches_adapt() {
    let measurer = MonospaceMeasurer {
        char_width: 1.0,
        line_height: 12.0,
    };
    let surface = RenderSurface::new(&measurer, 9.0);
    let steps = [
        step("syllables", color("#0066cc")),
        step("alternating_lines", StyleEntry::default()),
    ];
    let text = "le petit chat dort";

    let mut one_shot = Adapter::from_profile(&steps).unwrap();
    let expected = one_shot.adapt(text, &surface);

    let mut staged = Adapter::from_profile(&steps).unwrap();
    let rendered = staged.render(text, &surface);
    assert!(!rendered.contains("lx-line"));
    assert_eq!(staged.post_process(&rendered, &surface), expected);
}

#[test]
fn reader_step_configures_speech_only() {
    let mut reader = step("reader", StyleEntry::default());
    reader.params.insert("rate".into(), json!(0.8));
    let mut adapter = Adapter::from_profile(&[reader]).unwrap();
    let html = adapter.adapt("lire", &RenderSurface::headless());
    assert_eq!(html, r#"<span class="lx-word">lire</span>"#);
    let config = adapter.reader_config().unwrap();
    assert_eq!(config.rate, 0.8);
    assert_eq!(config.voice_index, 0);
}

#[test]
fn multiline_text_keeps_hard_breaks() {
    let html = adapt_text("un\ndeux", &[], &RenderSurface::headless()).unwrap();
    assert_eq!(
        html,
        r#"<span class="lx-word">un</span><br/><span class="lx-word">deux</span>"#
    );
}
