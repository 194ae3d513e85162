#[cfg(test)]
mod tests {
    use folio_core::*;
    use folio_ui::*;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;

    use crate::html::{escape, modifier_css, text_css};
    use crate::*;

    // Serializes tests that touch the process-wide active section.
    static SECTION_LOCK: Mutex<()> = parking_lot::const_mutex(());

    fn render(view: &View) -> String {
        HtmlRenderer::new(HtmlOptions::default())
            .fragment(view)
            .unwrap()
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn hidden_reveal_wrapper_markup() {
        let r = Reveal::with_id(7, RevealConfig::delayed(120));
        let html = render(&RevealOnVisible(&r, Text("hi")));
        assert_eq!(
            html,
            "<div data-folio-id=\"7\" data-reveal style=\"opacity:0;transform:translateY(32px);\
             transition:opacity 0.6s ease 120ms, transform 0.6s ease 120ms;\">\
             <span style=\"font-family:&#39;JetBrains Mono&#39;,monospace;font-size:15px;color:#ffffff;\">hi</span></div>"
        );
    }

    #[test]
    fn fail_open_reveal_renders_fully_visible() {
        let r = Reveal::with_id(3, RevealConfig::default());
        r.mount(None);
        let css = modifier_css(&r.style_modifier());
        assert!(css.starts_with("opacity:1;transform:translateY(0px);"));
        assert!(css.contains("transition:opacity 0.6s ease 0ms"));
    }

    #[test]
    fn bold_spans_and_line_breaks() {
        let mut spans = parse_emphasis("a **b** c");
        spans.push(TextSpan::line_break());
        spans.push(TextSpan::plain("<d>").colored(Color::from_hex("#e8ff47")));
        let html = render(&RichText(spans).tag(TextTag::Paragraph));
        assert!(html.starts_with("<p style="));
        assert!(html.ends_with(
            ">a <strong>b</strong> c<br><span style=\"color:#e8ff47\">&lt;d&gt;</span></p>"
        ));
    }

    #[test]
    fn section_carries_anchor_and_id() {
        let v = Section(4, "about", Modifier::new().padding(10.0));
        assert_eq!(
            render(&v),
            "<section id=\"about\" data-folio-id=\"4\" style=\"padding:10px;\"></section>"
        );
    }

    #[test]
    fn link_opens_new_tab() {
        let html = render(&Link("GitHub", "https://github.com/x").new_tab());
        assert!(html.starts_with(
            "<a href=\"https://github.com/x\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert!(html.ends_with(">GitHub</a>"));
    }

    #[test]
    fn nested_surface_is_rejected() {
        let inner = Surface(Modifier::new(), Box(Modifier::new()));
        let outer = Surface(Modifier::new(), Box(Modifier::new()).child(inner));
        match HtmlRenderer::new(HtmlOptions::default()).fragment(&outer) {
            Err(RenderError::Unsupported { kind, .. }) => assert_eq!(kind, "Surface"),
            other => panic!("expected unsupported, got {other:?}"),
        }
    }

    #[test]
    fn document_shell() {
        let mut r = HtmlRenderer::new(HtmlOptions {
            title: "A & B".into(),
            description: Some("desc".into()),
            stylesheet: "body{background:#0a0a0a}".into(),
            script: Some("./portfolio.js".into()),
            ..Default::default()
        });
        let doc = r
            .render(&Surface(Modifier::new(), Text("x")))
            .unwrap();
        assert!(doc.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<meta name=\"description\" content=\"desc\">"));
        assert!(doc.contains("body{background:#0a0a0a}</style>"));
        assert!(doc.contains("<main><span"));
        assert!(doc.contains("<script type=\"module\" src=\"./portfolio.js\"></script>"));
    }

    #[test]
    fn grid_and_borders_css() {
        let m = Modifier::new()
            .grid(vec![1.0, 1.0], 2.0)
            .border_top(1.0, Color::from_hex("#222"))
            .fixed_bottom()
            .backdrop_blur(12.0);
        assert_eq!(
            modifier_css(&m),
            "position:fixed;left:0;right:0;bottom:0;display:grid;grid-template-columns:1fr 1fr;\
             gap:2px;border-top:1px solid #222222;backdrop-filter:blur(12px);"
        );
    }

    #[test]
    fn text_style_css() {
        let style = TextStyle {
            font: FontFamily::Display,
            size: 72.0,
            weight: Some(900),
            letter_spacing_em: Some(-0.02),
            uppercase: true,
            ..Default::default()
        };
        assert_eq!(
            text_css(&style),
            "font-family:'Playfair Display',serif;font-size:72px;color:#ffffff;\
             font-weight:900;letter-spacing:-0.02em;text-transform:uppercase;"
        );
    }

    fn tall_page(sched: &mut Scheduler, reveals: &[Reveal]) -> View {
        let blocks: Vec<View> = reveals
            .iter()
            .map(|r| RevealOnVisible(r, Box(Modifier::new().height(400.0))))
            .collect();
        let mut root = Surface(
            Modifier::new(),
            Column(Modifier::new().gap(100.0)).child(blocks),
        );
        assign_ids(&mut root, sched);
        root
    }

    #[test]
    fn json_block_cannot_close_its_script() {
        assert_eq!(
            json_script("cfg", r#"{"note":"</script>"}"#),
            r#"<script type="application/json" id="cfg">{"note":"\u003c/script>"}</script>"#
        );
    }

    #[test]
    fn attach_keeps_going_past_a_wrapper_that_fails_to_bind() {
        let host = ViewportHost::new(1000.0, 600.0);
        host.set_bounds(1, Rect::new(0.0, 0.0, 1000.0, 100.0));
        host.set_bounds(3, Rect::new(0.0, 2000.0, 1000.0, 100.0));
        let obs = host.as_observer();

        let mut forced = Vec::new();
        let reveals = attach_reveals(
            [(1, "hero"), (2, "broken"), (3, "footer")],
            &RevealConfig::default(),
            Some(&obs),
            |r, wrapper: &&str| {
                if *wrapper == "broken" {
                    Err(ObserveError::UnknownTarget(r.id()))
                } else {
                    Ok(())
                }
            },
            |wrapper, id| forced.push((*wrapper, id)),
        );

        assert_eq!(forced, vec![("broken", 2)]);
        let ids: Vec<ViewId> = reveals.iter().map(Reveal::id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(host.subscription_count(), 2);

        host.flush();
        let shown: Vec<bool> = reveals.iter().map(Reveal::is_visible).collect();
        assert_eq!(shown, vec![true, false]);
    }

    #[test]
    fn attach_without_observer_shows_everything() {
        let reveals = attach_reveals(
            [(4, ()), (5, ())],
            &RevealConfig::default(),
            None,
            |_, _| Ok(()),
            |_, id| panic!("wrapper {id} should have bound"),
        );
        assert!(reveals.iter().all(Reveal::is_visible));
        assert!(reveals.iter().all(|r| r.phase() == RevealPhase::FailOpen));
    }

    #[test]
    fn layout_driven_reveals_follow_scroll() {
        let mut sched = Scheduler::new();
        let reveals: Vec<Reveal> = (0..4)
            .map(|_| Reveal::new(&mut sched, RevealConfig::default()))
            .collect();
        let root = tall_page(&mut sched, &reveals);

        let host = ViewportHost::new(1000.0, 600.0);
        host.set_layout(&layout(&root, 1000.0, LayoutMetrics::default()));
        let obs = host.as_observer();
        for r in &reveals {
            r.mount(Some(&obs));
        }
        host.flush();

        // Blocks sit at 0, 500, 1000, 1500; the first 600px are on screen.
        let shown: Vec<bool> = reveals.iter().map(Reveal::is_visible).collect();
        assert_eq!(shown, vec![true, true, false, false]);

        host.scroll_to(1000.0);
        host.flush();
        let shown: Vec<bool> = reveals.iter().map(Reveal::is_visible).collect();
        assert_eq!(shown, vec![false, false, true, true]);

        drop(reveals);
        assert_eq!(host.subscription_count(), 0);
    }

    #[test]
    fn section_tracker_over_viewport_host() {
        let _guard = SECTION_LOCK.lock();
        reset_active_section();

        let mut root = Surface(
            Modifier::new(),
            Column(Modifier::new()).child((
                Section(1, "hero", Modifier::new().height(800.0)),
                Section(2, "about", Modifier::new().height(800.0)),
                Section(3, "contact", Modifier::new().height(800.0)),
            )),
        );
        let mut sched = Scheduler::new();
        // Keep fresh ids clear of the hand-picked section ids.
        for _ in 0..3 {
            sched.id();
        }
        assign_ids(&mut root, &mut sched);

        let host = ViewportHost::new(1000.0, 800.0);
        host.set_layout(&layout(&root, 1000.0, LayoutMetrics::default()));
        let tracker = SectionTracker::from_view(&root);
        assert_eq!(tracker.len(), 3);
        tracker.mount(Some(&host.as_observer())).unwrap();
        host.flush();
        assert_eq!(active_section(), "hero");

        host.scroll_to(1700.0);
        host.flush();
        assert_eq!(active_section(), "contact");

        host.scroll_to(900.0);
        host.flush();
        assert_eq!(active_section(), "about");

        tracker.unmount();
        assert_eq!(host.subscription_count(), 0);
        reset_active_section();
    }
}
