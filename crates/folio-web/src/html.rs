//! Static HTML backend.
//!
//! Every view becomes one element with an inline `style` attribute. Reveal
//! wrappers and sections carry `data-folio-id` so a script running in the
//! browser can find them again and attach a live observer.

use std::fmt::Write;

use folio_core::{
    AlignItems, FlexDirection, FontFamily, JustifyContent, Modifier, PositionType, RenderBackend,
    RenderError, TextSpan, TextStyle, TextTag, View, ViewKind,
};

pub const ID_ATTR: &str = "data-folio-id";

#[derive(Clone, Debug)]
pub struct HtmlOptions {
    pub title: String,
    pub description: Option<String>,
    pub lang: String,
    /// Extra markup for `<head>`, e.g. font links.
    pub head: String,
    /// Document-wide CSS, emitted after the reset.
    pub stylesheet: String,
    /// Module script that hydrates the page, if any.
    pub script: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            lang: "en".into(),
            head: String::new(),
            stylesheet: String::new(),
            script: None,
        }
    }
}

pub struct HtmlRenderer {
    pub options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render `root` without the document shell.
    pub fn fragment(&self, root: &View) -> Result<String, RenderError> {
        let mut out = String::new();
        write_view(&mut out, root, true)?;
        Ok(out)
    }
}

impl RenderBackend for HtmlRenderer {
    type Output = String;

    fn render(&mut self, root: &View) -> Result<String, RenderError> {
        let o = &self.options;
        let mut out = String::with_capacity(16 * 1024);
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"{}\">", escape(&o.lang))?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(
            out,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(out, "<title>{}</title>", escape(&o.title))?;
        if let Some(desc) = &o.description {
            writeln!(out, "<meta name=\"description\" content=\"{}\">", escape(desc))?;
        }
        if !o.head.is_empty() {
            writeln!(out, "{}", o.head)?;
        }
        writeln!(out, "<style>{RESET}{}</style>", o.stylesheet)?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        write_view(&mut out, root, true)?;
        writeln!(out)?;
        if let Some(src) = &o.script {
            writeln!(out, "<script type=\"module\" src=\"{}\"></script>", escape(src))?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        log::debug!("rendered {} bytes of html", out.len());
        Ok(out)
    }
}

const RESET: &str = "*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}\
a{text-decoration:none;color:inherit}";

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Inline JSON data block, read back in the browser by id. `<` is escaped
/// so the payload cannot close the script element.
pub fn json_script(id: &str, json: &str) -> String {
    format!(
        "<script type=\"application/json\" id=\"{}\">{}</script>",
        escape(id),
        json.replace('<', "\\u003c")
    )
}

fn write_view(out: &mut String, view: &View, is_root: bool) -> Result<(), RenderError> {
    let mut css = modifier_css(&view.modifier);
    match &view.kind {
        ViewKind::Surface => {
            if !is_root {
                return Err(RenderError::Unsupported {
                    id: view.id,
                    kind: view.kind.name(),
                    reason: "a surface can only be the document root".into(),
                });
            }
            open(out, "main", &css, &[])?;
            write_children(out, view)?;
            out.push_str("</main>");
        }
        ViewKind::Box | ViewKind::Column => {
            open(out, "div", &css, &[])?;
            write_children(out, view)?;
            out.push_str("</div>");
        }
        ViewKind::Row => {
            if !css.contains("display:") {
                css.push_str("display:flex;");
            }
            open(out, "div", &css, &[])?;
            write_children(out, view)?;
            out.push_str("</div>");
        }
        ViewKind::Section { name } => {
            let id = view.id.to_string();
            open(
                out,
                "section",
                &css,
                &[("id", name.as_str()), (ID_ATTR, &id)],
            )?;
            write_children(out, view)?;
            out.push_str("</section>");
        }
        ViewKind::Reveal => {
            let id = view.id.to_string();
            open(out, "div", &css, &[(ID_ATTR, &id), ("data-reveal", "")])?;
            write_children(out, view)?;
            out.push_str("</div>");
        }
        ViewKind::Text { spans, style } => {
            let tag = match style.tag {
                TextTag::Span => "span",
                TextTag::Paragraph => "p",
                TextTag::Heading => "h1",
                TextTag::Block => "div",
            };
            css.push_str(&text_css(style));
            open(out, tag, &css, &[])?;
            write_spans(out, spans)?;
            write!(out, "</{tag}>")?;
        }
        ViewKind::Link {
            href,
            label,
            new_tab,
            style,
        } => {
            css.push_str(&text_css(style));
            let mut attrs = vec![("href", href.as_str())];
            if *new_tab {
                attrs.push(("target", "_blank"));
                attrs.push(("rel", "noopener noreferrer"));
            }
            open(out, "a", &css, &attrs)?;
            out.push_str(&escape(label));
            out.push_str("</a>");
        }
    }
    Ok(())
}

fn write_children(out: &mut String, view: &View) -> Result<(), RenderError> {
    for child in &view.children {
        write_view(out, child, false)?;
    }
    Ok(())
}

fn open(out: &mut String, tag: &str, css: &str, attrs: &[(&str, &str)]) -> Result<(), RenderError> {
    write!(out, "<{tag}")?;
    for (k, v) in attrs {
        if v.is_empty() {
            write!(out, " {k}")?;
        } else {
            write!(out, " {k}=\"{}\"", escape(v))?;
        }
    }
    if !css.is_empty() {
        write!(out, " style=\"{}\"", escape(css))?;
    }
    out.push('>');
    Ok(())
}

fn write_spans(out: &mut String, spans: &[TextSpan]) -> Result<(), RenderError> {
    for s in spans {
        if s.is_line_break() {
            out.push_str("<br>");
            continue;
        }
        let text = escape(&s.text);
        match (s.bold, s.color) {
            (false, None) => out.push_str(&text),
            (true, None) => write!(out, "<strong>{text}</strong>")?,
            (false, Some(c)) => write!(out, "<span style=\"color:{}\">{text}</span>", c.to_css())?,
            (true, Some(c)) => write!(
                out,
                "<strong style=\"color:{}\">{text}</strong>",
                c.to_css()
            )?,
        }
    }
    Ok(())
}

fn px(v: f32) -> String {
    if v == 0.0 { "0".into() } else { format!("{v}px") }
}

pub fn modifier_css(m: &Modifier) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let mut put = |args: std::fmt::Arguments| {
        let _ = s.write_fmt(args);
    };

    if let Some(p) = m.position_type {
        match p {
            PositionType::FixedBottom => put(format_args!("position:fixed;left:0;right:0;bottom:0;")),
        }
    }
    if let Some(z) = m.z_index {
        put(format_args!("z-index:{z};"));
    }
    if let Some(g) = &m.grid {
        let cols: Vec<String> = g.tracks.iter().map(|t| format!("{t}fr")).collect();
        put(format_args!(
            "display:grid;grid-template-columns:{};gap:{};",
            cols.join(" "),
            px(g.gap)
        ));
    } else if let Some(dir) = m.flex_dir {
        let d = match dir {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        };
        put(format_args!("display:flex;flex-direction:{d};"));
    }
    if m.flex_wrap {
        put(format_args!("flex-wrap:wrap;"));
    }
    if let Some(g) = m.flex_grow {
        put(format_args!("flex:{g};"));
    }
    if let Some(j) = m.justify_content {
        let v = match j {
            JustifyContent::Start => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::SpaceBetween => "space-between",
        };
        put(format_args!("justify-content:{v};"));
    }
    if let Some(a) = m.align_items {
        let v = match a {
            AlignItems::Start => "flex-start",
            AlignItems::Center => "center",
            AlignItems::Stretch => "stretch",
        };
        put(format_args!("align-items:{v};"));
    }
    if let Some(g) = m.gap
        && m.grid.is_none()
    {
        put(format_args!("gap:{};", px(g)));
    }
    if let Some(span) = m.grid_col_span {
        put(format_args!("grid-column:span {span};"));
    }
    if let Some(w) = m.max_width {
        put(format_args!("max-width:{};", px(w)));
    }
    if m.margin_horizontal_auto {
        put(format_args!("margin-left:auto;margin-right:auto;"));
    }
    if let Some(v) = m.margin_top {
        put(format_args!("margin-top:{};", px(v)));
    }
    if let Some(v) = m.margin_bottom {
        put(format_args!("margin-bottom:{};", px(v)));
    }
    if let Some(vh) = m.min_height_vh {
        put(format_args!("min-height:{vh}vh;"));
    }
    if let Some(h) = m.height {
        put(format_args!("height:{};", px(h)));
    }
    match (m.padding_values, m.padding) {
        (Some(p), _) => put(format_args!(
            "padding:{} {} {} {};",
            px(p.top),
            px(p.right),
            px(p.bottom),
            px(p.left)
        )),
        (None, Some(p)) => put(format_args!("padding:{};", px(p))),
        (None, None) => {}
    }
    if let Some(bg) = m.background {
        put(format_args!("background:{};", bg.to_css()));
    }
    if let Some(b) = m.border {
        put(format_args!("border:{} solid {};", px(b.width), b.color.to_css()));
        if b.radius > 0.0 {
            put(format_args!("border-radius:{};", px(b.radius)));
        }
    }
    for (side, b) in [
        ("top", m.border_top),
        ("bottom", m.border_bottom),
        ("right", m.border_right),
    ] {
        if let Some(b) = b {
            put(format_args!(
                "border-{side}:{} solid {};",
                px(b.width),
                b.color.to_css()
            ));
        }
    }
    if let Some(r) = m.backdrop_blur {
        put(format_args!("backdrop-filter:blur({});", px(r)));
    }
    if let Some(a) = m.alpha {
        put(format_args!("opacity:{a};"));
    }
    if let Some(t) = m.transform {
        put(format_args!("transform:{};", t.css()));
    }
    if let Some((props, spec)) = &m.transition {
        let parts: Vec<String> = props.iter().map(|p| spec.css_transition(p)).collect();
        put(format_args!("transition:{};", parts.join(", ")));
    }
    s
}

fn font_stack(f: FontFamily) -> &'static str {
    match f {
        FontFamily::Mono => "'JetBrains Mono',monospace",
        FontFamily::Display => "'Playfair Display',serif",
        FontFamily::Title => "'Syne',sans-serif",
    }
}

pub fn text_css(t: &TextStyle) -> String {
    let mut s = format!(
        "font-family:{};font-size:{};color:{};",
        font_stack(t.font),
        px(t.size),
        t.color.to_css()
    );
    if let Some(w) = t.weight {
        s.push_str(&format!("font-weight:{w};"));
    }
    if let Some(lh) = t.line_height {
        s.push_str(&format!("line-height:{lh};"));
    }
    if let Some(ls) = t.letter_spacing_em {
        s.push_str(&format!("letter-spacing:{ls}em;"));
    }
    if t.uppercase {
        s.push_str("text-transform:uppercase;");
    }
    if t.no_wrap {
        s.push_str("white-space:nowrap;");
    }
    s
}
