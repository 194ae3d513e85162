//! Composes the portfolio page: hero, about, projects, community, awards,
//! skills and contact sections, each block wrapped in a staggered reveal,
//! plus the sticky bottom navigation.

use folio_core::*;
use folio_ui::*;

use crate::config::SiteConfig;
use crate::content::{Award, Content, Project, Role, SkillGroup};
use crate::theme::Theme;

pub const ABOUT_DELAY_MS: u64 = 100;
pub const PROJECT_STAGGER_MS: u64 = 120;
pub const ROLE_STAGGER_MS: u64 = 100;
pub const AWARD_STAGGER_MS: u64 = 100;
pub const BODY_DELAY_MS: u64 = 80;

/// A built page and the reveal instances driving it.
pub struct Page {
    pub root: View,
    pub reveals: Vec<Reveal>,
}

impl Page {
    pub fn reveal(&self, id: ViewId) -> Option<&Reveal> {
        self.reveals.iter().find(|r| r.id() == id)
    }

    pub fn section_tracker(&self, threshold: f32) -> SectionTracker {
        SectionTracker::from_view(&self.root).with_threshold(threshold)
    }

    /// Mount every reveal against `observer`; `None` shows everything.
    pub fn mount(&self, observer: Option<&SharedObserver>) {
        for r in &self.reveals {
            r.mount(observer);
        }
    }

    pub fn visible_count(&self) -> usize {
        self.reveals.iter().filter(|r| r.is_visible()).count()
    }
}

struct Builder<'a> {
    sched: &'a mut Scheduler,
    base: RevealConfig,
    theme: Theme,
    reveals: Vec<Reveal>,
}

impl Builder<'_> {
    fn reveal(&mut self, delay_ms: u64, content: impl IntoChildren) -> View {
        let cfg = self.base.clone().with_delay(self.base.delay_ms.saturating_add(delay_ms));
        let r = Reveal::new(self.sched, cfg);
        let view = RevealOnVisible(&r, content);
        self.reveals.push(r);
        view
    }

    fn section(&mut self, name: &str, modifier: Modifier, children: Vec<View>) -> View {
        Section(self.sched.id(), name, modifier).with_children(children)
    }

    fn label(&mut self, text: &str) -> View {
        let t = self.theme;
        let row = Row(Modifier::new()
            .align_items(AlignItems::Center)
            .gap(16.0)
            .margin_bottom(32.0))
        .child((
            Text(text)
                .size(10.0)
                .letter_spacing(0.3)
                .uppercase()
                .color(t.accent)
                .no_wrap(),
            Divider(t.border),
        ));
        self.reveal(0, row)
    }

    fn hero(&mut self, c: &Content) -> View {
        let t = self.theme;
        let body = (
            Text(&c.hero.eyebrow)
                .tag(TextTag::Paragraph)
                .size(11.0)
                .letter_spacing(0.2)
                .uppercase()
                .color(t.accent)
                .modifier(Modifier::new().margin_bottom(20.0)),
            RichText(vec![
                TextSpan::plain(&c.hero.first_name),
                TextSpan::line_break(),
                TextSpan::plain(&c.hero.last_name).colored(t.accent),
            ])
            .tag(TextTag::Heading)
            .font(FontFamily::Display)
            .size(96.0)
            .weight(900)
            .line_height(0.95)
            .letter_spacing(-0.01)
            .modifier(Modifier::new().margin_bottom(24.0)),
            Paragraph(&c.hero.tagline)
                .size(14.0)
                .color(t.muted)
                .modifier(Modifier::new().max_width(600.0).margin_bottom(32.0)),
        );
        let block = self.reveal(0, body);
        self.section(
            "hero",
            Modifier::new()
                .border_bottom(1.0, t.border)
                .padding_values(PaddingValues {
                    bottom: 48.0,
                    ..Default::default()
                })
                .margin_bottom(72.0),
            vec![block],
        )
    }

    fn about(&mut self, c: &Content) -> View {
        let t = self.theme;
        let label = self.label("About");
        let paragraphs: Vec<View> = c
            .about
            .iter()
            .map(|p| {
                Paragraph(p)
                    .size(15.0)
                    .line_height(1.9)
                    .color(t.text)
                    .modifier(Modifier::new().margin_bottom(16.0))
            })
            .collect();
        let body = self.reveal(ABOUT_DELAY_MS, paragraphs);
        self.section("about", section_spacing(), vec![label, body])
    }

    fn project_card(&self, p: &Project) -> View {
        let t = self.theme;
        let highlights: Vec<View> = p
            .highlights
            .iter()
            .map(|h| {
                let mut spans = vec![TextSpan::plain("→ ").colored(t.accent)];
                spans.extend(parse_emphasis(h));
                RichText(spans)
                    .tag(TextTag::Block)
                    .size(13.0)
                    .line_height(1.7)
                    .color(t.text)
            })
            .collect();

        Box(Modifier::new()
            .border(1.0, t.border, 0.0)
            .padding(28.0)
            .margin_bottom(16.0))
        .child((
            Row(Modifier::new()
                .justify_content(JustifyContent::SpaceBetween)
                .align_items(AlignItems::Start)
                .flex_wrap()
                .gap(16.0)
                .margin_bottom(14.0))
            .child((
                Text(&p.title)
                    .font(FontFamily::Title)
                    .size(19.0)
                    .weight(700),
                Text(&p.lang)
                    .size(10.0)
                    .letter_spacing(0.15)
                    .color(t.accent2)
                    .no_wrap()
                    .modifier(
                        Modifier::new()
                            .border(1.0, t.accent2, 0.0)
                            .padding_values(PaddingValues::symmetric(10.0, 3.0)),
                    ),
            )),
            Paragraph(&p.desc)
                .size(14.0)
                .line_height(1.7)
                .modifier(Modifier::new().margin_bottom(16.0)),
            Column(Modifier::new().gap(8.0)).child(highlights),
        ))
    }

    fn projects(&mut self, c: &Content) -> View {
        let label = self.label("Projects");
        let mut children = vec![label];
        for (i, p) in c.projects.iter().enumerate() {
            let card = self.project_card(p);
            children.push(self.reveal(i as u64 * PROJECT_STAGGER_MS, card));
        }
        self.section("projects", section_spacing(), children)
    }

    fn role_row(&self, i: usize, r: &Role) -> View {
        let t = self.theme;
        Box(ruled_row(i, &t)).child((
            Row(Modifier::new()
                .justify_content(JustifyContent::SpaceBetween)
                .flex_wrap()
                .gap(4.0)
                .margin_bottom(6.0))
            .child((
                Text(&r.title)
                    .font(FontFamily::Title)
                    .size(16.0)
                    .weight(700),
                Text(&r.period).size(11.0).color(t.muted),
            )),
            Text(&r.org)
                .tag(TextTag::Block)
                .size(12.0)
                .color(t.accent2)
                .letter_spacing(0.1)
                .modifier(Modifier::new().margin_bottom(10.0)),
            Paragraph(&r.desc).size(13.0).line_height(1.7),
        ))
    }

    fn community(&mut self, c: &Content) -> View {
        let label = self.label("Community Involvement");
        let mut children = vec![label];
        for (i, r) in c.roles.iter().enumerate() {
            let row = self.role_row(i, r);
            children.push(self.reveal(i as u64 * ROLE_STAGGER_MS, row));
        }
        self.section("community", section_spacing(), children)
    }

    fn award_row(&self, i: usize, a: &Award) -> View {
        let t = self.theme;
        Row(ruled_row(i, &t)
            .align_items(AlignItems::Start)
            .justify_content(JustifyContent::SpaceBetween)
            .gap(16.0))
        .child((
            Column(Modifier::new().flex_grow(1.0)).child((
                Text(&a.name)
                    .tag(TextTag::Block)
                    .font(FontFamily::Title)
                    .size(16.0)
                    .weight(700)
                    .modifier(Modifier::new().margin_bottom(6.0)),
                Text(&a.detail)
                    .tag(TextTag::Block)
                    .size(13.0)
                    .line_height(1.6),
            )),
            Text(&a.date).size(11.0).color(t.accent).no_wrap(),
        ))
    }

    fn awards(&mut self, c: &Content) -> View {
        let label = self.label("Awards & Achievements");
        let mut children = vec![label];
        for (i, a) in c.awards.iter().enumerate() {
            let row = self.award_row(i, a);
            children.push(self.reveal(i as u64 * AWARD_STAGGER_MS, row));
        }
        self.section("awards", section_spacing(), children)
    }

    fn skill_cell(&self, g: &SkillGroup) -> View {
        let t = self.theme;
        let chips: Vec<View> = g
            .tags
            .iter()
            .map(|tag| {
                Text(tag).size(12.0).color(t.text).modifier(
                    Modifier::new()
                        .background(t.chip)
                        .border(1.0, t.chip_border, 0.0)
                        .padding_values(PaddingValues::symmetric(14.0, 6.0)),
                )
            })
            .collect();

        let mut cell = Modifier::new().background(t.background).padding(24.0);
        if g.wide {
            cell = cell.grid_span(2);
        }
        Box(cell).child((
            Text(&g.label)
                .tag(TextTag::Block)
                .size(10.0)
                .letter_spacing(0.2)
                .uppercase()
                .color(t.accent)
                .modifier(Modifier::new().margin_bottom(14.0)),
            Row(Modifier::new().flex_wrap().gap(8.0)).child(chips),
        ))
    }

    fn skills(&mut self, c: &Content) -> View {
        let label = self.label("Skills");
        let cells: Vec<View> = c.skills.iter().map(|g| self.skill_cell(g)).collect();
        let grid = Grid(
            vec![1.0, 1.0],
            1.0,
            Modifier::new().background(self.theme.border),
            cells,
        );
        let body = self.reveal(BODY_DELAY_MS, grid);
        self.section("skills", section_spacing(), vec![label, body])
    }

    fn contact(&mut self, c: &Content) -> View {
        let t = self.theme;
        let label = self.label("Contact");
        let entry = |name: &str, link: View| {
            Row(Modifier::new().gap(0.0)).child((
                Text(format!("{name}: ")).size(14.0).color(t.muted).no_wrap(),
                link.size(14.0).color(t.accent2),
            ))
        };
        let body = (
            Paragraph(&c.contact.blurb)
                .size(14.0)
                .color(t.muted)
                .modifier(Modifier::new().margin_bottom(20.0)),
            Row(Modifier::new()
                .gap(24.0)
                .flex_wrap()
                .align_items(AlignItems::Center))
            .child((
                entry(
                    "Email",
                    Link(&c.contact.email, format!("mailto:{}", c.contact.email)),
                ),
                entry(
                    "LinkedIn",
                    Link(&c.contact.linkedin_label, &c.contact.linkedin_href).new_tab(),
                ),
            )),
        );
        let body = self.reveal(BODY_DELAY_MS, body);
        self.section("contact", section_spacing(), vec![label, body])
    }

    fn nav(&self, c: &Content) -> View {
        let t = self.theme;
        let last = c.nav.len().saturating_sub(1);
        let links: Vec<View> = c
            .nav
            .iter()
            .enumerate()
            .map(|(i, l)| {
                let mut m = Modifier::new().padding_values(PaddingValues::symmetric(28.0, 16.0));
                if i < last {
                    m = m.border_right(1.0, t.border);
                }
                Link(format!("{}{}", l.glyph.prefix(), l.label), &l.href)
                    .new_tab()
                    .size(12.0)
                    .weight(700)
                    .letter_spacing(0.12)
                    .uppercase()
                    .color(t.text)
                    .modifier(m)
            })
            .collect();

        Row(Modifier::new()
            .fixed_bottom()
            .z_index(100)
            .background(Color::from_rgba(10, 10, 10, 235))
            .backdrop_blur(12.0)
            .border_top(1.0, t.border)
            .justify_content(JustifyContent::Center)
            .padding_values(PaddingValues::symmetric(24.0, 0.0)))
        .child(links)
    }
}

fn section_spacing() -> Modifier {
    Modifier::new().margin_bottom(72.0)
}

// Rows in a ruled list: a rule below each, and above the first.
fn ruled_row(i: usize, t: &Theme) -> Modifier {
    let m = Modifier::new()
        .padding_values(PaddingValues::symmetric(0.0, 22.0))
        .border_bottom(1.0, t.border);
    if i == 0 { m.border_top(1.0, t.border) } else { m }
}

pub fn build_page(sched: &mut Scheduler, cfg: &SiteConfig, theme: &Theme) -> Page {
    let c = &cfg.content;
    let mut b = Builder {
        sched,
        base: cfg.reveal.clone(),
        theme: *theme,
        reveals: Vec::new(),
    };

    let sections = vec![
        b.hero(c),
        b.about(c),
        b.projects(c),
        b.community(c),
        b.awards(c),
        b.skills(c),
        b.contact(c),
    ];
    let nav = b.nav(c);

    let main = Column(
        Modifier::new()
            .max_width(1100.0)
            .center_horizontally()
            .padding_values(PaddingValues {
                left: 48.0,
                right: 48.0,
                top: 60.0,
                bottom: 0.0,
            }),
    )
    .with_children(sections);

    let mut root = Surface(
        Modifier::new()
            .background(theme.background)
            .min_height_viewport(100.0)
            .padding_values(PaddingValues {
                bottom: 100.0,
                ..Default::default()
            }),
        Box(Modifier::new()).child((main, nav)),
    );
    assign_ids(&mut root, b.sched);

    log::debug!(
        "built page: {} reveals, {} ids issued",
        b.reveals.len(),
        b.sched.issued()
    );
    Page {
        root,
        reveals: b.reveals,
    }
}
