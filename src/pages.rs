//! Page assembly: per-page binding sets, the shared layout and the five
//! site pages.
//!
//! Every page function takes a [`PageContext`] and returns a complete HTML
//! document. Bindings are declared once per page and applied through
//! [`ContentBinder`]; event fragments come from [`EventRenderer`].

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::binding::{Binding, BindingSet, BoundView, ContentBinder};
use crate::catalog::{EventCatalog, EventLookupFallback, EventRecord};
use crate::filter::{FilterCriteria, FilterOutcome, FilterSortEngine, ResultsView};
use crate::forms::FormMessages;
use crate::i18n::{TextDirection, TranslationStore};
use crate::preferences::DisplayConfig;
use crate::render::{escape_html, EventRenderer, SliderState};

/// Event id shown when the detail query is missing or malformed.
pub const DEFAULT_EVENT_ID: u32 = 1;

/// Category badge value that disables the home filter.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Events,
    EventDetail,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Events,
        Page::EventDetail,
        Page::About,
        Page::Contact,
    ];

    /// Key of the page's `<title>` suffix.
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Home => "nav.home",
            Page::Events => "nav.events",
            Page::EventDetail => "event.pageTitle",
            Page::About => "nav.about",
            Page::Contact => "nav.contact",
        }
    }

    /// Navigation entry highlighted while this page is shown.
    fn nav_page(&self) -> Page {
        match self {
            Page::EventDetail => Page::Events,
            other => *other,
        }
    }

    /// Output file name in a static export.
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Events => "events.html",
            Page::EventDetail => "event-detail.html",
            Page::About => "about.html",
            Page::Contact => "contact.html",
        }
    }
}

const NAV: [(Page, &str); 4] = [
    (Page::Home, "nav.home"),
    (Page::Events, "nav.events"),
    (Page::About, "nav.about"),
    (Page::Contact, "nav.contact"),
];

/// How pages link to each other: served routes or exported files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteLinks {
    #[default]
    Server,
    Static,
}

impl SiteLinks {
    pub fn page(&self, page: Page) -> String {
        match (self, page) {
            (SiteLinks::Server, Page::Home) => "/".to_string(),
            (SiteLinks::Server, Page::Events) => "/events".to_string(),
            (SiteLinks::Server, Page::EventDetail) => "/event-detail".to_string(),
            (SiteLinks::Server, Page::About) => "/about".to_string(),
            (SiteLinks::Server, Page::Contact) => "/contact".to_string(),
            (SiteLinks::Static, page) => page.file_name().to_string(),
        }
    }

    pub fn events(&self) -> String {
        self.page(Page::Events)
    }

    pub fn event_detail(&self, id: u32) -> String {
        match self {
            SiteLinks::Server => format!("/event-detail?id={}", id),
            SiteLinks::Static => format!("event-detail-{}.html", id),
        }
    }

    pub fn home_slide(&self, index: usize) -> String {
        match self {
            SiteLinks::Server => format!("/?slide={}", index),
            SiteLinks::Static => format!("index.html#slide-{}", index),
        }
    }

    pub fn home_category(&self, category: &str) -> String {
        match self {
            SiteLinks::Server => format!(
                "/?category={}",
                percent_encoding::utf8_percent_encode(category, percent_encoding::NON_ALPHANUMERIC)
            ),
            SiteLinks::Static => "index.html#featured".to_string(),
        }
    }

    /// Link to a file under the assets root, given as `assets/...`.
    pub fn asset(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match self {
            SiteLinks::Server => format!("/{}", path),
            SiteLinks::Static => format!("../{}", path),
        }
    }
}

/// Number of events on each presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    pub slider: usize,
    pub featured: usize,
    pub events_page: usize,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            slider: 3,
            featured: 2,
            events_page: 6,
        }
    }
}

/// Everything a page render depends on.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    pub store: &'a TranslationStore,
    pub config: DisplayConfig,
    pub links: SiteLinks,
    pub limits: RenderLimits,
    pub lookup_fallback: EventLookupFallback,
    /// Path and query of the current page (served) or its file name (static)
    pub current: String,
    /// Pre-rendered alert banner
    pub alert_html: String,
}

impl<'a> PageContext<'a> {
    pub fn new(store: &'a TranslationStore, config: DisplayConfig) -> Self {
        Self {
            store,
            config,
            links: SiteLinks::default(),
            limits: RenderLimits::default(),
            lookup_fallback: EventLookupFallback::default(),
            current: "/".to_string(),
            alert_html: String::new(),
        }
    }

    pub fn with_links(mut self, links: SiteLinks) -> Self {
        self.links = links;
        self
    }

    pub fn with_limits(mut self, limits: RenderLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_lookup_fallback(mut self, fallback: EventLookupFallback) -> Self {
        self.lookup_fallback = fallback;
        self
    }

    pub fn with_current(mut self, current: impl Into<String>) -> Self {
        self.current = current.into();
        self
    }

    pub fn with_alert(mut self, alert_html: String) -> Self {
        self.alert_html = alert_html;
        self
    }

    fn renderer(&self) -> EventRenderer<'a> {
        EventRenderer::new(self.store, self.config).with_links(self.links)
    }

    fn catalog(&self) -> EventCatalog<'a> {
        EventCatalog::from_store(self.store, self.config.locale)
    }
}

/// Parse the detail page's `id` parameter.
pub fn parse_event_id(raw: Option<&str>) -> u32 {
    raw.and_then(|id| id.trim().parse().ok())
        .unwrap_or(DEFAULT_EVENT_ID)
}

// ==================== Bindings ====================

fn layout_bindings() -> BindingSet {
    BindingSet::new()
        .with_texts(&[
            "site.name",
            "nav.home",
            "nav.events",
            "nav.about",
            "nav.contact",
            "nav.toggleTheme",
            "nav.toggleLanguage",
            "booking.title",
            "booking.name",
            "booking.email",
            "booking.phone",
            "booking.tickets",
            "booking.cancel",
            "booking.confirm",
            "footer.description",
            "footer.quickLinks",
            "footer.contactTitle",
            "footer.address",
        ])
        .with(Binding::markup("footer.copyright"))
        .with(Binding::placeholder("booking.namePlaceholder"))
        .with(Binding::placeholder("booking.emailPlaceholder"))
        .with(Binding::placeholder("booking.phonePlaceholder"))
}

fn build_bindings(page: Page) -> BindingSet {
    let mut set = layout_bindings();
    let own = match page {
        Page::Home => BindingSet::new()
            .with_texts(&[
                "hero.title",
                "hero.subtitle",
                "home.latestEvents",
                "home.featuredTitle",
                "home.featuredSubtitle",
                "home.allCategories",
                "home.viewAll",
                "home.ctaTitle",
                "home.ctaText",
                "home.ctaButton",
            ]),
        Page::Events => BindingSet::new()
            .with_texts(&[
                "events.title",
                "events.subtitle",
                "events.filterTitle",
                "events.category",
                "events.date",
                "events.location",
                "events.sortBy",
                "events.apply",
                "events.reset",
            ])
            .with(Binding::placeholder("events.searchPlaceholder")),
        Page::EventDetail => BindingSet::new().with_texts(&["event.pageTitle", "event.backToEvents"]),
        Page::About => BindingSet::new()
            .with_texts(&[
                "about.title",
                "about.subtitle",
                "about.missionTitle",
                "about.missionText",
                "about.visionTitle",
                "about.visionText",
                "about.teamTitle",
            ])
            .with(Binding::markup("about.story")),
        Page::Contact => BindingSet::new()
            .with_texts(&[
                "contact.title",
                "contact.subtitle",
                "contact.formTitle",
                "contact.name",
                "contact.email",
                "contact.subject",
                "contact.message",
                "contact.send",
                "contact.infoTitle",
                "contact.addressLabel",
                "contact.address",
                "contact.phoneLabel",
                "contact.emailLabel",
                "contact.hoursLabel",
                "contact.hours",
            ])
            .with(Binding::placeholder("contact.namePlaceholder"))
            .with(Binding::placeholder("contact.emailPlaceholder"))
            .with(Binding::placeholder("contact.subjectPlaceholder"))
            .with(Binding::placeholder("contact.messagePlaceholder")),
    };
    set.extend(own);
    set
}

/// The binding set of `page`, built on first use.
pub fn page_bindings(page: Page) -> &'static BindingSet {
    static BINDINGS: OnceLock<HashMap<Page, BindingSet>> = OnceLock::new();
    let all = BINDINGS.get_or_init(|| {
        Page::ALL
            .iter()
            .map(|page| (*page, build_bindings(*page)))
            .collect()
    });
    // Every page is inserted above
    &all[&page]
}

// ==================== Layout ====================

fn navigation(ctx: &PageContext<'_>, view: &BoundView, page: Page) -> String {
    NAV.iter()
        .map(|(target, key)| {
            let active = if *target == page.nav_page() { " active" } else { "" };
            format!(
                r#"<li class="nav-item"><a class="nav-link{}" href="{}">{}</a></li>"#,
                active,
                escape_html(&ctx.links.page(*target)),
                view.element(key, "span")
            )
        })
        .collect()
}

fn toggles(ctx: &PageContext<'_>, view: &BoundView) -> String {
    let locale = ctx.config.locale.config();
    let flag = format!(
        r#"<img src="{}" alt="{}" class="lang-flag">"#,
        escape_html(&ctx.links.asset(locale.toggle_flag)),
        locale.toggle_flag_alt
    );
    let theme_icon = format!(r#"<i class="{}"></i>"#, ctx.config.theme.icon_class());
    let theme_label = view.slot("nav.toggleTheme");
    let language_label = view.slot("nav.toggleLanguage");

    match ctx.links {
        SiteLinks::Server => {
            let return_to = escape_html(&ctx.current);
            format!(
                r#"<form method="post" action="/theme" class="d-inline"><input type="hidden" name="return_to" value="{return_to}"><button type="submit" class="theme-toggle" id="themeToggle" aria-label="{theme_label}">{theme_icon}</button></form>
<form method="post" action="/language" class="d-inline"><input type="hidden" name="return_to" value="{return_to}"><button type="submit" class="lang-toggle" id="langToggle" aria-label="{language_label}">{flag}</button></form>"#
            )
        }
        SiteLinks::Static => {
            let other = ctx.config.locale.toggled().code();
            format!(
                r#"<button type="button" class="theme-toggle" id="themeToggle" aria-label="{theme_label}">{theme_icon}</button>
<a class="lang-toggle" id="langToggle" href="../{other}/{}" aria-label="{language_label}">{flag}</a>"#,
                escape_html(&ctx.current)
            )
        }
    }
}

fn booking_modal(ctx: &PageContext<'_>, view: &BoundView, event: Option<&EventRecord>) -> String {
    let title = match event {
        Some(event) => escape_html(
            &FormMessages::new(ctx.store, ctx.config.locale).booking_modal_title(event),
        ),
        None => view.slot("booking.title").to_string(),
    };
    let event_id = event.map(|e| e.id.to_string()).unwrap_or_default();

    format!(
        r#"<div class="modal fade" id="bookingModal" tabindex="-1" aria-hidden="true">
<div class="modal-dialog modal-dialog-centered"><div class="modal-content">
<form method="post" action="/booking" id="bookingForm">
<div class="modal-header"><h5 class="modal-title">{title}</h5><button type="button" class="btn-close" data-bs-dismiss="modal"></button></div>
<div class="modal-body">
<input type="hidden" name="event_id" id="bookingEventId" value="{event_id}">
<input type="hidden" name="return_to" value="{return_to}">
<div class="mb-3">{name_label}<input type="text" class="form-control" id="userName" name="name" {name_input}></div>
<div class="mb-3">{email_label}<input type="email" class="form-control" id="userEmail" name="email" {email_input}></div>
<div class="mb-3">{phone_label}<input type="tel" class="form-control" id="userPhone" name="phone" {phone_input}></div>
<div class="mb-3">{tickets_label}<input type="number" class="form-control" id="ticketCount" name="tickets" min="1" value="1"></div>
</div>
<div class="modal-footer">
<button type="button" class="btn btn-secondary" data-bs-dismiss="modal">{cancel}</button>
<button type="submit" class="btn btn-primary" id="confirmBooking">{confirm}</button>
</div>
</form>
</div></div>
</div>
<script>
document.getElementById('bookingModal')?.addEventListener('show.bs.modal', function (e) {{
  var id = e.relatedTarget && e.relatedTarget.getAttribute('data-event-id');
  if (id) {{ document.getElementById('bookingEventId').value = id; }}
}});
</script>"#,
        return_to = escape_html(&ctx.current),
        name_label = view.element("booking.name", "label"),
        name_input = view.element("booking.namePlaceholder", "input"),
        email_label = view.element("booking.email", "label"),
        email_input = view.element("booking.emailPlaceholder", "input"),
        phone_label = view.element("booking.phone", "label"),
        phone_input = view.element("booking.phonePlaceholder", "input"),
        tickets_label = view.element("booking.tickets", "label"),
        cancel = view.element("booking.cancel", "span"),
        confirm = view.element("booking.confirm", "span"),
    )
}

fn footer(ctx: &PageContext<'_>, view: &BoundView) -> String {
    let links: String = NAV
        .iter()
        .map(|(target, key)| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(&ctx.links.page(*target)),
                view.element(key, "span")
            )
        })
        .collect();

    format!(
        r#"<footer class="footer"><div class="container"><div class="row">
<div class="col-lg-6 mb-4"><h5>{name}</h5><p>{description}</p></div>
<div class="col-lg-3 mb-4"><h5>{quick_links}</h5><ul class="list-unstyled">{links}</ul></div>
<div class="col-lg-3 mb-4"><h5>{contact}</h5><p>{address}</p></div>
</div>
<div class="footer-bottom text-center">{copyright}</div>
</div></footer>"#,
        name = view.element("site.name", "span"),
        description = view.element("footer.description", "span"),
        quick_links = view.element("footer.quickLinks", "span"),
        contact = view.element("footer.contactTitle", "span"),
        address = view.element("footer.address", "span"),
        copyright = view.element("footer.copyright", "p"),
    )
}

/// Wrap a page body in the shared layout.
fn layout(
    ctx: &PageContext<'_>,
    page: Page,
    view: &BoundView,
    body: &str,
    modal_event: Option<&EventRecord>,
) -> String {
    let locale = ctx.config.locale;
    let theme = ctx.config.theme;
    let bootstrap_css = if locale.direction() == TextDirection::Rtl {
        "bootstrap.rtl.min.css"
    } else {
        "bootstrap.min.css"
    };
    let page_title = escape_html(&ctx.store.resolve(page.title_key(), locale));

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}" data-theme="{theme}">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{site} | {page_title}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/{bootstrap_css}">
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
<link rel="stylesheet" href="{stylesheet}">
<style>:root {{ {palette} }}</style>
</head>
<body>
<nav class="navbar navbar-expand-lg fixed-top"><div class="container">
<a class="navbar-brand" href="{home}">{brand}</a>
<ul class="navbar-nav mx-auto">{nav}</ul>
<div class="nav-actions">{toggles}</div>
</div></nav>
{alert}
<main>
{body}
</main>
{modal}
{footer}
<script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>
"#,
        lang = locale.code(),
        dir = locale.direction().as_str(),
        theme = theme.as_str(),
        site = view.slot("site.name"),
        stylesheet = escape_html(&ctx.links.asset("assets/css/style.css")),
        palette = theme.palette().css_declarations(),
        home = escape_html(&ctx.links.page(Page::Home)),
        brand = view.element("site.name", "span"),
        nav = navigation(ctx, view, page),
        toggles = toggles(ctx, view),
        alert = ctx.alert_html,
        modal = booking_modal(ctx, view, modal_event),
        footer = footer(ctx, view),
    )
}

fn bind(ctx: &PageContext<'_>, page: Page) -> BoundView {
    ContentBinder::new(ctx.store).apply(page_bindings(page), ctx.config)
}

// ==================== Pages ====================

/// Home page. `slide` selects the active slide (wrapping); `category`
/// filters the featured grid, with `all` or empty showing everything.
pub fn home(ctx: &PageContext<'_>, slide: Option<i64>, category: Option<&str>) -> String {
    let view = bind(ctx, Page::Home);
    let renderer = ctx.renderer();
    let catalog = ctx.catalog();

    let slides = catalog.latest(ctx.limits.slider);
    let mut slider = SliderState::new(slides.len());
    if let Some(index) = slide {
        slider.go_to(index);
    }

    let (mut previous, mut following) = (slider, slider);
    previous.prev();
    following.next();

    let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
    let (visible, hidden): (Vec<&EventRecord>, Vec<&EventRecord>) = catalog
        .latest(ctx.limits.featured)
        .into_iter()
        .partition(|event| category.map_or(true, |c| event.category == c));
    let featured = renderer.list_cards(&FilterOutcome { visible, hidden });

    let badge = |value: &str, label: String, active: bool| {
        format!(
            r#"<a href="{}" class="badge-filter{}" data-category="{}">{}</a>"#,
            escape_html(&ctx.links.home_category(value)),
            if active { " active" } else { "" },
            escape_html(value),
            label
        )
    };
    let mut badges = badge(
        ALL_CATEGORIES,
        view.element("home.allCategories", "span"),
        category.is_none(),
    );
    for value in catalog.categories() {
        badges.push_str(&badge(value, escape_html(value), category == Some(value)));
    }

    let body = format!(
        r#"<section class="hero-slider">
<div class="container"><h1 class="hero-title">{hero_title}</h1><p class="hero-subtitle">{hero_subtitle}</p></div>
<h2 class="section-title">{latest}</h2>
<div class="slider-wrapper" id="sliderWrapper">{slides}</div>
<a class="slider-btn prev" id="prevBtn" href="{prev}"><i class="fas fa-chevron-right"></i></a>
<a class="slider-btn next" id="nextBtn" href="{next}"><i class="fas fa-chevron-left"></i></a>
<div class="slider-indicators" id="sliderIndicators">{indicators}</div>
</section>
<section class="featured-events py-5" id="featured"><div class="container">
<h2 class="section-title">{featured_title}</h2>
<p class="section-subtitle">{featured_subtitle}</p>
<div class="category-filters mb-4">{badges}</div>
<div class="events-grid" id="featuredEventsGrid">{featured}</div>
<div class="text-center mt-4"><a href="{events}" class="btn btn-primary">{view_all}</a></div>
</div></section>
<section class="cta-section py-5"><div class="container text-center">
<h2>{cta_title}</h2><p>{cta_text}</p><a href="{events}" class="btn btn-light">{cta_button}</a>
</div></section>"#,
        hero_title = view.element("hero.title", "span"),
        hero_subtitle = view.element("hero.subtitle", "span"),
        latest = view.element("home.latestEvents", "span"),
        slides = renderer.slides(&slides, &slider),
        prev = escape_html(&ctx.links.home_slide(previous.current())),
        next = escape_html(&ctx.links.home_slide(following.current())),
        indicators = renderer.slider_indicators(&slider),
        featured_title = view.element("home.featuredTitle", "span"),
        featured_subtitle = view.element("home.featuredSubtitle", "span"),
        events = escape_html(&ctx.links.events()),
        view_all = view.element("home.viewAll", "span"),
        cta_title = view.element("home.ctaTitle", "span"),
        cta_text = view.element("home.ctaText", "span"),
        cta_button = view.element("home.ctaButton", "span"),
    );

    layout(ctx, Page::Home, &view, &body, None)
}

/// Events page: filter panel, filtered list and results count.
///
/// `results` carries the placeholder state of this view across renders.
pub fn events(
    ctx: &PageContext<'_>,
    criteria: &FilterCriteria,
    results: &mut ResultsView,
) -> String {
    let view = bind(ctx, Page::Events);
    let renderer = ctx.renderer();
    let catalog = ctx.catalog();

    let cards = catalog.capped(ctx.limits.events_page);
    let outcome = FilterSortEngine::new(ctx.config.locale).apply(&cards, criteria);
    let change = results.transition(outcome.visible_count());
    debug!(visible = outcome.visible_count(), ?change, "Applied event filters");

    let placeholder = if results.shows_placeholder() {
        renderer.no_results()
    } else {
        String::new()
    };

    let body = format!(
        r#"<section class="page-header"><div class="container">
<h1>{title}</h1><p>{subtitle}</p>
</div></section>
<section class="events-section py-5"><div class="container">
<form class="filters-panel mb-4" method="get" action="{action}" id="filterForm">
<h5>{filter_title}</h5>
<div class="row g-3">
<div class="col-md-4"><input type="text" class="form-control" id="searchInput" name="search" value="{search}" {search_input}></div>
<div class="col-md-2">{category_label}<select class="form-select" id="categoryFilter" name="category">{categories}</select></div>
<div class="col-md-2">{date_label}<input type="date" class="form-control" id="dateFilter" name="date" value="{date}"></div>
<div class="col-md-2">{location_label}<select class="form-select" id="locationFilter" name="location">{locations}</select></div>
<div class="col-md-2">{sort_label}<select class="form-select" id="sortFilter" name="sort">{sorts}</select></div>
</div>
<div class="mt-3"><button type="submit" class="btn btn-primary" id="applyFilters">{apply}</button> <a href="{action}" class="btn btn-outline-secondary">{reset}</a></div>
</form>
<p class="results-count" id="resultsCount">{count}</p>
<div class="events-grid" id="allEventsGrid">{cards}{placeholder}</div>
</div></section>"#,
        title = view.element("events.title", "span"),
        subtitle = view.element("events.subtitle", "span"),
        action = escape_html(&ctx.links.events()),
        filter_title = view.element("events.filterTitle", "span"),
        search = escape_html(&criteria.search_text),
        search_input = view.element("events.searchPlaceholder", "input"),
        category_label = view.element("events.category", "label"),
        categories = renderer.category_options(&catalog, criteria),
        date_label = view.element("events.date", "label"),
        date = escape_html(criteria.date.as_deref().unwrap_or_default()),
        location_label = view.element("events.location", "label"),
        locations = renderer.location_options(&catalog, criteria),
        sort_label = view.element("events.sortBy", "label"),
        sorts = renderer.sort_options(criteria.sort.unwrap_or_default()),
        apply = view.element("events.apply", "span"),
        reset = view.element("events.reset", "span"),
        count = renderer.results_count(outcome.visible_count()),
        cards = renderer.list_cards(&outcome),
    );

    layout(ctx, Page::Events, &view, &body, None)
}

/// Detail page for event `id`, subject to the context's lookup policy.
pub fn event_detail(ctx: &PageContext<'_>, id: u32) -> String {
    let view = bind(ctx, Page::EventDetail);
    let event = ctx
        .store
        .get_event_by_id(ctx.config.locale, id, ctx.lookup_fallback);
    if event.is_none() {
        debug!(id, "No event to show on detail page");
    }

    let body = format!(
        r#"<div id="eventDetailContent">{}</div>
<div class="container py-4"><a href="{}" class="btn btn-outline-primary">{}</a></div>"#,
        ctx.renderer().detail(event),
        escape_html(&ctx.links.events()),
        view.element("event.backToEvents", "span")
    );

    layout(ctx, Page::EventDetail, &view, &body, event)
}

pub fn about(ctx: &PageContext<'_>) -> String {
    let view = bind(ctx, Page::About);
    let body = format!(
        r#"<section class="page-header"><div class="container"><h1>{}</h1><p>{}</p></div></section>
<section class="about-section py-5"><div class="container">
<div class="about-story mb-5">{}</div>
<div class="row">
<div class="col-md-6 mb-4"><div class="about-card"><h3>{}</h3><p>{}</p></div></div>
<div class="col-md-6 mb-4"><div class="about-card"><h3>{}</h3><p>{}</p></div></div>
</div>
<h2 class="section-title mt-5">{}</h2>
</div></section>"#,
        view.element("about.title", "span"),
        view.element("about.subtitle", "span"),
        view.element("about.story", "div"),
        view.element("about.missionTitle", "span"),
        view.element("about.missionText", "span"),
        view.element("about.visionTitle", "span"),
        view.element("about.visionText", "span"),
        view.element("about.teamTitle", "span"),
    );
    layout(ctx, Page::About, &view, &body, None)
}

pub fn contact(ctx: &PageContext<'_>) -> String {
    let view = bind(ctx, Page::Contact);
    let body = format!(
        r#"<section class="page-header"><div class="container"><h1>{title}</h1><p>{subtitle}</p></div></section>
<section class="contact-section py-5"><div class="container"><div class="row">
<div class="col-lg-8 mb-4">
<h3>{form_title}</h3>
<form method="post" action="/contact" id="contactForm">
<input type="hidden" name="return_to" value="{return_to}">
<div class="mb-3">{name_label}<input type="text" class="form-control" id="contactName" name="name" {name_input}></div>
<div class="mb-3">{email_label}<input type="email" class="form-control" id="contactEmail" name="email" {email_input}></div>
<div class="mb-3">{subject_label}<input type="text" class="form-control" id="contactSubject" name="subject" {subject_input}></div>
<div class="mb-3">{message_label}<textarea class="form-control" id="contactMessage" name="message" rows="5" {message_input}></textarea></div>
<button type="submit" class="btn btn-primary">{send}</button>
</form>
</div>
<div class="col-lg-4">
<h3>{info_title}</h3>
<ul class="list-unstyled contact-info">
<li><i class="fas fa-map-marker-alt me-2"></i>{address_label}: {address}</li>
<li><i class="fas fa-phone me-2"></i>{phone_label}: <span dir="ltr">+963 11 000 0000</span></li>
<li><i class="fas fa-envelope me-2"></i>{email_info}: <span dir="ltr">info@dalil.sy</span></li>
<li><i class="fas fa-clock me-2"></i>{hours_label}: {hours}</li>
</ul>
</div>
</div></div></section>"#,
        title = view.element("contact.title", "span"),
        subtitle = view.element("contact.subtitle", "span"),
        form_title = view.element("contact.formTitle", "span"),
        return_to = escape_html(&ctx.current),
        name_label = view.element("contact.name", "label"),
        name_input = view.element("contact.namePlaceholder", "input"),
        email_label = view.element("contact.email", "label"),
        email_input = view.element("contact.emailPlaceholder", "input"),
        subject_label = view.element("contact.subject", "label"),
        subject_input = view.element("contact.subjectPlaceholder", "input"),
        message_label = view.element("contact.message", "label"),
        message_input = view.element("contact.messagePlaceholder", "textarea"),
        send = view.element("contact.send", "span"),
        info_title = view.element("contact.infoTitle", "span"),
        address_label = view.element("contact.addressLabel", "strong"),
        address = view.element("contact.address", "span"),
        phone_label = view.element("contact.phoneLabel", "strong"),
        email_info = view.element("contact.emailLabel", "strong"),
        hours_label = view.element("contact.hoursLabel", "strong"),
        hours = view.element("contact.hours", "span"),
    );
    layout(ctx, Page::Contact, &view, &body, None)
}
