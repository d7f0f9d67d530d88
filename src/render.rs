//! Event presentations: slider slides, featured cards, list cards and the
//! detail page.
//!
//! Every function here is a projection from event records to markup. Labels
//! inside fragments go through [`ContentBinder`] and carry their
//! `data-i18n` key, so a fragment is already bound when it is inserted.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::binding::ContentBinder;
use crate::catalog::{EventCatalog, EventRecord};
use crate::filter::{FilterCriteria, FilterOutcome, SortKey};
use crate::i18n::{Locale, TranslationStore};
use crate::pages::SiteLinks;
use crate::preferences::DisplayConfig;

/// Characters `encodeURIComponent` leaves alone, minus the apostrophe so the
/// URL is safe inside a single-quoted `onerror` handler.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

/// Placeholder color for categories without an entry.
pub const DEFAULT_CATEGORY_COLOR: &str = "1d3557";

/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Placeholder color for an event category, in either language.
pub fn category_color(category: &str) -> &'static str {
    match category {
        "موسيقى" | "Music" => "7B61FF",
        "فنون" | "Arts" => "00D4AA",
        "رياضة" | "Sports" => "FF6B9D",
        "عائلي" | "Family" => "9D4EDD",
        "أعمال" | "Business" => "00B8A9",
        "ثقافة" | "Culture" => "FF8E53",
        _ => DEFAULT_CATEGORY_COLOR,
    }
}

/// Generated image used when an event's own image fails to load.
pub fn placeholder_image(category: &str, title: &str) -> String {
    format!(
        "https://via.placeholder.com/800x500/{}/ffffff?text={}",
        category_color(category),
        utf8_percent_encode(title, URI_COMPONENT)
    )
}

/// Active slide of the hero slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    total: usize,
}

impl SliderState {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Jump to `index`; below zero wraps to the last slide, past the end to
    /// the first.
    pub fn go_to(&mut self, index: i64) {
        if self.total == 0 {
            return;
        }
        self.current = if index < 0 {
            self.total - 1
        } else if index as usize >= self.total {
            0
        } else {
            index as usize
        };
    }

    pub fn next(&mut self) {
        if self.total > 0 {
            self.current = (self.current + 1) % self.total;
        }
    }

    pub fn prev(&mut self) {
        if self.total > 0 {
            self.current = (self.current + self.total - 1) % self.total;
        }
    }
}

/// Renders event records for one display configuration.
#[derive(Debug, Clone, Copy)]
pub struct EventRenderer<'a> {
    binder: ContentBinder<'a>,
    locale: Locale,
    links: SiteLinks,
}

impl<'a> EventRenderer<'a> {
    pub fn new(store: &'a TranslationStore, config: DisplayConfig) -> Self {
        Self {
            binder: ContentBinder::new(store),
            locale: config.locale,
            links: SiteLinks::default(),
        }
    }

    pub fn with_links(mut self, links: SiteLinks) -> Self {
        self.links = links;
        self
    }

    fn label(&self, key: &str) -> String {
        self.binder.label(key, "span", self.locale)
    }

    fn text(&self, key: &str) -> String {
        escape_html(&self.binder.store().resolve(key, self.locale))
    }

    fn image(&self, event: &EventRecord, class: &str) -> String {
        format!(
            r#"<img src="{}" alt="{}" class="{}" onerror="this.onerror=null;this.src='{}'">"#,
            escape_html(&event.image),
            escape_html(&event.title),
            class,
            placeholder_image(&event.category, &event.title)
        )
    }

    fn meta(&self, event: &EventRecord) -> String {
        format!(
            r#"<div class="meta-item"><i class="fas fa-calendar-alt"></i><span>{}</span></div>
<div class="meta-item"><i class="fas fa-map-marker-alt"></i><span>{}</span></div>
<div class="meta-item"><i class="fas fa-tag"></i><span>{}</span></div>"#,
            event.date_key(),
            escape_html(&event.location),
            escape_html(&event.price)
        )
    }

    fn book_button(&self, event: &EventRecord, class: &str, key: &str) -> String {
        format!(
            r##"<button class="{}" data-bs-toggle="modal" data-bs-target="#bookingModal" data-event-id="{}"><i class="fas fa-ticket-alt me-2"></i>{}</button>"##,
            class,
            event.id,
            self.label(key)
        )
    }

    fn details_link(&self, event: &EventRecord, class: &str) -> String {
        format!(
            r#"<a href="{}" class="{}"><i class="fas fa-info-circle me-2"></i>{}</a>"#,
            escape_html(&self.links.event_detail(event.id)),
            class,
            self.label("common.details")
        )
    }

    // ==================== Slider ====================

    /// Hero slides, or a single "no events" slide for an empty list.
    pub fn slides(&self, events: &[&EventRecord], slider: &SliderState) -> String {
        if events.is_empty() {
            return format!(
                r#"<div class="no-events-slide"><div class="slide-content"><h3 data-i18n="common.noEvents">{}</h3><p data-i18n="common.checkBackLater">{}</p></div></div>"#,
                self.text("common.noEvents"),
                self.text("common.checkBackLater")
            );
        }

        events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let active = if index == slider.current() { " active" } else { "" };
                format!(
                    r#"<div class="slider-slide{active}" data-index="{index}">
<div class="slide-image-container">{image}</div>
<div class="slide-content">
<span class="slide-category">{category}</span>
<h2 class="slide-title">{title}</h2>
<p class="slide-description">{description}</p>
<div class="slide-meta">{meta}</div>
<div class="slide-actions">{book}{details}</div>
</div>
</div>"#,
                    image = self.image(event, "slide-image"),
                    category = escape_html(&event.category),
                    title = escape_html(&event.title),
                    description = escape_html(&event.description),
                    meta = self.meta(event),
                    book = self.book_button(event, "btn btn-primary slide-btn", "common.bookNow"),
                    details = self.details_link(event, "btn btn-outline-light slide-btn"),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One indicator button per slide.
    pub fn slider_indicators(&self, slider: &SliderState) -> String {
        (0..slider.total())
            .map(|index| {
                let active = if index == slider.current() { " active" } else { "" };
                format!(
                    r#"<a class="slider-indicator{}" data-index="{}" href="{}"></a>"#,
                    active,
                    index,
                    escape_html(&self.links.home_slide(index))
                )
            })
            .collect::<Vec<_>>()
            .join("")
    }

    // ==================== Cards ====================

    fn card(&self, event: &EventRecord, hidden: bool) -> String {
        let style = if hidden { r#" style="display: none""# } else { "" };
        format!(
            r#"<div class="event-card" data-category="{category}" data-date="{date}" data-location="{location}"{style}>
<div class="event-card-image">{image}<div class="event-card-badge">{category}</div></div>
<div class="card-body">
<h3 class="card-title">{title}</h3>
<p class="card-text">{description}</p>
<div class="event-meta">{meta}</div>
<div class="event-actions">{book}{details}</div>
</div>
</div>"#,
            category = escape_html(&event.category),
            date = event.date_key(),
            location = escape_html(&event.location),
            image = self.image(event, "event-card-img"),
            title = escape_html(&event.title),
            description = escape_html(&event.description),
            meta = self.meta(event),
            book = self.book_button(event, "btn-book", "common.bookNow"),
            details = self.details_link(event, "btn-details"),
        )
    }

    /// Featured grid: at most `max` cards.
    pub fn featured_cards(&self, events: &[&EventRecord], max: usize) -> String {
        events
            .iter()
            .take(max)
            .map(|event| self.card(event, false))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Full list after filtering: visible cards in sort order, then the
    /// hidden ones.
    pub fn list_cards(&self, outcome: &FilterOutcome<'_>) -> String {
        outcome
            .visible
            .iter()
            .map(|event| self.card(event, false))
            .chain(outcome.hidden.iter().map(|event| self.card(event, true)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Placeholder shown while a filtered view has no results.
    pub fn no_results(&self) -> String {
        format!(
            r#"<div id="noResultsMessage" class="col-12 text-center py-5"><div class="text-muted"><i class="fas fa-search fa-3x mb-3"></i><h4 data-i18n="common.noResults">{}</h4><p data-i18n="common.tryAgain">{}</p></div></div>"#,
            self.text("common.noResults"),
            self.text("common.tryAgain")
        )
    }

    pub fn results_count(&self, count: usize) -> String {
        self.binder
            .text_with("events.results", self.locale, &[("count", &count.to_string())])
    }

    // ==================== Filter Options ====================

    fn options(&self, all_key: &str, values: &[&str], selected: Option<&str>) -> String {
        let mut html = format!(r#"<option value="">{}</option>"#, self.text(all_key));
        for value in values {
            let mark = if selected == Some(*value) { " selected" } else { "" };
            let value = escape_html(value);
            html.push_str(&format!(r#"<option value="{value}"{mark}>{value}</option>"#));
        }
        html
    }

    pub fn category_options(
        &self,
        catalog: &EventCatalog<'_>,
        criteria: &FilterCriteria,
    ) -> String {
        self.options(
            "events.allCategories",
            &catalog.categories(),
            criteria.category.as_deref(),
        )
    }

    pub fn location_options(
        &self,
        catalog: &EventCatalog<'_>,
        criteria: &FilterCriteria,
    ) -> String {
        self.options(
            "events.allLocations",
            &catalog.locations(),
            criteria.location.as_deref(),
        )
    }

    pub fn sort_options(&self, selected: SortKey) -> String {
        [
            (SortKey::Date, "events.sortDate"),
            (SortKey::Name, "events.sortName"),
            (SortKey::Location, "events.sortLocation"),
        ]
        .iter()
        .map(|(key, label)| {
            let mark = if *key == selected { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                mark,
                self.text(label)
            )
        })
        .collect()
    }

    // ==================== Detail ====================

    /// Detail page body; `None` renders the "no results" section.
    pub fn detail(&self, event: Option<&EventRecord>) -> String {
        let Some(event) = event else {
            return format!(
                r#"<div class="container text-center py-5"><h3>{}</h3><a href="{}" class="btn btn-primary mt-3">{}</a></div>"#,
                self.text("common.noResults"),
                escape_html(&self.links.events()),
                self.text("home.viewAll")
            );
        };

        let full_description = match event.full_description.as_deref() {
            Some(text) if !text.is_empty() => escape_html(text),
            _ => self.text("event.moreDetailsSoon"),
        };
        let title = escape_html(&event.title);
        let category = escape_html(&event.category);
        let location = escape_html(&event.location);
        let price = escape_html(&event.price);
        let time = escape_html(&event.time);
        let date = event.date_key();

        let info_item = |icon: &str, key: &str, value: &str| {
            format!(
                r#"<div class="meta-item"><i class="fas {icon}"></i><div>{}<div class="text-muted">{value}</div></div></div>"#,
                self.binder.label(key, "strong", self.locale)
            )
        };
        let schedule_item = |icon: &str, key: &str, value: &str| {
            format!(
                r#"<li class="mb-3"><i class="fas {icon} text-primary me-2"></i>{} {value}</li>"#,
                self.binder.label(key, "strong", self.locale)
            )
        };

        format!(
            r#"<section class="event-detail-hero">
<div class="container"><div class="row justify-content-center"><div class="col-lg-10">
<h1>{title}</h1>
<p class="lead">{category} • {location}</p>
</div></div></div>
</section>
<div class="container"><div class="event-detail-content"><div class="row align-items-stretch">
<div class="col-lg-8"><div class="content-wrapper">
<div class="mb-5">{image}</div>
<div class="mb-5">
<h3 class="mb-4" data-i18n="event.about">{about}</h3>
<p class="fs-5 lh-lg">{description}</p>
<p class="fs-6 lh-lg text-muted">{full_description}</p>
</div>
<div class="mb-5">
<h4 class="mb-4" data-i18n="event.schedule">{schedule}</h4>
<div class="row">
<div class="col-md-6"><ul class="list-unstyled">{date_item}{time_item}</ul></div>
<div class="col-md-6"><ul class="list-unstyled">{venue_item}{price_item}</ul></div>
</div>
</div>
<div class="mb-5">
<h4 class="mb-4" data-i18n="event.location">{map_heading}</h4>
<div class="ratio ratio-16x9"><div class="d-flex align-items-center justify-content-center bg-light rounded shadow-sm">
<div class="text-center"><i class="fas fa-map-marker-alt fa-3x text-primary mb-3"></i><h5 class="text-muted">{location}</h5><p class="text-muted" data-i18n="event.city">{city}</p></div>
</div></div>
</div>
</div></div>
<div class="col-lg-4"><div class="card shadow-lg border-0 h-100"><div class="card-body p-4 d-flex flex-column">
<h5 class="card-title mb-4 text-center" data-i18n="event.bookingInfo">{booking_info}</h5>
<div class="event-meta flex-grow-1">{info}</div>
<div class="booking-actions mt-auto">{book}
<div class="text-center mt-3"><small class="text-muted" data-i18n="event.seatsLimited">{seats}</small></div>
</div>
</div></div></div>
</div></div></div>"#,
            image = self.image(event, "img-fluid rounded shadow-lg"),
            about = self.text("event.about"),
            description = escape_html(&event.description),
            schedule = self.text("event.schedule"),
            date_item = schedule_item("fa-calendar-alt", "event.date", &date),
            time_item = schedule_item("fa-clock", "event.time", &time),
            venue_item = schedule_item("fa-map-marker-alt", "event.venue", &location),
            price_item = schedule_item("fa-tag", "event.price", &price),
            map_heading = self.text("event.location"),
            city = self.text("event.city"),
            booking_info = self.text("event.bookingInfo"),
            info = [
                info_item("fa-calendar-alt", "event.date", &date),
                info_item("fa-clock", "event.time", &time),
                info_item("fa-map-marker-alt", "event.venue", &location),
                info_item("fa-tag", "event.price", &price),
                info_item("fa-users", "event.category", &category),
            ]
            .join(""),
            book = self.book_button(event, "btn btn-primary btn-lg w-100 py-3 fs-5", "event.bookNow"),
            seats = self.text("event.seatsLimited"),
        )
    }
}
