// src/specs/sessions.rs

use std::error::Error;
use std::sync::OnceLock;

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::EventConfig;
use crate::normalize::{derive_translation, format_duration, shorten_description, slug};
use crate::session::{Person, Session};

/// Selectors for the session listing page, parsed once per call site.
struct Selectors {
    article: Selector,
    title: Selector,
    link: Selector,
    speaker_list: Selector,
    description: Selector,
    track: Selector,
    room: Selector,
    date_time: Selector,
    format: Selector,
    language: Selector,
    translation: Selector,
    partner: Selector,
    pager_last: Selector,
}

impl Selectors {
    fn new() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            article: sel("article.node--type-session-conference")?,
            title: sel("h2.node__title")?,
            link: sel("a")?,
            speaker_list: sel("p.big-speaker-list")?,
            description: sel("div.field--name-field-teaser div.field__item")?,
            track: sel("div.field--name-field-tag a")?,
            room: sel("div.field--name-field-room")?,
            date_time: sel("div.field--name-field-date time")?,
            format: sel("div.field--name-field-format")?,
            language: sel("div.field--name-field-language")?,
            translation: sel("div.field--name-field-translation")?,
            partner: sel("span.session-has-partner")?,
            pager_last: sel("nav.pager li.pager__item--last a")?,
        })
    }
}

fn sel(css: &str) -> Result<Selector, Box<dyn Error>> {
    Selector::parse(css).map_err(|e| format!("bad selector `{css}`: {e}").into())
}

fn speaker_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// All session records on one listing page, in page order.
pub fn extract_sessions(doc: &Html, cfg: &EventConfig) -> Result<Vec<Session>, Box<dyn Error>> {
    let sels = Selectors::new()?;
    let mut out = Vec::new();
    for article in doc.select(&sels.article) {
        out.push(extract_one(article, &sels, cfg)?);
    }
    Ok(out)
}

/// Last page number from the pager's last-page link (`?page=N`).
/// Page numbering starts at 0, so the page count is this plus one.
pub fn last_page(doc: &Html) -> Result<u32, Box<dyn Error>> {
    let sels = Selectors::new()?;
    let link = doc
        .select(&sels.pager_last)
        .next()
        .ok_or("pager: last-page link not found")?;
    let href = link
        .value()
        .attr("href")
        .ok_or("pager: last-page link has no href")?;
    let page = query_param(href, "page").ok_or("pager: last-page link has no page parameter")?;
    Ok(page.parse()?)
}

/* ---------------- per-article extraction ---------------- */

fn extract_one(
    article: ElementRef,
    sels: &Selectors,
    cfg: &EventConfig,
) -> Result<Session, Box<dyn Error>> {
    let title_el = article
        .select(&sels.title)
        .next()
        .ok_or("session article without a title")?;
    let title = text_of(title_el);
    let href = title_el
        .select(&sels.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .ok_or_else(|| format!("session `{title}` has no link"))?;
    let url = format!("{}{}", cfg.base_url, href);

    // The listing no longer exposes numeric session ids; synthesize 0.
    let id = 0;

    let is_cancelled = article.value().classes().any(|c| c == "rp-cancelled");
    let is_partner_session = article.select(&sels.partner).next().is_some();

    let mut persons = Vec::new();
    if let Some(list) = article.select(&sels.speaker_list).next() {
        for a in list.select(&sels.link) {
            let public_name = text_of(a);
            let id = a.value().attr("href").and_then(|h| {
                speaker_id_re()
                    .find(h)
                    .and_then(|m| m.as_str().parse::<u64>().ok())
            });
            match id {
                Some(id) => persons.push(Person { id, public_name }),
                // degrade per speaker, never abort the page
                None => logw!("session `{title}`: speaker link without numeric id, skipping `{public_name}`"),
            }
        }
    }

    let description = text_of(require(article, &sels.description, &title, "description")?);
    let track = text_of(require(article, &sels.track, &title, "track")?);
    let kind = text_of(require(article, &sels.format, &title, "format")?);
    let language: String = text_of(require(article, &sels.language, &title, "language")?)
        .chars()
        .take(2)
        .collect::<String>()
        .to_lowercase();

    let room = article.select(&sels.room).next().map(text_of).unwrap_or_default();

    let times: Vec<ElementRef> = article.select(&sels.date_time).collect();
    let (start_datetime, end_datetime) = if times.len() >= 2 {
        (
            parse_instant(datetime_attr(times[0], &title)?, &cfg.tz)?,
            parse_instant(datetime_attr(times[1], &title)?, &cfg.tz)?,
        )
    } else {
        // No date block: assume the whole event window.
        (
            parse_instant(&format!("{}T06:00:00Z", cfg.first_day), &cfg.tz)?,
            parse_instant(&format!("{}T16:00:00Z", cfg.last_day), &cfg.tz)?,
        )
    };

    let explicit_translation = article.select(&sels.translation).next().map(text_of);
    let (translation, translation_derived) = derive_translation(
        explicit_translation.as_deref(),
        &room,
        is_partner_session,
        &cfg.translated_rooms,
    );

    Ok(Session {
        url,
        id,
        start_date: start_datetime.format("%Y-%m-%d").to_string(),
        start_time: start_datetime.format("%H:%M").to_string(),
        end_date: end_datetime.format("%Y-%m-%d").to_string(),
        end_time: end_datetime.format("%H:%M").to_string(),
        duration: format_duration(&start_datetime, &end_datetime),
        start_datetime,
        end_datetime,
        room,
        slug: slug(&title),
        summary: shorten_description(&description, 1, 20),
        title,
        persons,
        track,
        kind,
        language,
        description,
        translation,
        translation_derived,
        is_partner_session,
        is_cancelled,
    })
}

/* ---------------- helpers ---------------- */

fn require<'a>(
    article: ElementRef<'a>,
    sel: &Selector,
    title: &str,
    what: &str,
) -> Result<ElementRef<'a>, Box<dyn Error>> {
    article
        .select(sel)
        .next()
        .ok_or_else(|| format!("session `{title}` has no {what}").into())
}

fn text_of(el: ElementRef) -> String {
    let text: String = el.text().collect();
    text.trim().to_string()
}

fn datetime_attr<'a>(el: ElementRef<'a>, title: &str) -> Result<&'a str, Box<dyn Error>> {
    el.value()
        .attr("datetime")
        .ok_or_else(|| format!("session `{title}`: time element without datetime attribute").into())
}

fn parse_instant(raw: &str, tz: &Tz) -> Result<DateTime<Tz>, Box<dyn Error>> {
    Ok(DateTime::parse_from_rfc3339(raw)
        .map_err(|e| format!("bad datetime `{raw}`: {e}"))?
        .with_timezone(tz))
}

/// Value of one query parameter in a (possibly relative) href.
fn query_param<'a>(href: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);
    for pair in query.split('&') {
        if let Some((k, v)) = pair.split_once('=') {
            if k == key {
                return Some(v);
            }
        }
    }
    None
}

/* ---------------- Tests (offline fixtures) ---------------- */
