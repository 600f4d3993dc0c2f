use showbill_db::entities::artist;
use showbill_db::store::artists::ArtistDetail;
use showbill_db::store::venues::{Area, VenueDetail};
use showbill_db::store::{Schedule, ShowListing};

use super::format::{format_datetime, DateFormat};
use super::{escape, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Venues,
    Artists,
}

impl SearchKind {
    fn path(self) -> &'static str {
        match self {
            SearchKind::Venues => "venues",
            SearchKind::Artists => "artists",
        }
    }
}

fn image(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" class="thumb">"#,
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

fn external_link(link: Option<&str>, label: &str) -> String {
    match link {
        Some(href) => format!(
            r#"<p><a href="{}" rel="noopener">{label}</a></p>"#,
            escape(href)
        ),
        None => String::new(),
    }
}

pub fn home() -> Page {
    Page::new(
        "pages/home.html",
        "Home",
        r#"<h1>Showbill</h1>
<p>Find venues and artists, and list the shows that bring them together.</p>
<ul>
    <li><a href="/venues/create">List a venue</a></li>
    <li><a href="/artists/create">List an artist</a></li>
    <li><a href="/shows/create">List a show</a></li>
</ul>"#
            .to_string(),
    )
}

pub fn venues(areas: &[Area]) -> Page {
    let mut body = String::from("<h1>Venues</h1>\n");
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>\n");
    }
    for area in areas {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul class=\"items\">\n",
            escape(&area.city),
            escape(&area.state)
        ));
        for v in &area.venues {
            body.push_str(&format!(
                "<li><a href=\"/venues/{}\">{}</a> <span class=\"count\">{} upcoming</span></li>\n",
                v.id,
                escape(&v.name),
                v.num_upcoming_shows
            ));
        }
        body.push_str("</ul>\n");
    }
    Page::new("pages/venues.html", "Venues", body)
}

pub fn search_results(kind: SearchKind, term: &str, count: usize, matches: &[(i32, &str)]) -> Page {
    let path = kind.path();
    let mut body = format!(
        "<h1>Number of search results for \"{}\": {count}</h1>\n<ul class=\"items\">\n",
        escape(term)
    );
    for (id, name) in matches {
        body.push_str(&format!(
            "<li><a href=\"/{path}/{id}\">{}</a></li>\n",
            escape(name)
        ));
    }
    body.push_str("</ul>\n");
    Page::new("pages/search.html", "Search", body)
}

fn schedule_section(schedule: &Schedule, counterpart: fn(&ShowListing) -> String) -> String {
    let mut out = String::new();
    for (heading, listings) in [
        ("Upcoming Shows", &schedule.upcoming),
        ("Past Shows", &schedule.past),
    ] {
        out.push_str(&format!(
            "<section>\n<h2>{} {heading}</h2>\n<ul class=\"items\">\n",
            listings.len()
        ));
        for l in listings {
            out.push_str(&format!(
                "<li>{} <time>{}</time></li>\n",
                counterpart(l),
                escape(&format_datetime(&l.show.start_time, DateFormat::Medium))
            ));
        }
        out.push_str("</ul>\n</section>\n");
    }
    out
}

pub fn venue_detail(detail: &VenueDetail) -> Page {
    let v = &detail.venue;
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{image}
<p>{address}</p>
<p>{city}, {state}</p>
<p>{phone}</p>
{facebook}
<p><a href="/venues/{id}/edit">Edit</a></p>
{schedule}"#,
        name = escape(&v.name),
        id = v.id,
        image = image(v.image_link.as_deref(), &v.name),
        address = escape(&v.address),
        city = escape(&v.city),
        state = escape(&v.state),
        phone = escape(&v.phone),
        facebook = external_link(v.facebook_link.as_deref(), "Facebook"),
        schedule = schedule_section(&detail.schedule, |l| {
            format!(
                "{}<a href=\"/artists/{}\">{}</a>",
                image(l.artist_image_link.as_deref(), &l.artist_name),
                l.show.artist_id,
                escape(&l.artist_name)
            )
        }),
    );
    Page::new("pages/show_venue.html", v.name.clone(), body)
}

pub fn artists(list: &[artist::Model]) -> Page {
    let mut body = String::from("<h1>Artists</h1>\n<ul class=\"items\">\n");
    for a in list {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            a.id,
            escape(&a.name)
        ));
    }
    body.push_str("</ul>\n");
    Page::new("pages/artists.html", "Artists", body)
}

pub fn artist_detail(detail: &ArtistDetail) -> Page {
    let a = &detail.artist;
    let genres: String = a
        .genre_list()
        .into_iter()
        .map(|g| format!("<span class=\"genre\">{}</span>", escape(g)))
        .collect();
    let body = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{image}
<p class="genres">{genres}</p>
<p>{city}, {state}</p>
<p>{phone}</p>
{facebook}
<p><a href="/artists/{id}/edit">Edit</a></p>
{schedule}"#,
        name = escape(&a.name),
        id = a.id,
        image = image(a.image_link.as_deref(), &a.name),
        city = escape(&a.city),
        state = escape(&a.state),
        phone = escape(&a.phone),
        facebook = external_link(a.facebook_link.as_deref(), "Facebook"),
        schedule = schedule_section(&detail.schedule, |l| {
            format!(
                "{}<a href=\"/venues/{}\">{}</a>",
                image(l.venue_image_link.as_deref(), &l.venue_name),
                l.show.venue_id,
                escape(&l.venue_name)
            )
        }),
    );
    Page::new("pages/show_artist.html", a.name.clone(), body)
}

pub fn shows(listings: &[ShowListing]) -> Page {
    let mut body = String::from("<h1>Shows</h1>\n<ul class=\"items\">\n");
    for l in listings {
        body.push_str(&format!(
            "<li>{image}<a href=\"/artists/{artist_id}\">{artist}</a> at <a href=\"/venues/{venue_id}\">{venue}</a> <time>{when}</time></li>\n",
            image = image(l.artist_image_link.as_deref(), &l.artist_name),
            artist_id = l.show.artist_id,
            artist = escape(&l.artist_name),
            venue_id = l.show.venue_id,
            venue = escape(&l.venue_name),
            when = escape(&format_datetime(&l.show.start_time, DateFormat::Full)),
        ));
    }
    body.push_str("</ul>\n");
    Page::new("pages/shows.html", "Shows", body)
}

pub fn not_found() -> Page {
    Page::new(
        "errors/404.html",
        "Not Found",
        "<h1>Not Found</h1>\n<p>The page you were looking for does not exist.</p>".to_string(),
    )
}

pub fn server_error() -> Page {
    Page::new(
        "errors/500.html",
        "Server Error",
        "<h1>Something went wrong</h1>\n<p>The request could not be completed. Please try again.</p>"
            .to_string(),
    )
}
