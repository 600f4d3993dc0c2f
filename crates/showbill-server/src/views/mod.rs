//! Server-rendered HTML pages.
//!
//! Every page is a named template filled from a typed context and wrapped in
//! the shared layout. All interpolated values go through [`escape`].

pub mod format;
mod forms;
mod pages;

pub use forms::{artist_form, show_form, venue_form, FormMode};
pub use pages::{
    artist_detail, artists, home, not_found, search_results, server_error, shows, venue_detail,
    venues, SearchKind,
};

use axum::response::{Html, IntoResponse, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-time notification shown at the top of the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// A rendered template body waiting for the layout.
#[derive(Debug, Clone)]
pub struct Page {
    template: &'static str,
    title: String,
    body: String,
    flashes: Vec<Flash>,
}

impl Page {
    pub(crate) fn new(template: &'static str, title: impl Into<String>, body: String) -> Self {
        Self {
            template,
            title: title.into(),
            body,
            flashes: Vec::new(),
        }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn flash(mut self, flash: Flash) -> Self {
        self.flashes.push(flash);
        self
    }

    pub fn render(&self) -> String {
        let flashes: String = self
            .flashes
            .iter()
            .map(|f| {
                let class = match f.level {
                    FlashLevel::Success => "flash flash-success",
                    FlashLevel::Error => "flash flash-error",
                };
                format!(
                    r#"<div class="{class}" role="alert">{}</div>"#,
                    escape(&f.message)
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Showbill</title>
</head>
<body data-template="{template}">
    <nav>
        <a href="/">Showbill</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <form method="post" action="/venues/search" class="search"><input type="search" name="search_term" placeholder="Find a venue"></form>
        <form method="post" action="/artists/search" class="search"><input type="search" name="search_term" placeholder="Find an artist"></form>
    </nav>
    <main>
        {flashes}
        {body}
    </main>
</body>
</html>
"#,
            title = escape(&self.title),
            template = self.template,
            body = self.body,
        )
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        tracing::debug!(template = self.template, "rendering page");
        Html(self.render()).into_response()
    }
}

/// Escapes text for use in HTML content and quoted attributes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
