use showbill_db::forms::{FieldKind, FieldSpec, FormData, ARTIST_FIELDS, SHOW_FIELDS, VENUE_FIELDS};
use showbill_db::ValidationError;

use super::{escape, Page};

/// Whether a record form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    Create,
    Edit { id: i32, name: &'a str },
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Phone => "tel",
        FieldKind::Url => "url",
        FieldKind::Integer => "number",
        FieldKind::Timestamp => "text",
    }
}

fn render_fields(schema: &[FieldSpec], values: &FormData, errors: &ValidationError) -> String {
    let mut out = String::new();
    for spec in schema {
        let value = values.get(spec.name).unwrap_or_default();
        let required = if spec.required { " required" } else { "" };
        out.push_str(&format!(
            "<div class=\"field\">\n<label for=\"{name}\">{label}</label>\n<input type=\"{kind}\" id=\"{name}\" name=\"{name}\" value=\"{value}\"{required}>\n",
            name = spec.name,
            label = spec.label,
            kind = input_type(spec.kind),
            value = escape(value),
        ));
        if let Some(message) = errors.get(spec.name) {
            out.push_str(&format!(
                "<p class=\"field-error\">{}</p>\n",
                escape(message)
            ));
        }
        out.push_str("</div>\n");
    }
    out
}

fn record_form(
    noun: &str,
    path: &str,
    templates: (&'static str, &'static str),
    schema: &[FieldSpec],
    mode: FormMode<'_>,
    values: &FormData,
    errors: &ValidationError,
) -> Page {
    let (template, heading, action, submit) = match mode {
        FormMode::Create => (
            templates.0,
            format!("List a new {noun}"),
            format!("/{path}/create"),
            format!("Create {noun}"),
        ),
        FormMode::Edit { id, name } => (
            templates.1,
            format!("Edit {noun} {name}"),
            format!("/{path}/{id}/edit"),
            "Save changes".to_string(),
        ),
    };
    let body = format!(
        "<h1>{heading}</h1>\n<form method=\"post\" action=\"{action}\" class=\"form\">\n{fields}<input type=\"submit\" value=\"{submit}\">\n</form>\n",
        heading = escape(&heading),
        fields = render_fields(schema, values, errors),
    );
    Page::new(template, heading, body)
}

pub fn venue_form(mode: FormMode<'_>, values: &FormData, errors: &ValidationError) -> Page {
    record_form(
        "venue",
        "venues",
        ("forms/new_venue.html", "forms/edit_venue.html"),
        VENUE_FIELDS,
        mode,
        values,
        errors,
    )
}

pub fn artist_form(mode: FormMode<'_>, values: &FormData, errors: &ValidationError) -> Page {
    record_form(
        "artist",
        "artists",
        ("forms/new_artist.html", "forms/edit_artist.html"),
        ARTIST_FIELDS,
        mode,
        values,
        errors,
    )
}

pub fn show_form(values: &FormData, errors: &ValidationError) -> Page {
    record_form(
        "show",
        "shows",
        ("forms/new_show.html", "forms/new_show.html"),
        SHOW_FIELDS,
        FormMode::Create,
        values,
        errors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_venue_form_is_empty() {
        let page = venue_form(FormMode::Create, &FormData::default(), &ValidationError::new());
        assert_eq!(page.template(), "forms/new_venue.html");
        let html = page.render();
        assert!(html.contains(r#"action="/venues/create""#));
        assert!(html.contains(r#"<input type="text" id="name" name="name" value="" required>"#));
        assert!(html.contains(r#"<input type="url" id="image_link" name="image_link" value="">"#));
    }

    #[test]
    fn test_edit_form_prefilled_and_escaped() {
        let values: FormData = [("name", "Tom's \"Bar\""), ("phone", "123-123-1234")]
            .into_iter()
            .collect();
        let page = artist_form(
            FormMode::Edit {
                id: 3,
                name: "Tom's \"Bar\"",
            },
            &values,
            &ValidationError::new(),
        );
        assert_eq!(page.template(), "forms/edit_artist.html");
        let html = page.render();
        assert!(html.contains(r#"action="/artists/3/edit""#));
        assert!(html.contains(r#"value="Tom&#39;s &quot;Bar&quot;""#));
        assert!(html.contains(r#"value="123-123-1234""#));
    }

    #[test]
    fn test_field_errors_rendered() {
        let mut errors = ValidationError::new();
        errors.add("start_time", "Start Time is not a recognised date and time");
        let html = show_form(&FormData::default(), &errors).render();
        assert!(html.contains(
            r#"<p class="field-error">Start Time is not a recognised date and time</p>"#
        ));
        assert!(html.contains(r#"action="/shows/create""#));
    }
}
