//! HTML pages for the contact form.
//!
//! Three pages: the form (empty or re-shown with errors), the spam error
//! page, and the thank-you page. Every interpolated value is escaped.

use axum::response::Html;
use contact_core::submission::{
    FIELD_CONTINENT, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_GENDER, FIELD_HONEYPOT,
    FIELD_LAST_NAME, FIELD_MESSAGE, FIELD_SUBJECT, MAX_FIELD_LENGTH,
};
use contact_core::validation::rules::{VALID_GENDERS, VALID_SUBJECTS};
use contact_core::{FieldErrors, SanitizedSubmission};

/// Encode HTML special characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    ))
}

// ---------------------------------------------------------------------------
// Form page
// ---------------------------------------------------------------------------

/// The contact form, pre-filled with `values` and annotated with `errors`.
pub fn form_page(values: &SanitizedSubmission, errors: &FieldErrors) -> Html<String> {
    let mut body = String::from("<h1>Contact us</h1>\n<form method=\"post\" action=\"/\">\n");

    text_input(&mut body, FIELD_FIRST_NAME, "First name", &values.first_name, errors);
    text_input(&mut body, FIELD_LAST_NAME, "Last name", &values.last_name, errors);
    text_input(&mut body, FIELD_EMAIL, "Email", &values.email, errors);
    text_input(&mut body, FIELD_CONTINENT, "Continent", &values.continent, errors);

    body.push_str(&format!(
        "<label for=\"{FIELD_MESSAGE}\">Message</label>\n\
         <textarea id=\"{FIELD_MESSAGE}\" name=\"{FIELD_MESSAGE}\" maxlength=\"{MAX_FIELD_LENGTH}\">{}</textarea>\n",
        escape_html(&values.message)
    ));
    field_error(&mut body, FIELD_MESSAGE, errors);

    select(&mut body, FIELD_GENDER, "Gender", VALID_GENDERS, &values.gender, errors);
    select(&mut body, FIELD_SUBJECT, "Subject", VALID_SUBJECTS, &values.subject, errors);

    body.push_str(&format!(
        "<div style=\"display:none\" aria-hidden=\"true\">\n\
         <input type=\"text\" name=\"{FIELD_HONEYPOT}\" tabindex=\"-1\" autocomplete=\"off\">\n</div>\n"
    ));
    body.push_str("<button type=\"submit\">Send</button>\n</form>\n");

    layout("Contact us", &body)
}

fn text_input(body: &mut String, name: &str, label: &str, value: &str, errors: &FieldErrors) {
    body.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" maxlength=\"{MAX_FIELD_LENGTH}\" value=\"{}\">\n",
        escape_html(value)
    ));
    field_error(body, name, errors);
}

fn select(
    body: &mut String,
    name: &str,
    label: &str,
    options: &[&str],
    current: &str,
    errors: &FieldErrors,
) {
    body.push_str(&format!(
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n\
         <option value=\"\">Choose one</option>\n"
    ));
    for option in options {
        let selected = if *option == current { " selected" } else { "" };
        body.push_str(&format!(
            "<option value=\"{0}\"{selected}>{0}</option>\n",
            escape_html(option)
        ));
    }
    body.push_str("</select>\n");
    field_error(body, name, errors);
}

fn field_error(body: &mut String, name: &str, errors: &FieldErrors) {
    if let Some(message) = errors.get(name) {
        body.push_str(&format!(
            "<p class=\"error\" data-field=\"{name}\">{}</p>\n",
            escape_html(message)
        ));
    }
}

// ---------------------------------------------------------------------------
// Spam page
// ---------------------------------------------------------------------------

/// Error page shown when the honeypot trips.
pub fn spam_page(errors: &FieldErrors) -> Html<String> {
    let mut body: String = errors
        .values()
        .map(|message| format!("<h1>{}</h1>\n", escape_html(message)))
        .collect();
    body.push_str("<p><a href=\"/\">Back to the form</a></p>\n");
    layout("Submission rejected", &body)
}

// ---------------------------------------------------------------------------
// Thank-you page
// ---------------------------------------------------------------------------

/// Confirmation page echoing the stored submission.
pub fn thank_you_page(submission: &SanitizedSubmission) -> Html<String> {
    let mut body = format!(
        "<h1>Thank you, {}!</h1>\n<p>We received your message.</p>\n<dl>\n",
        escape_html(&submission.first_name)
    );

    let rows = [
        ("First name", &submission.first_name),
        ("Last name", &submission.last_name),
        ("Email", &submission.email),
        ("Continent", &submission.continent),
        ("Message", &submission.message),
        ("Gender", &submission.gender),
        ("Subject", &submission.subject),
    ];
    for (label, value) in rows {
        body.push_str(&format!("<dt>{label}</dt><dd>{}</dd>\n", escape_html(value)));
    }
    body.push_str("</dl>\n");

    layout("Thank you", &body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
