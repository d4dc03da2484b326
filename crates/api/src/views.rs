//! HTML view renderer.
//!
//! Templates are compiled into the binary and parsed once at startup.
//! Rendering is a pure `(template, context) -> HTML` step; each page has a
//! small helper that builds its context.

use folio_core::contact::MessageForm;
use folio_core::profile::{is_web_link, split_links, split_skills, ProfileForm};
use folio_db::models::profile::Profile;
use serde::Serialize;
use tera::{Context, Tera};

/// Public URL prefix uploaded assets are served under.
pub const ASSET_URL_PREFIX: &str = "/static/uploads";

pub const HOME: &str = "home.html";
pub const ENTRY_FORM: &str = "form.html";
pub const PORTFOLIO: &str = "portfolio.html";
pub const THANK_YOU: &str = "thankyou.html";
pub const CONTACT_FORM: &str = "contact.html";
pub const CONTACT_THANK_YOU: &str = "contact_thankyou.html";

/// Base layout first: the other templates extend it.
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    (HOME, include_str!("../templates/home.html")),
    (ENTRY_FORM, include_str!("../templates/form.html")),
    (PORTFOLIO, include_str!("../templates/portfolio.html")),
    (THANK_YOU, include_str!("../templates/thankyou.html")),
    (CONTACT_FORM, include_str!("../templates/contact.html")),
    (
        CONTACT_THANK_YOU,
        include_str!("../templates/contact_thankyou.html"),
    ),
];

/// A link from the profile's free-form links text.
#[derive(Debug, Serialize)]
struct LinkView {
    text: String,
    /// Only absolute http(s) links are rendered as anchors.
    clickable: bool,
}

/// Compiled template set.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parse every embedded template. Fails on a syntax error.
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    /// Render `template` with `context`.
    pub fn render(&self, template: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(template, context)
    }

    pub fn home(&self) -> Result<String, tera::Error> {
        self.render(HOME, &Context::new())
    }

    /// Entry form, optionally pre-filled with a rejected submission.
    pub fn entry_form(&self, form: &ProfileForm, error: Option<&str>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("form", form);
        context.insert("error", &error);
        self.render(ENTRY_FORM, &context)
    }

    pub fn portfolio(&self, profile: &Profile) -> Result<String, tera::Error> {
        let skills = profile
            .skills
            .as_deref()
            .map(split_skills)
            .unwrap_or_default();
        let links: Vec<LinkView> = profile
            .links
            .as_deref()
            .map(split_links)
            .unwrap_or_default()
            .into_iter()
            .map(|text| LinkView {
                clickable: is_web_link(&text),
                text,
            })
            .collect();

        let mut context = Context::new();
        context.insert("profile", profile);
        context.insert("full_name", &profile.full_name());
        context.insert("skills", &skills);
        context.insert("links", &links);
        context.insert("picture_url", &picture_url(profile));
        self.render(PORTFOLIO, &context)
    }

    /// Confirmation page for the latest profile, or the empty state.
    pub fn thank_you(&self, latest: Option<&Profile>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("profile", &latest);
        context.insert("full_name", &latest.map(Profile::full_name));
        self.render(THANK_YOU, &context)
    }

    pub fn contact_form(&self, form: &MessageForm, error: Option<&str>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("form", form);
        context.insert("error", &error);
        self.render(CONTACT_FORM, &context)
    }

    pub fn contact_thank_you(&self) -> Result<String, tera::Error> {
        self.render(CONTACT_THANK_YOU, &Context::new())
    }
}

/// Public URL of the profile image. Asset keys are generated server-side
/// and contain no markup, so templates emit this unescaped.
fn picture_url(profile: &Profile) -> Option<String> {
    profile
        .profile_picture
        .as_deref()
        .map(|key| format!("{ASSET_URL_PREFIX}/{key}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
