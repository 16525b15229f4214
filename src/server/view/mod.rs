//! Server-side rendering with Tera.
//!
//! Templates are embedded at compile time so the binary does not depend on the working
//! directory. Handlers render through [`Views::render`] with a [`tera::Context`] that already
//! holds the current user (see [`crate::server::middleware::locals`]).

use axum::response::Html;
use tera::{Context, Tera};

use crate::server::error::Error;

const TPL_LAYOUT: &str = include_str!("templates/layout.html");
const TPL_INDEX: &str = include_str!("templates/index.html");
const TPL_ERROR: &str = include_str!("templates/error.html");
const TPL_POST_LIST: &str = include_str!("templates/post/list.html");
const TPL_POST_DETAIL: &str = include_str!("templates/post/detail.html");
const TPL_POST_WRITE: &str = include_str!("templates/post/write.html");
const TPL_USER_JOIN: &str = include_str!("templates/user/join.html");
const TPL_USER_LOGIN: &str = include_str!("templates/user/login.html");

pub struct Views {
    tera: Tera,
}

impl Views {
    /// Registers every embedded template.
    ///
    /// Fails when a template does not parse, which is a bug in the templates themselves.
    pub fn new() -> Result<Self, Error> {
        let mut tera = Tera::default();

        // The layout must be registered before the templates extending it
        tera.add_raw_templates(vec![
            ("layout.html", TPL_LAYOUT),
            ("index.html", TPL_INDEX),
            ("error.html", TPL_ERROR),
            ("post/list.html", TPL_POST_LIST),
            ("post/detail.html", TPL_POST_DETAIL),
            ("post/write.html", TPL_POST_WRITE),
            ("user/join.html", TPL_USER_JOIN),
            ("user/login.html", TPL_USER_LOGIN),
        ])?;

        Ok(Self { tera })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, Error> {
        Ok(Html(self.tera.render(template, context)?))
    }
}
