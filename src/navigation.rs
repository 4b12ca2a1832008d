use crate::utils;
use actix_web::HttpResponse;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateOptions {
    /// Overwrite the current history entry instead of pushing a new one.
    pub replace: bool,
    pub state: Option<serde_json::Value>,
}

impl NavigateOptions {
    pub fn replace() -> Self {
        Self {
            replace: true,
            state: None,
        }
    }
}

pub trait Navigator {
    fn navigate(&mut self, path: &str, options: NavigateOptions);
}

/// Turns the first navigation a page asks for into a `303 See Other`.
///
/// Post/redirect/get already keeps the form submission out of the history,
/// so `replace` needs no extra handling and `state` is never carried.
#[derive(Debug, Default)]
pub struct Redirect {
    location: Option<String>,
}

impl Redirect {
    pub fn into_response(self) -> Option<HttpResponse> {
        self.location.map(|l| utils::see_other(&l))
    }
}

impl Navigator for Redirect {
    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        if self.location.is_some() {
            tracing::debug!(path, "Ignoring navigation after the page already navigated away");
            return;
        }
        tracing::debug!(path, replace = options.replace, "Navigating");
        self.location = Some(path.to_owned());
    }
}
