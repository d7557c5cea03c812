/// The canonical token for the list view.
pub const LIST_TOKEN: &str = "users";

/// A resolved view destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// Detail view for a single user. The id is carried verbatim; whether it
    /// names an existing user is the fetch step's concern.
    Detail(String),
    NotFound,
}

/// Outcome of resolving a location token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The token had no path segments; callers should navigate to the
    /// returned canonical token instead.
    Redirect(String),
    View(Route),
}

/// Maps a location token to a view.
///
/// Empty token redirects to `users`. `users` is the list view,
/// `users/<value>` the detail view for `<value>`, anything else is not found.
pub fn resolve(token: &str) -> Resolution {
    let segments: Vec<&str> = token.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => Resolution::Redirect(LIST_TOKEN.to_string()),
        ["users"] => Resolution::View(Route::List),
        ["users", id] => Resolution::View(Route::Detail((*id).to_string())),
        _ => Resolution::View(Route::NotFound),
    }
}

/// Resolves a token, following the empty-token redirect to its destination.
pub fn resolve_following_redirect(token: &str) -> Route {
    match resolve(token) {
        Resolution::View(route) => route,
        Resolution::Redirect(canonical) => match resolve(&canonical) {
            Resolution::View(route) => route,
            // The canonical token never redirects again
            Resolution::Redirect(_) => Route::NotFound,
        },
    }
}
