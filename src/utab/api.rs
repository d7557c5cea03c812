//! # API Facade
//!
//! `UtabApi` is the single entry point for all view operations, regardless
//! of the UI driving it. It owns the [`SessionState`] and dispatches into the
//! pure engines in `commands/`.
//!
//! The facade returns structured [`CmdResult`] values and never touches
//! stdout, stderr or a terminal; presentation belongs to the client wired up
//! in `main.rs`.
//!
//! ## Generic Over UserSource
//!
//! `UtabApi<S: UserSource>` is generic over the upstream boundary:
//! - Production: `UtabApi<HttpSource>`
//! - Testing: `UtabApi<StaticSource>`
//!
//! This enables testing every navigation and interaction path without a
//! network.

use crate::client::UserSource;
use crate::commands::export::ExportFormat;
use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::route::{self, Route};
use crate::state::SessionState;

pub struct UtabApi<S: UserSource> {
    source: S,
    session: SessionState,
}

impl<S: UserSource> UtabApi<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            session: SessionState::new(),
        }
    }

    /// Resolves `token` and enters the corresponding view.
    ///
    /// Entering the list view fetches the full set unless the cache is warm
    /// and no refresh is forced; entering a detail view always fetches fresh.
    pub fn navigate(&mut self, token: &str, force_refresh: bool) -> Result<CmdResult> {
        let epoch = self.session.begin_navigation();
        match route::resolve_following_redirect(token) {
            Route::List => self.enter_list(epoch, force_refresh),
            Route::Detail(id) => self.enter_detail(&id),
            Route::NotFound => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning(format!("No such view: {}", token)));
                Ok(result)
            }
        }
    }

    /// Sort-header interaction: toggles the view's sort configuration and
    /// re-projects the list.
    pub fn sort_requested(&mut self, key: &str) -> Result<CmdResult> {
        self.session.view.toggle_sort(key);
        Ok(commands::list::run(
            self.session.visible(),
            &self.session.view,
        ))
    }

    /// Search-input interaction: recomputes the filtered subset from the
    /// full cached set and re-projects the list.
    pub fn search_changed(&mut self, query: &str) -> Result<CmdResult> {
        let filtered = commands::filter::run(self.session.cache().unwrap_or(&[]), query);
        self.session.view.filtered = Some(filtered);
        Ok(commands::list::run(
            self.session.visible(),
            &self.session.view,
        ))
    }

    /// Serializes the current view (filtered subset, or the full cache when
    /// no filter is active) into the requested format.
    pub fn export_requested(&self, format: ExportFormat) -> Result<CmdResult> {
        let payload = commands::export::run(self.session.visible(), format)?;
        Ok(CmdResult::default().with_export(payload))
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    fn enter_list(&mut self, epoch: u64, force_refresh: bool) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        if self.session.needs_fetch(force_refresh) {
            let users = self.source.fetch_users()?;
            let count = users.len();
            if !self.session.install_cache(epoch, users) {
                // A newer navigation superseded this fetch
                return Ok(result);
            }
            result.add_message(CmdMessage::success(format!("Fetched {} users", count)));
        } else {
            let count = self.session.cache().map_or(0, |c| c.len());
            result.add_message(CmdMessage::info(format!("{} users (cached)", count)));
        }
        let listed = commands::list::run(self.session.visible(), &self.session.view);
        result.listed_users = listed.listed_users;
        result.summary = listed.summary;
        Ok(result)
    }

    fn enter_detail(&mut self, id: &str) -> Result<CmdResult> {
        let user = self.source.fetch_user(id)?;
        Ok(CmdResult::default().with_user(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticSource;
    use crate::error::UtabError;
    use crate::model::User;

    fn make_user(id: u64, name: &str, email: &str) -> User {
        User {
            id,
            name: name.into(),
            email: email.into(),
            ..User::default()
        }
    }

    fn api_with(users: Vec<User>) -> UtabApi<StaticSource> {
        UtabApi::new(StaticSource::new(users))
    }

    #[test]
    fn list_view_fetches_and_lists_all_users() {
        let mut api = api_with(vec![make_user(1, "Amy", ""), make_user(2, "Bob", "")]);
        let result = api.navigate("users", false).unwrap();
        assert_eq!(result.listed_users.len(), 2);
        assert_eq!(result.summary.as_ref().unwrap().total, 2);
    }

    #[test]
    fn empty_token_redirects_into_the_list_view() {
        let mut api = api_with(vec![make_user(1, "Amy", "")]);
        let result = api.navigate("", false).unwrap();
        assert_eq!(result.listed_users.len(), 1);
    }

    #[test]
    fn warm_cache_skips_the_refetch() {
        let mut api = api_with(vec![make_user(1, "Amy", "")]);
        api.navigate("users", false).unwrap();
        api.navigate("users", false).unwrap();
        assert_eq!(api.source.list_fetches(), 1);
    }

    #[test]
    fn warm_cache_reports_the_cached_count() {
        let mut api = api_with(vec![make_user(1, "Amy", "")]);
        api.navigate("users", false).unwrap();
        let second = api.navigate("users", false).unwrap();
        assert!(matches!(
            second.messages[0].level,
            crate::commands::MessageLevel::Info
        ));
        assert_eq!(second.messages[0].content, "1 users (cached)");
    }

    #[test]
    fn forced_refresh_refetches() {
        let mut api = api_with(vec![make_user(1, "Amy", "")]);
        api.navigate("users", false).unwrap();
        api.navigate("users", true).unwrap();
        assert_eq!(api.source.list_fetches(), 2);
    }

    #[test]
    fn detail_view_always_fetches_fresh() {
        let mut api = api_with(vec![make_user(1, "Amy", "")]);
        let result = api.navigate("users/1", false).unwrap();
        assert_eq!(result.user.as_ref().unwrap().name, "Amy");
    }

    #[test]
    fn missing_detail_id_surfaces_as_not_found() {
        let mut api = api_with(vec![make_user(1, "Amy", "")]);
        assert!(matches!(
            api.navigate("users/99", false),
            Err(UtabError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_token_yields_a_warning_not_an_error() {
        let mut api = api_with(vec![]);
        let result = api.navigate("foo/bar", false).unwrap();
        assert!(result.listed_users.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn search_then_export_covers_only_the_filtered_subset() {
        let mut api = api_with(vec![
            make_user(1, "Amy", "a@x.com"),
            make_user(2, "Bob", "b@y.com"),
        ]);
        api.navigate("users", false).unwrap();
        let result = api.search_changed("a@x").unwrap();
        assert_eq!(result.listed_users.len(), 1);

        let exported = api.export_requested(ExportFormat::Csv).unwrap();
        let csv = exported.export.unwrap();
        assert!(csv.contains("a@x.com"));
        assert!(!csv.contains("b@y.com"));
    }

    #[test]
    fn repeated_sort_request_flips_the_direction() {
        let mut api = api_with(vec![make_user(1, "amy", ""), make_user(2, "Bob", "")]);
        api.navigate("users", false).unwrap();

        let asc = api.sort_requested("name").unwrap();
        assert_eq!(asc.listed_users[0].name, "amy");

        let desc = api.sort_requested("name").unwrap();
        assert_eq!(desc.listed_users[0].name, "Bob");
    }

    #[test]
    fn navigating_back_to_the_list_clears_filter_and_sort() {
        let mut api = api_with(vec![make_user(1, "Amy", ""), make_user(2, "Bob", "")]);
        api.navigate("users", false).unwrap();
        api.search_changed("amy").unwrap();
        api.sort_requested("name").unwrap();

        let result = api.navigate("users", false).unwrap();
        assert_eq!(result.listed_users.len(), 2);
        assert!(api.session().view.sort_key.is_none());
    }
}
