//! Read-only query facade
//!
//! Paginated list fetches with optional filters. These endpoints have no
//! ordering or state dependency on the action pipeline: no snapshot
//! refresh, no cooldown wait, and they may be issued at any time.

pub mod accounts;
pub mod achievements;
pub mod characters;
pub mod events;
pub mod grand_exchange;
pub mod items;
pub mod leaderboard;
pub mod maps;
pub mod monsters;
pub mod my_account;
pub mod resources;
pub mod tasks;

use std::fmt::Display;

/// Builder for the `size`/filter/`page` query strings the list endpoints
/// share. Pages are 100 entries, the server's maximum.
pub(crate) struct QueryString {
    params: Vec<(String, String)>,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self { params: vec![("size".to_string(), "100".to_string())] }
    }

    pub(crate) fn push(mut self, key: &str, value: impl Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub(crate) fn push_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub(crate) fn page(self, page: u32) -> Self {
        self.push("page", page)
    }

    pub(crate) fn apply(self, path: &str) -> String {
        let query: Vec<String> =
            self.params.into_iter().map(|(key, value)| format!("{key}={value}")).collect();
        format!("{path}?{}", query.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_requests_full_pages() {
        assert_eq!(QueryString::new().page(1).apply("items"), "items?size=100&page=1");
    }

    #[test]
    fn optional_filters_are_omitted_when_unset() {
        let path = QueryString::new()
            .push_opt("craft_skill", Some("cooking"))
            .push_opt("max_level", None::<u32>)
            .page(2)
            .apply("items");
        assert_eq!(path, "items?size=100&craft_skill=cooking&page=2");
    }
}
