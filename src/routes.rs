use std::fmt;

use crate::models::PropertyId;

/// Navigable views of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Raw query string, without the leading `?`
    Search(String),
    Property(PropertyId),
    Favorites,
    Compare,
    Login,
    Signup,
}

impl Route {
    /// Parse a path such as `/search?q=loft` or `/property/3`.
    /// Anything unrecognised resolves to home.
    pub fn parse(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path, ""),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["search"] => Route::Search(query.to_string()),
            ["property", id] => id.parse().map(Route::Property).unwrap_or(Route::Home),
            ["favorites"] => Route::Favorites,
            ["compare"] => Route::Compare,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            _ => Route::Home,
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Favorites | Route::Compare)
    }

    /// Where navigation actually lands given the sign-in state.
    pub fn resolve(self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Search(query) if query.is_empty() => write!(f, "/search"),
            Route::Search(query) => write!(f, "/search?{}", query),
            Route::Property(id) => write!(f, "/property/{}", id),
            Route::Favorites => write!(f, "/favorites"),
            Route::Compare => write!(f, "/compare"),
            Route::Login => write!(f, "/login"),
            Route::Signup => write!(f, "/signup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/property/3"), Route::Property(3));
        assert_eq!(Route::parse("/search?q=loft&type=loft"), Route::Search("q=loft&type=loft".to_string()));
        assert_eq!(Route::parse("/compare/"), Route::Compare);
    }

    #[test]
    fn unknown_paths_and_bad_ids_go_home() {
        assert_eq!(Route::parse("/admin"), Route::Home);
        assert_eq!(Route::parse("/property/abc"), Route::Home);
    }

    #[test]
    fn gated_views_redirect_to_login() {
        assert_eq!(Route::Favorites.resolve(false), Route::Login);
        assert_eq!(Route::Compare.resolve(true), Route::Compare);
        assert_eq!(Route::Property(1).resolve(false), Route::Property(1));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for route in [Route::Home, Route::Search("q=loft".to_string()), Route::Property(8), Route::Signup] {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }
}
