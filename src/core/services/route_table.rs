use crate::core::models::route::{Route, Routes};

/// Normalization and derived views over a decoded routing table.
///
/// Views scan in the mapping's iteration order (lexicographic by URL);
/// when several routes match, the first one wins.
pub struct RouteTable;

impl RouteTable {
    /// Copy each route's key into its `url` field.
    ///
    /// Must run once, right after decoding; the payload does not carry
    /// the URL inside the route itself.
    pub fn normalize(routes: &mut Routes) {
        for (url, route) in routes.iter_mut() {
            route.url.clone_from(url);
        }
    }

    /// First route whose id equals `id`. Routes without an id never match.
    pub fn by_id<'a>(routes: &'a Routes, id: &str) -> Option<&'a Route> {
        routes.values().find(|route| route.id.as_deref() == Some(id))
    }

    /// First route flagged as primary.
    pub fn primary(routes: &Routes) -> Option<&Route> {
        routes.values().find(|route| route.primary)
    }

    /// Routes forwarding to an application.
    pub fn upstream(routes: &Routes) -> Routes {
        Self::filtered(routes, Route::is_upstream)
    }

    /// Routes forwarding to the application named `app`.
    pub fn upstream_for_app(routes: &Routes, app: &str) -> Routes {
        Self::filtered(routes, |route| route.is_upstream() && route.upstream_app() == app)
    }

    fn filtered(routes: &Routes, keep: impl Fn(&Route) -> bool) -> Routes {
        routes
            .iter()
            .filter(|&(_, route)| keep(route))
            .map(|(url, route)| (url.clone(), route.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(route_type: &str, upstream: &str, id: Option<&str>, primary: bool) -> Route {
        Route {
            route_type: route_type.to_string(),
            upstream: upstream.to_string(),
            id: id.map(str::to_string),
            primary,
            ..Route::default()
        }
    }

    fn table() -> Routes {
        let mut routes = Routes::new();
        routes.insert(
            "https://www.example.com/".to_string(),
            route("upstream", "app:http", Some("main"), true),
        );
        routes.insert(
            "https://api.example.com/".to_string(),
            route("upstream", "api:http", Some("api"), false),
        );
        routes.insert(
            "https://example.com/".to_string(),
            route("redirect", "", None, false),
        );
        RouteTable::normalize(&mut routes);
        routes
    }

    #[test]
    fn normalize_sets_url_to_key() {
        let routes = table();

        for (key, route) in &routes {
            assert_eq!(&route.url, key);
        }
    }

    #[test]
    fn by_id_finds_route() {
        let routes = table();

        let found = RouteTable::by_id(&routes, "api").unwrap();

        assert_eq!(found.url, "https://api.example.com/");
        assert!(RouteTable::by_id(&routes, "missing").is_none());
    }

    #[test]
    fn by_id_ignores_routes_without_id() {
        let routes = table();

        assert!(RouteTable::by_id(&routes, "").is_none());
    }

    #[test]
    fn primary_finds_flagged_route() {
        let routes = table();

        let primary = RouteTable::primary(&routes).unwrap();

        assert_eq!(primary.id.as_deref(), Some("main"));
    }

    #[test]
    fn primary_absent_is_none() {
        let mut routes = table();
        for route in routes.values_mut() {
            route.primary = false;
        }

        assert!(RouteTable::primary(&routes).is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_url() {
        let mut routes = table();
        routes.insert(
            "https://aaa.example.com/".to_string(),
            route("upstream", "app:http", Some("main"), true),
        );
        RouteTable::normalize(&mut routes);

        let by_id = RouteTable::by_id(&routes, "main").unwrap();
        let primary = RouteTable::primary(&routes).unwrap();

        assert_eq!(by_id.url, "https://aaa.example.com/");
        assert_eq!(primary.url, "https://aaa.example.com/");
    }

    #[test]
    fn upstream_is_the_upstream_subset() {
        let routes = table();

        let upstream = RouteTable::upstream(&routes);

        assert_eq!(upstream.len(), 2);
        assert!(upstream.len() <= routes.len());
        assert!(upstream.values().all(Route::is_upstream));
    }

    #[test]
    fn upstream_for_app_matches_app_segment() {
        let routes = table();

        let api = RouteTable::upstream_for_app(&routes, "api");

        assert_eq!(api.len(), 1);
        assert!(api.contains_key("https://api.example.com/"));
        assert!(RouteTable::upstream_for_app(&routes, "ap").is_empty());
        assert!(RouteTable::upstream_for_app(&routes, "api:http").is_empty());
    }
}
