//! Client-side routes

use std::fmt;

const REVIEW_PREFIX: &str = "/admin/review_application";
const ADMIT_PREFIX: &str = "/admin/admit_student";

/// A screen the router can mount
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    /// `None` when the path carried no identifier
    ReviewApplication(Option<String>),
    AdmitStudent(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "" | "/" => return Route::Home,
            "/login" => return Route::Login,
            "/register" => return Route::Register,
            REVIEW_PREFIX => return Route::ReviewApplication(None),
            _ => {}
        }

        if let Some(id) = tail_segment(normalized, REVIEW_PREFIX) {
            return Route::ReviewApplication(Some(id.to_string()));
        }
        if let Some(id) = tail_segment(normalized, ADMIT_PREFIX) {
            return Route::AdmitStudent(id.to_string());
        }

        Route::NotFound(trimmed.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => String::from("/"),
            Route::Login => String::from("/login"),
            Route::Register => String::from("/register"),
            Route::ReviewApplication(Some(id)) => format!("{}/{}", REVIEW_PREFIX, id),
            Route::ReviewApplication(None) => format!("{}/", REVIEW_PREFIX),
            Route::AdmitStudent(id) => format!("{}/{}", ADMIT_PREFIX, id),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::Register => "Register",
            Route::ReviewApplication(_) => "Review Application",
            Route::AdmitStudent(_) => "Admit Student",
            Route::NotFound(_) => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Single non-empty segment following `prefix/`
fn tail_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?.strip_prefix('/')?;
    if rest.is_empty() || rest.contains('/') {
        None
    } else {
        Some(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/login/"), Route::Login);
        assert_eq!(Route::parse(" /register "), Route::Register);
    }

    #[test]
    fn test_parse_review_route() {
        assert_eq!(
            Route::parse("/admin/review_application/42"),
            Route::ReviewApplication(Some("42".to_string()))
        );
        assert_eq!(Route::parse("/admin/review_application/"), Route::ReviewApplication(None));
        assert_eq!(Route::parse("/admin/review_application"), Route::ReviewApplication(None));
    }

    #[test]
    fn test_admit_route_round_trip() {
        let route = Route::AdmitStudent("7".to_string());
        assert_eq!(route.path(), "/admin/admit_student/7");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::parse("/nope"), Route::NotFound("/nope".to_string()));
        assert!(matches!(Route::parse("/admin/review_application/1/2"), Route::NotFound(_)));
    }
}
