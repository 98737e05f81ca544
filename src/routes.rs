//! Routing boundary
//!
//! Views ask for navigation by [`Route`]; the router behind [`Navigator`]
//! belongs to the UI runtime.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Browser history back.
    Back,
    StudentLogin,
    StudentDashboard,
    Results,
    CreateQuiz,
    QuizResults(String),
}

impl Route {
    /// Path for the router; `None` for history navigation.
    pub fn path(&self) -> Option<String> {
        let path = match self {
            Route::Home => "/".to_string(),
            Route::Back => return None,
            Route::StudentLogin => "/student/login".to_string(),
            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::Results => "/results".to_string(),
            Route::CreateQuiz => "/create-quiz".to_string(),
            Route::QuizResults(id) => format!("/quiz/{}/results", id),
        };
        Some(path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => f.write_str(&path),
            None => f.write_str("<back>"),
        }
    }
}

/// Something that can move the user to another screen.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}
