//! Two views: the universe at `/` and an article at `/blog/:id`.

use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Universe,
    Article { id: String },
}

impl Route {
    /// Unrecognised paths land on the universe.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed.strip_prefix("/blog/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Article { id: id.to_string() },
            _ => Route::Universe,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Universe => "/".to_string(),
            Route::Article { id } => format!("/blog/{id}"),
        }
    }

    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Universe)
    }

    /// Push onto browser history; the caller updates view state.
    pub fn push(&self) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&self.to_path())) {
            log::error!("history push failed: {e:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Universe);
        assert_eq!(Route::from_path(""), Route::Universe);
        assert_eq!(Route::from_path("/blog/7"), Route::Article { id: "7".into() });
        assert_eq!(Route::from_path("/blog/7/"), Route::Article { id: "7".into() });
        assert_eq!(
            Route::from_path("/blog/does-not-exist"),
            Route::Article { id: "does-not-exist".into() }
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_universe() {
        assert_eq!(Route::from_path("/blog/"), Route::Universe);
        assert_eq!(Route::from_path("/blog/a/b"), Route::Universe);
        assert_eq!(Route::from_path("/about"), Route::Universe);
    }

    #[test]
    fn paths_round_trip() {
        for r in [Route::Universe, Route::Article { id: "3".into() }] {
            assert_eq!(Route::from_path(&r.to_path()), r);
        }
    }
}
