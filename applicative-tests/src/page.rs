//! Rendering a page from two independent HTTP fetches. Neither fetch needs the other's result,
//! so they are combined with `ap` and run concurrently.

use std::cell::RefCell;
use std::collections::HashMap;

use applicative::{curry2, Task};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("no route for {0}")]
    NotFound(String),
}

/// Canned responses keyed by path
#[derive(Debug, Default)]
pub struct FakeHttp {
    routes: HashMap<String, String>,
    log: RefCell<Vec<String>>,
}

impl FakeHttp {
    pub fn route(mut self, path: &str, body: &str) -> Self {
        self.routes.insert(path.to_string(), body.to_string());
        self
    }

    /// Every request start and finish, in the order they happened
    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    pub fn get<'h>(&'h self, path: &'h str) -> Task<'h, String, HttpError> {
        Task::new(async move {
            self.log.borrow_mut().push(format!("start {path}"));
            // give the other in-flight request a chance to start
            tokio::task::yield_now().await;
            self.log.borrow_mut().push(format!("finish {path}"));
            self.routes
                .get(path)
                .cloned()
                .ok_or_else(|| HttpError::NotFound(path.to_string()))
        })
    }
}

pub fn render_page(destinations: String, events: String) -> String {
    format!("<div>{destinations}</div><div>{events}</div>")
}

pub fn page(http: &FakeHttp) -> Task<'_, String, HttpError> {
    Task::of(curry2(render_page))
        .ap(http.get("/destinations"))
        .ap(http.get("/events"))
}
