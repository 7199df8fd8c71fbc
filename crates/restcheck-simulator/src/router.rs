//! Route matcher
//!
//! Maps method + path to exactly one handler via an ordered route table.
//! Sub-collection routes are listed before the single-entity route: a naive
//! id-shaped pattern would otherwise swallow `/users/5/posts`. Single-entity
//! patterns accept any non-slash segment so hostile ids (SQL injection
//! strings, negative numbers) reach the validity check instead of falling
//! through to an unhandled-route error.

use http::Method;
use regex::Regex;
use thiserror::Error;

/// Errors raised by the simulation layer itself.
///
/// These are internal configuration gaps, never valid negative-test
/// outcomes; the harness must fail loudly when one surfaces.
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// No route in the table matches the request. The simulator's coverage
    /// is incomplete relative to what the suite exercises.
    #[error("no simulated route for {method} {path}")]
    UnhandledRoute {
        /// Request method
        method: String,
        /// Request path
        path: String,
    },
}

/// Handlers the route table can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteHandler {
    /// `GET /users`
    ListUsers,
    /// `GET /users/{id}`
    GetUser,
    /// `POST /users`
    CreateUser,
    /// `PATCH /users/{id}`
    UpdateUser,
    /// `DELETE /users/{id}`
    DeleteUser,
    /// `GET /posts`
    ListPosts,
    /// `GET /users/{id}/posts`
    ListUserPosts,
    /// `POST /users/{id}/posts`
    CreateUserPost,
    /// `GET /todos`
    ListTodos,
    /// `GET /users/{id}/todos`
    ListUserTodos,
    /// `POST /users/{id}/todos`
    CreateUserTodo,
    /// `DELETE /users/{id}/todos/{todo_id}`
    DeleteUserTodo,
}

/// A matched route: the handler plus any id segments captured from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Selected handler
    pub handler: RouteHandler,
    /// First captured id segment (`/users/{id}/...`), raw string form
    pub id: Option<String>,
    /// Second captured id segment (`/users/{id}/todos/{todo_id}`)
    pub child_id: Option<String>,
}

struct Route {
    method: Method,
    pattern: Regex,
    handler: RouteHandler,
}

/// Specificity-ordered route table.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Build the route table.
    ///
    /// # Panics
    ///
    /// Panics if a built-in route pattern fails to compile, which would be a
    /// bug in this module.
    pub fn new() -> Self {
        // Order matters: sub-collections before the bare-id routes.
        let table: &[(Method, &str, RouteHandler)] = &[
            (Method::GET, r"^/users/(\d+)/posts$", RouteHandler::ListUserPosts),
            (Method::POST, r"^/users/(\d+)/posts$", RouteHandler::CreateUserPost),
            (Method::GET, r"^/users/(\d+)/todos$", RouteHandler::ListUserTodos),
            (Method::POST, r"^/users/(\d+)/todos$", RouteHandler::CreateUserTodo),
            (
                Method::DELETE,
                r"^/users/(\d+)/todos/(\d+)$",
                RouteHandler::DeleteUserTodo,
            ),
            (Method::GET, r"^/users/([^/]+)$", RouteHandler::GetUser),
            (Method::PATCH, r"^/users/([^/]+)$", RouteHandler::UpdateUser),
            (Method::DELETE, r"^/users/([^/]+)$", RouteHandler::DeleteUser),
            (Method::GET, r"^/users$", RouteHandler::ListUsers),
            (Method::POST, r"^/users$", RouteHandler::CreateUser),
            (Method::GET, r"^/posts$", RouteHandler::ListPosts),
            (Method::GET, r"^/todos$", RouteHandler::ListTodos),
        ];

        let routes = table
            .iter()
            .map(|(method, pattern, handler)| Route {
                method: method.clone(),
                pattern: Regex::new(pattern).expect("route pattern is valid"),
                handler: *handler,
            })
            .collect();

        Self { routes }
    }

    /// Select the handler for a request, evaluating routes in table order.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::UnhandledRoute`] when nothing matches.
    pub fn dispatch(&self, method: &Method, path: &str) -> Result<RouteMatch, SimulatorError> {
        for route in &self.routes {
            if route.method != *method {
                continue;
            }
            if let Some(captures) = route.pattern.captures(path) {
                let id = captures.get(1).map(|m| m.as_str().to_string());
                let child_id = captures.get(2).map(|m| m.as_str().to_string());
                tracing::debug!(handler = ?route.handler, path, "route matched");
                return Ok(RouteMatch {
                    handler: route.handler,
                    id,
                    child_id,
                });
            }
        }

        Err(SimulatorError::UnhandledRoute {
            method: method.to_string(),
            path: path.to_string(),
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
