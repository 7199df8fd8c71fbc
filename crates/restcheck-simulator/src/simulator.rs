//! The simulator core: routes a request, applies rules and state, and asks
//! the synthesizer for the outgoing payload.

use std::sync::{Mutex, PoisonError};

use http::Method;
use serde_json::Value;

use crate::{
    router::{RouteHandler, Router, SimulatorError},
    rules,
    state::SessionState,
    synth::{self, SyntheticResponse},
};

/// Stateful request simulator for one test session.
///
/// Handling is effectively single-threaded: each simulated call
/// runs to completion before the next is dispatched. The mutex only exists
/// so the simulator can be shared behind an `Arc` as a transport.
pub struct Simulator {
    router: Router,
    state: Mutex<SessionState>,
}

impl Simulator {
    /// Create a simulator with a fresh session.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            state: Mutex::new(SessionState::new()),
        }
    }

    /// Clear deletion state. The test harness calls this before every case.
    pub fn reset(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }

    /// Handle one simulated request.
    ///
    /// # Errors
    ///
    /// Returns [`SimulatorError::UnhandledRoute`] for requests outside the
    /// route table; everything else is an `Ok` HTTP-shaped response,
    /// including 404 and 422 outcomes.
    pub fn handle(
        &self,
        method: &Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<SyntheticResponse, SimulatorError> {
        let matched = self.router.dispatch(method, path)?;
        // Non-object or absent bodies validate like an empty payload
        let fields = body
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let id = matched.id.unwrap_or_default();

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        let response = match matched.handler {
            RouteHandler::ListUsers => SyntheticResponse::ok(synth::canonical_users_list()),

            RouteHandler::GetUser => match Self::lookup_user(&state, &id) {
                Ok(numeric_id) => SyntheticResponse::ok(synth::canonical_user(numeric_id)),
                Err(not_found) => not_found,
            },

            RouteHandler::CreateUser => SyntheticResponse::from_validation(
                rules::validate_create_user(&fields),
                |accepted| SyntheticResponse::created(synth::created_user(&accepted)),
            ),

            RouteHandler::UpdateUser => match Self::lookup_user(&state, &id) {
                Ok(numeric_id) => SyntheticResponse::from_validation(
                    rules::validate_update_user(&fields),
                    |accepted| SyntheticResponse::ok(synth::updated_user(numeric_id, &accepted)),
                ),
                Err(not_found) => not_found,
            },

            RouteHandler::DeleteUser => match Self::lookup_user(&state, &id) {
                Ok(_) => {
                    state.mark_deleted(&id);
                    SyntheticResponse::no_content()
                }
                Err(not_found) => not_found,
            },

            RouteHandler::ListPosts => SyntheticResponse::ok(synth::canonical_posts_list()),
            RouteHandler::ListUserPosts => SyntheticResponse::ok(synth::canonical_user_posts()),

            RouteHandler::CreateUserPost => SyntheticResponse::from_validation(
                rules::validate_create_post(&fields),
                |accepted| SyntheticResponse::created(synth::created_post(&accepted)),
            ),

            RouteHandler::ListTodos => SyntheticResponse::ok(synth::canonical_todos_list()),
            RouteHandler::ListUserTodos => SyntheticResponse::ok(synth::canonical_user_todos()),

            RouteHandler::CreateUserTodo => SyntheticResponse::from_validation(
                rules::validate_create_todo(&fields),
                |accepted| SyntheticResponse::created(synth::created_todo(&accepted)),
            ),

            // Todo deletion is not tracked; the backend answers a flat 204
            RouteHandler::DeleteUserTodo => SyntheticResponse::no_content(),
        };

        tracing::debug!(%method, path, status = response.status, "simulated response");
        Ok(response)
    }

    /// Resolve a raw id segment to a findable numeric id.
    ///
    /// The deleted-check precedes the validity-check; both failures produce
    /// the same 404 response.
    fn lookup_user(state: &SessionState, id: &str) -> Result<u64, SyntheticResponse> {
        if state.is_deleted(id) {
            return Err(SyntheticResponse::not_found());
        }
        if !synth::is_valid_id(id) {
            return Err(SyntheticResponse::not_found());
        }
        id.parse::<u64>()
            .map_err(|_| SyntheticResponse::not_found())
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
