//! Property and sequence tests for the simulator
//!
//! Covers the contract the conformance suite depends on: id echoing across
//! the valid range, not-found idempotence after deletion, and reset
//! behavior.

use http::Method;
use proptest::prelude::*;
use restcheck_simulator::{Simulator, SENTINEL_NOT_FOUND_ID};
use rstest::rstest;

fn get_user_status(simulator: &Simulator, id: &str) -> u16 {
    simulator
        .handle(&Method::GET, &format!("/users/{}", id), None)
        .expect("route must be handled")
        .status
}

proptest! {
    #[test]
    fn get_user_echoes_any_valid_id(n in 1u64..5_000_000u64) {
        prop_assume!(n != SENTINEL_NOT_FOUND_ID);

        let simulator = Simulator::new();
        let response = simulator
            .handle(&Method::GET, &format!("/users/{}", n), None)
            .expect("route must be handled");

        prop_assert_eq!(response.status, 200);
        prop_assert_eq!(&response.body.expect("200 carries a body")["id"], n);
    }

    #[test]
    fn non_numeric_ids_are_not_found(id in "[a-zA-Z][a-zA-Z0-9 ;']{0,12}") {
        let simulator = Simulator::new();
        prop_assert_eq!(get_user_status(&simulator, &id), 404);
    }

    #[test]
    fn deletion_survives_any_interleaved_reads(n in 1u64..999u64, reads in 1usize..5) {
        let simulator = Simulator::new();
        let path = format!("/users/{}", n);

        simulator.handle(&Method::DELETE, &path, None).expect("delete");
        for _ in 0..reads {
            let status = simulator
                .handle(&Method::GET, &path, None)
                .expect("get")
                .status;
            prop_assert_eq!(status, 404);
        }
    }
}

#[rstest]
#[case("999999")]
#[case("0")]
#[case("-5")]
#[case("null")]
fn reserved_and_invalid_ids_are_not_found(#[case] id: &str) {
    let simulator = Simulator::new();
    assert_eq!(get_user_status(&simulator, id), 404);
}

#[test]
fn not_found_is_idempotent_across_verbs_after_delete() {
    let simulator = Simulator::new();
    simulator
        .handle(&Method::DELETE, "/users/8", None)
        .expect("delete");

    for method in [Method::GET, Method::PATCH, Method::DELETE] {
        let status = simulator
            .handle(&method, "/users/8", None)
            .expect("handled")
            .status;
        assert_eq!(status, 404, "{} after delete must be 404", method);
    }
}

#[test]
fn reset_makes_a_deleted_id_behave_as_never_deleted() {
    let simulator = Simulator::new();
    simulator
        .handle(&Method::DELETE, "/users/8", None)
        .expect("delete");
    assert_eq!(get_user_status(&simulator, "8"), 404);

    simulator.reset();
    assert_eq!(get_user_status(&simulator, "8"), 200);

    // And the id can be deleted again in the new session
    let status = simulator
        .handle(&Method::DELETE, "/users/8", None)
        .expect("delete")
        .status;
    assert_eq!(status, 204);
}

#[test]
fn route_specificity_returns_post_list_not_user_entity() {
    let simulator = Simulator::new();
    let response = simulator
        .handle(&Method::GET, "/users/5/posts", None)
        .expect("handled");

    assert_eq!(response.status, 200);
    let body = response.body.expect("list body");
    assert!(body.is_array(), "sub-collection must be a list, not a user");
    assert_eq!(body.as_array().expect("array").len(), 1);
}
