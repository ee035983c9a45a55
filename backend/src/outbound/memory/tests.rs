//! Behaviour of the in-memory store through its ports.

use std::time::Duration;

use super::*;
use crate::domain::{ConnectionStatus, DisplayName, EdgeStatus, ErrorCode};
use rstest::{fixture, rstest};
use tokio::time::Instant;

fn id(raw: &str) -> UserId {
    UserId::new(raw).expect("fixture id")
}

fn names(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|rec| rec.user().name().as_ref())
        .collect()
}

#[fixture]
fn store() -> SocialGraphStore {
    SocialGraphStore::new(SocialGraphSeed::builtin().expect("builtin seed"))
        .with_latency(SimulatedLatency::NONE)
}

#[rstest]
#[case("jack@example.com", "secret")]
#[case("a", "b")]
#[tokio::test]
async fn authenticate_returns_token_and_current_user(
    store: SocialGraphStore,
    #[case] email: &str,
    #[case] password: &str,
) {
    let session = store
        .authenticate(email, password)
        .await
        .expect("login succeeds");
    assert_eq!(session.token, MOCK_SESSION_TOKEN);
    assert_eq!(session.user.id.as_ref(), "u_me");
    assert_eq!(session.user.name.as_ref(), "Jack");
}

#[rstest]
#[case("", "secret")]
#[case("jack@example.com", "")]
#[case("", "")]
#[tokio::test]
async fn authenticate_rejects_missing_credentials(
    store: SocialGraphStore,
    #[case] email: &str,
    #[case] password: &str,
) {
    let err = store
        .authenticate(email, password)
        .await
        .expect_err("login must fail");
    assert_eq!(err.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn authenticate_reflects_renamed_user(store: SocialGraphStore) {
    store
        .update_current_user(UserPatch {
            name: Some(DisplayName::new("Jackie").expect("name")),
            ..UserPatch::default()
        })
        .await
        .expect("update");
    let session = store.authenticate("a", "b").await.expect("login");
    assert_eq!(session.user.name.as_ref(), "Jackie");
}

#[rstest]
#[tokio::test]
async fn update_merges_only_provided_fields(store: SocialGraphStore) {
    let before = store.current_user().await.expect("current user");
    let updated = store
        .update_current_user(UserPatch {
            bio: Some("Coffee first".to_owned()),
            ..UserPatch::default()
        })
        .await
        .expect("update");

    assert_eq!(updated.bio(), Some("Coffee first"));
    assert_eq!(updated.city(), before.city());
    assert_eq!(updated.interests(), before.interests());
    assert_eq!(updated.name(), before.name());
    assert_eq!(store.current_user().await.expect("current user"), updated);
}

#[rstest]
#[tokio::test]
async fn reapplying_an_update_result_is_idempotent(store: SocialGraphStore) {
    let first = store
        .update_current_user(UserPatch {
            city: Some("Kaohsiung".to_owned()),
            avatar: Some("avatars/jack.png".to_owned()),
            ..UserPatch::default()
        })
        .await
        .expect("first update");
    let second = store
        .update_current_user(UserPatch::from(first.clone()))
        .await
        .expect("second update");

    assert_eq!(second, first);
    assert_eq!(store.current_user().await.expect("current user"), first);
}

#[rstest]
#[case(2, None, &["Sophie", "Yuki"])]
#[case(3, None, &["Sophie", "Kevin", "Yuki"])]
#[case(3, Some("Taipei"), &["Sophie", "Yuki"])]
#[case(3, Some("Taichung"), &["Kevin"])]
#[case(3, Some(""), &["Sophie", "Kevin", "Yuki"])]
#[case(1, None, &[])]
#[tokio::test]
async fn recommendations_filter_by_degree_then_city(
    store: SocialGraphStore,
    #[case] max_degrees: u32,
    #[case] city: Option<&str>,
    #[case] expected: &[&str],
) {
    let filter = RecommendationFilter {
        max_degrees,
        city: city.map(str::to_owned),
    };
    let recommendations = store
        .list_recommendations(&filter)
        .await
        .expect("recommendations");
    assert_eq!(names(&recommendations), expected);
}

#[rstest]
#[tokio::test]
async fn filtering_recommendations_is_non_destructive(store: SocialGraphStore) {
    let narrow = RecommendationFilter::within(2).in_city("Taipei");
    store.list_recommendations(&narrow).await.expect("narrow");

    let all = store
        .list_recommendations(&RecommendationFilter::within(10))
        .await
        .expect("all");
    assert_eq!(names(&all), ["Sophie", "Kevin", "Yuki"]);
}

#[rstest]
#[tokio::test]
async fn invite_puts_pending_out_connection_first(store: SocialGraphStore) {
    let before = store.list_connections().await.expect("connections");
    let ack = store.invite_friend("friend@x.com").await.expect("invite");
    assert_eq!(ack, MutationAck::OK);

    let after = store.list_connections().await.expect("connections");
    assert_eq!(after.len(), before.len() + 1);
    let head = after.first().expect("new connection");
    assert_eq!(head.name.as_ref(), "friend@x.com");
    assert_eq!(head.status, ConnectionStatus::PendingOut);
    assert_eq!(&after[1..], before.as_slice());
}

#[rstest]
#[tokio::test]
async fn invite_without_identifier_uses_placeholder(store: SocialGraphStore) {
    store.invite_friend("").await.expect("invite");
    let connections = store.list_connections().await.expect("connections");
    let head = connections.first().expect("new connection");
    assert_eq!(head.name.as_ref(), INVITED_FRIEND_NAME);
}

#[rstest]
#[tokio::test]
async fn whitespace_invite_keeps_identifier_as_name(store: SocialGraphStore) {
    store.invite_friend("   ").await.expect("invite");
    let connections = store.list_connections().await.expect("connections");
    let head = connections.first().expect("new connection");
    assert_eq!(head.name.as_ref(), "   ");
    assert_eq!(head.status, ConnectionStatus::PendingOut);
}

#[rstest]
#[tokio::test]
async fn repeated_invites_get_distinct_ids(store: SocialGraphStore) {
    store.invite_friend("one@x.com").await.expect("invite");
    store.invite_friend("two@x.com").await.expect("invite");
    let connections = store.list_connections().await.expect("connections");
    let (newest, older) = match connections.as_slice() {
        [newest, older, ..] => (newest, older),
        other => panic!("expected at least two connections, got {other:?}"),
    };
    assert_eq!(newest.name.as_ref(), "two@x.com");
    assert_eq!(older.name.as_ref(), "one@x.com");
    assert_ne!(newest.id, older.id);
}

#[rstest]
#[tokio::test]
async fn accepting_pending_invite_changes_only_that_record(store: SocialGraphStore) {
    let before = store.list_connections().await.expect("connections");
    store.accept_invite(&id("u_c")).await.expect("accept");
    let after = store.list_connections().await.expect("connections");

    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(&after) {
        if old.id == id("u_c") {
            assert_eq!(old.status, ConnectionStatus::PendingIn);
            assert_eq!(new.status, ConnectionStatus::Accepted);
            assert_eq!(new.name, old.name);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[rstest]
#[tokio::test]
async fn accepting_resolves_requests_in_both_directions() {
    let seed = SocialGraphSeed::from_json(
        r#"{
            "version": 1,
            "currentUserId": "u_me",
            "users": [{"id": "u_me", "name": "Jack"}, {"id": "u_c", "name": "Eason"}],
            "edges": [
                {"a": "u_c", "b": "u_me", "status": "pending"},
                {"a": "u_me", "b": "u_c", "status": "pending"}
            ]
        }"#,
    )
    .expect("seed parses");
    let store = SocialGraphStore::new(seed).with_latency(SimulatedLatency::NONE);

    store.accept_invite(&id("u_c")).await.expect("accept");

    let statuses: Vec<ConnectionStatus> = store
        .list_connections()
        .await
        .expect("connections")
        .into_iter()
        .map(|c| c.status)
        .collect();
    assert_eq!(
        statuses,
        [ConnectionStatus::Accepted, ConnectionStatus::Accepted]
    );
}

#[rstest]
#[tokio::test]
async fn accepting_unknown_user_is_acknowledged_no_op(store: SocialGraphStore) {
    let before = store.list_connections().await.expect("connections");
    let graph_before = store.graph(true).await.expect("graph");

    let ack = store.accept_invite(&id("u_nobody")).await.expect("accept");

    assert!(ack.ok);
    assert_eq!(store.list_connections().await.expect("connections"), before);
    assert_eq!(store.graph(true).await.expect("graph"), graph_before);
}

#[rstest]
#[tokio::test]
async fn accepting_an_outgoing_invite_is_allowed(store: SocialGraphStore) {
    store.invite_friend("friend@x.com").await.expect("invite");
    let invited = store
        .list_connections()
        .await
        .expect("connections")
        .first()
        .expect("invited")
        .id
        .clone();

    store.accept_invite(&invited).await.expect("accept");
    let connections = store.list_connections().await.expect("connections");
    let head = connections.first().expect("invited");
    assert_eq!(head.id, invited);
    assert_eq!(head.status, ConnectionStatus::Accepted);
}

#[rstest]
#[case(false, 6)]
#[case(true, 7)]
#[tokio::test]
async fn graph_filters_pending_edges_unless_requested(
    store: SocialGraphStore,
    #[case] include_pending: bool,
    #[case] expected_edges: usize,
) {
    let graph = store.graph(include_pending).await.expect("graph");

    assert_eq!(graph.me.id.as_ref(), "u_me");
    assert_eq!(graph.users.len(), 7);
    assert_eq!(graph.edges.len(), expected_edges);
    let has_eason_edge = graph
        .edges
        .iter()
        .any(|edge| edge.joins(&id("u_c"), &id("u_me")));
    assert_eq!(has_eason_edge, include_pending);
}

#[rstest]
#[tokio::test]
async fn accepted_invite_shows_up_in_accepted_graph(store: SocialGraphStore) {
    store.accept_invite(&id("u_c")).await.expect("accept");
    let graph = store.graph(false).await.expect("graph");
    let edge = graph
        .edges
        .iter()
        .find(|edge| edge.joins(&id("u_c"), &id("u_me")))
        .expect("edge now visible");
    assert_eq!(edge.status, EdgeStatus::Accepted);
}

#[rstest]
#[tokio::test]
async fn mutating_a_snapshot_does_not_leak_into_the_store(store: SocialGraphStore) {
    let mut first = store.graph(true).await.expect("graph");
    let pristine = first.clone();

    first.users.clear();
    first.edges.truncate(1);
    if let Some(edge) = first.edges.first_mut() {
        edge.status = EdgeStatus::Pending;
    }

    assert_eq!(store.graph(true).await.expect("graph"), pristine);
}

#[rstest]
#[case("u_b", "Annie")]
#[case("u_me", "Jack")]
#[case("u_unknown", "u_unknown")]
#[tokio::test]
async fn resolve_user_name_falls_back_to_id(
    store: SocialGraphStore,
    #[case] raw: &str,
    #[case] expected: &str,
) {
    let name = store.resolve_user_name(&id(raw)).await.expect("name");
    assert_eq!(name, expected);
}

#[rstest]
#[tokio::test]
async fn clones_share_state(store: SocialGraphStore) {
    let other = store.clone();
    other.invite_friend("friend@x.com").await.expect("invite");
    assert_eq!(store.list_connections().await.expect("connections").len(), 4);
}

#[rstest]
#[tokio::test]
async fn fresh_stores_are_isolated() {
    let first = store();
    let second = store();
    first.invite_friend("friend@x.com").await.expect("invite");
    assert_eq!(second.list_connections().await.expect("connections").len(), 3);
}

#[tokio::test(start_paused = true)]
async fn every_operation_waits_for_the_configured_latency() {
    let store = SocialGraphStore::new(SocialGraphSeed::builtin().expect("builtin seed"));
    assert_eq!(store.latency(), SimulatedLatency::DEFAULT);

    let start = Instant::now();
    store.current_user().await.expect("current user");
    assert!(start.elapsed() >= Duration::from_millis(300));

    let start = Instant::now();
    store.authenticate("", "").await.expect_err("validation error");
    assert!(start.elapsed() >= Duration::from_millis(300));

    let start = Instant::now();
    store.resolve_user_name(&id("u_a")).await.expect("name");
    assert!(start.elapsed() >= Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn concurrent_accepts_both_apply() {
    let store = SocialGraphStore::new(SocialGraphSeed::builtin().expect("builtin seed"));
    store.invite_friend("friend@x.com").await.expect("invite");
    let invited = store
        .list_connections()
        .await
        .expect("connections")
        .first()
        .expect("invited")
        .id
        .clone();

    let eason = id("u_c");
    let (first, second) = tokio::join!(store.accept_invite(&eason), store.accept_invite(&invited));
    first.expect("accept eason");
    second.expect("accept invited");

    let connections = store.list_connections().await.expect("connections");
    assert!(
        connections
            .iter()
            .all(|connection| connection.status == ConnectionStatus::Accepted)
    );
}
