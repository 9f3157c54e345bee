use std::collections::HashSet;
use std::sync::Mutex;

use volna::api::friends::FriendsGetParams;
use volna::api::groups::GroupsGetParams;
use volna::api::messages::MessagesDeleteParams;
use volna::api::status::StatusSetParams;
use volna::api::wall::WallDeleteCommentParams;
use volna::{Error, MaybeExtended, Params, Transport, TransportError, Vk};

/// Records every dispatched call and answers with a canned body.
struct FakeTransport {
    body: Vec<u8>,
    fail: bool,
    calls: Mutex<Vec<(String, Option<Params>)>>,
}

impl FakeTransport {
    fn returning(body: &[u8]) -> Self {
        Self { body: body.to_vec(), fail: false, calls: Mutex::new(Vec::new()) }
    }

    fn failing() -> Self {
        Self { body: Vec::new(), fail: true, calls: Mutex::new(Vec::new()) }
    }

    fn calls(&self) -> Vec<(String, Option<Params>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn request(
        &self,
        method: &str,
        params: Option<Params>,
    ) -> Result<Vec<u8>, TransportError> {
        self.calls.lock().unwrap().push((method.to_owned(), params));
        if self.fail {
            return Err(TransportError::new("connection refused"));
        }
        Ok(self.body.clone())
    }
}

// ── End-to-end dispatch ───────────────────────────────────────────────────────

#[tokio::test]
async fn friends_get_encodes_and_decodes() {
    let vk = Vk::new(FakeTransport::returning(br#"{"count":5,"items":[1,2,3,4,5]}"#));

    let params = FriendsGetParams { user_id: 1, count: 5, ..Default::default() };
    let resp = vk.friends().get(&params).await.unwrap();

    assert_eq!(resp.count, 5);
    assert_eq!(resp.items, vec![1, 2, 3, 4, 5]);

    let calls = vk.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "friends.get");
    // Exactly user_id=1&count=5; every other optional field absent.
    let sent = calls[0].1.clone().unwrap().into_pairs();
    assert_eq!(sent, vec![("user_id", "1".to_owned()), ("count", "5".to_owned())]);
}

#[tokio::test]
async fn parameterless_endpoint_sends_no_params() {
    let vk = Vk::new(FakeTransport::returning(b"1700000000"));

    let time = vk.utils().get_server_time().await.unwrap();
    assert_eq!(time, 1_700_000_000);

    let calls = vk.transport().calls();
    assert_eq!(calls[0].0, "utils.getServerTime");
    assert!(calls[0].1.is_none());
}

#[tokio::test]
async fn required_params_sent_even_when_zero() {
    let vk = Vk::new(FakeTransport::returning(b"1"));

    let ok = vk
        .wall()
        .delete_comment(&WallDeleteCommentParams::default())
        .await
        .unwrap();
    assert!(ok);

    let sent = vk.transport().calls()[0].1.clone().unwrap();
    assert_eq!(sent.get("owner_id"), Some("0"));
    assert_eq!(sent.get("comment_id"), Some("0"));
}

// ── Scalar endpoints ──────────────────────────────────────────────────────────

#[tokio::test]
async fn bool_int_endpoint_maps_one_to_true() {
    let vk = Vk::new(FakeTransport::returning(b"1"));
    assert!(vk.status().set(&StatusSetParams::default()).await.unwrap());

    let vk = Vk::new(FakeTransport::returning(b"0"));
    assert!(!vk.status().set(&StatusSetParams::default()).await.unwrap());
}

#[tokio::test]
async fn scalar_decode_failure_is_reported_not_defaulted() {
    let vk = Vk::new(FakeTransport::returning(b"abc"));
    let err = vk.status().set(&StatusSetParams::default()).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn string_endpoint_returns_decoded_text() {
    let vk = Vk::new(FakeTransport::returning(br#""stored value""#));

    let params = volna::api::storage::StorageGetParams {
        key: "counter".into(),
        ..Default::default()
    };
    assert_eq!(vk.storage().get(&params).await.unwrap(), "stored value");

    let sent = vk.transport().calls()[0].1.clone().unwrap();
    assert_eq!(sent.get("key"), Some("counter"));
    // `global` is false, so the key never reaches the wire.
    assert_eq!(sent.get("global"), None);
}

// ── Extended / Normal selection ───────────────────────────────────────────────

#[tokio::test]
async fn groups_get_variant_follows_sent_flag() {
    let body = br#"{"count":1,"items":[{"id":1,"name":"kittens"}]}"#;

    let vk = Vk::new(FakeTransport::returning(body));
    let params = GroupsGetParams { extended: true, ..Default::default() };
    let resp = vk.groups().get(&params).await.unwrap();
    let ext = resp.extended().expect("flag was sent, variant is static");
    assert_eq!(ext.items[0].name, "kittens");
    assert_eq!(vk.transport().calls()[0].1.clone().unwrap().get("extended"), Some("1"));

    // Flag off: always the normal variant, and no flag on the wire.
    let vk = Vk::new(FakeTransport::returning(br#"{"count":1,"items":[7]}"#));
    let resp = vk.groups().get(&GroupsGetParams::default()).await.unwrap();
    match resp {
        MaybeExtended::Normal(normal) => assert_eq!(normal.items, vec![7]),
        MaybeExtended::Extended(_) => panic!("flag was not sent"),
    }
    assert_eq!(vk.transport().calls()[0].1.clone().unwrap().get("extended"), None);
}

// ── Irregular envelope ────────────────────────────────────────────────────────

#[tokio::test]
async fn messages_delete_collects_ids_from_object() {
    let vk = Vk::new(FakeTransport::returning(br#"{"123":1,"456":1}"#));

    let params = MessagesDeleteParams { message_ids: vec![123, 456], ..Default::default() };
    let deleted = vk.messages().delete(&params).await.unwrap();

    let got: HashSet<i64> = deleted.into_iter().collect();
    assert_eq!(got, HashSet::from([123, 456]));

    let sent = vk.transport().calls()[0].1.clone().unwrap();
    assert_eq!(sent.get("message_ids"), Some("123,456"));
}

// ── Error propagation ─────────────────────────────────────────────────────────

#[tokio::test]
async fn transport_errors_surface_verbatim() {
    let vk = Vk::new(FakeTransport::failing());
    let err = vk.utils().get_server_time().await.unwrap_err();
    match err {
        Error::Transport(e) => assert_eq!(e.inner().to_string(), "connection refused"),
        other => panic!("expected transport error, got {other:?}"),
    }
}

// ── Raw escape hatch ──────────────────────────────────────────────────────────

#[tokio::test]
async fn raw_request_passes_method_through() {
    let vk = Vk::new(FakeTransport::returning(b"2"));

    let mut params = Params::new();
    params.required("app_id", &42i64);
    let body = vk.request("apps.get", Some(params)).await.unwrap();
    assert_eq!(volna_wire::decode::int(&body).unwrap(), 2);

    let calls = vk.transport().calls();
    assert_eq!(calls[0].0, "apps.get");
    assert_eq!(calls[0].1.clone().unwrap().get("app_id"), Some("42"));
}
