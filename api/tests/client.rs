use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use cheeze_wizards_api::{Affinity, CheezeWizardsApi, DuelsParams, Error, WizardsParams};
use serde_json::{Value, json};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

const EMAIL: &str = "test@email.com";
const TOKEN: &str = "test-api-token";

#[derive(Debug, Clone)]
struct Seen {
    uri: String,
    email: Option<String>,
    token: Option<String>,
    content_type: Option<String>,
}

#[derive(Clone, Default)]
struct FakeApi {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeApi {
    fn last(&self) -> Seen {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

fn duel() -> Value {
    json!({
        "duelId": "1",
        "wizard1Id": "3",
        "wizard2Id": "4",
        "startBlock": 8262503,
        "isAscensionBattle": false
    })
}

fn wizard() -> Value {
    json!({"id": "1", "affinity": 2, "power": 100000, "owner": "0xF0128825b0c518858971d8521498769148137936"})
}

async fn respond(State(api): State<FakeApi>, uri: Uri, headers: HeaderMap) -> Response {
    let token = header(&headers, "x-api-token");
    api.seen.lock().unwrap().push(Seen {
        uri: uri.to_string(),
        email: header(&headers, "x-email"),
        token: token.clone(),
        content_type: header(&headers, "content-type"),
    });
    if token.as_deref() != Some(TOKEN) && token.as_deref() != Some("other-token") {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "bad token"}))).into_response();
    }
    match uri.path() {
        "/duels/" => Json(json!({"duels": [duel()]})).into_response(),
        "/duels/1" => Json(duel()).into_response(),
        "/wizards/" => Json(json!({"wizards": [wizard()]})).into_response(),
        "/wizards/1" => Json(wizard()).into_response(),
        "/wizards/0" => StatusCode::NO_CONTENT.into_response(),
        "/wizards/2" => (StatusCode::OK, "not json").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"message": "not found"}))).into_response(),
    }
}

async fn serve() -> (FakeApi, SocketAddr) {
    let state = FakeApi::default();
    let app = Router::new().fallback(respond).with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (state, addr)
}

fn client(addr: SocketAddr) -> CheezeWizardsApi {
    CheezeWizardsApi::with_base_url(&format!("http://{addr}"), EMAIL, TOKEN).unwrap()
}

#[tokio::test]
async fn duel_by_id() {
    let (fake, addr) = serve().await;
    let resp = client(addr).duel(Some(1)).await.unwrap();
    assert_eq!(resp.status, reqwest::StatusCode::OK);
    assert_eq!(resp.data, duel());
    assert_eq!(fake.last().uri, "/duels/1");
}

#[tokio::test]
async fn duel_without_id_lists_all() {
    let (fake, addr) = serve().await;
    let resp = client(addr).duel(None).await.unwrap();
    assert_eq!(resp.data, json!({"duels": [duel()]}));
    assert_eq!(fake.last().uri, "/duels/");
}

#[tokio::test]
async fn duels_with_filters() {
    let (fake, addr) = serve().await;
    let params = DuelsParams::new().starts_after(8262502).wizard_ids([3, 4]);
    let resp = client(addr).duels(Some(&params)).await.unwrap();
    assert_eq!(resp.data, json!({"duels": [duel()]}));
    assert_eq!(
        fake.last().uri,
        "/duels/?startsAfter=8262502&wizardIds=3&wizardIds=4"
    );
}

#[tokio::test]
async fn duels_without_filters() {
    let (fake, addr) = serve().await;
    client(addr).duels(None).await.unwrap();
    assert_eq!(fake.last().uri, "/duels/");
    client(addr).duels(Some(&DuelsParams::new())).await.unwrap();
    assert_eq!(fake.last().uri, "/duels/");
}

#[tokio::test]
async fn wizard_by_id() {
    let (fake, addr) = serve().await;
    let resp = client(addr).wizard(Some(1)).await.unwrap();
    assert_eq!(resp.status, reqwest::StatusCode::OK);
    assert_eq!(resp.data, wizard());
    assert_eq!(fake.last().uri, "/wizards/1");
}

#[tokio::test]
async fn wizard_without_id_lists_all() {
    let (fake, addr) = serve().await;
    let resp = client(addr).wizard(None).await.unwrap();
    assert_eq!(resp.data, json!({"wizards": [wizard()]}));
    assert_eq!(fake.last().uri, "/wizards/");
}

#[tokio::test]
async fn wizards_without_filters() {
    let (fake, addr) = serve().await;
    let resp = client(addr).wizards(None).await.unwrap();
    assert_eq!(resp.data, json!({"wizards": [wizard()]}));
    assert_eq!(fake.last().uri, "/wizards/");
    client(addr)
        .wizards(Some(&WizardsParams::new()))
        .await
        .unwrap();
    assert_eq!(fake.last().uri, "/wizards/");
}

#[tokio::test]
async fn wizards_with_filters() {
    let (fake, addr) = serve().await;
    let params = WizardsParams::new()
        .affinity(Affinity::Water)
        .owner("0xF0128825b0c518858971d8521498769148137936")
        .min_power(100000)
        .max_power(900000000000000);
    client(addr).wizards(Some(&params)).await.unwrap();
    assert_eq!(
        fake.last().uri,
        "/wizards/?owner=0xF0128825b0c518858971d8521498769148137936&affinity=4&minPower=100000&maxPower=900000000000000"
    );
}

#[tokio::test]
async fn sends_credentials_on_every_request() {
    let (fake, addr) = serve().await;
    let api = client(addr);
    api.wizard(None).await.unwrap();
    api.duel(Some(1)).await.unwrap();
    for seen in fake.seen.lock().unwrap().iter() {
        assert_eq!(seen.email.as_deref(), Some(EMAIL));
        assert_eq!(seen.token.as_deref(), Some(TOKEN));
        assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    }
}

#[tokio::test]
async fn clients_keep_their_own_credentials() {
    let (fake, addr) = serve().await;
    let first = client(addr);
    let second =
        CheezeWizardsApi::with_base_url(&format!("http://{addr}"), "other@email.com", "other-token")
            .unwrap();
    first.wizard(Some(1)).await.unwrap();
    second.wizard(Some(1)).await.unwrap();
    first.duel(Some(1)).await.unwrap();
    let seen = fake.seen.lock().unwrap().clone();
    assert_eq!(seen[0].token.as_deref(), Some(TOKEN));
    assert_eq!(seen[1].token.as_deref(), Some("other-token"));
    assert_eq!(seen[1].email.as_deref(), Some("other@email.com"));
    assert_eq!(seen[2].token.as_deref(), Some(TOKEN));
    assert_eq!(seen[2].email.as_deref(), Some(EMAIL));
}

#[tokio::test]
async fn unknown_id_is_an_error() {
    let (_, addr) = serve().await;
    let err = client(addr).duel(Some(42)).await.unwrap_err();
    let Error::ResponseError(res) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(res.status, reqwest::StatusCode::NOT_FOUND);
    assert_eq!(
        serde_json::from_str::<Value>(&res.content).unwrap(),
        json!({"message": "not found"})
    );
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn bad_credentials_are_an_error() {
    let (_, addr) = serve().await;
    let api =
        CheezeWizardsApi::with_base_url(&format!("http://{addr}"), EMAIL, "wrong-token").unwrap();
    let err = api.wizards(None).await.unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn empty_body_is_null_data() {
    let (_, addr) = serve().await;
    let resp = client(addr).wizard(Some(0)).await.unwrap();
    assert_eq!(resp.status, reqwest::StatusCode::NO_CONTENT);
    assert_eq!(resp.data, Value::Null);
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let (_, addr) = serve().await;
    let err = client(addr).wizard(Some(2)).await.unwrap_err();
    assert!(matches!(err, Error::Serde(_)));
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let err = client(addr).wizards(None).await.unwrap_err();
    assert!(matches!(err, Error::Reqwest(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn raw_get_with_pairs() {
    let (fake, addr) = serve().await;
    let pairs = [("minPower", "1"), ("maxPower", "2")];
    client(addr)
        .get("/wizards/", Some(&pairs[..]))
        .await
        .unwrap();
    assert_eq!(fake.last().uri, "/wizards/?minPower=1&maxPower=2");
}
