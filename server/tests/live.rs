//! End-to-end checks against a server bound to a real TCP port.
//!
//! # Design
//! Starts the server on a random port in a background thread, then talks to
//! it over HTTP with ureq. Covers what the in-process router tests cannot:
//! the listener wiring in `run` and header delivery over the wire.

use todo_core::Todo;
use todo_server::{responses::TodoListResponse, AppState};

/// Starts a server on `127.0.0.1:0` and returns its base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, AppState::default()).await
        })
    });

    format!("http://{addr}")
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

fn read_json<T: serde::de::DeserializeOwned>(mut response: ureq::http::Response<ureq::Body>) -> T {
    let body = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&body).unwrap()
}

#[test]
fn crud_over_tcp() {
    let base = spawn_server();
    let agent = agent();

    let resp = agent
        .post(&format!("{base}/api/v1/todos"))
        .content_type("application/json")
        .send(r#"{"title":"Walk dog","description":"park"}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let created: Todo = read_json(resp);
    assert_eq!(created.id, 1);

    let resp = agent
        .put(&format!("{base}/api/v1/todos/{}", created.id))
        .content_type("application/json")
        .send(r#"{"title":"Walk cat","completed":true}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Todo = read_json(resp);
    assert_eq!(updated.title, "Walk cat");
    assert_eq!(updated.description, "");
    assert_eq!(updated.created_at, created.created_at);

    let resp = agent
        .get(&format!("{base}/api/v1/todos?limit=1"))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let list: TodoListResponse = read_json(resp);
    assert_eq!(list.todos, vec![updated]);
    assert_eq!(list.per_page, 1);

    let resp = agent
        .delete(&format!("{base}/api/v1/todos/{}", created.id))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = agent
        .get(&format!("{base}/api/v1/todos/{}", created.id))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let resp = agent
        .get(&format!("{base}/api/v1/todos/not-a-number"))
        .call()
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
}

#[test]
fn health_over_tcp() {
    let base = spawn_server();

    let resp = agent().get(&format!("{base}/health")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let health: serde_json::Value = read_json(resp);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "todo-server");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}
