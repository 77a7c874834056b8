use serde_json::{json, Value};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime that hosts the mock server; the blocking client runs outside it
pub fn runtime() -> Runtime {
    Runtime::new().unwrap()
}

pub fn start_server(rt: &Runtime) -> MockServer {
    rt.block_on(MockServer::start())
}

/// Runtime-results body listing `ids` in order
pub fn runtime_page(ids: &[&str]) -> Value {
    let data: Vec<Value> = ids
        .iter()
        .map(|id| json!({ "sbomId": id, "resultId": format!("r-{}", id) }))
        .collect();
    json!({ "data": data })
}

/// Path and query of every request the server received, in arrival order
pub fn received_targets(rt: &Runtime, server: &MockServer) -> Vec<String> {
    rt.block_on(server.received_requests())
        .unwrap_or_default()
        .iter()
        .map(|request| match request.url.query() {
            Some(query) => format!("{}?{}", request.url.path(), query),
            None => request.url.path().to_string(),
        })
        .collect()
}
