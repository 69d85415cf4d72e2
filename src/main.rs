use irods_rules::rules::RuleEngineClient;
use tracing_subscriber::EnvFilter;

/// Quick smoke-test binary: lists the rule engine plugin instances of the
/// gateway named by `IRODS_HTTP_URL`, authenticating with `IRODS_HTTP_TOKEN`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("irods_rules=info")),
        )
        .init();

    let base_url = std::env::var("IRODS_HTTP_URL")
        .expect("IRODS_HTTP_URL should name the iRODS HTTP API base URL");
    let token = std::env::var("IRODS_HTTP_TOKEN")
        .expect("IRODS_HTTP_TOKEN should hold a bearer token for the gateway");

    let mut client = RuleEngineClient::new(&base_url)
        .expect("should be able to create a client for the base URL");
    client.set_token(token);

    let result = client
        .list_rule_engines()
        .await
        .expect("should be able to reach the gateway");
    println!("HTTP {}: {:#?}", result.status_code, result.data);
}
