#![forbid(unsafe_code)]

use log::debug;
use poem_openapi::{payload::Html, OpenApi};

use crate::utils::host::get_hostname;

// ***************************************************************************
//                          Request/Response Definiions
// ***************************************************************************
pub struct GreetingApi;

// ***************************************************************************
//                             OpenAPI Endpoint
// ***************************************************************************
#[OpenApi]
impl GreetingApi {
    /** Identify the instance that served the request.  Useful for telling
     * server instances apart behind a load balancer.
     */
    #[oai(path = "/", method = "get")]
    async fn get_greeting(&self) -> Html<String> {
        let host = get_hostname();
        debug!("Greeting request served by host '{}'.", host);
        Html(make_greeting(&host))
    }
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// make_greeting:
// ---------------------------------------------------------------------------
fn make_greeting(host: &str) -> String {
    format!("Response from Server: <b>{}</b>", host)
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::{http::StatusCode, test::TestClient, Route};
    use poem_openapi::OpenApiService;

    use super::{make_greeting, GreetingApi};
    use crate::utils::host::get_hostname;

    // Mount the API the same way main does.
    fn test_app() -> Route {
        let api_service = OpenApiService::new(GreetingApi, "Whoami Server", "test");
        Route::new().nest("/", api_service)
    }

    #[tokio::test]
    async fn get_root_returns_greeting() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text(make_greeting(&get_hostname())).await;
    }

    #[tokio::test]
    async fn greeting_is_idempotent() {
        let cli = TestClient::new(test_app());
        let expected = make_greeting(&get_hostname());
        for _ in 0..3 {
            let resp = cli.get("/").send().await;
            resp.assert_status_is_ok();
            resp.assert_text(expected.clone()).await;
        }
    }

    #[tokio::test]
    async fn unknown_path_returns_not_found() {
        let cli = TestClient::new(test_app());
        let resp = cli.get("/nonexistent").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_root_is_method_not_allowed() {
        let cli = TestClient::new(test_app());
        let resp = cli.post("/").send().await;
        resp.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn greeting_wraps_host_in_bold_markup() {
        assert_eq!(make_greeting("node-1"), "Response from Server: <b>node-1</b>");
        assert_eq!(make_greeting(""), "Response from Server: <b></b>");
    }
}
