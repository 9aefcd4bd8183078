//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and sends the result to the inbox. They never touch state.

use signin_core::auth::{self, Credentials};
use signin_core::directory::DirectoryClient;

use crate::common::{TaskCompleted, TaskId};
use crate::events::UiEvent;

/// Runs one credential check.
///
/// Exactly one directory request per call, no retry.
pub async fn credential_check(
    client: DirectoryClient,
    task: TaskId,
    credentials: Credentials,
) -> UiEvent {
    let result = auth::check_credentials(&client, &credentials).await;
    UiEvent::CredentialsChecked(TaskCompleted { id: task, result })
}

#[cfg(test)]
mod tests {
    use signin_core::auth::AuthOutcome;
    use signin_core::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_credential_check_reports_task_id_and_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"email": "a@x.com", "password": "p1", "name": "Ann"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            users_url: format!("{}/users", server.uri()),
            ..Config::default()
        };
        let client = DirectoryClient::from_config(&config).unwrap();

        let event = credential_check(client, TaskId(7), Credentials::new("a@x.com", "p1")).await;
        let UiEvent::CredentialsChecked(completed) = event else {
            panic!("expected CredentialsChecked");
        };
        assert_eq!(completed.id, TaskId(7));
        assert_eq!(
            completed.result.unwrap(),
            AuthOutcome::Authenticated {
                display_name: "Ann".to_string()
            }
        );
    }
}
