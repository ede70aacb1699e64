use crate::helpers::{
    delete_test_user, registration_success_body, spawn_mock_api, test_bearer_token,
};
use crate::test_data::{REQUIRED_FIELDS_MESSAGE, TEST_PASSWORD, TEST_USERNAME, USER_EXISTS_MESSAGE};
use burger_api::domain::{UserRequest, generate_random_email};
use wiremock::matchers::{method, path};
use wiremock::{Mock, Request, ResponseTemplate};

/// Checks that all the mandatory registration fields made it onto the wire,
/// without inspecting the field values.
struct CompleteRegistrationBodyMatcher;

impl wiremock::Match for CompleteRegistrationBodyMatcher {
    fn matches(&self, request: &Request) -> bool {
        let result: Result<serde_json::Value, _> = serde_json::from_slice(&request.body);
        if let Ok(body) = result {
            body.get("email").is_some()
                && body.get("password").is_some()
                && body.get("name").is_some()
        } else {
            // If parsing failed, do not match the request
            false
        }
    }
}

/// Checks that the named field was omitted from the wire body entirely.
struct OmittedFieldMatcher(&'static str);

impl wiremock::Match for OmittedFieldMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .map(|body| body.get(self.0).is_none())
            .unwrap_or(false)
    }
}

#[tokio::test]
async fn register_with_a_fresh_email_returns_200_and_an_access_token() {
    // Arrange
    let api = spawn_mock_api().await;
    let email = generate_random_email();
    let token = test_bearer_token();
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(CompleteRegistrationBodyMatcher)
        .respond_with(
            ResponseTemplate::new(200).set_body_json(registration_success_body(&email, &token)),
        )
        .expect(1)
        .mount(&api.server)
        .await;
    let user = UserRequest::new(
        email,
        TEST_PASSWORD.to_string(),
        TEST_USERNAME.to_string(),
    );

    // Act
    let response = api
        .client
        .register(&user)
        .await
        .expect("Failed to execute request.");

    // Assert
    response.assert_status(200);
    response.assert_field("success", "true");
    let access_token = response
        .access_token()
        .expect("registration returned no access token");
    assert!(!access_token.is_empty());

    // Cleanup
    delete_test_user(&api, &access_token).await;
}

#[tokio::test]
async fn registering_the_same_email_twice_returns_403() {
    // Arrange
    let api = spawn_mock_api().await;
    let email = generate_random_email();
    let token = test_bearer_token();
    // First registration succeeds, every later one hits the duplicate branch.
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(registration_success_body(&email, &token)),
        )
        .up_to_n_times(1)
        .mount(&api.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "success": false,
            "message": USER_EXISTS_MESSAGE
        })))
        .expect(1)
        .mount(&api.server)
        .await;
    let user = UserRequest::new(
        email,
        TEST_PASSWORD.to_string(),
        TEST_USERNAME.to_string(),
    );

    // Act
    let first = api
        .client
        .register(&user)
        .await
        .expect("Failed to execute request.");
    first.assert_status(200);
    let access_token = first
        .access_token()
        .expect("registration returned no access token");
    let second = api
        .client
        .register(&user)
        .await
        .expect("Failed to execute request.");

    // Assert
    second.assert_status(403);
    second.assert_field("success", "false");
    second.assert_field("message", USER_EXISTS_MESSAGE);

    // Cleanup
    delete_test_user(&api, &access_token).await;
}

#[tokio::test]
async fn registering_with_a_missing_required_field_returns_403() {
    let test_cases = vec![
        (
            UserRequest::new(None, TEST_PASSWORD.to_string(), TEST_USERNAME.to_string()),
            "email",
        ),
        (
            UserRequest::new(generate_random_email(), None, TEST_USERNAME.to_string()),
            "password",
        ),
        (
            UserRequest::new(generate_random_email(), TEST_PASSWORD.to_string(), None),
            "name",
        ),
    ];
    for (invalid_user, missing_field) in test_cases {
        // Arrange
        let api = spawn_mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(OmittedFieldMatcher(missing_field))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "success": false,
                "message": REQUIRED_FIELDS_MESSAGE
            })))
            .expect(1)
            .mount(&api.server)
            .await;

        // Act
        let response = api
            .client
            .register(&invalid_user)
            .await
            .expect("Failed to execute request.");

        // Assert
        assert_eq!(
            403,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 403 Forbidden when the payload was missing the {}.",
            missing_field
        );
        response.assert_field("message", REQUIRED_FIELDS_MESSAGE);
    }
}
