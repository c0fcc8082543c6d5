//! End-to-end tests: JSON request bodies through the services
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chat_core::MAX_FILE_SIZE;
use integration_tests::{
    assert_status, assert_validation_errors, data_id, fixtures::*, TestApp,
};
use serde_json::json;
use uuid::Uuid;

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::new();
    let body = register_body();

    let response = app.register(body.clone()).await.unwrap();
    assert_status(&response, 201);
    assert_eq!(response.data()["email"], body["email"]);
    assert!(response.data().get("password").is_none());

    let response = app.login(login_body(&body)).await.unwrap();
    assert_status(&response, 200);
    assert_eq!(response.data()["displayName"], body["displayName"]);
}

#[tokio::test]
async fn test_register_empty_body_reports_every_field() {
    let app = TestApp::new();

    let response = app.register(json!({})).await.unwrap();
    assert_validation_errors(
        &response,
        &[
            ("email", "REQUIRED"),
            ("password", "REQUIRED"),
            ("confirmPassword", "REQUIRED"),
            ("displayName", "REQUIRED"),
        ],
    );
    assert_eq!(response.body["message"], "Validation failed");
    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn test_register_password_policy() {
    let app = TestApp::new();

    for password in ["password123", "PASSWORD123", "PasswordABC"] {
        let mut body = register_body();
        body["password"] = json!(password);
        body["confirmPassword"] = json!(password);

        let response = app.register(body).await.unwrap();
        assert_validation_errors(&response, &[("password", "FORMAT_MISMATCH")]);
        assert!(response.messages()[0].contains("must contain"));
    }

    let response = app.register(register_body()).await.unwrap();
    assert_status(&response, 201);
}

#[tokio::test]
async fn test_register_mismatch_on_confirm_password() {
    let app = TestApp::new();
    let mut body = register_body();
    body["confirmPassword"] = json!("Password124");

    let response = app.register(body).await.unwrap();
    assert_validation_errors(&response, &[("confirmPassword", "CROSS_FIELD_VIOLATION")]);
    assert!(response.messages()[0].contains("do not match"));
}

#[tokio::test]
async fn test_register_field_errors_suppress_mismatch() {
    let app = TestApp::new();
    let mut body = register_body();
    body["email"] = json!("not-an-email");
    body["confirmPassword"] = json!("Different1");

    // The refinement only runs once every field has passed
    let response = app.register(body).await.unwrap();
    assert_validation_errors(&response, &[("email", "FORMAT_MISMATCH")]);
    assert!(response.messages()[0].contains("invalid format"));
}

#[tokio::test]
async fn test_register_cjk_display_name() {
    let app = TestApp::new();
    let mut body = register_body();
    body["displayName"] = json!("山田");
    assert_status(&app.register(body).await.unwrap(), 201);

    let mut body = register_body();
    body["displayName"] = json!("山");
    let response = app.register(body).await.unwrap();
    assert_validation_errors(&response, &[("displayName", "LENGTH_BOUND")]);
    assert!(response.messages()[0].contains("at least 2 characters"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();
    let body = register_body();
    app.register(body.clone()).await.unwrap();

    let response = app
        .login(json!({ "email": body["email"], "password": "Wrong12345" }))
        .await
        .unwrap();
    assert_status(&response, 401);
    assert_eq!(response.body["code"], "INVALID_CREDENTIALS");
    assert!(response.body.get("details").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new();
    let body = register_body();
    assert_status(&app.register(body.clone()).await.unwrap(), 201);

    let response = app.register(body).await.unwrap();
    assert_status(&response, 409);
    assert_eq!(response.body["code"], "EMAIL_ALREADY_EXISTS");
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn test_login_short_password() {
    let app = TestApp::new();
    let response = app
        .login(json!({ "email": "a@example.com", "password": "short" }))
        .await
        .unwrap();
    assert_validation_errors(&response, &[("password", "LENGTH_BOUND")]);
    assert!(response.messages()[0].contains("at least 8 characters"));
}

// ============================================================================
// Channel Tests
// ============================================================================

#[tokio::test]
async fn test_create_channel_defaults_to_public() {
    let app = TestApp::new();
    let response = app.create_channel(Uuid::new_v4(), channel_body()).await.unwrap();
    assert_status(&response, 201);
    assert_eq!(response.data()["isPrivate"], false);
    assert!(response.data().get("description").is_none());
}

#[tokio::test]
async fn test_create_channel_duplicate_name() {
    let app = TestApp::new();
    let body = channel_body();
    assert_status(&app.create_channel(Uuid::new_v4(), body.clone()).await.unwrap(), 201);

    let response = app.create_channel(Uuid::new_v4(), body).await.unwrap();
    assert_status(&response, 409);
    assert_eq!(response.body["code"], "CHANNEL_NAME_EXISTS");
}

#[tokio::test]
async fn test_create_channel_name_rules() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();

    let response = app
        .create_channel(owner, json!({ "name": "日本語", "isPrivate": true }))
        .await
        .unwrap();
    assert_status(&response, 201);
    assert_eq!(response.data()["isPrivate"], true);

    let response = app.create_channel(owner, json!({ "name": "a" })).await.unwrap();
    assert_validation_errors(&response, &[("name", "LENGTH_BOUND")]);

    let response = app.create_channel(owner, json!({ "name": "a".repeat(51) })).await.unwrap();
    assert_validation_errors(&response, &[("name", "LENGTH_BOUND")]);
    assert!(response.messages()[0].contains("at most 50 characters"));

    let response = app.create_channel(owner, json!({ "name": "no spaces" })).await.unwrap();
    assert_validation_errors(&response, &[("name", "FORMAT_MISMATCH")]);
}

#[tokio::test]
async fn test_create_channel_description_bound() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();

    let mut body = channel_body();
    body["description"] = json!("d".repeat(500));
    assert_status(&app.create_channel(owner, body).await.unwrap(), 201);

    let mut body = channel_body();
    body["description"] = json!("d".repeat(501));
    body["name"] = json!("");
    let response = app.create_channel(owner, body).await.unwrap();
    assert_validation_errors(
        &response,
        &[("name", "REQUIRED"), ("description", "LENGTH_BOUND")],
    );
    assert_eq!(app.store.channel_count().await, 1);
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_message_in_channel_and_dm() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let channel = data_id(&app.create_channel(user, channel_body()).await.unwrap());

    let response = app
        .create_message(user, json!({ "content": "hello", "channelId": channel.to_string() }))
        .await
        .unwrap();
    assert_status(&response, 201);
    assert_eq!(response.data()["channelId"], channel.to_string());
    assert!(response.data().get("dmId").is_none());

    let dm = Uuid::new_v4();
    let response = app
        .create_message(user, json!({ "content": "psst", "dmId": dm.to_string() }))
        .await
        .unwrap();
    assert_status(&response, 201);
    assert_eq!(response.data()["dmId"], dm.to_string());
}

#[tokio::test]
async fn test_message_to_unknown_channel() {
    let app = TestApp::new();
    let response = app
        .create_message(
            Uuid::new_v4(),
            json!({ "content": "hello", "channelId": Uuid::new_v4().to_string() }),
        )
        .await
        .unwrap();
    assert_status(&response, 404);
    assert_eq!(response.body["code"], "UNKNOWN_CHANNEL");
    assert_eq!(app.store.message_count().await, 0);
}

#[tokio::test]
async fn test_message_without_location() {
    let app = TestApp::new();
    let response = app
        .create_message(Uuid::new_v4(), json!({ "content": "hello", "channelId": null }))
        .await
        .unwrap();
    assert_validation_errors(&response, &[("location", "CROSS_FIELD_VIOLATION")]);
    assert!(response.messages()[0].contains("either a channel ID or a DM ID"));
}

#[tokio::test]
async fn test_message_field_errors() {
    let app = TestApp::new();
    let response = app
        .create_message(
            Uuid::new_v4(),
            json!({ "content": "", "channelId": "", "dmId": "123e4567e89b12d3a456426614174000" }),
        )
        .await
        .unwrap();

    // Empty and non-hyphenated references are both malformed; no location error follows
    assert_validation_errors(
        &response,
        &[
            ("content", "REQUIRED"),
            ("channelId", "FORMAT_MISMATCH"),
            ("dmId", "FORMAT_MISMATCH"),
        ],
    );
    assert_eq!(app.store.message_count().await, 0);
}

#[tokio::test]
async fn test_message_content_bound() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let dm = Uuid::new_v4().to_string();

    let response = app
        .create_message(user, json!({ "content": "a".repeat(5000), "dmId": dm }))
        .await
        .unwrap();
    assert_status(&response, 201);

    let response = app
        .create_message(user, json!({ "content": "a".repeat(5001), "dmId": dm }))
        .await
        .unwrap();
    assert_validation_errors(&response, &[("content", "LENGTH_BOUND")]);
}

#[tokio::test]
async fn test_message_with_both_refs_is_not_stored() {
    let app = TestApp::new();
    let response = app
        .create_message(
            Uuid::new_v4(),
            json!({
                "content": "hello",
                "channelId": Uuid::new_v4().to_string(),
                "dmId": Uuid::new_v4().to_string(),
            }),
        )
        .await
        .unwrap();

    assert_status(&response, 400);
    assert_eq!(response.body["code"], "AMBIGUOUS_MESSAGE_LOCATION");
    assert_eq!(app.store.message_count().await, 0);
}

#[tokio::test]
async fn test_edit_message() {
    let app = TestApp::new();
    let author = Uuid::new_v4();
    let dm = Uuid::new_v4().to_string();
    let created = app
        .create_message(author, json!({ "content": "draft", "dmId": dm }))
        .await
        .unwrap();
    let message_id = data_id(&created);

    let response = app
        .edit_message(author, message_id, json!({ "content": "final" }))
        .await
        .unwrap();
    assert_status(&response, 200);
    assert_eq!(response.data()["content"], "final");
    assert_eq!(response.data()["edited"], true);

    let response = app
        .edit_message(author, message_id, json!({ "content": "" }))
        .await
        .unwrap();
    assert_validation_errors(&response, &[("content", "REQUIRED")]);

    let response = app
        .edit_message(Uuid::new_v4(), message_id, json!({ "content": "mine now" }))
        .await
        .unwrap();
    assert_status(&response, 403);
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let user = data_id(&app.register(register_body()).await.unwrap());

    let response = app
        .update_profile(
            user,
            json!({
                "displayName": "New Name",
                "bio": "b".repeat(500),
                "avatarUrl": "",
            }),
        )
        .await
        .unwrap();
    assert_status(&response, 200);
    assert_eq!(response.data()["displayName"], "New Name");
    assert!(response.data().get("avatarUrl").is_none());

    let response = app
        .update_profile(
            user,
            json!({
                "displayName": "d".repeat(51),
                "bio": "b".repeat(501),
                "avatarUrl": "ftp//broken",
            }),
        )
        .await
        .unwrap();
    assert_validation_errors(
        &response,
        &[
            ("displayName", "LENGTH_BOUND"),
            ("bio", "LENGTH_BOUND"),
            ("avatarUrl", "FORMAT_MISMATCH"),
        ],
    );
}

// ============================================================================
// Upload Tests
// ============================================================================

#[tokio::test]
async fn test_upload_size_boundary() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    let response = app.upload_file(user, upload_body(MAX_FILE_SIZE, "image/png")).await.unwrap();
    assert_status(&response, 201);
    assert_eq!(response.data()["isImage"], true);

    let response = app
        .upload_file(user, upload_body(MAX_FILE_SIZE + 1, "image/png"))
        .await
        .unwrap();
    assert_validation_errors(&response, &[("sizeBytes", "SIZE_LIMIT")]);
    assert!(response.messages()[0].contains("at most 10 MB"));
}

#[tokio::test]
async fn test_upload_disallowed_type() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    for size in [1, MAX_FILE_SIZE] {
        let response = app
            .upload_file(user, upload_body(size, "application/x-msdownload"))
            .await
            .unwrap();
        assert_validation_errors(&response, &[("mediaType", "TYPE_NOT_ALLOWED")]);
        assert!(response.messages()[0].contains("not supported"));
    }

    let response = app
        .upload_file(user, upload_body(MAX_FILE_SIZE * 2, "application/x-msdownload"))
        .await
        .unwrap();
    assert_validation_errors(
        &response,
        &[("sizeBytes", "SIZE_LIMIT"), ("mediaType", "TYPE_NOT_ALLOWED")],
    );
    assert_eq!(app.store.attachment_count().await, 0);
}

#[tokio::test]
async fn test_upload_image_only() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    let response = app.upload_image(user, upload_body(2048, "image/webp")).await.unwrap();
    assert_status(&response, 201);

    let response = app.upload_image(user, upload_body(2048, "text/plain")).await.unwrap();
    assert_validation_errors(&response, &[("mediaType", "TYPE_NOT_ALLOWED")]);
    assert!(response.messages()[0].contains("image files"));

    let response = app.upload_file(user, upload_body(2048, "text/plain")).await.unwrap();
    assert_status(&response, 201);
    assert_eq!(app.store.attachment_count().await, 2);
}
