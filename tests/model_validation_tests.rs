//! 模型验证单元测试
//!
//! 测试枚举取值、请求体反序列化与响应形状

use serde_json::json;
use todo_service::models::todo::*;
use todo_service::models::user::*;
use validator::Validate;

// ==================== 枚举测试 ====================

#[test]
fn test_priority_string_values() {
    assert_eq!(Priority::High.as_str(), "high");
    assert_eq!(Priority::Medium.as_str(), "medium");
    assert_eq!(Priority::Low.as_str(), "low");

    assert_eq!(String::from(Priority::High), "high");
}

#[test]
fn test_status_string_values() {
    assert_eq!(Status::NotStarted.as_str(), "not_started");
    assert_eq!(Status::InProgress.as_str(), "in_progress");
    assert_eq!(Status::Completed.as_str(), "completed");

    assert_eq!(String::from(Status::Completed), "completed");
}

#[test]
fn test_enum_round_trip() {
    for priority in [Priority::High, Priority::Medium, Priority::Low] {
        let value = serde_json::to_value(priority).unwrap();
        let back: Priority = serde_json::from_value(value).unwrap();
        assert_eq!(back, priority);
    }

    for status in [Status::NotStarted, Status::InProgress, Status::Completed] {
        let value = serde_json::to_value(status).unwrap();
        let back: Status = serde_json::from_value(value).unwrap();
        assert_eq!(back, status);
    }
}

#[test]
fn test_values_outside_enum_rejected() {
    assert!(serde_json::from_value::<Priority>(json!("urgent")).is_err());
    assert!(serde_json::from_value::<Priority>(json!("HIGH")).is_err());
    assert!(serde_json::from_value::<Status>(json!("done")).is_err());
    assert!(serde_json::from_value::<Status>(json!("")).is_err());
}

// ==================== 创建请求测试 ====================

#[test]
fn test_create_request_valid_body() {
    let body = json!({
        "content": "do thing",
        "priority": "high",
        "status": "not_started"
    });
    let req: CreateTodoRequest = serde_json::from_value(body).unwrap();

    assert!(req.validate().is_ok());
    assert_eq!(req.content, "do thing");
    assert_eq!(req.priority, Priority::High);
    assert_eq!(req.status, Status::NotStarted);
}

#[test]
fn test_create_request_empty_content_fails_validation() {
    let body = json!({
        "content": "",
        "priority": "high",
        "status": "not_started"
    });
    let req: CreateTodoRequest = serde_json::from_value(body).unwrap();

    assert!(req.validate().is_err());
}

#[test]
fn test_create_request_bad_enum_rejected_at_deserialization() {
    let bad_priority = json!({
        "content": "task",
        "priority": "unknown",
        "status": "not_started"
    });
    assert!(serde_json::from_value::<CreateTodoRequest>(bad_priority).is_err());

    let bad_status = json!({
        "content": "task",
        "priority": "high",
        "status": "unknown"
    });
    assert!(serde_json::from_value::<CreateTodoRequest>(bad_status).is_err());
}

// ==================== 更新请求测试 ====================

#[test]
fn test_update_request_accepts_subset() {
    let req: UpdateTodoRequest = serde_json::from_value(json!({})).unwrap();
    assert!(req.content.is_none());
    assert!(req.priority.is_none());
    assert!(req.status.is_none());

    let req: UpdateTodoRequest =
        serde_json::from_value(json!({ "status": "completed" })).unwrap();
    assert_eq!(req.status, Some(Status::Completed));
    assert!(req.content.is_none());
}

#[test]
fn test_update_request_bad_enum_rejected() {
    assert!(serde_json::from_value::<UpdateTodoRequest>(json!({ "priority": "urgent" })).is_err());
}

// ==================== 注册请求测试 ====================

#[test]
fn test_register_request_requires_non_empty_fields() {
    let req = RegisterRequest {
        username: String::new(),
        password: "pass".to_string(),
    };
    assert!(req.validate().is_err());

    let req = RegisterRequest {
        username: "user".to_string(),
        password: String::new(),
    };
    assert!(req.validate().is_err());

    // 没有密码策略：短密码合法
    let req = RegisterRequest {
        username: "t".to_string(),
        password: "z".to_string(),
    };
    assert!(req.validate().is_ok());
}

// ==================== 响应形状测试 ====================

#[test]
fn test_token_response_shape() {
    let resp = TokenResponse::bearer("token123".to_string());
    let value = serde_json::to_value(&resp).unwrap();

    assert_eq!(value["access_token"], "token123");
    assert_eq!(value["token_type"], "bearer");
}

#[test]
fn test_todo_response_omits_owner() {
    let todo = Todo {
        id: 1,
        owner_id: uuid::Uuid::new_v4(),
        content: "do thing".to_string(),
        priority: "high".to_string(),
        status: "not_started".to_string(),
        created_at: chrono::Utc::now(),
    };
    let value = serde_json::to_value(TodoResponse::from(todo)).unwrap();

    assert_eq!(value["id"], 1);
    assert_eq!(value["content"], "do thing");
    assert!(value.get("owner_id").is_none());
}

#[test]
fn test_list_query_defaults() {
    // 缺省时 completed 为 false
    let query: ListTodosQuery = serde_json::from_value(json!({})).unwrap();
    assert!(!query.completed);
    assert!(query.status.is_none());
    assert!(query.priority.is_none());
}
