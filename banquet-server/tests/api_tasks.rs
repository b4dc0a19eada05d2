mod common;

use common::{delete, get, post, put, setup};
use http::StatusCode;
use serde_json::{Value, json};

/// 秘书
const SECRETARY: &str = "%E7%A7%98%E4%B9%A6";

fn titles(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_task_lifecycle() {
    let (_dir, app) = setup().await;

    let (status, task) = post(
        &app,
        "/api/tasks",
        json!({ "title": "订场地", "priority": "high", "dueDate": "2030-01-10", "assignee": "贵华" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "todo");
    assert_eq!(task["priority"], "high");
    assert_eq!(task["dueDate"], "2030-01-10T00:00:00.000Z");
    assert_eq!(task["assignees"], json!(["贵华"]));
    let id = task["id"].as_str().unwrap().to_string();

    let (status, task) = post(&app, &format!("/api/tasks/{}/advance", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "in_progress");

    let (_, task) = post(
        &app,
        &format!("/api/tasks/{}/comments", id),
        json!({ "text": " 已联系酒店 " }),
    )
    .await;
    assert_eq!(task["comments"][0]["text"], "已联系酒店");
    assert_eq!(task["comments"][0]["author"], "Current User");

    let (status, body) = post(&app, &format!("/api/tasks/{}/comments", id), json!({ "text": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["code"].is_number());

    let (status, task) = put(
        &app,
        &format!("/api/tasks/{}", id),
        json!({ "status": "done", "dueDate": "" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "done");
    assert_eq!(task["dueDate"], "");

    let (status, _) = put(&app, &format!("/api/tasks/{}", id), json!({ "dueDate": "someday" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = delete(&app, &format!("/api/tasks/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, &format!("/api/tasks/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_validation() {
    let (_dir, app) = setup().await;

    let (status, body) = post(&app, "/api/tasks", json!({ "title": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "title");

    let (status, _) = post(&app, "/api/tasks", json!({ "title": "X", "dueDate": "soon" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = get(&app, "/api/tasks").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_list_order_and_filters() {
    let (_dir, app) = setup().await;
    let (_, first) = post(&app, "/api/tasks", json!({ "title": "Menu tasting", "priority": "low" })).await;
    post(&app, "/api/tasks", json!({ "title": "Print tickets", "description": "menu cards too" })).await;
    post(&app, "/api/tasks", json!({ "title": "Book band", "priority": "high" })).await;

    let id = first["id"].as_str().unwrap();
    post(&app, &format!("/api/tasks/{}/advance", id), json!({})).await;
    post(&app, &format!("/api/tasks/{}/advance", id), json!({})).await;

    // Done tasks sink to the bottom; newest first otherwise
    let (_, list) = get(&app, "/api/tasks").await;
    assert_eq!(titles(&list), vec!["Book band", "Print tickets", "Menu tasting"]);

    let (_, list) = get(&app, "/api/tasks?q=MENU").await;
    assert_eq!(titles(&list), vec!["Print tickets", "Menu tasting"]);

    let (_, list) = get(&app, "/api/tasks?status=done").await;
    assert_eq!(titles(&list), vec!["Menu tasting"]);

    let (_, list) = get(&app, "/api/tasks?priority=high").await;
    assert_eq!(titles(&list), vec!["Book band"]);
}

#[tokio::test]
async fn test_generate_from_default_committee() {
    let (_dir, app) = setup().await;

    let (status, tasks) = post(&app, "/api/tasks/generate", json!({ "dinnerDate": "2030-04-25" })).await;
    assert_eq!(status, StatusCode::OK);
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 32);

    let guest_list = tasks.iter().find(|t| t["title"] == "整理嘉宾名单").unwrap();
    assert_eq!(guest_list["dueDate"], "2030-03-26T00:00:00.000Z");
    assert_eq!(guest_list["startDate"], "2030-03-12T00:00:00.000Z");
    assert_eq!(guest_list["assignees"], json!(["国汉"]));

    let (_, secretary) = get(&app, &format!("/api/tasks?role={}", SECRETARY)).await;
    assert_eq!(secretary.as_array().unwrap().len(), 4);

    let (_, list) = get(&app, "/api/tasks?assignee=%E9%87%91%E6%98%8E").await;
    assert_eq!(list.as_array().unwrap().len(), 3);

    // Generation replaces the list
    let (_, again) = post(&app, "/api/tasks/generate", json!({ "dinnerDate": "2030-04-25T00:00:00.000Z" })).await;
    assert_eq!(again.as_array().unwrap().len(), 32);
    let (_, all) = get(&app, "/api/tasks").await;
    assert_eq!(all.as_array().unwrap().len(), 32);

    let (_, dashboard) = get(&app, "/api/tasks/dashboard").await;
    assert_eq!(dashboard["summary"]["total"], 32);
    assert_eq!(dashboard["summary"]["status"], "green");
    assert_eq!(dashboard["overdue"], json!([]));
    assert_eq!(dashboard["upcoming"].as_array().unwrap().len(), 5);
    // Earliest due first: 预订晚宴场地 is 150 days out
    assert_eq!(dashboard["upcoming"][0]["title"], "预订晚宴场地");

    let (status, _) = delete(&app, "/api/tasks").await;
    assert_eq!(status, StatusCode::OK);
    let (_, all) = get(&app, "/api/tasks").await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_generate_rejects_bad_date() {
    let (_dir, app) = setup().await;
    for bad in ["", "April 25th"] {
        let (status, body) = post(&app, "/api/tasks/generate", json!({ "dinnerDate": bad })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["dinnerDate"], bad);
    }
}

#[tokio::test]
async fn test_status_turns_red_when_overdue() {
    let (_dir, app) = setup().await;

    let (_, summary) = get(&app, "/api/tasks/status").await;
    assert_eq!(summary["status"], "green");
    assert_eq!(summary["total"], 0);
    assert_eq!(summary["completionRate"], 0);

    post(&app, "/api/tasks", json!({ "title": "Late", "dueDate": "2001-01-01" })).await;
    let (_, done) = post(&app, "/api/tasks", json!({ "title": "Old but done", "dueDate": "2001-01-01" })).await;
    put(
        &app,
        &format!("/api/tasks/{}", done["id"].as_str().unwrap()),
        json!({ "status": "done" }),
    )
    .await;

    let (_, summary) = get(&app, "/api/tasks/status").await;
    assert_eq!(summary["status"], "red");
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["completed"], 1);
    assert_eq!(summary["overdue"], 1);
    assert_eq!(summary["completionRate"], 50);

    let (_, dashboard) = get(&app, "/api/tasks/dashboard").await;
    assert_eq!(titles(&dashboard["overdue"]), vec!["Late"]);
}

#[tokio::test]
async fn test_gantt_layout() {
    let (_dir, app) = setup().await;
    post(
        &app,
        "/api/tasks",
        json!({ "title": "Venue", "startDate": "2030-01-01", "dueDate": "2030-01-15" }),
    )
    .await;

    let (status, layout) = get(&app, "/api/tasks/gantt?mode=week").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(layout["mode"], "week");
    assert_eq!(layout["unitWidth"], 100.0);
    let bars = layout["bars"].as_array().unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0]["title"], "Venue");
    // Two weeks at 100px per week
    assert_eq!(bars[0]["width"], 200.0);

    let (_, layout) = get(&app, "/api/tasks/gantt").await;
    assert_eq!(layout["mode"], "day");
}
