use serde_json::{Value, json};

use super::model::AgentTurn;

/// 仪表盘数据标记，命中任意一个才尝试解析
const DASHBOARD_MARKERS: [&str; 3] = ["TextResp", "ChartConfigResp", "ToDoResp"];

const FENCE: &str = "```";

/// 从回复轮次中提取仪表盘数据
/// 从最新一轮向前扫描，第一个可解析的围栏JSON块胜出
pub fn extract_dashboard(turns: &[AgentTurn]) -> Option<Value> {
    for turn in turns.iter().rev() {
        let Some(content) = turn.content.as_ref() else {
            continue;
        };

        for part in &content.parts {
            let Some(text) = part.text.as_deref() else {
                continue;
            };
            if !DASHBOARD_MARKERS.iter().any(|marker| text.contains(marker)) {
                continue;
            }
            let Some(block) = fenced_json_block(text) else {
                continue;
            };
            // 块内JSON格式错误时继续向前扫描
            if let Ok(value) = serde_json::from_str::<Value>(block) {
                return Some(value);
            }
        }
    }

    None
}

/// 取出三重反引号围栏中的文本，围栏可带 "json" 标签
fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE)? + FENCE.len();
    let rest = &text[start..];
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let end = rest.find(FENCE)?;

    Some(rest[..end].trim())
}

/// 组装固定结构的仪表盘对象
/// 摘要与通知为演示占位数据，只有三个标记字段来自提取结果
pub fn build_dashboard(extracted: &Value, user_id: &str, phone_number: &str) -> Value {
    json!({
        "profile": {
            "userId": user_id,
            "phoneNumber": phone_number,
            "memberSince": "2021-04-12",
            "tier": "gold",
        },
        "summary": {
            "netWorth": 2_458_000,
            "creditScore": 778,
            "monthlySpend": 64_200,
            "savingsRate": 0.31,
        },
        "widgets": {
            "overview": extracted.get("TextResp").cloned().unwrap_or(Value::Null),
            "chart": extracted.get("ChartConfigResp").cloned().unwrap_or(Value::Null),
            "todos": extracted.get("ToDoResp").cloned().unwrap_or(Value::Null),
        },
        "notifications": [
            { "id": 1, "kind": "bill", "text": "Electricity bill due in 3 days" },
            { "id": 2, "kind": "insight", "text": "Dining spend up 18% this month" },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::model::{ContentPart, TurnContent};

    fn turn(text: &str) -> AgentTurn {
        AgentTurn {
            content: Some(TurnContent {
                parts: vec![ContentPart {
                    text: Some(text.to_string()),
                }],
                role: Some("model".to_string()),
            }),
        }
    }

    #[test]
    fn prefers_latest_turn_with_valid_block() {
        let turns = vec![
            turn("```json\n{\"TextResp\":\"old\"}\n```"),
            turn("```json\n{\"TextResp\":\"new\"}\n```"),
        ];

        let value = extract_dashboard(&turns).expect("extracted");
        assert_eq!(value["TextResp"], json!("new"));
    }

    #[test]
    fn markerless_later_turn_is_ignored() {
        let turns = vec![
            turn("```json\n{\"TextResp\":\"picked\",\"ToDoResp\":[]}\n```"),
            turn("anything else I can help with?"),
        ];

        let value = extract_dashboard(&turns).expect("extracted");
        assert_eq!(value["TextResp"], json!("picked"));
    }

    #[test]
    fn malformed_block_keeps_searching() {
        let turns = vec![
            turn("```json\n{\"ChartConfigResp\":{\"type\":\"bar\"}}\n```"),
            turn("```json\n{\"TextResp\": broken\n```"),
        ];

        let value = extract_dashboard(&turns).expect("extracted");
        assert_eq!(value["ChartConfigResp"]["type"], json!("bar"));
    }

    #[test]
    fn marker_without_fence_is_skipped() {
        let turns = vec![turn("TextResp will follow in the next message")];
        assert!(extract_dashboard(&turns).is_none());
    }

    #[test]
    fn untagged_fence_is_accepted() {
        let turns = vec![turn("Here you go:\n```\n{\"ToDoResp\":[\"pay bill\"]}\n```")];

        let value = extract_dashboard(&turns).expect("extracted");
        assert_eq!(value["ToDoResp"][0], json!("pay bill"));
    }

    #[test]
    fn empty_turns_yield_none() {
        let turns = vec![AgentTurn { content: None }];
        assert!(extract_dashboard(&turns).is_none());
    }

    #[test]
    fn build_dashboard_maps_marker_fields() {
        let extracted = json!({
            "TextResp": "All accounts healthy",
            "ChartConfigResp": { "type": "line" },
            "ToDoResp": ["review budget"],
        });

        let dashboard = build_dashboard(&extracted, "alice", "+15550100");

        assert_eq!(dashboard["profile"]["userId"], json!("alice"));
        assert_eq!(dashboard["profile"]["phoneNumber"], json!("+15550100"));
        assert_eq!(dashboard["widgets"]["overview"], json!("All accounts healthy"));
        assert_eq!(dashboard["widgets"]["chart"]["type"], json!("line"));
        assert_eq!(dashboard["widgets"]["todos"][0], json!("review budget"));
        // 未映射字段为固定占位数据
        assert_eq!(dashboard["summary"]["creditScore"], json!(778));
    }

    #[test]
    fn build_dashboard_tolerates_partial_payload() {
        let extracted = json!({ "TextResp": "only text" });

        let dashboard = build_dashboard(&extracted, "alice", "+15550100");

        assert_eq!(dashboard["widgets"]["overview"], json!("only text"));
        assert_eq!(dashboard["widgets"]["chart"], Value::Null);
        assert_eq!(dashboard["widgets"]["todos"], Value::Null);
    }
}
