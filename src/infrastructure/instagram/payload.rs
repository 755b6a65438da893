// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Instagram `web_profile_info` 响应结构
//!
//! 所有字段都经过 [`lenient`]：缺失、`null` 或类型不符时均为 `None`，
//! 单个异常字段不会导致外层对象解析失败

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// 可选字段反序列化，类型不符时视为 `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub data: Option<ProfileData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileData {
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<ProfileUser>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileUser {
    #[serde(default, deserialize_with = "lenient")]
    pub edge_owner_to_timeline_media: Option<TimelineMedia>,
}

/// 边列表保留原始 JSON，单条异常不影响其余条目
#[derive(Debug, Default, Deserialize)]
pub struct TimelineMedia {
    #[serde(default, deserialize_with = "lenient")]
    pub edges: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamEdge {
    #[serde(default, deserialize_with = "lenient")]
    pub node: Option<UpstreamNode>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpstreamNode {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shortcode: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub display_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub taken_at_timestamp: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub is_video: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub edge_liked_by: Option<CountEdge>,
    #[serde(default, deserialize_with = "lenient")]
    pub edge_media_to_comment: Option<CountEdge>,
    #[serde(default, deserialize_with = "lenient")]
    pub edge_media_to_caption: Option<CaptionEdges>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountEdge {
    #[serde(default, deserialize_with = "lenient")]
    pub count: Option<u64>,
}

/// 同样保留原始 JSON，只解析第一条
#[derive(Debug, Default, Deserialize)]
pub struct CaptionEdges {
    #[serde(default, deserialize_with = "lenient")]
    pub edges: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaptionEdge {
    #[serde(default, deserialize_with = "lenient")]
    pub node: Option<CaptionNode>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CaptionNode {
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl ProfileResponse {
    /// 解析任意形状的响应，非对象响应视为空
    pub fn from_payload(payload: &Value) -> Self {
        if !payload.is_object() {
            return Self::default();
        }
        ProfileResponse::deserialize(payload).unwrap_or_default()
    }

    /// 沿 `data.user.edge_owner_to_timeline_media.edges` 取出边列表
    pub fn into_edges(self) -> Vec<Value> {
        self.data
            .and_then(|d| d.user)
            .and_then(|u| u.edge_owner_to_timeline_media)
            .and_then(|m| m.edges)
            .unwrap_or_default()
    }
}

impl UpstreamEdge {
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        UpstreamEdge::deserialize(value).unwrap_or_default()
    }
}

impl UpstreamNode {
    /// 第一条说明文字，没有时为 `None`
    pub fn caption(&self) -> Option<String> {
        self.edge_media_to_caption
            .as_ref()
            .and_then(|c| c.edges.as_ref())
            .and_then(|edges| edges.first())
            .and_then(|edge| CaptionEdge::deserialize(edge).ok())
            .and_then(|edge| edge.node)
            .and_then(|node| node.text)
    }
}
