// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON document import/export.
//!
//! The wire document is one array mixing node and edge records, the way
//! the host canvas keeps its elements; node records are the ones carrying
//! a `position`. Export is verbatim (no frame normalization) and import
//! replaces the whole collection. A document is decoded completely before
//! the Board is touched, so a malformed import never partially applies.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{
    Board, ColorTheme, Edge, EdgeId, EdgeMarker, Element, ElementId, GroupBody, HandleMap,
    IdError, ListBody, ListItem, NodeBody, NodeKind, Point, Size, Status, TaskBody, TextBody,
    TopicBody,
};

#[derive(Debug)]
pub enum DocError {
    Json {
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: IdError,
    },
    InvalidBody {
        element_id: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "cannot parse document: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::InvalidBody { element_id, source } => {
                write!(f, "invalid payload for element {element_id}: {source}")
            }
        }
    }
}

impl std::error::Error for DocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::InvalidBody { source, .. } => Some(source),
        }
    }
}

/// Wire value of the containment-extent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ExtentRecord {
    Parent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NodeRecord {
    id: String,
    #[serde(rename = "type")]
    kind: NodeKind,
    position: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extent: Option<ExtentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z_index: Option<i32>,
    data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeRecord {
    id: String,
    source: String,
    source_handle: String,
    target: String,
    target_handle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marker_end: Option<EdgeMarker>,
}

/// Node records carry a `position`; everything else with a `source` and a
/// `target` is an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum DocRecord {
    Node(NodeRecord),
    Edge(EdgeRecord),
}

fn default_text_variant() -> String {
    "title".to_owned()
}

fn default_text_width() -> f64 {
    200.0
}

fn default_text_align() -> String {
    "left".to_owned()
}

fn default_color() -> ColorTheme {
    ColorTheme::Gray
}

fn default_status() -> Status {
    Status::Todo
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextDataRecord {
    label: String,
    #[serde(default = "default_text_variant")]
    variant: String,
    #[serde(default = "default_text_width")]
    width: f64,
    #[serde(default = "default_text_align")]
    text_align: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopicDataRecord {
    label: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_color")]
    color: ColorTheme,
    #[serde(default = "default_text_align")]
    text_align: String,
    #[serde(default)]
    has_status: bool,
    #[serde(default = "default_status")]
    status: Status,
    #[serde(default)]
    handles: HandleMap,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskDataRecord {
    label: String,
    #[serde(default)]
    url: String,
    #[serde(default = "default_color")]
    color: ColorTheme,
    #[serde(default)]
    has_status: bool,
    #[serde(default = "default_status")]
    status: Status,
    #[serde(default)]
    handles: HandleMap,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListItemRecord {
    id: String,
    label: String,
    #[serde(default = "default_status")]
    status: Status,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDataRecord {
    label: String,
    #[serde(default = "default_color")]
    color: ColorTheme,
    #[serde(default)]
    items: Vec<ListItemRecord>,
    #[serde(default)]
    handles: HandleMap,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupDataRecord {
    label: String,
    #[serde(default = "default_color")]
    color: ColorTheme,
    #[serde(default)]
    handles: HandleMap,
}

fn decode_body(kind: NodeKind, data: serde_json::Value) -> Result<NodeBody, serde_json::Error> {
    match kind {
        NodeKind::Text => {
            let record: TextDataRecord = serde_json::from_value(data)?;
            let mut body = TextBody::new(record.label);
            body.set_variant(record.variant);
            body.set_width(record.width);
            body.set_text_align(record.text_align);
            Ok(NodeBody::Text(body))
        }
        NodeKind::Topic => {
            let record: TopicDataRecord = serde_json::from_value(data)?;
            let mut body = TopicBody::new(record.label);
            body.set_description(record.description);
            body.set_color(record.color);
            body.set_text_align(record.text_align);
            body.set_has_status(record.has_status);
            body.set_status(record.status);
            body.set_handles(record.handles);
            Ok(NodeBody::Topic(body))
        }
        NodeKind::Task => {
            let record: TaskDataRecord = serde_json::from_value(data)?;
            let mut body = TaskBody::new(record.label);
            body.set_url(record.url);
            body.set_color(record.color);
            body.set_has_status(record.has_status);
            body.set_status(record.status);
            body.set_handles(record.handles);
            Ok(NodeBody::Task(body))
        }
        NodeKind::List => {
            let record: ListDataRecord = serde_json::from_value(data)?;
            let mut body = ListBody::new(record.label);
            body.set_color(record.color);
            body.set_items(
                record
                    .items
                    .into_iter()
                    .map(|item| ListItem::new(item.id, item.label, item.status))
                    .collect(),
            );
            body.set_handles(record.handles);
            Ok(NodeBody::List(body))
        }
        NodeKind::Group => {
            let record: GroupDataRecord = serde_json::from_value(data)?;
            let mut body = GroupBody::new(record.label);
            body.set_color(record.color);
            body.set_handles(record.handles);
            Ok(NodeBody::Group(body))
        }
    }
}

fn encode_body(body: &NodeBody) -> Result<serde_json::Value, serde_json::Error> {
    match body {
        NodeBody::Text(text) => serde_json::to_value(TextDataRecord {
            label: text.label().to_owned(),
            variant: text.variant().to_owned(),
            width: text.width(),
            text_align: text.text_align().to_owned(),
        }),
        NodeBody::Topic(topic) => serde_json::to_value(TopicDataRecord {
            label: topic.label().to_owned(),
            description: topic.description().to_owned(),
            color: topic.color(),
            text_align: topic.text_align().to_owned(),
            has_status: topic.has_status(),
            status: topic.status(),
            handles: topic.handles().clone(),
        }),
        NodeBody::Task(task) => serde_json::to_value(TaskDataRecord {
            label: task.label().to_owned(),
            url: task.url().to_owned(),
            color: task.color(),
            has_status: task.has_status(),
            status: task.status(),
            handles: task.handles().clone(),
        }),
        NodeBody::List(list) => serde_json::to_value(ListDataRecord {
            label: list.label().to_owned(),
            color: list.color(),
            items: list
                .items()
                .iter()
                .map(|item| ListItemRecord {
                    id: item.item_id().to_owned(),
                    label: item.label().to_owned(),
                    status: item.status(),
                })
                .collect(),
            handles: list.handles().clone(),
        }),
        NodeBody::Group(group) => serde_json::to_value(GroupDataRecord {
            label: group.label().to_owned(),
            color: group.color(),
            handles: group.handles().clone(),
        }),
    }
}

fn element_from_record(record: NodeRecord) -> Result<Element, DocError> {
    let element_id =
        ElementId::new(record.id.clone()).map_err(|source| DocError::InvalidId {
            field: "id",
            value: record.id.clone(),
            source,
        })?;
    let parent_id = record
        .parent_node
        .map(|parent| {
            ElementId::new(parent.clone()).map_err(|source| DocError::InvalidId {
                field: "parentNode",
                value: parent,
                source,
            })
        })
        .transpose()?;

    let body = decode_body(record.kind, record.data).map_err(|source| DocError::InvalidBody {
        element_id: record.id,
        source,
    })?;

    let size = match (record.width, record.height) {
        (Some(width), Some(height)) => Some(Size::new(width, height)),
        _ => None,
    };
    let confined = matches!(record.extent, Some(ExtentRecord::Parent));

    Ok(Element::new_with(
        element_id,
        record.position,
        parent_id,
        confined,
        size,
        record.z_index,
        body,
    ))
}

fn edge_from_record(record: EdgeRecord) -> Result<Edge, DocError> {
    let edge_id = EdgeId::new(record.id.clone()).map_err(|source| DocError::InvalidId {
        field: "id",
        value: record.id,
        source,
    })?;
    let source_id =
        ElementId::new(record.source.clone()).map_err(|source| DocError::InvalidId {
            field: "source",
            value: record.source,
            source,
        })?;
    let target_id =
        ElementId::new(record.target.clone()).map_err(|source| DocError::InvalidId {
            field: "target",
            value: record.target,
            source,
        })?;

    Ok(Edge::new_with(
        edge_id,
        source_id,
        record.source_handle,
        target_id,
        record.target_handle,
        record.marker_end,
    ))
}

fn element_to_record(element: &Element) -> Result<NodeRecord, DocError> {
    let data = encode_body(element.body()).map_err(|source| DocError::Json { source })?;
    Ok(NodeRecord {
        id: element.element_id().as_str().to_owned(),
        kind: element.kind(),
        position: element.position(),
        parent_node: element
            .parent_id()
            .map(|parent_id| parent_id.as_str().to_owned()),
        extent: element.confined().then_some(ExtentRecord::Parent),
        width: element.size().map(|size| size.width),
        height: element.size().map(|size| size.height),
        z_index: element.z_index(),
        data,
    })
}

fn edge_to_record(edge: &Edge) -> EdgeRecord {
    EdgeRecord {
        id: edge.edge_id().as_str().to_owned(),
        source: edge.source_id().as_str().to_owned(),
        source_handle: edge.source_handle().to_owned(),
        target: edge.target_id().as_str().to_owned(),
        target_handle: edge.target_handle().to_owned(),
        marker_end: edge.marker_end(),
    }
}

/// Decodes a whole document into model collections without touching any
/// Board.
pub fn parse_document(text: &str) -> Result<(Vec<Element>, Vec<Edge>), DocError> {
    let records: Vec<DocRecord> =
        serde_json::from_str(text).map_err(|source| DocError::Json { source })?;

    let mut elements = Vec::new();
    let mut edges = Vec::new();
    for record in records {
        match record {
            DocRecord::Node(record) => elements.push(element_from_record(record)?),
            DocRecord::Edge(record) => edges.push(edge_from_record(record)?),
        }
    }
    Ok((elements, edges))
}

/// Parses `text` and replaces the Board's whole collection. The Board is
/// untouched on any error. Revision bookkeeping is the caller's concern.
pub fn import_document(board: &mut Board, text: &str) -> Result<(), DocError> {
    let (elements, edges) = parse_document(text)?;
    board.replace_all(elements, edges);
    Ok(())
}

/// Serializes the Board verbatim: node records in board order, then edge
/// records in board order, pretty-printed.
pub fn export_document(board: &Board) -> Result<String, DocError> {
    let mut records: Vec<DocRecord> = Vec::with_capacity(
        board.elements().len() + board.edges().len(),
    );
    for element in board.elements() {
        records.push(DocRecord::Node(element_to_record(element)?));
    }
    for edge in board.edges() {
        records.push(DocRecord::Edge(edge_to_record(edge)));
    }

    serde_json::to_string_pretty(&records).map_err(|source| DocError::Json { source })
}
