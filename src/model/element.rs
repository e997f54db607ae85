// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Roadgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Roadgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Size};
use super::ids::ElementId;

/// The node variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Text,
    Topic,
    Task,
    List,
    Group,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Topic => "topic",
            Self::Task => "task",
            Self::List => "list",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared role of a named connection point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleRole {
    Source,
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Blue,
    Green,
    Yellow,
    Purple,
    Gray,
}

/// Handle name to declared role. Empty until the user configures handles.
pub type HandleMap = BTreeMap<String, HandleRole>;

#[derive(Debug, Clone, PartialEq)]
pub struct TextBody {
    label: String,
    variant: String,
    width: f64,
    text_align: String,
}

impl TextBody {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: "title".to_owned(),
            width: 200.0,
            text_align: "left".to_owned(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn set_variant(&mut self, variant: impl Into<String>) {
        self.variant = variant.into();
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn text_align(&self) -> &str {
        &self.text_align
    }

    pub fn set_text_align(&mut self, text_align: impl Into<String>) {
        self.text_align = text_align.into();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicBody {
    label: String,
    description: String,
    color: ColorTheme,
    text_align: String,
    has_status: bool,
    status: Status,
    handles: HandleMap,
}

impl TopicBody {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: String::new(),
            color: ColorTheme::Blue,
            text_align: "left".to_owned(),
            has_status: true,
            status: Status::InProgress,
            handles: HandleMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn color(&self) -> ColorTheme {
        self.color
    }

    pub fn set_color(&mut self, color: ColorTheme) {
        self.color = color;
    }

    pub fn text_align(&self) -> &str {
        &self.text_align
    }

    pub fn set_text_align(&mut self, text_align: impl Into<String>) {
        self.text_align = text_align.into();
    }

    pub fn has_status(&self) -> bool {
        self.has_status
    }

    pub fn set_has_status(&mut self, has_status: bool) {
        self.has_status = has_status;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn handles(&self) -> &HandleMap {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut HandleMap {
        &mut self.handles
    }

    pub fn set_handles(&mut self, handles: HandleMap) {
        self.handles = handles;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskBody {
    label: String,
    url: String,
    color: ColorTheme,
    has_status: bool,
    status: Status,
    handles: HandleMap,
}

impl TaskBody {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: String::new(),
            color: ColorTheme::Green,
            has_status: true,
            status: Status::Todo,
            handles: HandleMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn color(&self) -> ColorTheme {
        self.color
    }

    pub fn set_color(&mut self, color: ColorTheme) {
        self.color = color;
    }

    pub fn has_status(&self) -> bool {
        self.has_status
    }

    pub fn set_has_status(&mut self, has_status: bool) {
        self.has_status = has_status;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn handles(&self) -> &HandleMap {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut HandleMap {
        &mut self.handles
    }

    pub fn set_handles(&mut self, handles: HandleMap) {
        self.handles = handles;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    item_id: String,
    label: String,
    status: Status,
}

impl ListItem {
    pub fn new(item_id: impl Into<String>, label: impl Into<String>, status: Status) -> Self {
        Self {
            item_id: item_id.into(),
            label: label.into(),
            status,
        }
    }

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListBody {
    label: String,
    color: ColorTheme,
    items: Vec<ListItem>,
    handles: HandleMap,
}

impl ListBody {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: ColorTheme::Purple,
            items: Vec::new(),
            handles: HandleMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn color(&self) -> ColorTheme {
        self.color
    }

    pub fn set_color(&mut self, color: ColorTheme) {
        self.color = color;
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<ListItem> {
        &mut self.items
    }

    pub fn set_items(&mut self, items: Vec<ListItem>) {
        self.items = items;
    }

    pub fn handles(&self) -> &HandleMap {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut HandleMap {
        &mut self.handles
    }

    pub fn set_handles(&mut self, handles: HandleMap) {
        self.handles = handles;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupBody {
    label: String,
    color: ColorTheme,
    handles: HandleMap,
}

impl GroupBody {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: ColorTheme::Gray,
            handles: HandleMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn color(&self) -> ColorTheme {
        self.color
    }

    pub fn set_color(&mut self, color: ColorTheme) {
        self.color = color;
    }

    pub fn handles(&self) -> &HandleMap {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut HandleMap {
        &mut self.handles
    }

    pub fn set_handles(&mut self, handles: HandleMap) {
        self.handles = handles;
    }
}

/// Kind-tagged node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    Text(TextBody),
    Topic(TopicBody),
    Task(TaskBody),
    List(ListBody),
    Group(GroupBody),
}

impl NodeBody {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Text(_) => NodeKind::Text,
            Self::Topic(_) => NodeKind::Topic,
            Self::Task(_) => NodeKind::Task,
            Self::List(_) => NodeKind::List,
            Self::Group(_) => NodeKind::Group,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Text(body) => body.label(),
            Self::Topic(body) => body.label(),
            Self::Task(body) => body.label(),
            Self::List(body) => body.label(),
            Self::Group(body) => body.label(),
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        match self {
            Self::Text(body) => body.set_label(label),
            Self::Topic(body) => body.set_label(label),
            Self::Task(body) => body.set_label(label),
            Self::List(body) => body.set_label(label),
            Self::Group(body) => body.set_label(label),
        }
    }

    /// Text nodes carry no handle map and can never be an edge endpoint.
    pub fn handles(&self) -> Option<&HandleMap> {
        match self {
            Self::Text(_) => None,
            Self::Topic(body) => Some(body.handles()),
            Self::Task(body) => Some(body.handles()),
            Self::List(body) => Some(body.handles()),
            Self::Group(body) => Some(body.handles()),
        }
    }

    pub fn handles_mut(&mut self) -> Option<&mut HandleMap> {
        match self {
            Self::Text(_) => None,
            Self::Topic(body) => Some(body.handles_mut()),
            Self::Task(body) => Some(body.handles_mut()),
            Self::List(body) => Some(body.handles_mut()),
            Self::Group(body) => Some(body.handles_mut()),
        }
    }

    pub fn color(&self) -> Option<ColorTheme> {
        match self {
            Self::Text(_) => None,
            Self::Topic(body) => Some(body.color()),
            Self::Task(body) => Some(body.color()),
            Self::List(body) => Some(body.color()),
            Self::Group(body) => Some(body.color()),
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Topic(body) => Some(body.status()),
            Self::Task(body) => Some(body.status()),
            _ => None,
        }
    }
}

/// A single diagram element.
///
/// `position` is interpreted relative to the immediate container's origin
/// when `parent_id` is set, and canvas-absolute otherwise. The pairing is
/// only ever changed through [`Element::assign_frame`] so the reference and
/// the frame cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    element_id: ElementId,
    position: Point,
    parent_id: Option<ElementId>,
    confined: bool,
    size: Option<Size>,
    z_index: Option<i32>,
    body: NodeBody,
}

impl Element {
    pub fn new(element_id: ElementId, position: Point, body: NodeBody) -> Self {
        Self {
            element_id,
            position,
            parent_id: None,
            confined: false,
            size: None,
            z_index: None,
            body,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with(
        element_id: ElementId,
        position: Point,
        parent_id: Option<ElementId>,
        confined: bool,
        size: Option<Size>,
        z_index: Option<i32>,
        body: NodeBody,
    ) -> Self {
        Self {
            element_id,
            position,
            parent_id,
            confined,
            size,
            z_index,
            body,
        }
    }

    pub fn element_id(&self) -> &ElementId {
        &self.element_id
    }

    pub fn kind(&self) -> NodeKind {
        self.body.kind()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Repositions within the element's current frame.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn parent_id(&self) -> Option<&ElementId> {
        self.parent_id.as_ref()
    }

    /// Whether the element is constrained to stay inside its container.
    pub fn confined(&self) -> bool {
        self.confined
    }

    /// Moves the element into a new frame in one step: position, container
    /// reference, and extent flag change together. The extent flag is set
    /// exactly when a container is present.
    pub fn assign_frame(&mut self, position: Point, parent_id: Option<ElementId>) {
        self.confined = parent_id.is_some();
        self.parent_id = parent_id;
        self.position = position;
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn set_size(&mut self, size: Option<Size>) {
        self.size = size;
    }

    pub fn z_index(&self) -> Option<i32> {
        self.z_index
    }

    pub fn set_z_index(&mut self, z_index: Option<i32>) {
        self.z_index = z_index;
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut NodeBody {
        &mut self.body
    }
}
