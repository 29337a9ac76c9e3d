// ABOUTME: Body keypoint model used by form analysis
// ABOUTME: Pixel coordinates for fourteen tracked body parts plus frame dimensions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tracked body parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Head
    Head,
    /// Base of the neck
    Neck,
    /// Right shoulder
    RightShoulder,
    /// Left shoulder
    LeftShoulder,
    /// Right elbow
    RightElbow,
    /// Left elbow
    LeftElbow,
    /// Right wrist
    RightWrist,
    /// Left wrist
    LeftWrist,
    /// Right hip
    RightHip,
    /// Left hip
    LeftHip,
    /// Right knee
    RightKnee,
    /// Left knee
    LeftKnee,
    /// Right ankle
    RightAnkle,
    /// Left ankle
    LeftAnkle,
}

impl BodyPart {
    /// Every tracked body part, head to feet
    pub const ALL: [Self; 14] = [
        Self::Head,
        Self::Neck,
        Self::RightShoulder,
        Self::LeftShoulder,
        Self::RightElbow,
        Self::LeftElbow,
        Self::RightWrist,
        Self::LeftWrist,
        Self::RightHip,
        Self::LeftHip,
        Self::RightKnee,
        Self::LeftKnee,
        Self::RightAnkle,
        Self::LeftAnkle,
    ];
}

/// Pixel coordinate, origin top-left, y growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal pixel position
    pub x: i64,
    /// Vertical pixel position
    pub y: i64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Dimensions of the analysed frame in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
}

impl FrameSize {
    /// Create a frame size
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Detected keypoints keyed by body part
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoseKeypoints {
    points: BTreeMap<BodyPart, Point>,
}

impl PoseKeypoints {
    /// Create an empty keypoint set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location of a body part
    pub fn insert(&mut self, part: BodyPart, point: Point) {
        self.points.insert(part, point);
    }

    /// Location of a body part, if detected
    #[must_use]
    pub fn get(&self, part: BodyPart) -> Option<Point> {
        self.points.get(&part).copied()
    }

    /// Number of detected body parts
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether nothing was detected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
