// ABOUTME: Exercise form analysis from body keypoints using simple joint geometry
// ABOUTME: Produces posture, alignment, balance, and joint-angle insights for a frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form Analyzer
//!
//! Keypoints come from a pose detector outside this crate or from
//! [`simulate_keypoints`], a deterministic stand-in that places each body part
//! at fixed fractions of the frame. Coordinates are pixels with the origin at
//! the top-left corner and y growing downwards.

use crate::config::intelligence::{FailurePolicy, FormConfig};
use coach_core::constants::form::{ALIGNMENT, BALANCE, JOINT_ANGLES, POSTURE};
use coach_core::errors::{AppError, AppResult};
use coach_core::models::{BodyPart, FormAnalysis, FrameSize, Point, PoseKeypoints};
use tracing::{debug, error};

/// Place every body part at fixed fractions of the frame (integer pixel math)
#[must_use]
pub fn simulate_keypoints(frame: FrameSize) -> PoseKeypoints {
    let w = i64::from(frame.width);
    let h = i64::from(frame.height);
    let cx = w / 2;
    let cy = h / 2;

    let layout = [
        (BodyPart::Head, cx, h / 5),
        (BodyPart::Neck, cx, h / 4),
        (BodyPart::RightShoulder, cx - w / 8, h / 3),
        (BodyPart::LeftShoulder, cx + w / 8, h / 3),
        (BodyPart::RightElbow, cx - w / 5, cy),
        (BodyPart::LeftElbow, cx + w / 5, cy),
        (BodyPart::RightWrist, cx - w / 4, cy + h / 8),
        (BodyPart::LeftWrist, cx + w / 4, cy + h / 8),
        (BodyPart::RightHip, cx - w / 10, cy + h / 6),
        (BodyPart::LeftHip, cx + w / 10, cy + h / 6),
        (BodyPart::RightKnee, cx - w / 8, cy + h / 3),
        (BodyPart::LeftKnee, cx + w / 8, cy + h / 3),
        (BodyPart::RightAnkle, cx - w / 6, h - h / 8),
        (BodyPart::LeftAnkle, cx + w / 6, h - h / 8),
    ];

    let mut keypoints = PoseKeypoints::new();
    for (part, x, y) in layout {
        keypoints.insert(part, Point::new(x, y));
    }
    keypoints
}

/// Signed distance `to - from` along one axis, computed in floating point so
/// coordinates near the integer limits cannot overflow
fn offset(to: i64, from: i64) -> f64 {
    to as f64 - from as f64
}

fn vertical_angle(dx: f64, dy: f64) -> f64 {
    dx.atan2(dy).abs().to_degrees()
}

/// Angle in degrees between the segment `from -> to` and the downward vertical
#[must_use]
pub fn angle_from_vertical(from: Point, to: Point) -> f64 {
    vertical_angle(offset(to.x, from.x), offset(to.y, from.y))
}

/// Angle in degrees at `vertex` between rays to `a` and `c`.
///
/// Returns `None` when either ray has zero length.
#[must_use]
pub fn joint_angle(a: Point, vertex: Point, c: Point) -> Option<f64> {
    let (bax, bay) = (offset(a.x, vertex.x), offset(a.y, vertex.y));
    let (bcx, bcy) = (offset(c.x, vertex.x), offset(c.y, vertex.y));
    let norms = bax.hypot(bay) * bcx.hypot(bcy);
    if norms == 0.0 {
        return None;
    }
    let cosine = bax.mul_add(bcx, bay * bcy) / norms;
    Some(cosine.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Keypoints the analysis reads, resolved up front
struct Skeleton {
    neck: Point,
    right_shoulder: Point,
    left_shoulder: Point,
    right_hip: Point,
    left_hip: Point,
    right_knee: Point,
    left_knee: Point,
    right_ankle: Point,
    left_ankle: Point,
}

impl Skeleton {
    fn resolve(keypoints: &PoseKeypoints) -> AppResult<Self> {
        let get = |part: BodyPart| {
            keypoints.get(part).ok_or_else(|| {
                AppError::missing_field(format!("keypoint {part:?}"))
            })
        };
        Ok(Self {
            neck: get(BodyPart::Neck)?,
            right_shoulder: get(BodyPart::RightShoulder)?,
            left_shoulder: get(BodyPart::LeftShoulder)?,
            right_hip: get(BodyPart::RightHip)?,
            left_hip: get(BodyPart::LeftHip)?,
            right_knee: get(BodyPart::RightKnee)?,
            left_knee: get(BodyPart::LeftKnee)?,
            right_ankle: get(BodyPart::RightAnkle)?,
            left_ankle: get(BodyPart::LeftAnkle)?,
        })
    }

    /// Midpoint of the hips, floored to whole pixels
    fn mid_hip(&self) -> (f64, f64) {
        (
            ((self.right_hip.x as f64 + self.left_hip.x as f64) / 2.0).floor(),
            ((self.right_hip.y as f64 + self.left_hip.y as f64) / 2.0).floor(),
        )
    }

    /// Angle of the neck to mid-hip segment from the downward vertical
    fn spine_angle(&self) -> f64 {
        let (hip_x, hip_y) = self.mid_hip();
        vertical_angle(hip_x - self.neck.x as f64, hip_y - self.neck.y as f64)
    }
}

/// Derives form insights from keypoints
#[derive(Debug, Clone, Copy)]
pub struct FormAnalyzer<'a> {
    config: &'a FormConfig,
    failure_policy: FailurePolicy,
}

impl<'a> FormAnalyzer<'a> {
    /// Create an analyzer over the given configuration and failure policy
    #[must_use]
    pub const fn new(config: &'a FormConfig, failure_policy: FailurePolicy) -> Self {
        Self {
            config,
            failure_policy,
        }
    }

    /// Analyze keypoints, applying the failure policy when analysis is impossible.
    ///
    /// Under fail-soft a missing keypoint or degenerate joint yields the fixed
    /// "Unable to analyze" insights for every category.
    ///
    /// # Errors
    ///
    /// Returns the analysis error under [`FailurePolicy::FailLoud`]
    pub fn analyze(&self, keypoints: &PoseKeypoints, frame: FrameSize) -> AppResult<FormAnalysis> {
        match self.try_analyze(keypoints, frame) {
            Ok(analysis) => Ok(analysis),
            Err(err) if self.failure_policy.is_soft() => {
                error!(error = %err, "Error analyzing keypoints; returning basic analysis");
                Ok(Self::unavailable())
            }
            Err(err) => Err(err),
        }
    }

    /// Analyze keypoints, surfacing every failure
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an absent keypoint, or `InvalidInput`
    /// when a knee angle is undefined because two keypoints coincide
    pub fn try_analyze(
        &self,
        keypoints: &PoseKeypoints,
        frame: FrameSize,
    ) -> AppResult<FormAnalysis> {
        let skeleton = Skeleton::resolve(keypoints)?;
        let width = f64::from(frame.width);
        let height = f64::from(frame.height);

        let level_tolerance = height * self.config.level_tolerance_ratio;
        let shoulders_level =
            offset(skeleton.right_shoulder.y, skeleton.left_shoulder.y).abs() < level_tolerance;
        let hips_level = offset(skeleton.right_hip.y, skeleton.left_hip.y).abs() < level_tolerance;

        let spine_angle = skeleton.spine_angle();
        let spine_vertical = spine_angle < self.config.spine_vertical_max_degrees;

        let knee_tolerance = width * self.config.knee_ankle_tolerance_ratio;
        let knees_over_ankles = offset(skeleton.right_knee.x, skeleton.right_ankle.x).abs()
            < knee_tolerance
            && offset(skeleton.left_knee.x, skeleton.left_ankle.x).abs() < knee_tolerance;

        let right_knee = joint_angle(skeleton.right_hip, skeleton.right_knee, skeleton.right_ankle)
            .ok_or_else(|| AppError::invalid_input("Right knee angle is undefined"))?;
        let left_knee = joint_angle(skeleton.left_hip, skeleton.left_knee, skeleton.left_ankle)
            .ok_or_else(|| AppError::invalid_input("Left knee angle is undefined"))?;

        let mut analysis = FormAnalysis::new();

        if spine_vertical {
            analysis.push(POSTURE, "Good vertical spine alignment");
        } else {
            analysis.push(
                POSTURE,
                format!(
                    "Spine angle is {spine_angle:.1}° from vertical - consider improving posture"
                ),
            );
        }

        if shoulders_level {
            analysis.push(ALIGNMENT, "Good shoulder alignment");
        } else {
            analysis.push(ALIGNMENT, "Shoulders are not level - check for imbalances");
        }
        if hips_level {
            analysis.push(ALIGNMENT, "Good hip alignment");
        } else {
            analysis.push(ALIGNMENT, "Hips are not level - check for imbalances");
        }

        if knees_over_ankles {
            analysis.push(BALANCE, "Good knee alignment over ankles");
        } else {
            analysis.push(
                BALANCE,
                "Knees not properly aligned with ankles - may affect stability",
            );
        }

        analysis.push(JOINT_ANGLES, format!("Right knee angle: {right_knee:.1}°"));
        analysis.push(JOINT_ANGLES, format!("Left knee angle: {left_knee:.1}°"));

        analysis.push(POSTURE, "Maintain head position in line with spine");
        analysis.push(BALANCE, "Weight distribution appears centered");

        debug!(
            spine_angle,
            shoulders_level, hips_level, knees_over_ankles, "Analyzed form keypoints"
        );
        Ok(analysis)
    }

    /// Fixed analysis returned when keypoints cannot be analyzed
    #[must_use]
    pub fn unavailable() -> FormAnalysis {
        [
            (POSTURE, vec!["Unable to analyze posture details"]),
            (ALIGNMENT, vec!["Unable to analyze alignment details"]),
            (BALANCE, vec!["Unable to analyze balance details"]),
            (JOINT_ANGLES, vec!["Unable to analyze joint angles"]),
        ]
        .into_iter()
        .collect()
    }
}
