// ABOUTME: Integration tests for keypoint form analysis
// ABOUTME: Covers the simulated pose, misaligned poses, joint geometry, and failure handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{loud_context, soft_context};
use pierre_coach::coach_core::constants::form::{ALIGNMENT, BALANCE, JOINT_ANGLES, POSTURE};
use pierre_coach::coach_core::errors::ErrorCode;
use pierre_coach::coach_core::models::{BodyPart, FrameSize, Point, PoseKeypoints};
use pierre_coach::coach_intelligence::form_analyzer::{angle_from_vertical, joint_angle};
use pierre_coach::coach_intelligence::{simulate_keypoints, FormAnalyzer};
use serde_json::{json, Map, Value};

const FRAME: FrameSize = FrameSize::new(640, 480);

fn moved(part: BodyPart, point: Point) -> PoseKeypoints {
    let mut keypoints = simulate_keypoints(FRAME);
    keypoints.insert(part, point);
    keypoints
}

#[test]
fn test_simulated_pose_is_well_aligned() {
    let context = soft_context();
    let keypoints = simulate_keypoints(FRAME);
    assert_eq!(keypoints.len(), BodyPart::ALL.len());
    assert_eq!(keypoints.get(BodyPart::Neck), Some(Point::new(320, 120)));

    let form = context.form_analyzer().analyze(&keypoints, FRAME).unwrap();

    assert_eq!(
        form.insights(POSTURE),
        [
            "Good vertical spine alignment",
            "Maintain head position in line with spine",
        ]
    );
    assert_eq!(
        form.insights(ALIGNMENT),
        ["Good shoulder alignment", "Good hip alignment"]
    );
    assert_eq!(
        form.insights(BALANCE),
        [
            "Good knee alignment over ankles",
            "Weight distribution appears centered",
        ]
    );
    assert_eq!(
        form.insights(JOINT_ANGLES),
        ["Right knee angle: 138.9°", "Left knee angle: 138.9°"]
    );
}

#[test]
fn test_simulation_scales_with_frame() {
    let small = simulate_keypoints(FrameSize::new(320, 240));
    assert_eq!(small.get(BodyPart::Neck), Some(Point::new(160, 60)));
    assert_eq!(small.get(BodyPart::RightAnkle), Some(Point::new(107, 210)));
}

#[test]
fn test_uneven_shoulders_are_reported() {
    let context = soft_context();
    let keypoints = moved(BodyPart::LeftShoulder, Point::new(400, 200));
    let form = context.form_analyzer().analyze(&keypoints, FRAME).unwrap();

    assert_eq!(
        form.insights(ALIGNMENT),
        [
            "Shoulders are not level - check for imbalances",
            "Good hip alignment",
        ]
    );
}

#[test]
fn test_leaning_spine_reports_angle() {
    let context = soft_context();
    // Neck 100px right of the hip midpoint, 200px above it
    let keypoints = moved(BodyPart::Neck, Point::new(420, 120));
    let form = context.form_analyzer().analyze(&keypoints, FRAME).unwrap();

    assert_eq!(
        form.insights(POSTURE)[0],
        "Spine angle is 26.6° from vertical - consider improving posture"
    );
}

#[test]
fn test_knees_drifting_past_ankles() {
    let context = soft_context();
    let keypoints = moved(BodyPart::RightKnee, Point::new(320, 400));
    let form = context.form_analyzer().analyze(&keypoints, FRAME).unwrap();

    assert_eq!(
        form.insights(BALANCE)[0],
        "Knees not properly aligned with ankles - may affect stability"
    );
}

#[test]
fn test_missing_keypoint_follows_failure_policy() {
    let mut keypoints = PoseKeypoints::new();
    keypoints.insert(BodyPart::Neck, Point::new(320, 120));

    let soft = soft_context();
    let form = soft.form_analyzer().analyze(&keypoints, FRAME).unwrap();
    assert_eq!(form, FormAnalyzer::unavailable());
    assert_eq!(form.insights(POSTURE), ["Unable to analyze posture details"]);
    assert_eq!(form.insights(JOINT_ANGLES), ["Unable to analyze joint angles"]);

    let loud = loud_context();
    let error = loud.form_analyzer().analyze(&keypoints, FRAME).unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
}

#[test]
fn test_coincident_joint_is_invalid() {
    let hip = simulate_keypoints(FRAME).get(BodyPart::RightHip).unwrap();
    let keypoints = moved(BodyPart::RightKnee, hip);

    let loud = loud_context();
    let error = loud
        .form_analyzer()
        .try_analyze(&keypoints, FRAME)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let soft = soft_context();
    assert_eq!(
        soft.form_analyzer().analyze(&keypoints, FRAME).unwrap(),
        FormAnalyzer::unavailable()
    );
}

#[test]
fn test_extreme_coordinates_do_not_overflow() {
    let mut keypoints = moved(BodyPart::RightHip, Point::new(i64::MAX, 320));
    keypoints.insert(BodyPart::LeftHip, Point::new(i64::MAX, 320));
    keypoints.insert(BodyPart::RightAnkle, Point::new(i64::MIN, 420));

    let form = loud_context()
        .form_analyzer()
        .analyze(&keypoints, FRAME)
        .unwrap();

    assert!(form.insights(POSTURE)[0].starts_with("Spine angle is 90.0°"));
    assert_eq!(
        form.insights(BALANCE)[0],
        "Knees not properly aligned with ankles - may affect stability"
    );
    assert_eq!(form.insights(JOINT_ANGLES).len(), 2);
}

#[test]
fn test_joint_geometry() {
    let right = joint_angle(Point::new(0, 10), Point::new(0, 0), Point::new(10, 0)).unwrap();
    assert!((right - 90.0).abs() < 1e-9);

    let straight = joint_angle(Point::new(0, -10), Point::new(0, 0), Point::new(0, 10)).unwrap();
    assert!((straight - 180.0).abs() < 1e-9);

    assert!(joint_angle(Point::new(5, 5), Point::new(5, 5), Point::new(0, 0)).is_none());

    let upward = angle_from_vertical(Point::new(0, 100), Point::new(0, 0));
    assert!((upward - 180.0).abs() < 1e-9);
}

#[test]
fn test_keypoints_deserialize_from_snake_case_json() {
    let mut object = Map::new();
    for part in BodyPart::ALL {
        let point = simulate_keypoints(FRAME).get(part).unwrap();
        object.insert(
            serde_json::to_value(part)
                .unwrap()
                .as_str()
                .unwrap()
                .to_owned(),
            json!({ "x": point.x, "y": point.y }),
        );
    }
    assert!(object.contains_key("right_shoulder"));

    let keypoints: PoseKeypoints =
        serde_json::from_value(Value::Object(object)).unwrap();
    assert_eq!(keypoints, simulate_keypoints(FRAME));
}
