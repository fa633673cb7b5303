// Pose Overlay 🚀 AGPL-3.0 License

//! Integration tests for the overlay pipeline

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pose_overlay::visualizer::skeleton::{LANDMARK_COUNT, reference_pose};
use pose_overlay::{
    CoordType, Landmark, LandmarkSet, OverlayConfig, OverlayPipeline, PoseRecorder, PoseResult,
    ResultSynchronizer,
};

fn frame_at(x: f32) -> PoseResult {
    PoseResult::single(LandmarkSet::from_landmarks(vec![
        Landmark::new(x, 0.5, 0.0).with_visibility(0.9),
    ]))
}

#[test]
fn test_producer_consumer_end_to_end() {
    let mut pipeline = OverlayPipeline::new(&OverlayConfig::new().with_alpha(0.3));
    let publisher = pipeline.publisher();

    let producer = thread::spawn(move || {
        for i in 0..200 {
            publisher.publish(&frame_at(i as f32 / 200.0));
            thread::sleep(Duration::from_micros(50));
        }
    });

    let mut updates = 0;
    let mut idle = 0;
    while !producer.is_finished() {
        if pipeline.tick() {
            updates += 1;
            let pose = pipeline.current().poses[0].as_ref().unwrap();
            let x = pose.get(0).unwrap().x;
            // Smoothed output stays within the published range
            assert!((0.0..1.0).contains(&x));
        } else {
            idle += 1;
        }
        thread::sleep(Duration::from_micros(80));
    }
    producer.join().unwrap();

    // Drain whatever the producer left behind after its final publish
    if pipeline.tick() {
        updates += 1;
    } else {
        idle += 1;
    }

    assert!(updates > 0);
    assert_eq!(pipeline.stats().updated_ticks, updates);
    assert_eq!(pipeline.stats().idle_ticks, idle);
}

#[test]
fn test_slow_consumer_sees_only_latest() {
    let sync = Arc::new(ResultSynchronizer::new());
    let producer_sync = Arc::clone(&sync);

    let producer = thread::spawn(move || {
        for i in 0..100 {
            producer_sync.publish(&frame_at(i as f32));
        }
    });
    producer.join().unwrap();

    // Consumer wakes up after a burst of publishes: exactly the last wins
    let mut held = PoseResult::new();
    assert!(sync.consume_if_stale(&mut held));
    let x = held.poses[0].as_ref().unwrap().get(0).unwrap().x;
    assert!((x - 99.0).abs() < f32::EPSILON);
    assert!(!sync.consume_if_stale(&mut held));
}

#[test]
fn test_pipeline_output_records_and_round_trips() {
    let mut pipeline = OverlayPipeline::new(&OverlayConfig::new().with_alpha(1.0));
    let publisher = pipeline.publisher();
    let mut recorder = PoseRecorder::new();

    for i in 0..5 {
        publisher.publish(&PoseResult::single(reference_pose()));
        assert!(pipeline.tick());
        if let Some(pose) = pipeline.current().poses[0].as_ref() {
            recorder.record(i as f64 / 30.0, CoordType::Normalized, pose);
        }
    }

    let dir = std::env::temp_dir().join("pose_overlay_pipeline_test");
    let path = dir.join("session.csv");
    recorder.save_csv(&path).unwrap();

    let frames = pose_overlay::export::read_csv(&path).unwrap();
    assert_eq!(frames.len(), 5);
    for frame in &frames {
        assert_eq!(frame.landmarks.len(), LANDMARK_COUNT);
        assert_eq!(frame.landmarks.get(0).unwrap().name.as_deref(), Some("nose"));
    }

    std::fs::remove_dir_all(&dir).ok();
}
