//! End-to-end loading of the fixture scenes.

use glam::Vec3;
use turntable_io::{read_file, LoadError, ReadOptions, SceneData};

const SHOWROOM_JSON: &[u8] = include_bytes!("fixtures/showroom.json");
const SHOWROOM_GLTF: &[u8] = include_bytes!("fixtures/showroom.gltf");
const EMPTY_ROOM: &[u8] = include_bytes!("fixtures/empty_room.json");

fn load(name: &str, data: &[u8]) -> SceneData {
    let graph = read_file(name, data, &ReadOptions::default()).unwrap();
    SceneData::new(graph, 16.0 / 9.0)
}

fn labels(scene: &SceneData) -> Vec<String> {
    scene
        .cameras()
        .iter()
        .enumerate()
        .map(|(i, camera)| camera.label(i + 1))
        .collect()
}

#[test]
fn object_json_cameras_in_document_order() {
    let scene = load("showroom.json", SHOWROOM_JSON);

    assert_eq!(scene.graph().node_count(), 8);
    insta::assert_snapshot!(serde_json::to_string_pretty(&labels(&scene)).unwrap(), @r###"
    [
      "Camera 1 (Front)",
      "Camera 2",
      "Camera 3 (Top)"
    ]
    "###);
    assert_eq!(scene.active_index(), 0);
}

#[test]
fn object_json_camera_poses_are_in_world_space() {
    let scene = load("showroom.json", SHOWROOM_JSON);
    let cameras = scene.cameras();

    assert_eq!(cameras[0].position, Vec3::new(0.0, 1.5, 6.0));
    assert_eq!(cameras[0].params.fov_degrees(), Some(35.0));

    // Nested under a rig turned a quarter around Y.
    assert!(cameras[1].position.abs_diff_eq(Vec3::new(8.0, 2.0, 0.0), 1e-4));
    assert_eq!(cameras[1].params.fov_degrees(), Some(60.0));
    assert_eq!(cameras[1].params.far, 2000.0);

    let top = &cameras[2];
    assert_eq!(top.params.fov_degrees(), None);
    let forward = top.rotation * Vec3::NEG_Z;
    assert!(forward.abs_diff_eq(Vec3::NEG_Y, 1e-5));
}

#[test]
fn gltf_cameras_follow_scene_order() {
    let scene = load("showroom.gltf", SHOWROOM_GLTF);

    assert_eq!(labels(&scene), vec!["Camera 1 (Side)", "Camera 2 (Front)"]);

    let side = &scene.cameras()[0];
    assert!((side.params.fov_degrees().unwrap() - 60.0).abs() < 1e-3);
    assert_eq!(side.params.far, 500.0);
    assert!(side.position.abs_diff_eq(Vec3::new(8.0, 2.0, 0.0), 1e-4));

    let front = &scene.cameras()[1];
    assert_eq!(front.params.aspect(), Some(1.7777778));
    assert_eq!(front.params.far, 2000.0);
}

#[test]
fn scene_without_cameras_gets_the_default_view() {
    let scene = load("empty_room.json", EMPTY_ROOM);

    assert_eq!(scene.cameras().len(), 1);
    let camera = scene.active_camera();
    assert!(camera.is_synthesized());
    assert_eq!(camera.position, Vec3::splat(5.0));
    assert_eq!(camera.params.aspect(), Some(16.0 / 9.0));
}

#[test]
fn extension_picks_the_reader() {
    // The same bytes under an unknown extension are never decoded.
    let err = read_file("showroom.fbx", SHOWROOM_JSON, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Unsupported(_)));

    // A glTF document named .json goes to the object reader, which rejects it.
    let err = read_file("showroom.json", SHOWROOM_GLTF, &ReadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn gltf_singular_matrix_parent_gives_finite_camera_pose() {
    let gltf = br#"{
        "asset": {"version": "2.0"},
        "scenes": [{"nodes": [0]}],
        "nodes": [
            {
                "name": "Flattened",
                "children": [1],
                "matrix": [0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 2, 3, 1]
            },
            {"name": "Inside", "camera": 0, "translation": [0, 0, 5]}
        ],
        "cameras": [{"type": "perspective", "perspective": {"yfov": 0.8, "znear": 0.1}}]
    }"#;
    let scene = load("flattened.gltf", gltf);

    let (_, flattened, _) = scene.graph().traverse().nth(1).unwrap();
    assert!(flattened.transform.rotation.is_finite());
    assert_eq!(flattened.transform.translation, Vec3::new(1.0, 2.0, 3.0));

    let camera = scene.active_camera();
    assert!(camera.position.is_finite());
    assert!(camera.rotation.is_finite());
    assert_eq!(camera.position, Vec3::new(1.0, 2.0, 8.0));
}
