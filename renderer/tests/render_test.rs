use glam::Vec3;
use rocket_renderer::{Camera, RenderError, Renderer, Rgb, Transform, VoxelGrid};
use scene_types::{CanvasSettings, ObjectPose};

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);

fn single_voxel_grid() -> VoxelGrid {
    let mut grid = VoxelGrid::new(11, 11, 11).unwrap();
    grid.set(5, 5, 5, RED);
    grid
}

#[test]
fn construction_rejects_bad_parameters() {
    assert!(matches!(
        Renderer::new(0, 480, 50.0),
        Err(RenderError::InvalidImageDimensions { .. })
    ));
    assert!(matches!(
        Renderer::new(640, 0, 50.0),
        Err(RenderError::InvalidImageDimensions { .. })
    ));
    assert!(matches!(
        Renderer::new(640, 480, 0.0),
        Err(RenderError::InvalidFieldOfView { .. })
    ));
    assert!(matches!(
        Renderer::new(640, 480, 180.0),
        Err(RenderError::InvalidFieldOfView { .. })
    ));
    assert!(matches!(
        Renderer::new(640, 480, 250.0),
        Err(RenderError::InvalidFieldOfView { .. })
    ));
    assert!(Renderer::from_settings(&CanvasSettings::default()).is_ok());
}

#[test]
fn single_voxel_projects_to_the_image_center() {
    let grid = single_voxel_grid();
    let centroid = grid.centroid();
    assert_eq!(centroid, Vec3::new(5.0, 5.0, 5.0));

    let camera = Camera::look_at(Vec3::new(5.0, 5.0, -95.0), Vec3::new(5.0, 5.0, 5.0));
    let renderer = Renderer::new(640, 480, 50.0).unwrap();
    let image = renderer.render(&grid, &camera, &Transform::new(), centroid);

    assert_eq!(image.get(320, 240), RED);
    assert_eq!(image.get(0, 0), Rgb::BLACK);

    // At depth 100 the splat is 5 pixels wide; red must stay confined to
    // that square and everything else stays background.
    for y in 0..480 {
        for x in 0..640 {
            let px = image.get(x, y);
            if px != Rgb::BLACK {
                assert_eq!(px, RED);
                assert!(
                    (318..=322).contains(&x) && (238..=242).contains(&y),
                    "stray pixel at {x},{y}"
                );
            }
        }
    }
}

#[test]
fn near_plane_cull_discards_voxels_at_or_behind_the_camera() {
    let grid = single_voxel_grid();
    let renderer = Renderer::new(64, 64, 60.0).unwrap();

    // Depth exactly at the near plane.
    let camera = Camera::look_at(Vec3::new(5.0, 5.0, 4.0), Vec3::new(5.0, 5.0, 5.0));
    let image = renderer.render(&grid, &camera, &Transform::new(), grid.centroid());
    assert!(image.pixels().iter().all(|&p| p == Rgb::BLACK));

    // Strictly behind the camera.
    let camera = Camera::look_at(Vec3::new(5.0, 5.0, 20.0), Vec3::new(5.0, 5.0, 40.0));
    let image = renderer.render(&grid, &camera, &Transform::new(), grid.centroid());
    assert!(image.pixels().iter().all(|&p| p == Rgb::BLACK));
}

#[test]
fn closer_voxel_wins_regardless_of_processing_order() {
    let camera = Camera::look_at(Vec3::new(5.0, 5.0, -100.0), Vec3::new(5.0, 5.0, 5.0));
    let renderer = Renderer::new(640, 480, 50.0).unwrap();
    let centroid = Vec3::new(5.0, 5.0, 5.0);

    // Closer voxel is reached first by grid iteration.
    let mut grid = VoxelGrid::new(11, 11, 11).unwrap();
    grid.set(5, 5, 2, RED);
    grid.set(5, 5, 8, GREEN);
    let image = renderer.render(&grid, &camera, &Transform::new(), centroid);
    assert_eq!(image.get(320, 240), RED);

    // Closer voxel is reached last; it must still win.
    let mut grid = VoxelGrid::new(11, 11, 11).unwrap();
    grid.set(5, 5, 8, RED);
    grid.set(5, 5, 2, GREEN);
    let image = renderer.render(&grid, &camera, &Transform::new(), centroid);
    assert_eq!(image.get(320, 240), GREEN);
}

#[test]
fn image_dimensions_match_the_renderer() {
    let renderer = Renderer::new(120, 90, 50.0).unwrap();
    let grid = single_voxel_grid();
    let camera = Camera::look_at(Vec3::new(5.0, 5.0, -95.0), Vec3::new(5.0, 5.0, 5.0));
    let image = renderer.render(&grid, &camera, &Transform::new(), grid.centroid());
    assert_eq!((image.width(), image.height()), (120, 90));
    assert_eq!(image.pixels().len(), 120 * 90);
}

#[test]
fn render_sequence_yields_one_frame_per_pose() {
    let grid = single_voxel_grid();
    let centroid = grid.centroid();
    let camera = Camera::look_at(Vec3::new(5.0, 5.0, -95.0), Vec3::new(5.0, 5.0, 5.0));
    let renderer = Renderer::new(64, 48, 50.0).unwrap();

    // Poses as the configuration layer would author them.
    let poses: Vec<ObjectPose> = serde_json::from_str(
        r#"[
            {},
            {"position": [2.0, 0.0, 0.0], "rotation": {"yaw": 90.0}}
        ]"#,
    )
    .unwrap();
    let frames = renderer.render_sequence(&grid, &camera, &poses, centroid);
    assert_eq!(frames.len(), 2);

    // A sequence frame is identical to a direct render of the same pose.
    let direct = renderer.render(&grid, &camera, &Transform::from(&poses[0]), centroid);
    assert_eq!(frames[0], direct);
}
