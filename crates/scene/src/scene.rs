use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use skyframe_camera::{OrbitCamera, Projection, Viewport};
use skyframe_common::{Command, Pose, Step};
use skyframe_input::{Binding, DragTracker, InputEvent, Keymap, Target};

use crate::body::{Body, JointAxis, Part};
use crate::frame::{DrawItem, DrawKind, Frame, View};
use crate::rig::CameraRig;

/// Errors from building a scene or validating bindings against it.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("no body with index {0}")]
    UnknownBody(usize),
    #[error("no camera with index {0}")]
    UnknownCamera(usize),
    #[error("body {body} has no part with index {part}")]
    UnknownPart { body: usize, part: usize },
    #[error("part {part:?} names parent {parent}, which is not attached before it")]
    InvalidParent { part: String, parent: usize },
}

/// How the window is divided between cameras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// The whole window shows the view camera.
    #[default]
    Single,
    /// Left half shows the view camera, right half always shows `right`.
    SideBySide { right: usize },
}

/// Bodies, camera slots and the interaction state that drives them.
///
/// The scene is mutated only through explicit operations
/// ([`Scene::handle_event`], [`Scene::apply_binding`], ...) and read once per
/// redraw through [`Scene::frame`].
#[derive(Debug, Clone)]
pub struct Scene {
    bodies: Vec<Body>,
    cameras: Vec<CameraRig>,
    layout: Layout,
    view_camera: usize,
    control_camera: usize,
    step: Step,
    window: Viewport,
    projection: Projection,
    drag: DragTracker,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Projection::default())
    }
}

impl Scene {
    /// An empty scene with an 800x600 window.
    pub fn new(projection: Projection) -> Self {
        Self {
            bodies: Vec::new(),
            cameras: Vec::new(),
            layout: Layout::Single,
            view_camera: 0,
            control_camera: 0,
            step: Step::default(),
            window: Viewport::default(),
            projection,
            drag: DragTracker::new(),
        }
    }

    /// The matrix exercise: one plane, a key-driven camera on the left and a
    /// fixed top-down camera on the right.
    pub fn dual_view() -> Self {
        let mut scene = Self::new(Projection::new(60.0, 0.1, 100.0));
        scene.add_body(Body::new(
            "plane",
            Pose::from_position(Vec3::new(1.0, 0.0, 4.0)),
        ));
        scene.push_camera(CameraRig::free(Pose::from_position(Vec3::new(
            2.0, 1.0, 15.0,
        ))));
        let top = scene.push_camera(CameraRig::fixed(Pose::new(
            Vec3::new(0.0, 15.0, 0.0),
            Quat::from_rotation_x(-90.0_f32.to_radians()),
        )));
        scene.layout = Layout::SideBySide { right: top };
        scene
    }

    /// The hierarchy exercise: an articulated plane, a second plane, and
    /// three orbit cameras (world-relative, and one riding each plane).
    pub fn hierarchy() -> Self {
        let mut scene = Self::new(Projection::new(90.0, 0.1, 1000.0));

        // Sub-part offsets are measured from the stabiliser mount point.
        let mount = Vec3::new(1.5, 0.0, 0.0);
        let mut plane = Body::new("plane-1", Pose::from_position(Vec3::new(1.0, 0.0, 4.0)));
        let parts = [
            Part::new("turret", mount + Vec3::new(-1.5, -1.3, 0.0), JointAxis::Y, 90.0),
            Part::new("gun", Vec3::new(0.0, -0.5, 0.0), JointAxis::Y, -90.0).with_parent(0),
            Part::new("stabilizer-left", mount + Vec3::new(1.3, -0.9, -2.3), JointAxis::X, 90.0)
                .with_limits(55.0, 125.0),
            Part::new("stabilizer-right", mount + Vec3::new(-4.3, -0.9, -2.3), JointAxis::X, 90.0)
                .with_limits(55.0, 125.0),
        ];
        for part in parts {
            // Parents are listed before children above.
            if let Err(e) = plane.add_part(part) {
                tracing::error!(error = %e, "hierarchy preset part rejected");
            }
        }
        let plane_1 = scene.add_body(plane);
        let plane_2 = scene.add_body(Body::new("plane-2", Pose::IDENTITY));

        scene.push_camera(CameraRig::orbit(OrbitCamera::new(15.0, -45.0, 20.0)));
        scene.push_camera(CameraRig::anchored_orbit(
            OrbitCamera::new(15.0, -45.0, 20.0),
            plane_1,
        ));
        scene.push_camera(CameraRig::anchored_orbit(
            OrbitCamera::new(-15.0, -45.0, 20.0),
            plane_2,
        ));
        scene
    }

    pub fn add_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Add a camera slot. Anchored orbits must name an existing body.
    pub fn add_camera(&mut self, rig: CameraRig) -> Result<usize, SceneError> {
        if let Some(anchor) = rig.anchor() {
            if anchor >= self.bodies.len() {
                return Err(SceneError::UnknownBody(anchor));
            }
        }
        Ok(self.push_camera(rig))
    }

    fn push_camera(&mut self, rig: CameraRig) -> usize {
        self.cameras.push(rig);
        self.cameras.len() - 1
    }

    pub fn set_layout(&mut self, layout: Layout) -> Result<(), SceneError> {
        if let Layout::SideBySide { right } = layout {
            if right >= self.cameras.len() {
                return Err(SceneError::UnknownCamera(right));
            }
        }
        self.layout = layout;
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn cameras(&self) -> &[CameraRig] {
        &self.cameras
    }

    pub fn camera(&self, index: usize) -> Option<&CameraRig> {
        self.cameras.get(index)
    }

    pub fn view_camera(&self) -> usize {
        self.view_camera
    }

    pub fn control_camera(&self) -> usize {
        self.control_camera
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub fn window(&self) -> Viewport {
        self.window
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Replace the distance floor of every orbit camera.
    pub fn set_min_distance(&mut self, min_distance: f32) {
        for rig in &mut self.cameras {
            if let Some(orbit) = rig.orbit_mut() {
                *orbit = orbit.with_min_distance(min_distance);
            }
        }
    }

    /// Record new window dimensions; read at the next [`Scene::frame`].
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window = Viewport::full(width, height);
        tracing::debug!(width, height, "window resized");
    }

    /// Check that a binding only names things that exist in this scene.
    pub fn validate_binding(&self, binding: &Binding) -> Result<(), SceneError> {
        match *binding {
            Binding::Drive {
                target: Target::Body(i),
                ..
            } if i >= self.bodies.len() => Err(SceneError::UnknownBody(i)),
            Binding::Drive {
                target: Target::Camera(i),
                ..
            } if i >= self.cameras.len() => Err(SceneError::UnknownCamera(i)),
            Binding::Articulate { body, part, .. } => {
                let b = self.bodies.get(body).ok_or(SceneError::UnknownBody(body))?;
                b.part(part)
                    .map(|_| ())
                    .ok_or(SceneError::UnknownPart { body, part })
            }
            _ => Ok(()),
        }
    }

    /// Feed one window event. Returns whether a redraw is needed.
    pub fn handle_event(&mut self, keymap: &Keymap, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => match keymap.lookup(key) {
                Some(binding) => self.apply_binding(binding),
                None => {
                    tracing::trace!(?key, "unbound key ignored");
                    false
                }
            },
            InputEvent::Button {
                button,
                pressed,
                x,
                y,
                modifiers,
            } => {
                self.drag.button(button, pressed, x, y, modifiers);
                false
            }
            InputEvent::Motion { x, y } => {
                let Some(drag) = self.drag.motion(x, y) else {
                    return false;
                };
                match self
                    .cameras
                    .get_mut(self.control_camera)
                    .and_then(CameraRig::orbit_mut)
                {
                    Some(orbit) => orbit.on_drag(&drag),
                    None => false,
                }
            }
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                true
            }
        }
    }

    /// Apply one binding. Bindings naming missing bodies, parts or cameras are
    /// ignored. Returns whether anything was applied.
    pub fn apply_binding(&mut self, binding: Binding) -> bool {
        if let Err(e) = self.validate_binding(&binding) {
            tracing::warn!(?binding, error = %e, "binding ignored");
            return false;
        }
        let step = self.step;
        match binding {
            Binding::Drive {
                target: Target::Body(i),
                command,
            } => {
                let body = &mut self.bodies[i];
                body.pose.apply(command, step);
                tracing::debug!(body = %body.name, ?command, position = ?body.pose.position(), "body driven");
                command != Command::Noop
            }
            Binding::Drive {
                target: Target::Camera(i),
                command,
            } => {
                let applied = self.cameras[i].drive(command, step);
                tracing::debug!(camera = i, ?command, applied, "camera driven");
                applied
            }
            Binding::Articulate {
                body,
                part,
                direction,
            } => self.articulate(body, part, direction),
            Binding::CycleViewCamera => {
                if self.cameras.is_empty() {
                    return false;
                }
                self.view_camera = (self.view_camera + 1) % self.cameras.len();
                tracing::info!(camera = self.view_camera, "view camera");
                true
            }
            Binding::CycleControlCamera => {
                if self.cameras.is_empty() {
                    return false;
                }
                self.control_camera = (self.control_camera + 1) % self.cameras.len();
                tracing::info!(camera = self.control_camera, "control camera");
                true
            }
        }
    }

    /// Turn a part by one angular step in `direction`, clamped to its limits.
    pub fn articulate(&mut self, body: usize, part: usize, direction: i8) -> bool {
        let delta = f32::from(direction.signum()) * self.step.angular_degrees();
        let Some(p) = self.bodies.get_mut(body).and_then(|b| b.part_mut(part)) else {
            tracing::warn!(body, part, "no such part");
            return false;
        };
        let changed = p.rotate(delta);
        tracing::debug!(part = %p.name, angle = p.angle_degrees(), changed, "part articulated");
        changed
    }

    /// A camera's pose in world space.
    pub fn camera_pose(&self, camera: usize) -> Option<Pose> {
        match self.cameras.get(camera)? {
            CameraRig::Free { pose } | CameraRig::Fixed { pose } => Some(*pose),
            CameraRig::Orbit { orbit, anchor } => {
                let local = orbit.pose(Vec3::ZERO);
                match anchor {
                    Some(b) => Some(self.bodies.get(*b)?.pose.compose(&local)),
                    None => Some(local),
                }
            }
        }
    }

    /// World-to-camera matrix for a camera slot.
    ///
    /// Orbits compose the chain from the camera up to the world:
    /// `orbit_view · anchor⁻¹`.
    pub fn view_matrix(&self, camera: usize) -> Option<Mat4> {
        match self.cameras.get(camera)? {
            CameraRig::Free { pose } | CameraRig::Fixed { pose } => {
                Some(pose.inverse().to_matrix())
            }
            CameraRig::Orbit { orbit, anchor } => {
                let view = orbit.view_matrix(Vec3::ZERO);
                match anchor {
                    Some(b) => Some(view * self.bodies.get(*b)?.pose.inverse().to_matrix()),
                    None => Some(view),
                }
            }
        }
    }

    /// Compose every model-view matrix for the next redraw.
    pub fn frame(&self) -> Frame {
        let views = match self.layout {
            Layout::Single => vec![self.view(self.view_camera, self.window)],
            Layout::SideBySide { right } => {
                let (l, r) = self.window.split_horizontal();
                vec![self.view(self.view_camera, l), self.view(right, r)]
            }
        };
        Frame { views }
    }

    fn view(&self, camera: usize, viewport: Viewport) -> View {
        let view = self.view_matrix(camera).unwrap_or(Mat4::IDENTITY);
        let mut items = vec![DrawItem {
            label: "world".into(),
            kind: DrawKind::WorldFrame,
            model_view: view,
        }];

        for other in (0..self.cameras.len()).filter(|c| *c != camera) {
            if let Some(pose) = self.camera_pose(other) {
                items.push(DrawItem {
                    label: format!("camera-{other}"),
                    kind: DrawKind::CameraFrame,
                    model_view: view * pose.to_matrix(),
                });
            }
        }

        for body in &self.bodies {
            let body_mv = view * body.pose.to_matrix();
            items.push(DrawItem {
                label: body.name.clone(),
                kind: DrawKind::Body,
                model_view: body_mv,
            });
            for (part, m) in body.parts().iter().zip(body.part_matrices()) {
                items.push(DrawItem {
                    label: format!("{}/{}", body.name, part.name),
                    kind: DrawKind::Part,
                    model_view: body_mv * m,
                });
            }
        }

        View {
            camera,
            viewport,
            projection: self.projection.matrix(viewport.aspect()),
            view,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyframe_input::{Modifiers, PointerButton};

    const EPS: f32 = 1e-4;

    fn press(keymap: &Keymap, scene: &mut Scene, keys: &str) {
        for key in keys.chars() {
            scene.handle_event(keymap, InputEvent::Key(key));
        }
    }

    fn drag(scene: &mut Scene, button: PointerButton, modifiers: Modifiers, dx: i32, dy: i32) -> bool {
        let keymap = Keymap::new();
        scene.handle_event(
            &keymap,
            InputEvent::Button {
                button,
                pressed: true,
                x: 100,
                y: 100,
                modifiers,
            },
        );
        let redraw = scene.handle_event(
            &keymap,
            InputEvent::Motion {
                x: 100 + dx,
                y: 100 + dy,
            },
        );
        scene.handle_event(
            &keymap,
            InputEvent::Button {
                button,
                pressed: false,
                x: 100 + dx,
                y: 100 + dy,
                modifiers,
            },
        );
        redraw
    }

    fn orbit(scene: &Scene, camera: usize) -> OrbitCamera {
        match scene.camera(camera) {
            Some(CameraRig::Orbit { orbit, .. }) => *orbit,
            other => panic!("expected orbit rig, got {other:?}"),
        }
    }

    #[test]
    fn forward_key_moves_plane_along_local_z() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::hierarchy();
        assert!(scene.handle_event(&keymap, InputEvent::Key('p')));
        let pos = scene.body(0).unwrap().pose.position();
        assert!(pos.abs_diff_eq(Vec3::new(1.0, 0.0, 5.0), EPS));
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut scene = Scene::hierarchy();
        let before = scene.body(0).unwrap().pose;
        assert!(!scene.handle_event(&Keymap::hierarchy(), InputEvent::Key('!')));
        assert_eq!(scene.body(0).unwrap().pose, before);
    }

    #[test]
    fn out_of_range_binding_is_ignored() {
        let mut scene = Scene::hierarchy();
        assert!(!scene.apply_binding(Binding::drive_body(9, Command::TranslateForward)));
        assert!(!scene.apply_binding(Binding::drive_camera(9, Command::TranslateForward)));
        assert!(!scene.apply_binding(Binding::Articulate {
            body: 0,
            part: 42,
            direction: 1
        }));
    }

    #[test]
    fn yaw_then_turn_then_forward_follows_facing() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::hierarchy();
        // 18 yaw steps of 5° = 90°.
        press(&keymap, &mut scene, &"a".repeat(18));
        press(&keymap, &mut scene, "p");
        let pos = scene.body(0).unwrap().pose.position();
        assert!(pos.abs_diff_eq(Vec3::new(2.0, 0.0, 4.0), EPS));
    }

    #[test]
    fn stabilizer_clamps_at_limits() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::hierarchy();
        press(&keymap, &mut scene, &"r".repeat(20));
        let part = scene.body(0).unwrap().part(2).unwrap();
        assert_eq!(part.angle_degrees(), 125.0);
        press(&keymap, &mut scene, &"f".repeat(40));
        let part = scene.body(0).unwrap().part(2).unwrap();
        assert_eq!(part.angle_degrees(), 55.0);
    }

    #[test]
    fn camera_cycling_wraps() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::hierarchy();
        press(&keymap, &mut scene, "vvv");
        assert_eq!(scene.view_camera(), 0);
        press(&keymap, &mut scene, "bb");
        assert_eq!(scene.control_camera(), 2);
        assert_eq!(scene.view_camera(), 0);
    }

    #[test]
    fn shift_drag_changes_only_azimuth() {
        let mut scene = Scene::hierarchy();
        assert!(drag(&mut scene, PointerButton::Primary, Modifiers::shift(), 10, 0));
        let cam = orbit(&scene, 0);
        assert_eq!(cam.azimuth, 25.0);
        assert_eq!(cam.elevation, -45.0);
    }

    #[test]
    fn right_drag_changes_distance_of_control_camera_only() {
        let mut scene = Scene::hierarchy();
        scene.handle_event(&Keymap::hierarchy(), InputEvent::Key('b'));
        drag(&mut scene, PointerButton::Secondary, Modifiers::NONE, 5, -2);
        assert_eq!(orbit(&scene, 1).distance(), 25.0);
        assert_eq!(orbit(&scene, 0).distance(), 20.0);
    }

    #[test]
    fn motion_without_button_is_ignored() {
        let mut scene = Scene::hierarchy();
        let redraw = scene.handle_event(&Keymap::new(), InputEvent::Motion { x: 5, y: 5 });
        assert!(!redraw);
        assert_eq!(orbit(&scene, 0), OrbitCamera::new(15.0, -45.0, 20.0));
    }

    #[test]
    fn extreme_pointer_motion_does_not_panic() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::new();
        scene.handle_event(
            &keymap,
            InputEvent::Button {
                button: PointerButton::Secondary,
                pressed: true,
                x: -1,
                y: 0,
                modifiers: Modifiers::NONE,
            },
        );
        assert!(scene.handle_event(&keymap, InputEvent::Motion { x: i32::MAX, y: 0 }));
        assert!(orbit(&scene, 0).distance().is_finite());
    }

    #[test]
    fn one_pixel_wide_window_keeps_projections_finite() {
        let mut scene = Scene::dual_view();
        scene.handle_event(
            &Keymap::new(),
            InputEvent::Resize {
                width: 1,
                height: 600,
            },
        );
        for view in scene.frame().views {
            assert!(view.projection.is_finite(), "camera {}", view.camera);
        }
    }

    #[test]
    fn drag_on_free_camera_is_ignored() {
        let mut scene = Scene::dual_view();
        assert!(!drag(&mut scene, PointerButton::Primary, Modifiers::NONE, 10, 10));
    }

    #[test]
    fn view_matrix_is_inverse_of_camera_pose() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::hierarchy();
        press(&keymap, &mut scene, "ppaaweq");
        for cam in 0..scene.cameras().len() {
            let pose = scene.camera_pose(cam).unwrap();
            let view = scene.view_matrix(cam).unwrap();
            assert!(
                (view * pose.to_matrix()).abs_diff_eq(Mat4::IDENTITY, EPS),
                "camera {cam}"
            );
        }
    }

    #[test]
    fn anchored_orbit_follows_its_body() {
        let mut scene = Scene::hierarchy();
        let keymap = Keymap::hierarchy();
        let before = scene.camera_pose(1).unwrap().position();
        press(&keymap, &mut scene, "ppp");
        let after = scene.camera_pose(1).unwrap().position();
        assert!((after - before).abs_diff_eq(Vec3::new(0.0, 0.0, 3.0), EPS));
        // The world-relative camera does not move.
        let world_cam = scene.camera_pose(0).unwrap().position();
        assert!(world_cam.abs_diff_eq(OrbitCamera::new(15.0, -45.0, 20.0).eye(Vec3::ZERO), EPS));
    }

    #[test]
    fn free_camera_forward_key_moves_toward_scene() {
        let mut scene = Scene::dual_view();
        let keymap = Keymap::dual_view();
        press(&keymap, &mut scene, "uu");
        let pos = scene.camera_pose(0).unwrap().position();
        assert!(pos.abs_diff_eq(Vec3::new(2.0, 1.0, 13.0), EPS));
    }

    #[test]
    fn top_camera_looks_down() {
        let scene = Scene::dual_view();
        let pose = scene.camera_pose(1).unwrap();
        assert!(pose.transform_vector(Vec3::NEG_Z).abs_diff_eq(Vec3::NEG_Y, EPS));
        // The world origin lands 15 units in front of the camera.
        let origin = scene.view_matrix(1).unwrap().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -15.0), EPS));
    }

    #[test]
    fn frame_composes_camera_inverse_then_body() {
        let scene = Scene::dual_view();
        let frame = scene.frame();
        assert_eq!(frame.views.len(), 2);
        let left = &frame.views[0];
        let plane = left.item("plane").unwrap();
        let expected = scene.view_matrix(0).unwrap() * scene.body(0).unwrap().pose.to_matrix();
        assert!(plane.model_view.abs_diff_eq(expected, EPS));
        // Plane at (1,0,4) seen from a camera at (2,1,15).
        assert!(plane.view_origin().abs_diff_eq(Vec3::new(-1.0, -1.0, -11.0), EPS));
    }

    #[test]
    fn side_by_side_halves_the_window() {
        let frame = Scene::dual_view().frame();
        assert_eq!(frame.views[0].viewport.width, 400);
        assert_eq!(frame.views[1].viewport.x, 400);
        assert_eq!(frame.views[1].camera, 1);
    }

    #[test]
    fn frame_skips_own_camera_frame() {
        let frame = Scene::hierarchy().frame();
        let view = &frame.views[0];
        assert!(view.item("camera-0").is_none());
        assert!(view.item("camera-1").is_some());
        assert!(view.item("camera-2").is_some());
        assert!(view.item("plane-1/gun").is_some());
        // world + 2 cameras + 2 bodies + 4 parts
        assert_eq!(view.items.len(), 9);
    }

    #[test]
    fn part_items_chain_through_body() {
        let scene = Scene::hierarchy();
        let view = &scene.frame().views[0];
        let body = view.item("plane-1").unwrap().model_view;
        let turret = view.item("plane-1/turret").unwrap().model_view;
        let gun = view.item("plane-1/gun").unwrap().model_view;
        let parts = scene.body(0).unwrap().part_matrices();
        assert!(turret.abs_diff_eq(body * parts[0], EPS));
        assert!(gun.abs_diff_eq(turret * scene.body(0).unwrap().part(1).unwrap().local_matrix(), EPS));
    }

    #[test]
    fn resize_updates_viewport() {
        let mut scene = Scene::hierarchy();
        assert!(scene.handle_event(
            &Keymap::new(),
            InputEvent::Resize {
                width: 1024,
                height: 512
            }
        ));
        let frame = scene.frame();
        assert_eq!(frame.views[0].viewport, Viewport::full(1024, 512));
    }

    #[test]
    fn layout_must_name_existing_camera() {
        let mut scene = Scene::hierarchy();
        assert!(scene.set_layout(Layout::SideBySide { right: 7 }).is_err());
        assert!(scene.set_layout(Layout::SideBySide { right: 2 }).is_ok());
    }

    #[test]
    fn anchored_camera_needs_existing_body() {
        let mut scene = Scene::new(Projection::default());
        let err = scene
            .add_camera(CameraRig::anchored_orbit(OrbitCamera::default(), 0))
            .unwrap_err();
        assert!(matches!(err, SceneError::UnknownBody(0)));
    }

    #[test]
    fn empty_scene_still_frames() {
        let frame = Scene::default().frame();
        assert_eq!(frame.views.len(), 1);
        assert_eq!(frame.views[0].view, Mat4::IDENTITY);
    }

    #[test]
    fn min_distance_applies_to_every_orbit() {
        let mut scene = Scene::hierarchy();
        scene.set_min_distance(30.0);
        for cam in 0..3 {
            assert_eq!(orbit(&scene, cam).distance(), 30.0);
        }
    }
}
