//! Asset loaders for the environment map and the castle model.
//!
//! Both loads start together at startup. Each loader polls its handle once
//! per frame and, when the asset resolves, finishes its own setup and sends
//! exactly one `AssetLoadSignal`. The readiness gate in `simulation` decides
//! what happens next.

use bevy::asset::{LoadState, RecursiveDependencyLoadState, UntypedAssetId};
use bevy::gltf::Gltf;
use bevy::prelude::*;

use simulation::config::{MODEL_NAME, MODEL_OFFSET_Y, MODEL_SCALE};
use simulation::readiness::{AssetKind, AssetLoadError, AssetLoadSignal};

use crate::camera::SceneCamera;
use crate::environment::{equirect_to_cubemap, CUBEMAP_FACE_SIZE};

/// Brightness of the image based light, in cd/m².
pub const ENVIRONMENT_INTENSITY: f32 = 1500.0;

/// Marker for the spawned castle scene root.
#[derive(Component)]
pub struct CastleModel;

/// Handles for the two scene assets plus whether each has been reported.
#[derive(Resource, Default)]
pub struct SceneAssets {
    /// Equirectangular source. Dropped once the cubemap is built.
    pub environment_source: Option<Handle<Image>>,
    pub environment_cubemap: Option<Handle<Image>>,
    pub model: Option<Handle<Gltf>>,
    environment_reported: bool,
    model_reported: bool,
}

impl SceneAssets {
    pub fn is_reported(&self, kind: AssetKind) -> bool {
        match kind {
            AssetKind::EnvironmentMap => self.environment_reported,
            AssetKind::Model => self.model_reported,
        }
    }
}

/// Outcome of polling a handle for one frame.
#[derive(Debug, Clone, PartialEq)]
enum LoadPoll {
    Pending,
    Loaded,
    Failed(String),
}

/// Loaded means the asset and everything it depends on (the model's meshes,
/// materials and textures) are in memory.
fn poll_load(asset_server: &AssetServer, id: impl Into<UntypedAssetId>) -> LoadPoll {
    let id: UntypedAssetId = id.into();
    match asset_server.get_recursive_dependency_load_state(id) {
        Some(RecursiveDependencyLoadState::Loaded) => return LoadPoll::Loaded,
        Some(RecursiveDependencyLoadState::Failed(err)) => {
            return LoadPoll::Failed(err.to_string())
        }
        _ => {}
    }
    match asset_server.get_load_state(id) {
        Some(LoadState::Failed(err)) => LoadPoll::Failed(err.to_string()),
        _ => LoadPoll::Pending,
    }
}

/// Startup: kick off both loads. No ordering between them.
pub fn begin_scene_loads(asset_server: Res<AssetServer>, mut assets: ResMut<SceneAssets>) {
    for kind in AssetKind::ALL {
        info!("Loading {} '{}'", kind.label(), kind.path());
    }
    assets.environment_source = Some(asset_server.load(AssetKind::EnvironmentMap.path()));
    assets.model = Some(asset_server.load(AssetKind::Model.path()));
}

/// System: once the panorama is in, bake the cubemap, light the camera with
/// it and release the source image.
pub fn poll_environment_map(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut assets: ResMut<SceneAssets>,
    cameras: Query<Entity, With<SceneCamera>>,
    mut signals: EventWriter<AssetLoadSignal>,
) {
    let kind = AssetKind::EnvironmentMap;
    if assets.environment_reported {
        return;
    }
    let Some(source) = assets.environment_source.clone() else {
        return;
    };

    match poll_load(&asset_server, source.id()) {
        LoadPoll::Pending => {}
        LoadPoll::Failed(reason) => {
            assets.environment_reported = true;
            assets.environment_source = None;
            signals.send(AssetLoadSignal::Failed(AssetLoadError::new(kind, reason)));
        }
        LoadPoll::Loaded => {
            let Some(image) = images.get(&source) else {
                return;
            };
            let baked = equirect_to_cubemap(image, CUBEMAP_FACE_SIZE);
            images.remove(&source);
            assets.environment_source = None;
            assets.environment_reported = true;

            match baked {
                Ok(cubemap) => {
                    let cubemap = images.add(cubemap);
                    for camera in &cameras {
                        commands.entity(camera).insert(EnvironmentMapLight {
                            diffuse_map: cubemap.clone(),
                            specular_map: cubemap.clone(),
                            intensity: ENVIRONMENT_INTENSITY,
                            rotation: Quat::IDENTITY,
                        });
                    }
                    assets.environment_cubemap = Some(cubemap);
                    signals.send(AssetLoadSignal::Loaded(kind));
                }
                Err(err) => {
                    signals.send(AssetLoadSignal::Failed(AssetLoadError::new(
                        kind,
                        err.to_string(),
                    )));
                }
            }
        }
    }
}

/// The scene to show: the file's default scene, else its first one.
pub fn castle_scene(gltf: &Gltf) -> Option<Handle<Scene>> {
    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
}

pub fn castle_transform() -> Transform {
    Transform::from_xyz(0.0, MODEL_OFFSET_Y, 0.0).with_scale(Vec3::splat(MODEL_SCALE))
}

/// System: once the glTF and its dependencies are in, spawn the castle.
pub fn poll_model(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut assets: ResMut<SceneAssets>,
    mut signals: EventWriter<AssetLoadSignal>,
) {
    let kind = AssetKind::Model;
    if assets.model_reported {
        return;
    }
    let Some(handle) = assets.model.clone() else {
        return;
    };

    match poll_load(&asset_server, handle.id()) {
        LoadPoll::Pending => {}
        LoadPoll::Failed(reason) => {
            assets.model_reported = true;
            signals.send(AssetLoadSignal::Failed(AssetLoadError::new(kind, reason)));
        }
        LoadPoll::Loaded => {
            let Some(gltf) = gltfs.get(&handle) else {
                return;
            };
            assets.model_reported = true;

            let Some(scene) = castle_scene(gltf) else {
                signals.send(AssetLoadSignal::Failed(AssetLoadError::new(
                    kind,
                    "glTF file contains no scenes",
                )));
                return;
            };
            commands.spawn((
                SceneRoot(scene),
                castle_transform(),
                Name::new(MODEL_NAME),
                CastleModel,
            ));
            signals.send(AssetLoadSignal::Loaded(kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bevy::asset::io::memory::{Dir, MemoryAssetReader};
    use bevy::asset::io::{AssetSource, AssetSourceId, Reader};
    use bevy::asset::{AssetLoader, LoadContext};
    use bevy::gltf::GltfPlugin;
    use bevy::render::mesh::MeshPlugin;
    use bevy::render::render_asset::RenderAssetUsages;
    use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

    use super::*;

    const MAX_UPDATES: usize = 10_000;
    const SCENELESS_GLTF: &str = r#"{"asset":{"version":"2.0"}}"#;
    const ONE_NODE_GLTF: &str = r#"{
        "asset": {"version": "2.0"},
        "nodes": [{"name": "keep"}],
        "scene": 0,
        "scenes": [{"nodes": [0]}]
    }"#;

    /// Stands in for the EXR loader. A file reading `float` becomes an RGBA32F
    /// panorama, anything else an 8-bit one.
    struct PanoramaLoader;

    impl AssetLoader for PanoramaLoader {
        type Asset = Image;
        type Settings = ();
        type Error = std::io::Error;

        async fn load(
            &self,
            reader: &mut dyn Reader,
            _settings: &(),
            _load_context: &mut LoadContext<'_>,
        ) -> Result<Image, Self::Error> {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            let size = Extent3d {
                width: 4,
                height: 2,
                depth_or_array_layers: 1,
            };
            let image = if bytes == b"float" {
                let texel: Vec<u8> = [0.5_f32, 0.5, 0.5, 1.0]
                    .iter()
                    .flat_map(|c| c.to_le_bytes())
                    .collect();
                Image::new(
                    size,
                    TextureDimension::D2,
                    texel.repeat(8),
                    TextureFormat::Rgba32Float,
                    RenderAssetUsages::default(),
                )
            } else {
                Image::new(
                    size,
                    TextureDimension::D2,
                    vec![128; 4 * 8],
                    TextureFormat::Rgba8UnormSrgb,
                    RenderAssetUsages::default(),
                )
            };
            Ok(image)
        }

        fn extensions(&self) -> &[&str] {
            &["exr"]
        }
    }

    #[derive(Resource, Default)]
    struct Received(Vec<AssetLoadSignal>);

    fn collect_signals(mut signals: EventReader<AssetLoadSignal>, mut received: ResMut<Received>) {
        received.0.extend(signals.read().cloned());
    }

    /// Loader app over an in-memory asset root holding `files`.
    fn loader_app(files: &[(&str, &[u8])]) -> App {
        let dir = Dir::default();
        for (path, bytes) in files {
            dir.insert_asset(Path::new(path), bytes.to_vec());
        }
        let reader = MemoryAssetReader { root: dir };

        let mut app = App::new();
        app.register_asset_source(
            AssetSourceId::Default,
            AssetSource::build().with_reader(move || Box::new(reader.clone())),
        )
        .add_plugins((
            MinimalPlugins,
            AssetPlugin::default(),
            MeshPlugin,
            GltfPlugin::default(),
        ))
        .init_asset::<Image>()
        .init_asset::<Scene>()
        .register_asset_loader(PanoramaLoader)
        .add_event::<AssetLoadSignal>()
        .init_resource::<SceneAssets>()
        .init_resource::<Received>()
        .add_systems(Startup, begin_scene_loads)
        .add_systems(
            Update,
            ((poll_environment_map, poll_model), collect_signals).chain(),
        );
        app.world_mut().spawn(SceneCamera);
        app.finish();
        app.cleanup();
        app
    }

    /// Update until both loaders have reported, then a few more frames.
    fn run_until_reported(app: &mut App) {
        for _ in 0..MAX_UPDATES {
            app.update();
            let assets = app.world().resource::<SceneAssets>();
            if AssetKind::ALL.iter().all(|&kind| assets.is_reported(kind)) {
                for _ in 0..5 {
                    app.update();
                }
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        panic!("loaders never reported");
    }

    fn failures(app: &App, kind: AssetKind) -> Vec<AssetLoadError> {
        app.world()
            .resource::<Received>()
            .0
            .iter()
            .filter_map(|signal| match signal {
                AssetLoadSignal::Failed(err) if err.kind == kind => Some(err.clone()),
                _ => None,
            })
            .collect()
    }

    fn successes(app: &App, kind: AssetKind) -> usize {
        app.world()
            .resource::<Received>()
            .0
            .iter()
            .filter(|signal| matches!(signal, AssetLoadSignal::Loaded(k) if *k == kind))
            .count()
    }

    #[test]
    fn test_castle_sits_below_origin_at_scale() {
        let t = castle_transform();
        assert_eq!(t.translation, Vec3::new(0.0, -200.0, 0.0));
        assert_eq!(t.scale, Vec3::splat(50.0));
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_nothing_reported_before_loading() {
        let assets = SceneAssets::default();
        for kind in AssetKind::ALL {
            assert!(!assets.is_reported(kind));
        }
        assert!(assets.environment_cubemap.is_none());
    }

    #[test]
    fn test_missing_files_fail_once_each() {
        let mut app = loader_app(&[]);
        run_until_reported(&mut app);

        for kind in AssetKind::ALL {
            let failed = failures(&app, kind);
            assert_eq!(failed.len(), 1, "{kind:?}: {failed:?}");
            assert_eq!(failed[0].path, kind.path());
            assert_eq!(successes(&app, kind), 0);
        }
        assert_eq!(app.world().resource::<Received>().0.len(), 2);
    }

    #[test]
    fn test_non_float_panorama_and_sceneless_model_fail() {
        let mut app = loader_app(&[
            (AssetKind::EnvironmentMap.path(), b"rgba8".as_slice()),
            (AssetKind::Model.path(), SCENELESS_GLTF.as_bytes()),
        ]);
        run_until_reported(&mut app);

        let environment = failures(&app, AssetKind::EnvironmentMap);
        assert_eq!(environment.len(), 1);
        assert!(
            environment[0]
                .reason
                .contains("unsupported environment map format"),
            "{}",
            environment[0].reason
        );
        let model = failures(&app, AssetKind::Model);
        assert_eq!(model.len(), 1);
        assert!(model[0].reason.contains("no scenes"), "{}", model[0].reason);

        assert_eq!(successes(&app, AssetKind::EnvironmentMap), 0);
        assert_eq!(successes(&app, AssetKind::Model), 0);
        let world = app.world_mut();
        assert_eq!(world.query::<&CastleModel>().iter(world).count(), 0);
        assert_eq!(world.query::<&EnvironmentMapLight>().iter(world).count(), 0);
    }

    #[test]
    fn test_good_assets_load_once_and_build_the_scene() {
        let mut app = loader_app(&[
            (AssetKind::EnvironmentMap.path(), b"float".as_slice()),
            (AssetKind::Model.path(), ONE_NODE_GLTF.as_bytes()),
        ]);
        run_until_reported(&mut app);

        for kind in AssetKind::ALL {
            assert_eq!(successes(&app, kind), 1, "{kind:?}");
            assert!(failures(&app, kind).is_empty(), "{kind:?}");
        }
        assert_eq!(app.world().resource::<Received>().0.len(), 2);

        let assets = app.world().resource::<SceneAssets>();
        assert!(assets.environment_source.is_none());
        let cubemap = assets
            .environment_cubemap
            .clone()
            .expect("cubemap stored");
        let baked = app
            .world()
            .resource::<Assets<Image>>()
            .get(&cubemap)
            .expect("cubemap asset exists");
        assert_eq!(baked.texture_descriptor.size.depth_or_array_layers, 6);
        assert_eq!(baked.texture_descriptor.size.width, CUBEMAP_FACE_SIZE);

        let world = app.world_mut();
        let lights = world
            .query_filtered::<&EnvironmentMapLight, With<SceneCamera>>()
            .iter(world)
            .count();
        assert_eq!(lights, 1);
        let mut models = world.query_filtered::<(&Name, &Transform), With<CastleModel>>();
        let (name, transform) = models.single(world);
        assert_eq!(name.as_str(), MODEL_NAME);
        assert_eq!(*transform, castle_transform());
    }
}
