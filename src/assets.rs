use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy_egui::{egui, EguiUserTextures};
use std::path::{Path, PathBuf};

use crate::constants;
use crate::drone::DroneId;

/// Directory images are looked up in, relative to the working directory.
const ASSETS_DIR: &str = "assets";
/// Generic image used when a drone has no dedicated file.
const FALLBACK_DRONE_IMAGE: &str = "drone.png";
/// Preferred and legacy header logo files, in lookup order.
const LOGO_FILES: [&str; 2] = ["manas-full-white.png", "logo.png"];

/// Egui textures for the header logo and the drone cards, pre-scaled to
/// their display height. `None` means the file was missing or undecodable
/// and the panel falls back to its textual placeholder.
#[derive(Resource, Default)]
pub struct UiImages {
    pub logo: Option<(egui::TextureId, egui::Vec2)>,
    drones: [Option<(egui::TextureId, egui::Vec2)>; 2],
}

impl UiImages {
    pub fn drone(&self, id: DroneId) -> Option<(egui::TextureId, egui::Vec2)> {
        self.drones[id.index()]
    }
}

/// Decode the card and logo images synchronously at startup and register
/// them as egui textures. Lookup is a plain existence check with per-drone
/// fallback to the generic image.
pub fn setup_ui_images(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut egui_textures: ResMut<EguiUserTextures>,
) {
    let assets = PathBuf::from(ASSETS_DIR);

    let logo = LOGO_FILES.iter().find_map(|file| {
        load_texture(
            &assets.join(file),
            constants::LOGO_HEIGHT,
            &mut images,
            &mut egui_textures,
        )
    });
    if logo.is_none() {
        info!("No logo image found under {}/, using text fallback", ASSETS_DIR);
    }

    let mut drones = [None, None];
    for id in DroneId::ALL {
        let preferred = assets.join(id.image_file());
        let path = if preferred.exists() {
            preferred
        } else {
            assets.join(FALLBACK_DRONE_IMAGE)
        };
        drones[id.index()] = load_texture(
            &path,
            constants::CARD_IMAGE_HEIGHT,
            &mut images,
            &mut egui_textures,
        );
    }

    commands.insert_resource(UiImages { logo, drones });
}

/// Decode one image file and register it as an egui texture, returning the
/// texture id and its size scaled to `display_height`. Missing or
/// undecodable files yield `None`.
fn load_texture(
    path: &Path,
    display_height: f32,
    images: &mut Assets<Image>,
    egui_textures: &mut EguiUserTextures,
) -> Option<(egui::TextureId, egui::Vec2)> {
    if !path.exists() {
        return None;
    }

    let decoded = match image::open(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!("Failed to decode {:?}: {}", path, e);
            return None;
        }
    };

    let (width, height) = (decoded.width() as f32, decoded.height() as f32);
    let size = egui::vec2(display_height * width / height, display_height);

    let handle = images.add(Image::from_dynamic(
        decoded,
        true,
        RenderAssetUsages::RENDER_WORLD,
    ));
    Some((egui_textures.add_image(handle), size))
}
