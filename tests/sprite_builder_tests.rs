//! End-to-end sprite builds against in-memory art
//!
//! These tests drive [`SpriteBuilder`] through the full pipeline (resolve,
//! egg, item, shiny) and compare the output with compositions built by hand.

use image::{Rgba, RgbaImage};
use pokesprite::art::{ArtSet, BoxArt, CompactArt, SHINY_SQUARE, SHINY_STAR};
use pokesprite::assets::AssetRegistry;
use pokesprite::builder::{SpriteBuilder, EGG_UNDERLAYER_OPACITY, SHINY_OPACITY};
use pokesprite::composition::{layer, layer_faded};
use pokesprite::config::DisplayConfig;
use pokesprite::effects::scale_opacity;
use pokesprite::entity::{EntityContext, GameVersion, Shiny, SpriteRequest};
use pokesprite::resolve::{totem_glow, ResolutionOutcome, Scheme};

// =============================================================================
// Fixtures
// =============================================================================

/// A sprite-sized image with a distinct opaque block so layers are visible.
fn art(art: &impl ArtSet, v: u8) -> RgbaImage {
    let mut img = RgbaImage::new(art.width(), art.height());
    for y in 10..30 {
        for x in 20..40 {
            img.put_pixel(x, y, Rgba([v, v / 2, v / 3, 255]));
        }
    }
    img
}

fn icon(size: u32, v: u8) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([v, v, v, 255]))
}

fn box_assets() -> AssetRegistry {
    AssetRegistry::new()
        .with("b_1", art(&BoxArt, 90))
        .with("b_25", art(&BoxArt, 120))
        .with("b_unknown", icon(68, 5))
        .with("b_0", art(&BoxArt, 1))
        .with("b_egg", icon(16, 200))
        .with("b_490_e", icon(16, 210))
        .with("bitem_1", icon(24, 150))
        .with(SHINY_STAR, icon(8, 250))
        .with(SHINY_SQUARE, icon(8, 240))
}

fn box_builder() -> SpriteBuilder<BoxArt, AssetRegistry> {
    SpriteBuilder::new(BoxArt, box_assets())
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_unregistered_species_gets_unknown_placeholder() {
    let assets = AssetRegistry::new().with("a_unknown", RgbaImage::new(40, 30));
    let builder = SpriteBuilder::new(CompactArt, assets);

    let outcome = builder.resolve(&SpriteRequest::new(65535));
    assert!(matches!(outcome, ResolutionOutcome::FallbackUnknown { .. }));

    let sprite = builder.build(&SpriteRequest::new(65535));
    assert_eq!(sprite.dimensions(), (CompactArt.width(), CompactArt.height()));
}

#[test]
fn test_shiny_retry_keeps_marker() {
    let builder = box_builder();
    let req = SpriteRequest::new(1).with_shiny(Shiny::Always);

    // The base is the plain art, found on the second try
    match builder.resolve(&req) {
        ResolutionOutcome::FallbackNoShiny { image } => assert_eq!(image, art(&BoxArt, 90)),
        other => panic!("expected shiny retry, got {:?}", other),
    }

    // The marker is still applied by the builder
    let expected = layer_faded(&art(&BoxArt, 90), &icon(8, 250), 0, 0, SHINY_OPACITY);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_form_without_art_is_marked_unknown() {
    let builder = box_builder();
    let req = SpriteRequest::new(25).with_form(7);

    let expected = layer_faded(&art(&BoxArt, 120), &icon(68, 5), 0, 0, 0.5);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_deoxys_form_follows_game() {
    let assets = AssetRegistry::new().with("b_386-3", art(&BoxArt, 33));
    let mut builder = SpriteBuilder::new(BoxArt, assets);
    builder.initialize(GameVersion::Emerald);

    let req = SpriteRequest::new(386).with_context(EntityContext::Gen3);
    match builder.resolve(&req) {
        ResolutionOutcome::Resolved { image, via: Scheme::Primary } => {
            assert_eq!(image, art(&BoxArt, 33))
        }
        other => panic!("expected Emerald Deoxys to resolve, got {:?}", other),
    }
}

#[test]
fn test_totem_form_glows() {
    let base = art(&BoxArt, 80);
    let assets = AssetRegistry::new().with("b_778", base.clone());
    let builder = SpriteBuilder::new(BoxArt, assets);

    let req = SpriteRequest::new(778).with_form(2).with_context(EntityContext::Gen7);
    assert_eq!(builder.build(&req), totem_glow(&base));
}

// =============================================================================
// Overlays
// =============================================================================

#[test]
fn test_egg_as_item_matches_manual_layer() {
    let builder = box_builder();
    assert!(builder.config().egg_as_item);

    let req = SpriteRequest::new(1).with_egg(true);
    let (x, y) = BoxArt.egg_item_shift();
    let expected = layer(&art(&BoxArt, 90), &icon(16, 200), x, y);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_manaphy_egg() {
    let assets = box_assets().with("b_490", art(&BoxArt, 70));
    let builder = SpriteBuilder::new(BoxArt, assets);

    let req = SpriteRequest::new(490).with_egg(true);
    let expected = layer(&art(&BoxArt, 70), &icon(16, 210), 18, 1);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_egg_with_item_fades_species() {
    let builder = box_builder();
    let req = SpriteRequest::new(1).with_egg(true).with_item(1);

    let faded = layer(&scale_opacity(&art(&BoxArt, 90), EGG_UNDERLAYER_OPACITY), &icon(16, 200), 0, 0);
    // x = 68 - 24 - (32 - 24) / 4 - 2 = 40, y = 56 - 24 - 2 = 30
    let expected = layer(&faded, &icon(24, 150), 40, 30);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_egg_fade_when_setting_disabled() {
    let mut builder = box_builder();
    let mut config = DisplayConfig::default();
    config.egg_as_item = false;
    builder.apply_settings(config);

    let req = SpriteRequest::new(1).with_egg(true);
    let expected = layer(&scale_opacity(&art(&BoxArt, 90), EGG_UNDERLAYER_OPACITY), &icon(16, 200), 0, 0);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_square_marker_downgraded_outside_gen8() {
    let assets = box_assets().with("b_1s", art(&BoxArt, 95));
    let builder = SpriteBuilder::new(BoxArt, assets);

    let req = SpriteRequest::new(1).with_shiny(Shiny::AlwaysSquare).with_context(EntityContext::Gen4);
    let expected = layer_faded(&art(&BoxArt, 95), &icon(8, 250), 0, 0, SHINY_OPACITY);
    assert_eq!(builder.build(&req), expected);

    let req = req.with_context(EntityContext::Gen8);
    let expected = layer_faded(&art(&BoxArt, 95), &icon(8, 240), 0, 0, SHINY_OPACITY);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_overlay_order_egg_item_shiny() {
    let builder = box_builder();
    let req = SpriteRequest::new(1).with_egg(true).with_item(1).with_shiny(Shiny::Always);

    let base = art(&BoxArt, 90);
    let egged = layer(&scale_opacity(&base, EGG_UNDERLAYER_OPACITY), &icon(16, 200), 0, 0);
    let itemed = layer(&egged, &icon(24, 150), 40, 30);
    let expected = layer_faded(&itemed, &icon(8, 250), 0, 0, SHINY_OPACITY);
    assert_eq!(builder.build(&req), expected);
}

#[test]
fn test_empty_slot() {
    let builder = box_builder();
    let req = SpriteRequest::new(0).with_item(1).with_shiny(Shiny::Always);
    assert_eq!(builder.build(&req), art(&BoxArt, 1));
}

#[test]
fn test_build_all_matches_build() {
    let builder = box_builder();
    let requests = vec![
        SpriteRequest::new(1),
        SpriteRequest::new(25).with_item(1),
        SpriteRequest::new(0),
        SpriteRequest::new(1).with_egg(true).with_shiny(Shiny::Always),
    ];

    let batch = builder.build_all(&requests);
    assert_eq!(batch.len(), requests.len());
    for (request, sprite) in requests.iter().zip(&batch) {
        assert_eq!(sprite, &builder.build(request));
    }
}
