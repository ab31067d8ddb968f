use std::thread;

use godot_utils_core::layer::{Dimension, LayerCategory, aggregate, extract_layers};
use godot_utils_core::pipeline::{InputPipeline, LayerPipeline, Pipeline};
use godot_utils_core::section::{self, Section};
use godot_utils_core::{Cancellation, GeneratedUnit, GeneratorConfig, generate};
use hamcrest2::assert_that;
use hamcrest2::prelude::*;
use test_support::fixtures::{PROJECT_GODOT, PROJECT_INPUTS};
use test_support::{declares, ok_or_panic};

fn generate_fixture() -> Vec<GeneratedUnit> {
    ok_or_panic! { generate(PROJECT_GODOT, &GeneratorConfig::default(), &Cancellation::never()) }
}

fn unit<'a>(units: &'a [GeneratedUnit], name: &str) -> &'a str {
    &units
        .iter()
        .find(|unit| unit.name == name)
        .unwrap_or_else(|| panic!("no unit named {name}"))
        .source
}

#[test]
fn input_names_from_project() {
    let units = generate_fixture();
    assert_that!(
        unit(&units, "input_name.rs"),
        declares()
            .with_lines(&[
                "pub mod input_name {",
                "pub const MoveLeft: &str = \"move_left\";",
                "pub const MoveRight: &str = \"move_right\";",
                "pub const Jump: &str = \"jump\";",
                "pub const UseItem2: &str = \"use_item_2\";",
                "}",
            ])
            .with_line_n("pub const [..]", PROJECT_INPUTS.len())
            .without_line("[..]deadzone[..]")
            .without_line("[..]ui-pause[..]")
    );
}

#[test]
fn layer_masks_from_project() {
    let units = generate_fixture();
    assert_that!(
        unit(&units, "layer.rs"),
        declares()
            .with_lines(&[
                "pub mod layer {",
                "pub mod Render2D {",
                "pub const Background: u32 = 1 << 0;",
                "pub mod Physics2D {",
                "pub const World: u32 = 1 << 0;",
                "pub const Player: u32 = 1 << 1;",
                "pub const Enemies: u32 = 1 << 4;",
                "pub mod Navigation2D {",
                "pub const Ground: u32 = 1 << 0;",
                "pub mod Render3D {",
                "pub const SkyBox: u32 = 1 << 2;",
                "pub mod Physics3D {",
                "pub const Enemies: u32 = 1 << 4;",
                "pub mod Navigation3D {",
                "pub const FlyingUnits: u32 = 1 << 1;",
            ])
            .without_line("[..]Crowd[..]")
            .without_line("pub const Self[..]")
    );
}

#[test]
fn extension_traits_from_project() {
    let units = generate_fixture();
    assert_that!(
        unit(&units, "collision_object3d_extensions.rs"),
        declares().with_lines(&[
            "pub trait CollisionObject3DExtensions {",
            "fn collision_layer(&self) -> u32;",
            "fn collision_mask(&self) -> u32;",
            "fn has_collision_layer_enemies(&self) -> bool {",
            "(self.collision_layer() & layer::Physics3D::Enemies) != 0",
            "fn has_collision_mask_enemies(&self) -> bool {",
        ])
    );
    assert_that!(
        unit(&units, "navigation_agent3d_extensions.rs"),
        declares().with_lines(&[
            "pub trait NavigationAgent3DExtensions {",
            "fn has_navigation_layers_flying_units(&self) -> bool {",
            "(self.navigation_layers() & layer::Navigation3D::FlyingUnits) != 0",
        ])
    );
    assert_that!(
        unit(&units, "collision_object2d_extensions.rs"),
        declares()
            .with_line_n("fn has_collision_layer_[..]", 3)
            .without_line("[..]_self(&self)[..]")
    );
    assert_that!(
        unit(&units, "visual_instance2d_extensions.rs"),
        declares().with_line_n("fn has_layers_[..]", 1)
    );
}

#[test]
fn generation_is_deterministic() {
    assert_eq!(generate_fixture(), generate_fixture());
}

#[test]
fn project_without_consumed_sections() {
    let units = ok_or_panic! {
        generate("[application]\nconfig/name=\"Empty\"\n", &GeneratorConfig::default(), &Cancellation::never())
    };
    assert!(units.is_empty());
}

#[test]
fn unparseable_lines_are_skipped_by_both_pipelines() {
    let text = "[input]\nfoo_bar\n[layer_names]\nfoo_bar\n";
    let units = ok_or_panic! { generate(text, &GeneratorConfig::default(), &Cancellation::never()) };

    assert_that!(unit(&units, "input_name.rs"), declares().with_line_n("pub const [..]", 0));
    assert_that!(unit(&units, "layer.rs"), declares().with_line_n("pub const [..]", 0));
}

#[test]
fn fixture_layers_partition() {
    let sections = section::parse(PROJECT_GODOT);
    let layers = section::find(&sections, "layer_names").unwrap();
    let aggregates = aggregate(extract_layers(layers));

    let physics_2d: Vec<(&str, u32)> = aggregates
        .get(Dimension::Two)
        .category(LayerCategory::Physics)
        .iter()
        .map(|record| (record.generated_name.as_str(), record.shift))
        .collect();
    assert_eq!(physics_2d, vec![("World", 0), ("Player", 1), ("Enemies", 4)]);
    assert!(aggregates.three_d.render.iter().all(|r| r.dimension == Dimension::Three));
}

#[test]
fn pipelines_share_sections_across_threads() {
    fn assert_shareable<T: Send + Sync>() {}
    assert_shareable::<Section>();

    let config = GeneratorConfig::default();
    let sections = section::parse(PROJECT_GODOT);
    let cancel = Cancellation::never();

    let (inputs, layers) = thread::scope(|scope| {
        let inputs = scope.spawn(|| InputPipeline::new(&config).run(&sections, &cancel));
        let layers = scope.spawn(|| LayerPipeline::new(&config).run(&sections, &cancel));
        (inputs.join().unwrap(), layers.join().unwrap())
    });

    let mut units = ok_or_panic! { inputs };
    units.extend(ok_or_panic! { layers });
    assert_eq!(units, generate_fixture());
}
