//! Sample `project.godot` contents.

/// A project file as the Godot 4 editor writes it, with multi-line input maps,
/// comments and sections the generator ignores.
pub const PROJECT_GODOT: &str = r##"; Engine configuration file.
; It's best edited using the editor UI and not directly,
; since the parameters that go here are not all obvious.

config_version=5

[application]

config/name="Dungeon Crawl"
run/main_scene="res://scenes/main.tscn"
config/features=PackedStringArray("4.2", "C#", "Forward Plus")

[input]

move_left={
"deadzone": 0.5,
"events": [Object(InputEventKey,"resource_local_to_scene":false,"resource_name":"","device":-1,"window_id":0,"alt_pressed":false,"shift_pressed":false,"ctrl_pressed":false,"meta_pressed":false,"pressed":false,"keycode":0,"physical_keycode":65,"key_label":0,"unicode":97,"echo":false,"script":null)
]
}
move_right={
"deadzone": 0.5,
"events": []
}
jump={
"deadzone": 0.5,
"events": []
}
use_item_2={
"deadzone": 0.5,
"events": []
}
"ui-pause"={
"deadzone": 0.5,
"events": []
}

[layer_names]

2d_render/layer_1="background"
2d_physics/layer_1="world"
2d_physics/layer_2="player"
2d_physics/layer_3="self"
2d_physics/layer_5="enemies"
2d_navigation/layer_1="ground"
3d_render/layer_3="sky_box"
3d_physics/layer_5="enemies"
3d_navigation/layer_2="flying_units"
2d_avoidance/layer_1="crowd"

[rendering]

textures/canvas_textures/default_texture_filter=0
"##;

/// Input actions of [`PROJECT_GODOT`] that become constants, in file order.
pub const PROJECT_INPUTS: [&str; 4] = ["move_left", "move_right", "jump", "use_item_2"];
