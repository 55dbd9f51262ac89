use std::path::Path;
use std::{env, fs};

use const_gen::*;
use gcode_music_config::{MusicConstantsConfig, MusicTomlConfig};

fn main() {
    // Ensure build.rs is re-run when files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MUSIC_TOML_PATH");

    // Read music.toml if it's present
    let user_toml = if let Ok(toml_path) = env::var("MUSIC_TOML_PATH") {
        println!("cargo:rerun-if-changed={toml_path}");
        MusicTomlConfig::from_path(&toml_path).unwrap_or_else(|e| panic!("❌ Invalid MUSIC_TOML_PATH file: {e}"))
    } else {
        MusicTomlConfig::default()
    };

    let constants = get_constants_str(user_toml.music);

    // Write to constants.rs file
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("constants.rs");
    fs::write(&dest_path, constants).expect("Failed to write constants.rs file");
}

fn get_constants_str(constants: MusicConstantsConfig) -> String {
    let constant_strs = vec![
        const_declaration!(pub PRESET_SLOT_NUM = constants.preset_slot_num),
        const_declaration!(pub PRESET_SLOT_SIZE = constants.preset_slot_size),
        const_declaration!(pub(crate) CUSTOM_POOL_ENABLED = constants.custom_pool),
        const_declaration!(pub CUSTOM_SLOT_NUM = constants.custom_slot_num),
        const_declaration!(pub CUSTOM_SLOT_SIZE = constants.custom_slot_size),
        const_declaration!(pub PRESET_BASE_CODE = constants.preset_base_code),
        const_declaration!(pub CUSTOM_BASE_CODE = constants.custom_base_code),
        const_declaration!(pub MACRO_CODE_SPAN = constants.code_span),
        const_declaration!(pub COMMAND_CHANNEL_SIZE = constants.command_channel_size),
        const_declaration!(pub COMMAND_LINE_SIZE = constants.command_line_size),
        const_declaration!(pub INJECTED_BUFFER_SIZE = constants.injected_buffer_size),
    ];

    constant_strs
        .into_iter()
        .map(|s| "#[allow(clippy::redundant_static_lifetimes)]\n".to_owned() + s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
