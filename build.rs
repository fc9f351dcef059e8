use std::env;
use std::fs;
use std::path::Path;

/// Claves que `config.rs` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "GOOGLE_MAPS_MAP_ID",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "AUTOCOMPLETE_COUNTRY",
    "RIVE_SRC",
    "RIVE_STATE_MACHINE",
    "BIND_DELAY_MS",
    "CANVAS_POLL_INTERVAL_MS",
    "CANVAS_WAIT_TIMEOUT_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No hay .env, se usan los valores por defecto (ver .env.example)");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=Clave desconocida en .env: {}", key);
                continue;
            }

            // El entorno del proceso tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
