use std::fs;
use std::path::Path;

// Keys read from sentinel_config.h and exported as compile-time env vars.
// The header is git-ignored; endpoints and credentials never live in source.
const CONFIG_KEYS: &[&str] = &[
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "DEVICE_HOSTNAME",
    "DOOR_EVENT_URL",
    "CRASH_NOTIFY_URL",
    "OTA_MANIFEST_URL",
];

fn main() -> anyhow::Result<()> {
    // Necessary for ESP-IDF
    embuild::espidf::sysenv::output();

    let config_path = "sentinel_config.h";
    println!("cargo:rerun-if-changed={config_path}");

    if Path::new(config_path).exists() {
        let contents = fs::read_to_string(config_path)?;
        for key in CONFIG_KEYS {
            let value = contents
                .lines()
                .find(|l| l.contains(&format!("#define {key}")))
                .and_then(|l| l.split('"').nth(1))
                .unwrap_or("");
            println!("cargo:rustc-env={key}={value}");
        }
    } else {
        for key in CONFIG_KEYS {
            println!("cargo:rustc-env={key}=");
        }
        println!(
            "cargo:warning={config_path} not found! Copy sentinel_config.h.example to {config_path} and add your credentials."
        );
    }

    Ok(())
}
