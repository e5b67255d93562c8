use std::env;
use std::fs;
use std::path::Path;

/// Кладёт config.toml из корня workspace рядом с бинарником сервера,
/// где его ищет `load_config()`.
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let profile = env::var("PROFILE").unwrap();

    // OUT_DIR: target/<profile>/build/orgchart-backend-xxx/out
    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=target/{} not found above OUT_DIR, config.toml not copied", profile);
        return;
    };

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let Some(workspace_root) = Path::new(&manifest_dir).ancestors().nth(2) else {
        return;
    };

    let source = workspace_root.join("config.toml");
    if !source.exists() {
        println!("cargo:warning=No config.toml in workspace root, embedded defaults will be used");
        return;
    }

    let dest = target_dir.join("config.toml");
    fs::copy(&source, &dest).unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
}
