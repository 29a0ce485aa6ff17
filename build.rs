use std::env;
use std::fs;

fn main() {
    // 版本号以 VERSION 文件为准，缺失时回退到 Cargo.toml 中的版本
    let version = fs::read_to_string("VERSION")
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap_or_default());

    println!("cargo:rustc-env=APP_VERSION={}", version);

    println!("cargo:rerun-if-changed=VERSION");
    // 内置课文数据在 release 构建时嵌入二进制
    println!("cargo:rerun-if-changed=assets/lessons.json");
}
